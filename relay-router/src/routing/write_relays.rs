/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Write-relay lookup for a single author.

use std::collections::HashSet;

use crate::filter::AuthorPubkey;
use crate::relay::RelayUrl;
use crate::session::RoutingSession;

/// Returns the author's known write relays.
///
/// `None` both when the session has no tracker and when the tracker does not know the
/// author. Callers treat the two identically.
pub fn write_relays_for(
    session: &RoutingSession<'_>,
    author: &AuthorPubkey,
) -> Option<HashSet<RelayUrl>> {
    session.outbox()?.write_relays(author)
}
