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

//! Public sync-health metadata for outbox refresh attempts.

use std::time::SystemTime;

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OutboxSyncHealth {
    pub last_attempt_at: Option<SystemTime>,
    pub last_success_at: Option<SystemTime>,
    pub last_attempt_succeeded: Option<bool>,
    pub snapshot_version: u64,
    pub author_count: usize,
    pub last_error: Option<String>,
}
