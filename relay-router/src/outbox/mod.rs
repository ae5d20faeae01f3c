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

//! Outbox (write-relay) tracking surface consumed by the router.
//!
//! The router only ever asks one question of a tracker: which relays does this author
//! write to? [`WriteRelayLookup`] is that question. [`OutboxDirectory`] is the provided
//! tracker, refreshed from any [`OutboxProvider`].

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use crate::error::RouterResult;
use crate::filter::AuthorPubkey;
use crate::relay::RelayUrl;

pub(crate) mod outbox_cache;
mod outbox_directory;
mod outbox_sync_health;

pub use outbox_directory::OutboxDirectory;
pub use outbox_sync_health::OutboxSyncHealth;

/// Known write relays for a single author.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutboxItem {
    pub write_relays: HashSet<RelayUrl>,
}

impl OutboxItem {
    pub fn new(write_relays: impl IntoIterator<Item = RelayUrl>) -> Self {
        Self {
            write_relays: write_relays.into_iter().collect(),
        }
    }
}

/// One raw row as returned by an [`OutboxProvider`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutboxEntry {
    pub author: AuthorPubkey,
    pub write_relays: Vec<RelayUrl>,
}

/// Everything a provider knows at one point in time.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OutboxSnapshot {
    pub entries: Vec<OutboxEntry>,
}

/// Answers "which relays does this author write to?".
///
/// `None` means no actionable data, whether the author is unknown or the tracker has
/// nothing at all. Implementations must be cheap enough to call once per distinct
/// author in a filter batch.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use relay_router::{AuthorPubkey, OutboxItem, RelayUrl, WriteRelayLookup};
///
/// let mut tracker = HashMap::new();
/// tracker.insert(
///     AuthorPubkey::from("a1"),
///     OutboxItem::new([RelayUrl::from("wss://write.example")]),
/// );
///
/// let relays = tracker
///     .write_relays(&AuthorPubkey::from("a1"))
///     .expect("a1 is tracked");
/// assert!(relays.contains(&RelayUrl::from("wss://write.example")));
/// assert!(tracker.write_relays(&AuthorPubkey::from("a2")).is_none());
/// ```
pub trait WriteRelayLookup: Send + Sync {
    fn write_relays(&self, author: &AuthorPubkey) -> Option<HashSet<RelayUrl>>;
}

impl WriteRelayLookup for HashMap<AuthorPubkey, OutboxItem> {
    fn write_relays(&self, author: &AuthorPubkey) -> Option<HashSet<RelayUrl>> {
        self.get(author).map(|item| item.write_relays.clone())
    }
}

/// Source of outbox rows, e.g. a static file or a cache of relay list events.
pub trait OutboxProvider: Send + Sync {
    fn fetch_outbox(&self) -> RouterResult<OutboxSnapshot>;
}
