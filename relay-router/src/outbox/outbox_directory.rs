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

//! Versioned outbox directory shared between refresh and routing paths.

use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::SystemTime;
use tracing::{debug, warn};

use crate::error::RouterResult;
use crate::filter::AuthorPubkey;
use crate::observability::events;
use crate::outbox::outbox_cache::OutboxCache;
use crate::outbox::{OutboxProvider, OutboxSnapshot, OutboxSyncHealth, WriteRelayLookup};
use crate::relay::RelayUrl;

const COMPONENT: &str = "outbox_directory";

struct OutboxDirectorySnapshot {
    version: u64,
    cache: OutboxCache,
}

#[derive(Clone)]
/// Write-relay tracker facade over an atomically swapped outbox cache.
///
/// Readers never block: each lookup works against whichever snapshot was current when
/// it started. A failed rebuild leaves the previous snapshot in place.
///
/// # Examples
///
/// ```
/// use relay_router::{AuthorPubkey, OutboxDirectory, OutboxEntry, OutboxSnapshot, RelayUrl};
/// use relay_router::WriteRelayLookup;
///
/// let directory = OutboxDirectory::empty();
/// directory
///     .apply_snapshot(OutboxSnapshot {
///         entries: vec![OutboxEntry {
///             author: AuthorPubkey::from("a1"),
///             write_relays: vec![RelayUrl::from("wss://write.example")],
///         }],
///     })
///     .unwrap();
///
/// assert_eq!(directory.current_version(), 1);
/// assert!(directory.write_relays(&AuthorPubkey::from("a1")).is_some());
/// ```
pub struct OutboxDirectory {
    snapshot: Arc<ArcSwap<OutboxDirectorySnapshot>>,
    next_version: Arc<AtomicU64>,
    health: Arc<ArcSwap<OutboxSyncHealth>>,
}

impl OutboxDirectory {
    fn from_cache(version: u64, cache: OutboxCache) -> Self {
        Self {
            snapshot: Arc::new(ArcSwap::from_pointee(OutboxDirectorySnapshot {
                version,
                cache,
            })),
            next_version: Arc::new(AtomicU64::new(version + 1)),
            health: Arc::new(ArcSwap::from_pointee(OutboxSyncHealth::default())),
        }
    }

    /// Creates a directory with no tracked authors.
    pub fn empty() -> Self {
        Self::from_cache(0, OutboxCache::default())
    }

    /// Atomically applies one fetched outbox snapshot.
    pub fn apply_snapshot(&self, snapshot: OutboxSnapshot) -> RouterResult<()> {
        let next_cache = match OutboxCache::new(snapshot) {
            Ok(cache) => cache,
            Err(err) => {
                warn!(
                    event = events::OUTBOX_SNAPSHOT_REBUILD_FAILED,
                    component = COMPONENT,
                    kept_version = self.current_version(),
                    err = %err,
                    "outbox snapshot rejected, keeping previous cache"
                );
                return Err(err);
            }
        };
        let author_count = next_cache.author_count();
        let next_version = self.next_version.fetch_add(1, Ordering::Relaxed);
        self.snapshot.store(Arc::new(OutboxDirectorySnapshot {
            version: next_version,
            cache: next_cache,
        }));
        debug!(
            event = events::OUTBOX_SNAPSHOT_REBUILD_OK,
            component = COMPONENT,
            snapshot_version = next_version,
            author_count,
            "applied outbox snapshot"
        );
        Ok(())
    }

    /// Fetches from `provider` and applies the result, recording sync health.
    pub fn refresh(&self, provider: &dyn OutboxProvider) -> OutboxSyncHealth {
        let attempt_at = SystemTime::now();
        let result = provider
            .fetch_outbox()
            .and_then(|snapshot| self.apply_snapshot(snapshot));

        let previous = self.health.load_full();
        let current = self.snapshot.load();
        let health = match result {
            Ok(()) => OutboxSyncHealth {
                last_attempt_at: Some(attempt_at),
                last_success_at: Some(attempt_at),
                last_attempt_succeeded: Some(true),
                snapshot_version: current.version,
                author_count: current.cache.author_count(),
                last_error: None,
            },
            Err(err) => OutboxSyncHealth {
                last_attempt_at: Some(attempt_at),
                last_success_at: previous.last_success_at,
                last_attempt_succeeded: Some(false),
                snapshot_version: current.version,
                author_count: current.cache.author_count(),
                last_error: Some(err.to_string()),
            },
        };

        self.health.store(Arc::new(health.clone()));
        health
    }

    /// Health of the most recent [`refresh`][Self::refresh] call.
    pub fn sync_health(&self) -> OutboxSyncHealth {
        self.health.load_full().as_ref().clone()
    }

    pub fn current_version(&self) -> u64 {
        self.snapshot.load().version
    }

    /// Looks up write relays and returns the snapshot version used.
    pub fn write_relays_with_version(
        &self,
        author: &AuthorPubkey,
    ) -> (u64, Option<HashSet<RelayUrl>>) {
        let snapshot = self.snapshot.load();
        (snapshot.version, snapshot.cache.fetch_write_relays(author))
    }
}

impl WriteRelayLookup for OutboxDirectory {
    fn write_relays(&self, author: &AuthorPubkey) -> Option<HashSet<RelayUrl>> {
        self.snapshot.load().cache.fetch_write_relays(author)
    }
}
