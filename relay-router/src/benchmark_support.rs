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

//! Deterministic benchmark fixtures for the Criterion harness.

use std::collections::HashMap;

use crate::filter::{AuthorPubkey, Filter};
use crate::outbox::{OutboxDirectory, OutboxEntry, OutboxItem, OutboxSnapshot};
use crate::relay::RelayUrl;
use crate::routing::RelayShards;
use crate::session::RoutingSession;

const WRITE_RELAYS_PER_AUTHOR: usize = 3;
const AUTHORS_PER_FILTER: usize = 16;

fn author(index: usize) -> AuthorPubkey {
    AuthorPubkey::new(format!("{index:064x}"))
}

fn relay(index: usize) -> RelayUrl {
    RelayUrl::new(format!("wss://relay-{index}.bench"))
}

/// Every `untracked_every`-th author has no outbox record and falls back.
fn outbox_entries(authors: usize, relays: usize, untracked_every: usize) -> Vec<OutboxEntry> {
    (0..authors)
        .filter(|index| untracked_every == 0 || index % untracked_every != 0)
        .map(|index| OutboxEntry {
            author: author(index),
            write_relays: (0..WRITE_RELAYS_PER_AUTHOR)
                .map(|offset| relay((index + offset) % relays.max(1)))
                .collect(),
        })
        .collect()
}

fn filter_batch(authors: usize) -> Vec<Filter> {
    let mut filters: Vec<Filter> = (0..authors)
        .collect::<Vec<_>>()
        .chunks(AUTHORS_PER_FILTER)
        .map(|chunk| {
            Filter::new()
                .authors(chunk.iter().map(|index| author(*index)))
                .kinds([1, 6])
        })
        .collect();
    filters.push(Filter::new().kinds([0]).limit(100));
    filters
}

/// Sharding fixture backed by a plain in-memory tracker.
pub struct FilterShardFixture {
    tracker: HashMap<AuthorPubkey, OutboxItem>,
    explicit_relays: Vec<RelayUrl>,
    filters: Vec<Filter>,
}

impl FilterShardFixture {
    pub fn new(authors: usize, relays: usize) -> Self {
        let tracker = outbox_entries(authors, relays, 4)
            .into_iter()
            .map(|entry| (entry.author, OutboxItem::new(entry.write_relays)))
            .collect();

        Self {
            tracker,
            explicit_relays: vec![relay(relays), relay(relays + 1)],
            filters: filter_batch(authors),
        }
    }

    pub fn shard(&self) -> RelayShards {
        RoutingSession::new()
            .with_outbox(&self.tracker)
            .with_explicit_relays(&self.explicit_relays)
            .calculate_relay_sets_for_filters(&self.filters)
    }

    pub fn shard_filter_count(&self) -> usize {
        self.shard().values().map(Vec::len).sum()
    }
}

/// Sharding fixture backed by the arc-swap outbox directory.
pub struct DirectoryShardFixture {
    directory: OutboxDirectory,
    explicit_relays: Vec<RelayUrl>,
    filters: Vec<Filter>,
}

impl DirectoryShardFixture {
    pub fn new(authors: usize, relays: usize) -> Result<Self, crate::RouterError> {
        let directory = OutboxDirectory::empty();
        directory.apply_snapshot(OutboxSnapshot {
            entries: outbox_entries(authors, relays, 4),
        })?;

        Ok(Self {
            directory,
            explicit_relays: vec![relay(relays)],
            filters: filter_batch(authors),
        })
    }

    pub fn shard_filter_count(&self) -> usize {
        RoutingSession::new()
            .with_outbox(&self.directory)
            .with_explicit_relays(&self.explicit_relays)
            .calculate_relay_sets_for_filters(&self.filters)
            .values()
            .map(Vec::len)
            .sum()
    }
}

/// Author-agnostic batch that takes the explicit-relay broadcast path.
pub fn broadcast_filter_count(relays: usize) -> usize {
    let explicit_relays: Vec<RelayUrl> = (0..relays).map(relay).collect();
    let filters = vec![Filter::new().kinds([1]), Filter::new().kinds([7]).limit(20)];

    RoutingSession::new()
        .with_explicit_relays(&explicit_relays)
        .calculate_relay_sets_for_filters(&filters)
        .values()
        .map(Vec::len)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{broadcast_filter_count, DirectoryShardFixture, FilterShardFixture};

    #[test]
    fn fixtures_produce_non_empty_plans() {
        let fixture = FilterShardFixture::new(64, 8);
        let directory_fixture =
            DirectoryShardFixture::new(64, 8).expect("directory fixture should build");

        assert!(fixture.shard_filter_count() > 0);
        assert!(directory_fixture.shard_filter_count() > 0);
        assert_eq!(broadcast_filter_count(5), 10);
    }

    #[test]
    fn fallback_relays_mirror_each_other() {
        let fixture = FilterShardFixture::new(64, 8);
        let shards = fixture.shard();

        let first = &shards[&fixture.explicit_relays[0]];
        let second = &shards[&fixture.explicit_relays[1]];

        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
