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

//! Read-only snapshot of everything the router consults for one call.

use crate::event::Event;
use crate::filter::{AuthorPubkey, Filter};
use crate::outbox::WriteRelayLookup;
use crate::relay::{RelaySet, RelayUrl};
use crate::routing::{self, EventTargeting, RelayShards};
use std::collections::HashSet;

///
/// [`RoutingSession`] bundles the relay pool, the outbox tracker, the explicit fallback
/// relays and the optional event targeting strategy a routing call reads from.
///
/// Every part is optional and borrowed. The session is never mutated by the router, so
/// the same session can be shared by concurrent calls as long as the borrowed data
/// itself is not changing underneath.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use relay_router::{AuthorPubkey, Filter, OutboxItem, RelayUrl, RoutingSession};
///
/// let explicit = vec![RelayUrl::from("wss://fallback.example")];
/// let mut tracker = HashMap::new();
/// tracker.insert(
///     AuthorPubkey::from("a1"),
///     OutboxItem::new([RelayUrl::from("wss://write.example")]),
/// );
///
/// let session = RoutingSession::new()
///     .with_explicit_relays(&explicit)
///     .with_outbox(&tracker);
///
/// let shards = session.calculate_relay_sets_for_filters(&[Filter::new().authors(["a1", "a2"])]);
///
/// assert_eq!(
///     shards[&RelayUrl::from("wss://write.example")][0].authors,
///     Some(vec![AuthorPubkey::from("a1")])
/// );
/// assert_eq!(
///     shards[&RelayUrl::from("wss://fallback.example")][0].authors,
///     Some(vec![AuthorPubkey::from("a2")])
/// );
/// ```
#[derive(Clone, Copy, Default)]
pub struct RoutingSession<'a> {
    pool: Option<&'a [RelayUrl]>,
    outbox: Option<&'a dyn WriteRelayLookup>,
    explicit_relays: Option<&'a [RelayUrl]>,
    event_targeting: Option<&'a dyn EventTargeting>,
}

impl<'a> RoutingSession<'a> {
    /// Creates a session with no pool, no tracker and no fallback relays.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool(mut self, pool: &'a [RelayUrl]) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn with_outbox(mut self, outbox: &'a dyn WriteRelayLookup) -> Self {
        self.outbox = Some(outbox);
        self
    }

    pub fn with_explicit_relays(mut self, explicit_relays: &'a [RelayUrl]) -> Self {
        self.explicit_relays = Some(explicit_relays);
        self
    }

    pub fn with_event_targeting(mut self, event_targeting: &'a dyn EventTargeting) -> Self {
        self.event_targeting = Some(event_targeting);
        self
    }

    pub fn pool(&self) -> Option<&'a [RelayUrl]> {
        self.pool
    }

    pub fn outbox(&self) -> Option<&'a dyn WriteRelayLookup> {
        self.outbox
    }

    pub fn explicit_relays(&self) -> Option<&'a [RelayUrl]> {
        self.explicit_relays
    }

    pub fn event_targeting(&self) -> Option<&'a dyn EventTargeting> {
        self.event_targeting
    }

    /// See [`routing::calculate_relay_set_for_event`].
    pub fn calculate_relay_set_for_event(&self, event: &Event) -> RelaySet {
        routing::calculate_relay_set_for_event(self, event)
    }

    /// See [`routing::write_relays_for`].
    pub fn write_relays_for(&self, author: &AuthorPubkey) -> Option<HashSet<RelayUrl>> {
        routing::write_relays_for(self, author)
    }

    /// See [`routing::calculate_relay_sets_for_filters`].
    pub fn calculate_relay_sets_for_filters(&self, filters: &[Filter]) -> RelayShards {
        routing::calculate_relay_sets_for_filters(self, filters)
    }

    /// See [`routing::calculate_relay_sets_for_filter_batches`].
    pub fn calculate_relay_sets_for_filter_batches(&self, filters: &[Filter]) -> RelayShards {
        routing::calculate_relay_sets_for_filter_batches(self, filters)
    }
}
