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

//! Destination relays for a single outgoing event.

use std::collections::BTreeSet;
use tracing::debug;

use crate::event::Event;
use crate::observability::events;
use crate::relay::{RelaySet, RelayUrl};
use crate::session::RoutingSession;

const COMPONENT: &str = "event_router";

/// Extra destinations for an event beyond the connected pool.
///
/// This is where relays favored by the event's tagged pubkeys or hashtags plug in.
/// Nothing in this crate implements it; without a strategy the router broadcasts to the
/// pool only.
pub trait EventTargeting: Send + Sync {
    fn relays_for_event(&self, event: &Event) -> Vec<RelayUrl>;
}

/// Returns every relay in the session's pool, plus whatever the session's
/// [`EventTargeting`] strategy adds. A session with neither yields an empty set; a
/// strategy without a pool still contributes its relays.
pub fn calculate_relay_set_for_event(session: &RoutingSession<'_>, event: &Event) -> RelaySet {
    let mut relays: BTreeSet<RelayUrl> = session
        .pool()
        .unwrap_or_default()
        .iter()
        .cloned()
        .collect();
    let pool_count = relays.len();

    if let Some(targeting) = session.event_targeting() {
        relays.extend(targeting.relays_for_event(event));
    }

    debug!(
        event = events::EVENT_RELAY_SET_RESOLVED,
        component = COMPONENT,
        event_id = %event.id,
        pool_count,
        relay_count = relays.len(),
        "resolved relay set for event"
    );

    RelaySet::from_relays(relays)
}

#[cfg(test)]
mod tests {
    use super::{calculate_relay_set_for_event, EventTargeting};
    use crate::event::Event;
    use crate::relay::RelayUrl;
    use crate::session::RoutingSession;

    struct TaggedPubkeyInbox;

    impl EventTargeting for TaggedPubkeyInbox {
        fn relays_for_event(&self, event: &Event) -> Vec<RelayUrl> {
            event
                .tag_values("p")
                .map(|pubkey| RelayUrl::new(format!("wss://inbox.example/{pubkey}")))
                .collect()
        }
    }

    fn pool() -> Vec<RelayUrl> {
        vec![
            RelayUrl::from("wss://r1.example"),
            RelayUrl::from("wss://r2.example"),
        ]
    }

    #[test]
    fn broadcasts_to_every_pooled_relay() {
        let pool = pool();
        let session = RoutingSession::new().with_pool(&pool);

        let relays = calculate_relay_set_for_event(&session, &Event::default());

        assert_eq!(relays.into_vec(), pool);
    }

    #[test]
    fn missing_pool_yields_empty_set() {
        let session = RoutingSession::new();

        let relays = calculate_relay_set_for_event(&session, &Event::default());

        assert!(relays.is_empty());
    }

    #[test]
    fn empty_pool_yields_empty_set() {
        let pool: Vec<RelayUrl> = Vec::new();
        let session = RoutingSession::new().with_pool(&pool);

        assert!(calculate_relay_set_for_event(&session, &Event::default()).is_empty());
    }

    #[test]
    fn targeting_strategy_without_pool_returns_only_its_relays() {
        let strategy = TaggedPubkeyInbox;
        let session = RoutingSession::new().with_event_targeting(&strategy);
        let event = Event {
            tags: vec![vec!["p".to_string(), "pk-1".to_string()]],
            ..Default::default()
        };

        let relays = calculate_relay_set_for_event(&session, &event);

        assert_eq!(
            relays.into_vec(),
            vec![RelayUrl::from("wss://inbox.example/pk-1")]
        );
        assert!(calculate_relay_set_for_event(&session, &Event::default()).is_empty());
    }

    #[test]
    fn targeting_strategy_adds_to_pool_without_duplicates() {
        let pool = pool();
        let strategy = TaggedPubkeyInbox;
        let session = RoutingSession::new()
            .with_pool(&pool)
            .with_event_targeting(&strategy);
        let event = Event {
            tags: vec![vec!["p".to_string(), "pk-1".to_string()]],
            ..Default::default()
        };

        let relays = calculate_relay_set_for_event(&session, &event);

        assert_eq!(relays.len(), 3);
        assert!(relays.contains(&RelayUrl::from("wss://inbox.example/pk-1")));
    }
}
