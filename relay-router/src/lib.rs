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

//! # relay-router
//!
//! `relay-router` decides which relays a client should talk to: where an outgoing event
//! is published, and how a batch of subscription filters is split across relays so each
//! relay is only asked about the authors it is known to serve (the outbox model).
//!
//! All routing is synchronous and side-effect free. The caller hands in a
//! [`RoutingSession`] borrowing the relay pool, a [`WriteRelayLookup`] tracker and the
//! explicit fallback relays; the router never mutates any of them.
//!
//! ## Sharding a filter batch
//!
//! ```
//! use relay_router::{
//!     AuthorPubkey, Filter, OutboxDirectory, OutboxEntry, OutboxSnapshot, RelayUrl,
//!     RoutingSession,
//! };
//!
//! let directory = OutboxDirectory::empty();
//! directory
//!     .apply_snapshot(OutboxSnapshot {
//!         entries: vec![OutboxEntry {
//!             author: AuthorPubkey::from("a1"),
//!             write_relays: vec![RelayUrl::from("wss://write.example")],
//!         }],
//!     })
//!     .unwrap();
//! let explicit = vec![RelayUrl::from("wss://fallback.example")];
//!
//! let session = RoutingSession::new()
//!     .with_outbox(&directory)
//!     .with_explicit_relays(&explicit);
//!
//! let shards = session.calculate_relay_sets_for_filter_batches(&[
//!     Filter::new().authors(["a1", "a2"]).kinds([1]),
//!     Filter::new().kinds([0]),
//! ]);
//!
//! let write_shard = &shards[&RelayUrl::from("wss://write.example")];
//! assert_eq!(write_shard[0].authors, Some(vec![AuthorPubkey::from("a1")]));
//! assert_eq!(write_shard[1], Filter::new().kinds([0]));
//!
//! let fallback_shard = &shards[&RelayUrl::from("wss://fallback.example")];
//! assert_eq!(fallback_shard[0].authors, Some(vec![AuthorPubkey::from("a2")]));
//! ```
//!
//! ## Internal architecture map
//!
//! - Model: relay identity, relay sets, filters, events
//! - Session: read-only, borrowed snapshot of pool, tracker and fallback relays
//! - Outbox: write-relay lookup trait, provider trait, versioned directory
//! - Routing: event relay set, write-relay lookup, filter sharding
//!
//! ## Observability model
//!
//! The workspace uses `tracing` for logs/events.
//! Library code emits events and does not unconditionally initialize a global
//! subscriber. Binaries/tests are responsible for one-time
//! `tracing_subscriber` initialization at process boundaries.

mod error;
pub use error::{RouterError, RouterResult};

mod event;
pub use event::Event;

mod filter;
pub use filter::{AuthorPubkey, Filter};

mod relay;
pub use relay::{RelaySet, RelayUrl};

mod outbox;
pub use outbox::{
    OutboxDirectory, OutboxEntry, OutboxItem, OutboxProvider, OutboxSnapshot, OutboxSyncHealth,
    WriteRelayLookup,
};

pub mod routing;
pub use routing::{EventTargeting, RelayShards};

mod session;
pub use session::RoutingSession;

#[doc(hidden)]
pub mod observability;

#[doc(hidden)]
pub mod benchmark_support;
