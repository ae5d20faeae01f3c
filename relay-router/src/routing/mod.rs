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

//! Routing layer: event destination resolution and filter sharding.
//!
//! Encapsulates the pool broadcast used for publishing, the write-relay lookup used for
//! the outbox model, and the author-scoped sharding of subscription filters.
//!
//! ```
//! use relay_router::{Event, Filter, RelayUrl, RoutingSession};
//!
//! let pool = vec![RelayUrl::from("wss://r1.example"), RelayUrl::from("wss://r2.example")];
//! let explicit = vec![RelayUrl::from("wss://r1.example")];
//! let session = RoutingSession::new()
//!     .with_pool(&pool)
//!     .with_explicit_relays(&explicit);
//!
//! // Publishing reaches every pooled relay.
//! assert_eq!(session.calculate_relay_set_for_event(&Event::default()).len(), 2);
//!
//! // Author-agnostic filters go to the explicit relays untouched.
//! let shards = session.calculate_relay_sets_for_filters(&[Filter::new().kinds([1])]);
//! assert_eq!(shards.len(), 1);
//! assert_eq!(shards[&RelayUrl::from("wss://r1.example")], vec![Filter::new().kinds([1])]);
//! ```

mod event_router;
mod filter_sharder;
mod write_relays;

pub use event_router::{calculate_relay_set_for_event, EventTargeting};
pub use filter_sharder::{
    calculate_relay_sets_for_filter_batches, calculate_relay_sets_for_filters, RelayShards,
};
pub use write_relays::write_relays_for;
