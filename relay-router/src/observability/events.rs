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

//! Canonical structured event names used across `relay-router`.

// Write-relay resolution events.
pub const WRITE_RELAYS_RESOLVED: &str = "write_relays_resolved";
pub const WRITE_RELAYS_FALLBACK: &str = "write_relays_fallback";
pub const AUTHOR_UNROUTABLE: &str = "author_unroutable";

// Filter sharding events.
pub const FILTER_SHARD_BROADCAST: &str = "filter_shard_broadcast";
pub const FILTER_SHARD_PLAN: &str = "filter_shard_plan";

// Event routing events.
pub const EVENT_RELAY_SET_RESOLVED: &str = "event_relay_set_resolved";

// Outbox cache/directory events.
pub const OUTBOX_CACHE_BUILT: &str = "outbox_cache_built";
pub const OUTBOX_SNAPSHOT_REBUILD_OK: &str = "outbox_snapshot_rebuild_ok";
pub const OUTBOX_SNAPSHOT_REBUILD_FAILED: &str = "outbox_snapshot_rebuild_failed";
