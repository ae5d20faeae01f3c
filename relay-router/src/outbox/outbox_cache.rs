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

//! Author-keyed outbox cache built from a provider snapshot.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::error::{RouterError, RouterResult};
use crate::filter::AuthorPubkey;
use crate::observability::events;
use crate::outbox::{OutboxItem, OutboxSnapshot};
use crate::relay::RelayUrl;

const COMPONENT: &str = "outbox_cache";

#[derive(Default)]
pub(crate) struct OutboxCache {
    outbox_cache_map: HashMap<AuthorPubkey, OutboxItem>,
}

impl OutboxCache {
    pub(crate) fn new(snapshot: OutboxSnapshot) -> RouterResult<Self> {
        let mut outbox_cache_map: HashMap<AuthorPubkey, OutboxItem> = HashMap::new();
        for entry in snapshot.entries {
            if entry.author.is_empty() {
                return Err(RouterError::InvalidOutboxEntry(
                    "Unable to retrieve author".to_string(),
                ));
            }
            if let Some(relay) = entry.write_relays.iter().find(|relay| relay.is_empty()) {
                return Err(RouterError::InvalidOutboxEntry(format!(
                    "Empty relay url '{relay}' for author {}",
                    entry.author
                )));
            }

            outbox_cache_map
                .entry(entry.author)
                .or_default()
                .write_relays
                .extend(entry.write_relays);
        }

        debug!(
            event = events::OUTBOX_CACHE_BUILT,
            component = COMPONENT,
            author_count = outbox_cache_map.len(),
            "built outbox cache"
        );

        Ok(Self { outbox_cache_map })
    }

    pub(crate) fn fetch_write_relays(&self, author: &AuthorPubkey) -> Option<HashSet<RelayUrl>> {
        self.outbox_cache_map
            .get(author)
            .map(|item| item.write_relays.clone())
    }

    pub(crate) fn author_count(&self) -> usize {
        self.outbox_cache_map.len()
    }
}
