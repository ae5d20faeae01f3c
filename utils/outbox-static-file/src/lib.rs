/********************************************************************************
 * Copyright (c) 2024 Contributors to the Eclipse Foundation
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

use relay_router::{
    AuthorPubkey, OutboxEntry, OutboxProvider, OutboxSnapshot, RelayUrl, RouterError,
    RouterResult,
};
use serde_json::Value;
use std::fs::{self, canonicalize};
use std::path::PathBuf;
use tracing::{debug, warn};

/// Reads author write relays from a JSON file of the form
/// `{ "<author hex>": ["wss://relay", ...] }`.
///
/// The file is re-read on every fetch so edits are picked up by the next refresh.
pub struct OutboxStaticFile {
    static_file: String,
}

impl OutboxStaticFile {
    pub fn new(static_file: String) -> Self {
        OutboxStaticFile { static_file }
    }
}

impl OutboxProvider for OutboxStaticFile {
    fn fetch_outbox(&self) -> RouterResult<OutboxSnapshot> {
        let outbox_json_file = PathBuf::from(self.static_file.clone());
        debug!("outbox_json_file: {outbox_json_file:?}");

        let outbox_json_file = canonicalize(outbox_json_file).map_err(|e| {
            RouterError::OutboxSourceUnavailable(format!("Static outbox file not found: {e:?}"))
        })?;

        let data = fs::read_to_string(outbox_json_file).map_err(|e| {
            RouterError::OutboxSourceUnavailable(format!("Unable to read file: {e:?}"))
        })?;

        let res: Value = serde_json::from_str(&data)?;
        let Some(obj) = res.as_object() else {
            return Err(RouterError::OutboxParse(
                "Expected a JSON object keyed by author".to_string(),
            ));
        };

        let mut entries = Vec::with_capacity(obj.len());
        for (key, value) in obj {
            let Some(array) = value.as_array() else {
                warn!("Skipping author '{key}': write relays are not a list");
                continue;
            };

            let mut write_relays = Vec::with_capacity(array.len());
            for relay in array {
                match relay.as_str() {
                    Some(relay_str) => write_relays.push(RelayUrl::from(relay_str)),
                    None => warn!("Unable to parse relay '{relay}' for author '{key}'"),
                }
            }

            entries.push(OutboxEntry {
                author: AuthorPubkey::from(key.as_str()),
                write_relays,
            });
        }
        debug!("Finished reading outbox with {} authors", entries.len());

        Ok(OutboxSnapshot { entries })
    }
}
