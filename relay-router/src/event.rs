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

//! Outgoing event model as seen by the event router.

use serde::{Deserialize, Serialize};

use crate::filter::AuthorPubkey;

/// A signed event about to be published.
///
/// The router never inspects the signature or content; only the tags are handed to an
/// optional [`EventTargeting`][crate::EventTargeting] strategy.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub pubkey: AuthorPubkey,
    pub created_at: u64,
    pub kind: u16,
    #[serde(default)]
    pub tags: Vec<Vec<String>>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub sig: String,
}

impl Event {
    /// Values of all tags named `name`, e.g. every tagged pubkey for `"p"`.
    pub fn tag_values<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.tags
            .iter()
            .filter(move |tag| tag.first().map(String::as_str) == Some(name))
            .filter_map(|tag| tag.get(1).map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::Event;

    #[test]
    fn default_event_has_no_author_or_tags() {
        let event = Event::default();

        assert!(event.pubkey.is_empty());
        assert_eq!(event.tag_values("p").count(), 0);
    }

    #[test]
    fn missing_optional_fields_deserialize_to_defaults() {
        let event: Event = serde_json::from_str(
            r#"{"id":"e1","pubkey":"pk-1","created_at":1700000000,"kind":1}"#,
        )
        .expect("event should parse");

        assert_eq!(event.pubkey.as_str(), "pk-1");
        assert!(event.tags.is_empty());
        assert!(event.content.is_empty());
    }

    #[test]
    fn tag_values_skip_other_and_truncated_tags() {
        let event = Event {
            tags: vec![
                vec!["p".to_string(), "pk-1".to_string()],
                vec!["t".to_string(), "rust".to_string()],
                vec!["p".to_string()],
                vec!["p".to_string(), "pk-2".to_string(), "wss://hint".to_string()],
            ],
            ..Default::default()
        };

        let tagged: Vec<&str> = event.tag_values("p").collect();

        assert_eq!(tagged, vec!["pk-1", "pk-2"]);
    }
}
