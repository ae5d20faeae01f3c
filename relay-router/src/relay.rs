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

//! Relay identity and the per-operation relay set container.

use serde::{Deserialize, Serialize};
use std::collections::btree_set;
use std::collections::BTreeSet;
use std::fmt;

/// Connection URL identifying one relay.
///
/// Equality, hashing and ordering are by the URL string. No normalization is applied
/// here; callers are expected to hand in URLs in the form they connect with.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelayUrl(String);

impl RelayUrl {
    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RelayUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RelayUrl {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for RelayUrl {
    fn from(url: String) -> Self {
        Self(url)
    }
}

///
/// [`RelaySet`] groups the relays one publish operation should be delivered to.
///
/// It is built fresh for each call and is not retained by the router.
///
/// # Examples
///
/// ```
/// use relay_router::{RelaySet, RelayUrl};
///
/// let relays = RelaySet::from_relays([
///     RelayUrl::from("wss://relay-b.example"),
///     RelayUrl::from("wss://relay-a.example"),
///     RelayUrl::from("wss://relay-b.example"),
/// ]);
///
/// assert_eq!(relays.len(), 2);
/// assert!(relays.contains(&RelayUrl::from("wss://relay-a.example")));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct RelaySet {
    relays: BTreeSet<RelayUrl>,
}

impl RelaySet {
    pub fn from_relays(relays: impl IntoIterator<Item = RelayUrl>) -> Self {
        Self {
            relays: relays.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.relays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relays.is_empty()
    }

    pub fn contains(&self, relay: &RelayUrl) -> bool {
        self.relays.contains(relay)
    }

    pub fn iter(&self) -> btree_set::Iter<'_, RelayUrl> {
        self.relays.iter()
    }

    pub fn into_vec(self) -> Vec<RelayUrl> {
        self.relays.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a RelaySet {
    type Item = &'a RelayUrl;
    type IntoIter = btree_set::Iter<'a, RelayUrl>;

    fn into_iter(self) -> Self::IntoIter {
        self.relays.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{RelaySet, RelayUrl};

    #[test]
    fn relay_set_dedupes_by_url_identity() {
        let relays = RelaySet::from_relays(vec![
            RelayUrl::from("wss://relay-a.example"),
            RelayUrl::new("wss://relay-a.example".to_string()),
        ]);

        assert_eq!(relays.len(), 1);
    }

    #[test]
    fn relay_urls_differing_only_by_trailing_slash_stay_distinct() {
        let relays = RelaySet::from_relays(vec![
            RelayUrl::from("wss://relay-a.example"),
            RelayUrl::from("wss://relay-a.example/"),
        ]);

        assert_eq!(relays.len(), 2);
    }

    #[test]
    fn relay_url_serializes_as_plain_string() {
        let relay = RelayUrl::from("wss://relay-a.example");

        let json = serde_json::to_string(&relay).expect("relay url should serialize");

        assert_eq!(json, "\"wss://relay-a.example\"");
    }
}
