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

//! Subscription filter model and author identities.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Hex-encoded public key of an event author.
///
/// Used purely as a lookup key. Case and format normalization is left to the caller.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorPubkey(String);

impl AuthorPubkey {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for AuthorPubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorPubkey {
    fn from(hex: &str) -> Self {
        Self::new(hex)
    }
}

impl From<String> for AuthorPubkey {
    fn from(hex: String) -> Self {
        Self(hex)
    }
}

/// A subscription query sent to a relay.
///
/// Tag queries (`#e`, `#p`, `#t`, ...) are kept in a flattened map keyed by the
/// `#`-prefixed tag name so they round-trip through the wire format unchanged. Any other
/// unknown key is rejected on deserialization.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Filter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<AuthorPubkey>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kinds: Option<Vec<u16>>,
    #[serde(flatten, deserialize_with = "deserialize_tag_queries")]
    pub tags: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub since: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

/// `#` followed by exactly one ASCII letter.
fn is_tag_query_key(key: &str) -> bool {
    let mut chars = key.chars();
    chars.next() == Some('#')
        && chars.next().is_some_and(|letter| letter.is_ascii_alphabetic())
        && chars.next().is_none()
}

fn deserialize_tag_queries<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let tags = BTreeMap::<String, Vec<String>>::deserialize(deserializer)?;
    if let Some(key) = tags.keys().find(|key| !is_tag_query_key(key)) {
        return Err(D::Error::custom(format!(
            "unknown filter field `{key}`, expected a `#<letter>` tag query"
        )));
    }
    Ok(tags)
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authors<I, A>(mut self, authors: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<AuthorPubkey>,
    {
        self.authors = Some(authors.into_iter().map(Into::into).collect());
        self
    }

    pub fn kinds(mut self, kinds: impl IntoIterator<Item = u16>) -> Self {
        self.kinds = Some(kinds.into_iter().collect());
        self
    }

    /// Adds a single-letter tag query, e.g. `tag('p', [..])` becomes `"#p": [..]`.
    pub fn tag<I, S>(mut self, letter: char, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.insert(
            format!("#{letter}"),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn since(mut self, since: u64) -> Self {
        self.since = Some(since);
        self
    }

    pub fn until(mut self, until: u64) -> Self {
        self.until = Some(until);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns `true` when the filter narrows results to at least one author.
    ///
    /// An explicitly empty author list is treated the same as no author list.
    pub fn has_author_constraint(&self) -> bool {
        self.authors
            .as_ref()
            .is_some_and(|authors| !authors.is_empty())
    }

    /// Returns a copy of this filter with its author list replaced.
    pub fn with_authors(&self, authors: Vec<AuthorPubkey>) -> Filter {
        Filter {
            authors: Some(authors),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorPubkey, Filter};

    #[test]
    fn empty_author_list_is_not_a_constraint() {
        let no_field = Filter::new().kinds([1]);
        let empty_list = Filter::new().kinds([1]).authors(Vec::<AuthorPubkey>::new());
        let constrained = Filter::new().authors(["a1"]);

        assert!(!no_field.has_author_constraint());
        assert!(!empty_list.has_author_constraint());
        assert!(constrained.has_author_constraint());
    }

    #[test]
    fn with_authors_keeps_other_criteria_and_leaves_input_untouched() {
        let original = Filter::new()
            .authors(["a1", "a2"])
            .kinds([1, 7])
            .tag('t', ["rust"])
            .since(10)
            .limit(50);

        let narrowed = original.with_authors(vec![AuthorPubkey::from("a2")]);

        assert_eq!(narrowed.authors, Some(vec![AuthorPubkey::from("a2")]));
        assert_eq!(narrowed.kinds, original.kinds);
        assert_eq!(narrowed.tags, original.tags);
        assert_eq!(narrowed.since, Some(10));
        assert_eq!(narrowed.limit, Some(50));
        assert_eq!(
            original.authors,
            Some(vec![AuthorPubkey::from("a1"), AuthorPubkey::from("a2")])
        );
    }

    #[test]
    fn unknown_non_tag_keys_are_rejected() {
        let unknown_list = serde_json::from_str::<Filter>(r#"{"kinds":[1],"foo":["x"]}"#);
        let unknown_scalar = serde_json::from_str::<Filter>(r#"{"kinds":[1],"foo":3}"#);
        let long_tag = serde_json::from_str::<Filter>(r##"{"#pp":["x"]}"##);

        assert!(unknown_list.is_err());
        assert!(unknown_scalar.is_err());
        assert!(long_tag.is_err());
    }

    #[test]
    fn tag_queries_use_hash_prefixed_wire_keys() {
        let filter: Filter =
            serde_json::from_str(r##"{"kinds":[1],"#p":["abc"],"limit":10}"##)
                .expect("filter should parse");

        assert_eq!(filter.tags.get("#p"), Some(&vec!["abc".to_string()]));
        assert_eq!(filter.limit, Some(10));
        assert!(filter.authors.is_none());

        let json = serde_json::to_value(&filter).expect("filter should serialize");
        assert_eq!(json["#p"][0], "abc");
        assert!(json.get("authors").is_none());
    }
}
