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

//! Value-format helpers for structured log fields.

use crate::filter::AuthorPubkey;
use crate::relay::RelayUrl;

pub const NONE: &str = "none";

/// Width of the abbreviated author key printed in log lines.
pub const AUTHOR_PREFIX_LEN: usize = 8;

/// Shortens a hex key for logs; keys at or under the prefix length are printed whole.
pub fn format_author(author: &AuthorPubkey) -> String {
    let hex = author.as_str();
    match hex.get(..AUTHOR_PREFIX_LEN) {
        Some(prefix) if hex.len() > AUTHOR_PREFIX_LEN => format!("{prefix}…"),
        _ => hex.to_string(),
    }
}

pub fn format_relays<'a>(relays: impl IntoIterator<Item = &'a RelayUrl>) -> String {
    let mut urls: Vec<&str> = relays.into_iter().map(RelayUrl::as_str).collect();
    if urls.is_empty() {
        return NONE.to_string();
    }
    urls.sort_unstable();
    urls.join(",")
}

#[cfg(test)]
mod tests {
    use super::{format_author, format_relays, NONE};
    use crate::filter::AuthorPubkey;
    use crate::relay::RelayUrl;

    #[test]
    fn format_author_abbreviates_long_keys() {
        let author = AuthorPubkey::from(
            "3bf0c63fcb93463407af97a5e5ee64fa883d107ef9e558472c4eb9aaaefa459d",
        );

        assert_eq!(format_author(&author), "3bf0c63f…");
        assert_eq!(format_author(&AuthorPubkey::from("abc")), "abc");
    }

    #[test]
    fn format_relays_is_sorted_and_falls_back_when_empty() {
        let relays = [RelayUrl::from("wss://b"), RelayUrl::from("wss://a")];

        assert_eq!(format_relays(&relays), "wss://a,wss://b");
        assert_eq!(format_relays(&Vec::<RelayUrl>::new()), NONE);
    }
}
