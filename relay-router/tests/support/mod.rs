#![allow(dead_code)]

use relay_router::{AuthorPubkey, Filter, OutboxItem, RelayShards, RelayUrl};
use std::collections::HashMap;

pub(crate) const R1: &str = "wss://r1.example";
pub(crate) const R2: &str = "wss://r2.example";
pub(crate) const RW: &str = "wss://write.example";

pub(crate) fn relays(urls: &[&str]) -> Vec<RelayUrl> {
    urls.iter().map(|url| RelayUrl::from(*url)).collect()
}

pub(crate) fn tracker(rows: Vec<(&str, Vec<&str>)>) -> HashMap<AuthorPubkey, OutboxItem> {
    rows.into_iter()
        .map(|(author, urls)| (AuthorPubkey::from(author), OutboxItem::new(relays(&urls))))
        .collect()
}

pub(crate) fn author_filter(authors: &[&str]) -> Filter {
    Filter::new().authors(authors.iter().copied())
}

pub(crate) fn shard<'a>(shards: &'a RelayShards, relay: &str) -> &'a Vec<Filter> {
    shards
        .get(&RelayUrl::from(relay))
        .unwrap_or_else(|| panic!("relay {relay} should be in the shard plan"))
}
