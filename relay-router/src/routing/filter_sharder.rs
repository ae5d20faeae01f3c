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

//! Author-scoped sharding of subscription filters across relays.

use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::filter::{AuthorPubkey, Filter};
use crate::observability::{events, fields};
use crate::relay::RelayUrl;
use crate::routing::write_relays::write_relays_for;
use crate::session::RoutingSession;

const COMPONENT: &str = "filter_sharder";

/// Filters each relay should receive, keyed by relay.
///
/// Within one relay the filters keep the order of the input batch.
pub type RelayShards = HashMap<RelayUrl, Vec<Filter>>;

type RelayAuthors = HashMap<RelayUrl, HashSet<AuthorPubkey>>;

/// Distinct authors across the batch, in first-seen order.
fn collect_author_union(filters: &[Filter]) -> Vec<&AuthorPubkey> {
    let mut seen = HashSet::new();
    filters
        .iter()
        .filter_map(|filter| filter.authors.as_deref())
        .flatten()
        .filter(|author| seen.insert(*author))
        .collect()
}

fn add_author_to_relays<'r>(
    relay_authors: &mut RelayAuthors,
    author: &AuthorPubkey,
    relays: impl IntoIterator<Item = &'r RelayUrl>,
) {
    for relay in relays {
        relay_authors
            .entry(relay.clone())
            .or_default()
            .insert(author.clone());
    }
}

/// Resolves which relays serve which authors. Each author is looked up exactly once.
fn map_authors_to_relays(session: &RoutingSession<'_>, authors: &[&AuthorPubkey]) -> RelayAuthors {
    let explicit_relays = session.explicit_relays().unwrap_or_default();
    let mut relay_authors = RelayAuthors::new();

    for author in authors {
        match write_relays_for(session, author) {
            Some(write_relays) if !write_relays.is_empty() => {
                debug!(
                    event = events::WRITE_RELAYS_RESOLVED,
                    component = COMPONENT,
                    author = %fields::format_author(author),
                    relay_count = write_relays.len(),
                    "adding write relays for author"
                );
                add_author_to_relays(&mut relay_authors, author, &write_relays);
            }
            _ if explicit_relays.is_empty() => {
                debug!(
                    event = events::AUTHOR_UNROUTABLE,
                    component = COMPONENT,
                    author = %fields::format_author(author),
                    "no write relays and no explicit relays for author"
                );
            }
            _ => {
                debug!(
                    event = events::WRITE_RELAYS_FALLBACK,
                    component = COMPONENT,
                    author = %fields::format_author(author),
                    relay_count = explicit_relays.len(),
                    "no write relays known, falling back to explicit relays"
                );
                add_author_to_relays(&mut relay_authors, author, explicit_relays);
            }
        }
    }

    relay_authors
}

/// Sends every filter, unmodified, to every explicit relay.
fn broadcast_to_explicit_relays(session: &RoutingSession<'_>, filters: &[Filter]) -> RelayShards {
    let explicit_relays = session.explicit_relays().unwrap_or_default();
    let shards: RelayShards = explicit_relays
        .iter()
        .map(|relay| (relay.clone(), filters.to_vec()))
        .collect();

    debug!(
        event = events::FILTER_SHARD_BROADCAST,
        component = COMPONENT,
        filter_count = filters.len(),
        relays = %fields::format_relays(shards.keys()),
        "no author constraints in batch, broadcasting to explicit relays"
    );

    shards
}

/// Splits a batch of filters into the part each relay should receive.
///
/// When no filter names an author, every filter goes to every explicit relay as-is.
/// Otherwise each distinct author is mapped to its write relays (or to the explicit
/// relays when none are known), and every relay serving at least one author gets:
///
/// - for each author-constrained filter, a copy narrowed to the declared authors that
///   relay serves (each named once), skipped when that intersection is empty;
/// - every filter without an author constraint, unmodified.
///
/// A filter whose author list is present but empty counts as unconstrained.
pub fn calculate_relay_sets_for_filters(
    session: &RoutingSession<'_>,
    filters: &[Filter],
) -> RelayShards {
    let authors = collect_author_union(filters);
    if authors.is_empty() {
        return broadcast_to_explicit_relays(session, filters);
    }

    let relay_authors = map_authors_to_relays(session, &authors);
    let mut shards: RelayShards = relay_authors
        .keys()
        .map(|relay| (relay.clone(), Vec::new()))
        .collect();

    for filter in filters {
        match filter.authors.as_deref() {
            Some(declared) if !declared.is_empty() => {
                for (relay, served) in &relay_authors {
                    let mut kept = HashSet::new();
                    let scoped: Vec<AuthorPubkey> = declared
                        .iter()
                        .filter(|author| served.contains(*author) && kept.insert(*author))
                        .cloned()
                        .collect();
                    if scoped.is_empty() {
                        continue;
                    }
                    if let Some(shard) = shards.get_mut(relay) {
                        shard.push(filter.with_authors(scoped));
                    }
                }
            }
            _ => {
                for shard in shards.values_mut() {
                    shard.push(filter.clone());
                }
            }
        }
    }

    debug!(
        event = events::FILTER_SHARD_PLAN,
        component = COMPONENT,
        author_count = authors.len(),
        filter_count = filters.len(),
        relay_count = shards.len(),
        relays = %fields::format_relays(shards.keys()),
        "sharded filters across relays"
    );

    shards
}

/// Batch entry point; delegates to [`calculate_relay_sets_for_filters`].
pub fn calculate_relay_sets_for_filter_batches(
    session: &RoutingSession<'_>,
    filters: &[Filter],
) -> RelayShards {
    calculate_relay_sets_for_filters(session, filters)
}
