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

mod config;

use crate::config::{Config, OutboxProviderMode};
use clap::Parser;
use outbox_static_file::OutboxStaticFile;
use relay_router::{Event, Filter, OutboxDirectory, RouterError, RoutingSession};
use serde::Serialize;
use std::fs;
use tracing::{info, warn};

#[derive(Parser)]
#[command(about = "Prints which relays receive which filters for a subscription batch")]
struct RouterArgs {
    #[arg(short, long, value_name = "FILE")]
    config: String,
    #[arg(short, long, value_name = "FILE")]
    filters: String,
    #[arg(short, long, value_name = "FILE")]
    event: Option<String>,
}

#[derive(Serialize)]
struct RoutingReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    event_relays: Option<Vec<String>>,
    filter_shards: serde_json::Value,
}

fn read_file(path: &str) -> Result<String, RouterError> {
    fs::read_to_string(path).map_err(|e| {
        RouterError::InvalidConfig(format!("Unable to read file '{path}': {e:?}"))
    })
}

fn main() -> Result<(), RouterError> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();

    info!("Started relay-router");

    let args = RouterArgs::parse();
    let config = Config::from_file(&args.config)?;

    let filters: Vec<Filter> = serde_json::from_str(&read_file(&args.filters)?)
        .map_err(|e| RouterError::InvalidConfig(format!("Unable to parse filters: {e}")))?;
    let event: Option<Event> = match &args.event {
        Some(path) => Some(
            serde_json::from_str(&read_file(path)?)
                .map_err(|e| RouterError::InvalidConfig(format!("Unable to parse event: {e}")))?,
        ),
        None => None,
    };

    let directory = OutboxDirectory::empty();
    let mut session = RoutingSession::new()
        .with_explicit_relays(&config.router_config.explicit_relays)
        .with_pool(&config.router_config.pool_relays);

    match (config.outbox_config.mode, &config.outbox_config.file_path) {
        (OutboxProviderMode::StaticFile, Some(file_path)) => {
            let health = directory.refresh(&OutboxStaticFile::new(file_path.clone()));
            match &health.last_error {
                None => info!(
                    author_count = health.author_count,
                    "loaded outbox data from {file_path}"
                ),
                Some(err) => warn!("outbox data unavailable, using explicit relays only: {err}"),
            }
            session = session.with_outbox(&directory);
        }
        _ => info!("outbox tracking disabled"),
    }

    let event_relays = event.map(|event| {
        session
            .calculate_relay_set_for_event(&event)
            .into_vec()
            .into_iter()
            .map(|relay| relay.to_string())
            .collect()
    });
    let shards = session.calculate_relay_sets_for_filter_batches(&filters);
    info!(relay_count = shards.len(), "computed shard plan");

    let report = RoutingReport {
        event_relays,
        filter_shards: serde_json::to_value(&shards)?,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
