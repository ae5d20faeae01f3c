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

//! Error type for the non-routing surfaces of the crate.
//!
//! Routing itself never fails: missing pools, trackers or fallback relays degrade to
//! empty results. Errors only arise while loading outbox data or configuration.

use thiserror::Error;

pub type RouterResult<T> = Result<T, RouterError>;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error("invalid outbox entry: {0}")]
    InvalidOutboxEntry(String),

    #[error("outbox source unavailable: {0}")]
    OutboxSourceUnavailable(String),

    #[error("unable to parse outbox data: {0}")]
    OutboxParse(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RouterError {
    fn from(err: serde_json::Error) -> Self {
        RouterError::OutboxParse(err.to_string())
    }
}
