/********************************************************************************
 * Copyright (c) 2025 Contributors to the Eclipse Foundation
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

use relay_router::{RelayUrl, RouterError};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub(crate) router_config: RouterConfig,
    pub(crate) outbox_config: OutboxConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(deny_unknown_fields)]
pub struct RouterConfig {
    #[serde(default)]
    pub(crate) explicit_relays: Vec<RelayUrl>,
    #[serde(default)]
    pub(crate) pool_relays: Vec<RelayUrl>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct OutboxConfig {
    #[serde(default)]
    pub(crate) mode: OutboxProviderMode,
    #[serde(default)]
    pub(crate) file_path: Option<String>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, Default, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OutboxProviderMode {
    #[default]
    StaticFile,
    Disabled,
}

impl Config {
    pub fn from_json5(contents: &str) -> Result<Self, RouterError> {
        let config: Config = json5::from_str(contents)
            .map_err(|e| RouterError::InvalidConfig(format!("Unable to parse config file: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, RouterError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            RouterError::InvalidConfig(format!("Unable to read config file '{path}': {e:?}"))
        })?;
        Self::from_json5(&contents)
    }

    fn validate(&self) -> Result<(), RouterError> {
        let relays = self
            .router_config
            .explicit_relays
            .iter()
            .chain(&self.router_config.pool_relays);
        for relay in relays {
            if relay.is_empty() {
                return Err(RouterError::InvalidConfig(
                    "Relay urls must not be empty".to_string(),
                ));
            }
        }

        if self.outbox_config.mode == OutboxProviderMode::StaticFile
            && self.outbox_config.file_path.is_none()
        {
            return Err(RouterError::InvalidConfig(
                "outbox_config.file_path is required in static_file mode".to_string(),
            ));
        }

        Ok(())
    }
}
