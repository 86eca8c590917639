//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd Team.
//!
//! Licensed under the Apache License, Version 2.0 (the "License");
//! You may not use this file except in compliance with the License.
//! You may obtain a copy of the License at
//!
//!     http://www.apache.org/licenses/LICENSE-2.0
//!
//! Unless required by applicable law or agreed to in writing, software
//! distributed under the License is distributed on an "AS IS" BASIS,
//! WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//! See the License for the specific language governing permissions and
//! limitations under the License.

//! # Zi Table Configuration
//!
//! Process-wide table defaults. A [`ZiTableConfig`] is created once, shared by
//! the codec and every transformer, and never mutated afterwards.
//!
//! Configuration can be built in code, or loaded from JSON/YAML:
//!
//! ```yaml
//! header_separator: "!"
//! value_separator: "!"
//! ignorable_separator: "!--"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// Separator used between header cells unless overridden.
pub const DEFAULT_HEADER_SEPARATOR: &str = "|";
/// Separator used between row cells unless overridden.
pub const DEFAULT_VALUE_SEPARATOR: &str = "|";
/// Prefix marking a line as a comment unless overridden.
pub const DEFAULT_IGNORABLE_SEPARATOR: &str = "|--";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZiTableConfig {
    pub header_separator: String,
    pub value_separator: String,
    pub ignorable_separator: String,
}

impl Default for ZiTableConfig {
    fn default() -> Self {
        Self {
            header_separator: DEFAULT_HEADER_SEPARATOR.to_string(),
            value_separator: DEFAULT_VALUE_SEPARATOR.to_string(),
            ignorable_separator: DEFAULT_IGNORABLE_SEPARATOR.to_string(),
        }
    }
}

impl ZiTableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_separator(mut self, separator: &str) -> Self {
        self.header_separator = separator.to_string();
        self
    }

    pub fn value_separator(mut self, separator: &str) -> Self {
        self.value_separator = separator.to_string();
        self
    }

    pub fn ignorable_separator(mut self, separator: &str) -> Self {
        self.ignorable_separator = separator.to_string();
        self
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()
    }

    /// Parses a YAML document; missing fields keep their defaults.
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()
    }

    /// Loads configuration from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("json") => Self::from_json_str(&content),
            #[cfg(feature = "yaml")]
            Some("yaml") | Some("yml") => Self::from_yaml_str(&content),
            _ => Err(ZiError::configuration(format!(
                "unsupported table configuration file: {}",
                path.display()
            ))),
        }
    }

    fn validate(self) -> Result<Self> {
        for (name, value) in [
            ("header_separator", &self.header_separator),
            ("value_separator", &self.value_separator),
            ("ignorable_separator", &self.ignorable_separator),
        ] {
            if value.trim().is_empty() {
                return Err(ZiError::configuration(format!("'{name}' may not be blank")));
            }
        }
        Ok(self)
    }
}
