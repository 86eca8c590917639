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

//! # Zi Transformer Module
//!
//! Defines the core transformer trait. A transformer takes table text plus a
//! per-invocation property bag and returns new table text:
//!
//! ```rust
//! use zitable::errors::Result;
//! use zitable::properties::ZiTableProperties;
//! use zitable::transformer::ZiTransformer;
//!
//! #[derive(Debug)]
//! struct Identity;
//!
//! impl ZiTransformer for Identity {
//!     fn name(&self) -> &'static str {
//!         "IDENTITY"
//!     }
//!
//!     fn transform(&self, table: &str, _properties: &ZiTableProperties) -> Result<String> {
//!         Ok(table.to_string())
//!     }
//! }
//! ```
//!
//! Transformers hold only read-only, injected services, so a single instance
//! can serve concurrent invocations.

use crate::errors::Result;
use crate::properties::ZiTableProperties;

/// Contract every table transformer fulfils.
pub trait ZiTransformer: std::fmt::Debug + Send + Sync {
    /// Registry name, e.g. `FILTERING`.
    fn name(&self) -> &'static str;

    /// Either the complete output or an error; never partial output.
    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String>;
}

/// Runs a transformer, logging the outcome. Errors are returned unchanged.
pub fn execute_transformer(
    transformer: &dyn ZiTransformer,
    table: &str,
    properties: &ZiTableProperties,
) -> Result<String> {
    log::debug!("applying table transformer {}", transformer.name());
    transformer.transform(table, properties).map_err(|err| {
        log::debug!("table transformer {} failed: {err}", transformer.name());
        err
    })
}
