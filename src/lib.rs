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


//! # Zi Table Library
//!
//! Composable transformers for the pipe-delimited example tables used to
//! parametrize automated test scenarios. A transformer takes table text and
//! a per-invocation property bag and produces new table text.
//!
//! ## Module Overview
//!
//! - **errors**: `ZiError` taxonomy and the crate `Result` alias
//! - **config**: process-wide default separators (`ZiTableConfig`)
//! - **tokenizer**: splitting on unescaped separators
//! - **properties**: per-invocation property bag and fluent enum parsing
//! - **table**: the `ZiTable` model
//! - **codec**: table text parsing and serialization
//! - **source**: table sources resolving `tables` descriptors
//! - **loader**: multi-table loading for join and merge
//! - **resolver**: expression resolution and story controls
//! - **transformer**: the `ZiTransformer` trait
//! - **transformers**: the bundled transformers
//! - **registry**: name to factory lookup
//! - **pipeline**: chaining transformers
//!
//! ## Feature Flags
//!
//! - `yaml`: YAML configuration files (enabled by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use zitable::{ZiInMemoryTableSource, ZiTableCodec, ZiTableConfig, ZiTransformContext, ZiTransformerRegistry};
//!
//! let codec = Arc::new(ZiTableCodec::new(ZiTableConfig::default()));
//! let source = Arc::new(ZiInMemoryTableSource::new(codec.clone()));
//! let registry = ZiTransformerRegistry::with_defaults(ZiTransformContext::new(codec, source));
//!
//! let sorting = registry.create("SORTING").unwrap();
//! let properties = registry.properties().with("byColumns", "name");
//! let sorted = sorting.transform("|name|\n|b|\n|a|", &properties).unwrap();
//! assert_eq!(sorted, "|name|\n|a|\n|b|");
//! ```

pub mod codec;
pub mod config;
pub mod context;
pub mod errors;
pub mod loader;
pub mod pipeline;
pub mod properties;
pub mod registry;
pub mod resolver;
pub mod source;
pub mod table;
pub mod tokenizer;
pub mod transformer;
pub mod transformers;

pub use codec::ZiTableCodec;
pub use config::ZiTableConfig;
pub use context::ZiTransformContext;
pub use errors::{Result, ZiError};
pub use loader::ZiTableLoader;
pub use pipeline::ZiTransformPipeline;
pub use properties::{ZiFluentEnum, ZiTableProperties};
pub use registry::{TransformerFactory, ZiTransformerRegistry};
pub use resolver::{ZiExpressionResolver, ZiIdentityResolver, ZiStaticStoryControls, ZiStoryControls};
pub use source::{ZiFileTableSource, ZiInMemoryTableSource, ZiTableSource};
pub use table::{ZiRow, ZiTable};
pub use transformer::{execute_transformer, ZiTransformer};
pub use transformers::join::ZiJoinMode;
pub use transformers::merge::ZiMergeMode;
pub use transformers::sort::{ZiSortOrder, ZiSortingType};
