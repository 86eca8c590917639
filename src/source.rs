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

//! # Table Sources
//!
//! A table source turns a descriptor taken from the `tables` property into a
//! [`ZiTable`]. Sources are shared between transformers and must be safe for
//! concurrent use; loading is the only place where I/O may happen.

use std::collections::HashMap;
use std::fmt::Debug;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use crate::codec::ZiTableCodec;
use crate::errors::{Result, ZiError};
use crate::properties::ZiTableProperties;
use crate::table::ZiTable;

/// Resolves table descriptors into tables.
pub trait ZiTableSource: Debug + Send + Sync {
    /// Loads the table referenced by `descriptor`. `properties` carries the
    /// separators of the invocation that asked for it.
    fn load(&self, descriptor: &str, properties: &ZiTableProperties) -> Result<ZiTable>;
}

/// Reads table files relative to a base directory.
#[derive(Debug)]
pub struct ZiFileTableSource {
    base_dir: PathBuf,
    codec: Arc<ZiTableCodec>,
}

impl ZiFileTableSource {
    pub fn new(base_dir: impl Into<PathBuf>, codec: Arc<ZiTableCodec>) -> Self {
        Self {
            base_dir: base_dir.into(),
            codec,
        }
    }
}

impl ZiTableSource for ZiFileTableSource {
    fn load(&self, descriptor: &str, properties: &ZiTableProperties) -> Result<ZiTable> {
        let relative = descriptor.trim_start_matches('/');
        let path = self.base_dir.join(relative);
        log::debug!("loading table '{descriptor}' from {}", path.display());
        let text = fs::read_to_string(&path)
            .map_err(|err| ZiError::Io(format!("unable to read table '{descriptor}': {err}")))?;
        self.codec.parse(&text, properties)
    }
}

/// Serves tables from text registered up front.
#[derive(Debug, Default)]
pub struct ZiInMemoryTableSource {
    tables: HashMap<String, String>,
    codec: Arc<ZiTableCodec>,
}

impl ZiInMemoryTableSource {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self {
            tables: HashMap::new(),
            codec,
        }
    }

    pub fn insert(mut self, descriptor: &str, text: &str) -> Self {
        self.tables.insert(descriptor.to_string(), text.to_string());
        self
    }
}

impl ZiTableSource for ZiInMemoryTableSource {
    fn load(&self, descriptor: &str, properties: &ZiTableProperties) -> Result<ZiTable> {
        let text = self
            .tables
            .get(descriptor)
            .ok_or_else(|| ZiError::Io(format!("table '{descriptor}' is not found")))?;
        self.codec.parse(text, properties)
    }
}
