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

//! # Zi Table Loader
//!
//! Resolves the `tables` property of multi-table transformers (join, merge)
//! into tables.
//!
//! `tables` is a `;`-separated list of descriptors (`\;` for a literal `;`).
//! Descriptors are trimmed and de-duplicated. When the transformer also
//! received inline table text, that text becomes one more table placed after
//! all the referenced ones:
//!
//! | inline text | descriptors needed | result                          |
//! |-------------|--------------------|---------------------------------|
//! | blank       | at least 2         | `[t1, t2, ...]`                 |
//! | non-blank   | at least 1         | `[t1, ..., input table]`        |

use std::sync::Arc;

use crate::codec::ZiTableCodec;
use crate::errors::{Result, ZiError};
use crate::properties::ZiTableProperties;
use crate::source::ZiTableSource;
use crate::table::ZiTable;
use crate::tokenizer::split_unique;

pub const TABLES_KEY: &str = "tables";

#[derive(Clone, Debug)]
pub struct ZiTableLoader {
    codec: Arc<ZiTableCodec>,
    source: Arc<dyn ZiTableSource>,
    forbid_empty_tables: bool,
}

impl ZiTableLoader {
    pub fn new(
        codec: Arc<ZiTableCodec>,
        source: Arc<dyn ZiTableSource>,
        forbid_empty_tables: bool,
    ) -> Self {
        Self {
            codec,
            source,
            forbid_empty_tables,
        }
    }

    /// Loads every referenced table followed by the inline one, if any.
    pub fn load_tables(&self, table_text: &str, properties: &ZiTableProperties) -> Result<Vec<ZiTable>> {
        let descriptors = properties
            .get(TABLES_KEY)
            .map(|tables| split_unique(tables, ';'))
            .unwrap_or_default();
        let has_input_table = !table_text.trim().is_empty();

        if has_input_table {
            if descriptors.is_empty() {
                return Err(ZiError::configuration("Please, specify at least one table path"));
            }
        } else if descriptors.len() < 2 {
            return Err(ZiError::configuration(
                "Please, specify more than one unique table paths",
            ));
        }

        let mut loaded = Vec::with_capacity(descriptors.len() + 1);
        for (index, descriptor) in descriptors.iter().enumerate() {
            let table = self.source.load(descriptor, properties)?;
            loaded.push((format!("table at index {}", index + 1), table));
        }

        if has_input_table {
            let text = self.codec.with_properties_prefix(table_text, properties);
            let table = self.codec.parse(&text, &self.codec.default_properties())?;
            loaded.push(("input table".to_string(), table));
        }

        if self.forbid_empty_tables {
            let empty: Vec<&str> = loaded
                .iter()
                .filter(|(_, table)| table.is_empty())
                .map(|(description, _)| description.as_str())
                .collect();
            if !empty.is_empty() {
                return Err(ZiError::cardinality(format!(
                    "Empty tables are not allowed, but [{}] is/are empty",
                    empty.join(", ")
                )));
            }
        }

        log::debug!(
            "loaded {} tables ({} referenced, inline table: {has_input_table})",
            loaded.len(),
            descriptors.len()
        );
        Ok(loaded.into_iter().map(|(_, table)| table).collect())
    }
}
