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


//! `MERGING`: combines several loaded tables into one.
//!
//! Output headers are always the sorted, distinct union of every table's
//! headers. [`ZiMergeMode::Rows`] stacks rows, [`ZiMergeMode::Columns`]
//! places tables side by side. `fillerValue` relaxes the shape checks by
//! filling the missing cells.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::sync::Arc;

use crate::codec::ZiTableCodec;
use crate::context::ZiTransformContext;
use crate::errors::{Result, ZiError};
use crate::loader::ZiTableLoader;
use crate::properties::{ZiFluentEnum, ZiTableProperties};
use crate::table::{ZiRow, ZiTable};
use crate::transformer::ZiTransformer;

pub const MERGE_MODE: &str = "mergeMode";
pub const FILLER_VALUE: &str = "fillerValue";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiMergeMode {
    Rows,
    Columns,
}

impl ZiFluentEnum for ZiMergeMode {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ROWS", ZiMergeMode::Rows),
        ("COLUMNS", ZiMergeMode::Columns),
    ];
}

impl ZiMergeMode {
    /// Checks two neighbouring tables; `strict` is set when no filler is given.
    fn validate_pair(self, current: &ZiTable, next: &ZiTable, strict: bool) -> Result<()> {
        match self {
            ZiMergeMode::Rows => {
                if strict && header_set(current) != header_set(next) {
                    return Err(ZiError::cardinality(
                        "Please, specify tables with the same sets of headers",
                    ));
                }
            }
            ZiMergeMode::Columns => {
                if strict && current.row_count() != next.row_count() {
                    return Err(ZiError::cardinality(
                        "Please, specify tables with the same number of rows",
                    ));
                }
                let next_headers = header_set(next);
                let mut conflicting: Vec<&str> = current
                    .headers()
                    .iter()
                    .map(String::as_str)
                    .filter(|header| next_headers.contains(header))
                    .collect();
                if !conflicting.is_empty() {
                    conflicting.sort_unstable();
                    return Err(ZiError::cardinality(format!(
                        "Please, specify tables with the unique sets of headers. Conflicting headers are: {}",
                        conflicting.join(", ")
                    )));
                }
            }
        }
        Ok(())
    }

    /// Merges already validated tables into rows ordered by `headers`.
    fn merge_rows(self, tables: &[ZiTable], headers: &[String], filler: Option<&str>) -> Vec<ZiRow> {
        let fill = filler.unwrap_or_default();
        match self {
            ZiMergeMode::Rows => tables
                .iter()
                .flat_map(|table| {
                    table.rows().iter().map(move |row| {
                        headers
                            .iter()
                            .map(|header| match table.column_index(header) {
                                Some(index) => row[index].clone(),
                                None => fill.to_string(),
                            })
                            .collect::<ZiRow>()
                    })
                })
                .collect(),
            ZiMergeMode::Columns => {
                let row_count = tables.iter().map(ZiTable::row_count).max().unwrap_or(0);
                (0..row_count)
                    .map(|index| {
                        let mut cells: BTreeMap<&str, &str> = BTreeMap::new();
                        for table in tables {
                            for (column, header) in table.headers().iter().enumerate() {
                                let value = table
                                    .rows()
                                    .get(index)
                                    .map_or(fill, |row| row[column].as_str());
                                cells.insert(header.as_str(), value);
                            }
                        }
                        headers
                            .iter()
                            .map(|header| cells.get(header.as_str()).copied().unwrap_or(fill).to_string())
                            .collect::<ZiRow>()
                    })
                    .collect()
            }
        }
    }

    pub fn merge(self, tables: &[ZiTable], filler: Option<&str>) -> Result<ZiTable> {
        for pair in tables.windows(2) {
            self.validate_pair(&pair[0], &pair[1], filler.is_none())?;
        }
        let headers: Vec<String> = tables
            .iter()
            .flat_map(|table| table.headers().iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let rows = self.merge_rows(tables, &headers, filler);
        ZiTable::new(headers, rows)
    }
}

fn header_set(table: &ZiTable) -> HashSet<&str> {
    table.headers().iter().map(String::as_str).collect()
}

#[derive(Debug)]
pub struct ZiMergingTransformer {
    codec: Arc<ZiTableCodec>,
    loader: ZiTableLoader,
}

impl ZiMergingTransformer {
    pub fn new(codec: Arc<ZiTableCodec>, loader: ZiTableLoader) -> Self {
        Self { codec, loader }
    }
}

impl ZiTransformer for ZiMergingTransformer {
    fn name(&self) -> &'static str {
        "MERGING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let mode = ZiMergeMode::parse_property(MERGE_MODE, properties.required(MERGE_MODE)?)?;
        let tables = self.loader.load_tables(table, properties)?;
        let merged = mode.merge(&tables, properties.get(FILLER_VALUE))?;
        log::debug!(
            "merged {} tables by {mode:?} into {} rows",
            tables.len(),
            merged.row_count()
        );
        self.codec.serialize(&merged, properties)
    }
}

#[allow(non_snake_case)]
pub fn merging_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiMergingTransformer::new(
        context.codec(),
        context.loader(false),
    )))
}
