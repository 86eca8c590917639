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

//! `FILTERING`: column and row selection.
//!
//! Columns are selected with `byColumnNames` (select and reorder) or
//! `byMaxColumns` (truncate). Rows are selected with one of `byMaxRows`,
//! `byRowIndexes` or `byRandomRows`. Alternatively, `column.<name>=<regex>`
//! keeps the rows whose `<name>` cell fully matches the regex; regex filters
//! cannot be combined with any other selector.

use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::Regex;

use crate::codec::ZiTableCodec;
use crate::context::ZiTransformContext;
use crate::errors::{Result, ZiError};
use crate::properties::ZiTableProperties;
use crate::table::{ZiRow, ZiTable};
use crate::tokenizer::{split_list, split_unique};
use crate::transformer::ZiTransformer;

pub const BY_MAX_COLUMNS: &str = "byMaxColumns";
pub const BY_COLUMN_NAMES: &str = "byColumnNames";
pub const BY_MAX_ROWS: &str = "byMaxRows";
pub const BY_ROW_INDEXES: &str = "byRowIndexes";
pub const BY_RANDOM_ROWS: &str = "byRandomRows";
pub const COLUMN_PREFIX: &str = "column.";

const SELECTORS: [&str; 5] = [
    BY_MAX_COLUMNS,
    BY_COLUMN_NAMES,
    BY_MAX_ROWS,
    BY_ROW_INDEXES,
    BY_RANDOM_ROWS,
];

#[derive(Debug)]
pub struct ZiFilteringTransformer {
    codec: Arc<ZiTableCodec>,
    seed: Option<u64>,
}

impl ZiFilteringTransformer {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self { codec, seed: None }
    }

    /// Makes `byRandomRows` reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn validate(properties: &ZiTableProperties, regex_filters: &[(&str, &str)]) -> Result<()> {
        let selectors: Vec<&str> = SELECTORS
            .iter()
            .copied()
            .filter(|key| properties.contains(key))
            .collect();

        if selectors.is_empty() && regex_filters.is_empty() {
            return Err(ZiError::configuration(format!(
                "At least one of the following properties should be specified: {}, '{COLUMN_PREFIX}<name>'",
                quoted(&SELECTORS)
            )));
        }

        if !regex_filters.is_empty() {
            if !selectors.is_empty() {
                return Err(ZiError::configuration(format!(
                    "Filtering by regex is not allowed to be used together with the following properties: {}",
                    quoted(&SELECTORS)
                )));
            }
            return Ok(());
        }

        properties.ensure_not_both(BY_MAX_COLUMNS, BY_COLUMN_NAMES)?;
        properties.ensure_not_both(BY_MAX_ROWS, BY_ROW_INDEXES)?;
        properties.ensure_not_both(BY_RANDOM_ROWS, BY_ROW_INDEXES)?;
        properties.ensure_not_both(BY_RANDOM_ROWS, BY_MAX_ROWS)
    }

    fn filter_by_regex(table: ZiTable, regex_filters: &[(&str, &str)]) -> Result<ZiTable> {
        let mut predicates = Vec::with_capacity(regex_filters.len());
        for (column, pattern) in regex_filters {
            let index = table.column_index(column).ok_or_else(|| {
                ZiError::referential(format!(
                    "Regex filter refers to the unknown column '{column}'"
                ))
            })?;
            let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
                ZiError::format(format!("Invalid regex for column '{column}': {err}"))
            })?;
            predicates.push((index, regex));
        }

        let (headers, rows) = table.into_parts();
        let rows = rows
            .into_iter()
            .filter(|row| predicates.iter().all(|(index, regex)| regex.is_match(&row[*index])))
            .collect();
        ZiTable::new(headers, rows)
    }

    fn select_columns(table: &ZiTable, properties: &ZiTableProperties) -> Result<Option<Vec<usize>>> {
        if let Some(names) = properties.get(BY_COLUMN_NAMES) {
            let names = split_unique(names, ';');
            return table.column_indices(&names, BY_COLUMN_NAMES).map(Some);
        }
        if let Some(max_columns) = properties.get_usize(BY_MAX_COLUMNS)? {
            let limit = max_columns.min(table.headers().len());
            return Ok(Some((0..limit).collect()));
        }
        Ok(None)
    }

    fn select_rows(&self, rows: Vec<ZiRow>, properties: &ZiTableProperties) -> Result<Vec<ZiRow>> {
        if let Some(indexes) = properties.get(BY_ROW_INDEXES) {
            let positions = parse_row_indexes(indexes, rows.len())?;
            return Ok(positions.into_iter().map(|position| rows[position].clone()).collect());
        }

        if let Some(count) = properties.get_usize(BY_RANDOM_ROWS)? {
            if count > rows.len() {
                return Err(ZiError::cardinality(format!(
                    "'{BY_RANDOM_ROWS}' must be less than or equal to the number of table rows ({})",
                    rows.len()
                )));
            }
            let positions = match self.seed {
                Some(seed) => sample_positions(&mut StdRng::seed_from_u64(seed), rows.len(), count),
                None => sample_positions(&mut rand::thread_rng(), rows.len(), count),
            };
            let mut rows: Vec<Option<ZiRow>> = rows.into_iter().map(Some).collect();
            return Ok(positions
                .into_iter()
                .filter_map(|position| rows[position].take())
                .collect());
        }

        if let Some(max_rows) = properties.get_usize(BY_MAX_ROWS)? {
            let mut rows = rows;
            rows.truncate(max_rows);
            return Ok(rows);
        }

        Ok(rows)
    }
}

impl ZiTransformer for ZiFilteringTransformer {
    fn name(&self) -> &'static str {
        "FILTERING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let regex_filters: Vec<(&str, &str)> = properties.with_prefix(COLUMN_PREFIX).collect();
        Self::validate(properties, &regex_filters)?;

        let parsed = self.codec.parse(table, properties)?;

        if !regex_filters.is_empty() {
            let filtered = Self::filter_by_regex(parsed, &regex_filters)?;
            return self.codec.serialize(&filtered, properties);
        }

        let columns = Self::select_columns(&parsed, properties)?;
        let (headers, rows) = parsed.into_parts();
        let rows = self.select_rows(rows, properties)?;
        let mut filtered = ZiTable::new(headers, rows)?;
        if let Some(columns) = columns {
            filtered = filtered.project(&columns);
        }
        self.codec.serialize(&filtered, properties)
    }
}

/// Parses `0;2;4-6` into positions, expanding inclusive ranges in list order.
///
/// Every index is checked against `row_count` before any range is expanded.
pub fn parse_row_indexes(indexes: &str, row_count: usize) -> Result<Vec<usize>> {
    let mut positions = Vec::new();
    for token in split_list(indexes, ';') {
        let (start, end) = match token.split_once('-') {
            Some((start, end)) => (parse_row_index(start, &token)?, parse_row_index(end, &token)?),
            None => {
                let index = parse_row_index(&token, &token)?;
                (index, index)
            }
        };
        if start > end {
            return Err(ZiError::format(format!(
                "Invalid row index range '{token}': start must not be greater than end"
            )));
        }
        if end >= row_count {
            return Err(ZiError::referential(format!(
                "Row index {end} is out of bounds for a table with {row_count} rows"
            )));
        }
        positions.extend(start..=end);
    }
    Ok(positions)
}

fn parse_row_index(value: &str, token: &str) -> Result<usize> {
    value.trim().parse::<usize>().map_err(|_| {
        ZiError::format(format!(
            "Invalid row index '{token}' in '{BY_ROW_INDEXES}': expected a number or a range 'a-b'"
        ))
    })
}

/// `count` distinct positions out of `0..len`, sorted ascending.
fn sample_positions<R: Rng + ?Sized>(rng: &mut R, len: usize, count: usize) -> Vec<usize> {
    let mut positions = rand::seq::index::sample(rng, len, count).into_vec();
    positions.sort_unstable();
    positions
}

fn quoted(keys: &[&str]) -> String {
    keys.iter()
        .map(|key| format!("'{key}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[allow(non_snake_case)]
pub fn filtering_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiFilteringTransformer::new(context.codec())))
}
