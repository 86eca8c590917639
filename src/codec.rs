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

//! # Zi Table Codec
//!
//! Reads and writes the textual table format:
//!
//! ```text
//! {headerSeparator=!, valueSeparator=!}
//! |-- comment lines start with the ignorable separator
//! !name!age!
//! !Alice!30!
//! ```
//!
//! The optional leading `{...}` block overrides the separators for that text
//! only. Blank lines and comment lines are skipped, the first remaining line is
//! the header and every other line is a row. Cells are trimmed.
//!
//! [`ZiTableCodec::parse`] and [`ZiTableCodec::serialize`] are inverses for any
//! table whose cells contain no separators. Lines that would read back as
//! comments are refused by `serialize`.

use crate::config::ZiTableConfig;
use crate::errors::{Result, ZiError};
use crate::properties::{
    ZiTableProperties, HEADER_SEPARATOR_KEY, IGNORABLE_SEPARATOR_KEY, VALUE_SEPARATOR_KEY,
};
use crate::table::ZiTable;

#[derive(Clone, Debug, Default)]
pub struct ZiTableCodec {
    config: ZiTableConfig,
}

impl ZiTableCodec {
    pub fn new(config: ZiTableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ZiTableConfig {
        &self.config
    }

    /// Property bag carrying only the process-wide separators.
    pub fn default_properties(&self) -> ZiTableProperties {
        ZiTableProperties::new(&self.config)
    }

    /// Parses table text. Blank text yields a table without columns.
    pub fn parse(&self, text: &str, properties: &ZiTableProperties) -> Result<ZiTable> {
        let (properties, body) = split_inline_properties(text, properties)?;
        let ignorable = properties.ignorable_separator();

        let mut lines = body
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(ignorable));

        let headers = match lines.next() {
            Some(line) => split_line(line, properties.header_separator()),
            None => return Ok(ZiTable::default()),
        };

        let mut rows = Vec::new();
        for (index, line) in lines.enumerate() {
            let mut cells = split_line(line, properties.value_separator());
            if cells.len() > headers.len() {
                return Err(ZiError::format(format!(
                    "Row {index} has {} values, but the table has {} columns: {line}",
                    cells.len(),
                    headers.len()
                )));
            }
            cells.resize(headers.len(), String::new());
            rows.push(cells);
        }

        ZiTable::new(headers, rows)
    }

    /// Serializes with the separators of `properties`, without a properties block.
    pub fn serialize(&self, table: &ZiTable, properties: &ZiTableProperties) -> Result<String> {
        if table.headers().is_empty() {
            return Ok(String::new());
        }
        let ignorable = properties.ignorable_separator();
        let mut lines = Vec::with_capacity(table.row_count() + 1);
        lines.push(join_line(table.headers(), properties.header_separator()));
        for row in table.rows() {
            lines.push(join_line(row, properties.value_separator()));
        }
        if let Some(line) = lines.iter().find(|line| line.trim().starts_with(ignorable)) {
            return Err(ZiError::format(format!(
                "Unable to serialize the line '{line}', because it starts with the ignorable separator '{ignorable}'"
            )));
        }
        Ok(lines.join("\n"))
    }

    /// Serializes and, when the separators differ from the defaults, prepends
    /// the properties block needed to read the text back without `properties`.
    pub fn serialize_with_properties(&self, table: &ZiTable, properties: &ZiTableProperties) -> Result<String> {
        Ok(self.with_properties_prefix(&self.serialize(table, properties)?, properties))
    }

    /// Prepends the separator block to `text` unless the separators are the
    /// process-wide defaults.
    pub fn with_properties_prefix(&self, text: &str, properties: &ZiTableProperties) -> String {
        if properties.uses_default_separators(&self.config) {
            return text.to_string();
        }
        format!(
            "{{{VALUE_SEPARATOR_KEY}={}, {HEADER_SEPARATOR_KEY}={}, {IGNORABLE_SEPARATOR_KEY}={}}}\n{text}",
            escape_property(properties.value_separator()),
            escape_property(properties.header_separator()),
            escape_property(properties.ignorable_separator()),
        )
    }
}

fn escape_property(value: &str) -> String {
    value.replace(',', "\\,")
}

fn split_inline_properties<'a>(
    text: &'a str,
    properties: &ZiTableProperties,
) -> Result<(ZiTableProperties, &'a str)> {
    let trimmed = text.trim_start();
    let Some(rest) = trimmed.strip_prefix('{') else {
        return Ok((properties.clone(), text));
    };
    let end = rest
        .find('}')
        .ok_or_else(|| ZiError::format("Table properties block is not closed with '}'"))?;
    let merged = properties.merge_inline(&rest[..end])?;
    Ok((merged, &rest[end + 1..]))
}

fn split_line(line: &str, separator: &str) -> Vec<String> {
    let mut body = line;
    if let Some(rest) = body.strip_prefix(separator) {
        body = rest;
    }
    if let Some(rest) = body.strip_suffix(separator) {
        body = rest;
    }
    body.split(separator).map(|cell| cell.trim().to_string()).collect()
}

fn join_line(cells: &[String], separator: &str) -> String {
    format!("{separator}{}{separator}", cells.join(separator))
}
