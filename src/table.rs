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

//! # Zi Table Model
//!
//! [`ZiTable`] is the unit of data every transformer works on: an ordered list
//! of distinct column names and an ordered list of rows of string cells.
//!
//! ## Invariants
//!
//! - Column names are pairwise distinct and their order is significant
//! - Every row holds exactly one cell per column, aligned by position
//!
//! Both are checked by the constructors and preserved by every mutating method,
//! so a `ZiTable` value is always well formed. Cells are opaque strings; typed
//! interpretation happens only inside the transformers that need it.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, ZiError};

/// A single table row, aligned with [`ZiTable::headers`].
pub type ZiRow = Vec<String>;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZiTable {
    headers: Vec<String>,
    rows: Vec<ZiRow>,
}

impl ZiTable {
    /// Builds a table, validating header uniqueness and row widths.
    pub fn new(headers: Vec<String>, rows: Vec<ZiRow>) -> Result<Self> {
        Self::check_headers(&headers)?;
        if let Some((index, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != headers.len())
        {
            return Err(ZiError::format(format!(
                "Row {index} has {} values, but the table has {} columns",
                row.len(),
                headers.len()
            )));
        }
        Ok(Self { headers, rows })
    }

    /// Convenience constructor for literals, mainly used in tests.
    pub fn from_slices(headers: &[&str], rows: &[&[&str]]) -> Result<Self> {
        Self::new(
            headers.iter().map(|h| h.to_string()).collect(),
            rows.iter()
                .map(|row| row.iter().map(|v| v.to_string()).collect())
                .collect(),
        )
    }

    fn check_headers(headers: &[String]) -> Result<()> {
        let mut seen = HashSet::new();
        let duplicates: Vec<&str> = headers
            .iter()
            .filter(|header| !seen.insert(header.as_str()))
            .map(String::as_str)
            .collect();
        if !duplicates.is_empty() {
            return Err(ZiError::format(format!(
                "Table headers must be unique, but found duplicates: [{}]",
                duplicates.join(", ")
            )));
        }
        Ok(())
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[ZiRow] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<ZiRow>) {
        (self.headers, self.rows)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Positions of `names`, failing with every unknown name at once.
    pub fn column_indices(&self, names: &[String], property: &str) -> Result<Vec<usize>> {
        let unknown: Vec<&str> = names
            .iter()
            .filter(|name| !self.has_column(name))
            .map(String::as_str)
            .collect();
        if !unknown.is_empty() {
            return Err(ZiError::referential(format!(
                "'{property}' contains the following unknown columns: [{}]",
                unknown.join(", ")
            )));
        }
        Ok(names
            .iter()
            .filter_map(|name| self.column_index(name))
            .collect())
    }

    /// Value of column `name` in row `row`, if both exist.
    pub fn value(&self, row: usize, name: &str) -> Option<&str> {
        let column = self.column_index(name)?;
        self.rows.get(row).map(|cells| cells[column].as_str())
    }

    /// Keeps only the columns at `indices`, in that order.
    pub fn project(self, indices: &[usize]) -> Self {
        let headers = indices.iter().map(|&i| self.headers[i].clone()).collect();
        let rows = self
            .rows
            .into_iter()
            .map(|row| indices.iter().map(|&i| row[i].clone()).collect())
            .collect();
        Self { headers, rows }
    }

    /// Replaces the rows, keeping the headers.
    pub fn with_rows(self, rows: Vec<ZiRow>) -> Result<Self> {
        Self::new(self.headers, rows)
    }

    /// Appends a column whose value for each row is produced by `value_for`.
    pub fn push_column(&mut self, name: &str, mut value_for: impl FnMut(usize) -> String) -> Result<()> {
        if self.has_column(name) {
            return Err(ZiError::referential(format!(
                "Unable to add column '{name}', because the table already has it"
            )));
        }
        self.headers.push(name.to_string());
        for (index, row) in self.rows.iter_mut().enumerate() {
            row.push(value_for(index));
        }
        Ok(())
    }

    /// Rewrites every cell in place, stopping at the first error.
    pub fn try_map_cells(&mut self, mut f: impl FnMut(&str) -> Result<String>) -> Result<()> {
        for row in &mut self.rows {
            for cell in row.iter_mut() {
                *cell = f(cell)?;
            }
        }
        Ok(())
    }
}
