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


//! `INNER_JOIN` and `LEFT_JOIN`: equi-join of two loaded tables.
//!
//! The first loaded table is the left one, the second the right one. The
//! right table contributes all its columns except the key column when both
//! key columns share a name.

use std::collections::HashMap;
use std::sync::Arc;

use crate::codec::ZiTableCodec;
use crate::context::ZiTransformContext;
use crate::errors::{Result, ZiError};
use crate::loader::ZiTableLoader;
use crate::properties::ZiTableProperties;
use crate::table::{ZiRow, ZiTable};
use crate::transformer::ZiTransformer;

pub const LEFT_TABLE_JOIN_COLUMN: &str = "leftTableJoinColumn";
pub const RIGHT_TABLE_JOIN_COLUMN: &str = "rightTableJoinColumn";
pub const FILLER_VALUE: &str = "fillerValue";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiJoinMode {
    Inner,
    Left,
}

impl ZiJoinMode {
    pub fn transformer_name(self) -> &'static str {
        match self {
            ZiJoinMode::Inner => "INNER_JOIN",
            ZiJoinMode::Left => "LEFT_JOIN",
        }
    }

    /// Row emitted for a left row without right matches, if any.
    fn unmatched(self, left: &ZiRow, right_width: usize, filler: &str) -> Option<ZiRow> {
        match self {
            ZiJoinMode::Inner => None,
            ZiJoinMode::Left => {
                let mut row = left.clone();
                row.extend(std::iter::repeat(filler.to_string()).take(right_width));
                Some(row)
            }
        }
    }
}

#[derive(Debug)]
pub struct ZiJoiningTransformer {
    mode: ZiJoinMode,
    codec: Arc<ZiTableCodec>,
    loader: ZiTableLoader,
}

impl ZiJoiningTransformer {
    pub fn new(mode: ZiJoinMode, codec: Arc<ZiTableCodec>, loader: ZiTableLoader) -> Self {
        Self { mode, codec, loader }
    }

    fn key_column(table: &ZiTable, side: &str, name: &str) -> Result<usize> {
        table.column_index(name).ok_or_else(|| {
            ZiError::referential(format!(
                "The {side} table doesn't contain the following column: {name}"
            ))
        })
    }

    fn join(&self, left: ZiTable, right: ZiTable, properties: &ZiTableProperties) -> Result<ZiTable> {
        let left_key_name = properties.required(LEFT_TABLE_JOIN_COLUMN)?;
        let right_key_name = properties.required(RIGHT_TABLE_JOIN_COLUMN)?;
        let left_key = Self::key_column(&left, "left", left_key_name)?;
        let right_key = Self::key_column(&right, "right", right_key_name)?;

        let contributing: Vec<usize> = (0..right.headers().len())
            .filter(|&i| left_key_name != right_key_name || i != right_key)
            .collect();

        let conflicting: Vec<&str> = contributing
            .iter()
            .map(|&i| right.headers()[i].as_str())
            .filter(|header| left.has_column(header))
            .collect();
        if !conflicting.is_empty() {
            return Err(ZiError::cardinality(format!(
                "Tables must contain different columns (except joint column), but found the same columns: [{}]",
                conflicting.join(", ")
            )));
        }

        let mut headers = left.headers().to_vec();
        headers.extend(contributing.iter().map(|&i| right.headers()[i].clone()));

        let mut right_by_key: HashMap<&str, Vec<ZiRow>> = HashMap::new();
        for row in right.rows() {
            right_by_key
                .entry(row[right_key].as_str())
                .or_default()
                .push(contributing.iter().map(|&i| row[i].clone()).collect());
        }

        let filler = properties.get(FILLER_VALUE).unwrap_or_default();
        let mut rows = Vec::new();
        for left_row in left.rows() {
            match right_by_key.get(left_row[left_key].as_str()) {
                Some(matches) => rows.extend(matches.iter().map(|right_row| {
                    let mut row = left_row.clone();
                    row.extend(right_row.iter().cloned());
                    row
                })),
                None => rows.extend(self.mode.unmatched(left_row, contributing.len(), filler)),
            }
        }

        ZiTable::new(headers, rows)
    }
}

impl ZiTransformer for ZiJoiningTransformer {
    fn name(&self) -> &'static str {
        self.mode.transformer_name()
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let tables = self.loader.load_tables(table, properties)?;
        let [left, right]: [ZiTable; 2] = tables
            .try_into()
            .map_err(|_| ZiError::cardinality("Please, specify only two tables"))?;

        let joined = self.join(left, right, properties)?;
        self.codec.serialize(&joined, properties)
    }
}

#[allow(non_snake_case)]
pub fn inner_join_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiJoiningTransformer::new(
        ZiJoinMode::Inner,
        context.codec(),
        context.loader(false),
    )))
}

#[allow(non_snake_case)]
pub fn left_join_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiJoiningTransformer::new(
        ZiJoinMode::Left,
        context.codec(),
        context.loader(false),
    )))
}
