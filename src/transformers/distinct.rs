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


use std::collections::HashSet;
use std::sync::Arc;

use crate::codec::ZiTableCodec;
use crate::context::ZiTransformContext;
use crate::errors::Result;
use crate::properties::ZiTableProperties;
use crate::table::{ZiRow, ZiTable};
use crate::tokenizer::split_unique;
use crate::transformer::ZiTransformer;

pub const BY_COLUMN_NAMES: &str = "byColumnNames";
pub const KEEP_ALL_COLUMNS: &str = "keepAllColumns";

/// `DISTINCTING`: drops rows repeating an earlier key tuple.
///
/// With `keepAllColumns=false` (default) the output only has the key
/// columns; otherwise the first full row of every key is kept.
#[derive(Debug)]
pub struct ZiDistinctingTransformer {
    codec: Arc<ZiTableCodec>,
}

impl ZiDistinctingTransformer {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self { codec }
    }
}

impl ZiTransformer for ZiDistinctingTransformer {
    fn name(&self) -> &'static str {
        "DISTINCTING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let names = split_unique(properties.required(BY_COLUMN_NAMES)?, ';');
        let keep_all_columns = properties.get_bool(KEEP_ALL_COLUMNS)?.unwrap_or(false);

        let parsed = self.codec.parse(table, properties)?;
        let key_columns = parsed.column_indices(&names, BY_COLUMN_NAMES)?;

        let mut seen: HashSet<ZiRow> = HashSet::new();
        let (headers, rows) = parsed.into_parts();
        let unique: Vec<ZiRow> = rows
            .into_iter()
            .filter(|row| seen.insert(key_columns.iter().map(|&i| row[i].clone()).collect()))
            .collect();

        let mut distinct = ZiTable::new(headers, unique)?;
        if !keep_all_columns {
            distinct = distinct.project(&key_columns);
        }
        self.codec.serialize(&distinct, properties)
    }
}

#[allow(non_snake_case)]
pub fn distincting_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiDistinctingTransformer::new(context.codec())))
}
