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


use std::sync::Arc;

use crate::codec::ZiTableCodec;
use crate::context::ZiTransformContext;
use crate::errors::{Result, ZiError};
use crate::properties::{ZiFluentEnum, ZiTableProperties};
use crate::transformer::ZiTransformer;
use crate::transformers::sort::ZiSortOrder;

pub const ORDER: &str = "order";
pub const INDEX_COLUMN: &str = "index";

/// `INDEXING`: appends an `index` column numbering the rows.
#[derive(Debug)]
pub struct ZiIndexingTransformer {
    codec: Arc<ZiTableCodec>,
}

impl ZiIndexingTransformer {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self { codec }
    }
}

impl ZiTransformer for ZiIndexingTransformer {
    fn name(&self) -> &'static str {
        "INDEXING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let order = ZiSortOrder::parse_property(ORDER, properties.required(ORDER)?)?;

        let mut indexed = self.codec.parse(table, properties)?;
        if indexed.has_column(INDEX_COLUMN) {
            return Err(ZiError::referential(format!(
                "Unable to add column '{INDEX_COLUMN}', because the table already contains it"
            )));
        }

        let row_count = indexed.row_count();
        indexed.push_column(INDEX_COLUMN, |row| match order {
            ZiSortOrder::Ascending => row.to_string(),
            ZiSortOrder::Descending => (row_count - 1 - row).to_string(),
        })?;
        self.codec.serialize(&indexed, properties)
    }
}

#[allow(non_snake_case)]
pub fn indexing_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiIndexingTransformer::new(context.codec())))
}
