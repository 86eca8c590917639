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
use crate::properties::ZiTableProperties;
use crate::table::ZiTable;
use crate::transformer::ZiTransformer;

pub const START_INCLUSIVE: &str = "startInclusive";
pub const END_INCLUSIVE: &str = "endInclusive";
pub const ITERATOR_COLUMN: &str = "iterator";

/// `ITERATING`: generates a one-column table counting from
/// `startInclusive` to `endInclusive`.
#[derive(Debug)]
pub struct ZiIteratingTransformer {
    codec: Arc<ZiTableCodec>,
}

impl ZiIteratingTransformer {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self { codec }
    }
}

impl ZiTransformer for ZiIteratingTransformer {
    fn name(&self) -> &'static str {
        "ITERATING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        if !table.trim().is_empty() {
            return Err(ZiError::configuration(
                "'ITERATING' transformer generates a new table and does not accept an input table",
            ));
        }
        let start = properties.required_i64(START_INCLUSIVE)?;
        let end = properties.required_i64(END_INCLUSIVE)?;
        if start > end {
            return Err(ZiError::cardinality(format!(
                "'{START_INCLUSIVE}' ({start}) must be less than or equal to '{END_INCLUSIVE}' ({end})"
            )));
        }

        let rows = (start..=end).map(|value| vec![value.to_string()]).collect();
        let iterated = ZiTable::new(vec![ITERATOR_COLUMN.to_string()], rows)?;
        self.codec.serialize(&iterated, properties)
    }
}

#[allow(non_snake_case)]
pub fn iterating_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiIteratingTransformer::new(context.codec())))
}
