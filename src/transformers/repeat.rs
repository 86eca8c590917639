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
use crate::errors::Result;
use crate::properties::ZiTableProperties;
use crate::transformer::ZiTransformer;

pub const TIMES: &str = "times";

/// `REPEATING`: concatenates the rows `times` times.
#[derive(Debug)]
pub struct ZiRepeatingTransformer {
    codec: Arc<ZiTableCodec>,
}

impl ZiRepeatingTransformer {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self { codec }
    }
}

impl ZiTransformer for ZiRepeatingTransformer {
    fn name(&self) -> &'static str {
        "REPEATING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let times = properties.required_usize(TIMES)?;

        let parsed = self.codec.parse(table, properties)?;
        let rows = std::iter::repeat(parsed.rows())
            .take(times)
            .flatten()
            .cloned()
            .collect();
        let repeated = parsed.with_rows(rows)?;
        self.codec.serialize(&repeated, properties)
    }
}

#[allow(non_snake_case)]
pub fn repeating_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiRepeatingTransformer::new(context.codec())))
}
