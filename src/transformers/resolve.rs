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
use crate::resolver::{ZiExpressionResolver, ZiStoryControls};
use crate::transformer::ZiTransformer;

/// `RESOLVING_EXPRESSIONS_EAGERLY`: evaluates the expressions of every cell
/// once, at transformation time.
#[derive(Debug)]
pub struct ZiEagerResolvingTransformer {
    codec: Arc<ZiTableCodec>,
    resolver: Arc<dyn ZiExpressionResolver>,
    controls: Arc<dyn ZiStoryControls>,
}

impl ZiEagerResolvingTransformer {
    pub fn new(
        codec: Arc<ZiTableCodec>,
        resolver: Arc<dyn ZiExpressionResolver>,
        controls: Arc<dyn ZiStoryControls>,
    ) -> Self {
        Self {
            codec,
            resolver,
            controls,
        }
    }
}

impl ZiTransformer for ZiEagerResolvingTransformer {
    fn name(&self) -> &'static str {
        "RESOLVING_EXPRESSIONS_EAGERLY"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let dry_run = self.controls.dry_run();
        let mut resolved = self.codec.parse(table, properties)?;
        resolved.try_map_cells(|cell| self.resolver.resolve(cell, dry_run))?;
        self.codec.serialize(&resolved, properties)
    }
}

#[allow(non_snake_case)]
pub fn resolving_expressions_eagerly_factory(
    context: &ZiTransformContext,
) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiEagerResolvingTransformer::new(
        context.codec(),
        context.resolver(),
        context.story_controls(),
    )))
}
