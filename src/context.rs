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
use crate::config::ZiTableConfig;
use crate::loader::ZiTableLoader;
use crate::resolver::{
    ZiExpressionResolver, ZiIdentityResolver, ZiStaticStoryControls, ZiStoryControls,
};
use crate::source::ZiTableSource;

/// Services shared by every transformer created from one registry.
#[derive(Clone, Debug)]
pub struct ZiTransformContext {
    codec: Arc<ZiTableCodec>,
    source: Arc<dyn ZiTableSource>,
    resolver: Arc<dyn ZiExpressionResolver>,
    controls: Arc<dyn ZiStoryControls>,
}

impl ZiTransformContext {
    /// Context with an identity resolver and dry run switched off.
    pub fn new(codec: Arc<ZiTableCodec>, source: Arc<dyn ZiTableSource>) -> Self {
        Self {
            codec,
            source,
            resolver: Arc::new(ZiIdentityResolver),
            controls: Arc::new(ZiStaticStoryControls::new(false)),
        }
    }

    pub fn with_resolver(mut self, resolver: Arc<dyn ZiExpressionResolver>) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn with_story_controls(mut self, controls: Arc<dyn ZiStoryControls>) -> Self {
        self.controls = controls;
        self
    }

    pub fn codec(&self) -> Arc<ZiTableCodec> {
        self.codec.clone()
    }

    pub fn config(&self) -> &ZiTableConfig {
        self.codec.config()
    }

    pub fn source(&self) -> Arc<dyn ZiTableSource> {
        self.source.clone()
    }

    pub fn resolver(&self) -> Arc<dyn ZiExpressionResolver> {
        self.resolver.clone()
    }

    pub fn story_controls(&self) -> Arc<dyn ZiStoryControls> {
        self.controls.clone()
    }

    /// Loader sharing this context's codec and source.
    pub fn loader(&self, forbid_empty_tables: bool) -> ZiTableLoader {
        ZiTableLoader::new(self.codec.clone(), self.source.clone(), forbid_empty_tables)
    }
}
