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

//! Expression resolution services used by the eager resolving transformer.

use std::fmt::Debug;

use crate::errors::Result;

/// Evaluates the expressions embedded in a cell.
pub trait ZiExpressionResolver: Debug + Send + Sync {
    fn resolve(&self, value: &str, dry_run: bool) -> Result<String>;
}

/// Source of the run-wide dry-run flag.
pub trait ZiStoryControls: Debug + Send + Sync {
    fn dry_run(&self) -> bool;
}

/// Controls with a fixed dry-run flag.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiStaticStoryControls {
    dry_run: bool,
}

impl ZiStaticStoryControls {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }
}

impl ZiStoryControls for ZiStaticStoryControls {
    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Resolver that leaves cells untouched; used when no expression service is wired.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZiIdentityResolver;

impl ZiExpressionResolver for ZiIdentityResolver {
    fn resolve(&self, value: &str, _dry_run: bool) -> Result<String> {
        Ok(value.to_string())
    }
}
