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


use crate::errors::{Result, ZiError};
use crate::properties::ZiTableProperties;
use crate::transformer::{execute_transformer, ZiTransformer};

/// Linear chain of transformers; each step receives the previous step's output.
#[derive(Debug, Default)]
pub struct ZiTransformPipeline {
    steps: Vec<(Box<dyn ZiTransformer>, ZiTableProperties)>,
}

impl ZiTransformPipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn step(mut self, transformer: Box<dyn ZiTransformer>, properties: ZiTableProperties) -> Self {
        self.steps.push((transformer, properties));
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the steps, in execution order.
    pub fn names(&self) -> Vec<&'static str> {
        self.steps.iter().map(|(transformer, _)| transformer.name()).collect()
    }

    /// Ensures the pipeline contains at least one step.
    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ZiError::configuration("table pipeline has no steps configured"));
        }
        Ok(())
    }

    /// Runs every step in order. The first error stops the chain.
    pub fn run(&self, table: &str) -> Result<String> {
        let mut current = table.to_string();
        for (index, (transformer, properties)) in self.steps.iter().enumerate() {
            let input_lines = text_line_count(&current);
            current = execute_transformer(transformer.as_ref(), &current, properties)?;
            log::debug!(
                "table pipeline step #{index} {}: {input_lines} -> {} lines",
                transformer.name(),
                text_line_count(&current)
            );
        }
        Ok(current)
    }
}

/// Non-blank lines of table text, header and comments included.
fn text_line_count(table: &str) -> usize {
    table.lines().filter(|line| !line.trim().is_empty()).count()
}
