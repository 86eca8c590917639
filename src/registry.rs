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


//! # Zi Transformer Registry
//!
//! Maps transformer names to factories. Factories receive the shared
//! [`ZiTransformContext`], so every created transformer uses the same codec,
//! table source and expression services.

use std::collections::HashMap;

use serde_json::Value;

use crate::context::ZiTransformContext;
use crate::errors::{Result, ZiError};
use crate::pipeline::ZiTransformPipeline;
use crate::properties::ZiTableProperties;
use crate::transformer::ZiTransformer;
use crate::transformers;

pub type TransformerFactory = fn(&ZiTransformContext) -> Result<Box<dyn ZiTransformer>>;

/// Registry that knows how to instantiate transformers by name.
#[derive(Debug)]
pub struct ZiTransformerRegistry {
    context: ZiTransformContext,
    factories: HashMap<String, TransformerFactory>,
}

impl ZiTransformerRegistry {
    pub fn new(context: ZiTransformContext) -> Self {
        Self {
            context,
            factories: HashMap::new(),
        }
    }

    /// Creates a registry pre-loaded with the bundled transformers.
    pub fn with_defaults(context: ZiTransformContext) -> Self {
        let mut registry = Self::new(context);
        registry.register_defaults();
        registry
    }

    /// Replaces any factory already registered under `name`.
    pub fn register(&mut self, name: impl Into<String>, factory: TransformerFactory) {
        self.factories.insert(name.into(), factory);
    }

    fn register_defaults(&mut self) {
        self.register(
            "FILTERING",
            transformers::filter::filtering_factory as TransformerFactory,
        );
        self.register(
            "DISTINCTING",
            transformers::distinct::distincting_factory as TransformerFactory,
        );
        self.register(
            "SORTING",
            transformers::sort::sorting_factory as TransformerFactory,
        );
        self.register(
            "INDEXING",
            transformers::index::indexing_factory as TransformerFactory,
        );
        self.register(
            "ITERATING",
            transformers::iterate::iterating_factory as TransformerFactory,
        );
        self.register(
            "REPEATING",
            transformers::repeat::repeating_factory as TransformerFactory,
        );
        self.register(
            "INNER_JOIN",
            transformers::join::inner_join_factory as TransformerFactory,
        );
        self.register(
            "LEFT_JOIN",
            transformers::join::left_join_factory as TransformerFactory,
        );
        self.register(
            "MERGING",
            transformers::merge::merging_factory as TransformerFactory,
        );
        self.register(
            "RESOLVING_EXPRESSIONS_EAGERLY",
            transformers::resolve::resolving_expressions_eagerly_factory as TransformerFactory,
        );
    }

    pub fn context(&self) -> &ZiTransformContext {
        &self.context
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Instantiates the transformer registered under `name`.
    pub fn create(&self, name: &str) -> Result<Box<dyn ZiTransformer>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| ZiError::configuration(format!("unknown table transformer '{name}'")))?;
        factory(&self.context)
    }

    /// Properties seeded with this registry's default separators.
    pub fn properties(&self) -> ZiTableProperties {
        ZiTableProperties::new(self.context.config())
    }

    /// Builds a pipeline from a sequence of configuration steps.
    ///
    /// Each step is an object with a string `transformer` and an optional
    /// `properties` object whose values are strings, numbers or booleans.
    pub fn build_from_config(&self, steps: &[Value]) -> Result<ZiTransformPipeline> {
        let mut pipeline = ZiTransformPipeline::new();
        for (index, step) in steps.iter().enumerate() {
            let object = step.as_object().ok_or_else(|| {
                ZiError::configuration(format!("pipeline step #{index} must be an object"))
            })?;

            let name = object
                .get("transformer")
                .and_then(Value::as_str)
                .ok_or_else(|| {
                    ZiError::configuration(format!(
                        "pipeline step #{index} missing string 'transformer'"
                    ))
                })?;

            let mut properties = self.properties();
            if let Some(values) = object.get("properties") {
                let values = values.as_object().ok_or_else(|| {
                    ZiError::configuration(format!(
                        "pipeline step #{index} 'properties' must be an object"
                    ))
                })?;
                for (key, value) in values {
                    let value = match value {
                        Value::String(text) => text.clone(),
                        Value::Number(number) => number.to_string(),
                        Value::Bool(flag) => flag.to_string(),
                        _ => {
                            return Err(ZiError::configuration(format!(
                                "pipeline step #{index} property '{key}' must be a string, number or boolean"
                            )))
                        }
                    };
                    properties.set(key, &value);
                }
            }

            pipeline = pipeline.step(self.create(name)?, properties);
        }

        pipeline.validate()?;
        Ok(pipeline)
    }
}
