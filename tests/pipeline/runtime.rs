//! Copyright © 2025-2026 Wenze Wei. All Rights Reserved.
//!
//! This file is part of Zi.
//! The Zi project belongs to the Dunimd project team.
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

use serde_json::json;
use zitable::codec::ZiTableCodec;
use zitable::context::ZiTransformContext;
use zitable::errors::{Result, ZiError};
use zitable::pipeline::ZiTransformPipeline;
use zitable::properties::ZiTableProperties;
use zitable::registry::ZiTransformerRegistry;
use zitable::source::ZiInMemoryTableSource;
use zitable::transformer::{execute_transformer, ZiTransformer};

fn registry() -> ZiTransformerRegistry {
    let codec = Arc::new(ZiTableCodec::default());
    let source = ZiInMemoryTableSource::new(codec.clone())
        .insert("/users.table", "|id|name|\n|2|bob|\n|1|al|")
        .insert("/roles.table", "|id|role|\n|1|admin|\n|2|guest|");
    ZiTransformerRegistry::with_defaults(ZiTransformContext::new(codec, Arc::new(source)))
}

#[derive(Debug)]
struct Failing;

impl ZiTransformer for Failing {
    fn name(&self) -> &'static str {
        "FAILING"
    }

    fn transform(&self, _table: &str, _properties: &ZiTableProperties) -> Result<String> {
        Err(ZiError::format("broken step"))
    }
}

fn failing_factory(_context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(Failing))
}

#[test]
fn registry_knows_every_bundled_transformer() {
    assert_eq!(
        registry().names(),
        [
            "DISTINCTING",
            "FILTERING",
            "INDEXING",
            "INNER_JOIN",
            "ITERATING",
            "LEFT_JOIN",
            "MERGING",
            "REPEATING",
            "RESOLVING_EXPRESSIONS_EAGERLY",
            "SORTING",
        ]
    );
    for name in registry().names() {
        assert_eq!(registry().create(name).unwrap().name(), name);
    }
}

#[test]
fn unknown_transformer_is_a_configuration_error() {
    let err = registry().create("PIVOTING").unwrap_err();
    assert!(matches!(err, ZiError::Configuration { .. }));
}

#[test]
fn custom_factories_can_be_registered() {
    let mut registry = registry();
    registry.register("FAILING", failing_factory);
    assert!(registry.contains("FAILING"));
    let failing = registry.create("FAILING").unwrap();
    assert_eq!(
        execute_transformer(failing.as_ref(), "|a|", &ZiTableProperties::default()).unwrap_err(),
        ZiError::format("broken step")
    );
}

#[test]
fn pipeline_feeds_each_output_into_next_step() {
    let registry = registry();
    let pipeline = ZiTransformPipeline::new()
        .step(
            registry.create("ITERATING").unwrap(),
            registry
                .properties()
                .with("startInclusive", "1")
                .with("endInclusive", "3"),
        )
        .step(
            registry.create("REPEATING").unwrap(),
            registry.properties().with("times", "2"),
        )
        .step(
            registry.create("SORTING").unwrap(),
            registry
                .properties()
                .with("byColumns", "iterator")
                .with("sortingTypes", "NUMBER")
                .with("order", "DESCENDING"),
        )
        .step(
            registry.create("DISTINCTING").unwrap(),
            registry.properties().with("byColumnNames", "iterator"),
        );

    assert_eq!(pipeline.len(), 4);
    assert_eq!(pipeline.names(), ["ITERATING", "REPEATING", "SORTING", "DISTINCTING"]);
    assert_eq!(pipeline.run("").unwrap(), "|iterator|\n|3|\n|2|\n|1|");
}

#[test]
fn pipeline_stops_at_first_error() {
    let registry = registry();
    let pipeline = ZiTransformPipeline::new()
        .step(Box::new(Failing), registry.properties())
        .step(
            registry.create("INDEXING").unwrap(),
            registry.properties().with("order", "ASCENDING"),
        );
    assert_eq!(pipeline.run("|a|\n|1|").unwrap_err(), ZiError::format("broken step"));
}

#[test]
fn empty_pipeline_does_not_validate() {
    assert!(matches!(
        ZiTransformPipeline::new().validate().unwrap_err(),
        ZiError::Configuration { .. }
    ));
}

#[test]
fn pipeline_builds_from_json_steps() {
    let steps = vec![
        json!({
            "transformer": "INNER_JOIN",
            "properties": {
                "tables": "/users.table;/roles.table",
                "leftTableJoinColumn": "id",
                "rightTableJoinColumn": "id"
            }
        }),
        json!({
            "transformer": "SORTING",
            "properties": {"byColumns": "id"}
        }),
        json!({
            "transformer": "FILTERING",
            "properties": {"byMaxRows": 1, "byColumnNames": "name;role"}
        }),
    ];
    let pipeline = registry().build_from_config(&steps).unwrap();
    assert_eq!(pipeline.run("").unwrap(), "|name|role|\n|al|admin|");
}

#[test]
fn invalid_json_steps_are_rejected() {
    let registry = registry();
    for steps in [
        vec![],
        vec![json!("SORTING")],
        vec![json!({"properties": {}})],
        vec![json!({"transformer": "SORTING", "properties": []})],
        vec![json!({"transformer": "SORTING", "properties": {"byColumns": null}})],
        vec![json!({"transformer": "UNKNOWN"})],
    ] {
        let err = registry.build_from_config(&steps).unwrap_err();
        assert!(matches!(err, ZiError::Configuration { .. }), "{steps:?}");
    }
}
