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

use zitable::codec::ZiTableCodec;
use zitable::errors::ZiError;
use zitable::properties::ZiTableProperties;
use zitable::transformer::ZiTransformer;
use zitable::transformers::filter::{parse_row_indexes, ZiFilteringTransformer};

const TABLE: &str = "|key1|key2|key3|\n|a|b|c|\n|d|e|f|\n|g|h|i|";

fn filtering() -> ZiFilteringTransformer {
    ZiFilteringTransformer::new(Arc::new(ZiTableCodec::default()))
}

fn filter(properties: &[(&str, &str)]) -> zitable::Result<String> {
    let properties = properties
        .iter()
        .fold(ZiTableProperties::default(), |bag, (key, value)| bag.with(key, value));
    filtering().transform(TABLE, &properties)
}

#[test]
fn max_columns_and_max_rows_truncate() {
    assert_eq!(
        filter(&[("byMaxColumns", "2"), ("byMaxRows", "1")]).unwrap(),
        "|key1|key2|\n|a|b|"
    );
    assert_eq!(filter(&[("byMaxColumns", "10")]).unwrap(), TABLE);
    assert_eq!(filter(&[("byMaxRows", "0")]).unwrap(), "|key1|key2|key3|");
}

#[test]
fn column_names_select_and_reorder() {
    assert_eq!(
        filter(&[("byColumnNames", "key3;key1")]).unwrap(),
        "|key3|key1|\n|c|a|\n|f|d|\n|i|g|"
    );
}

#[test]
fn moving_a_dashed_cell_to_the_first_column_fails_instead_of_dropping_the_row() {
    let table = "|key1|key2|\n|a|--b|\n|c|d|";
    let properties = ZiTableProperties::default().with("byColumnNames", "key2;key1");
    let err = filtering().transform(table, &properties).unwrap_err();
    assert!(matches!(err, ZiError::Format { .. }));
}

#[test]
fn unknown_column_names_are_listed() {
    let err = filter(&[("byColumnNames", "key1;other;missing")]).unwrap_err();
    assert!(matches!(err, ZiError::Referential { .. }));
    assert!(err.message().contains("other, missing"));
}

#[test]
fn row_indexes_follow_list_order() {
    assert_eq!(
        filter(&[("byRowIndexes", "2;0-1;0"), ("byColumnNames", "key1")]).unwrap(),
        "|key1|\n|g|\n|a|\n|d|\n|a|"
    );
    assert_eq!(parse_row_indexes("1-3; 5", 6).unwrap(), vec![1, 2, 3, 5]);
}

#[test]
fn malformed_row_indexes_are_format_errors() {
    for indexes in ["2-1", "x", "1-", "-1"] {
        let err = filter(&[("byRowIndexes", indexes)]).unwrap_err();
        assert!(matches!(err, ZiError::Format { .. }), "{indexes}: {err:?}");
    }
}

#[test]
fn row_index_out_of_bounds_is_referential() {
    let err = filter(&[("byRowIndexes", "0;3")]).unwrap_err();
    assert!(matches!(err, ZiError::Referential { .. }));
}

#[test]
fn huge_row_index_ranges_are_rejected_before_expansion() {
    for indexes in ["0-18446744073709551615", "0-4000000000", "1;2-3"] {
        let err = filter(&[("byRowIndexes", indexes)]).unwrap_err();
        assert!(matches!(err, ZiError::Referential { .. }), "{indexes}: {err:?}");
    }
    assert!(matches!(
        parse_row_indexes("0-18446744073709551615", 2).unwrap_err(),
        ZiError::Referential { .. }
    ));
}

#[test]
fn random_rows_are_distinct_and_keep_relative_order() {
    let rows = ["|a|b|c|", "|d|e|f|", "|g|h|i|"];
    for _ in 0..20 {
        let output = filter(&[("byRandomRows", "2")]).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "|key1|key2|key3|");
        let positions: Vec<usize> = lines[1..]
            .iter()
            .map(|line| rows.iter().position(|row| row == line).unwrap())
            .collect();
        assert!(positions[0] < positions[1]);
    }
}

#[test]
fn seeded_random_rows_are_reproducible() {
    let properties = ZiTableProperties::default().with("byRandomRows", "2");
    let first = filtering().with_seed(7).transform(TABLE, &properties).unwrap();
    let second = filtering().with_seed(7).transform(TABLE, &properties).unwrap();
    assert_eq!(first, second);
}

#[test]
fn random_rows_cannot_exceed_row_count() {
    assert!(matches!(
        filter(&[("byRandomRows", "4")]).unwrap_err(),
        ZiError::Cardinality { .. }
    ));
    assert_eq!(filter(&[("byRandomRows", "3")]).unwrap(), TABLE);
}

#[test]
fn regex_filters_must_all_match_fully() {
    assert_eq!(
        filter(&[("column.key1", "a|g")]).unwrap(),
        "|key1|key2|key3|\n|a|b|c|\n|g|h|i|"
    );
    assert_eq!(
        filter(&[("column.key1", "[a-d]"), ("column.key2", "e")]).unwrap(),
        "|key1|key2|key3|\n|d|e|f|"
    );
    assert_eq!(filter(&[("column.key1", "a.")]).unwrap(), "|key1|key2|key3|");
}

#[test]
fn regex_filter_errors() {
    assert!(matches!(
        filter(&[("column.key1", "(")]).unwrap_err(),
        ZiError::Format { .. }
    ));
    assert!(matches!(
        filter(&[("column.other", "a")]).unwrap_err(),
        ZiError::Referential { .. }
    ));
    assert!(matches!(
        filter(&[("column.key1", "a"), ("byMaxRows", "1")]).unwrap_err(),
        ZiError::Configuration { .. }
    ));
}

#[test]
fn conflicting_selectors_are_rejected() {
    let pairs = [
        ("byMaxColumns", "byColumnNames"),
        ("byMaxRows", "byRowIndexes"),
        ("byRandomRows", "byRowIndexes"),
        ("byRandomRows", "byMaxRows"),
    ];
    for (first, second) in pairs {
        let err = filter(&[(first, "1"), (second, "1")]).unwrap_err();
        assert_eq!(
            err.message(),
            format!("Conflicting properties declaration found: '{first}' and '{second}'")
        );
    }
}

#[test]
fn properties_are_validated_before_parsing() {
    let malformed = "|a|\n|1|2|";
    let err = filtering()
        .transform(malformed, &ZiTableProperties::default())
        .unwrap_err();
    assert!(matches!(err, ZiError::Configuration { .. }));
    assert!(err.message().contains("byRandomRows"));
}
