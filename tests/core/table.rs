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


use zitable::errors::ZiError;
use zitable::table::ZiTable;

#[test]
fn new_rejects_duplicate_headers() {
    let err = ZiTable::from_slices(&["a", "b", "a"], &[]).unwrap_err();
    assert!(matches!(err, ZiError::Format { .. }));
    assert!(err.message().contains("[a]"));
}

#[test]
fn new_rejects_rows_of_wrong_width() {
    let err = ZiTable::from_slices(&["a", "b"], &[&["1"]]).unwrap_err();
    assert!(matches!(err, ZiError::Format { .. }));
}

#[test]
fn is_empty_means_no_rows() {
    let header_only = ZiTable::from_slices(&["a"], &[]).unwrap();
    assert!(header_only.is_empty());
    assert_eq!(header_only.headers(), ["a"]);
    assert!(ZiTable::default().headers().is_empty());
}

#[test]
fn column_indices_report_every_unknown_column() {
    let table = ZiTable::from_slices(&["a", "b"], &[&["1", "2"]]).unwrap();
    assert_eq!(
        table.column_indices(&["b".to_string(), "a".to_string()], "byColumnNames").unwrap(),
        vec![1, 0]
    );

    let err = table
        .column_indices(&["x".to_string(), "a".to_string(), "y".to_string()], "byColumnNames")
        .unwrap_err();
    assert!(matches!(err, ZiError::Referential { .. }));
    assert!(err.message().contains("byColumnNames"));
    assert!(err.message().contains("x, y"));
}

#[test]
fn project_keeps_requested_columns_in_order() {
    let table = ZiTable::from_slices(&["a", "b", "c"], &[&["1", "2", "3"], &["4", "5", "6"]]).unwrap();
    let projected = table.project(&[2, 0]);
    assert_eq!(projected.headers(), ["c", "a"]);
    assert_eq!(projected.rows()[1], vec!["6", "4"]);
}

#[test]
fn value_looks_up_by_column_name() {
    let table = ZiTable::from_slices(&["a", "b"], &[&["1", "2"]]).unwrap();
    assert_eq!(table.value(0, "b"), Some("2"));
    assert_eq!(table.value(0, "z"), None);
    assert_eq!(table.value(3, "a"), None);
}

#[test]
fn push_column_refuses_existing_name() {
    let mut table = ZiTable::from_slices(&["a"], &[&["x"], &["y"]]).unwrap();
    table.push_column("n", |row| (row * 10).to_string()).unwrap();
    assert_eq!(table.rows(), [vec!["x", "0"], vec!["y", "10"]]);

    let err = table.push_column("a", |_| String::new()).unwrap_err();
    assert!(matches!(err, ZiError::Referential { .. }));
}

#[test]
fn try_map_cells_stops_at_first_error() {
    let mut table = ZiTable::from_slices(&["a", "b"], &[&["1", "bad"], &["2", "3"]]).unwrap();
    let mut visited = 0;
    let err = table
        .try_map_cells(|cell| {
            visited += 1;
            if cell == "bad" {
                Err(ZiError::resolution("bad cell"))
            } else {
                Ok(format!("<{cell}>"))
            }
        })
        .unwrap_err();
    assert_eq!(err, ZiError::resolution("bad cell"));
    assert_eq!(visited, 2);
}
