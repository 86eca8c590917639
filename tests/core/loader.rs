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


use std::fs;
use std::sync::Arc;

use tempfile::tempdir;
use zitable::codec::ZiTableCodec;
use zitable::config::ZiTableConfig;
use zitable::errors::ZiError;
use zitable::loader::ZiTableLoader;
use zitable::properties::ZiTableProperties;
use zitable::source::{ZiFileTableSource, ZiInMemoryTableSource, ZiTableSource};
use zitable::table::ZiTable;

fn codec() -> Arc<ZiTableCodec> {
    Arc::new(ZiTableCodec::new(ZiTableConfig::default()))
}

fn loader(forbid_empty_tables: bool) -> ZiTableLoader {
    let codec = codec();
    let source = ZiInMemoryTableSource::new(codec.clone())
        .insert("/one.table", "|a|\n|1|")
        .insert("/two.table", "|b|\n|2|")
        .insert("/semi;colon.table", "|c|\n|3|")
        .insert("/empty.table", "|d|")
        .insert("/tilde.table", "~e~\n~5~");
    ZiTableLoader::new(codec, Arc::new(source), forbid_empty_tables)
}

fn tables(value: &str) -> ZiTableProperties {
    ZiTableProperties::default().with("tables", value)
}

#[test]
fn referenced_tables_load_in_order() {
    let loaded = loader(true).load_tables("", &tables("/two.table; /one.table")).unwrap();
    assert_eq!(loaded[0].headers(), ["b"]);
    assert_eq!(loaded[1].headers(), ["a"]);
}

#[test]
fn inline_table_is_appended_last() {
    let loaded = loader(true).load_tables("|z|\n|9|", &tables("/one.table")).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[1], ZiTable::from_slices(&["z"], &[&["9"]]).unwrap());
}

#[test]
fn descriptors_are_deduplicated() {
    let err = loader(true).load_tables("", &tables("/one.table; /one.table ;")).unwrap_err();
    assert_eq!(err, ZiError::configuration("Please, specify more than one unique table paths"));
}

#[test]
fn inline_table_needs_a_descriptor() {
    let err = loader(true)
        .load_tables("|z|\n|9|", &ZiTableProperties::default())
        .unwrap_err();
    assert_eq!(err, ZiError::configuration("Please, specify at least one table path"));
}

#[test]
fn escaped_semicolon_stays_in_descriptor() {
    let loaded = loader(true)
        .load_tables("", &tables(r"/semi\;colon.table;/one.table"))
        .unwrap();
    assert_eq!(loaded[0].headers(), ["c"]);
}

#[test]
fn empty_tables_are_listed_when_forbidden() {
    let err = loader(true)
        .load_tables("|z|", &tables("/one.table;/empty.table"))
        .unwrap_err();
    assert_eq!(
        err,
        ZiError::cardinality("Empty tables are not allowed, but [table at index 2, input table] is/are empty")
    );

    let loaded = loader(false)
        .load_tables("|z|", &tables("/one.table;/empty.table"))
        .unwrap();
    assert_eq!(loaded.len(), 3);
}

#[test]
fn missing_descriptor_is_an_io_error() {
    let err = loader(false).load_tables("", &tables("/one.table;/nope.table")).unwrap_err();
    assert!(matches!(err, ZiError::Io(_)));
}

#[test]
fn inline_table_keeps_custom_separators() {
    let properties = tables("/tilde.table")
        .with("headerSeparator", "~")
        .with("valueSeparator", "~")
        .with("ignorableSeparator", "~--");
    let loaded = loader(true).load_tables("~x~y~\n~--note\n~1~2~", &properties).unwrap();
    assert_eq!(loaded[0], ZiTable::from_slices(&["e"], &[&["5"]]).unwrap());
    assert_eq!(loaded[1], ZiTable::from_slices(&["x", "y"], &[&["1", "2"]]).unwrap());
}

#[test]
fn file_source_reads_relative_to_base_dir() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("users.table"), "|name|\n|alice|\n").unwrap();
    let source = ZiFileTableSource::new(dir.path(), codec());

    let table = source.load("/users.table", &ZiTableProperties::default()).unwrap();
    assert_eq!(table, ZiTable::from_slices(&["name"], &[&["alice"]]).unwrap());

    let err = source.load("absent.table", &ZiTableProperties::default()).unwrap_err();
    assert!(matches!(err, ZiError::Io(_)));
}
