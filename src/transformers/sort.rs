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


//! `SORTING`: stable multi-key sort.
//!
//! `byColumns` lists the key columns separated by `|`, `sortingTypes` gives
//! one [`ZiSortingType`] for all keys or one per key, and `order` flips the
//! whole comparison.

use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::Arc;

use bigdecimal::BigDecimal;

use crate::codec::ZiTableCodec;
use crate::context::ZiTransformContext;
use crate::errors::{Result, ZiError};
use crate::properties::{ZiFluentEnum, ZiTableProperties};
use crate::table::{ZiRow, ZiTable};
use crate::tokenizer::split_list;
use crate::transformer::ZiTransformer;

pub const BY_COLUMNS: &str = "byColumns";
pub const ORDER: &str = "order";
pub const SORTING_TYPES: &str = "sortingTypes";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiSortOrder {
    Ascending,
    Descending,
}

impl ZiSortOrder {
    /// Applies the direction to an ascending comparison.
    pub fn direct(self, ordering: Ordering) -> Ordering {
        match self {
            ZiSortOrder::Ascending => ordering,
            ZiSortOrder::Descending => ordering.reverse(),
        }
    }
}

impl ZiFluentEnum for ZiSortOrder {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("ASCENDING", ZiSortOrder::Ascending),
        ("DESCENDING", ZiSortOrder::Descending),
    ];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZiSortingType {
    /// Lexicographic comparison of the raw values.
    String,
    /// Arbitrary-precision decimal comparison.
    Number,
}

impl ZiSortingType {
    fn key(self, value: &str) -> Result<ZiSortKey> {
        match self {
            ZiSortingType::String => Ok(ZiSortKey::Text(value.to_string())),
            ZiSortingType::Number => BigDecimal::from_str(value.trim())
                .map(ZiSortKey::Number)
                .map_err(|_| {
                    ZiError::format(format!(
                        "Unable to sort by NUMBER, because the value '{value}' is not a number"
                    ))
                }),
        }
    }
}

impl ZiFluentEnum for ZiSortingType {
    const VARIANTS: &'static [(&'static str, Self)] = &[
        ("STRING", ZiSortingType::String),
        ("NUMBER", ZiSortingType::Number),
    ];
}

#[derive(Debug)]
enum ZiSortKey {
    Text(String),
    Number(BigDecimal),
    /// Key column absent from the table; compares equal to everything.
    Absent,
}

impl ZiSortKey {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ZiSortKey::Text(a), ZiSortKey::Text(b)) => a.cmp(b),
            (ZiSortKey::Number(a), ZiSortKey::Number(b)) => a.cmp(b),
            _ => Ordering::Equal,
        }
    }
}

#[derive(Debug)]
pub struct ZiSortingTransformer {
    codec: Arc<ZiTableCodec>,
}

impl ZiSortingTransformer {
    pub fn new(codec: Arc<ZiTableCodec>) -> Self {
        Self { codec }
    }

    fn sorting_types(properties: &ZiTableProperties, key_count: usize) -> Result<Vec<ZiSortingType>> {
        let Some(raw) = properties.get(SORTING_TYPES) else {
            return Ok(vec![ZiSortingType::String; key_count]);
        };
        let types = split_list(raw, '|')
            .iter()
            .map(|token| ZiSortingType::parse_property(SORTING_TYPES, token))
            .collect::<Result<Vec<_>>>()?;
        match types.len() {
            1 => Ok(vec![types[0]; key_count]),
            n if n == key_count => Ok(types),
            n => Err(ZiError::configuration(format!(
                "Please, specify either one sorting type or one per column: {key_count} columns, but {n} sorting types"
            ))),
        }
    }
}

impl ZiTransformer for ZiSortingTransformer {
    fn name(&self) -> &'static str {
        "SORTING"
    }

    fn transform(&self, table: &str, properties: &ZiTableProperties) -> Result<String> {
        let key_names = split_list(properties.required(BY_COLUMNS)?, '|');
        let order = properties
            .get_enum::<ZiSortOrder>(ORDER)?
            .unwrap_or(ZiSortOrder::Ascending);
        let types = Self::sorting_types(properties, key_names.len())?;

        let parsed = self.codec.parse(table, properties)?;
        let key_columns: Vec<Option<usize>> = key_names
            .iter()
            .map(|name| {
                let index = parsed.column_index(name);
                if index.is_none() {
                    log::warn!("sorting key column '{name}' is absent from the table and is ignored");
                }
                index
            })
            .collect();

        let (headers, rows) = parsed.into_parts();
        let mut keyed: Vec<(Vec<ZiSortKey>, ZiRow)> = Vec::with_capacity(rows.len());
        for row in rows {
            let keys = key_columns
                .iter()
                .zip(&types)
                .map(|(column, sorting_type)| match column {
                    Some(index) => sorting_type.key(&row[*index]),
                    None => Ok(ZiSortKey::Absent),
                })
                .collect::<Result<Vec<_>>>()?;
            keyed.push((keys, row));
        }

        keyed.sort_by(|(left, _), (right, _)| {
            let ordering = left
                .iter()
                .zip(right)
                .map(|(a, b)| a.compare(b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal);
            order.direct(ordering)
        });

        let sorted = ZiTable::new(headers, keyed.into_iter().map(|(_, row)| row).collect())?;
        self.codec.serialize(&sorted, properties)
    }
}

#[allow(non_snake_case)]
pub fn sorting_factory(context: &ZiTransformContext) -> Result<Box<dyn ZiTransformer>> {
    Ok(Box::new(ZiSortingTransformer::new(context.codec())))
}
