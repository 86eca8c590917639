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

//! # Zi Table Properties
//!
//! The per-invocation property bag handed to a transformer. It carries the
//! three table separators plus free-form `key=value` properties whose meaning
//! depends on the transformer.
//!
//! Typed accessors return `Ok(None)` when a key is absent and a
//! [`ZiError::Format`] when it is present but unreadable, so transformers can
//! tell "not configured" from "misconfigured".

use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::config::ZiTableConfig;
use crate::errors::{Result, ZiError};
use crate::tokenizer::split_escaped;

pub const HEADER_SEPARATOR_KEY: &str = "headerSeparator";
pub const VALUE_SEPARATOR_KEY: &str = "valueSeparator";
pub const IGNORABLE_SEPARATOR_KEY: &str = "ignorableSeparator";

/// Named enum constants that can be read from loosely written tokens.
///
/// Tokens are matched after trimming, upper-casing and turning spaces or
/// dashes into underscores, so ` descending `, `Descending` and `DESCENDING`
/// are all the same constant.
pub trait ZiFluentEnum: Sized + Copy + Debug + 'static {
    /// Canonical constant names with their values.
    const VARIANTS: &'static [(&'static str, Self)];

    fn from_token(token: &str) -> Option<Self> {
        let normalized = token.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        Self::VARIANTS
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, value)| *value)
    }

    fn variant_names() -> Vec<&'static str> {
        Self::VARIANTS.iter().map(|(name, _)| *name).collect()
    }

    /// Like [`ZiFluentEnum::from_token`] but reports the accepted range.
    fn parse_property(key: &str, token: &str) -> Result<Self> {
        Self::from_token(token).ok_or_else(|| {
            ZiError::format(format!(
                "Value of property '{key}' must be from range [{}], but was '{token}'",
                Self::variant_names().join(", ")
            ))
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ZiTableProperties {
    header_separator: String,
    value_separator: String,
    ignorable_separator: String,
    values: BTreeMap<String, String>,
}

impl Default for ZiTableProperties {
    fn default() -> Self {
        Self::new(&ZiTableConfig::default())
    }
}

impl ZiTableProperties {
    /// Empty bag using the separators from `config`.
    pub fn new(config: &ZiTableConfig) -> Self {
        Self {
            header_separator: config.header_separator.clone(),
            value_separator: config.value_separator.clone(),
            ignorable_separator: config.ignorable_separator.clone(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style [`ZiTableProperties::set`].
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.set(key, value);
        self
    }

    /// Stores a property. Separator keys update the separators instead.
    pub fn set(&mut self, key: &str, value: &str) {
        match key {
            HEADER_SEPARATOR_KEY => self.header_separator = value.to_string(),
            VALUE_SEPARATOR_KEY => self.value_separator = value.to_string(),
            IGNORABLE_SEPARATOR_KEY => self.ignorable_separator = value.to_string(),
            _ => {
                self.values.insert(key.to_string(), value.to_string());
            }
        }
    }

    /// Parses the body of an inline block (`key=value, key2=value2`, without
    /// the braces). `\,` escapes a literal comma.
    pub fn parse_inline(body: &str, config: &ZiTableConfig) -> Result<Self> {
        Self::new(config).merge_inline(body)
    }

    /// Copy of `self` overridden by the entries of an inline block body.
    pub fn merge_inline(&self, body: &str) -> Result<Self> {
        let mut merged = self.clone();
        for entry in split_escaped(body, ',') {
            if entry.trim().is_empty() {
                continue;
            }
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                ZiError::format(format!("Table property '{}' has no value", entry.trim()))
            })?;
            merged.set(key.trim(), value.trim());
        }
        Ok(merged)
    }

    pub fn header_separator(&self) -> &str {
        &self.header_separator
    }

    pub fn value_separator(&self) -> &str {
        &self.value_separator
    }

    pub fn ignorable_separator(&self) -> &str {
        &self.ignorable_separator
    }

    /// Whether all three separators match the process-wide defaults.
    pub fn uses_default_separators(&self, config: &ZiTableConfig) -> bool {
        self.header_separator == config.header_separator
            && self.value_separator == config.value_separator
            && self.ignorable_separator == config.ignorable_separator
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Value of a key that must be present.
    pub fn required(&self, key: &str) -> Result<&str> {
        self.get(key)
            .ok_or_else(|| ZiError::configuration(format!("'{key}' is not set in table properties")))
    }

    /// `(suffix, value)` pairs for every key starting with `prefix`, in key order.
    pub fn with_prefix<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.values.iter().filter_map(move |(key, value)| {
            key.strip_prefix(prefix)
                .map(|suffix| (suffix, value.as_str()))
        })
    }

    pub fn get_usize(&self, key: &str) -> Result<Option<usize>> {
        self.get(key).map(|raw| parse_usize(key, raw)).transpose()
    }

    pub fn get_i64(&self, key: &str) -> Result<Option<i64>> {
        self.get(key).map(|raw| parse_i64(key, raw)).transpose()
    }

    pub fn required_usize(&self, key: &str) -> Result<usize> {
        parse_usize(key, self.required(key)?)
    }

    pub fn required_i64(&self, key: &str) -> Result<i64> {
        parse_i64(key, self.required(key)?)
    }

    pub fn get_bool(&self, key: &str) -> Result<Option<bool>> {
        self.get(key)
            .map(|raw| match raw.trim().to_ascii_lowercase().as_str() {
                "true" => Ok(true),
                "false" => Ok(false),
                _ => Err(ZiError::format(format!(
                    "Property '{key}' must be 'true' or 'false', but was '{raw}'"
                ))),
            })
            .transpose()
    }

    pub fn get_enum<E: ZiFluentEnum>(&self, key: &str) -> Result<Option<E>> {
        self.get(key).map(|raw| E::parse_property(key, raw)).transpose()
    }

    /// Fails with the canonical conflict message when both keys are set.
    pub fn ensure_not_both(&self, first: &str, second: &str) -> Result<()> {
        if self.contains(first) && self.contains(second) {
            return Err(ZiError::configuration(format!(
                "Conflicting properties declaration found: '{first}' and '{second}'"
            )));
        }
        Ok(())
    }
}

fn parse_usize(key: &str, raw: &str) -> Result<usize> {
    raw.trim().parse::<usize>().map_err(|_| {
        ZiError::format(format!(
            "Property '{key}' must be a non-negative integer, but was '{raw}'"
        ))
    })
}

fn parse_i64(key: &str, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ZiError::format(format!("Property '{key}' must be an integer, but was '{raw}'")))
}
