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

//! Splitting of property values on a separator that may be escaped with `\`.
//!
//! `\<sep>` yields a literal separator; a backslash before any other character
//! is kept untouched so that regexes and paths survive.

/// Splits `input` on every unescaped `separator` and unescapes `\<separator>`.
///
/// Tokens are returned verbatim (not trimmed), including empty ones.
pub fn split_escaped(input: &str, separator: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' && chars.peek() == Some(&separator) {
            current.push(separator);
            chars.next();
        } else if c == separator {
            tokens.push(std::mem::take(&mut current));
        } else {
            current.push(c);
        }
    }
    tokens.push(current);
    tokens
}

/// Splits, trims and drops blank tokens.
pub fn split_list(input: &str, separator: char) -> Vec<String> {
    split_escaped(input, separator)
        .into_iter()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Like [`split_list`] but also drops repeated tokens, keeping first-seen order.
pub fn split_unique(input: &str, separator: char) -> Vec<String> {
    let mut unique: Vec<String> = Vec::new();
    for token in split_list(input, separator) {
        if !unique.contains(&token) {
            unique.push(token);
        }
    }
    unique
}
