// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/parser.rs
//!
//! Shortcut string parser
//!
//! Menu items declare shortcuts as free-form strings such as `"Ctrl+S"`,
//! `"ctrl + shift + p"` or `"Alt+A"`. This module turns them into
//! [`KeyCombo`] values and into the canonical registry key form.
//!
//! # Architecture
//! The parser uses nom combinators: a shortcut is a `+`-separated list of
//! tokens, each surrounded by optional whitespace. Every token but the last
//! must name a modifier; the last token is the key.

use nom::{
    bytes::complete::take_while1,
    character::complete::{char, space0},
    combinator::all_consuming,
    multi::separated_list1,
    sequence::delimited,
    IResult, Parser,
};
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

use crate::core::types::{KeyCombo, Modifier};

static WHITESPACE: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(r"\s+"));

/// Shortcut parse errors
#[derive(Debug, Error, PartialEq)]
pub enum ShortcutParseError {
    #[error("Empty shortcut")]
    Empty,

    #[error("Invalid shortcut syntax: '{0}'")]
    InvalidSyntax(String),

    #[error("Unknown modifier '{modifier}' in shortcut '{shortcut}'")]
    UnknownModifier { modifier: String, shortcut: String },
}

/// Parse a shortcut string into a normalised [`KeyCombo`]
///
/// # Example
/// ```
/// use page_mnemonics::core::parser::parse_shortcut;
///
/// let combo = parse_shortcut("Ctrl + S")?;
/// assert_eq!(combo.normalized(), "ctrl+s");
/// # Ok::<(), page_mnemonics::core::parser::ShortcutParseError>(())
/// ```
pub fn parse_shortcut(input: &str) -> Result<KeyCombo, ShortcutParseError> {
    if input.trim().is_empty() {
        return Err(ShortcutParseError::Empty);
    }

    let (_, tokens) = all_consuming(parse_tokens)
        .parse(input)
        .map_err(|_| ShortcutParseError::InvalidSyntax(input.to_string()))?;

    let Some((key, modifier_tokens)) = tokens.split_last() else {
        return Err(ShortcutParseError::Empty);
    };

    let mut modifiers = Vec::with_capacity(modifier_tokens.len());
    for token in modifier_tokens {
        match parse_modifier(token) {
            Some(modifier) => modifiers.push(modifier),
            None => {
                return Err(ShortcutParseError::UnknownModifier {
                    modifier: token.to_string(),
                    shortcut: input.to_string(),
                })
            }
        }
    }

    Ok(KeyCombo::new(modifiers, key))
}

/// Parse the `+`-separated token list
pub fn parse_tokens(input: &str) -> IResult<&str, Vec<&str>> {
    separated_list1(char('+'), parse_token).parse(input)
}

/// Parse one token with surrounding whitespace
fn parse_token(input: &str) -> IResult<&str, &str> {
    delimited(
        space0,
        take_while1(|c: char| !c.is_whitespace() && c != '+'),
        space0,
    )
    .parse(input)
}

/// Map one modifier spelling onto a [`Modifier`]
///
/// - "CTRL" | "CONTROL" → Ctrl
/// - "ALT" | "OPTION" → Alt
/// - "SHIFT" → Shift
/// - "META" | "CMD" | "COMMAND" | "SUPER" → Meta
pub fn parse_modifier(token: &str) -> Option<Modifier> {
    match token.trim().to_uppercase().as_str() {
        "CTRL" | "CONTROL" => Some(Modifier::Ctrl),
        "ALT" | "OPTION" => Some(Modifier::Alt),
        "SHIFT" => Some(Modifier::Shift),
        "META" | "CMD" | "COMMAND" | "SUPER" => Some(Modifier::Meta),
        _ => None,
    }
}

/// Strip all whitespace and lower-case the shortcut text
pub fn normalize_shortcut(shortcut: &str) -> String {
    let stripped = match WHITESPACE.as_ref() {
        Ok(re) => re.replace_all(shortcut, "").into_owned(),
        Err(_) => shortcut.split_whitespace().collect(),
    };
    stripped.to_lowercase()
}

/// Registry key for a declared shortcut
///
/// Parseable shortcuts use the sorted [`KeyCombo::normalized`] form so that
/// they match dispatched key events; anything else falls back to
/// [`normalize_shortcut`].
pub fn canonical_shortcut(shortcut: &str) -> String {
    match parse_shortcut(shortcut) {
        Ok(combo) => combo.normalized(),
        Err(_) => normalize_shortcut(shortcut),
    }
}
