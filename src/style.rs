// Copyright (c) 2025 - Cowboy AI, Inc.
//! Name Styles and Formatting
//!
//! A style is a joining/casing convention applied to the ordered component
//! parts of a name. Before any casing is applied a component is split into
//! its maximal alphanumeric runs; every other character is a separator and is
//! discarded, never preserved.
//!
//! # Examples
//!
//! ```rust
//! use cim_naming::style::Style;
//!
//! let parts = vec!["acme".to_string(), "us-east-1".to_string(), "logs".to_string()];
//! assert_eq!(Style::Dashed.format(&parts), "acme-us-east-1-logs");
//! assert_eq!(Style::Pascal.format(&parts), "AcmeUsEast1Logs");
//! assert_eq!(Style::Camel.format(&parts), "acmeUsEast1Logs");
//! ```

use crate::errors::NamingError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximal alphanumeric runs within a component
static WORD_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z0-9]+").expect("word pattern is valid"));

/// A name joining/casing convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// Lowercase runs joined with `-` (`acme-prod-use1`)
    Dashed,
    /// Lowercase runs joined with `_` (`acme_prod_use1`)
    Underscore,
    /// Lowercase runs concatenated with no separator (`acmeproduse1`)
    Straight,
    /// Title-cased runs concatenated with no separator (`AcmeProdUse1`)
    Pascal,
    /// Title-cased runs, every run joined with `-` (`Acme-Prod-Use1`)
    PascalDashed,
    /// Pascal with the first component's runs lowercased (`acmeProdUse1`)
    Camel,
}

impl Style {
    /// All recognized styles
    pub const ALL: [Style; 6] = [
        Self::Dashed,
        Self::Underscore,
        Self::Straight,
        Self::Pascal,
        Self::PascalDashed,
        Self::Camel,
    ];

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dashed => "dashed",
            Self::Underscore => "underscore",
            Self::Straight => "straight",
            Self::Pascal => "pascal",
            Self::PascalDashed => "pascaldashed",
            Self::Camel => "camel",
        }
    }

    /// Parse a style name leniently: trimmed and case-insensitive,
    /// unrecognized names yield `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "dashed" => Some(Self::Dashed),
            "underscore" => Some(Self::Underscore),
            "straight" => Some(Self::Straight),
            "pascal" => Some(Self::Pascal),
            "pascaldashed" => Some(Self::PascalDashed),
            "camel" => Some(Self::Camel),
            _ => None,
        }
    }

    /// Join ordered parts into a single name under this style
    ///
    /// Parts that are empty after trimming contribute nothing, including
    /// their separators.
    pub fn format(&self, parts: &[String]) -> String {
        match self {
            Self::Dashed => join_lowercase(parts, "-"),
            Self::Underscore => join_lowercase(parts, "_"),
            Self::Straight => join_lowercase(parts, ""),
            Self::Pascal => parts
                .iter()
                .map(|part| pascalize(part))
                .collect::<Vec<_>>()
                .concat(),
            Self::PascalDashed => pascal_dashed(parts),
            Self::Camel => camelize(parts),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Style {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| NamingError::UnsupportedStyle(s.to_string()))
    }
}

/// The default style preference order
pub fn default_style_priority() -> Vec<String> {
    [
        Style::Dashed,
        Style::Pascal,
        Style::PascalDashed,
        Style::Camel,
        Style::Straight,
        Style::Underscore,
    ]
    .iter()
    .map(|style| style.as_str().to_string())
    .collect()
}

/// Split a component into its maximal alphanumeric runs
pub(crate) fn split_words(value: &str) -> Vec<&str> {
    WORD_PATTERN.find_iter(value).map(|m| m.as_str()).collect()
}

/// Lowercase each component's runs, join runs within a component with `sep`,
/// then join components with `sep`
fn join_lowercase(parts: &[String], sep: &str) -> String {
    parts
        .iter()
        .filter_map(|part| {
            let words = split_words(part);
            if words.is_empty() {
                return None;
            }
            Some(words.join(sep).to_lowercase())
        })
        .collect::<Vec<_>>()
        .join(sep)
}

/// Title-case every run of a component and concatenate
fn pascalize(value: &str) -> String {
    split_words(value).iter().map(|word| title_word(word)).collect()
}

/// Title-case every run of every component and join all runs with `-`
fn pascal_dashed(parts: &[String]) -> String {
    parts
        .iter()
        .flat_map(|part| split_words(part))
        .map(title_word)
        .collect::<Vec<_>>()
        .join("-")
}

/// Pascal with the leading component's runs lowercased, so only the very
/// first run of the whole name is lowercase
fn camelize(parts: &[String]) -> String {
    let Some((first, rest)) = parts.split_first() else {
        return String::new();
    };

    let mut name = split_words(first).concat().to_lowercase();
    for part in rest {
        name.push_str(&pascalize(part));
    }
    name
}

/// First character upper, remainder lower; single-character runs fully upper
fn title_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
    }
}
