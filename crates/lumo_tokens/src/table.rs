//! Token table data model and loading.
//!
//! The token dataset is a build-time JSON file mapping token names to one of
//! three shapes:
//!
//! - a direct scalar value (`{"value": "rgb(255, 255, 255)"}`),
//! - a light/dark set (`{"sets": {"light": {...}, "dark": {...}}}`), where
//!   each side is itself a value or a reference,
//! - a reference to another token (`{"ref": "{gray-800}"}`).
//!
//! Entries carry extra metadata (uuids, component tags, schema fields) that
//! this crate ignores. The table preserves document order, which scale scans
//! rely on.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::TokenError;

/// A single entry in the token table.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Token {
    /// Indirection to another token, e.g. `{"ref": "{gray-800}"}`.
    Reference {
        #[serde(rename = "ref")]
        target: String,
    },
    /// Direct scalar value (a CSS color, length, or number carried as a
    /// string).
    Value { value: String },
    /// Light/dark pair, each side a literal value or a reference.
    Sets { sets: TokenSets },
}

impl Token {
    /// Literal value of a direct token, if this is one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            Token::Value { value } => Some(value),
            _ => None,
        }
    }
}

/// Light and dark sides of a set token.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenSets {
    pub light: SetEntry,
    pub dark: SetEntry,
}

/// One side of a set token.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum SetEntry {
    /// Reference to another token.
    Reference {
        #[serde(rename = "ref")]
        target: String,
    },
    /// Literal value.
    Value { value: String },
}

/// Immutable, insertion-ordered token table.
///
/// Loaded once from the build-time dataset and never mutated; every
/// accessor is a pure read, so shared access needs no locking.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct TokenTable {
    entries: IndexMap<String, Token>,
}

impl TokenTable {
    /// Parse a table from the JSON token dataset.
    pub fn from_json_str(data: &str) -> Result<Self, TokenError> {
        let table: TokenTable = serde_json::from_str(data)?;
        Ok(table)
    }

    /// Look up a token by name.
    pub fn get(&self, name: &str) -> Option<&Token> {
        self.entries.get(name)
    }

    /// Literal `value` of a direct token.
    pub fn value(&self, name: &str) -> Result<&str, TokenError> {
        let token = self
            .get(name)
            .ok_or_else(|| TokenError::UnknownToken(name.into()))?;
        token
            .literal()
            .ok_or_else(|| TokenError::NotAValue(name.into()))
    }

    /// Number of tokens in the table.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate tokens in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Token)> {
        self.entries.iter().map(|(name, token)| (name.as_str(), token))
    }
}

/// Strips the `{…}` delimiters from a reference target.
///
/// Targets are non-empty after stripping; whether the stripped name exists
/// in the table is the consumer's concern.
pub(crate) fn strip_reference(target: &str) -> &str {
    let target = target.strip_prefix('{').unwrap_or(target);
    target.strip_suffix('}').unwrap_or(target)
}

/// Removes the first `-color` occurrence from a token name, turning
/// `accent-color-100` into `accent-100` and `gray-25-color` into `gray-25`.
pub(crate) fn strip_color(name: &str) -> String {
    name.replacen("-color", "", 1)
}
