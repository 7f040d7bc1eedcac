//! Color token resolution.
//!
//! Color tokens resolve into either literal light/dark pairs or pairs of
//! reference names. Two reference shapes exist in the dataset and they
//! resolve differently:
//!
//! - a token-level reference (`{"ref": "{gray-800}"}`) collapses to one
//!   stripped name shared by both modes ([`TokenTable::color_token`]);
//! - per-mode references inside a set resolve independently and may point
//!   at different targets ([`TokenTable::weird_color_token`]).
//!
//! Stripped names drop the `{…}` delimiters and the first `-color`
//! occurrence; resolving the stripped name is the consumer's job.

use indexmap::IndexMap;
use regex::Regex;

use crate::error::TokenError;
use crate::table::{strip_color, strip_reference, SetEntry, Token, TokenTable};

/// Resolved literal light/dark color pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorToken {
    pub light: String,
    pub dark: String,
    /// Forced-colors (high contrast) override, filled in downstream.
    pub forced_colors: Option<String>,
}

/// Resolved light/dark pair of reference names, resolved further by the
/// consumer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorRef {
    pub light: String,
    pub dark: String,
    pub forced_colors: Option<String>,
}

/// Result of [`TokenTable::color_token`]: a literal pair or a pair of
/// references.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorValue {
    Color(ColorToken),
    Ref(ColorRef),
}

impl TokenTable {
    /// Resolve a color token to its literal light/dark pair, or to a shared
    /// reference name when the token is an indirection.
    pub fn color_token(&self, name: &str) -> Result<ColorValue, TokenError> {
        let token = self
            .get(name)
            .ok_or_else(|| TokenError::UnknownToken(name.into()))?;
        match token {
            Token::Reference { target } => {
                let shared = strip_color(strip_reference(target));
                Ok(ColorValue::Ref(ColorRef {
                    light: shared.clone(),
                    dark: shared,
                    forced_colors: None,
                }))
            }
            Token::Sets { sets } => match (&sets.light, &sets.dark) {
                (SetEntry::Value { value: light }, SetEntry::Value { value: dark }) => {
                    Ok(ColorValue::Color(ColorToken {
                        light: light.clone(),
                        dark: dark.clone(),
                        forced_colors: None,
                    }))
                }
                _ => Err(TokenError::NotAColorSet(name.into())),
            },
            Token::Value { .. } => Err(TokenError::NotAColorSet(name.into())),
        }
    }

    /// Format a set token's light/dark values as one `light-dark()` CSS
    /// expression, for places where both modes must be embedded directly.
    pub fn raw_color_token(&self, name: &str) -> Result<String, TokenError> {
        let token = self
            .get(name)
            .ok_or_else(|| TokenError::UnknownToken(name.into()))?;
        match token {
            Token::Sets { sets } => match (&sets.light, &sets.dark) {
                (SetEntry::Value { value: light }, SetEntry::Value { value: dark }) => {
                    Ok(format!("light-dark({light}, {dark})"))
                }
                _ => Err(TokenError::NotAColorSet(name.into())),
            },
            _ => Err(TokenError::NotAColorSet(name.into())),
        }
    }

    /// Resolve a set token whose light/dark sides are themselves
    /// references, keeping the two targets independent.
    pub fn weird_color_token(&self, name: &str) -> Result<ColorRef, TokenError> {
        let token = self
            .get(name)
            .ok_or_else(|| TokenError::UnknownToken(name.into()))?;
        match token {
            Token::Sets { sets } => match (&sets.light, &sets.dark) {
                (SetEntry::Reference { target: light }, SetEntry::Reference { target: dark }) => {
                    Ok(ColorRef {
                        light: strip_color(strip_reference(light)),
                        dark: strip_color(strip_reference(dark)),
                        forced_colors: None,
                    })
                }
                _ => Err(TokenError::NotAColorRefSet(name.into())),
            },
            _ => Err(TokenError::NotAColorRefSet(name.into())),
        }
    }

    /// Resolve every token named `{scale}-{n}` (optionally `-color`
    /// suffixed) into a map keyed by the normalized name, in table order.
    pub fn color_scale(&self, scale: &str) -> Result<IndexMap<String, ColorValue>, TokenError> {
        let pattern = scale_pattern(scale);
        let mut out = IndexMap::new();
        for (name, _) in self.iter() {
            if pattern.is_match(name) {
                out.insert(strip_color(name), self.color_token(name)?);
            }
        }
        tracing::trace!("color scale `{}` matched {} tokens", scale, out.len());
        Ok(out)
    }

    /// Same matching as [`color_scale`](TokenTable::color_scale), but each
    /// match contributes its literal `value` under its raw name, for scales
    /// whose tokens are not light/dark pairs.
    pub fn simple_color_scale(&self, scale: &str) -> Result<IndexMap<String, String>, TokenError> {
        let pattern = scale_pattern(scale);
        let mut out = IndexMap::new();
        for (name, token) in self.iter() {
            if pattern.is_match(name) {
                let value = token
                    .literal()
                    .ok_or_else(|| TokenError::NotAValue(name.into()))?;
                out.insert(name.to_owned(), value.to_owned());
            }
        }
        Ok(out)
    }
}

fn scale_pattern(scale: &str) -> Regex {
    Regex::new(&format!(r"^{}-\d+(?:-color)?$", regex::escape(scale)))
        .expect("escaped scale pattern is always valid")
}
