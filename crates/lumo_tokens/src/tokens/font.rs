//! Font-size token indexing.

use crate::error::TokenError;
use crate::table::{strip_reference, Token, TokenTable};

/// Index of a font-size name relative to `font-size-100`.
fn size_index(name: &str) -> Option<i32> {
    let index = match name {
        "font-size-25" => -3,
        "font-size-50" => -2,
        "font-size-75" => -1,
        "font-size-100" => 0,
        "font-size-200" => 1,
        "font-size-300" => 2,
        "font-size-400" => 3,
        "font-size-500" => 4,
        "font-size-600" => 5,
        "font-size-700" => 6,
        "font-size-800" => 7,
        "font-size-900" => 8,
        "font-size-1000" => 9,
        "font-size-1100" => 10,
        "font-size-1200" => 11,
        "font-size-1300" => 12,
        "font-size-1400" => 13,
        "font-size-1500" => 14,
        _ => return None,
    };
    Some(index)
}

impl TokenTable {
    /// Index of a font-size (or heading-size) token relative to
    /// `font-size-100`, which is index 0.
    ///
    /// Heading sizes are references into the font-size scale and redirect
    /// before indexing. Unknown resolved names are rejected.
    pub fn font_size_index(&self, name: &str) -> Result<i32, TokenError> {
        let resolved = match self.get(name) {
            Some(Token::Reference { target }) => strip_reference(target),
            _ => name,
        };
        size_index(resolved).ok_or_else(|| TokenError::UnknownFontSize(resolved.into()))
    }
}
