//! Synthetic overlay colors.
//!
//! Overlay colors contrast against a variable background: the generated
//! expression flips between pure black and pure white on the background's
//! luminance, and the rendering environment evaluates it per use. The
//! opacity of each overlay level comes from the corresponding
//! `transparent-white` token.

use std::sync::OnceLock;

use indexmap::IndexMap;
use regex::Regex;

use crate::error::TokenError;
use crate::table::TokenTable;

/// Conventional background reference for overlay expressions.
pub const DEFAULT_CONTAINER_BG: &str = "var(--lumo-container-bg)";

/// Overlay levels and their opacity source tokens. Fixed and exhaustive,
/// not data-driven.
const OVERLAY_LEVELS: [(&str, &str); 13] = [
    ("transparent-overlay-25", "transparent-white-25"),
    ("transparent-overlay-50", "transparent-white-50"),
    ("transparent-overlay-75", "transparent-white-75"),
    ("transparent-overlay-100", "transparent-white-100"),
    ("transparent-overlay-200", "transparent-white-200"),
    ("transparent-overlay-300", "transparent-white-300"),
    ("transparent-overlay-400", "transparent-white-400"),
    ("transparent-overlay-500", "transparent-white-500"),
    ("transparent-overlay-600", "transparent-white-600"),
    ("transparent-overlay-700", "transparent-white-700"),
    ("transparent-overlay-800", "transparent-white-800"),
    ("transparent-overlay-900", "transparent-white-900"),
    ("transparent-overlay-1000", "transparent-white-1000"),
];

static RGBA_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Alpha channel of an `rgba(r, g, b, a)` string.
///
/// The pattern is fixed-shape (single spaces after commas, no percentages);
/// anything else counts as fully opaque.
pub fn extract_opacity(color: &str) -> f64 {
    let pattern = RGBA_PATTERN.get_or_init(|| {
        Regex::new(r"^rgba\(\d+, \d+, \d+, ([.\d]+)\)$").expect("rgba pattern is valid")
    });
    pattern
        .captures(color)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(1.0)
}

/// Deferred foreground color that resolves to pure black or white against
/// `bg`, with `alpha` applied.
///
/// The 49.44 luminance threshold minimizes WCAG 4.5:1 contrast failures
/// across RGB background colors.
pub fn auto_static_color(bg: &str, alpha: f64) -> String {
    format!("lch(from {bg} calc((49.44 - l) * infinity) 0 0 / {alpha})")
}

impl TokenTable {
    /// Derive the thirteen `transparent-overlay-*` levels against `bg`,
    /// each carrying the opacity of its `transparent-white-*` counterpart.
    pub fn overlay_color_scale(
        &self,
        bg: &str,
    ) -> Result<IndexMap<&'static str, String>, TokenError> {
        let mut out = IndexMap::with_capacity(OVERLAY_LEVELS.len());
        for (overlay, source) in OVERLAY_LEVELS {
            let alpha = extract_opacity(self.value(source)?);
            out.insert(overlay, auto_static_color(bg, alpha));
        }
        Ok(out)
    }
}
