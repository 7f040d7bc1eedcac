//! Lumo Token Accessors
//!
//! Typed accessors over the static design-token dataset consumed by the
//! Lumo style engine: colors, font sizes, and overlay opacities.
//!
//! # Overview
//!
//! The token dataset is a build-time JSON table mapping token names to
//! direct values, light/dark sets, or references to other tokens. This
//! crate resolves those entries into CSS-ready strings and small structured
//! records:
//!
//! - **Literal lookup**: [`TokenTable::value`]
//! - **Color resolution**: [`TokenTable::color_token`],
//!   [`TokenTable::raw_color_token`], [`TokenTable::weird_color_token`]
//! - **Scales**: [`TokenTable::color_scale`],
//!   [`TokenTable::simple_color_scale`]
//! - **Overlay synthesis**: [`auto_static_color`],
//!   [`TokenTable::overlay_color_scale`]
//! - **Font sizing**: [`TokenTable::font_size_index`]
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use lumo_tokens::{ColorValue, TokenTable};
//!
//! // Load the dataset once at startup
//! let table = TokenTable::from_json_str(include_str!("tokens.json"))?;
//! TokenTable::init(table);
//!
//! // Resolve tokens in the style compiler
//! let table = TokenTable::global();
//! let gray = table.color_scale("gray")?;
//! let thickness = table.value("focus-indicator-thickness")?;
//! ```
//!
//! # Architecture
//!
//! Every accessor is a pure, synchronous read over the immutable table;
//! derived records are freshly constructed per call, with no caching. The
//! table is installed once per process and never mutated afterwards, so
//! shared access needs no locking.

pub mod error;
mod registry;
pub mod table;
pub mod tokens;

// Re-export commonly used types
pub use error::TokenError;
pub use table::{SetEntry, Token, TokenSets, TokenTable};
pub use tokens::*;
