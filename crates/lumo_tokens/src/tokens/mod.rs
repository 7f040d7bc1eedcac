//! Token accessors by family.
//!
//! - Colors: light/dark resolution, reference stripping, scale scans
//! - Overlays: synthetic contrast colors derived from opacity tokens
//! - Fonts: size-scale indexing

mod color;
mod font;
mod overlay;

pub use color::*;
pub use overlay::*;
