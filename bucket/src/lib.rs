//! Bucket - connected-component colorizer for plain monochrome bitmaps.
//!
//! Decodes a `P1` bitmap into a disjoint-set forest, unions adjacent white
//! pixels into components, lazily assigns each component a random color and
//! encodes the result as a `P3` pixmap or an RGBA buffer.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use bucket::prelude::*;
//!
//! let mut bitmap = decode("P1\n3 1\n010\n")?;
//! link(&mut bitmap)?;
//! Colorizer::new(Some(7)).colorize(&mut bitmap)?;
//! let text = encode(&bitmap, DEFAULT_WRAP_PERIOD)?;
//! ```

pub mod cell;
pub mod codec;
pub mod color;
pub mod colorizer;
pub mod config;
pub mod disjoint;
pub mod error;
pub mod session;

pub mod prelude;

#[cfg(test)]
pub(crate) mod test_utils;

// ============================================================================
// Value types
// ============================================================================

pub use cell::Cell;
pub use color::{Channel, Color};

// ============================================================================
// Disjoint sets
// ============================================================================

pub use disjoint::{Chain, DisjointForest, ElementId, RepId, Representative};

// ============================================================================
// Codec and colorization
// ============================================================================

pub use codec::{decode, decode_lines, encode, encode_rgba, generate, Bitmap};
pub use colorizer::{link, Colorizer};

// ============================================================================
// Pipeline
// ============================================================================

pub use config::Config;
pub use error::{Error, Result};
pub use session::{Rendered, Session};
