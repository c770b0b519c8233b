//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use bucket::prelude::*;
//! ```

// Value types
pub use crate::{Cell, Color};

// Codec and colorization
pub use crate::codec::DEFAULT_WRAP_PERIOD;
pub use crate::{decode, encode, encode_rgba, generate, link, Bitmap, Colorizer};

// Pipeline
pub use crate::{Config, Error, Rendered, Result, Session};
