pub mod grid;
pub mod log_setup;
pub mod serde_format;
pub mod test_utils;

pub use grid::Grid;
