//! Plain-text bitmap codec.
//!
//! Decodes monochrome `P1` bitmaps into a grid of singleton sets and encodes
//! the resolved component colors as a `P3` pixmap or an RGBA buffer.

mod decode;
mod encode;


pub use decode::{decode, decode_lines, generate, BITMAP_MAGIC};
pub use encode::{encode, encode_rgba, DEFAULT_WRAP_PERIOD, MAX_CHANNEL_VALUE, PIXMAP_MAGIC};

use common::Grid;

use crate::cell::Cell;
use crate::color::Color;
use crate::disjoint::{DisjointForest, ElementId};
use crate::error::Result;

/// A decoded image: one forest element per pixel, laid out in a grid.
///
/// White elements are also listed separately in decode order; only they take
/// part in component linking.
#[derive(Debug, Clone)]
pub struct Bitmap {
    forest: DisjointForest<Cell>,
    grid: Grid<ElementId>,
    whites: Vec<ElementId>,
    magic_matched: bool,
}

impl Bitmap {
    #[inline]
    pub fn width(&self) -> usize {
        self.grid.width()
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn grid(&self) -> &Grid<ElementId> {
        &self.grid
    }

    /// Element at `(x, y)`, or `None` outside the image.
    pub fn element(&self, x: usize, y: usize) -> Option<ElementId> {
        self.grid.get(x, y).copied()
    }

    #[inline]
    pub fn cell(&self, element: ElementId) -> &Cell {
        self.forest.value(element)
    }

    pub fn forest(&self) -> &DisjointForest<Cell> {
        &self.forest
    }

    /// White elements in decode (row-major) order.
    pub fn white_elements(&self) -> &[ElementId] {
        &self.whites
    }

    /// Whether the header carried the expected `P1` token.
    pub fn magic_matched(&self) -> bool {
        self.magic_matched
    }

    /// Number of connected components currently in the forest.
    pub fn component_count(&self) -> usize {
        self.forest.set_count()
    }

    /// Color stored on the first element of `element`'s component.
    ///
    /// Never mutates; before colorization this is the pixel's own color.
    pub fn resolved_color(&self, element: ElementId) -> Result<Color> {
        let head = self.forest.representative(self.forest.find(element))?;
        Ok(self.forest.value(head.first()).color())
    }

    pub(crate) fn forest_mut(&mut self) -> &mut DisjointForest<Cell> {
        &mut self.forest
    }

    /// Split borrow used by the link phase.
    pub(crate) fn parts_mut(&mut self) -> (&Grid<ElementId>, &[ElementId], &mut DisjointForest<Cell>) {
        (&self.grid, &self.whites, &mut self.forest)
    }
}
