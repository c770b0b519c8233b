//! Connected-component linking and lazy per-component coloring.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::codec::Bitmap;
use crate::color::Color;
use crate::disjoint::ElementId;
use crate::error::Result;

/// Unions every white pixel with its same-colored down and right neighbors.
///
/// One forward sweep over the white pixels in decode order. Every 4-adjacency
/// is seen from exactly one of its endpoints, so no backward pass is needed.
/// Returns the number of unions performed.
pub fn link(bitmap: &mut Bitmap) -> Result<usize> {
    let (grid, whites, forest) = bitmap.parts_mut();
    let (width, height) = (grid.width(), grid.height());
    let mut unions = 0usize;

    for &element in whites {
        let cell = *forest.value(element);
        let (x, y) = (cell.x(), cell.y());

        let down = (y + 1 < height).then(|| grid[(x, y + 1)]);
        let right = (x % width != width - 1).then(|| grid[(x + 1, y)]);

        for neighbor in [down, right].into_iter().flatten() {
            if !forest.value(neighbor).same_color(&cell) {
                continue;
            }
            // Re-read: the previous union may have absorbed this cell's set.
            let current = forest.find(element);
            let other = forest.find(neighbor);
            if current != other {
                forest.union(current, other)?;
                unions += 1;
            }
        }
    }

    debug!(
        unions,
        components = forest.set_count(),
        "Linked white components"
    );
    Ok(unions)
}

/// Assigns a random color to each component the first time it is read.
///
/// A component whose first element still stores white has not been colored
/// yet. Sampled channels stay below 255, so a colored component never reads
/// as white again.
#[derive(Debug)]
pub struct Colorizer<R = StdRng> {
    rng: R,
}

impl Colorizer<StdRng> {
    /// Seeded colorizer, or one seeded from the OS when `seed` is `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { rng }
    }
}

impl Default for Colorizer<StdRng> {
    fn default() -> Self {
        Self::new(None)
    }
}

impl<R: Rng> Colorizer<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Color of `element`'s component, sampling one on first access.
    pub fn color_of(&mut self, bitmap: &mut Bitmap, element: ElementId) -> Result<Color> {
        let forest = bitmap.forest_mut();
        let first = forest.representative(forest.find(element))?.first();
        let cell = forest.value_mut(first);

        if cell.is_white() {
            cell.set_color(Color::random(&mut self.rng));
        }
        Ok(cell.color())
    }

    /// Resolves the color of every pixel in row-major order.
    ///
    /// Returns the number of components that received a fresh color.
    pub fn colorize(&mut self, bitmap: &mut Bitmap) -> Result<usize> {
        let elements: Vec<ElementId> = bitmap.grid().cells().to_vec();
        let mut colored = 0usize;

        for element in elements {
            let was_white = bitmap.resolved_color(element)?.is_white();
            self.color_of(bitmap, element)?;
            if was_white {
                colored += 1;
            }
        }

        debug!(colored, "Colorized components");
        Ok(colored)
    }
}
