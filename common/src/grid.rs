use std::ops::{Index, IndexMut};
use std::slice;

/// Rectangular row-major storage: rows indexed by `y`, then `x`.
///
/// Dimensions are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid<T> {
    pub fn new(width: usize, height: usize, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "cells length must equal width * height"
        );
        Self {
            cells,
            width,
            height,
        }
    }

    /// Builds a grid by calling `f(x, y)` for every coordinate in row-major order.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        if x < self.width && y < self.height {
            Some(&self.cells[y * self.width + x])
        } else {
            None
        }
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Inverse of [`Grid::index`].
    #[inline]
    pub fn coords(&self, idx: usize) -> (usize, usize) {
        debug_assert!(idx < self.cells.len());
        (idx % self.width, idx / self.width)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.cells.iter()
    }

    /// Iterates rows top to bottom. Yields nothing for a zero-width grid.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks() panics on 0; a zero-width grid has no cells anyway.
        self.cells.chunks(self.width.max(1))
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Self::Output {
        &self.cells[y * self.width + x]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Self::Output {
        &mut self.cells[y * self.width + x]
    }
}

impl<T> Index<usize> for Grid<T> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &Self::Output {
        &self.cells[idx]
    }
}

impl<'a, T> IntoIterator for &'a Grid<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stores_dimensions() {
        let grid = Grid::new(3, 2, vec![10, 20, 30, 40, 50, 60]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        assert_eq!(grid.len(), 6);
        assert!(!grid.is_empty());
    }

    #[test]
    #[should_panic(expected = "cells length must equal width * height")]
    fn test_new_panics_on_size_mismatch() {
        Grid::new(3, 2, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_fn_is_row_major() {
        let grid = Grid::from_fn(3, 2, |x, y| (x, y));
        assert_eq!(grid[0], (0, 0));
        assert_eq!(grid[2], (2, 0));
        assert_eq!(grid[3], (0, 1));
        assert_eq!(grid[(2, 1)], (2, 1));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2, 2, vec![1, 2, 3, 4]);
        assert_eq!(grid.get(1, 1), Some(&4));
        assert_eq!(grid.get(2, 0), None);
        assert_eq!(grid.get(0, 2), None);
    }

    #[test]
    fn test_index_and_coords_roundtrip() {
        let grid = Grid::new(5, 3, vec![0u8; 15]);
        assert_eq!(grid.index(0, 1), 5);
        assert_eq!(grid.index(3, 2), 13);
        assert_eq!(grid.coords(13), (3, 2));
        assert_eq!(grid.coords(4), (4, 0));
    }

    #[test]
    fn test_rows() {
        let grid = Grid::new(2, 3, vec![1, 2, 3, 4, 5, 6]);
        let rows: Vec<&[i32]> = grid.rows().collect();
        assert_eq!(rows, vec![&[1, 2][..], &[3, 4][..], &[5, 6][..]]);
    }

    #[test]
    fn test_empty_grid() {
        let grid: Grid<u8> = Grid::new(0, 0, vec![]);
        assert!(grid.is_empty());
        assert_eq!(grid.rows().count(), 0);

        let no_rows: Grid<u8> = Grid::new(4, 0, vec![]);
        assert_eq!(no_rows.width(), 4);
        assert_eq!(no_rows.rows().count(), 0);
    }

    #[test]
    fn test_index_mut_tuple() {
        let mut grid = Grid::new(2, 2, vec![1, 2, 3, 4]);
        grid[(1, 1)] = 77;
        assert_eq!(grid[(1, 1)], 77);
        assert_eq!(grid[3], 77);
    }
}
