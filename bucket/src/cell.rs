use crate::color::Color;

/// A color bound to a fixed grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    color: Color,
    x: usize,
    y: usize,
}

impl Cell {
    pub fn new(color: Color, x: usize, y: usize) -> Self {
        Self { color, x, y }
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the color. Coordinates never change.
    #[inline]
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    #[inline]
    pub fn x(&self) -> usize {
        self.x
    }

    #[inline]
    pub fn y(&self) -> usize {
        self.y
    }

    #[inline]
    pub fn is_white(&self) -> bool {
        self.color.is_white()
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }

    #[inline]
    pub fn same_color(&self, other: &Cell) -> bool {
        self.color == other.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_accessors() {
        let cell = Cell::new(Color::from_rgb(1, 2, 3), 4, 5);
        assert_eq!(cell.x(), 4);
        assert_eq!(cell.y(), 5);
        assert_eq!(cell.color(), Color::from_rgb(1, 2, 3));
        assert!(!cell.is_white());
        assert!(!cell.is_black());
    }

    #[test]
    fn test_same_color_ignores_position() {
        let white = Cell::new(Color::WHITE, 0, 0);
        assert!(white.is_white());
        assert!(white.same_color(&Cell::new(Color::WHITE, 9, 9)));
        assert!(!white.same_color(&Cell::new(Color::from_rgb(1, 2, 3), 0, 0)));
    }

    #[test]
    fn test_set_color_keeps_coordinates() {
        let mut cell = Cell::new(Color::WHITE, 3, 7);
        cell.set_color(Color::BLACK);
        assert!(cell.is_black());
        assert_eq!((cell.x(), cell.y()), (3, 7));
    }
}
