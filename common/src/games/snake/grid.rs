use super::types::Cell;

/// Fixed-size toroidal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Both dimensions must be positive.
    pub const fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self { width, height }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.width / 2, self.height / 2)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x) && (0..self.height).contains(&cell.y)
    }

    /// Folds any coordinate back onto the grid. Uses euclidean remainder so
    /// -1 maps to the last row/column rather than staying negative.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(cell.x.rem_euclid(self.width), cell.y.rem_euclid(self.height))
    }

    /// Row-major iteration over every cell.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Cell::new(x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_leaves_inner_cells_alone() {
        let grid = Grid::new(30, 20);
        assert_eq!(grid.wrap(Cell::new(5, 7)), Cell::new(5, 7));
    }

    #[test]
    fn test_wrap_right_and_bottom_edges() {
        let grid = Grid::new(30, 20);
        assert_eq!(grid.wrap(Cell::new(30, 4)), Cell::new(0, 4));
        assert_eq!(grid.wrap(Cell::new(4, 20)), Cell::new(4, 0));
    }

    #[test]
    fn test_wrap_negative_coordinates() {
        let grid = Grid::new(30, 20);
        assert_eq!(grid.wrap(Cell::new(-1, 0)), Cell::new(29, 0));
        assert_eq!(grid.wrap(Cell::new(0, -1)), Cell::new(0, 19));
        assert_eq!(grid.wrap(Cell::new(-31, -21)), Cell::new(29, 19));
    }

    #[test]
    fn test_center_and_cells() {
        let grid = Grid::new(30, 20);
        assert_eq!(grid.center(), Cell::new(15, 10));
        assert_eq!(grid.cells().count(), grid.cell_count());
        assert!(grid.cells().all(|c| grid.contains(c)));
    }
}
