use crate::KmapError;
use itertools::Itertools;
use serde::{Serialize, Serializer};
use std::ops::Index;
use std::slice::Chunks;

/// A rectangular array of values stored in row-major order.
///
/// ```
/// use karnaugh::Grid;
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let grid = Grid::from_row_major(2, 2, vec![0, 1, 1, 0])?;
/// assert_eq!(grid[(1, 0)], 1);
/// assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![1, 0]]);
/// assert_eq!(grid.flatten(), vec![0, 1, 1, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V> Grid<V> {
    /// Wrap a row-major list of values.
    ///
    /// Returns an error if the number of values is not ```rows * cols``` or if the grid would be empty.
    pub fn from_row_major(rows: usize, cols: usize, cells: Vec<V>) -> Result<Self, KmapError> {
        let expected = rows.saturating_mul(cols);
        if expected == 0 || cells.len() != expected {
            return Err(KmapError::ShapeMismatch {
                expected,
                found: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from a list of rows which must all have the same length
    pub fn from_rows(rows: Vec<Vec<V>>) -> Result<Self, KmapError> {
        let nrows = rows.len();
        let cols = rows.first().map(|r| r.len()).unwrap_or(0);
        if let Some(bad) = rows.iter().find(|r| r.len() != cols) {
            return Err(KmapError::ShapeMismatch {
                expected: cols,
                found: bad.len(),
            });
        }
        Self::from_row_major(nrows, cols, rows.into_iter().flatten().collect())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A valid grid has at least one cell
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&V> {
        match row < self.rows && col < self.cols {
            true => self.cells.get(row * self.cols + col),
            false => None,
        }
    }

    pub fn row(&self, row: usize) -> Option<&[V]> {
        if row >= self.rows {
            return None;
        }
        let start = row * self.cols;
        self.cells.get(start..start + self.cols)
    }

    /// Iterate over the rows as slices
    pub fn iter_rows(&self) -> Chunks<'_, V> {
        self.cells.chunks(self.cols)
    }

    /// All values in row-major order
    pub fn as_slice(&self) -> &[V] {
        &self.cells
    }

    /// Consume the grid and return its values in row-major order
    pub fn into_flat(self) -> Vec<V> {
        self.cells
    }

    /// Cells sharing an edge with the given cell, the borders wrap around.
    ///
    /// In a grid with a single row (or column) the cell is not its own neighbour,
    /// with two rows (or columns) the two wrapping directions lead to the same cell, which is listed once.
    pub fn neighbors(&self, row: usize, col: usize) -> Vec<(usize, usize)> {
        if row >= self.rows || col >= self.cols {
            return vec![];
        }
        let up = ((row + self.rows - 1) % self.rows, col);
        let down = ((row + 1) % self.rows, col);
        let left = (row, (col + self.cols - 1) % self.cols);
        let right = (row, (col + 1) % self.cols);
        [up, down, left, right]
            .into_iter()
            .filter(|c| *c != (row, col))
            .unique()
            .collect()
    }

    /// Apply a function on all values, keeping the shape
    pub fn map<U, F: FnMut(&V) -> U>(&self, f: F) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<V: Clone> Grid<V> {
    /// Copy the values in row-major order
    pub fn flatten(&self) -> Vec<V> {
        self.cells.clone()
    }

    pub fn to_rows(&self) -> Vec<Vec<V>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl<V> Index<(usize, usize)> for Grid<V> {
    type Output = V;

    fn index(&self, (row, col): (usize, usize)) -> &V {
        assert!(col < self.cols, "column {} out of bounds", col);
        &self.cells[row * self.cols + col]
    }
}

impl<V: Serialize> Serialize for Grid<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter_rows())
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn shapes() -> Result<(), KmapError> {
        assert_eq!(
            Grid::from_row_major(4, 2, vec![0; 7]),
            Err(KmapError::ShapeMismatch {
                expected: 8,
                found: 7
            })
        );
        assert!(Grid::<u8>::from_row_major(0, 0, vec![]).is_err());
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_err());

        let g = Grid::from_rows(vec![vec![1, 2], vec![3, 4], vec![5, 6]])?;
        assert_eq!((g.rows(), g.cols(), g.len()), (3, 2, 6));
        assert_eq!(g.row(2), Some(&[5, 6][..]));
        assert_eq!(g.row(3), None);
        assert_eq!(g.row(usize::MAX / 2), None);
        assert_eq!(g.row(usize::MAX), None);
        assert_eq!(g.get(0, 2), None);
        assert_eq!(g.into_flat(), vec![1, 2, 3, 4, 5, 6]);
        Ok(())
    }

    #[test]
    fn wrapping_neighbors() -> Result<(), KmapError> {
        let g = Grid::from_row_major(4, 4, (0..16).collect())?;
        let mut n = g.neighbors(0, 0);
        n.sort();
        assert_eq!(n, vec![(0, 1), (0, 3), (1, 0), (3, 0)]);

        let g = Grid::from_row_major(2, 1, vec![0, 1])?;
        assert_eq!(g.neighbors(0, 0), vec![(1, 0)]);

        let g = Grid::from_row_major(1, 1, vec![0])?;
        assert!(g.neighbors(0, 0).is_empty());
        Ok(())
    }

    #[test]
    fn serialize_rows() -> Result<(), KmapError> {
        let g = Grid::from_row_major(2, 2, vec![1, 0, 0, 1])?;
        assert_eq!(serde_json::to_string(&g)?, "[[1,0],[0,1]]");
        assert_eq!(g.map(|v| v * 2).as_slice(), &[2, 0, 0, 2]);
        Ok(())
    }
}
