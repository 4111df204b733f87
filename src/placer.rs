//! Place a flat list of values into the cells of a map.
//!
//! The values are provided in a flat list with one entry per combination of the variables.
//! The [InputOrder] tells how this list is ordered, the [Placement] computes once the permutation
//! from list positions to grid cells, and applies it in both directions.

use crate::gray::{gray_index, gray_rank, MAX_WIDTH};
use crate::{BitPartition, Grid, KmapError};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Order in which the values of a map are listed.
///
/// Names are read case-insensitively, with the same aliases in text and in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum InputOrder {
    /// The values fill the grid in row-major order: value ```i``` goes to row ```i / cols``` and column ```i % cols```.
    ///
    /// The labels of the rows and columns are only used for display.
    #[default]
    Natural,

    /// Value ```i``` is associated to the combination given by the Gray codeword ```i ^ (i >> 1)```.
    ///
    /// This is the order of the list of Gray-coded labels shown to a user filling the values.
    /// The value goes to the cell whose row and column labels form this codeword.
    GrayDisplay,

    /// Value ```i``` is associated to the combination ```i``` (binary counting order),
    /// and goes to the cell whose row and column labels form this combination.
    TruthTable,
}

impl InputOrder {
    pub fn name(&self) -> &'static str {
        match self {
            InputOrder::Natural => "natural",
            InputOrder::GrayDisplay => "gray_display",
            InputOrder::TruthTable => "truth_table",
        }
    }
}

impl FromStr for InputOrder {
    type Err = KmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "natural" | "binary" | "row_major" => Ok(InputOrder::Natural),
            "gray" | "gray_display" => Ok(InputOrder::GrayDisplay),
            "truth_table" | "truth" => Ok(InputOrder::TruthTable),
            _ => Err(KmapError::InvalidInputOrder(s.into())),
        }
    }
}

impl TryFrom<String> for InputOrder {
    type Error = KmapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for InputOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Mapping between the positions of an input list and the cells of a grid.
///
/// ```
/// use karnaugh::{BitPartition, InputOrder, Placement};
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let placement = Placement::new(BitPartition::split(3), InputOrder::TruthTable)?;
/// let grid = placement.place(&[0, 1, 2, 3, 4, 5, 6, 7])?;
///
/// // Rows follow the Gray sequence 00, 01, 11, 10
/// assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![2, 3], vec![6, 7], vec![4, 5]]);
/// assert_eq!(placement.unplace(&grid)?, vec![0, 1, 2, 3, 4, 5, 6, 7]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    partition: BitPartition,
    order: InputOrder,

    /// Row-major cell index for each input position
    targets: Vec<usize>,

    /// Input position for each row-major cell index
    sources: Vec<usize>,
}

impl Placement {
    pub fn new(partition: BitPartition, order: InputOrder) -> Result<Self, KmapError> {
        let count = partition.num_variables();
        if count > MAX_WIDTH {
            return Err(KmapError::SizeLimitExceeded {
                count,
                limit: MAX_WIDTH,
            });
        }

        // Rank of each codeword of the widest axis, shared by rows and columns
        let width = partition.row_bits().max(partition.col_bits());
        let ranks: Vec<usize> = (0..1 << width).map(gray_rank).collect();

        let cols = partition.col_size();
        let locate = |combination: usize| {
            let (high, low) = partition.split_index(combination);
            ranks[high] * cols + ranks[low]
        };

        let targets: Vec<usize> = match order {
            InputOrder::Natural => (0..partition.cells()).collect(),
            InputOrder::TruthTable => (0..partition.cells()).map(locate).collect(),
            InputOrder::GrayDisplay => (0..partition.cells())
                .map(|i| locate(gray_index(i)))
                .collect(),
        };

        let mut sources = vec![0; targets.len()];
        for (source, target) in targets.iter().enumerate() {
            sources[*target] = source;
        }

        trace!(%partition, %order, "computed placement");
        Ok(Self {
            partition,
            order,
            targets,
            sources,
        })
    }

    pub fn partition(&self) -> &BitPartition {
        &self.partition
    }

    pub fn order(&self) -> InputOrder {
        self.order
    }

    /// Number of values expected by this placement
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// A placement covers at least one cell
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Row-major cell index receiving the value at the given input position
    pub fn target(&self, position: usize) -> Option<usize> {
        self.targets.get(position).copied()
    }

    /// Row and column receiving the value at the given input position
    pub fn cell_of(&self, position: usize) -> Option<(usize, usize)> {
        let cols = self.partition.col_size();
        self.target(position).map(|t| (t / cols, t % cols))
    }

    /// Input position of the value placed in the given cell
    pub fn source_of(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.partition.row_size() || col >= self.partition.col_size() {
            return None;
        }
        self.sources
            .get(row * self.partition.col_size() + col)
            .copied()
    }

    /// Combination of the variables associated to the value at the given input position
    pub fn combination_of(&self, position: usize) -> usize {
        match self.order {
            InputOrder::Natural | InputOrder::TruthTable => position,
            InputOrder::GrayDisplay => gray_index(position),
        }
    }

    /// Input position of the value associated to a combination: inverse of [Self::combination_of]
    pub fn position_of(&self, combination: usize) -> usize {
        match self.order {
            InputOrder::Natural | InputOrder::TruthTable => combination,
            InputOrder::GrayDisplay => gray_rank(combination),
        }
    }

    fn check_len(&self, found: usize) -> Result<(), KmapError> {
        match found == self.len() {
            true => Ok(()),
            false => Err(KmapError::ShapeMismatch {
                expected: self.len(),
                found,
            }),
        }
    }

    /// Build a grid from values listed in the order of this placement
    pub fn place<V: Clone>(&self, values: &[V]) -> Result<Grid<V>, KmapError> {
        self.check_len(values.len())?;
        let cells = self.sources.iter().map(|s| values[*s].clone()).collect();
        Grid::from_row_major(
            self.partition.row_size(),
            self.partition.col_size(),
            cells,
        )
    }

    /// Build a grid from values listed in the order of this placement, moving them in place
    pub fn place_owned<V>(&self, values: Vec<V>) -> Result<Grid<V>, KmapError> {
        self.check_len(values.len())?;
        let mut slots: Vec<Option<V>> = Vec::with_capacity(values.len());
        slots.resize_with(values.len(), || None);
        for (value, target) in values.into_iter().zip(&self.targets) {
            slots[*target] = Some(value);
        }
        Grid::from_row_major(
            self.partition.row_size(),
            self.partition.col_size(),
            slots.into_iter().flatten().collect(),
        )
    }

    /// List the values of a grid in the order of this placement: inverse of [Self::place]
    pub fn unplace<V: Clone>(&self, grid: &Grid<V>) -> Result<Vec<V>, KmapError> {
        if grid.rows() != self.partition.row_size() || grid.cols() != self.partition.col_size() {
            return Err(KmapError::ShapeMismatch {
                expected: self.len(),
                found: grid.len(),
            });
        }
        let cells = grid.as_slice();
        Ok(self.targets.iter().map(|t| cells[*t].clone()).collect())
    }
}
