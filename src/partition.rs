use serde::{Deserialize, Serialize};
use std::fmt;

/// Select which axis receives the extra variable when their number is odd.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitPolicy {
    /// Rows get ```ceil(n/2)``` variables
    #[default]
    RowsFirst,
    /// Columns get ```ceil(n/2)``` variables
    ColumnsFirst,
}

/// Distribution of the variables between the rows and the columns of a map.
///
/// The first ```row_bits``` variables select the row, the remaining ```col_bits``` variables select the column.
/// A combination index is thus split into its high-order bits (row) and its low-order bits (column).
///
/// ```
/// use karnaugh::BitPartition;
///
/// let p = BitPartition::split(5);
/// assert_eq!((p.row_bits(), p.col_bits()), (3, 2));
/// assert_eq!((p.row_size(), p.col_size()), (8, 4));
/// assert_eq!(p.split_index(0b10110), (0b101, 0b10));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitPartition {
    row_bits: usize,
    col_bits: usize,
}

/// ```2^bits```, saturating when it does not fit in a usize
fn size(bits: usize) -> usize {
    u32::try_from(bits)
        .ok()
        .and_then(|b| 1usize.checked_shl(b))
        .unwrap_or(usize::MAX)
}

/// Mask of the ```bits``` lowest bits
fn low_mask(bits: usize) -> usize {
    match size(bits) {
        usize::MAX => usize::MAX,
        s => s - 1,
    }
}

impl BitPartition {
    /// Split variables with the default policy: rows get the extra variable
    pub fn split(num_vars: usize) -> Self {
        Self::with_policy(num_vars, SplitPolicy::RowsFirst)
    }

    pub fn with_policy(num_vars: usize, policy: SplitPolicy) -> Self {
        let major = (num_vars + 1) / 2;
        let minor = num_vars / 2;
        match policy {
            SplitPolicy::RowsFirst => Self {
                row_bits: major,
                col_bits: minor,
            },
            SplitPolicy::ColumnsFirst => Self {
                row_bits: minor,
                col_bits: major,
            },
        }
    }

    pub fn row_bits(&self) -> usize {
        self.row_bits
    }

    pub fn col_bits(&self) -> usize {
        self.col_bits
    }

    /// Total number of variables
    pub fn num_variables(&self) -> usize {
        self.row_bits + self.col_bits
    }

    /// Number of rows in the grid.
    ///
    /// Sizes saturate at ```usize::MAX``` when the number of bits exceeds the width of a usize,
    /// such partitions can not be placed (see [MAX_WIDTH](crate::MAX_WIDTH)).
    pub fn row_size(&self) -> usize {
        size(self.row_bits)
    }

    /// Number of columns in the grid
    pub fn col_size(&self) -> usize {
        size(self.col_bits)
    }

    /// Number of cells in the grid, i.e. the number of combinations
    pub fn cells(&self) -> usize {
        size(self.num_variables())
    }

    /// Separate the row (high-order) and column (low-order) bits of a combination
    pub fn split_index(&self, combination: usize) -> (usize, usize) {
        let high = u32::try_from(self.col_bits)
            .ok()
            .and_then(|b| combination.checked_shr(b))
            .unwrap_or(0);
        (high, combination & low_mask(self.col_bits))
    }

    /// Rebuild a combination from its row and column bits
    pub fn join_index(&self, high: usize, low: usize) -> usize {
        let high = u32::try_from(self.col_bits)
            .ok()
            .and_then(|b| high.checked_shl(b))
            .unwrap_or(0);
        high | low
    }
}

impl fmt::Display for BitPartition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.row_size(), self.col_size())
    }
}

#[cfg(test)]
mod tests {
    use crate::partition::*;
    use proptest::prelude::*;

    #[test]
    fn small_partitions() {
        let p = BitPartition::split(0);
        assert_eq!((p.row_bits(), p.col_bits()), (0, 0));
        assert_eq!(p.cells(), 1);

        let p = BitPartition::split(1);
        assert_eq!((p.row_size(), p.col_size()), (2, 1));
        assert_eq!(format!("{}", p), "2x1");

        let p = BitPartition::split(4);
        assert_eq!((p.row_bits(), p.col_bits()), (2, 2));
    }

    #[test]
    fn wide_partitions() {
        let p = BitPartition::split(64);
        assert_eq!((p.row_bits(), p.col_bits()), (32, 32));
        assert_eq!(p.cells(), usize::MAX);

        let p = BitPartition::split(200);
        assert_eq!((p.row_size(), p.col_size()), (usize::MAX, usize::MAX));
        assert_eq!(p.split_index(42), (0, 42));
        assert_eq!(p.join_index(0, 42), 42);
        assert_eq!(format!("{}", BitPartition::split(2)), "2x2");
    }

    #[test]
    fn columns_first() {
        let p = BitPartition::with_policy(3, SplitPolicy::ColumnsFirst);
        assert_eq!((p.row_bits(), p.col_bits()), (1, 2));
        assert_eq!(p.split_index(0b110), (0b1, 0b10));
    }

    proptest! {
        #[test]
        fn prop_split_covers_all_variables(n in 1usize..64) {
            let p = BitPartition::split(n);
            prop_assert_eq!(p.row_bits() + p.col_bits(), n);
            prop_assert_eq!(p.row_bits(), (n + 1) / 2);
            prop_assert!(p.row_bits() >= p.col_bits());
        }

        #[test]
        fn prop_split_join(n in 0usize..20, seed in any::<usize>()) {
            let p = BitPartition::split(n);
            let combination = seed % p.cells();
            let (high, low) = p.split_index(combination);
            prop_assert!(high < p.row_size());
            prop_assert!(low < p.col_size());
            prop_assert_eq!(p.join_index(high, low), combination);
        }
    }
}
