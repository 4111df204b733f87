//! Assemble a complete Karnaugh map from a list of variables and values.

use crate::efmt::{TableFormatted, TableStyle, DEFAULT_TABLE_STYLE};
use crate::*;

use bit_set::BitSet;
use delegate::delegate;
use itertools::Itertools;
use std::fmt;
use std::slice::Chunks;
use tracing::debug;

/// A Karnaugh map: a grid of values with Gray-coded row and column labels.
///
/// The first variables select the row, the others select the column (see [BitPartition]).
/// Rows and columns are labeled following the Gray code, so that any two adjacent cells,
/// including across the borders, differ by a single variable.
/// The values are dispatched in the cells according to the [InputOrder] of the configuration.
///
/// ```
/// use karnaugh::{Kmap, VariableSet};
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let variables: VariableSet = "A B C".parse()?;
/// let kmap = Kmap::new(variables, vec![1, 0, 0, 1, 1, 1, 0, 0])?;
///
/// assert_eq!(kmap.row_labels(), ["00", "01", "11", "10"]);
/// assert_eq!(kmap.col_labels(), ["0", "1"]);
/// assert_eq!(kmap.row(2), Some(&[1, 1][..]));
/// assert_eq!(kmap.flatten(), vec![1, 0, 0, 1, 1, 1, 0, 0]);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kmap<V> {
    variables: VariableSet,
    placement: Placement,
    row_labels: Vec<String>,
    col_labels: Vec<String>,
    mode: OutputMode,
    grid: Grid<V>,
}

impl<V> Kmap<V> {
    /// Build a map with the default configuration
    pub fn new(variables: VariableSet, values: Vec<V>) -> Result<Self, KmapError> {
        Self::build(variables, values, &KmapConfig::default())
    }

    /// Build a map.
    ///
    /// The variables are checked first (not empty, not too many), then the number of values must be
    /// exactly ```2^n``` for ```n``` variables. No grid is built if any of these checks fails.
    pub fn build(
        variables: VariableSet,
        values: Vec<V>,
        config: &KmapConfig,
    ) -> Result<Self, KmapError> {
        if variables.is_empty() {
            return Err(InputError::Empty.into());
        }
        config.check_size(variables.len())?;

        let partition = BitPartition::with_policy(variables.len(), config.split);
        if values.len() != partition.cells() {
            return Err(KmapError::ShapeMismatch {
                expected: partition.cells(),
                found: values.len(),
            });
        }

        let row_labels = GrayCode::new(partition.row_bits())?.labels();
        let col_labels = GrayCode::new(partition.col_bits())?.labels();
        let placement = Placement::new(partition, config.order)?;
        let grid = placement.place_owned(values)?;

        debug!(
            variables = variables.len(),
            %partition,
            order = %config.order,
            "built Karnaugh map"
        );
        Ok(Self {
            variables,
            placement,
            row_labels,
            col_labels,
            mode: OutputMode::default(),
            grid,
        })
    }

    /// Select the output mode passed along to the renderer
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    delegate! {
        to self.grid {
            /// Number of rows
            pub fn rows(&self) -> usize;
            /// Number of columns
            pub fn cols(&self) -> usize;
            /// Value stored in a cell
            pub fn get(&self, row: usize, col: usize) -> Option<&V>;
            pub fn row(&self, row: usize) -> Option<&[V]>;
            pub fn iter_rows(&self) -> Chunks<'_, V>;
        }
    }

    pub fn variables(&self) -> &VariableSet {
        &self.variables
    }

    pub fn partition(&self) -> &BitPartition {
        self.placement.partition()
    }

    pub fn placement(&self) -> &Placement {
        &self.placement
    }

    pub fn order(&self) -> InputOrder {
        self.placement.order()
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    pub fn row_labels(&self) -> &[String] {
        &self.row_labels
    }

    pub fn col_labels(&self) -> &[String] {
        &self.col_labels
    }

    /// Variables selecting the row
    pub fn row_variables(&self) -> &[String] {
        self.variables.split(self.placement.partition()).0
    }

    /// Variables selecting the column
    pub fn col_variables(&self) -> &[String] {
        self.variables.split(self.placement.partition()).1
    }

    pub fn grid(&self) -> &Grid<V> {
        &self.grid
    }

    pub fn into_grid(self) -> Grid<V> {
        self.grid
    }

    /// Combination of the variables associated to the value stored in a cell
    pub fn combination(&self, row: usize, col: usize) -> Option<usize> {
        self.placement
            .source_of(row, col)
            .map(|s| self.placement.combination_of(s))
    }

    /// Cell storing the value of a combination of the variables
    pub fn cell_of_combination(&self, combination: usize) -> Option<(usize, usize)> {
        self.placement
            .cell_of(self.placement.position_of(combination))
    }

    /// Iterate over all combinations in input order, with the value of their cell
    pub fn iter_combinations(&self) -> impl Iterator<Item = (usize, &V)> + '_ {
        (0..self.placement.len()).filter_map(move |position| {
            let (row, col) = self.placement.cell_of(position)?;
            let value = self.grid.get(row, col)?;
            Some((self.placement.combination_of(position), value))
        })
    }

    /// Display the map as a text table with a custom style
    pub fn table<'a>(&'a self, style: &'a TableStyle<'a>) -> TableFormatted<'a, V> {
        TableFormatted::new(self, style)
    }
}

impl<V: Clone> Kmap<V> {
    /// Values of the grid in row-major order
    pub fn flatten(&self) -> Vec<V> {
        self.grid.flatten()
    }

    /// Values of the grid in the order used to build the map
    pub fn values(&self) -> Vec<V> {
        let cells = self.grid.as_slice();
        (0..self.placement.len())
            .filter_map(|p| self.placement.target(p))
            .map(|t| cells[t].clone())
            .collect()
    }

    pub fn to_response(&self) -> KmapResponse<V> {
        KmapResponse {
            variables: self.variables.names().to_vec(),
            row_variables: self.row_variables().to_vec(),
            col_variables: self.col_variables().to_vec(),
            row_labels: self.row_labels.clone(),
            col_labels: self.col_labels.clone(),
            grid: self.grid.to_rows(),
            order: self.order(),
            output_mode: self.mode,
        }
    }
}

impl<V: fmt::Display> Kmap<V> {
    /// Positional arguments for the external renderer
    pub fn render_args(&self) -> Result<RenderArgs, KmapError> {
        RenderArgs::from_kmap(self)
    }
}

impl Kmap<Cell> {
    fn collect_combinations(&self, value: Cell) -> BitSet {
        self.iter_combinations()
            .filter(|(_, v)| **v == value)
            .map(|(c, _)| c)
            .collect()
    }

    /// Combinations where the function is true
    pub fn minterms(&self) -> BitSet {
        self.collect_combinations(Cell::One)
    }

    /// Combinations where the function is false
    pub fn maxterms(&self) -> BitSet {
        self.collect_combinations(Cell::Zero)
    }

    pub fn dont_cares(&self) -> BitSet {
        self.collect_combinations(Cell::DontCare)
    }

    /// List the canonical terms of the function according to the output mode.
    ///
    /// This gives the indices of the minterms (SOP) or maxterms (POS), followed by the don't care combinations.
    ///
    /// ```
    /// use karnaugh::{Cell, Kmap, OutputMode};
    /// # use karnaugh::KmapError;
    /// # fn main() -> Result<(), KmapError> {
    /// let values: Vec<Cell> = karnaugh::parse_values("0 1 1 x")?;
    /// let kmap = Kmap::new("A B".parse()?, values)?;
    /// assert_eq!(kmap.canonical(), "Σm(1, 2) + d(3)");
    /// assert_eq!(kmap.with_mode(OutputMode::Pos).canonical(), "ΠM(0) + d(3)");
    /// # Ok(())
    /// # }
    /// ```
    pub fn canonical(&self) -> String {
        let (prefix, terms) = match self.mode {
            OutputMode::Sop => ("Σm", self.minterms()),
            OutputMode::Pos => ("ΠM", self.maxterms()),
        };
        let mut result = format!("{}({})", prefix, terms.iter().join(", "));
        let dont_cares = self.dont_cares();
        if !dont_cares.is_empty() {
            result.push_str(&format!(" + d({})", dont_cares.iter().join(", ")));
        }
        result
    }
}

impl<V: fmt::Display> fmt::Display for Kmap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.table(&DEFAULT_TABLE_STYLE), f)
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn two_variables() -> Result<(), KmapError> {
        let kmap = Kmap::new("A B".parse()?, vec![0, 1, 1, 0])?;
        assert_eq!(kmap.partition().row_bits(), 1);
        assert_eq!(kmap.partition().col_bits(), 1);
        assert_eq!(kmap.row_labels(), ["0", "1"]);
        assert_eq!(kmap.col_labels(), ["0", "1"]);
        assert_eq!(kmap.grid().to_rows(), vec![vec![0, 1], vec![1, 0]]);
        assert_eq!(kmap.row_variables(), ["A"]);
        assert_eq!(kmap.col_variables(), ["B"]);
        Ok(())
    }

    #[test]
    fn three_variables() -> Result<(), KmapError> {
        let kmap = Kmap::new("A B C".parse()?, vec![1, 0, 0, 1, 1, 1, 0, 0])?;
        assert_eq!(kmap.row_labels(), ["00", "01", "11", "10"]);
        assert_eq!(kmap.col_labels(), ["0", "1"]);
        assert_eq!(
            kmap.grid().to_rows(),
            vec![vec![1, 0], vec![0, 1], vec![1, 1], vec![0, 0]]
        );
        assert_eq!((kmap.rows(), kmap.cols()), (4, 2));
        Ok(())
    }

    #[test]
    fn shape_mismatch() -> Result<(), KmapError> {
        let result = Kmap::new("A B C".parse()?, vec![0; 7]);
        assert_eq!(
            result,
            Err(KmapError::ShapeMismatch {
                expected: 8,
                found: 7
            })
        );
        Ok(())
    }

    #[test]
    fn validation_order() -> Result<(), KmapError> {
        assert_eq!(
            Kmap::new(VariableSet::default(), vec![0]),
            Err(KmapError::InvalidVariableSet(InputError::Empty))
        );

        // The size limit is checked before the number of values
        let names: Vec<String> = (0..21).map(|i| format!("v{}", i)).collect();
        let variables = VariableSet::from_names(&names)?;
        assert_eq!(
            Kmap::new(variables, vec![0u8; 3]),
            Err(KmapError::SizeLimitExceeded {
                count: 21,
                limit: 20
            })
        );
        Ok(())
    }

    #[test]
    fn single_variable() -> Result<(), KmapError> {
        let kmap = Kmap::new("A".parse()?, vec![Cell::One, Cell::Zero])?;
        assert_eq!((kmap.rows(), kmap.cols()), (2, 1));
        assert_eq!(kmap.col_labels(), [""]);
        assert!(kmap.col_variables().is_empty());
        Ok(())
    }

    #[test]
    fn combinations_follow_labels() -> Result<(), KmapError> {
        let config = KmapConfig::default().with_order(InputOrder::TruthTable);
        let values: Vec<usize> = (0..16).collect();
        let kmap = Kmap::build("A B C D".parse()?, values, &config)?;
        for row in 0..kmap.rows() {
            for col in 0..kmap.cols() {
                let label = format!("{}{}", kmap.row_labels()[row], kmap.col_labels()[col]);
                let combination = kmap.combination(row, col).unwrap();
                assert_eq!(tools::parse_bits(&label), Some(combination));
                assert_eq!(kmap.get(row, col), Some(&combination));
                assert_eq!(kmap.cell_of_combination(combination), Some((row, col)));
            }
        }
        assert_eq!(kmap.values(), (0..16).collect::<Vec<_>>());
        assert_eq!(kmap.cell_of_combination(16), None);
        Ok(())
    }

    #[test]
    fn gray_display_values() -> Result<(), KmapError> {
        let config = KmapConfig::default().with_order(InputOrder::GrayDisplay);
        let kmap = Kmap::build("A B C".parse()?, (0..8).collect(), &config)?;
        assert_eq!(
            kmap.grid().to_rows(),
            vec![vec![0, 1], vec![3, 2], vec![4, 5], vec![7, 6]]
        );
        assert_eq!(kmap.values(), (0..8).collect::<Vec<_>>());
        assert_eq!(kmap.flatten(), vec![0, 1, 3, 2, 4, 5, 7, 6]);
        assert_eq!(kmap.combination(1, 0), Some(0b010));
        Ok(())
    }

    #[test]
    fn canonical_terms() -> Result<(), KmapError> {
        let config = KmapConfig::default().with_order(InputOrder::TruthTable);
        let values: Vec<Cell> = parse_values("1 0 0 1 x 1 0 0")?;
        let kmap = Kmap::build("A B C".parse()?, values, &config)?;
        assert_eq!(kmap.minterms().iter().collect::<Vec<_>>(), vec![0, 3, 5]);
        assert_eq!(kmap.maxterms().iter().collect::<Vec<_>>(), vec![1, 2, 6, 7]);
        assert_eq!(kmap.canonical(), "Σm(0, 3, 5) + d(4)");
        Ok(())
    }

    #[test]
    fn idempotent() -> Result<(), KmapError> {
        let values = vec![1, 0, 0, 1, 1, 1, 0, 0];
        let a = Kmap::new("A B C".parse()?, values.clone())?;
        let b = Kmap::new("A B C".parse()?, values)?;
        assert_eq!(a, b);
        Ok(())
    }

    #[test]
    fn text_table() -> Result<(), KmapError> {
        let kmap = Kmap::new("A B".parse()?, vec![0, 1, 1, 0])?;
        assert_eq!(format!("{}", kmap), "A\\B 0 1\n  0 0 1\n  1 1 0\n");

        let kmap = Kmap::new("A B C".parse()?, vec![1, 0, 0, 1, 1, 1, 0, 0])?;
        let expected = "AB\\C 0 1\n  00 1 0\n  01 0 1\n  11 1 1\n  10 0 0\n";
        assert_eq!(format!("{}", kmap), expected);
        Ok(())
    }
}
