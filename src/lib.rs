//! Build Karnaugh maps from lists of Boolean variables and function values.
//!
//! A [Karnaugh map](Kmap) arranges the ```2^n``` values of a function of ```n``` [variables](VariableSet)
//! in a grid. The first variables select the row and the remaining ones select the column
//! (see [BitPartition]). Rows and columns are labeled with a reflected [Gray code](GrayCode):
//! adjacent labels, including the last and the first one, differ by a single bit.
//!
//! ```
//! use karnaugh::{Kmap, VariableSet};
//! # use karnaugh::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! let variables: VariableSet = "A B C D".parse()?;
//! let kmap = Kmap::new(variables, (0..16).collect::<Vec<u8>>())?;
//!
//! assert_eq!(kmap.row_labels(), ["00", "01", "11", "10"]);
//! assert_eq!(kmap.col_labels(), ["00", "01", "11", "10"]);
//! assert_eq!(kmap.row(0), Some(&[0, 1, 2, 3][..]));
//!
//! println!("{}", kmap);
//! # Ok(())
//! # }
//! ```
//!
//! # Input orders
//!
//! The list of values can be read in several ways, selected by the [InputOrder] of the [configuration](KmapConfig).
//! By default the values fill the grid row by row. With [InputOrder::TruthTable], value ```i``` is the value of
//! the function for the combination ```i```, and lands in the cell whose labels spell ```i``` in binary.
//!
//! ```
//! use karnaugh::{InputOrder, Kmap, KmapConfig};
//! # use karnaugh::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! let config = KmapConfig::default().with_order(InputOrder::TruthTable);
//! let kmap = Kmap::build("A B C".parse()?, (0..8).collect::<Vec<u8>>(), &config)?;
//!
//! // The third row is labeled "11": it holds the combinations 110 and 111
//! assert_eq!(kmap.row(2), Some(&[6, 7][..]));
//! # Ok(())
//! # }
//! ```
//!
//! # Requests and renderer
//!
//! A [KmapRequest] carries the names and values sent by a client, usually as JSON.
//! The resulting map can be sent back as a [KmapResponse], or forwarded to an external renderer
//! as a list of positional arguments ([RenderArgs]).
//!
//! ```
//! use karnaugh::{Cell, KmapConfig, KmapRequest};
//! # use karnaugh::KmapError;
//! # fn main() -> Result<(), KmapError> {
//!
//! let request: KmapRequest<Cell> = KmapRequest::parse("x y", "1 0 x 1")?;
//! let kmap = request.build(&KmapConfig::default())?;
//!
//! assert_eq!(kmap.canonical(), "Σm(0, 3) + d(2)");
//! assert_eq!(kmap.render_args()?.to_args(), ["x+y", "0+1", "0+1", "1+0+x+1", "sop"]);
//! # Ok(())
//! # }
//! ```

mod cell;
mod config;
mod efmt;
mod error;
mod gray;
mod grid;
mod kmap;
mod parse;
mod partition;
mod placer;
mod request;
pub mod tools;
mod variable;

#[cfg(feature = "pyo3")]
mod python;

#[macro_use]
extern crate pest_derive;

// Export public structures and API
pub use cell::Cell;
pub use config::{KmapConfig, DEFAULT_MAX_VARIABLES};
pub use efmt::{TableFormatted, TableStyle, CSV_TABLE_STYLE, DEFAULT_TABLE_STYLE};
pub use error::{InputError, KmapError};
pub use gray::{gray_code, gray_index, gray_rank, GrayCode, MAX_WIDTH};
pub use grid::Grid;
pub use kmap::Kmap;
pub use parse::{parse_definition, parse_names, parse_values};
pub use partition::{BitPartition, SplitPolicy};
pub use placer::{InputOrder, Placement};
pub use request::{KmapRequest, KmapResponse, OutputMode, RenderArgs};
pub use variable::VariableSet;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn scenarios() -> Result<(), KmapError> {
        let config = KmapConfig::default();

        let kmap = KmapRequest::new(vec!["A".into(), "B".into()], vec![0, 1, 1, 0]).build(&config)?;
        assert_eq!(kmap.grid().to_rows(), vec![vec![0, 1], vec![1, 0]]);

        let names: Vec<String> = "A B C D".split(' ').map(String::from).collect();
        let kmap = KmapRequest::new(names, (0..16).collect::<Vec<u32>>()).build(&config)?;
        assert_eq!((kmap.rows(), kmap.cols()), (4, 4));
        assert_eq!(kmap.row(3), Some(&[12, 13, 14, 15][..]));

        assert_eq!(gray_code(3)?, ["000", "001", "011", "010", "110", "111", "101", "100"]);
        Ok(())
    }

    #[test]
    fn adjacent_cells_differ_by_one_variable() -> Result<(), KmapError> {
        for n in 1..=8 {
            let names: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
            let config = KmapConfig::default().with_order(InputOrder::TruthTable);
            let kmap = Kmap::build(VariableSet::from_names(&names)?, (0..1usize << n).collect(), &config)?;
            for row in 0..kmap.rows() {
                for col in 0..kmap.cols() {
                    let here = kmap.grid()[(row, col)];
                    for (r, c) in kmap.grid().neighbors(row, col) {
                        let there = kmap.grid()[(r, c)];
                        assert_eq!((here ^ there).count_ones(), 1);
                    }
                }
            }
        }
        Ok(())
    }
}
