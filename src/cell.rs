use crate::{InputError, KmapError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output value of a Boolean function for one combination of its inputs.
///
/// Cells can be parsed from ```0```/```1``` (or ```false```/```true```),
/// don't care values accept ```x```, ```X```, ```-```, ```d``` and ```?```.
/// In JSON, they are read from integers, Booleans or strings and written as ```0```, ```1``` and ```"x"```.
///
/// ```
/// use karnaugh::Cell;
///
/// let cells: Vec<Cell> = ["1", "0", "x"].iter().map(|s| s.parse().unwrap()).collect();
/// assert_eq!(cells, vec![Cell::One, Cell::Zero, Cell::DontCare]);
/// assert!("2".parse::<Cell>().is_err());
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "CellRepr", into = "CellRepr")]
pub enum Cell {
    #[default]
    Zero,
    One,
    DontCare,
}

/// Loose JSON representation of a cell
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(untagged)]
enum CellRepr {
    Int(u64),
    Bool(bool),
    Text(String),
}

impl Cell {
    /// Boolean value of a fixed cell, None for don't care
    pub fn value(&self) -> Option<bool> {
        match self {
            Cell::Zero => Some(false),
            Cell::One => Some(true),
            Cell::DontCare => None,
        }
    }

    pub fn is_dont_care(&self) -> bool {
        *self == Cell::DontCare
    }
}

impl From<bool> for Cell {
    fn from(b: bool) -> Self {
        match b {
            true => Cell::One,
            false => Cell::Zero,
        }
    }
}

impl FromStr for Cell {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(Cell::Zero),
            "1" => Ok(Cell::One),
            "x" | "X" | "-" | "d" | "?" => Ok(Cell::DontCare),
            _ if s.eq_ignore_ascii_case("false") => Ok(Cell::Zero),
            _ if s.eq_ignore_ascii_case("true") => Ok(Cell::One),
            _ => Err(InputError::UnknownValue(s.into())),
        }
    }
}

impl TryFrom<CellRepr> for Cell {
    type Error = KmapError;

    fn try_from(repr: CellRepr) -> Result<Self, Self::Error> {
        match repr {
            CellRepr::Int(0) => Ok(Cell::Zero),
            CellRepr::Int(1) => Ok(Cell::One),
            CellRepr::Int(v) => Err(InputError::UnknownValue(v.to_string()).into()),
            CellRepr::Bool(b) => Ok(Cell::from(b)),
            CellRepr::Text(s) => Ok(s.parse()?),
        }
    }
}

impl From<Cell> for CellRepr {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Zero => CellRepr::Int(0),
            Cell::One => CellRepr::Int(1),
            Cell::DontCare => CellRepr::Text("x".into()),
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Zero => write!(f, "0"),
            Cell::One => write!(f, "1"),
            Cell::DontCare => write!(f, "x"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn parse_and_display() {
        for s in ["0", "1", "x"] {
            let c: Cell = s.parse().unwrap();
            assert_eq!(format!("{}", c), s);
        }
        assert_eq!("TRUE".parse::<Cell>(), Ok(Cell::One));
        assert_eq!("-".parse::<Cell>(), Ok(Cell::DontCare));
        assert_eq!(
            "yes".parse::<Cell>(),
            Err(InputError::UnknownValue("yes".into()))
        );
    }

    #[test]
    fn json_values() -> Result<(), KmapError> {
        let cells: Vec<Cell> = serde_json::from_str(r#"[0, 1, true, "x", "0"]"#)?;
        assert_eq!(
            cells,
            vec![Cell::Zero, Cell::One, Cell::One, Cell::DontCare, Cell::Zero]
        );
        assert_eq!(serde_json::to_string(&cells)?, r#"[0,1,1,"x",0]"#);
        assert!(serde_json::from_str::<Vec<Cell>>("[2]").is_err());
        Ok(())
    }
}
