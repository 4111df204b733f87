//! Text rendering of maps as tables

use crate::Kmap;
use itertools::Itertools;
use std::fmt;

/// Separators and alignment used to write a map as a text table.
///
/// The top-left corner names the row variables and the column variables, separated by ```axis_sep```.
pub struct TableStyle<'a> {
    axis_sep: &'a str,
    col_sep: &'a str,
    var_sep: &'a str,
    align: bool,
}

/// Aligned columns, the corner reads ```AB\CD```
pub static DEFAULT_TABLE_STYLE: TableStyle = TableStyle {
    axis_sep: "\\",
    col_sep: " ",
    var_sep: "",
    align: true,
};

/// Comma-separated values without padding, the corner reads ```A B/C D```
pub static CSV_TABLE_STYLE: TableStyle = TableStyle {
    axis_sep: "/",
    col_sep: ",",
    var_sep: " ",
    align: false,
};

impl<'a> TableStyle<'a> {
    pub const fn new(axis_sep: &'a str, col_sep: &'a str, var_sep: &'a str, align: bool) -> Self {
        Self {
            axis_sep,
            col_sep,
            var_sep,
            align,
        }
    }

    fn corner(&self, rows: &[String], cols: &[String]) -> String {
        format!(
            "{}{}{}",
            rows.iter().join(self.var_sep),
            self.axis_sep,
            cols.iter().join(self.var_sep)
        )
    }
}

/// A map associated to a table style, ready to be displayed.
pub struct TableFormatted<'a, V> {
    kmap: &'a Kmap<V>,
    style: &'a TableStyle<'a>,
}

impl<'a, V> TableFormatted<'a, V> {
    pub fn new(kmap: &'a Kmap<V>, style: &'a TableStyle<'a>) -> Self {
        Self { kmap, style }
    }
}

fn width<'s, I: IntoIterator<Item = &'s String>>(items: I) -> usize {
    items
        .into_iter()
        .map(|s| s.chars().count())
        .max()
        .unwrap_or(0)
}

impl<V: fmt::Display> fmt::Display for TableFormatted<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kmap = self.kmap;
        let style = self.style;
        let corner = style.corner(kmap.row_variables(), kmap.col_variables());
        let cells: Vec<String> = kmap
            .grid()
            .as_slice()
            .iter()
            .map(|v| v.to_string())
            .collect();

        let (label_width, cell_width) = match style.align {
            true => (
                width(kmap.row_labels()).max(corner.chars().count()),
                width(kmap.col_labels()).max(width(&cells)),
            ),
            false => (0, 0),
        };

        write!(f, "{:<w$}", corner, w = label_width)?;
        for label in kmap.col_labels() {
            write!(f, "{}{:>w$}", style.col_sep, label, w = cell_width)?;
        }
        writeln!(f)?;

        for (label, row) in kmap.row_labels().iter().zip(cells.chunks(kmap.cols())) {
            write!(f, "{:>w$}", label, w = label_width)?;
            for cell in row {
                write!(f, "{}{:>w$}", style.col_sep, cell, w = cell_width)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
