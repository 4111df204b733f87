//! Python bindings, enabled by the ```pyo3``` feature.

use crate::*;

use pyo3::prelude::*;

type PyMap = (Vec<String>, Vec<String>, Vec<Vec<i64>>);

fn build(
    variables: Vec<String>,
    minterms: Vec<i64>,
    order: Option<&str>,
    mode: Option<&str>,
) -> Result<Kmap<i64>, KmapError> {
    let mut request = KmapRequest::new(variables, minterms);
    if let Some(order) = order {
        request = request.with_order(order.parse()?);
    }
    if let Some(mode) = mode {
        request = request.with_mode(mode.parse()?);
    }
    request.build(&KmapConfig::default())
}

/// Labels of a reflected Gray code
#[pyfunction]
fn gray_code(width: usize) -> PyResult<Vec<String>> {
    Ok(crate::gray_code(width)?)
}

/// Row labels, column labels and rows of a map
#[pyfunction]
fn build_map(variables: Vec<String>, minterms: Vec<i64>, order: Option<&str>) -> PyResult<PyMap> {
    let kmap = build(variables, minterms, order, None)?;
    Ok((
        kmap.row_labels().to_vec(),
        kmap.col_labels().to_vec(),
        kmap.grid().to_rows(),
    ))
}

/// Arguments for the external renderer
#[pyfunction]
fn render_args(
    variables: Vec<String>,
    minterms: Vec<i64>,
    mode: Option<&str>,
    order: Option<&str>,
) -> PyResult<Vec<String>> {
    let kmap = build(variables, minterms, order, mode)?;
    Ok(kmap.render_args()?.to_args())
}

#[pymodule]
fn karnaugh(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(gray_code, m)?)?;
    m.add_function(wrap_pyfunction!(build_map, m)?)?;
    m.add_function(wrap_pyfunction!(render_args, m)?)?;
    Ok(())
}
