use thiserror::Error;

#[cfg(feature = "pyo3")]
use pyo3::{exceptions::PyValueError, PyErr};

/// Error raised while building a Karnaugh map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KmapError {
    /// The number of values does not match the size of the map
    #[error("Expected {expected} values, found {found}")]
    ShapeMismatch { expected: usize, found: usize },

    /// The variables or the values are not usable
    #[error("Invalid variable set: {0}")]
    InvalidVariableSet(#[from] InputError),

    /// Too many variables to build the map
    #[error("{count} variables exceed the limit of {limit}")]
    SizeLimitExceeded { count: usize, limit: usize },

    /// The output mode is neither SOP nor POS
    #[error("Unknown output mode '{0}'")]
    InvalidOutputMode(String),

    /// The name does not match any input order
    #[error("Unknown input order '{0}'")]
    InvalidInputOrder(String),
}

/// Problem detected in the input before any grid computation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// No variable at all
    #[error("The list of variables is empty")]
    Empty,

    /// The name is invalid
    #[error("The name '{0}' is invalid")]
    InvalidName(String),

    /// The name is used twice
    #[error("The name '{0}' conflicts with an other variable")]
    DuplicateName(String),

    /// The text does not describe a cell value
    #[error("'{0}' is not a valid cell value")]
    UnknownValue(String),

    /// A value of the list could not be read
    #[error("Invalid value '{value}' at position {position}")]
    InvalidValue { position: usize, value: String },

    /// The request or argument list is not well-formed
    #[error("Malformed input: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for KmapError {
    fn from(e: serde_json::Error) -> Self {
        InputError::Malformed(e.to_string()).into()
    }
}

#[cfg(feature = "pyo3")]
impl From<KmapError> for PyErr {
    fn from(e: KmapError) -> Self {
        PyValueError::new_err(format!("{}", e))
    }
}
