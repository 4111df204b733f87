//! Ordered collections of named variables

use crate::{parse, BitPartition, InputError, KmapError};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::slice::Iter;
use std::str::FromStr;

// Separators are reserved for the text and renderer encodings
static RE_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s+,;:=]+$").unwrap());

/// An ordered list of uniquely named Boolean variables.
///
/// The position of a variable defines its significance in the combination index:
/// the first variable is the most significant bit. Names must be non-empty, unique, and can not
/// contain spaces or the separators used in textual lists (```+ , ; : =```).
///
/// ```
/// use karnaugh::VariableSet;
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let mut variables = VariableSet::default();
/// variables.add("A")?;
/// variables.add("B")?;
/// assert!(variables.add("A").is_err());
///
/// let parsed: VariableSet = "A B C".parse()?;
/// assert_eq!(parsed.get("C"), Some(2));
/// assert_eq!(parsed.significance(0), Some(2));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct VariableSet {
    /// The names in order
    names: Vec<String>,

    /// Find a variable by name
    name2idx: HashMap<String, usize>,
}

impl VariableSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a non-empty collection from a list of names
    pub fn from_names<S: AsRef<str>, I: IntoIterator<Item = S>>(
        names: I,
    ) -> Result<Self, KmapError> {
        let mut result = Self::default();
        for name in names {
            result.add(name.as_ref())?;
        }
        if result.is_empty() {
            return Err(InputError::Empty.into());
        }
        Ok(result)
    }

    /// Append a new variable and return its position.
    ///
    /// Returns an error if the name is invalid or already used, in this case the collection is not modified.
    pub fn add(&mut self, name: &str) -> Result<usize, KmapError> {
        if !RE_NAME.is_match(name) {
            return Err(InputError::InvalidName(name.into()).into());
        }
        if self.name2idx.contains_key(name) {
            return Err(InputError::DuplicateName(name.into()).into());
        }
        let idx = self.names.len();
        self.names.push(name.into());
        self.name2idx.insert(name.into(), idx);
        Ok(idx)
    }

    /// Get the number of variables
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return whether there are no variables in this collection
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Search the position of a variable with the given name
    pub fn get(&self, name: &str) -> Option<usize> {
        self.name2idx.get(name).copied()
    }

    /// Check if a name is part of the collection
    pub fn contains_name(&self, name: &str) -> bool {
        self.name2idx.contains_key(name)
    }

    /// Name of the variable at the given position
    pub fn name(&self, idx: usize) -> Option<&str> {
        self.names.get(idx).map(|s| s.as_str())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn iter(&self) -> Iter<'_, String> {
        self.names.iter()
    }

    /// Bit of the combination index associated to the variable at the given position
    pub fn significance(&self, idx: usize) -> Option<usize> {
        match idx < self.len() {
            true => Some(self.len() - 1 - idx),
            false => None,
        }
    }

    /// Separate the row variables from the column variables
    pub fn split(&self, partition: &BitPartition) -> (&[String], &[String]) {
        let at = partition.row_bits().min(self.len());
        self.names.split_at(at)
    }
}

impl TryFrom<Vec<String>> for VariableSet {
    type Error = KmapError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<VariableSet> for Vec<String> {
    fn from(vs: VariableSet) -> Self {
        vs.names
    }
}

impl<'a> IntoIterator for &'a VariableSet {
    type Item = &'a String;
    type IntoIter = Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

impl FromStr for VariableSet {
    type Err = KmapError;

    fn from_str(descr: &str) -> Result<Self, KmapError> {
        Self::from_names(parse::parse_names(descr)?)
    }
}

impl fmt::Display for VariableSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn build_and_query() -> Result<(), KmapError> {
        let vs = VariableSet::from_names(["x", "y", "z"])?;
        assert_eq!(vs.len(), 3);
        assert_eq!(vs.name(1), Some("y"));
        assert_eq!(vs.get("z"), Some(2));
        assert!(!vs.contains_name("w"));
        assert_eq!(vs.significance(2), Some(0));
        assert_eq!(vs.significance(3), None);
        assert_eq!(format!("{}", vs), "x y z");
        Ok(())
    }

    #[test]
    fn rejected_names() {
        assert_eq!(
            VariableSet::from_names(Vec::<String>::new()),
            Err(KmapError::InvalidVariableSet(InputError::Empty))
        );
        assert_eq!(
            VariableSet::from_names(["A", "B", "A"]),
            Err(KmapError::InvalidVariableSet(InputError::DuplicateName(
                "A".into()
            )))
        );
        for name in ["", "A B", "A+B", "x:1"] {
            assert_eq!(
                VariableSet::new().add(name),
                Err(KmapError::InvalidVariableSet(InputError::InvalidName(
                    name.into()
                )))
            );
        }
    }

    #[test]
    fn split_rows_and_columns() -> Result<(), KmapError> {
        let vs: VariableSet = "A B C".parse()?;
        let (rows, cols) = vs.split(&BitPartition::split(vs.len()));
        assert_eq!(rows, ["A", "B"]);
        assert_eq!(cols, ["C"]);

        let (rows, cols) = vs.split(&BitPartition::with_policy(3, SplitPolicy::ColumnsFirst));
        assert_eq!(rows, ["A"]);
        assert_eq!(cols, ["B", "C"]);
        Ok(())
    }

    #[test]
    fn serde_as_list() -> Result<(), KmapError> {
        let vs: VariableSet = serde_json::from_str(r#"["A", "B"]"#)?;
        assert_eq!(vs.names(), ["A", "B"]);
        assert_eq!(serde_json::to_string(&vs)?, r#"["A","B"]"#);
        assert!(serde_json::from_str::<VariableSet>(r#"["A", "A"]"#).is_err());
        Ok(())
    }
}
