use crate::{gray::MAX_WIDTH, InputOrder, KmapError, SplitPolicy};
use serde::{Deserialize, Serialize};

/// Default limit on the number of variables of a map.
pub const DEFAULT_MAX_VARIABLES: usize = 20;

/// Settings used to build maps.
///
/// Missing fields take their default value when the configuration is loaded from JSON.
///
/// ```
/// use karnaugh::{InputOrder, KmapConfig};
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let config = KmapConfig::from_json(r#"{"max_variables": 8, "order": "truth_table"}"#)?;
/// assert_eq!(config.max_variables, 8);
/// assert_eq!(config.order, InputOrder::TruthTable);
///
/// let config = KmapConfig::default().with_order(InputOrder::GrayDisplay);
/// assert_eq!(config.variable_limit(), 20);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KmapConfig {
    /// Reject maps with more variables
    pub max_variables: usize,

    /// Axis receiving the extra variable
    pub split: SplitPolicy,

    /// Order of the values when the request does not specify it
    pub order: InputOrder,
}

impl Default for KmapConfig {
    fn default() -> Self {
        Self {
            max_variables: DEFAULT_MAX_VARIABLES,
            split: SplitPolicy::default(),
            order: InputOrder::default(),
        }
    }
}

impl KmapConfig {
    pub fn from_json(s: &str) -> Result<Self, KmapError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn with_max_variables(mut self, max_variables: usize) -> Self {
        self.max_variables = max_variables;
        self
    }

    pub fn with_split(mut self, split: SplitPolicy) -> Self {
        self.split = split;
        self
    }

    pub fn with_order(mut self, order: InputOrder) -> Self {
        self.order = order;
        self
    }

    /// Effective limit: the configured one, capped by the widest supported Gray code
    pub fn variable_limit(&self) -> usize {
        self.max_variables.min(MAX_WIDTH)
    }

    /// Reject a number of variables above the limit
    pub fn check_size(&self, count: usize) -> Result<(), KmapError> {
        let limit = self.variable_limit();
        match count > limit {
            true => Err(KmapError::SizeLimitExceeded { count, limit }),
            false => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn limits() {
        let config = KmapConfig::default();
        assert!(config.check_size(20).is_ok());
        assert_eq!(
            config.check_size(21),
            Err(KmapError::SizeLimitExceeded {
                count: 21,
                limit: 20
            })
        );

        let config = config.with_max_variables(1000);
        assert_eq!(config.variable_limit(), 24);
    }

    #[test]
    fn json_defaults() -> Result<(), KmapError> {
        assert_eq!(KmapConfig::from_json("{}")?, KmapConfig::default());

        let config = KmapConfig::from_json(r#"{"split": "columns_first"}"#)?;
        assert_eq!(config.split, SplitPolicy::ColumnsFirst);
        assert_eq!(config.max_variables, DEFAULT_MAX_VARIABLES);

        assert!(KmapConfig::from_json(r#"{"order": "spiral"}"#).is_err());
        Ok(())
    }
}
