//! Data exchanged with the outside world: requests, responses, and renderer arguments.

use crate::*;

use itertools::Itertools;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Form of the expression requested by the caller.
///
/// The map does not depend on it, it is passed along to the renderer.
/// It is read case-insensitively, in text and in JSON.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum OutputMode {
    /// Sum of products
    #[default]
    Sop,

    /// Product of sums
    Pos,
}

impl OutputMode {
    pub fn name(&self) -> &'static str {
        match self {
            OutputMode::Sop => "sop",
            OutputMode::Pos => "pos",
        }
    }
}

impl FromStr for OutputMode {
    type Err = KmapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sop" => Ok(OutputMode::Sop),
            "pos" => Ok(OutputMode::Pos),
            _ => Err(KmapError::InvalidOutputMode(s.into())),
        }
    }
}

impl TryFrom<String> for OutputMode {
    type Error = KmapError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A request to build a map: names of the variables and one value per combination.
///
/// ```
/// use karnaugh::{Cell, KmapConfig, KmapRequest, OutputMode};
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let json = r#"{"variables": ["A", "B"], "minterms": [0, 1, 1, "x"], "outputMode": "POS"}"#;
/// let request: KmapRequest = KmapRequest::from_json(json)?;
/// let kmap = request.build(&KmapConfig::default())?;
///
/// assert_eq!(kmap.mode(), OutputMode::Pos);
/// assert_eq!(kmap.get(1, 1), Some(&Cell::DontCare));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KmapRequest<V = Cell> {
    pub variables: Vec<String>,

    /// Values of the function, listed in the selected input order
    pub minterms: Vec<V>,

    #[serde(default, alias = "sop_or_pos", skip_serializing_if = "Option::is_none")]
    pub output_mode: Option<OutputMode>,

    /// Override the input order of the configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<InputOrder>,
}

impl<V> KmapRequest<V> {
    pub fn new(variables: Vec<String>, minterms: Vec<V>) -> Self {
        Self {
            variables,
            minterms,
            output_mode: None,
            order: None,
        }
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = Some(mode);
        self
    }

    pub fn with_order(mut self, order: InputOrder) -> Self {
        self.order = Some(order);
        self
    }

    /// Validate the request and build the map
    pub fn build(self, config: &KmapConfig) -> Result<Kmap<V>, KmapError> {
        let variables = VariableSet::from_names(&self.variables)?;
        let config = match self.order {
            Some(order) => config.clone().with_order(order),
            None => config.clone(),
        };
        let kmap = Kmap::build(variables, self.minterms, &config)?;
        Ok(kmap.with_mode(self.output_mode.unwrap_or_default()))
    }
}

impl<V: DeserializeOwned> KmapRequest<V> {
    pub fn from_json(s: &str) -> Result<Self, KmapError> {
        Ok(serde_json::from_str(s)?)
    }
}

impl<V: FromStr> KmapRequest<V> {
    /// Build a request from a text list of names and a text list of values
    pub fn parse(variables: &str, values: &str) -> Result<Self, KmapError> {
        Ok(Self::new(parse_names(variables)?, parse_values(values)?))
    }

    /// Build a request from a single definition like ```A B : 0 1 1 0```
    pub fn parse_definition(s: &str) -> Result<Self, KmapError> {
        let (names, values) = parse_definition(s)?;
        Ok(Self::new(names, values))
    }
}

/// Content of a map, ready to be sent back to the caller.
///
/// The grid is a list of rows, matching the row and column labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KmapResponse<V> {
    pub variables: Vec<String>,
    pub row_variables: Vec<String>,
    pub col_variables: Vec<String>,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    pub grid: Vec<Vec<V>>,
    pub order: InputOrder,
    pub output_mode: OutputMode,
}

/// Positional arguments of the external renderer.
///
/// The variables, the row labels, the column labels and the values of the grid (in row-major order)
/// are each joined by '+', the output mode comes last.
/// Values are written with their [Display](fmt::Display) form, which must not contain '+' or whitespace.
///
/// ```
/// use karnaugh::{Kmap, KmapConfig, RenderArgs};
/// # use karnaugh::KmapError;
/// # fn main() -> Result<(), KmapError> {
///
/// let kmap = Kmap::new("A B C".parse()?, vec![1, 0, 0, 1, 1, 1, 0, 0])?;
/// let args = kmap.render_args()?.to_args();
/// assert_eq!(args, ["A+B+C", "00+01+11+10", "0+1", "1+0+0+1+1+1+0+0", "sop"]);
///
/// let decoded: Kmap<u8> = RenderArgs::from_args(&args)?.decode(&KmapConfig::default())?;
/// assert_eq!(decoded.row(1), Some(&[0, 1][..]));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderArgs {
    pub variables: String,
    pub row_labels: String,
    pub col_labels: String,
    pub values: String,
    pub mode: OutputMode,
}

const ARG_COUNT: usize = 5;

fn is_separator(c: char) -> bool {
    c == '+' || c.is_whitespace()
}

impl RenderArgs {
    /// Encode a map, rejecting values which can not be told apart once joined
    pub fn from_kmap<V: fmt::Display>(kmap: &Kmap<V>) -> Result<Self, KmapError> {
        let values: Vec<String> = kmap
            .grid()
            .as_slice()
            .iter()
            .map(|v| v.to_string())
            .collect();
        if let Some((position, value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| v.is_empty() || v.contains(is_separator))
        {
            return Err(InputError::InvalidValue {
                position,
                value: value.clone(),
            }
            .into());
        }
        Ok(Self {
            variables: kmap.variables().iter().join("+"),
            row_labels: kmap.row_labels().iter().join("+"),
            col_labels: kmap.col_labels().iter().join("+"),
            values: values.join("+"),
            mode: kmap.mode(),
        })
    }

    pub fn to_args(&self) -> Vec<String> {
        vec![
            self.variables.clone(),
            self.row_labels.clone(),
            self.col_labels.clone(),
            self.values.clone(),
            self.mode.to_string(),
        ]
    }

    /// Read the arguments of a renderer call, without checking their content
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, KmapError> {
        if args.len() != ARG_COUNT {
            return Err(InputError::Malformed(format!(
                "expected {} arguments, found {}",
                ARG_COUNT,
                args.len()
            ))
            .into());
        }
        let arg = |i: usize| args[i].as_ref().to_string();
        Ok(Self {
            variables: arg(0),
            row_labels: arg(1),
            col_labels: arg(2),
            values: arg(3),
            mode: args[4].as_ref().parse()?,
        })
    }

    /// Rebuild the map described by the arguments.
    ///
    /// The split between rows and columns is recovered from the labels, which must be the
    /// Gray codes expected for the number of variables.
    pub fn decode<V: FromStr>(&self, config: &KmapConfig) -> Result<Kmap<V>, KmapError> {
        let variables = VariableSet::from_names(parse_names(&self.variables)?)?;
        let count = variables.len();
        config.check_size(count)?;

        let mut split = None;
        for policy in [SplitPolicy::RowsFirst, SplitPolicy::ColumnsFirst] {
            let partition = BitPartition::with_policy(count, policy);
            if gray_code(partition.row_bits())?.join("+") == self.row_labels
                && gray_code(partition.col_bits())?.join("+") == self.col_labels
            {
                split = Some(policy);
                break;
            }
        }
        let split = split.ok_or_else(|| {
            InputError::Malformed(format!(
                "labels '{}' and '{}' do not match {} variables",
                self.row_labels, self.col_labels, count
            ))
        })?;

        let config = config
            .clone()
            .with_split(split)
            .with_order(InputOrder::Natural);
        let values = parse_values(&self.values)?;
        Ok(Kmap::build(variables, values, &config)?.with_mode(self.mode))
    }
}
