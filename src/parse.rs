//! Text parsing for lists of variables and values

use crate::{InputError, KmapError};
use pest::{iterators::Pair, Parser};
use std::str::FromStr;

#[derive(Parser)]
#[grammar_inline = r####"
definition = { SOI ~ names ~ (":" | "=") ~ cells ~ EOI }
name_list  = { SOI ~ names ~ EOI }
cell_list  = { SOI ~ cells ~ EOI }
names      = { token* }
cells      = { token* }
token      = @{ (!(WHITESPACE | ":" | "=") ~ ANY)+ }

WHITESPACE = _{ " " | "\t" | "\r" | "\n" | "," | ";" | "+" }
"####]
struct ListParser;

fn parse_rule(rule: Rule, s: &str) -> Result<Pair<'_, Rule>, KmapError> {
    let mut parsed =
        ListParser::parse(rule, s).map_err(|e| InputError::Malformed(e.to_string()))?;
    parsed
        .next()
        .ok_or_else(|| InputError::Malformed(s.into()).into())
}

/// Collect the tokens of all children matching a given rule
fn tokens<'i>(pair: Pair<'i, Rule>, rule: Rule) -> Vec<&'i str> {
    pair.into_inner()
        .filter(|p| p.as_rule() == rule)
        .flat_map(|p| p.into_inner())
        .map(|t| t.as_str())
        .collect()
}

fn convert<V: FromStr>(tokens: Vec<&str>) -> Result<Vec<V>, KmapError> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(position, t)| {
            t.parse::<V>().map_err(|_| {
                KmapError::from(InputError::InvalidValue {
                    position,
                    value: t.into(),
                })
            })
        })
        .collect()
}

/// Split a list of names separated by spaces, commas, semicolons or '+'.
///
/// ```
/// # use karnaugh::parse_names;
/// assert_eq!(parse_names("A B, C+D").unwrap(), vec!["A", "B", "C", "D"]);
/// ```
pub fn parse_names(s: &str) -> Result<Vec<String>, KmapError> {
    let pair = parse_rule(Rule::name_list, s)?;
    Ok(tokens(pair, Rule::names)
        .into_iter()
        .map(String::from)
        .collect())
}

/// Parse a list of values separated by spaces, commas, semicolons or '+'.
///
/// The position of the first value which can not be parsed is reported in the error.
///
/// ```
/// # use karnaugh::{parse_values, Cell};
/// let values: Vec<Cell> = parse_values("1 0 x 1").unwrap();
/// assert_eq!(values[2], Cell::DontCare);
///
/// let numbers: Vec<u8> = parse_values("3+1+2").unwrap();
/// assert_eq!(numbers, vec![3, 1, 2]);
/// ```
pub fn parse_values<V: FromStr>(s: &str) -> Result<Vec<V>, KmapError> {
    let pair = parse_rule(Rule::cell_list, s)?;
    convert(tokens(pair, Rule::cells))
}

/// Parse a complete definition: a list of names and a list of values separated by ':' or '='.
///
/// ```
/// # use karnaugh::{parse_definition, Cell};
/// let (names, values) = parse_definition::<Cell>("A B : 1 0 0 1").unwrap();
/// assert_eq!(names, vec!["A", "B"]);
/// assert_eq!(values.len(), 4);
/// ```
pub fn parse_definition<V: FromStr>(s: &str) -> Result<(Vec<String>, Vec<V>), KmapError> {
    let pair = parse_rule(Rule::definition, s)?;
    let names = tokens(pair.clone(), Rule::names)
        .into_iter()
        .map(String::from)
        .collect();
    let values = convert(tokens(pair, Rule::cells))?;
    Ok((names, values))
}
