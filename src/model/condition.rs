use std::fmt;

use serde::{Deserialize, Serialize};

/// Comparison operator of the target rule format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    #[serde(rename = ">=")]
    GreaterOrEqual,
    #[serde(rename = "<=")]
    LessOrEqual,
    #[serde(rename = ">")]
    Greater,
    #[serde(rename = "<")]
    Less,
    #[serde(rename = "==")]
    Equal,
}

impl Operator {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::Greater => ">",
            Self::Less => "<",
            Self::Equal => "==",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ">=" => Ok(Self::GreaterOrEqual),
            "<=" => Ok(Self::LessOrEqual),
            ">" => Ok(Self::Greater),
            "<" => Ok(Self::Less),
            "==" | "=" => Ok(Self::Equal),
            _ => Err(format!("Unknown operator: {s}")),
        }
    }
}

/// Right-hand side of a comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Operator + value test, e.g. `StackSize >= 1000`.
///
/// `value` may be missing in hand-edited or truncated data; the compiler
/// substitutes a fallback constant in that case.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareCondition {
    pub operator: Operator,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Scalar>,
}

/// Inclusive bound pair, e.g. an area level window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RangeCondition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_level: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_level: Option<i64>,
}

/// A single item-attribute test keyed by attribute name in a rule's condition map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Condition {
    Compare(CompareCondition),
    Range(RangeCondition),
    Flag(bool),
    List(Vec<String>),
}

impl Condition {
    #[must_use]
    pub const fn compare(operator: Operator, value: Scalar) -> Self {
        Self::Compare(CompareCondition {
            operator,
            value: Some(value),
        })
    }

    #[must_use]
    pub const fn range(min_level: i64, max_level: i64) -> Self {
        Self::Range(RangeCondition {
            min_level: Some(min_level),
            max_level: Some(max_level),
        })
    }

    #[must_use]
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

#[cfg(test)]
#[path = "condition_tests.rs"]
mod tests;
