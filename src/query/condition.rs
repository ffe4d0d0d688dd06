use serde::{Deserialize, Serialize};
use std::fmt;

/// A flat boolean tag condition
///
/// The grammar is deliberately permissive: the first literal ` AND `
/// splits the string into two operands, else the first literal ` OR `
/// does, else the whole trimmed string is a single tag. Whitespace-only
/// input matches everything. No input is a parse error. Tags are matched
/// verbatim, with no case folding or normalization.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Condition {
    /// Empty condition: every managed photo matches
    All,
    /// A photo matches when it carries the tag
    Single(String),
    /// A photo matches when it carries both tags
    And(String, String),
    /// A photo matches when it carries either tag
    Or(String, String),
}

impl Condition {
    /// Parse a condition string; infallible by design
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Condition::All;
        }
        if let Some((left, right)) = trimmed.split_once(" AND ") {
            return Condition::And(left.trim().to_string(), right.trim().to_string());
        }
        if let Some((left, right)) = trimmed.split_once(" OR ") {
            return Condition::Or(left.trim().to_string(), right.trim().to_string());
        }
        Condition::Single(trimmed.to_string())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::All => Ok(()),
            Condition::Single(tag) => write!(f, "{tag}"),
            Condition::And(left, right) => write!(f, "{left} AND {right}"),
            Condition::Or(left, right) => write!(f, "{left} OR {right}"),
        }
    }
}

impl From<&str> for Condition {
    fn from(input: &str) -> Self {
        Condition::parse(input)
    }
}
