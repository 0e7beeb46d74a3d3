use std::fmt;

use serde::{Deserialize, Serialize};

/// A `(head, relation, tail)` fact, lowercased for matching.
///
/// Identified by its flattened form `"head relation tail"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    pub head: String,
    pub relation: String,
    pub tail: String,
}

impl Triple {
    pub fn new(
        head: impl AsRef<str>,
        relation: impl AsRef<str>,
        tail: impl AsRef<str>,
    ) -> Self {
        Self {
            head: head.as_ref().trim().to_lowercase(),
            relation: relation.as_ref().trim().to_lowercase(),
            tail: tail.as_ref().trim().to_lowercase(),
        }
    }

    pub fn flatten(&self) -> String {
        format!("{} {} {}", self.head, self.relation, self.tail)
    }

    /// Entity on the given side.
    pub fn entity(&self, side: TripleSide) -> &str {
        match side {
            TripleSide::Head => &self.head,
            TripleSide::Tail => &self.tail,
        }
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.head, self.relation, self.tail)
    }
}

/// Which end of a triple an entity sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripleSide {
    Head,
    Tail,
}

impl TripleSide {
    pub const BOTH: [TripleSide; 2] = [TripleSide::Head, TripleSide::Tail];
}
