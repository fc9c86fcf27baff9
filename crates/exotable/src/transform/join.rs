//! Join specification for merges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ExoError;

/// Canonical planet identifier, the default join key.
pub const PLANET_KEY: &str = "pl_name";

/// Which rows survive a join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinHow {
    /// Only rows with a match on both sides.
    Inner,
    /// All left rows.
    Left,
    /// All right rows.
    Right,
    /// All rows from both sides.
    #[default]
    Outer,
}

impl JoinHow {
    pub(crate) fn keeps_left(self) -> bool {
        matches!(self, JoinHow::Left | JoinHow::Outer)
    }

    pub(crate) fn keeps_right(self) -> bool {
        matches!(self, JoinHow::Right | JoinHow::Outer)
    }
}

impl fmt::Display for JoinHow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            JoinHow::Inner => "inner",
            JoinHow::Left => "left",
            JoinHow::Right => "right",
            JoinHow::Outer => "outer",
        };
        f.write_str(s)
    }
}

impl FromStr for JoinHow {
    type Err = ExoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "inner" => Ok(JoinHow::Inner),
            "left" => Ok(JoinHow::Left),
            "right" => Ok(JoinHow::Right),
            "outer" => Ok(JoinHow::Outer),
            other => Err(ExoError::Config(format!("Unknown join type '{}'", other))),
        }
    }
}

/// How rows of the two tables are paired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinKeys {
    /// Equal values in columns present on both sides.
    On(Vec<String>),
    /// Equal values between `left[i]` and `right[i]`.
    LeftRight { left: Vec<String>, right: Vec<String> },
    /// Row position.
    Index,
}

/// Parameters of a merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeSpec {
    /// Join keys; `None` joins on [`PLANET_KEY`].
    pub keys: Option<JoinKeys>,
    pub how: JoinHow,
    /// Suffixes for overlapping non-key columns (left, right).
    pub suffixes: (String, String),
}

impl Default for MergeSpec {
    fn default() -> Self {
        Self {
            keys: None,
            how: JoinHow::Outer,
            suffixes: ("_x".to_string(), "_y".to_string()),
        }
    }
}

impl MergeSpec {
    /// Outer join on the planet identifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Join on a single column present in both tables.
    pub fn on(self, column: impl Into<String>) -> Self {
        self.on_columns([column])
    }

    /// Join on several columns present in both tables.
    pub fn on_columns<I>(mut self, columns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.keys = Some(JoinKeys::On(columns.into_iter().map(Into::into).collect()));
        self
    }

    /// Join a left column against a differently named right column.
    pub fn left_right(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.keys = Some(JoinKeys::LeftRight {
            left: vec![left.into()],
            right: vec![right.into()],
        });
        self
    }

    /// Pair rows by position.
    pub fn by_index(mut self) -> Self {
        self.keys = Some(JoinKeys::Index);
        self
    }

    pub fn how(mut self, how: JoinHow) -> Self {
        self.how = how;
        self
    }

    pub fn suffixes(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.suffixes = (left.into(), right.into());
        self
    }

    /// Keys actually used, filling in the planet identifier default.
    pub fn resolved_keys(&self) -> JoinKeys {
        self.keys
            .clone()
            .unwrap_or_else(|| JoinKeys::On(vec![PLANET_KEY.to_string()]))
    }
}
