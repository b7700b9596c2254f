use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AnswerError {
    #[error("unknown implementation status: {0:?}")]
    UnknownStatus(String),
}

/// Whether a process is implemented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Implementation {
    Yes,
    No,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl Implementation {
    pub const ALL: [Self; 3] = [Self::Yes, Self::No, Self::NotApplicable];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::NotApplicable => "N/A",
        }
    }
}

impl fmt::Display for Implementation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Implementation {
    type Err = AnswerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            "N/A" => Ok(Self::NotApplicable),
            other => Err(AnswerError::UnknownStatus(other.to_owned())),
        }
    }
}

/// The user's response to a single process check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub implementation: Option<Implementation>,
    pub elaboration: String,
}

impl Answer {
    /// A check counts as answered once an implementation status is chosen.
    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.implementation.is_some()
    }
}
