use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;
use uuid::Uuid;

static PROCESS_ID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+\.\d+$").expect("process id pattern is valid"));

/// Identifier of the workspace a checklist session works in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkspaceId(Uuid);

impl WorkspaceId {
    /// Creates a fresh random `WorkspaceId`.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl fmt::Debug for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WorkspaceId({})", self.0)
    }
}

impl fmt::Display for WorkspaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Stable identifier of a principle (the reference sheet name).
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrincipleKey(String);

impl PrincipleKey {
    #[must_use]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PrincipleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrincipleKey({:?})", self.0)
    }
}

impl fmt::Display for PrincipleKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid process id: {0:?}")]
pub struct ProcessIdError(pub String);

/// Dotted process identifier such as `1.1.1`.
///
/// Stored in canonical form: `1.01.1` parses to the same id as `1.1.1`.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProcessId {
    parts: [u64; 3],
    text: String,
}

impl ProcessId {
    /// Parse a process id in `major.minor.patch` form.
    ///
    /// # Errors
    ///
    /// Returns `ProcessIdError` when the value is not three dot-separated
    /// numbers that each fit in a `u64`.
    pub fn parse(raw: &str) -> Result<Self, ProcessIdError> {
        let trimmed = raw.trim();
        if !PROCESS_ID_PATTERN.is_match(trimmed) {
            return Err(ProcessIdError(raw.to_owned()));
        }
        let mut parts = [0_u64; 3];
        for (slot, part) in parts.iter_mut().zip(trimmed.split('.')) {
            *slot = part.parse().map_err(|_| ProcessIdError(raw.to_owned()))?;
        }
        let [major, minor, patch] = parts;
        Ok(Self {
            parts,
            text: format!("{major}.{minor}.{patch}"),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Numeric parts used for version-style ordering.
    #[must_use]
    pub fn parts(&self) -> [u64; 3] {
        self.parts
    }
}

impl FromStr for ProcessId {
    type Err = ProcessIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ProcessId {
    type Error = ProcessIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProcessId> for String {
    fn from(value: ProcessId) -> Self {
        value.text
    }
}

impl Ord for ProcessId {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.parts.cmp(&other.parts)
    }
}

impl PartialOrd for ProcessId {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProcessId({})", self.text)
    }
}

impl fmt::Display for ProcessId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
