use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MAX_APP_NAME_CHARS: usize = 50;
pub const MAX_APP_DESCRIPTION_CHARS: usize = 256;

/// Validated application details shown in the report header.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppInfo {
    name: String,
    description: String,
}

#[derive(Clone, Debug, Default)]
pub struct AppInfoDraft {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AppInfoError {
    #[error("application name and description are both required")]
    Missing,
    #[error("{field} is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

impl AppInfoDraft {
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Trim and validate the draft.
    ///
    /// # Errors
    ///
    /// Returns `AppInfoError::Missing` if either field is blank and
    /// `AppInfoError::TooLong` if a field exceeds its limit.
    pub fn validate(self) -> Result<AppInfo, AppInfoError> {
        let name = self.name.trim().to_owned();
        let description = self.description.trim().to_owned();

        if name.is_empty() || description.is_empty() {
            return Err(AppInfoError::Missing);
        }
        if name.chars().count() > MAX_APP_NAME_CHARS {
            return Err(AppInfoError::TooLong {
                field: "application name",
                max: MAX_APP_NAME_CHARS,
            });
        }
        if description.chars().count() > MAX_APP_DESCRIPTION_CHARS {
            return Err(AppInfoError::TooLong {
                field: "application description",
                max: MAX_APP_DESCRIPTION_CHARS,
            });
        }

        Ok(AppInfo { name, description })
    }
}

impl AppInfo {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}
