use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of configured sections in the questionnaire flow.
pub const SECTION_COUNT: u8 = 5;

/// Exclusive upper bound of the section counter.
pub const MAX_SECTION: u8 = SECTION_COUNT;

/// The last section; `Next` is hidden here.
pub const FINAL_SECTION: u8 = MAX_SECTION - 1;

/// One step of the questionnaire. Always within `0..=FINAL_SECTION`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct Section(u8);

impl Section {
    pub const WELCOME: Self = Self(0);
    pub const GET_STARTED: Self = Self(1);
    pub const PROCESS_CHECKS: Self = Self(2);
    pub const TECHNICAL_TESTS: Self = Self(3);
    pub const REPORT: Self = Self(4);

    /// Build a section, clamping out-of-range values into the valid range.
    #[must_use]
    pub const fn clamped(raw: u8) -> Self {
        if raw > FINAL_SECTION {
            Self(FINAL_SECTION)
        } else {
            Self(raw)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn is_first(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn is_final(self) -> bool {
        self.0 == FINAL_SECTION
    }

    /// The previous section, saturating at the welcome screen.
    #[must_use]
    pub const fn prev(self) -> Self {
        Self(self.0.saturating_sub(1))
    }

    /// The following section, saturating at the final section.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::clamped(self.0.saturating_add(1))
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self.0 {
            0 => "Welcome",
            1 => "Get Started",
            2 => "Process Checks",
            3 => "Technical Tests",
            _ => "Summary Report",
        }
    }
}

impl From<u8> for Section {
    fn from(value: u8) -> Self {
        Self::clamped(value)
    }
}

impl From<Section> for u8 {
    fn from(value: Section) -> Self {
        value.0
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title(), self.0)
    }
}

/// Which navigation controls are visible for a section.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavControls {
    pub show_back: bool,
    pub show_start_over: bool,
    pub show_next: bool,
}

impl NavControls {
    #[must_use]
    pub const fn hidden() -> Self {
        Self {
            show_back: false,
            show_start_over: false,
            show_next: false,
        }
    }

    #[must_use]
    pub const fn any(self) -> bool {
        self.show_back || self.show_start_over || self.show_next
    }
}

/// Decide which navigation controls are visible.
///
/// The welcome screen shows none of them. From section 1 on, Start Over and
/// Back are always shown and Next is shown until the final section.
#[must_use]
pub const fn render_guard(section: Section) -> NavControls {
    if section.value() == 0 {
        return NavControls::hidden();
    }
    NavControls {
        show_back: true,
        show_start_over: true,
        show_next: section.value() < MAX_SECTION - 1,
    }
}
