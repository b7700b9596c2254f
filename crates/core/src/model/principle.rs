use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::model::{PrincipleKey, ProcessId};

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\)\s*").expect("prefix pattern is valid"));

/// Sheet names in the reference data that carry escaped or abbreviated text.
const NAME_FIXUPS: &[(&str, &str)] = &[
    (
        "10) Human agency &amp; oversight",
        "10) Human agency & oversight",
    ),
    (
        "11) Inc Grwth,Soc&amp;Env wellbeing",
        "11) Inclusive growth, societal and environmental well-being",
    ),
];

/// A single process check belonging to a principle.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessCheck {
    pub process_id: ProcessId,
    pub outcome_id: String,
    #[serde(default)]
    pub outcome: String,
    pub process: String,
    #[serde(default)]
    pub nature_of_evidence: String,
    #[serde(default)]
    pub evidence: String,
}

/// An AI governance principle and its process checks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principle {
    pub key: PrincipleKey,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub checks: Vec<ProcessCheck>,
}

impl Principle {
    /// Display name derived from the key.
    #[must_use]
    pub fn friendly_name(&self) -> String {
        friendly_principle_name(self.key.as_str())
    }

    #[must_use]
    pub fn total_checks(&self) -> u32 {
        u32::try_from(self.checks.len()).unwrap_or(u32::MAX)
    }
}

/// Turn a raw sheet name such as `"3) repeatability_reproducibility"` into
/// `"Repeatability Reproducibility"`.
#[must_use]
pub fn friendly_principle_name(raw: &str) -> String {
    let fixed = NAME_FIXUPS
        .iter()
        .find(|(from, _)| *from == raw)
        .map_or(raw, |(_, to)| *to);

    let without_prefix = NUMBER_PREFIX.replace(fixed.trim(), "");
    title_case(&without_prefix.replace('_', " ")).trim().to_owned()
}

fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut prev_alpha = false;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if prev_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(ch);
            prev_alpha = false;
        }
    }
    out
}
