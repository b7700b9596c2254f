//! JSON reference data loader.
//!
//! The reference data is exported sheet-by-sheet from the checklist workbook.
//! Outcome columns are merged cells in the workbook, so a row with a `null`
//! outcome inherits the value from the row above it.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

use checklist_core::model::{Principle, PrincipleKey, ProcessCheck, ProcessId};

use crate::{CatalogError, CatalogRepository, PrincipleCatalog};

/// Only checks tagged with this AI type are kept.
pub const SELECTED_AI_TYPE: &str = "Generative AI";

const BUNDLED_REFERENCE: &str = include_str!("../assets/reference.json");

#[derive(Debug, Deserialize)]
struct RawReference {
    sheets: Vec<RawSheet>,
}

#[derive(Debug, Deserialize)]
struct RawSheet {
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    rows: Vec<RawRow>,
}

#[derive(Debug, Default, Deserialize)]
struct RawRow {
    outcome_id: Option<String>,
    type_of_ai: Option<String>,
    outcomes: Option<String>,
    process_id: Option<Value>,
    process: Option<String>,
    nature_of_evidence: Option<String>,
    evidence: Option<String>,
}

#[derive(Debug, Default, Clone)]
struct MergedCells {
    outcome_id: Option<String>,
    type_of_ai: Option<String>,
    outcomes: Option<String>,
}

impl MergedCells {
    fn carry(&self, row: &RawRow) -> Self {
        Self {
            outcome_id: row.outcome_id.clone().or_else(|| self.outcome_id.clone()),
            type_of_ai: row.type_of_ai.clone().or_else(|| self.type_of_ai.clone()),
            outcomes: row.outcomes.clone().or_else(|| self.outcomes.clone()),
        }
    }
}

/// Parse the reference JSON into a catalog.
///
/// # Errors
///
/// Returns `CatalogError::Serialization` for malformed JSON and
/// `CatalogError::Empty` if no sheet yields a process check.
pub fn parse_reference(text: &str, ai_type: &str) -> Result<PrincipleCatalog, CatalogError> {
    let raw: RawReference =
        serde_json::from_str(text).map_err(|e| CatalogError::Serialization(e.to_string()))?;

    let principles: Vec<Principle> = raw
        .sheets
        .into_iter()
        .filter(|sheet| !sheet.name.contains("Instructions"))
        .filter_map(|sheet| parse_sheet(sheet, ai_type))
        .collect();

    if principles.is_empty() {
        return Err(CatalogError::Empty);
    }
    tracing::info!(count = principles.len(), "extracted principle data");
    Ok(PrincipleCatalog::new(principles))
}

fn parse_sheet(sheet: RawSheet, ai_type: &str) -> Option<Principle> {
    let mut merged = MergedCells::default();
    let mut checks = Vec::new();

    for row in &sheet.rows {
        merged = merged.carry(row);
        if let Some(check) = parse_row(row, &merged, ai_type) {
            checks.push(check);
        }
    }

    if checks.is_empty() {
        tracing::debug!(sheet = %sheet.name, "sheet has no usable process checks");
        return None;
    }

    Some(Principle {
        key: PrincipleKey::new(sheet.name),
        description: sheet.description.trim().to_owned(),
        checks,
    })
}

fn parse_row(row: &RawRow, merged: &MergedCells, ai_type: &str) -> Option<ProcessCheck> {
    let raw_id = match row.process_id.as_ref()? {
        Value::String(value) => value.clone(),
        Value::Number(value) => value.to_string(),
        _ => return None,
    };
    let process_id = ProcessId::parse(&raw_id).ok()?;

    if !merged
        .type_of_ai
        .as_deref()
        .is_some_and(|kind| kind.contains(ai_type))
    {
        return None;
    }

    let process = trimmed(row.process.as_deref());
    if process.is_empty() {
        return None;
    }

    Some(ProcessCheck {
        process_id,
        outcome_id: trimmed(merged.outcome_id.as_deref()),
        outcome: trimmed(merged.outcomes.as_deref()),
        process,
        nature_of_evidence: trimmed(row.nature_of_evidence.as_deref()),
        evidence: trimmed(row.evidence.as_deref()),
    })
}

fn trimmed(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_owned()
}

/// The reference data compiled into the binary.
///
/// # Errors
///
/// Returns `CatalogError` if the bundled file fails to parse.
pub fn bundled() -> Result<PrincipleCatalog, CatalogError> {
    parse_reference(BUNDLED_REFERENCE, SELECTED_AI_TYPE)
}

/// Catalog read from a reference JSON file on disk.
#[derive(Clone, Debug)]
pub struct JsonFileCatalog {
    path: PathBuf,
    ai_type: String,
}

impl JsonFileCatalog {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ai_type: SELECTED_AI_TYPE.to_owned(),
        }
    }

    #[must_use]
    pub fn with_ai_type(mut self, ai_type: impl Into<String>) -> Self {
        self.ai_type = ai_type.into();
        self
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogRepository for JsonFileCatalog {
    async fn load(&self) -> Result<PrincipleCatalog, CatalogError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => {
                    CatalogError::NotFound(self.path.display().to_string())
                }
                _ => CatalogError::Io(e.to_string()),
            })?;
        parse_reference(&text, &self.ai_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"{
        "sheets": [
            { "name": "Instructions", "rows": [] },
            {
                "name": "1) Transparency",
                "description": "  Be open.  ",
                "rows": [
                    { "outcome_id": "1.1", "type_of_ai": "Traditional AI, Generative AI", "outcomes": "Outcome A",
                      "process_id": "1.1.1", "process": "Disclose use" },
                    { "process_id": "1.1.2", "process": " Publish notes ", "evidence": "Docs" },
                    { "process_id": "not-an-id", "process": "ignored" },
                    { "outcome_id": "1.2", "type_of_ai": "Traditional AI", "outcomes": "Outcome B",
                      "process_id": "1.2.1", "process": "Traditional only" },
                    { "outcome_id": "1.3", "type_of_ai": "Generative AI",
                      "process_id": "1.3.1", "process": "" }
                ]
            },
            {
                "name": "2) Explainability",
                "rows": [
                    { "outcome_id": "2.1", "type_of_ai": "Traditional AI", "process_id": "2.1.1", "process": "x" }
                ]
            }
        ]
    }"#;

    #[test]
    fn merged_cells_carry_down() {
        let catalog = parse_reference(SHEET, SELECTED_AI_TYPE).unwrap();
        assert_eq!(catalog.len(), 1);
        let principle = &catalog.principles()[0];
        assert_eq!(principle.description, "Be open.");
        assert_eq!(principle.checks.len(), 2);
        let second = &principle.checks[1];
        assert_eq!(second.outcome_id, "1.1");
        assert_eq!(second.outcome, "Outcome A");
        assert_eq!(second.process, "Publish notes");
        assert_eq!(second.evidence, "Docs");
    }

    #[test]
    fn numeric_process_ids_are_rejected_unless_dotted_triplets() {
        let text = r#"{ "sheets": [ { "name": "4) Safety", "rows": [
            { "outcome_id": "4.1", "type_of_ai": "Generative AI", "process_id": 4.1, "process": "x" }
        ] } ] }"#;
        assert!(matches!(
            parse_reference(text, SELECTED_AI_TYPE),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn malformed_json_is_a_serialization_error() {
        assert!(matches!(
            parse_reference("{", SELECTED_AI_TYPE),
            Err(CatalogError::Serialization(_))
        ));
    }

    #[test]
    fn bundled_reference_has_eleven_principles() {
        let catalog = bundled().unwrap();
        assert_eq!(catalog.len(), 11);
        assert!(catalog.principles().iter().all(|p| !p.checks.is_empty()));
    }
}
