use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::PrincipleKey;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProgressError {
    #[error("answered checks ({answered}) exceed total checks ({total})")]
    AnsweredExceedsTotal { answered: u32, total: u32 },
}

/// Answered/total counts for one principle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrincipleProgress {
    pub total_checks: u32,
    pub answered_checks: u32,
}

impl PrincipleProgress {
    /// # Errors
    ///
    /// Returns `ProgressError::AnsweredExceedsTotal` if `answered > total`.
    pub fn new(total_checks: u32, answered_checks: u32) -> Result<Self, ProgressError> {
        Self {
            total_checks,
            answered_checks,
        }
        .validated()
    }

    /// Check the `answered <= total` invariant on values that came off the wire.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::AnsweredExceedsTotal` if `answered > total`.
    pub fn validated(self) -> Result<Self, ProgressError> {
        if self.answered_checks > self.total_checks {
            return Err(ProgressError::AnsweredExceedsTotal {
                answered: self.answered_checks,
                total: self.total_checks,
            });
        }
        Ok(self)
    }

    #[must_use]
    pub fn is_completed(self) -> bool {
        self.total_checks > 0 && self.answered_checks == self.total_checks
    }

    /// Completion in `0.0..=100.0`; zero when there are no checks.
    #[must_use]
    pub fn percentage(self) -> f64 {
        if self.total_checks == 0 {
            return 0.0;
        }
        f64::from(self.answered_checks) / f64::from(self.total_checks) * 100.0
    }
}

/// Display state of one card, recomputed on every render.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardViewState {
    pub index: usize,
    pub is_active: bool,
    pub is_completed: bool,
    pub percentage: f64,
}

impl CardViewState {
    #[must_use]
    pub fn derive(index: usize, progress: PrincipleProgress, current_index: usize) -> Self {
        Self {
            index,
            is_active: index == current_index,
            is_completed: progress.is_completed(),
            percentage: progress.percentage(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SnapshotEntry {
    pub key: PrincipleKey,
    pub name: String,
    pub progress: PrincipleProgress,
}

/// Immutable per-render description of principle progress.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrincipleSnapshot {
    entries: Vec<SnapshotEntry>,
    current_index: usize,
}

impl PrincipleSnapshot {
    #[must_use]
    pub fn new(entries: Vec<SnapshotEntry>, current_index: usize) -> Self {
        Self {
            entries,
            current_index,
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn card_states(&self) -> Vec<CardViewState> {
        self.entries
            .iter()
            .enumerate()
            .map(|(index, entry)| CardViewState::derive(index, entry.progress, self.current_index))
            .collect()
    }
}

/// Overall and per-principle answer counts.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub total_questions: u32,
    pub total_answered: u32,
    pub principles: Vec<(PrincipleKey, PrincipleProgress)>,
}

impl ProgressStats {
    #[must_use]
    pub fn get(&self, key: &PrincipleKey) -> Option<PrincipleProgress> {
        self.principles
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, progress)| *progress)
    }

    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.total_questions == 0 {
            return 0.0;
        }
        f64::from(self.total_answered) / f64::from(self.total_questions)
    }

    /// Whole-number percentage, truncated.
    #[must_use]
    pub fn percentage(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        self.total_answered.saturating_mul(100) / self.total_questions
    }

    #[must_use]
    pub fn all_answered(&self) -> bool {
        self.total_answered == self.total_questions
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Overall Progress: {} of {} questions answered ({}%)",
            self.total_answered,
            self.total_questions,
            self.percentage()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total: u32, answered: u32) -> SnapshotEntry {
        SnapshotEntry {
            key: PrincipleKey::new(name),
            name: name.to_owned(),
            progress: PrincipleProgress::new(total, answered).unwrap(),
        }
    }

    #[test]
    fn rejects_answered_above_total() {
        let err = PrincipleProgress::new(2, 3).unwrap_err();
        assert_eq!(err, ProgressError::AnsweredExceedsTotal { answered: 3, total: 2 });
    }

    #[test]
    fn card_states_follow_counts_and_current_index() {
        let snapshot = PrincipleSnapshot::new(
            vec![entry("A", 2, 2), entry("B", 3, 1), entry("C", 0, 0)],
            1,
        );
        let states = snapshot.card_states();

        assert!(states[0].is_completed && !states[0].is_active);
        assert!((states[0].percentage - 100.0).abs() < f64::EPSILON);

        assert!(states[1].is_active && !states[1].is_completed);
        assert!((states[1].percentage - 100.0 / 3.0).abs() < 1e-9);

        assert!(!states[2].is_active && !states[2].is_completed);
        assert!(states[2].percentage.abs() < f64::EPSILON);

        assert_eq!(states.iter().filter(|state| state.is_active).count(), 1);
    }

    #[test]
    fn completed_always_means_full_bar() {
        for total in 1..20 {
            let progress = PrincipleProgress::new(total, total).unwrap();
            assert!(progress.is_completed());
            assert!((progress.percentage() - 100.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn stats_message_truncates_percentage() {
        let stats = ProgressStats {
            total_questions: 3,
            total_answered: 2,
            principles: Vec::new(),
        };
        assert_eq!(
            stats.message(),
            "Overall Progress: 2 of 3 questions answered (66%)"
        );
        assert!(!stats.all_answered());
    }

    #[test]
    fn empty_stats_count_as_all_answered() {
        let stats = ProgressStats::default();
        assert!(stats.all_answered());
        assert!(stats.ratio().abs() < f64::EPSILON);
    }
}
