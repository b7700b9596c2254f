//! Card derivation from a `render` payload.

use serde_json::Value;
use thiserror::Error;

use checklist_core::model::{CardViewState, PrincipleProgress, ProgressError};

use crate::protocol::RenderArgs;

/// Height of one card row in the embedding frame.
pub const ROW_HEIGHT: u32 = 90;

/// Frame height needed for `principles` cards.
#[must_use]
pub fn frame_height(principles: usize) -> u32 {
    u32::try_from(principles)
        .unwrap_or(u32::MAX)
        .saturating_mul(ROW_HEIGHT)
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CardError {
    #[error("no progress data for card {index}")]
    MissingData { index: usize },
    #[error("invalid progress data for card {index}: {source}")]
    InvalidData {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("card {index}: {source}")]
    Progress {
        index: usize,
        #[source]
        source: ProgressError,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Badge {
    Completed,
    Active,
    Pending,
}

impl Badge {
    /// Completion wins over selection.
    #[must_use]
    pub fn for_state(is_completed: bool, is_active: bool) -> Self {
        match (is_completed, is_active) {
            (true, _) => Self::Completed,
            (false, true) => Self::Active,
            (false, false) => Self::Pending,
        }
    }

    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Completed => "#22c55e",
            Self::Active => "#3b82f6",
            Self::Pending => "#f59e0b",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Completed => "badge badge--completed",
            Self::Active => "badge badge--active",
            Self::Pending => "badge badge--pending",
        }
    }
}

/// One rendered principle card.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    /// Position in `principles_names`; this is the value reported on click.
    pub index: usize,
    pub name: String,
    pub answered: u32,
    pub total: u32,
    pub percentage: f64,
    pub badge: Badge,
    pub is_active: bool,
}

impl CardView {
    fn from_state(name: &str, progress: PrincipleProgress, state: CardViewState) -> Self {
        Self {
            index: state.index,
            name: name.to_owned(),
            answered: progress.answered_checks,
            total: progress.total_checks,
            percentage: state.percentage,
            badge: Badge::for_state(state.is_completed, state.is_active),
            is_active: state.is_active,
        }
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self.badge, Badge::Completed)
    }

    /// Checkmark when completed, otherwise the 1-based position.
    #[must_use]
    pub fn badge_label(&self) -> String {
        if self.is_completed() {
            "✓".to_owned()
        } else {
            (self.index + 1).to_string()
        }
    }

    #[must_use]
    pub fn caption(&self) -> String {
        format!("{} of {} checks", self.answered, self.total)
    }

    /// Percentage rounded to one decimal, without a trailing `.0`.
    #[must_use]
    pub fn percentage_label(&self) -> String {
        let rounded = (self.percentage * 10.0).round() / 10.0;
        if rounded.fract() == 0.0 {
            format!("{rounded:.0}")
        } else {
            format!("{rounded:.1}")
        }
    }

    #[must_use]
    pub fn bar_width(&self) -> String {
        format!("{}%", self.percentage_label())
    }

    fn set_active(&mut self, is_active: bool) {
        self.is_active = is_active;
        self.badge = Badge::for_state(self.is_completed_by_counts(), is_active);
    }

    fn is_completed_by_counts(&self) -> bool {
        self.total > 0 && self.answered == self.total
    }
}

/// Build every card that can be built; failing cards are logged and skipped.
///
/// Without `principles_keys`, the i-th name is paired with the i-th entry of
/// `principles_data` in the order the host wrote it. That only holds while the
/// host keeps both sequences in the same order; hosts should send keys.
#[must_use]
pub fn build_cards(args: &RenderArgs) -> Vec<CardView> {
    let keyed = args
        .principles_keys
        .as_ref()
        .filter(|keys| keys.len() == args.principles_names.len());
    if args.principles_keys.is_some() && keyed.is_none() {
        tracing::warn!(
            names = args.principles_names.len(),
            "principles_keys length mismatch, pairing by position"
        );
    }

    let mut positional = args.principles_data.values();
    let mut cards = Vec::with_capacity(args.principles_names.len());

    for (index, name) in args.principles_names.iter().enumerate() {
        let data = match keyed {
            Some(keys) => args.principles_data.get(&keys[index]),
            None => positional.next(),
        };
        match card(index, name, data, args.current_index) {
            Ok(card) => cards.push(card),
            Err(error) => tracing::warn!(index, %error, "skipping principle card"),
        }
    }
    cards
}

fn card(
    index: usize,
    name: &str,
    data: Option<&Value>,
    current_index: usize,
) -> Result<CardView, CardError> {
    let data = data.ok_or(CardError::MissingData { index })?;
    let progress: PrincipleProgress = serde_json::from_value(data.clone())
        .map_err(|source| CardError::InvalidData { index, source })?;
    let progress = progress
        .validated()
        .map_err(|source| CardError::Progress { index, source })?;
    let state = CardViewState::derive(index, progress, current_index);
    Ok(CardView::from_state(name, progress, state))
}

/// Move the active highlight to `index`. Completed badges stay green.
pub fn restyle(cards: &mut [CardView], index: usize) {
    for card in cards {
        card.set_active(card.index == index);
    }
}
