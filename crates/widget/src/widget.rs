use crate::cards::{self, CardView};
use crate::protocol::{HostMessage, WidgetMessage};

/// Widget state between host pushes.
///
/// The card list is replaced wholesale on every `render`; clicks only move
/// the highlight until the host's next push arrives.
#[derive(Clone, Debug, Default)]
pub struct ProgressWidget {
    cards: Vec<CardView>,
    rows: usize,
}

impl ProgressWidget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent once on startup, before any data has arrived.
    #[must_use]
    pub fn load(&mut self) -> Vec<WidgetMessage> {
        self.cards.clear();
        self.rows = 0;
        vec![
            WidgetMessage::ready(),
            WidgetMessage::SetFrameHeight { height: 0 },
        ]
    }

    pub fn handle(&mut self, message: HostMessage) -> Vec<WidgetMessage> {
        match message {
            HostMessage::Render { args: Some(args) } => {
                self.cards = cards::build_cards(&args);
                self.rows = args.principles_names.len();
                tracing::debug!(
                    rows = self.rows,
                    rendered = self.cards.len(),
                    current = args.current_index,
                    "render"
                );
            }
            HostMessage::Render { args: None } => {
                self.cards.clear();
                self.rows = 0;
                tracing::debug!("render without args");
            }
        }
        vec![WidgetMessage::SetFrameHeight {
            height: self.height(),
        }]
    }

    /// A click on the card at `index`. Unknown indexes produce no message.
    pub fn click(&mut self, index: usize) -> Vec<WidgetMessage> {
        if !self.cards.iter().any(|card| card.index == index) {
            tracing::debug!(index, "click on unknown card ignored");
            return Vec::new();
        }
        cards::restyle(&mut self.cards, index);
        vec![WidgetMessage::select(index)]
    }

    #[must_use]
    pub fn cards(&self) -> &[CardView] {
        &self.cards
    }

    /// Height for the latest snapshot: one row per principle name.
    #[must_use]
    pub fn height(&self) -> u32 {
        cards::frame_height(self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RenderArgs;
    use serde_json::json;

    fn render(current_index: usize) -> HostMessage {
        let args: RenderArgs = serde_json::from_value(json!({
            "principles_names": ["A", "B", "C"],
            "principles_keys": ["a", "b", "c"],
            "principles_data": {
                "a": {"total_checks": 2, "answered_checks": 2},
                "b": {"total_checks": 3, "answered_checks": 1},
                "c": {"total_checks": 0, "answered_checks": 0}
            },
            "current_index": current_index
        }))
        .unwrap();
        args.render()
    }

    #[test]
    fn load_announces_ready_with_zero_height() {
        let mut widget = ProgressWidget::new();
        assert_eq!(
            widget.load(),
            vec![
                WidgetMessage::ready(),
                WidgetMessage::SetFrameHeight { height: 0 }
            ]
        );
        assert!(widget.cards().is_empty());
    }

    #[test]
    fn render_requests_height_per_principle() {
        let mut widget = ProgressWidget::new();
        widget.load();
        assert_eq!(
            widget.handle(render(1)),
            vec![WidgetMessage::SetFrameHeight { height: 270 }]
        );
        assert_eq!(widget.cards().len(), 3);
    }

    #[test]
    fn empty_render_clears_cards() {
        let mut widget = ProgressWidget::new();
        widget.handle(render(0));
        assert_eq!(
            widget.handle(HostMessage::Render { args: None }),
            vec![WidgetMessage::SetFrameHeight { height: 0 }]
        );
        assert_eq!(
            widget.handle(RenderArgs::default().render()),
            vec![WidgetMessage::SetFrameHeight { height: 0 }]
        );
        assert!(widget.cards().is_empty());
    }

    #[test]
    fn click_emits_one_selection_and_restyles() {
        let mut widget = ProgressWidget::new();
        widget.handle(render(0));

        assert_eq!(widget.click(2), vec![WidgetMessage::select(2)]);
        let active: Vec<usize> = widget
            .cards()
            .iter()
            .filter(|card| card.is_active)
            .map(|card| card.index)
            .collect();
        assert_eq!(active, vec![2]);

        assert!(widget.click(7).is_empty());
    }

    #[test]
    fn rerender_after_click_is_idempotent() {
        let mut widget = ProgressWidget::new();
        widget.handle(render(0));
        widget.click(1);
        let optimistic = widget.cards().to_vec();

        widget.handle(render(1));
        assert_eq!(widget.cards(), optimistic.as_slice());
    }
}
