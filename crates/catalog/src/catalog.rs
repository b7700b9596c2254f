use checklist_core::model::{Principle, ProcessCheck, ProcessId};

/// Ordered set of principles with their process checks.
///
/// Order is significant: it is the order of the cards in the progress widget
/// and of `PrincipleSnapshot` entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrincipleCatalog {
    principles: Vec<Principle>,
}

impl PrincipleCatalog {
    /// Build a catalog, sorting each principle's checks by process id.
    #[must_use]
    pub fn new(mut principles: Vec<Principle>) -> Self {
        for principle in &mut principles {
            principle
                .checks
                .sort_by(|a, b| a.process_id.cmp(&b.process_id));
        }
        Self { principles }
    }

    #[must_use]
    pub fn principles(&self) -> &[Principle] {
        &self.principles
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.principles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.principles.is_empty()
    }

    #[must_use]
    pub fn at(&self, index: usize) -> Option<&Principle> {
        self.principles.get(index)
    }

    /// Locate a check and the principle it belongs to.
    #[must_use]
    pub fn find_check(&self, id: &ProcessId) -> Option<(&Principle, &ProcessCheck)> {
        self.principles.iter().find_map(|principle| {
            principle
                .checks
                .iter()
                .find(|check| &check.process_id == id)
                .map(|check| (principle, check))
        })
    }

    #[must_use]
    pub fn total_checks(&self) -> u32 {
        self.principles
            .iter()
            .map(Principle::total_checks)
            .fold(0, u32::saturating_add)
    }
}
