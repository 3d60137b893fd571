//! Access control gate for premium calculators.
//!
//! The gate decides, per calculator id, whether to hand back the
//! calculator's content or an upsell prompt. Deciding never mutates the
//! premium store; the only transitions are [`confirm_upgrade`] (locked to
//! unlocked) and [`PremiumStore::downgrade`] (unlocked to locked), and both
//! apply to every premium calculator at once.

use serde::Serialize;
use tracing::debug;

use crate::store::PremiumStore;

const UPSELL_HEADING: &str = "Premiumkalkylator";
const UPSELL_MESSAGE: &str =
    "Den här kalkylatorn ingår i Premium. Uppgradera för att låsa upp alla kalkylatorer.";
const UPSELL_ACTION: &str = "Uppgradera nu";

/// Whether a calculator's content is currently reachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GateState {
    Locked,
    Unlocked,
}

/// What a gated page renders instead of the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpsellPrompt {
    pub calculator_id: String,
    pub title: String,
    pub heading: &'static str,
    pub message: &'static str,
    pub action_label: &'static str,
}

/// Result of passing a calculator through the gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView<T> {
    Content(T),
    Upsell(UpsellPrompt),
}

impl<T> GateView<T> {
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }

    pub fn content(self) -> Option<T> {
        match self {
            Self::Content(content) => Some(content),
            Self::Upsell(_) => None,
        }
    }

    pub fn map<U>(
        self,
        f: impl FnOnce(T) -> U,
    ) -> GateView<U> {
        match self {
            Self::Content(content) => GateView::Content(f(content)),
            Self::Upsell(prompt) => GateView::Upsell(prompt),
        }
    }
}

/// Read-only gate over a premium store.
#[derive(Debug, Clone, Copy)]
pub struct AccessGate<'a> {
    premium: &'a PremiumStore,
}

impl<'a> AccessGate<'a> {
    pub fn new(premium: &'a PremiumStore) -> Self {
        Self { premium }
    }

    pub fn state(
        &self,
        id: &str,
    ) -> GateState {
        if !self.premium.is_calculator_premium(id) || self.premium.can_access_calculator(id) {
            GateState::Unlocked
        } else {
            GateState::Locked
        }
    }

    /// Produces the calculator's content when unlocked, otherwise the
    /// upsell prompt. `content` is only evaluated when unlocked.
    pub fn render<T>(
        &self,
        id: &str,
        content: impl FnOnce() -> T,
    ) -> GateView<T> {
        match self.state(id) {
            GateState::Unlocked => GateView::Content(content()),
            GateState::Locked => {
                debug!(id, "calculator locked, rendering upsell");
                GateView::Upsell(self.upsell(id))
            }
        }
    }

    fn upsell(
        &self,
        id: &str,
    ) -> UpsellPrompt {
        let title = self
            .premium
            .registry()
            .get(id)
            .map_or_else(|| id.to_string(), |c| c.title.to_string());

        UpsellPrompt {
            calculator_id: id.to_string(),
            title,
            heading: UPSELL_HEADING,
            message: UPSELL_MESSAGE,
            action_label: UPSELL_ACTION,
        }
    }
}

/// The upgrade modal's confirm button. Closes the modal as a side effect
/// of [`PremiumStore::upgrade`].
pub fn confirm_upgrade(premium: &mut PremiumStore) {
    premium.upgrade();
}

/// The upgrade modal's cancel button.
pub fn dismiss_upgrade(premium: &mut PremiumStore) {
    premium.close_upgrade_modal();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::models::{CalculatorInfo, Category};
    use crate::registry::Registry;

    const TEST_CALCULATORS: &[CalculatorInfo] = &[
        CalculatorInfo::new("loan", "Lånekalkylator", "", "/lan", Category::Ekonomi),
        CalculatorInfo::new("mortgage", "Bolånekalkylator", "", "/bolan", Category::Ekonomi)
            .premium(),
    ];

    fn store() -> PremiumStore {
        PremiumStore::new(Registry::new(TEST_CALCULATORS))
    }

    #[test]
    fn free_calculator_renders_content() {
        let store = store();
        let gate = AccessGate::new(&store);

        assert_eq!(gate.render("loan", || "kalkylator"), GateView::Content("kalkylator"));
        assert_eq!(gate.state("loan"), GateState::Unlocked);
    }

    #[test]
    fn premium_calculator_renders_upsell_when_not_premium() {
        let store = store();
        let before = store.clone();
        let gate = AccessGate::new(&store);

        let view = gate.render("mortgage", || "kalkylator");

        match view {
            GateView::Upsell(prompt) => {
                assert_eq!(prompt.calculator_id, "mortgage");
                assert_eq!(prompt.title, "Bolånekalkylator");
                assert_eq!(prompt.action_label, UPSELL_ACTION);
            }
            GateView::Content(_) => panic!("expected upsell"),
        }
        assert_eq!(store, before);
    }

    #[test]
    fn premium_calculator_renders_content_when_premium() {
        let mut store = store();
        store.upgrade();
        let before = store.clone();

        let view = AccessGate::new(&store).render("mortgage", || 42);

        assert_eq!(view, GateView::Content(42));
        assert_eq!(store, before);
    }

    #[test]
    fn locked_render_does_not_evaluate_content() {
        let store = store();
        let mut evaluated = false;

        let view = AccessGate::new(&store).render("mortgage", || evaluated = true);

        assert!(!view.is_content());
        assert!(!evaluated);
    }

    #[test]
    fn confirm_upgrade_unlocks_and_closes_modal() {
        let mut store = store();
        store.open_upgrade_modal();

        confirm_upgrade(&mut store);

        assert!(!store.show_upgrade_modal());
        assert_eq!(AccessGate::new(&store).state("mortgage"), GateState::Unlocked);
    }

    #[test]
    fn dismiss_upgrade_keeps_lock() {
        let mut store = store();
        store.open_upgrade_modal();

        dismiss_upgrade(&mut store);

        assert!(!store.show_upgrade_modal());
        assert_eq!(AccessGate::new(&store).state("mortgage"), GateState::Locked);
    }

    #[test]
    fn downgrade_relocks() {
        let mut store = store();
        confirm_upgrade(&mut store);
        store.downgrade();

        assert_eq!(AccessGate::new(&store).state("mortgage"), GateState::Locked);
    }

    #[test]
    fn map_preserves_upsell() {
        let store = store();
        let gate = AccessGate::new(&store);

        assert_eq!(gate.render("loan", || 2).map(|n| n * 2).content(), Some(4));
        assert_eq!(gate.render("mortgage", || 2).map(|n| n * 2).content(), None);
    }
}
