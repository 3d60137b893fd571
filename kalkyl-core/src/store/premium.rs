//! Premium access store.

use tracing::{debug, info};

use crate::models::CalculatorInfo;
use crate::registry::Registry;

/// Subscription state for one session.
///
/// `upgrade` is a stub: it flips the flag locally and never talks to a
/// billing provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PremiumStore {
    registry: Registry,
    is_premium: bool,
    show_upgrade_modal: bool,
}

impl PremiumStore {
    pub fn new(registry: Registry) -> Self {
        Self {
            registry,
            is_premium: false,
            show_upgrade_modal: false,
        }
    }

    pub fn registry(&self) -> Registry {
        self.registry
    }

    pub fn is_premium(&self) -> bool {
        self.is_premium
    }

    pub fn show_upgrade_modal(&self) -> bool {
        self.show_upgrade_modal
    }

    /// Grants premium access and closes the upgrade modal.
    pub fn upgrade(&mut self) {
        info!("premium access granted");
        self.is_premium = true;
        self.show_upgrade_modal = false;
    }

    pub fn downgrade(&mut self) {
        info!("premium access revoked");
        self.is_premium = false;
    }

    pub fn open_upgrade_modal(&mut self) {
        debug!("upgrade modal opened");
        self.show_upgrade_modal = true;
    }

    pub fn close_upgrade_modal(&mut self) {
        debug!("upgrade modal closed");
        self.show_upgrade_modal = false;
    }

    /// Whether the registry flags `id` as premium. Unknown ids are free.
    pub fn is_calculator_premium(
        &self,
        id: &str,
    ) -> bool {
        self.registry.get(id).is_some_and(|c| c.premium)
    }

    pub fn can_access_calculator(
        &self,
        id: &str,
    ) -> bool {
        !self.is_calculator_premium(id) || self.is_premium
    }

    /// Registry entries gated behind the subscription.
    pub fn premium_calculators(&self) -> Vec<&'static CalculatorInfo> {
        self.registry.iter().filter(|c| c.premium).collect()
    }
}

impl Default for PremiumStore {
    fn default() -> Self {
        Self::new(Registry::builtin())
    }
}
