use crate::registry::Registry;

use super::{FeatureFlags, FlagOverrides, PremiumStore};

/// Everything that lives for one application session.
///
/// Created once at the application root and passed down by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub registry: Registry,
    pub flags: FeatureFlags,
    pub premium: PremiumStore,
}

impl Session {
    pub fn new(
        registry: Registry,
        overrides: FlagOverrides,
    ) -> Self {
        Self {
            registry,
            flags: FeatureFlags::initialize(registry, overrides),
            premium: PremiumStore::new(registry),
        }
    }

    /// Session as the site starts it: built-in registry plus the launch
    /// visibility overrides.
    pub fn launch() -> Self {
        let registry = Registry::builtin();
        Self::new(registry, FlagOverrides::launch(&registry))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Registry::builtin(), FlagOverrides::default())
    }
}
