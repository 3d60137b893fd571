//! Feature flag store.
//!
//! Holds the three page-section toggles and the per-calculator visibility
//! map for one session. Every operation is synchronous and total; nothing
//! is persisted.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::{CalculatorInfo, Category};
use crate::registry::Registry;

/// Visibility of a calculator that has no entry in the visibility map.
pub const DEFAULT_VISIBILITY: bool = true;

/// Calculators shown when the site launches. Every other id in the
/// registry gets an explicit `false` entry from [`FlagOverrides::launch`].
const LAUNCH_VISIBLE: &[&str] = &["loan", "compound-interest", "bmi", "fasting", "sleep"];

/// The top-level boolean toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKey {
    /// Master switch for the calculator listing.
    ShowCalculators,
    /// Cross-link block at the bottom of each calculator page.
    ShowCalculatorNavigation,
    /// Calculator resource list in the site footer.
    ShowFooterCalculators,
}

impl FlagKey {
    pub fn all() -> &'static [FlagKey] {
        &[
            FlagKey::ShowCalculators,
            FlagKey::ShowCalculatorNavigation,
            FlagKey::ShowFooterCalculators,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShowCalculators => "show_calculators",
            Self::ShowCalculatorNavigation => "show_calculator_navigation",
            Self::ShowFooterCalculators => "show_footer_calculators",
        }
    }

    /// Accepts both the snake_case name and the camelCase name used by
    /// the web front end.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "show_calculators" | "showCalculators" => Some(Self::ShowCalculators),
            "show_calculator_navigation" | "showCalculatorNavigation" => {
                Some(Self::ShowCalculatorNavigation)
            }
            "show_footer_calculators" | "showFooterCalculators" => {
                Some(Self::ShowFooterCalculators)
            }
            _ => None,
        }
    }
}

/// Partial configuration merged over the defaults by
/// [`FeatureFlags::initialize`]. Absent fields keep their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlagOverrides {
    #[serde(alias = "showCalculators")]
    pub show_calculators: Option<bool>,

    #[serde(alias = "showCalculatorNavigation")]
    pub show_calculator_navigation: Option<bool>,

    #[serde(alias = "showFooterCalculators")]
    pub show_footer_calculators: Option<bool>,

    #[serde(alias = "calculatorVisibility")]
    pub calculator_visibility: BTreeMap<String, bool>,
}

impl FlagOverrides {
    /// The override map installed at the application root: a handful of
    /// calculators visible, every other registry id explicitly hidden.
    pub fn launch(registry: &Registry) -> Self {
        let calculator_visibility = registry
            .iter()
            .map(|c| (c.id.to_string(), LAUNCH_VISIBLE.contains(&c.id)))
            .collect();

        Self {
            calculator_visibility,
            ..Default::default()
        }
    }

    /// Convenience for a single visibility entry.
    pub fn with_visibility(
        mut self,
        id: &str,
        visible: bool,
    ) -> Self {
        self.calculator_visibility.insert(id.to_string(), visible);
        self
    }
}

/// Session-wide feature flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureFlags {
    registry: Registry,
    show_calculators: bool,
    show_calculator_navigation: bool,
    show_footer_calculators: bool,
    calculator_visibility: BTreeMap<String, bool>,
}

impl FeatureFlags {
    /// Hard-coded defaults: every toggle on and every registry id mapped
    /// to `true`.
    pub fn defaults(registry: Registry) -> Self {
        Self::uniform(registry, true)
    }

    /// Every toggle and every registry id set to `value`.
    pub fn uniform(
        registry: Registry,
        value: bool,
    ) -> Self {
        Self {
            registry,
            show_calculators: value,
            show_calculator_navigation: value,
            show_footer_calculators: value,
            calculator_visibility: registry.iter().map(|c| (c.id.to_string(), value)).collect(),
        }
    }

    /// Merges `overrides` over [`FeatureFlags::defaults`].
    pub fn initialize(
        registry: Registry,
        overrides: FlagOverrides,
    ) -> Self {
        Self::initialize_over(Self::defaults(registry), overrides)
    }

    /// Merges `overrides` over an explicit baseline.
    ///
    /// Toggles present in `overrides` replace the baseline's; the
    /// visibility map is merged key by key, so ids the override does not
    /// mention keep their baseline value.
    pub fn initialize_over(
        mut baseline: Self,
        overrides: FlagOverrides,
    ) -> Self {
        if let Some(value) = overrides.show_calculators {
            baseline.show_calculators = value;
        }
        if let Some(value) = overrides.show_calculator_navigation {
            baseline.show_calculator_navigation = value;
        }
        if let Some(value) = overrides.show_footer_calculators {
            baseline.show_footer_calculators = value;
        }

        let merged = overrides.calculator_visibility.len();
        baseline.calculator_visibility.extend(overrides.calculator_visibility);

        debug!(merged, total = baseline.calculator_visibility.len(), "feature flags initialized");
        baseline
    }

    pub fn registry(&self) -> Registry {
        self.registry
    }

    pub fn flag(
        &self,
        key: FlagKey,
    ) -> bool {
        match key {
            FlagKey::ShowCalculators => self.show_calculators,
            FlagKey::ShowCalculatorNavigation => self.show_calculator_navigation,
            FlagKey::ShowFooterCalculators => self.show_footer_calculators,
        }
    }

    pub fn show_calculators(&self) -> bool {
        self.show_calculators
    }

    pub fn show_calculator_navigation(&self) -> bool {
        self.show_calculator_navigation
    }

    pub fn show_footer_calculators(&self) -> bool {
        self.show_footer_calculators
    }

    /// The raw visibility map, including entries for unknown ids.
    pub fn calculator_visibility(&self) -> &BTreeMap<String, bool> {
        &self.calculator_visibility
    }

    pub fn update_flag(
        &mut self,
        key: FlagKey,
        value: bool,
    ) {
        debug!(flag = key.as_str(), value, "flag updated");
        match key {
            FlagKey::ShowCalculators => self.show_calculators = value,
            FlagKey::ShowCalculatorNavigation => self.show_calculator_navigation = value,
            FlagKey::ShowFooterCalculators => self.show_footer_calculators = value,
        }
    }

    pub fn toggle_flag(
        &mut self,
        key: FlagKey,
    ) {
        self.update_flag(key, !self.flag(key));
    }

    /// Sets one visibility entry, creating it if absent. The id is not
    /// checked against the registry.
    pub fn update_calculator_visibility(
        &mut self,
        id: &str,
        visible: bool,
    ) {
        debug!(id, visible, "calculator visibility updated");
        self.calculator_visibility.insert(id.to_string(), visible);
    }

    /// Inverts the current visibility. An absent entry is treated as
    /// visible, so the first toggle hides it.
    pub fn toggle_calculator_visibility(
        &mut self,
        id: &str,
    ) {
        let current = self.is_calculator_visible(id);
        self.update_calculator_visibility(id, !current);
    }

    /// The map entry for `id`, or `default` when the map has none.
    pub fn visibility_or(
        &self,
        id: &str,
        default: bool,
    ) -> bool {
        self.calculator_visibility.get(id).copied().unwrap_or(default)
    }

    /// Visible unless explicitly hidden.
    pub fn is_calculator_visible(
        &self,
        id: &str,
    ) -> bool {
        self.visibility_or(id, DEFAULT_VISIBILITY)
    }

    pub fn visible_calculators(&self) -> Vec<&'static CalculatorInfo> {
        self.registry
            .iter()
            .filter(|c| self.is_calculator_visible(c.id))
            .collect()
    }

    pub fn visible_calculators_by_category(
        &self,
        category: Category,
    ) -> Vec<&'static CalculatorInfo> {
        self.registry
            .by_category(category)
            .filter(|c| self.is_calculator_visible(c.id))
            .collect()
    }

    /// What the calculator listing page shows: nothing when the master
    /// switch is off.
    pub fn listed_calculators(&self) -> Vec<&'static CalculatorInfo> {
        if !self.show_calculators {
            return Vec::new();
        }
        self.visible_calculators()
    }

    /// Cross-links shown under `current_id`: other visible calculators of
    /// the same category, at most `limit` of them.
    pub fn related_calculators(
        &self,
        current_id: &str,
        limit: usize,
    ) -> Vec<&'static CalculatorInfo> {
        if !self.show_calculator_navigation {
            return Vec::new();
        }
        let Some(current) = self.registry.get(current_id) else {
            return Vec::new();
        };

        self.registry
            .by_category(current.category)
            .filter(|c| c.id != current_id && self.is_calculator_visible(c.id))
            .take(limit)
            .collect()
    }

    /// Footer resource list.
    pub fn footer_calculators(&self) -> Vec<&'static CalculatorInfo> {
        if !self.show_footer_calculators {
            return Vec::new();
        }
        self.visible_calculators()
    }
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self::defaults(Registry::builtin())
    }
}
