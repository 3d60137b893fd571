//! Flags, premium store and gate working together on the built-in catalog.

use kalkyl_core::gate::{confirm_upgrade, dismiss_upgrade};
use kalkyl_core::{AccessGate, Category, FeatureFlags, FlagOverrides, GateView, Registry, Session};
use pretty_assertions::assert_eq;

#[test]
fn access_only_changes_for_premium_calculators() {
    let mut session = Session::default();
    let registry = Registry::builtin();

    let free_before: Vec<bool> =
        registry.iter().map(|c| session.premium.can_access_calculator(c.id)).collect();

    session.premium.upgrade();
    for calc in registry.iter() {
        assert!(session.premium.can_access_calculator(calc.id), "{}", calc.id);
    }

    session.premium.downgrade();
    for (calc, before) in registry.iter().zip(free_before) {
        assert_eq!(session.premium.can_access_calculator(calc.id), before, "{}", calc.id);
        assert_eq!(before, !calc.premium, "{}", calc.id);
    }
}

#[test]
fn gate_scenario_on_premium_calculator() {
    let mut session = Session::launch();
    let before = session.clone();

    let locked = AccessGate::new(&session.premium).render("mortgage", || "bolån");
    assert!(matches!(locked, GateView::Upsell(_)));
    assert_eq!(session, before);

    session.premium.open_upgrade_modal();
    dismiss_upgrade(&mut session.premium);
    assert!(!session.premium.is_premium());

    session.premium.open_upgrade_modal();
    confirm_upgrade(&mut session.premium);

    let unlocked = AccessGate::new(&session.premium).render("mortgage", || "bolån");
    assert_eq!(unlocked, GateView::Content("bolån"));
    assert!(!session.premium.show_upgrade_modal());
}

#[test]
fn category_listing_matches_registry_subset() {
    let registry = Registry::builtin();
    let flags = FeatureFlags::initialize(registry, FlagOverrides::launch(&registry));

    for category in Category::all() {
        let listed: Vec<_> =
            flags.visible_calculators_by_category(*category).iter().map(|c| c.id).collect();
        let expected: Vec<_> = registry
            .by_category(*category)
            .filter(|c| flags.is_calculator_visible(c.id))
            .map(|c| c.id)
            .collect();

        assert_eq!(listed, expected, "{category}");
    }
}

#[test]
fn deep_merge_over_all_false_baseline() {
    let registry = Registry::builtin();
    let baseline = FeatureFlags::uniform(registry, false);

    let flags = FeatureFlags::initialize_over(
        baseline,
        FlagOverrides::default().with_visibility("loan", true),
    );

    let visible: Vec<_> = flags.visible_calculators().iter().map(|c| c.id).collect();
    assert_eq!(visible, vec!["loan"]);
    assert_eq!(flags.calculator_visibility().len(), registry.len());
}
