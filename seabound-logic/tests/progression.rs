//! End-to-end progression properties: monotone access, regime exclusivity,
//! and the documented completion chains.
use std::collections::HashSet;

use seabound_logic::{
    CollectionState, Goal, LocationId, Options, Regime, SlipThrough, VehicleInclusion, World,
    depth, items,
};

const PLAYER: u16 = 1;

fn state_with(pairs: &[(&str, u32)]) -> CollectionState {
    let mut state = CollectionState::new();
    for (name, copies) in pairs {
        state.collect_many(PLAYER, name, *copies);
    }
    state
}

/// Every physical copy in catalog order; collecting along this order visits
/// a chain of strictly growing states.
fn growth_order() -> Vec<&'static str> {
    let mut order = Vec::new();
    for record in items::all_items() {
        for _ in 0..record.count.max(1) {
            order.push(record.name);
        }
    }
    order
}

#[test]
fn access_never_regresses_as_items_are_gained() {
    let world = World::generate(PLAYER, Options::default(), 0x1DE5).unwrap();
    let ids: Vec<LocationId> = world.location_ids().collect();

    let mut state = CollectionState::new();
    let mut reachable: HashSet<LocationId> = ids
        .iter()
        .copied()
        .filter(|id| world.access(*id, &state))
        .collect();
    let mut goal_reached = world.goal_access(&state);

    for name in growth_order() {
        state.collect(PLAYER, name);
        for id in &ids {
            let now = world.access(*id, &state);
            if reachable.contains(id) {
                assert!(now, "location {id} became unreachable after gaining {name}");
            } else if now {
                reachable.insert(*id);
            }
        }
        let goal_now = world.goal_access(&state);
        assert!(!goal_reached || goal_now, "goal regressed after gaining {name}");
        goal_reached = goal_now;
    }

    // A full inventory reaches everything under the default configuration.
    assert_eq!(reachable.len(), ids.len());
    assert!(goal_reached);
}

#[test]
fn vehicle_depths_are_monotone_across_tiers() {
    let options = Options::default();
    let regime = Regime::select(&options);

    let stages: [&[(&str, u32)]; 4] = [
        &[
            (items::DART_FRAGMENT, 3),
            (items::LAUNCH_BAY_FRAGMENT, 3),
        ],
        &[
            (items::DART_FRAGMENT, 3),
            (items::LAUNCH_BAY_FRAGMENT, 3),
            (items::DRY_DOCK_FRAGMENT, 2),
            (items::UPGRADE_CONSOLE, 1),
        ],
        &[
            (items::DART_FRAGMENT, 3),
            (items::LAUNCH_BAY_FRAGMENT, 3),
            (items::DRY_DOCK_FRAGMENT, 2),
            (items::UPGRADE_CONSOLE, 1),
            (items::RETROFIT_STATION_FRAGMENT, 3),
        ],
        &[
            (items::DART_FRAGMENT, 3),
            (items::LAUNCH_BAY_FRAGMENT, 3),
            (items::DRY_DOCK_FRAGMENT, 2),
            (items::UPGRADE_CONSOLE, 1),
            (items::RETROFIT_STATION_FRAGMENT, 3),
            (items::GLIDER_FRAGMENT, 2),
        ],
    ];

    let mut previous = 0;
    for stage in stages {
        let state = state_with(stage);
        let reach = depth::max_depth(&state, PLAYER, &options, regime);
        assert!(reach >= previous, "depth regressed: {reach} < {previous}");
        previous = reach;
    }
}

#[test]
fn exactly_one_regime_contributes_depth() {
    // Vehicle regime ignores the base-building ladder entirely.
    let vehicle_options = Options::default();
    assert_eq!(Regime::select(&vehicle_options), Regime::Vehicle);
    let generators_only = state_with(&[
        (items::EXTERIOR_PLANTER, 1),
        (items::BIOREACTOR_FRAGMENT, 2),
        (items::HABITAT_COMPARTMENT, 1),
        (items::THERMAL_PLANT_FRAGMENT, 2),
        (items::POWER_RELAY_FRAGMENT, 1),
    ]);
    assert_eq!(
        depth::max_depth(&generators_only, PLAYER, &vehicle_options, Regime::Vehicle),
        200,
        "generators must not add depth under the vehicle regime",
    );

    // Hardcore regime ignores vehicles even when their parts are held.
    let hardcore_options = Options {
        consider_items: false,
        include_dart: VehicleInclusion::Excluded,
        include_exosuit: VehicleInclusion::Excluded,
        include_leviathan: VehicleInclusion::Excluded,
        ..Options::default()
    };
    assert_eq!(Regime::select(&hardcore_options), Regime::Hardcore);
    let everything = state_with(&[
        (items::DART_FRAGMENT, 3),
        (items::LAUNCH_BAY_FRAGMENT, 3),
        (items::DRY_DOCK_FRAGMENT, 2),
        (items::UPGRADE_CONSOLE, 1),
        (items::RETROFIT_STATION_FRAGMENT, 3),
        (items::EXTERIOR_PLANTER, 1),
        (items::BIOREACTOR_FRAGMENT, 2),
        (items::HABITAT_COMPARTMENT, 1),
    ]);
    assert_eq!(
        depth::max_depth(&everything, PLAYER, &hardcore_options, Regime::Hardcore),
        200 + 200 + 1500,
        "hardcore reach is swim plus base-building, never plus vehicles",
    );
}

#[test]
fn deepest_check_flips_only_on_the_complete_dart_chain() {
    let options = Options {
        goal: Goal::DisableInterdiction,
        include_exosuit: VehicleInclusion::Excluded,
        include_leviathan: VehicleInclusion::Excluded,
        ..Options::default()
    };
    let world = World::generate(PLAYER, options, 0xAB55).unwrap();
    const DEEPEST: LocationId = 61058;

    let chain: [(&str, u32); 7] = [
        (items::GLIDER_FRAGMENT, 2),
        (items::ULTRA_CAPACITY_TANK, 1),
        (items::DART_FRAGMENT, 3),
        (items::LAUNCH_BAY_FRAGMENT, 3),
        (items::DRY_DOCK_FRAGMENT, 2),
        (items::UPGRADE_CONSOLE, 1),
        (items::RETROFIT_STATION_FRAGMENT, 3),
    ];

    let full = state_with(&chain);
    assert!(world.access(DEEPEST, &full));
    assert!(world.goal_access(&full));

    // One copy short anywhere in the chain keeps the check unreachable.
    for missing in 0..chain.len() {
        let mut state = CollectionState::new();
        for (index, (name, copies)) in chain.iter().enumerate() {
            let copies = if index == missing { copies - 1 } else { *copies };
            state.collect_many(PLAYER, name, copies);
        }
        assert!(
            !world.access(DEEPEST, &state),
            "short on {} yet deepest check passed",
            chain[missing].0,
        );
        assert!(!world.goal_access(&state));
    }
}

#[test]
fn bypass_mode_must_match_the_location_category() {
    // Wreck of the Gull engine pad: tractor gate, category tractor.
    const ENGINE_PAD: LocationId = 61024;

    let mismatched = Options {
        slip_through: SlipThrough::PlasmaCutter,
        ..Options::default()
    };
    let world = World::generate(PLAYER, mismatched, 7).unwrap();
    let neither_tool = state_with(&[(items::GLIDER_FRAGMENT, 2)]);
    assert!(!world.access(ENGINE_PAD, &neither_tool));

    let matching = Options {
        slip_through: SlipThrough::TractorCannon,
        ..Options::default()
    };
    let world = World::generate(PLAYER, matching, 7).unwrap();
    let cutter_held = state_with(&[
        (items::GLIDER_FRAGMENT, 2),
        (items::PLASMA_CUTTER_FRAGMENT, 3),
    ]);
    assert!(world.access(ENGINE_PAD, &cutter_held));
}

#[test]
fn hardcore_world_is_still_completable() {
    let options = Options {
        goal: Goal::DisableInterdiction,
        consider_items: false,
        include_dart: VehicleInclusion::Excluded,
        include_exosuit: VehicleInclusion::Excluded,
        include_leviathan: VehicleInclusion::Excluded,
        ..Options::default()
    };
    let world = World::generate(PLAYER, options, 0xDEEB).unwrap();
    assert_eq!(world.regime(), Regime::Hardcore);

    let state = state_with(&[
        (items::EXTERIOR_PLANTER, 1),
        (items::THERMAL_PLANT_FRAGMENT, 2),
        (items::POWER_RELAY_FRAGMENT, 1),
    ]);
    // 200 swim + 200 planter + 1500 thermal clears 1444.
    assert!(world.goal_access(&state));

    let without_relay = state_with(&[
        (items::EXTERIOR_PLANTER, 1),
        (items::THERMAL_PLANT_FRAGMENT, 2),
    ]);
    assert!(!world.goal_access(&without_relay));
}
