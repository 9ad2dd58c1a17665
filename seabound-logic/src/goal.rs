//! Goal evaluator: each configured goal compiles into one access predicate
//! attached to its synthetic event location.
use crate::access;
use crate::depth::{self, INTERDICTION_DEPTH, RESONANCE_DEPTH, Regime};
use crate::items;
use crate::locations::{self, DRIVE_ROOM_TERMINAL_ID};
use crate::options::{Goal, Options};
use crate::state::{CollectionState, PlayerId};

/// Everything the Meridian needs beyond depth, the Launch Bay, and the
/// shield: the rocket stages themselves plus their ion power plant.
const MERIDIAN_PARTS: [&str; 7] = [
    items::MERIDIAN_LAUNCH_PLATFORM,
    items::MERIDIAN_GANTRY,
    items::MERIDIAN_BOOSTERS,
    items::MERIDIAN_FUEL_RESERVE,
    items::MERIDIAN_COCKPIT,
    items::ION_POWER_CELL,
    items::ION_BATTERY,
];

/// Whether the configured goal's event location is satisfiable for `state`.
#[must_use]
pub fn can_reach_goal(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    regime: Regime,
) -> bool {
    match options.goal {
        Goal::MeridianLaunch => {
            depth::max_depth(state, player, options, regime) >= INTERDICTION_DEPTH
                && crate::predicates::has_launch_bay(state, player)
                && MERIDIAN_PARTS
                    .iter()
                    .all(|part| state.has_one(player, part))
                && crate::predicates::has_leviathan_shield(state, player, options)
        }
        Goal::DisableInterdiction => {
            depth::max_depth(state, player, options, regime) >= INTERDICTION_DEPTH
        }
        Goal::DeepResonance => {
            depth::max_depth(state, player, options, regime) >= RESONANCE_DEPTH
        }
        Goal::RepairCalypsoDrive => locations::find_location(DRIVE_ROOM_TERMINAL_ID)
            .is_some_and(|room| access::can_access_location(state, player, options, regime, room)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::VehicleInclusion;

    const PLAYER: PlayerId = 1;

    fn state_with(pairs: &[(&str, u32)]) -> CollectionState {
        let mut state = CollectionState::new();
        for (name, copies) in pairs {
            state.collect_many(PLAYER, name, *copies);
        }
        state
    }

    fn deep_dart_kit() -> Vec<(&'static str, u32)> {
        vec![
            (items::GLIDER_FRAGMENT, 2),
            (items::ULTRA_CAPACITY_TANK, 1),
            (items::DART_FRAGMENT, 3),
            (items::LAUNCH_BAY_FRAGMENT, 3),
            (items::DRY_DOCK_FRAGMENT, 2),
            (items::UPGRADE_CONSOLE, 1),
            (items::RETROFIT_STATION_FRAGMENT, 3),
        ]
    }

    #[test]
    fn interdiction_goal_is_pure_depth() {
        let options = Options {
            goal: Goal::DisableInterdiction,
            ..Options::default()
        };
        let regime = Regime::select(&options);

        let state = state_with(&deep_dart_kit());
        // Swim 200 + (200 glider + 100 tank + 50 refund) + Dart MK3 900.
        assert!(can_reach_goal(&state, PLAYER, &options, regime));

        let mut short = deep_dart_kit();
        short.pop();
        let short = state_with(&short);
        assert!(!can_reach_goal(&short, PLAYER, &options, regime));
    }

    #[test]
    fn resonance_goal_needs_only_900() {
        let options = Options {
            goal: Goal::DeepResonance,
            ..Options::default()
        };
        let regime = Regime::select(&options);
        let state = state_with(&deep_dart_kit());
        assert!(can_reach_goal(&state, PLAYER, &options, regime));

        // Dropping the bench collapses both the tank bonus and the MK
        // chain; 425 of swim plus a stock Dart falls short of 900.
        let mut kit = deep_dart_kit();
        kit.pop();
        let short = state_with(&kit);
        assert!(!can_reach_goal(&short, PLAYER, &options, regime));
    }

    #[test]
    fn launch_goal_needs_rocket_shield_and_depth() {
        let options = Options {
            goal: Goal::MeridianLaunch,
            ..Options::default()
        };
        let regime = Regime::select(&options);

        let mut kit = deep_dart_kit();
        for part in MERIDIAN_PARTS {
            kit.push((part, 1));
        }
        let no_shield = state_with(&kit);
        assert!(!can_reach_goal(&no_shield, PLAYER, &options, regime));

        kit.push((items::LEVIATHAN_SHIELD_GENERATOR, 1));
        kit.push((items::LEVIATHAN_BRIDGE_FRAGMENT, 3));
        kit.push((items::LEVIATHAN_ENGINE_FRAGMENT, 3));
        kit.push((items::LEVIATHAN_HULL_FRAGMENT, 3));
        let full = state_with(&kit);
        assert!(can_reach_goal(&full, PLAYER, &options, regime));
    }

    #[test]
    fn launch_goal_with_excluded_leviathan_uses_the_shield_override() {
        let options = Options {
            goal: Goal::MeridianLaunch,
            include_leviathan: VehicleInclusion::Excluded,
            ..Options::default()
        };
        let regime = Regime::select(&options);

        let mut kit = deep_dart_kit();
        for part in MERIDIAN_PARTS {
            kit.push((part, 1));
        }
        kit.push((items::LEVIATHAN_SHIELD_GENERATOR, 1));
        // No hull chain at all: Dry Dock + Upgrade Console stand in.
        let state = state_with(&kit);
        assert!(can_reach_goal(&state, PLAYER, &options, regime));
    }

    #[test]
    fn drive_repair_delegates_to_the_drive_room() {
        let options = Options {
            goal: Goal::RepairCalypsoDrive,
            ..Options::default()
        };
        let regime = Regime::select(&options);

        // The drive room is irradiated and debris-choked.
        let partial = state_with(&[
            (items::GLIDER_FRAGMENT, 2),
            (items::RADIATION_SUIT, 1),
        ]);
        assert!(!can_reach_goal(&partial, PLAYER, &options, regime));

        let full = state_with(&[
            (items::GLIDER_FRAGMENT, 2),
            (items::RADIATION_SUIT, 1),
            (items::TRACTOR_CANNON_FRAGMENT, 2),
        ]);
        assert!(can_reach_goal(&full, PLAYER, &options, regime));
    }
}
