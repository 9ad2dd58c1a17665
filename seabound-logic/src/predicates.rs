//! Atomic requirement predicates and craft-chain compositions.
//!
//! Every function here is a pure read of the collected-item multiset. Craft
//! chains compose conjunctively: each tier names everything the physical
//! build sequence needs, and the Retrofit Station is required again at every
//! successive depth-module tier because the bench itself must be unlocked
//! before each upgrade, not just once.
use crate::items;
use crate::options::Options;
use crate::state::{CollectionState, PlayerId};

#[must_use]
pub fn has_glider(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::GLIDER_FRAGMENT, 2)
}

#[must_use]
pub fn has_exterior_planter(state: &CollectionState, player: PlayerId) -> bool {
    state.has_one(player, items::EXTERIOR_PLANTER)
}

#[must_use]
pub fn has_retrofit_station(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::RETROFIT_STATION_FRAGMENT, 3)
}

#[must_use]
pub fn has_launch_bay(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::LAUNCH_BAY_FRAGMENT, 3)
}

#[must_use]
pub fn has_dry_dock(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::DRY_DOCK_FRAGMENT, 2)
}

#[must_use]
pub fn has_upgrade_console(state: &CollectionState, player: PlayerId) -> bool {
    state.has_one(player, items::UPGRADE_CONSOLE) && has_dry_dock(state, player)
}

#[must_use]
pub fn has_dart(state: &CollectionState, player: PlayerId, options: &Options) -> bool {
    if !options.include_dart.in_logic() {
        return false;
    }
    state.has(player, items::DART_FRAGMENT, 3) && has_launch_bay(state, player)
}

#[must_use]
pub fn has_dart_depth_module_mk1(state: &CollectionState, player: PlayerId) -> bool {
    has_upgrade_console(state, player)
}

#[must_use]
pub fn has_dart_depth_module_mk2(state: &CollectionState, player: PlayerId) -> bool {
    has_dart_depth_module_mk1(state, player) && has_retrofit_station(state, player)
}

#[must_use]
pub fn has_dart_depth_module_mk3(state: &CollectionState, player: PlayerId) -> bool {
    has_dart_depth_module_mk2(state, player) && has_retrofit_station(state, player)
}

#[must_use]
pub fn has_leviathan_bridge(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::LEVIATHAN_BRIDGE_FRAGMENT, 3)
}

#[must_use]
pub fn has_leviathan_engine(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::LEVIATHAN_ENGINE_FRAGMENT, 3)
}

#[must_use]
pub fn has_leviathan_hull(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::LEVIATHAN_HULL_FRAGMENT, 3)
}

/// Whether the Leviathan itself is workable. `shield_check` relaxes the
/// inclusion gate: the interior-only shield generator can be crafted and
/// itemized even when the hull is excluded from general logic.
#[must_use]
pub fn has_leviathan(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    shield_check: bool,
) -> bool {
    if !options.include_leviathan.in_logic() && !shield_check {
        return false;
    }
    has_leviathan_bridge(state, player)
        && has_leviathan_engine(state, player)
        && has_leviathan_hull(state, player)
        && has_launch_bay(state, player)
}

// The MK1 module is crafted inside the Leviathan, so no bench is needed for
// the first tier.
#[must_use]
pub fn has_leviathan_depth_module_mk1(state: &CollectionState, player: PlayerId) -> bool {
    state.has_one(player, items::LEVIATHAN_DEPTH_MODULE_MK1)
}

#[must_use]
pub fn has_leviathan_depth_module_mk2(state: &CollectionState, player: PlayerId) -> bool {
    has_leviathan_depth_module_mk1(state, player) && has_retrofit_station(state, player)
}

#[must_use]
pub fn has_leviathan_depth_module_mk3(state: &CollectionState, player: PlayerId) -> bool {
    has_leviathan_depth_module_mk2(state, player) && has_retrofit_station(state, player)
}

#[must_use]
pub fn has_exosuit(state: &CollectionState, player: PlayerId, options: &Options) -> bool {
    if !options.include_exosuit.in_logic() {
        return false;
    }
    state.has(player, items::EXOSUIT_FRAGMENT, 4) && has_launch_bay(state, player)
}

#[must_use]
pub fn has_exosuit_depth_module_mk1(state: &CollectionState, player: PlayerId) -> bool {
    has_upgrade_console(state, player)
}

#[must_use]
pub fn has_exosuit_depth_module_mk2(state: &CollectionState, player: PlayerId) -> bool {
    has_exosuit_depth_module_mk1(state, player) && has_retrofit_station(state, player)
}

#[must_use]
pub fn has_plasma_cutter(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::PLASMA_CUTTER_FRAGMENT, 3)
}

#[must_use]
pub fn has_tractor_cannon(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::TRACTOR_CANNON_FRAGMENT, 2)
}

#[must_use]
pub fn has_stasis_lance(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::STASIS_LANCE_FRAGMENT, 2)
}

/// Either habitat compartment serves as the utility room reactors and the
/// Specimen Tank mount into.
#[must_use]
pub fn has_utility_compartment(state: &CollectionState, player: PlayerId) -> bool {
    state.has_one(player, items::HABITAT_COMPARTMENT) || state.has_one(player, items::ATRIUM)
}

#[must_use]
pub fn has_specimen_tank(state: &CollectionState, player: PlayerId) -> bool {
    state.has_one(player, items::SPECIMEN_TANK) && has_utility_compartment(state, player)
}

#[must_use]
pub fn has_fission_reactor(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::FISSION_REACTOR_FRAGMENT, 3) && has_utility_compartment(state, player)
}

#[must_use]
pub fn has_bioreactor(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::BIOREACTOR_FRAGMENT, 2) && has_utility_compartment(state, player)
}

#[must_use]
pub fn has_thermal_plant(state: &CollectionState, player: PlayerId) -> bool {
    state.has(player, items::THERMAL_PLANT_FRAGMENT, 2)
        && state.has_one(player, items::POWER_RELAY_FRAGMENT)
}

/// The launch shield. With the Leviathan excluded outright the generator is
/// itemized on its own and only needs somewhere to mount: the Dry Dock and
/// Upgrade Console stand in for the hull chain.
#[must_use]
pub fn has_leviathan_shield(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
) -> bool {
    if options.include_leviathan.in_pool() {
        return has_leviathan(state, player, options, true)
            && state.has_one(player, items::LEVIATHAN_SHIELD_GENERATOR);
    }
    has_dry_dock(state, player)
        && has_upgrade_console(state, player)
        && state.has_one(player, items::LEVIATHAN_SHIELD_GENERATOR)
}

#[must_use]
pub fn has_ultra_capacity_tank(state: &CollectionState, player: PlayerId) -> bool {
    has_retrofit_station(state, player) && state.has_one(player, items::ULTRA_CAPACITY_TANK)
}

#[must_use]
pub fn has_lightweight_tank(state: &CollectionState, player: PlayerId) -> bool {
    has_retrofit_station(state, player) && state.has_one(player, items::LIGHTWEIGHT_TANK)
}

#[must_use]
pub fn has_hydro_fins(state: &CollectionState, player: PlayerId) -> bool {
    has_retrofit_station(state, player) && state.has_one(player, items::HYDRO_FINS)
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

    #[test]
    fn upgrade_console_requires_dry_dock() {
        let console_only = state_with(&[(items::UPGRADE_CONSOLE, 1)]);
        assert!(!has_upgrade_console(&console_only, PLAYER));

        let full = state_with(&[(items::UPGRADE_CONSOLE, 1), (items::DRY_DOCK_FRAGMENT, 2)]);
        assert!(has_upgrade_console(&full, PLAYER));
    }

    #[test]
    fn dart_is_hard_false_when_not_available() {
        let state = state_with(&[(items::DART_FRAGMENT, 3), (items::LAUNCH_BAY_FRAGMENT, 3)]);
        let available = Options::default();
        assert!(has_dart(&state, PLAYER, &available));

        for mode in [VehicleInclusion::StartingKnowledge, VehicleInclusion::Excluded] {
            let options = Options {
                include_dart: mode,
                ..Options::default()
            };
            assert!(!has_dart(&state, PLAYER, &options));
        }
    }

    #[test]
    fn depth_module_tiers_re_require_the_bench() {
        let mk1 = state_with(&[
            (items::UPGRADE_CONSOLE, 1),
            (items::DRY_DOCK_FRAGMENT, 2),
        ]);
        assert!(has_dart_depth_module_mk1(&mk1, PLAYER));
        assert!(!has_dart_depth_module_mk2(&mk1, PLAYER));

        let mk3 = state_with(&[
            (items::UPGRADE_CONSOLE, 1),
            (items::DRY_DOCK_FRAGMENT, 2),
            (items::RETROFIT_STATION_FRAGMENT, 3),
        ]);
        assert!(has_dart_depth_module_mk2(&mk3, PLAYER));
        assert!(has_dart_depth_module_mk3(&mk3, PLAYER));
    }

    #[test]
    fn shield_check_overrides_leviathan_exclusion() {
        let state = state_with(&[
            (items::LEVIATHAN_BRIDGE_FRAGMENT, 3),
            (items::LEVIATHAN_ENGINE_FRAGMENT, 3),
            (items::LEVIATHAN_HULL_FRAGMENT, 3),
            (items::LAUNCH_BAY_FRAGMENT, 3),
        ]);
        let out_of_logic = Options {
            include_leviathan: VehicleInclusion::StartingKnowledge,
            ..Options::default()
        };
        assert!(!has_leviathan(&state, PLAYER, &out_of_logic, false));
        assert!(has_leviathan(&state, PLAYER, &out_of_logic, true));
    }

    #[test]
    fn excluded_leviathan_shield_resolves_via_dock_and_console() {
        let options = Options {
            include_leviathan: VehicleInclusion::Excluded,
            ..Options::default()
        };
        let partial = state_with(&[(items::LEVIATHAN_SHIELD_GENERATOR, 1)]);
        assert!(!has_leviathan_shield(&partial, PLAYER, &options));

        let full = state_with(&[
            (items::LEVIATHAN_SHIELD_GENERATOR, 1),
            (items::DRY_DOCK_FRAGMENT, 2),
            (items::UPGRADE_CONSOLE, 1),
        ]);
        assert!(has_leviathan_shield(&full, PLAYER, &options));
    }

    #[test]
    fn either_compartment_serves_as_utility_room() {
        let habitat = state_with(&[(items::HABITAT_COMPARTMENT, 1)]);
        let atrium = state_with(&[(items::ATRIUM, 1)]);
        assert!(has_utility_compartment(&habitat, PLAYER));
        assert!(has_utility_compartment(&atrium, PLAYER));
        assert!(!has_utility_compartment(&CollectionState::new(), PLAYER));
    }
}
