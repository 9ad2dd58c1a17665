//! Depth model: swim reach, per-vehicle tiers, and the regime split.
use serde::{Deserialize, Serialize};

use crate::options::Options;
use crate::predicates;
use crate::state::{CollectionState, PlayerId};

/// Depth of the interdiction array; the deepest point logic ever demands.
pub const INTERDICTION_DEPTH: i32 = 1444;

/// Depth of the resonance chamber.
pub const RESONANCE_DEPTH: i32 = 900;

/// Depth reachable near the surface with no mobility aid at all.
pub const SHALLOW_FREE_DEPTH: i32 = 200;

const DART_TIER_DEPTHS: [i32; 4] = [200, 300, 500, 900];
const LEVIATHAN_TIER_DEPTHS: [i32; 4] = [500, 900, 1300, 1700];
const EXOSUIT_TIER_DEPTHS: [i32; 3] = [900, 1300, 1700];

/// Flat depth granted by an Exterior Planter in the hardcore regime.
const PLANTER_DEPTH: i32 = 200;

/// Depth granted by any of the three late-game generators; each is enough to
/// finish the game on its own, so they substitute rather than stack.
const GENERATOR_DEPTH: i32 = 1500;

/// Prior reach needed before raw fissile ore (and so the Fission Reactor)
/// is obtainable.
const FISSION_ORE_DEPTH: i32 = 250;

/// How depth contributions combine for the whole run.
///
/// Chosen once per generation from the options alone and passed everywhere
/// explicitly; the same value also drives the pool balancer's progression
/// promotions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    /// Swim reach plus the best vehicle.
    Vehicle,
    /// No workable vehicle chain: swim reach plus base-building depth.
    Hardcore,
}

impl Regime {
    /// Pick the regime for this run.
    ///
    /// The vehicle regime applies while any deep-capable chain could exist:
    /// either a heavy vehicle is in logic, or the feasibility pre-check shows
    /// a best-case swimmer in a topped-out Dart clears the interdiction
    /// depth. Only when all of that fails does logic fall back to hardcore
    /// base-building.
    #[must_use]
    pub fn select(options: &Options) -> Self {
        let dart_can_make_it = options.include_dart.in_logic()
            && theoretical_swim_depth(options) + DART_TIER_DEPTHS[3] > INTERDICTION_DEPTH - 1;
        if !dart_can_make_it
            && !options.include_exosuit.in_logic()
            && !options.include_leviathan.in_logic()
        {
            Self::Hardcore
        } else {
            Self::Vehicle
        }
    }
}

/// Best-case swim reach assuming every swim aid is eventually held. Used only
/// by the feasibility pre-check, never for real reachability.
#[must_use]
pub fn theoretical_swim_depth(options: &Options) -> i32 {
    let mut depth = options.base_swim_depth();
    if options.items_considered() {
        depth += options.glider_depth + 150;
    }
    depth
}

/// Swim reach for an actual state: configured base plus worn-equipment bonus.
#[must_use]
pub fn swim_depth(state: &CollectionState, player: PlayerId, options: &Options) -> i32 {
    options.base_swim_depth() + item_bonus_depth(state, player, options)
}

// Swim bonus rules: the Glider strictly dominates fins, so the two never
// stack, and gear that would slow a route down stays home. The Lightweight
// Tank drags while gliding, so only the Ultra tank improves that route.
fn item_bonus_depth(state: &CollectionState, player: PlayerId, options: &Options) -> i32 {
    if !options.items_considered() {
        return 0;
    }

    let tank_bonus = if predicates::has_ultra_capacity_tank(state, player) {
        100
    } else if predicates::has_lightweight_tank(state, player) {
        25
    } else {
        0
    };

    let mut best = tank_bonus;
    if predicates::has_hydro_fins(state, player) {
        best = best.max(50 + tank_bonus);
    }
    if predicates::has_glider(state, player) {
        let glider_tank = if predicates::has_ultra_capacity_tank(state, player) {
            150
        } else {
            25
        };
        best = best.max(options.glider_depth + glider_tank);
    }
    best
}

/// Operating depth of the Dart, zero when it is not workable.
#[must_use]
pub fn dart_max_depth(state: &CollectionState, player: PlayerId, options: &Options) -> i32 {
    if !predicates::has_dart(state, player, options) {
        return 0;
    }
    if predicates::has_dart_depth_module_mk3(state, player) {
        return DART_TIER_DEPTHS[3];
    }
    if predicates::has_dart_depth_module_mk2(state, player) {
        return DART_TIER_DEPTHS[2];
    }
    if predicates::has_dart_depth_module_mk1(state, player) {
        return DART_TIER_DEPTHS[1];
    }
    DART_TIER_DEPTHS[0]
}

/// Operating depth of the Leviathan, zero when it is not workable.
#[must_use]
pub fn leviathan_max_depth(state: &CollectionState, player: PlayerId, options: &Options) -> i32 {
    if !predicates::has_leviathan(state, player, options, false) {
        return 0;
    }
    if predicates::has_leviathan_depth_module_mk3(state, player) {
        return LEVIATHAN_TIER_DEPTHS[3];
    }
    if predicates::has_leviathan_depth_module_mk2(state, player) {
        return LEVIATHAN_TIER_DEPTHS[2];
    }
    if predicates::has_leviathan_depth_module_mk1(state, player) {
        return LEVIATHAN_TIER_DEPTHS[1];
    }
    LEVIATHAN_TIER_DEPTHS[0]
}

/// Operating depth of the Exosuit, zero when it is not workable.
#[must_use]
pub fn exosuit_max_depth(state: &CollectionState, player: PlayerId, options: &Options) -> i32 {
    if !predicates::has_exosuit(state, player, options) {
        return 0;
    }
    if predicates::has_exosuit_depth_module_mk2(state, player) {
        return EXOSUIT_TIER_DEPTHS[2];
    }
    if predicates::has_exosuit_depth_module_mk1(state, player) {
        return EXOSUIT_TIER_DEPTHS[1];
    }
    EXOSUIT_TIER_DEPTHS[0]
}

// Base-building depth for runs with no workable deep vehicle: planter first,
// then whichever late-game generator is up. Fission only counts once the
// prior reach covers the ore it burns.
fn hardcore_depth(state: &CollectionState, player: PlayerId, prior_depth: i32) -> i32 {
    let mut depth = 0;
    if predicates::has_exterior_planter(state, player) {
        depth += PLANTER_DEPTH;
    }

    let fission = if prior_depth + depth >= FISSION_ORE_DEPTH
        && predicates::has_fission_reactor(state, player)
    {
        GENERATOR_DEPTH
    } else {
        0
    };
    let bio = if predicates::has_bioreactor(state, player) {
        GENERATOR_DEPTH
    } else {
        0
    };
    let thermal = if predicates::has_thermal_plant(state, player) {
        GENERATOR_DEPTH
    } else {
        0
    };

    depth + fission.max(bio).max(thermal)
}

/// Maximum operating depth for the state under the selected regime.
#[must_use]
pub fn max_depth(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    regime: Regime,
) -> i32 {
    let swim = swim_depth(state, player, options);
    match regime {
        Regime::Hardcore => swim + hardcore_depth(state, player, swim),
        Regime::Vehicle => {
            swim + dart_max_depth(state, player, options)
                .max(leviathan_max_depth(state, player, options))
                .max(exosuit_max_depth(state, player, options))
        }
    }
}
