//! Location access evaluator: radiation, tool gates, mobility, and depth.
use crate::creatures::Creature;
use crate::depth::{self, Regime, SHALLOW_FREE_DEPTH};
use crate::flora::Flora;
use crate::locations::{
    CALYPSO_WRECK, LAB_DATA_PAD_ID, LocationRecord, RELAY_RING_DATA_PAD_ID, Vector,
};
use crate::options::{AggressiveScanLogic, Options};
use crate::predicates;
use crate::state::{CollectionState, PlayerId};

/// Radius of the fallout sphere around the Calypso wreck.
pub const RADIATION_RADIUS: f32 = 950.0;

/// Whether a point lies inside the Calypso fallout sphere.
#[must_use]
pub fn is_irradiated(position: &Vector) -> bool {
    position.distance_to(&CALYPSO_WRECK) < RADIATION_RADIUS
}

// Every failure path returns false rather than an error: a location that can
// never evaluate true simply cannot be placed, and the fill algorithm is the
// one that reports an unsatisfiable layout.
#[must_use]
pub fn can_access_location(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    regime: Regime,
    location: &LocationRecord,
) -> bool {
    if !survives_radiation(state, player, options, &location.position) {
        return false;
    }

    // The two collapsed-deck data pads skip the ordinary gate checks and
    // resolve purely on the one-way tools: either tool once the player is
    // willing to slip through, the Tractor Cannon otherwise.
    if location.id == RELAY_RING_DATA_PAD_ID || location.id == LAB_DATA_PAD_ID {
        if options.slip_through.allows_tractor_cannon() {
            return predicates::has_plasma_cutter(state, player)
                || predicates::has_tractor_cannon(state, player);
        }
        return predicates::has_tractor_cannon(state, player);
    }

    if location.needs_plasma_cutter
        && !predicates::has_plasma_cutter(state, player)
        && !(location.bypass.covers_plasma_cutter() && options.slip_through.allows_plasma_cutter())
    {
        return false;
    }

    if location.needs_tractor_cannon
        && !predicates::has_tractor_cannon(state, player)
        && !(location.bypass.covers_tractor_cannon()
            && options.slip_through.allows_tractor_cannon())
    {
        return false;
    }

    if !has_mobility_for(state, player, options, &location.position) {
        return false;
    }

    depth::max_depth(state, player, options, regime) as f32 >= location.position.depth()
}

/// Creature scan rule: the Glider to keep up, reach to the creature's depth,
/// and whatever the aggression mode demands on top.
#[must_use]
pub fn can_scan_creature(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    regime: Regime,
    creature: &Creature,
) -> bool {
    if !predicates::has_glider(state, player) {
        return false;
    }
    if depth::max_depth(state, player, options, regime) < creature.scan_depth {
        return false;
    }
    if creature.containment_only && !predicates::has_specimen_tank(state, player) {
        return false;
    }
    if creature.aggressive {
        if let Some(rule) = aggression_requirement(options.aggressive_scan_logic, creature) {
            return rule(state, player);
        }
    }
    true
}

/// Extra requirement an aggressive creature's scan carries, if any.
///
/// Non-hatchable aggressors can only be held still with the Stasis Lance, so
/// every mode except `none` demands it; hatchable ones follow the mode's
/// dispatch table.
#[must_use]
pub fn aggression_requirement(
    mode: AggressiveScanLogic,
    creature: &Creature,
) -> Option<fn(&CollectionState, PlayerId) -> bool> {
    if !creature.hatchable && mode != AggressiveScanLogic::None {
        return Some(predicates::has_stasis_lance);
    }
    match mode {
        AggressiveScanLogic::None => None,
        AggressiveScanLogic::Stasis => Some(predicates::has_stasis_lance),
        AggressiveScanLogic::Containment => Some(predicates::has_specimen_tank),
        AggressiveScanLogic::Either => Some(|state, player| {
            predicates::has_stasis_lance(state, player)
                || predicates::has_specimen_tank(state, player)
        }),
    }
}

/// Flora scan rule: the ordinary location checks at the plant's position.
#[must_use]
pub fn can_scan_flora(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    regime: Regime,
    flora: &Flora,
) -> bool {
    if !survives_radiation(state, player, options, &flora.position) {
        return false;
    }
    if !has_mobility_for(state, player, options, &flora.position) {
        return false;
    }
    depth::max_depth(state, player, options, regime) as f32 >= flora.position.depth()
}

fn survives_radiation(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    position: &Vector,
) -> bool {
    options.ignore_radiation
        || !is_irradiated(position)
        || state.has_one(player, crate::items::RADIATION_SUIT)
}

// The Glider unlocks nothing by itself but makes distance survivable; far or
// deep positions demand it or a swimming vehicle before depth even counts.
fn has_mobility_for(
    state: &CollectionState,
    player: PlayerId,
    options: &Options,
    position: &Vector,
) -> bool {
    let far = position.center_distance() > options.pre_glider_distance;
    let deep = position.depth() > SHALLOW_FREE_DEPTH as f32;
    if !far && !deep {
        return true;
    }
    predicates::has_glider(state, player)
        || predicates::has_dart(state, player, options)
        || predicates::has_leviathan(state, player, options, false)
}
