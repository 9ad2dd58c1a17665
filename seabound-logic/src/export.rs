//! Client-facing export payloads: plain data the downstream mod consumes to
//! reproduce the same logic locally. Keys are ordered maps so dumps are
//! byte-stable across runs.
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::items::{self, ItemId, ItemKind};
use crate::locations::{self, LocationId, Vector};
use crate::options::{AggressiveScanLogic, Goal, SlipThrough, VehicleInclusion};
use crate::world::World;

/// In-game tech id of the Plasma Cutter, used as a key in the logic dump.
pub const PLASMA_CUTTER_TECH_ID: &str = "611";

/// In-game tech id of the Tractor Cannon.
pub const TRACTOR_CANNON_TECH_ID: &str = "613";

/// Location id to world position, for the client's spawn table.
#[must_use]
pub fn location_positions() -> BTreeMap<LocationId, Vector> {
    locations::LOCATIONS
        .iter()
        .map(|record| (record.id, record.position))
        .collect()
}

/// The two tool tech-ids mapped to the location ids still gated by that tool
/// once bypass categories are accounted for.
#[must_use]
pub fn tool_gated_locations() -> BTreeMap<&'static str, Vec<LocationId>> {
    let mut payload = BTreeMap::new();
    payload.insert(
        PLASMA_CUTTER_TECH_ID,
        locations::LOCATIONS
            .iter()
            .filter(|record| record.needs_plasma_cutter && !record.bypass.covers_plasma_cutter())
            .map(|record| record.id)
            .collect(),
    );
    payload.insert(
        TRACTOR_CANNON_TECH_ID,
        locations::LOCATIONS
            .iter()
            .filter(|record| record.needs_tractor_cannon && !record.bypass.covers_tractor_cannon())
            .map(|record| record.id)
            .collect(),
    );
    payload
}

/// Item id to the tech tag the client unlocks for it.
#[must_use]
pub fn item_tech_types() -> BTreeMap<ItemId, &'static str> {
    items::all_items()
        .map(|record| (record.id, record.tech_type))
        .collect()
}

/// Grouped-item membership, representative id first.
#[must_use]
pub fn group_memberships() -> BTreeMap<ItemId, Vec<ItemId>> {
    items::GROUP_ITEMS
        .iter()
        .map(|(leader, members)| (*leader, members.to_vec()))
        .collect()
}

/// Item ids bucketed by kind, for the client's staging rules.
#[must_use]
pub fn items_by_kind() -> BTreeMap<&'static str, Vec<ItemId>> {
    let mut payload: BTreeMap<&'static str, Vec<ItemId>> = BTreeMap::new();
    for record in items::all_items() {
        payload.entry(kind_label(record.kind)).or_default().push(record.id);
    }
    payload
}

const fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Fragment => "fragment",
        ItemKind::Blueprint => "blueprint",
        ItemKind::Resource => "resource",
    }
}

/// Per-player slot data: the resolved goal, thresholds, randomized scan
/// lists, and every option value the client needs to mirror logic locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotData {
    pub goal: Goal,
    /// Normalized swim reach in plain meters; the legacy encoding never
    /// crosses this boundary.
    pub swim_rule: i32,
    pub consider_items: bool,
    pub glider_depth: i32,
    pub pre_glider_distance: f32,
    pub include_dart: VehicleInclusion,
    pub include_exosuit: VehicleInclusion,
    pub include_leviathan: VehicleInclusion,
    pub ignore_radiation: bool,
    pub slip_through: SlipThrough,
    pub aggressive_scan_logic: AggressiveScanLogic,
    pub creatures_to_scan: Vec<String>,
    pub flora_to_scan: Vec<String>,
    pub death_link: bool,
    pub free_samples: bool,
}

/// Assemble the slot data for a generated world.
#[must_use]
pub fn slot_data(world: &World) -> SlotData {
    let options = world.options();
    SlotData {
        goal: options.goal,
        swim_rule: options.base_swim_depth(),
        consider_items: options.items_considered(),
        glider_depth: options.glider_depth,
        pre_glider_distance: options.pre_glider_distance,
        include_dart: options.include_dart,
        include_exosuit: options.include_exosuit,
        include_leviathan: options.include_leviathan,
        ignore_radiation: options.ignore_radiation,
        slip_through: options.slip_through,
        aggressive_scan_logic: options.aggressive_scan_logic,
        creatures_to_scan: world
            .scan_targets()
            .creatures
            .iter()
            .map(ToString::to_string)
            .collect(),
        flora_to_scan: world
            .scan_targets()
            .flora
            .iter()
            .map(ToString::to_string)
            .collect(),
        death_link: options.death_link,
        free_samples: options.free_samples,
    }
}
