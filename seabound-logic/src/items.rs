//! Static item catalog: every placeable item, its pool count, and wire tags.
use serde::{Deserialize, Serialize};

/// Stable wire identifier of an item.
pub type ItemId = u32;

/// Fill-relevance of an item, as understood by the external fill algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Required by logic to complete the run.
    Progression,
    /// Helpful but never required.
    Useful,
    /// Pure padding.
    Filler,
    /// Actively unhelpful; reserved for clients that understand it.
    Trap,
}

/// Broad shape of the unlock, used by the client to stage it in-game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Fragment,
    Blueprint,
    Resource,
}

/// One catalog row. `count` is the number of physical copies that enter the
/// pool directly; filler caches carry zero and are drawn on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRecord {
    pub id: ItemId,
    pub name: &'static str,
    pub count: u32,
    pub classification: Classification,
    pub kind: ItemKind,
    /// Client-side tech tag unlocked by this item.
    pub tech_type: &'static str,
}

const fn item(
    id: ItemId,
    name: &'static str,
    count: u32,
    classification: Classification,
    kind: ItemKind,
    tech_type: &'static str,
) -> ItemRecord {
    ItemRecord {
        id,
        name,
        count,
        classification,
        kind,
        tech_type,
    }
}

// Item names double as wire identifiers in the multiworld; the constants
// below are the only spellings the rest of the crate uses.
pub const GLIDER_FRAGMENT: &str = "Glider Fragment";
pub const RETROFIT_STATION_FRAGMENT: &str = "Retrofit Station Fragment";
pub const LAUNCH_BAY_FRAGMENT: &str = "Launch Bay Fragment";
pub const DRY_DOCK_FRAGMENT: &str = "Dry Dock Fragment";
pub const UPGRADE_CONSOLE: &str = "Upgrade Console";
pub const PLASMA_CUTTER_FRAGMENT: &str = "Plasma Cutter Fragment";
pub const STASIS_LANCE_FRAGMENT: &str = "Stasis Lance Fragment";
pub const TRACTOR_CANNON_FRAGMENT: &str = "Tractor Cannon Fragment";
pub const RADIATION_SUIT: &str = "Radiation Suit";
pub const SPECIMEN_TANK: &str = "Specimen Tank";
pub const HABITAT_COMPARTMENT: &str = "Habitat Compartment";
pub const ATRIUM: &str = "Atrium";
pub const LEVIATHAN_SHIELD_GENERATOR: &str = "Leviathan Shield Generator";
pub const MERIDIAN_LAUNCH_PLATFORM: &str = "Meridian Launch Platform";
pub const MERIDIAN_GANTRY: &str = "Meridian Gantry";
pub const MERIDIAN_BOOSTERS: &str = "Meridian Boosters";
pub const MERIDIAN_FUEL_RESERVE: &str = "Meridian Fuel Reserve";
pub const MERIDIAN_COCKPIT: &str = "Meridian Cockpit";
pub const ION_POWER_CELL: &str = "Ion Power Cell";
pub const ION_BATTERY: &str = "Ion Battery";

pub const EXTERIOR_PLANTER: &str = "Exterior Planter";
pub const FISSION_REACTOR_FRAGMENT: &str = "Fission Reactor Fragment";
pub const BIOREACTOR_FRAGMENT: &str = "Bioreactor Fragment";
pub const THERMAL_PLANT_FRAGMENT: &str = "Thermal Plant Fragment";
pub const POWER_RELAY_FRAGMENT: &str = "Power Relay Fragment";
pub const ULTRA_CAPACITY_TANK: &str = "Ultra Capacity Tank";
pub const LIGHTWEIGHT_TANK: &str = "Lightweight Tank";
pub const HYDRO_FINS: &str = "Hydro Fins";

pub const DART_FRAGMENT: &str = "Dart Fragment";
pub const EXOSUIT_FRAGMENT: &str = "Exosuit Fragment";
pub const EXOSUIT_TOW_CANNON_FRAGMENT: &str = "Exosuit Tow Cannon Fragment";
pub const LEVIATHAN_BRIDGE_FRAGMENT: &str = "Leviathan Bridge Fragment";
pub const LEVIATHAN_ENGINE_FRAGMENT: &str = "Leviathan Engine Fragment";
pub const LEVIATHAN_HULL_FRAGMENT: &str = "Leviathan Hull Fragment";
pub const LEVIATHAN_DEPTH_MODULE_MK1: &str = "Leviathan Depth Module MK1";

pub const ALLOY_CACHE: &str = "Alloy Cache";
pub const GLASS_CACHE: &str = "Glass Cache";
pub const SALVAGE_CACHE: &str = "Salvage Cache";
pub const RATION_PACK: &str = "Ration Pack";
pub const MED_KIT: &str = "Med Kit";

pub const STASIS_LANCE_FRAGMENT_ID: ItemId = 64007;
pub const TRACTOR_CANNON_FRAGMENT_ID: ItemId = 64008;

/// Items with no vehicle attachment: tools, suits, base pieces, rocket parts.
pub const BASE_ITEMS: &[ItemRecord] = &[
    item(64001, GLIDER_FRAGMENT, 2, Classification::Progression, ItemKind::Fragment, "Glider"),
    item(64002, RETROFIT_STATION_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "RetrofitStation"),
    item(64003, LAUNCH_BAY_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "LaunchBay"),
    item(64004, DRY_DOCK_FRAGMENT, 2, Classification::Progression, ItemKind::Fragment, "DryDock"),
    item(64005, UPGRADE_CONSOLE, 1, Classification::Progression, ItemKind::Blueprint, "UpgradeConsole"),
    item(64006, PLASMA_CUTTER_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "PlasmaCutter"),
    item(STASIS_LANCE_FRAGMENT_ID, STASIS_LANCE_FRAGMENT, 2, Classification::Progression, ItemKind::Fragment, "StasisLance"),
    item(TRACTOR_CANNON_FRAGMENT_ID, TRACTOR_CANNON_FRAGMENT, 2, Classification::Progression, ItemKind::Fragment, "TractorCannon"),
    item(64009, RADIATION_SUIT, 1, Classification::Progression, ItemKind::Blueprint, "RadiationSuit"),
    item(64010, SPECIMEN_TANK, 1, Classification::Progression, ItemKind::Blueprint, "SpecimenTank"),
    item(64011, HABITAT_COMPARTMENT, 1, Classification::Progression, ItemKind::Blueprint, "HabitatCompartment"),
    item(64012, ATRIUM, 1, Classification::Progression, ItemKind::Blueprint, "Atrium"),
    item(64013, LEVIATHAN_SHIELD_GENERATOR, 1, Classification::Progression, ItemKind::Blueprint, "LeviathanShieldGenerator"),
    item(64014, MERIDIAN_LAUNCH_PLATFORM, 1, Classification::Progression, ItemKind::Blueprint, "MeridianLaunchPlatform"),
    item(64015, MERIDIAN_GANTRY, 1, Classification::Progression, ItemKind::Blueprint, "MeridianGantry"),
    item(64016, MERIDIAN_BOOSTERS, 1, Classification::Progression, ItemKind::Blueprint, "MeridianBoosters"),
    item(64017, MERIDIAN_FUEL_RESERVE, 1, Classification::Progression, ItemKind::Blueprint, "MeridianFuelReserve"),
    item(64018, MERIDIAN_COCKPIT, 1, Classification::Progression, ItemKind::Blueprint, "MeridianCockpit"),
    item(64019, ION_POWER_CELL, 1, Classification::Progression, ItemKind::Blueprint, "IonPowerCell"),
    item(64020, ION_BATTERY, 1, Classification::Progression, ItemKind::Blueprint, "IonBattery"),
];

/// Depth aids that work without any vehicle. Pooled at full count every run;
/// promoted to progression when the hardcore regime applies.
pub const NON_VEHICLE_DEPTH_ITEMS: &[ItemRecord] = &[
    item(64021, EXTERIOR_PLANTER, 1, Classification::Useful, ItemKind::Blueprint, "ExteriorPlanter"),
    item(64022, FISSION_REACTOR_FRAGMENT, 3, Classification::Useful, ItemKind::Fragment, "FissionReactor"),
    item(64023, BIOREACTOR_FRAGMENT, 2, Classification::Useful, ItemKind::Fragment, "Bioreactor"),
    item(64024, THERMAL_PLANT_FRAGMENT, 2, Classification::Useful, ItemKind::Fragment, "ThermalPlant"),
    item(64025, POWER_RELAY_FRAGMENT, 1, Classification::Useful, ItemKind::Fragment, "PowerRelay"),
    item(64026, ULTRA_CAPACITY_TANK, 1, Classification::Useful, ItemKind::Blueprint, "UltraCapacityTank"),
    item(64027, LIGHTWEIGHT_TANK, 1, Classification::Useful, ItemKind::Blueprint, "LightweightTank"),
    item(64028, HYDRO_FINS, 1, Classification::Useful, ItemKind::Blueprint, "HydroFins"),
];

pub const DART_ITEMS: &[ItemRecord] = &[
    item(64031, DART_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "Dart"),
];

pub const EXOSUIT_ITEMS: &[ItemRecord] = &[
    item(64032, EXOSUIT_FRAGMENT, 4, Classification::Progression, ItemKind::Fragment, "Exosuit"),
    item(64033, EXOSUIT_TOW_CANNON_FRAGMENT, 2, Classification::Useful, ItemKind::Fragment, "ExosuitTowCannon"),
];

pub const LEVIATHAN_ITEMS: &[ItemRecord] = &[
    item(64034, LEVIATHAN_BRIDGE_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "LeviathanBridge"),
    item(64035, LEVIATHAN_ENGINE_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "LeviathanEngine"),
    item(64036, LEVIATHAN_HULL_FRAGMENT, 3, Classification::Progression, ItemKind::Fragment, "LeviathanHull"),
    item(64037, LEVIATHAN_DEPTH_MODULE_MK1, 1, Classification::Progression, ItemKind::Blueprint, "LeviathanDepthModuleMK1"),
];

/// Resource caches drawn into leftover slots by weighted selection.
pub const FILLER_ITEMS: &[ItemRecord] = &[
    item(64041, ALLOY_CACHE, 0, Classification::Filler, ItemKind::Resource, "AlloyCache"),
    item(64042, GLASS_CACHE, 0, Classification::Filler, ItemKind::Resource, "GlassCache"),
    item(64043, SALVAGE_CACHE, 0, Classification::Filler, ItemKind::Resource, "SalvageCache"),
    item(64044, RATION_PACK, 0, Classification::Filler, ItemKind::Resource, "RationPack"),
    item(64045, MED_KIT, 0, Classification::Filler, ItemKind::Resource, "MedKit"),
];

/// Grouped items: a representative id placed for the group, with the member
/// ids whose physical copies travel together as one inseparable pair. Each
/// group reserves exactly two pool slots out of the extras budget.
pub const GROUP_ITEMS: &[(ItemId, &[ItemId])] = &[
    (STASIS_LANCE_FRAGMENT_ID, &[STASIS_LANCE_FRAGMENT_ID]),
    (TRACTOR_CANNON_FRAGMENT_ID, &[TRACTOR_CANNON_FRAGMENT_ID]),
];

/// Pool slots one group reserves.
pub const GROUP_SLOTS: usize = 2;

/// Every catalog row, filler caches included.
pub fn all_items() -> impl Iterator<Item = &'static ItemRecord> {
    BASE_ITEMS
        .iter()
        .chain(NON_VEHICLE_DEPTH_ITEMS)
        .chain(DART_ITEMS)
        .chain(EXOSUIT_ITEMS)
        .chain(LEVIATHAN_ITEMS)
        .chain(FILLER_ITEMS)
}

/// Look a record up by its wire name.
#[must_use]
pub fn find_item(name: &str) -> Option<&'static ItemRecord> {
    all_items().find(|record| record.name == name)
}

/// Look a record up by id.
#[must_use]
pub fn find_item_by_id(id: ItemId) -> Option<&'static ItemRecord> {
    all_items().find(|record| record.id == id)
}

/// True when `name` belongs to the non-vehicle depth catalog, which the
/// balancer promotes to progression under the hardcore regime.
#[must_use]
pub fn is_non_vehicle_depth_item(name: &str) -> bool {
    NON_VEHICLE_DEPTH_ITEMS
        .iter()
        .any(|record| record.name == name)
}

/// Total physical copies across the whole catalog.
#[must_use]
pub fn total_physical_count() -> u32 {
    all_items().map(|record| record.count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_names_are_unique() {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for record in all_items() {
            assert!(ids.insert(record.id), "duplicate item id {}", record.id);
            assert!(names.insert(record.name), "duplicate item name {}", record.name);
        }
    }

    #[test]
    fn grouped_members_exist_with_paired_counts() {
        for (leader, members) in GROUP_ITEMS {
            let leader = find_item_by_id(*leader).unwrap();
            assert_eq!(leader.count as usize, GROUP_SLOTS);
            for member in *members {
                assert!(find_item_by_id(*member).is_some());
            }
        }
    }

    #[test]
    fn filler_caches_carry_no_direct_copies() {
        for record in FILLER_ITEMS {
            assert_eq!(record.count, 0);
            assert_eq!(record.classification, Classification::Filler);
        }
    }

    #[test]
    fn lookup_by_name_round_trips() {
        let record = find_item(GLIDER_FRAGMENT).unwrap();
        assert_eq!(record.count, 2);
        assert_eq!(find_item_by_id(record.id).unwrap().name, GLIDER_FRAGMENT);
        assert!(find_item("Sonic Screwdriver").is_none());
    }
}
