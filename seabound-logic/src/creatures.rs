//! Static creature catalog with scan-depth thresholds and behavior sets.
use crate::locations::LocationId;
use crate::options::AggressiveScanLogic;

/// Appended to a creature or flora name to form its scan location name.
pub const SCAN_SUFFIX: &str = " Scan";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Creature {
    pub id: LocationId,
    pub name: &'static str,
    /// Depth the player must be able to operate at to find and scan one.
    pub scan_depth: i32,
    pub aggressive: bool,
    /// Lays eggs that hatch inside a Specimen Tank.
    pub hatchable: bool,
    /// Only ever encountered by hatching; the tank is always required.
    pub containment_only: bool,
}

const fn creature(
    id: LocationId,
    name: &'static str,
    scan_depth: i32,
    aggressive: bool,
    hatchable: bool,
    containment_only: bool,
) -> Creature {
    Creature {
        id,
        name,
        scan_depth,
        aggressive,
        hatchable,
        containment_only,
    }
}

pub const ALL_CREATURES: &[Creature] = &[
    creature(62001, "Skimmer", 0, false, false, false),
    creature(62002, "Glowmote", 0, false, false, false),
    creature(62003, "Pebble Crab", 50, false, false, false),
    creature(62004, "Moon Jelly", 100, false, false, false),
    creature(62005, "Banner Eel", 150, true, true, false),
    creature(62006, "Dune Skate", 200, false, false, false),
    creature(62007, "Grotto Pup", 250, false, true, true),
    creature(62008, "Razor Maw", 250, true, false, false),
    creature(62009, "Siphon Squid", 300, false, true, false),
    creature(62010, "Lantern Ray", 400, false, false, false),
    creature(62011, "Gulper", 500, true, true, false),
    creature(62012, "Marrow Shark", 600, true, false, false),
    creature(62013, "Vent Strider", 700, false, false, false),
    creature(62014, "Pale Stalker", 800, true, true, false),
    creature(62015, "Chasm Wisp", 950, false, false, false),
    creature(62016, "Warden Eel", 1100, true, false, false),
    creature(62017, "Hollow Leviathan", 1300, true, false, false),
];

/// Look a record up by name.
#[must_use]
pub fn find_creature(name: &str) -> Option<&'static Creature> {
    ALL_CREATURES.iter().find(|record| record.name == name)
}

/// Creatures the chosen aggression-handling mode can actually reach.
///
/// Under `containment` the only sanctioned route is hatching, so aggressive
/// creatures that never lay eggs are left out of the sample pool; every other
/// mode samples from the full catalog.
#[must_use]
pub fn scan_pool(mode: AggressiveScanLogic) -> Vec<&'static Creature> {
    ALL_CREATURES
        .iter()
        .filter(|record| match mode {
            AggressiveScanLogic::Containment => !record.aggressive || record.hatchable,
            _ => true,
        })
        .collect()
}
