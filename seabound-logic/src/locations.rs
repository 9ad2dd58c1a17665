//! Static location catalog: world positions, tool gates, and event names.
use serde::{Deserialize, Serialize};

/// Stable wire identifier of a location.
pub type LocationId = u32;

/// World-space point. Y points up, so depth below the surface is `-y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Depth below the surface in meters.
    #[must_use]
    pub fn depth(&self) -> f32 {
        -self.y
    }

    /// Horizontal distance from the drop point at the map origin.
    #[must_use]
    pub fn center_distance(&self) -> f32 {
        self.x.hypot(self.z)
    }

    /// Straight-line distance to another point.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

/// Which one-way tool gate a location allows the player to slip past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Bypass {
    #[default]
    None,
    Plasma,
    Tractor,
    Both,
}

impl Bypass {
    #[must_use]
    pub const fn covers_plasma_cutter(self) -> bool {
        matches!(self, Self::Plasma | Self::Both)
    }

    #[must_use]
    pub const fn covers_tractor_cannon(self) -> bool {
        matches!(self, Self::Tractor | Self::Both)
    }
}

/// One catalog row. Ids are wire identifiers shared with the client and must
/// never be renumbered between releases.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocationRecord {
    pub id: LocationId,
    pub name: &'static str,
    pub position: Vector,
    pub needs_plasma_cutter: bool,
    pub needs_tractor_cannon: bool,
    pub bypass: Bypass,
}

const fn open(id: LocationId, name: &'static str, x: f32, y: f32, z: f32) -> LocationRecord {
    LocationRecord {
        id,
        name,
        position: Vector::new(x, y, z),
        needs_plasma_cutter: false,
        needs_tractor_cannon: false,
        bypass: Bypass::None,
    }
}

const fn plasma_gated(
    id: LocationId,
    name: &'static str,
    x: f32,
    y: f32,
    z: f32,
    bypass: Bypass,
) -> LocationRecord {
    LocationRecord {
        id,
        name,
        position: Vector::new(x, y, z),
        needs_plasma_cutter: true,
        needs_tractor_cannon: false,
        bypass,
    }
}

const fn tractor_gated(
    id: LocationId,
    name: &'static str,
    x: f32,
    y: f32,
    z: f32,
    bypass: Bypass,
) -> LocationRecord {
    LocationRecord {
        id,
        name,
        position: Vector::new(x, y, z),
        needs_plasma_cutter: false,
        needs_tractor_cannon: true,
        bypass,
    }
}

/// Resting place of the Calypso; center of the fallout sphere.
pub const CALYPSO_WRECK: Vector = Vector::new(987.0, 0.0, -241.5);

/// The Meridian Launch goal advance-places its platform blueprint here.
pub const CAPTAIN_TERMINAL_ID: LocationId = 61031;

/// The Repair Calypso Drive goal delegates to this location's own rule.
pub const DRIVE_ROOM_TERMINAL_ID: LocationId = 61032;

// The two data pads sit on a collapsed deck reachable from either side of
// the hull breach. They skip the ordinary gate checks entirely and resolve
// purely on the one-way tools.
pub const RELAY_RING_DATA_PAD_ID: LocationId = 61033;
pub const LAB_DATA_PAD_ID: LocationId = 61034;

pub const LOCATIONS: &[LocationRecord] = &[
    // Shallows around the drop point.
    open(61001, "Shallows - Drift Seed Cache", 12.0, -8.0, 44.0),
    open(61002, "Shallows - Capsized Lifepod", -96.0, -18.0, 130.0),
    open(61003, "Kelp Forest - Tangle Data Pad", 210.0, -42.0, -85.0),
    open(61004, "Kelp Forest - Anchor Cache", -140.0, -55.0, 220.0),
    open(61005, "Coral Shelf - Ridge Cache", 330.0, -71.0, 105.0),
    open(61006, "Coral Shelf - Hollow Data Pad", 95.0, -64.0, -310.0),
    open(61007, "Siltwater Banks - Buried Crate", -355.0, -88.0, -60.0),
    open(61008, "Siltwater Banks - Survey Buoy", 60.0, -25.0, 385.0),
    open(61009, "Lifepod Nine", -430.0, -2.0, 160.0),
    open(61010, "Lifepod Thirteen", 150.0, -12.0, -520.0),
    // Mid-depth ridges and passes.
    open(61011, "Bleached Reefs - Overhang Cache", 640.0, -145.0, 480.0),
    open(61012, "Bleached Reefs - Data Pad", 720.0, -180.0, -390.0),
    open(61013, "Mushroom Grove - Stem Cache", -690.0, -160.0, 540.0),
    open(61014, "Mushroom Grove - Canopy Data Pad", -580.0, -120.0, -700.0),
    open(61015, "Grand Trench - Ledge Cache", 90.0, -310.0, 820.0),
    open(61016, "Grand Trench - Wall Data Pad", -130.0, -360.0, -880.0),
    open(61017, "Basalt Gardens - Vent Cache", 880.0, -420.0, 260.0),
    open(61018, "Basalt Gardens - Pillar Data Pad", -940.0, -380.0, 120.0),
    open(61019, "Drowned Pass - Saddle Cache", 1020.0, -280.0, -450.0),
    open(61020, "Drowned Pass - Collapsed Arch", 760.0, -240.0, -620.0),
    // Wreck interiors gated by one-way tools.
    plasma_gated(61021, "Wreck of the Pelican - Cargo Hold", -820.0, -210.0, 330.0, Bypass::None),
    plasma_gated(61022, "Wreck of the Pelican - Terminal", -825.0, -225.0, 345.0, Bypass::Plasma),
    plasma_gated(61023, "Wreck of the Gull - Galley Cache", 540.0, -190.0, 760.0, Bypass::Plasma),
    tractor_gated(61024, "Wreck of the Gull - Engine Data Pad", 548.0, -205.0, 772.0, Bypass::Tractor),
    plasma_gated(61025, "Wreck of the Heron - Medbay Cache", -240.0, -330.0, -910.0, Bypass::Both),
    tractor_gated(61026, "Wreck of the Heron - Stowage", -255.0, -340.0, -925.0, Bypass::None),
    plasma_gated(61027, "Wreck of the Tern - Bridge Data Pad", 960.0, -150.0, 530.0, Bypass::None),
    tractor_gated(61028, "Wreck of the Tern - Locker Cache", 970.0, -160.0, 540.0, Bypass::Tractor),
    // The Calypso herself, deep inside the fallout sphere.
    open(61029, "Calypso - Ration Store", 990.0, -15.0, -235.0),
    open(61030, "Calypso - Seabed Debris Field", 940.0, -60.0, -180.0),
    tractor_gated(CAPTAIN_TERMINAL_ID, "Calypso - Captain's Data Terminal", 1002.0, 8.0, -250.0, Bypass::None),
    tractor_gated(DRIVE_ROOM_TERMINAL_ID, "Calypso - Drive Room - Upgrade Terminal", 995.0, -4.0, -262.0, Bypass::None),
    open(RELAY_RING_DATA_PAD_ID, "Calypso - Relay Ring Data Pad", 1008.0, 6.0, -244.0),
    open(LAB_DATA_PAD_ID, "Calypso - Lab Data Pad", 1011.0, 2.0, -239.0),
    tractor_gated(61035, "Calypso - Cargo Bay Cache", 985.0, -10.0, -228.0, Bypass::Tractor),
    plasma_gated(61036, "Calypso - Crew Quarters Cache", 998.0, 5.0, -256.0, Bypass::None),
    // Deep biomes.
    open(61037, "Ghost Vents - Chimney Cache", -310.0, -520.0, 640.0),
    open(61038, "Ghost Vents - Shelf Data Pad", 420.0, -560.0, -700.0),
    open(61039, "Sunless Meadow - Bloom Cache", -720.0, -610.0, -240.0),
    open(61040, "Sunless Meadow - Data Pad", -760.0, -640.0, -180.0),
    plasma_gated(61041, "Hadal Shelf - Outpost Torpedo Bay", 240.0, -690.0, 910.0, Bypass::Plasma),
    open(61042, "Hadal Shelf - Outpost Data Pad", 255.0, -700.0, 925.0),
    open(61043, "Smoker Flats - Vent Core Cache", -90.0, -740.0, -1050.0),
    open(61044, "Smoker Flats - Relay Data Pad", -120.0, -760.0, -1080.0),
    open(61045, "Glass Forest - Spire Cache", 830.0, -810.0, -590.0),
    open(61046, "Glass Forest - Hollow Data Pad", 860.0, -830.0, -610.0),
    // The abyss.
    open(61047, "Ribbon Chasm - Ledge Cache", -420.0, -960.0, 380.0),
    open(61048, "Ribbon Chasm - Fallen Gantry", -450.0, -990.0, 410.0),
    open(61049, "Cold Seep Basin - Brine Cache", 510.0, -1040.0, -330.0),
    open(61050, "Cold Seep Basin - Data Pad", 530.0, -1060.0, -350.0),
    open(61051, "Warden Gate - Antechamber Cache", -180.0, -1150.0, -760.0),
    open(61052, "Warden Gate - Murals Data Pad", -200.0, -1170.0, -780.0),
    open(61053, "Deep Warrens - Nest Cache", 300.0, -1240.0, 690.0),
    open(61054, "Deep Warrens - Skeleton Data Pad", 320.0, -1260.0, 710.0),
    open(61055, "Mariana Throat - Shelf Cache", -640.0, -1340.0, -120.0),
    open(61056, "Mariana Throat - Choke Data Pad", -660.0, -1360.0, -140.0),
    open(61057, "Warden Vault - Containment Record", 90.0, -1420.0, 205.0),
    open(61058, "Warden Vault - Core Data Pad", 110.0, -1443.0, 225.0),
    // Far-flung surface finds.
    open(61059, "Lifepod Four", 610.0, -3.0, -840.0),
    open(61060, "Lifepod Nineteen", -1050.0, -5.0, 470.0),
    open(61061, "Floating Isle - Cliff Cache", -1290.0, -20.0, -680.0),
];

/// Synthetic event locations; exactly one is created per run, matching the
/// configured goal, and it holds the locked Victory item.
pub const EVENTS: [&str; 4] = [
    "Meridian Launch",
    "Disable Interdiction",
    "Deep Resonance",
    "Repair Calypso Drive",
];

/// The locked event item; holding it is the win condition.
pub const VICTORY: &str = "Victory";

/// Look a record up by id.
#[must_use]
pub fn find_location(id: LocationId) -> Option<&'static LocationRecord> {
    LOCATIONS.iter().find(|record| record.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_and_names_are_unique() {
        let mut ids = HashSet::new();
        let mut names = HashSet::new();
        for record in LOCATIONS {
            assert!(ids.insert(record.id), "duplicate location id {}", record.id);
            assert!(names.insert(record.name), "duplicate location name {}", record.name);
        }
    }

    #[test]
    fn special_locations_exist() {
        for id in [
            CAPTAIN_TERMINAL_ID,
            DRIVE_ROOM_TERMINAL_ID,
            RELAY_RING_DATA_PAD_ID,
            LAB_DATA_PAD_ID,
        ] {
            assert!(find_location(id).is_some(), "missing special location {id}");
        }
    }

    #[test]
    fn physical_item_count_matches_location_count() {
        assert_eq!(
            crate::items::total_physical_count() as usize,
            LOCATIONS.len(),
            "every location must receive exactly one catalog item",
        );
    }

    #[test]
    fn every_goal_resolves_to_a_known_event() {
        use crate::options::Goal;
        for goal in [
            Goal::MeridianLaunch,
            Goal::DisableInterdiction,
            Goal::DeepResonance,
            Goal::RepairCalypsoDrive,
        ] {
            assert!(EVENTS.contains(&goal.event_name()), "{:?}", goal);
        }
    }

    #[test]
    fn depth_is_negated_y() {
        let deepest = find_location(61058).unwrap();
        assert!((deepest.position.depth() - 1443.0).abs() < f32::EPSILON);
    }
}
