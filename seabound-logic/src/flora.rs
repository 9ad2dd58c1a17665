//! Static flora catalog. Flora scans follow the ordinary location rules at
//! the plant's position.
use crate::locations::{LocationId, Vector};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flora {
    pub id: LocationId,
    pub name: &'static str,
    pub position: Vector,
}

const fn flora(id: LocationId, name: &'static str, x: f32, y: f32, z: f32) -> Flora {
    Flora {
        id,
        name,
        position: Vector::new(x, y, z),
    }
}

pub const ALL_FLORA: &[Flora] = &[
    flora(63001, "Ribbon Kelp", 0.0, 0.0, 0.0),
    flora(63002, "Sun Fronds", 40.0, -12.0, 95.0),
    flora(63003, "Anchor Root", -250.0, -99.0, -690.0),
    flora(63004, "Blister Pod", 690.0, -137.0, 835.0),
    flora(63005, "Veil Palm", -318.0, -79.0, 247.0),
    flora(63006, "Lantern Vine", 358.0, -28.0, 1067.0),
    flora(63007, "Ember Moss", 930.0, -70.0, -200.0),
    flora(63008, "Brine Lily", -1264.0, -649.0, -215.0),
    flora(63009, "Ghost Fern", -780.0, -234.0, 950.0),
    flora(63010, "Deep Shroom", -807.0, -219.0, 892.0),
    flora(63011, "Crown Anemone", -797.0, -143.0, -152.0),
    flora(63012, "Pygmy Fan", -670.0, -190.0, 714.0),
    flora(63013, "Cove Tree", -860.0, -920.0, 340.0),
    flora(63014, "Spire Grass", 334.0, -87.0, 1013.0),
];

/// Look a record up by name.
#[must_use]
pub fn find_flora(name: &str) -> Option<&'static Flora> {
    ALL_FLORA.iter().find(|record| record.name == name)
}
