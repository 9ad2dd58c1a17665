//! Per-generation configuration snapshot and start-time validation.
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Highest swim-rule value interpreted as plain meters. Anything above it is
/// the legacy encoding: meters scaled by ten, with item bonuses forced on.
pub const SWIM_RULE_DIRECT_MAX: i32 = 999;
const SWIM_RULE_SCALED_MAX: i32 = 9990;

/// Win condition selected for the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Assemble and launch the Meridian escape rocket.
    #[default]
    MeridianLaunch,
    /// Reach the interdiction array at the bottom of the Warden Vault.
    DisableInterdiction,
    /// Reach the resonance chamber depth.
    DeepResonance,
    /// Restore the Calypso's drive from its drive room terminal.
    RepairCalypsoDrive,
}

impl Goal {
    /// Name of the synthetic event location this goal compiles into.
    #[must_use]
    pub const fn event_name(self) -> &'static str {
        match self {
            Self::MeridianLaunch => "Meridian Launch",
            Self::DisableInterdiction => "Disable Interdiction",
            Self::DeepResonance => "Deep Resonance",
            Self::RepairCalypsoDrive => "Repair Calypso Drive",
        }
    }
}

/// How a vehicle participates in the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VehicleInclusion {
    /// Items in the pool and the vehicle counted by logic.
    #[default]
    Available,
    /// Items in the pool, but logic never expects the vehicle to be used.
    StartingKnowledge,
    /// Items diverted to filler slots; the vehicle does not exist this run.
    Excluded,
}

impl VehicleInclusion {
    /// Whether the reachability logic may count on this vehicle.
    #[must_use]
    pub const fn in_logic(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Whether this vehicle's items enter the pool at full count.
    #[must_use]
    pub const fn in_pool(self) -> bool {
        !matches!(self, Self::Excluded)
    }
}

/// Which one-way tool gates the player is willing to slip past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SlipThrough {
    #[default]
    None,
    PlasmaCutter,
    TractorCannon,
    Both,
}

impl SlipThrough {
    #[must_use]
    pub const fn allows_plasma_cutter(self) -> bool {
        matches!(self, Self::PlasmaCutter | Self::Both)
    }

    #[must_use]
    pub const fn allows_tractor_cannon(self) -> bool {
        matches!(self, Self::TractorCannon | Self::Both)
    }
}

/// How logic expects aggressive creatures to be scanned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AggressiveScanLogic {
    /// No extra requirement; the player scans on approach.
    None,
    /// Freeze the creature with the Stasis Lance.
    #[default]
    Stasis,
    /// Hatch the creature inside a Specimen Tank.
    Containment,
    /// Either route satisfies logic.
    Either,
}

/// Weight table for the random filler caches drawn into leftover slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FillerWeights {
    pub alloy: u32,
    pub glass: u32,
    pub salvage: u32,
    pub rations: u32,
    pub med_kits: u32,
}

impl Default for FillerWeights {
    fn default() -> Self {
        Self {
            alloy: 40,
            glass: 20,
            salvage: 20,
            rations: 10,
            med_kits: 10,
        }
    }
}

impl FillerWeights {
    /// Filler item names paired with their configured weights, in draw order.
    #[must_use]
    pub const fn pairs(&self) -> [(&'static str, u32); 5] {
        [
            (crate::items::ALLOY_CACHE, self.alloy),
            (crate::items::GLASS_CACHE, self.glass),
            (crate::items::SALVAGE_CACHE, self.salvage),
            (crate::items::RATION_PACK, self.rations),
            (crate::items::MED_KIT, self.med_kits),
        ]
    }

    #[must_use]
    pub const fn total(&self) -> u64 {
        self.alloy as u64
            + self.glass as u64
            + self.salvage as u64
            + self.rations as u64
            + self.med_kits as u64
    }
}

/// Immutable option snapshot for one generation run.
///
/// Loaded once before generation; evaluators and the pool balancer only ever
/// read it. [`Options::validate`] must pass before any placement begins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub goal: Goal,
    /// Swim reach. Values up to 999 are plain meters; values above use the
    /// legacy ten-times encoding and force `consider_items` on.
    #[serde(default = "Options::default_swim_rule")]
    pub swim_rule: i32,
    #[serde(default = "Options::default_true")]
    pub consider_items: bool,
    /// Flat depth bonus granted by the Glider.
    #[serde(default = "Options::default_glider_depth")]
    pub glider_depth: i32,
    /// Horizontal radius from the drop point open to unassisted swimming.
    #[serde(default = "Options::default_pre_glider_distance")]
    pub pre_glider_distance: f32,
    #[serde(default)]
    pub include_dart: VehicleInclusion,
    #[serde(default)]
    pub include_exosuit: VehicleInclusion,
    #[serde(default)]
    pub include_leviathan: VehicleInclusion,
    #[serde(default)]
    pub ignore_radiation: bool,
    #[serde(default)]
    pub slip_through: SlipThrough,
    #[serde(default)]
    pub aggressive_scan_logic: AggressiveScanLogic,
    /// Creature scan locations to create; clamped to the scannable pool.
    #[serde(default = "Options::default_creature_scans")]
    pub creature_scans: u32,
    /// Flora scan locations to create; clamped to the catalog.
    #[serde(default = "Options::default_flora_scans")]
    pub flora_scans: u32,
    #[serde(default)]
    pub filler_weights: FillerWeights,
    /// Client passthrough: deaths are shared across the multiworld session.
    #[serde(default)]
    pub death_link: bool,
    /// Client passthrough: scanning grants a free sample of the unlock.
    #[serde(default)]
    pub free_samples: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            goal: Goal::default(),
            swim_rule: Self::default_swim_rule(),
            consider_items: true,
            glider_depth: Self::default_glider_depth(),
            pre_glider_distance: Self::default_pre_glider_distance(),
            include_dart: VehicleInclusion::default(),
            include_exosuit: VehicleInclusion::default(),
            include_leviathan: VehicleInclusion::default(),
            ignore_radiation: false,
            slip_through: SlipThrough::default(),
            aggressive_scan_logic: AggressiveScanLogic::default(),
            creature_scans: Self::default_creature_scans(),
            flora_scans: Self::default_flora_scans(),
            filler_weights: FillerWeights::default(),
            death_link: false,
            free_samples: false,
        }
    }
}

impl Options {
    const fn default_swim_rule() -> i32 {
        200
    }

    const fn default_true() -> bool {
        true
    }

    const fn default_glider_depth() -> i32 {
        200
    }

    const fn default_pre_glider_distance() -> f32 {
        800.0
    }

    const fn default_creature_scans() -> u32 {
        6
    }

    const fn default_flora_scans() -> u32 {
        3
    }

    /// Swim reach in meters with the legacy encoding unfolded.
    #[must_use]
    pub const fn base_swim_depth(&self) -> i32 {
        if self.swim_rule > SWIM_RULE_DIRECT_MAX {
            self.swim_rule / 10
        } else {
            self.swim_rule
        }
    }

    /// Whether worn equipment contributes to reach. The legacy scaled
    /// swim-rule encoding forces this on regardless of the flag.
    #[must_use]
    pub const fn items_considered(&self) -> bool {
        self.consider_items || self.swim_rule > SWIM_RULE_DIRECT_MAX
    }

    /// Check every start-time invariant.
    ///
    /// # Errors
    ///
    /// Returns `OptionsError` for any value that would make generation
    /// unprovable: a swim rule outside both encodings, negative depth or
    /// distance knobs, or a filler table no draw could ever satisfy.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.swim_rule < 0 || self.swim_rule > SWIM_RULE_SCALED_MAX {
            return Err(OptionsError::SwimRuleOutOfRange {
                value: self.swim_rule,
            });
        }
        if self.glider_depth < 0 {
            return Err(OptionsError::NegativeGliderDepth {
                value: self.glider_depth,
            });
        }
        if self.pre_glider_distance < 0.0 {
            return Err(OptionsError::NegativePreGliderDistance {
                value: self.pre_glider_distance,
            });
        }
        if self.filler_weights.total() == 0 {
            return Err(OptionsError::NoPositiveFillerWeight);
        }
        Ok(())
    }
}

/// Errors raised when option invariants are violated at generation start.
#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("swim rule {value} is outside both the direct and scaled encodings")]
    SwimRuleOutOfRange { value: i32 },
    #[error("glider depth must not be negative (got {value})")]
    NegativeGliderDepth { value: i32 },
    #[error("pre-glider distance must not be negative (got {value:.1})")]
    NegativePreGliderDistance { value: f32 },
    #[error("filler item distribution needs at least one positive weight")]
    NoPositiveFillerWeight,
}
