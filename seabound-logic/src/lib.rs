//! Seabound Randomizer Logic
//!
//! Pure, deterministic core for the Seabound multiworld randomizer: the
//! accessibility and progression engine consulted by the external fill
//! algorithm, and the item pool balancer that decides what gets placed.
//! No I/O, no hidden state; everything is a function of the option
//! snapshot, the collected-item multiset, and one seeded RNG stream.

pub mod access;
pub mod creatures;
pub mod depth;
pub mod export;
pub mod flora;
pub mod goal;
pub mod items;
pub mod locations;
pub mod options;
pub mod pool;
pub mod predicates;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use depth::{INTERDICTION_DEPTH, RESONANCE_DEPTH, Regime, max_depth, swim_depth};
pub use export::{SlotData, slot_data};
pub use items::{Classification, ItemId, ItemKind, ItemRecord};
pub use locations::{Bypass, LocationId, LocationRecord, VICTORY, Vector};
pub use options::{
    AggressiveScanLogic, FillerWeights, Goal, Options, OptionsError, SlipThrough,
    VehicleInclusion,
};
pub use pool::{BalancedPool, PoolError, PoolItem};
pub use state::{CollectionState, PlayerId};
pub use world::{GenerationError, ScanTargets, World};
