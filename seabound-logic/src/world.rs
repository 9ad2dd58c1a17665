//! Generation driver: one `World` per player per run.
//!
//! `World::generate` is the only place randomness enters the core. It seeds a
//! single ChaCha stream and consumes it in a fixed order - scan targets
//! first, then the pool's priority filler, then remaining filler - so equal
//! seeds reproduce equal output.
use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use thiserror::Error;

use crate::access;
use crate::creatures::{self, Creature};
use crate::depth::Regime;
use crate::flora::{self, Flora};
use crate::goal;
use crate::locations::{self, LocationId, LocationRecord, VICTORY};
use crate::options::{Options, OptionsError};
use crate::pool::{self, BalancedPool, PoolError};
use crate::state::{CollectionState, PlayerId};

/// The randomized scan subset actually in play for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTargets {
    pub creatures: Vec<&'static str>,
    pub flora: Vec<&'static str>,
}

impl ScanTargets {
    /// Sample both lists without replacement, creatures first.
    fn sample<R: Rng>(options: &Options, rng: &mut R) -> Self {
        let creature_pool = creatures::scan_pool(options.aggressive_scan_logic);
        let creature_count = (options.creature_scans as usize).min(creature_pool.len());
        let creatures = creature_pool
            .choose_multiple(rng, creature_count)
            .map(|record| record.name)
            .collect();

        let flora_count = (options.flora_scans as usize).min(flora::ALL_FLORA.len());
        let flora = flora::ALL_FLORA
            .choose_multiple(rng, flora_count)
            .map(|record| record.name)
            .collect();

        Self { creatures, flora }
    }

    /// Scan locations this selection creates.
    #[must_use]
    pub fn slots(&self) -> usize {
        self.creatures.len() + self.flora.len()
    }
}

/// Errors that abort generation before any placement.
#[derive(Debug, Error, PartialEq)]
pub enum GenerationError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Everything the external fill algorithm needs for one player: the balanced
/// pool and the pure access predicates over a hypothetical collected state.
#[derive(Debug, Clone)]
pub struct World {
    player: PlayerId,
    options: Options,
    regime: Regime,
    scan_targets: ScanTargets,
    pool: BalancedPool,
    locations_by_id: HashMap<LocationId, &'static LocationRecord>,
    creatures_by_id: HashMap<LocationId, &'static Creature>,
    flora_by_id: HashMap<LocationId, &'static Flora>,
}

impl World {
    /// Validate options, fix the regime, sample scan targets, and balance
    /// the pool.
    ///
    /// # Errors
    ///
    /// Returns `GenerationError` when any start-time invariant fails; nothing
    /// is sampled or placed past the first violation.
    pub fn generate(player: PlayerId, options: Options, seed: u64) -> Result<Self, GenerationError> {
        options.validate()?;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let scan_targets = ScanTargets::sample(&options, &mut rng);
        let regime = Regime::select(&options);
        let pool = pool::balance_pool(&options, regime, scan_targets.slots(), &mut rng)?;

        let locations_by_id = locations::LOCATIONS
            .iter()
            .map(|record| (record.id, record))
            .collect();
        let creatures_by_id = scan_targets
            .creatures
            .iter()
            .filter_map(|name| creatures::find_creature(name))
            .map(|record| (record.id, record))
            .collect();
        let flora_by_id = scan_targets
            .flora
            .iter()
            .filter_map(|name| flora::find_flora(name))
            .map(|record| (record.id, record))
            .collect();

        Ok(Self {
            player,
            options,
            regime,
            scan_targets,
            pool,
            locations_by_id,
            creatures_by_id,
            flora_by_id,
        })
    }

    /// Pure access predicate for any location id this run created. Unknown
    /// ids are fail-closed false.
    #[must_use]
    pub fn access(&self, location: LocationId, state: &CollectionState) -> bool {
        if let Some(record) = self.locations_by_id.get(&location) {
            return access::can_access_location(state, self.player, &self.options, self.regime, record);
        }
        if let Some(creature) = self.creatures_by_id.get(&location) {
            return access::can_scan_creature(state, self.player, &self.options, self.regime, creature);
        }
        if let Some(plant) = self.flora_by_id.get(&location) {
            return access::can_scan_flora(state, self.player, &self.options, self.regime, plant);
        }
        false
    }

    /// Whether the configured goal's event location is satisfiable.
    #[must_use]
    pub fn goal_access(&self, state: &CollectionState) -> bool {
        goal::can_reach_goal(state, self.player, &self.options, self.regime)
    }

    /// Whether the player has won: the locked Victory event item is held.
    #[must_use]
    pub fn completed(&self, state: &CollectionState) -> bool {
        state.has_one(self.player, VICTORY)
    }

    #[must_use]
    pub const fn player(&self) -> PlayerId {
        self.player
    }

    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    #[must_use]
    pub const fn regime(&self) -> Regime {
        self.regime
    }

    #[must_use]
    pub const fn scan_targets(&self) -> &ScanTargets {
        &self.scan_targets
    }

    #[must_use]
    pub const fn pool(&self) -> &BalancedPool {
        &self.pool
    }

    /// Location ids the fill algorithm must prove reachable this run: the
    /// static table plus every sampled scan target.
    pub fn location_ids(&self) -> impl Iterator<Item = LocationId> + '_ {
        locations::LOCATIONS
            .iter()
            .map(|record| record.id)
            .chain(self.creatures_by_id.keys().copied())
            .chain(self.flora_by_id.keys().copied())
    }

    /// Display name of a location this run created. Scan locations carry
    /// the catalog name plus the scan suffix.
    #[must_use]
    pub fn location_name(&self, location: LocationId) -> Option<String> {
        if let Some(record) = self.locations_by_id.get(&location) {
            return Some(record.name.to_string());
        }
        if let Some(creature) = self.creatures_by_id.get(&location) {
            return Some(format!("{}{}", creature.name, creatures::SCAN_SUFFIX));
        }
        self.flora_by_id
            .get(&location)
            .map(|plant| format!("{}{}", plant.name, creatures::SCAN_SUFFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items;

    #[test]
    fn generation_is_reproducible_per_seed() {
        let first = World::generate(1, Options::default(), 0xC0FFEE).unwrap();
        let second = World::generate(1, Options::default(), 0xC0FFEE).unwrap();
        assert_eq!(first.scan_targets(), second.scan_targets());
        assert_eq!(first.pool(), second.pool());

        let third = World::generate(1, Options::default(), 0xC0FFEE + 1).unwrap();
        let same_scans = first.scan_targets() == third.scan_targets();
        let same_pool = first.pool() == third.pool();
        assert!(!(same_scans && same_pool), "different seeds should diverge");
    }

    #[test]
    fn scan_targets_count_respects_options() {
        let options = Options {
            creature_scans: 4,
            flora_scans: 200,
            ..Options::default()
        };
        let world = World::generate(1, options, 9).unwrap();
        assert_eq!(world.scan_targets().creatures.len(), 4);
        // Clamped to the catalog.
        assert_eq!(world.scan_targets().flora.len(), crate::flora::ALL_FLORA.len());
    }

    #[test]
    fn access_rejects_unknown_ids() {
        let world = World::generate(1, Options::default(), 3).unwrap();
        assert!(!world.access(1, &CollectionState::new()));
    }

    #[test]
    fn access_covers_sampled_scan_locations() {
        let options = Options {
            creature_scans: creatures::ALL_CREATURES.len() as u32,
            flora_scans: 1,
            ..Options::default()
        };
        let world = World::generate(1, options, 11).unwrap();

        // A maxed state reaches every scan.
        let mut state = CollectionState::new();
        for record in items::all_items() {
            state.collect_many(1, record.name, record.count.max(4));
        }
        for creature in creatures::ALL_CREATURES {
            assert!(world.access(creature.id, &state), "{}", creature.name);
        }
    }

    #[test]
    fn scan_locations_carry_the_suffix() {
        let options = Options {
            creature_scans: 1,
            flora_scans: 0,
            ..Options::default()
        };
        let world = World::generate(1, options, 2).unwrap();
        let scan_id = *world.creatures_by_id.keys().next().unwrap();
        let name = world.location_name(scan_id).unwrap();
        assert!(name.ends_with(" Scan"), "{name}");
        assert_eq!(
            world.location_name(61001).as_deref(),
            Some("Shallows - Drift Seed Cache")
        );
        assert!(world.location_name(1).is_none());
    }

    #[test]
    fn completion_is_the_victory_event() {
        let world = World::generate(1, Options::default(), 5).unwrap();
        let mut state = CollectionState::new();
        assert!(!world.completed(&state));
        state.collect(1, VICTORY);
        assert!(world.completed(&state));
    }

    #[test]
    fn invalid_options_abort_before_sampling() {
        let options = Options {
            swim_rule: -5,
            ..Options::default()
        };
        let error = World::generate(1, options, 0).unwrap_err();
        assert_eq!(
            error,
            GenerationError::Options(OptionsError::SwimRuleOutOfRange { value: -5 })
        );
    }
}
