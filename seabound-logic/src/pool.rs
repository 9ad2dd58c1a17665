//! Item pool balancer: turns the static catalog plus options into the
//! concrete multiset of items the fill algorithm places.
use rand::Rng;
use rand::seq::SliceRandom;
use std::collections::HashSet;
use thiserror::Error;

use crate::depth::Regime;
use crate::items::{self, Classification, GROUP_ITEMS, GROUP_SLOTS, ItemId, ItemRecord};
use crate::locations::{CAPTAIN_TERMINAL_ID, LocationId};
use crate::options::{Goal, Options};

/// One pool slot: an item name plus the classification it carries this run,
/// which may be promoted above its catalog default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolItem {
    pub name: &'static str,
    pub classification: Classification,
}

impl PoolItem {
    const fn of(record: &ItemRecord) -> Self {
        Self {
            name: record.name,
            classification: record.classification,
        }
    }
}

/// Balancer output: the free pool plus any advance-placed (locked) items.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BalancedPool {
    pub pool: Vec<PoolItem>,
    pub locked: Vec<(LocationId, PoolItem)>,
}

impl BalancedPool {
    /// Placements this pool accounts for, locked slots included.
    #[must_use]
    pub fn total_placements(&self) -> usize {
        self.pool.len() + self.locked.len()
    }

    /// Copies of `name` anywhere in the output.
    #[must_use]
    pub fn count_of(&self, name: &str) -> usize {
        self.pool
            .iter()
            .chain(self.locked.iter().map(|(_, item)| item))
            .filter(|item| item.name == name)
            .count()
    }
}

/// Errors raised when pool invariants are violated. All of them abort
/// generation before any placement happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PoolError {
    #[error("grouped items reserve {required} slots but only {extras} extras exist")]
    GroupSlotsExceedExtras { required: usize, extras: usize },
    #[error("filler item distribution needs at least one positive weight")]
    NoPositiveFillerWeight,
}

/// Build the pool. `scan_slots` is the number of scan locations created this
/// run; they are the budget the priority and random filler draw from.
///
/// Deterministic given (options, regime, scan count, RNG stream). Draw order
/// is fixed: priority filler first, remaining filler second.
///
/// # Errors
///
/// Returns `PoolError` when the filler table has no positive weight or the
/// grouped-item reservation cannot fit the extras budget; both are fatal
/// before any random draw.
pub fn balance_pool<R: Rng>(
    options: &Options,
    regime: Regime,
    scan_slots: usize,
    rng: &mut R,
) -> Result<BalancedPool, PoolError> {
    if options.filler_weights.total() == 0 {
        return Err(PoolError::NoPositiveFillerWeight);
    }

    let hardcore = regime == Regime::Hardcore;
    let mut pool: Vec<PoolItem> = Vec::new();
    let mut locked: Vec<(LocationId, PoolItem)> = Vec::new();
    let mut extras = scan_slots;

    let grouped: HashSet<ItemId> = GROUP_ITEMS
        .iter()
        .flat_map(|(_, members)| members.iter().copied())
        .collect();

    for record in items::BASE_ITEMS {
        if grouped.contains(&record.id) {
            extras += record.count as usize;
            continue;
        }
        for _ in 0..record.count {
            if record.name == items::MERIDIAN_LAUNCH_PLATFORM
                && options.goal == Goal::MeridianLaunch
            {
                // The launch goal needs the platform early; pin it to the
                // captain's terminal instead of letting fill scatter it.
                locked.push((CAPTAIN_TERMINAL_ID, PoolItem::of(record)));
            } else if record.name == items::LEVIATHAN_SHIELD_GENERATOR
                && !options.include_leviathan.in_pool()
                && options.goal != Goal::MeridianLaunch
            {
                // Nothing left that wants the shield; free the slot.
                extras += 1;
            } else {
                pool.push(PoolItem::of(record));
            }
        }
    }

    let vehicle_tables = [
        (items::DART_ITEMS, options.include_dart),
        (items::EXOSUIT_ITEMS, options.include_exosuit),
        (items::LEVIATHAN_ITEMS, options.include_leviathan),
    ];
    for (table, inclusion) in vehicle_tables {
        for record in table {
            if inclusion.in_pool() {
                for _ in 0..record.count {
                    pool.push(PoolItem::of(record));
                }
            } else {
                extras += record.count as usize;
            }
        }
    }

    // With no vehicle able to save the run, the base-building depth aids
    // stop being optional.
    for record in items::NON_VEHICLE_DEPTH_ITEMS {
        let classification = if hardcore {
            Classification::Progression
        } else {
            record.classification
        };
        for _ in 0..record.count {
            pool.push(PoolItem {
                name: record.name,
                classification,
            });
        }
    }

    extras = reserve_group_slots(GROUP_ITEMS.len(), extras)?;
    for (leader, _) in GROUP_ITEMS {
        let Some(record) = items::find_item_by_id(*leader) else {
            continue;
        };
        for _ in 0..GROUP_SLOTS {
            pool.push(PoolItem::of(record));
        }
    }

    let (priority, wanted) = priority_filler(options, hardcore);
    for name in priority
        .choose_multiple(rng, wanted.min(extras))
        .copied()
        .collect::<Vec<_>>()
    {
        let classification = if hardcore && items::is_non_vehicle_depth_item(name) {
            Classification::Progression
        } else {
            default_classification(name)
        };
        pool.push(PoolItem {
            name,
            classification,
        });
        extras -= 1;
    }

    let weight_pairs = options.filler_weights.pairs();
    for _ in 0..extras {
        let Some(name) = weighted_pick(&weight_pairs, rng) else {
            return Err(PoolError::NoPositiveFillerWeight);
        };
        pool.push(PoolItem {
            name,
            classification: Classification::Filler,
        });
    }

    Ok(BalancedPool { pool, locked })
}

/// Check the grouped-item reservation against the extras budget and return
/// the budget left after it.
fn reserve_group_slots(groups: usize, extras: usize) -> Result<usize, PoolError> {
    let required = groups * GROUP_SLOTS;
    if required > extras {
        return Err(PoolError::GroupSlotsExceedExtras { required, extras });
    }
    Ok(extras - required)
}

// High-count fragments the run wants multiplied, so the chains they anchor
// show up at a survivable rate.
fn priority_filler(options: &Options, hardcore: bool) -> (Vec<&'static str>, usize) {
    let mut priority = vec![items::RETROFIT_STATION_FRAGMENT, items::PLASMA_CUTTER_FRAGMENT];
    let mut wanted = 2;

    let any_vehicle_pooled = options.include_dart.in_pool()
        || options.include_exosuit.in_pool()
        || options.include_leviathan.in_pool();
    if any_vehicle_pooled || options.goal == Goal::MeridianLaunch {
        priority.push(items::LAUNCH_BAY_FRAGMENT);
        priority.push(items::DRY_DOCK_FRAGMENT);
        wanted += 2;
    }

    if options.include_dart.in_pool() {
        priority.push(items::DART_FRAGMENT);
        wanted += 1;
    }
    if options.include_exosuit.in_pool() {
        priority.push(items::EXOSUIT_FRAGMENT);
        wanted += 1;
    }
    if options.include_leviathan.in_pool() {
        priority.push(items::LEVIATHAN_ENGINE_FRAGMENT);
        priority.push(items::LEVIATHAN_HULL_FRAGMENT);
        priority.push(items::LEVIATHAN_BRIDGE_FRAGMENT);
        wanted += 3;
    }
    if hardcore {
        // The Thermal Plant has an unfair head start; seed the other power
        // routes so one path does not dominate every hardcore run.
        priority.push(items::HABITAT_COMPARTMENT);
        priority.push(items::ATRIUM);
        priority.push(items::FISSION_REACTOR_FRAGMENT);
        priority.push(items::BIOREACTOR_FRAGMENT);
        wanted += 4;
    }

    (priority, wanted)
}

fn default_classification(name: &str) -> Classification {
    items::find_item(name).map_or(Classification::Useful, |record| record.classification)
}

/// Cumulative-weight selection from `(value, weight)` pairs. `None` only when
/// every weight is zero.
fn weighted_pick<R: Rng>(pairs: &[(&'static str, u32)], rng: &mut R) -> Option<&'static str> {
    let total: u32 = pairs.iter().map(|(_, weight)| *weight).sum();
    if total == 0 {
        return None;
    }
    let roll = rng.gen_range(0..total);
    let mut cumulative = 0;
    for (name, weight) in pairs {
        cumulative += weight;
        if roll < cumulative {
            return Some(name);
        }
    }
    None
}
