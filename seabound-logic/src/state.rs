//! Read-only view of the collected-item multiset owned by the fill algorithm.
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Multiworld slot number of a player.
pub type PlayerId = u16;

/// Multiset of collected items per player.
///
/// The external search owns this and grows it monotonically while proving
/// placements reachable; the logic core only ever reads counts. Missing
/// entries count as zero, never as an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionState {
    counts: HashMap<PlayerId, HashMap<String, u32>>,
}

impl CollectionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Held copies of `item` for `player`.
    #[must_use]
    pub fn count(&self, player: PlayerId, item: &str) -> u32 {
        self.counts
            .get(&player)
            .and_then(|held| held.get(item))
            .copied()
            .unwrap_or(0)
    }

    /// True when `player` holds at least `required` copies of `item`.
    #[must_use]
    pub fn has(&self, player: PlayerId, item: &str, required: u32) -> bool {
        self.count(player, item) >= required
    }

    /// True when `player` holds at least one copy of `item`.
    #[must_use]
    pub fn has_one(&self, player: PlayerId, item: &str) -> bool {
        self.has(player, item, 1)
    }

    /// Add one copy of `item` for `player`. Owner-side API: the logic core
    /// never calls this.
    pub fn collect(&mut self, player: PlayerId, item: &str) {
        self.collect_many(player, item, 1);
    }

    /// Add `copies` of `item` for `player`.
    pub fn collect_many(&mut self, player: PlayerId, item: &str, copies: u32) {
        if copies == 0 {
            return;
        }
        let held = self.counts.entry(player).or_default();
        *held.entry(item.to_string()).or_insert(0) += copies;
    }

    /// Distinct item names held by `player`.
    #[must_use]
    pub fn distinct_held(&self, player: PlayerId) -> usize {
        self.counts.get(&player).map_or(0, HashMap::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_items_count_as_zero() {
        let state = CollectionState::new();
        assert_eq!(state.count(1, "Glider Fragment"), 0);
        assert!(!state.has_one(1, "Glider Fragment"));
    }

    #[test]
    fn counts_accumulate_per_player() {
        let mut state = CollectionState::new();
        state.collect(1, "Glider Fragment");
        state.collect(1, "Glider Fragment");
        state.collect(2, "Glider Fragment");
        assert_eq!(state.count(1, "Glider Fragment"), 2);
        assert_eq!(state.count(2, "Glider Fragment"), 1);
        assert!(state.has(1, "Glider Fragment", 2));
        assert!(!state.has(2, "Glider Fragment", 2));
    }

    #[test]
    fn collecting_zero_copies_is_a_no_op() {
        let mut state = CollectionState::new();
        state.collect_many(1, "Ion Battery", 0);
        assert_eq!(state.distinct_held(1), 0);
    }
}
