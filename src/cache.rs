//! Symmetry-folding memo store.
//!
//! Search positions that are rotations or mirrors of one another have the
//! same value, so the cache folds all 8 transforms of a position into one
//! physical slot. Keys pair the flattened grid serialization with a flag
//! (for search, "is this a maximizing node").
//!
//! Insert policy, kept from the source engine: writing a key first scans
//! for any transform already present and overwrites that slot, so
//! symmetric states converge; if none is present the value lands under
//! the last transform of the generation walk. Once any one transform is
//! stored, lookups under every other transform see the same slot.

use std::collections::HashMap;

use crate::board::{equivalents, Grid};

type Key = (String, bool);

/// Memoizes values against symmetry-folded `(position, flag)` keys.
///
/// One cache belongs to one strategy instance and is rebuilt per
/// top-level search call; there is no eviction.
#[derive(Debug, Default)]
pub struct SymmetryCache<V> {
    store: HashMap<Key, V>,
    // Transform classes are themselves memoized per key, since search
    // revisits the same positions many times within one invocation.
    classes: HashMap<Key, Vec<Key>>,
}

impl<V: Clone> SymmetryCache<V> {
    pub fn new() -> Self {
        SymmetryCache {
            store: HashMap::new(),
            classes: HashMap::new(),
        }
    }

    /// All `(serialization, flag)` keys equivalent to this position, in
    /// generation order.
    fn class(&mut self, grid: &Grid, flag: bool) -> &[Key] {
        let key = (grid.key(), flag);
        self.classes.entry(key).or_insert_with(|| {
            equivalents(grid)
                .iter()
                .map(|g| (g.key(), flag))
                .collect()
        })
    }

    /// Stores a value, overwriting whichever transform slot already holds
    /// one, or the last-generated transform when none does.
    pub fn put(&mut self, grid: &Grid, flag: bool, value: V) {
        let class = self.class(grid, flag).to_vec();
        for key in &class {
            if self.store.contains_key(key) {
                self.store.insert(key.clone(), value);
                return;
            }
        }
        if let Some(last) = class.last() {
            self.store.insert(last.clone(), value);
        }
    }

    /// Looks a position up under every transform; `None` when no
    /// transform has ever been stored.
    pub fn get(&mut self, grid: &Grid, flag: bool) -> Option<V> {
        let class = self.class(grid, flag).to_vec();
        class.iter().find_map(|key| self.store.get(key).cloned())
    }
}
