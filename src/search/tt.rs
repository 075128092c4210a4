//! Transposition Table for caching search results
//!
//! The table maps a position fingerprint to the value found for it, the
//! depth it was searched to, and how that value relates to the true
//! minimax value. It lives for one top-level search: the searcher clears
//! it before every call, so nothing leaks between searches that use
//! different strategies.
//!
//! # Example
//!
//! ```
//! use kalaha::search::{EntryType, TranspositionTable};
//!
//! let mut tt = TranspositionTable::new();
//!
//! let hash = 0x1234_5678_9ABC_DEF0;
//! tt.store(hash, 4, 2.5, EntryType::Exact);
//!
//! let entry = tt.probe(hash, 3).unwrap();
//! assert_eq!(entry.value, 2.5);
//! assert!(tt.probe(hash, 5).is_none());
//! ```

use std::collections::HashMap;

/// Entry type for score interpretation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// Exact score - the search completed inside the window
    Exact,
    /// Lower bound - score >= stored value (beta cutoff)
    LowerBound,
    /// Upper bound - score <= stored value (alpha fail-low)
    UpperBound,
}

/// Transposition table entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTEntry {
    /// Evaluation score, Player 1's perspective
    pub value: f64,
    /// Remaining depth the value was searched to
    pub depth: u8,
    /// How `value` bounds the true score
    pub entry_type: EntryType,
}

/// Transposition table keyed by Zobrist hash.
///
/// No replacement policy: a store always overwrites what was there, and
/// the table only grows until it is cleared.
#[derive(Debug, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TTEntry>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with room for `capacity` entries before reallocating
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
        }
    }

    /// Look up a position searched at least `depth` plies deep.
    ///
    /// Entries from shallower searches are ignored.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: u8) -> Option<TTEntry> {
        self.entries
            .get(&hash)
            .filter(|entry| entry.depth >= depth)
            .copied()
    }

    /// Look up a position regardless of depth
    #[must_use]
    pub fn get(&self, hash: u64) -> Option<&TTEntry> {
        self.entries.get(&hash)
    }

    /// Store a position, replacing any previous entry for it.
    pub fn store(&mut self, hash: u64, depth: u8, value: f64, entry_type: EntryType) {
        self.entries.insert(
            hash,
            TTEntry {
                value,
                depth,
                entry_type,
            },
        );
    }

    /// Clear all entries in the table.
    ///
    /// Keeps the allocation for the next search.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get statistics about table usage.
    #[must_use]
    pub fn stats(&self) -> TTStats {
        let mut stats = TTStats {
            used: self.entries.len(),
            capacity: self.entries.capacity(),
            ..TTStats::default()
        };
        for entry in self.entries.values() {
            match entry.entry_type {
                EntryType::Exact => stats.exact += 1,
                EntryType::LowerBound => stats.lower_bounds += 1,
                EntryType::UpperBound => stats.upper_bounds += 1,
            }
        }
        stats
    }
}

/// Statistics about transposition table usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TTStats {
    /// Number of positions stored
    pub used: usize,
    /// Slots allocated by the underlying map
    pub capacity: usize,
    pub exact: usize,
    pub lower_bounds: usize,
    pub upper_bounds: usize,
}
