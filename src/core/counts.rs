//! Claimable letter multiset
//!
//! Tracks how many copies of each answer letter are still available to
//! satisfy a misplaced match. Claiming a letter decrements its count.

use rustc_hash::FxHashMap;

/// Symbol to remaining-count map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: FxHashMap<char, u8>,
}

impl LetterCounts {
    /// Remaining copies of `letter` (0 if absent)
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> u8 {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Check whether at least one copy of `letter` is unclaimed
    #[inline]
    #[must_use]
    pub fn contains(&self, letter: char) -> bool {
        self.get(letter) > 0
    }

    /// Add one copy of `letter`
    pub fn add(&mut self, letter: char) {
        *self.counts.entry(letter).or_insert(0) += 1;
    }

    /// Claim one copy of `letter`
    ///
    /// Returns `false` and leaves the counts untouched when no copy remains.
    pub fn claim(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Total number of unclaimed copies across all letters
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().map(|&count| usize::from(count)).sum()
    }
}

impl FromIterator<char> for LetterCounts {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut counts = Self::default();
        for letter in iter {
            counts.add(letter);
        }
        counts
    }
}
