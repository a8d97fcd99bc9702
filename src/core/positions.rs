//! Fixed-width set of tile positions
//!
//! Targets are at most [`MAX_WORD_LEN`] characters, so a single `u64` holds
//! every position of a word.

/// Longest supported target, in characters
pub const MAX_WORD_LEN: usize = 64;

/// Bitset of positions within a target word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet(u64);

impl PositionSet {
    pub const EMPTY: Self = Self(0);

    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a position
    ///
    /// Positions at or past [`MAX_WORD_LEN`] are ignored. Returns whether the
    /// set changed.
    #[inline]
    pub fn insert(&mut self, position: usize) -> bool {
        if position >= MAX_WORD_LEN {
            return false;
        }
        let bit = 1u64 << position;
        let added = self.0 & bit == 0;
        self.0 |= bit;
        added
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, position: usize) -> bool {
        position < MAX_WORD_LEN && self.0 & (1u64 << position) != 0
    }

    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Positions in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..MAX_WORD_LEN).filter(move |&i| self.contains(i))
    }

    /// Positions in `0..len` that are not in the set, ascending
    pub fn complement_within(self, len: usize) -> impl Iterator<Item = usize> {
        (0..len.min(MAX_WORD_LEN)).filter(move |&i| !self.contains(i))
    }
}

impl FromIterator<usize> for PositionSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        for position in iter {
            set.insert(position);
        }
        set
    }
}
