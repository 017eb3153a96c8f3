//! Set of active heading levels.

use std::fmt;

use crate::heading::HeadingLevel;

/// A set of [`HeadingLevel`]s, stored as a bit mask.
///
/// Defaults to all three levels, which is what a fresh session shows.
///
/// # Example
///
/// ```
/// use hx_model::{HeadingLevel, LevelSet};
///
/// let mut levels = LevelSet::all();
/// levels.toggle(HeadingLevel::H2);
/// assert!(!levels.contains(HeadingLevel::H2));
/// levels.toggle(HeadingLevel::H2);
/// assert_eq!(levels, LevelSet::all());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct LevelSet {
    bits: u8,
}

impl LevelSet {
    const MASK: u8 = 0b111;

    /// Every level.
    #[must_use]
    pub const fn all() -> Self {
        Self { bits: Self::MASK }
    }

    /// No levels.
    #[must_use]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Whether `level` is in the set.
    #[must_use]
    pub const fn contains(self, level: HeadingLevel) -> bool {
        self.bits & level.bit() != 0
    }

    /// Add `level`.
    pub fn insert(&mut self, level: HeadingLevel) {
        self.bits |= level.bit();
    }

    /// Remove `level`.
    pub fn remove(&mut self, level: HeadingLevel) {
        self.bits &= !level.bit();
    }

    /// Symmetric difference with `{level}`. Returns whether the level is
    /// present afterwards.
    pub fn toggle(&mut self, level: HeadingLevel) -> bool {
        self.bits ^= level.bit();
        self.contains(level)
    }

    /// Number of levels in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Whether the set has no levels.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Whether all three levels are present.
    #[must_use]
    pub const fn is_all(self) -> bool {
        self.bits == Self::MASK
    }

    /// Iterate the levels in the set, outermost first.
    pub fn iter(self) -> impl Iterator<Item = HeadingLevel> {
        HeadingLevel::ALL
            .into_iter()
            .filter(move |level| self.contains(*level))
    }
}

impl Default for LevelSet {
    fn default() -> Self {
        Self::all()
    }
}

impl FromIterator<HeadingLevel> for LevelSet {
    fn from_iter<I: IntoIterator<Item = HeadingLevel>>(iter: I) -> Self {
        let mut set = Self::empty();
        for level in iter {
            set.insert(level);
        }
        set
    }
}

impl fmt::Debug for LevelSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
