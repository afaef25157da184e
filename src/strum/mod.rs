//! Virtual strings and crossing detection.
//!
//! Six horizontal strings sit evenly spaced around the vertical middle of
//! the frame, spanning a fixed horizontal band (the string region). Each
//! frame the strum point is compared against where it was one frame ago;
//! every string line lying between the two y positions has been crossed.

mod layout;
mod tracker;

pub use layout::{Rect, StringLayout};
pub use tracker::StrumTracker;

use crate::NUM_STRINGS;

/// A set of string indices (0..6), iterated low to high.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct StringSet(u8);

impl StringSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, string: usize) {
        debug_assert!(string < NUM_STRINGS);
        self.0 |= 1 << string;
    }

    pub fn contains(&self, string: usize) -> bool {
        string < NUM_STRINGS && self.0 & (1 << string) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_STRINGS).filter(move |&s| self.contains(s))
    }
}

impl FromIterator<usize> for StringSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = StringSet::empty();
        for s in iter {
            set.insert(s);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_set_basics() {
        let mut set = StringSet::empty();
        assert!(set.is_empty());
        set.insert(4);
        set.insert(1);
        set.insert(4);
        assert_eq!(set.len(), 2);
        assert!(set.contains(1));
        assert!(!set.contains(0));
        assert!(!set.contains(9));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![1, 4]);
        assert_eq!([4, 1].into_iter().collect::<StringSet>(), set);
    }
}
