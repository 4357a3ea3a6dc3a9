//! Letter slot identity
//!
//! A coordinate names one letter of the puzzle by its side and its position
//! within that side.

use std::fmt;

/// A `(side, position)` pair identifying one letter slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    side: usize,
    position: usize,
}

impl Coordinate {
    #[inline]
    #[must_use]
    pub const fn new(side: usize, position: usize) -> Self {
        Self { side, position }
    }

    /// Index of the side this letter sits on
    #[inline]
    #[must_use]
    pub const fn side(self) -> usize {
        self.side
    }

    /// Position of the letter within its side
    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        self.position
    }

    /// Whether `self` may directly follow `previous` inside a word
    ///
    /// Consecutive letters must come from different sides.
    #[inline]
    #[must_use]
    pub const fn can_follow(self, previous: Self) -> bool {
        self.side != previous.side
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.side, self.position)
    }
}
