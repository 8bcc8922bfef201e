//! Swipe gestures and the clock-face decoder.
//!
//! Each swipe has a seed digit (up 1, right 2, down 3, left 4) and pairs of
//! swipes map to 0..=13 through a fixed table, where 0 is the dead pair.
//! Longer sequences are read two swipes at a time from the front, the pairs
//! after the first contributing the higher-order digits.
//!
//! ```
//! use card_picker::gesture::{Swipe, decode};
//!
//! assert_eq!(decode(&[Swipe::Up, Swipe::Right]), Some(1));
//! assert_eq!(decode(&[Swipe::Left, Swipe::Right]), Some(0));
//! assert_eq!(decode(&[Swipe::Up, Swipe::Right, Swipe::Right]), Some(21));
//! ```

use serde::{Deserialize, Serialize};

/// Pair value reserved for swipe pairs that map to no rank.
pub const DEAD_PAIR: u8 = 0;

/// Largest number [`decode`] maps to. Longer sequences have no mapping.
pub const MAX_DECODED: u64 = i64::MAX.unsigned_abs();

/// A single directional swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Swipe {
    /// Swipe towards the top of the screen.
    Up,
    /// Swipe towards the left edge.
    Left,
    /// Swipe towards the bottom of the screen.
    Down,
    /// Swipe towards the right edge.
    Right,
}

/// Pair values indexed by `[first][second]`, both in `Up, Left, Down, Right`
/// order.
const PAIR_TABLE: [[u8; 4]; 4] = [
    [12, 11, 13, 1],
    [10, 9, 8, 0],
    [0, 7, 6, 5],
    [2, 0, 4, 3],
];

#[cfg(feature = "std")]
fn magnitude(value: f32) -> f32 {
    value.abs()
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn magnitude(value: f32) -> f32 {
    libm::fabsf(value)
}

impl Swipe {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Left, Self::Down, Self::Right];

    /// Returns the seed digit of a lone swipe.
    #[must_use]
    pub const fn seed(self) -> u8 {
        match self {
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
            Self::Left => 4,
        }
    }

    const fn index(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Left => 1,
            Self::Down => 2,
            Self::Right => 3,
        }
    }

    /// Classifies a drag by its translation, in screen coordinates (`dy`
    /// grows downwards).
    ///
    /// The dominant axis wins; a tie counts as vertical.
    #[must_use]
    pub fn from_translation(dx: f32, dy: f32) -> Self {
        if magnitude(dx) > magnitude(dy) {
            if dx > 0.0 { Self::Right } else { Self::Left }
        } else if dy > 0.0 {
            Self::Down
        } else {
            Self::Up
        }
    }
}

/// Looks a pair of swipes up in the pair table.
#[must_use]
pub const fn decode_pair(first: Swipe, second: Swipe) -> u8 {
    PAIR_TABLE[first.index()][second.index()]
}

/// Decodes a swipe sequence into a number.
///
/// One swipe yields its seed and two swipes their pair value. Longer
/// sequences decode the tail after the first pair, then append the first
/// pair's value as the lowest digit; a pair value of 10 or more counts as 0
/// in that position.
///
/// Returns `None` for an empty sequence or if the number exceeds
/// [`MAX_DECODED`].
#[must_use]
pub fn decode(swipes: &[Swipe]) -> Option<u64> {
    match *swipes {
        [] => None,
        [single] => Some(u64::from(single.seed())),
        [first, second] => Some(u64::from(decode_pair(first, second))),
        [first, second, ref tail @ ..] => {
            let tail = decode(tail)?;
            let head = match decode_pair(first, second) {
                value if value >= 10 => 0,
                value => value,
            };
            tail.checked_mul(10)?
                .checked_add(u64::from(head))
                .filter(|value| *value <= MAX_DECODED)
        }
    }
}
