use std::fmt;

use crate::SortError;

pub(crate) const RADIX: usize = 10;

const MAX_WEIGHT: u64 = 10_000_000_000_000_000_000;

/// Divisor selecting one decimal digit: `digit(v) = (v / weight) % 10`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DigitWeight(u64);

impl DigitWeight {
    pub const ONES: Self = Self(1);

    pub fn new(weight: u64) -> Result<Self, SortError> {
        let mut w = 1_u64;
        loop {
            if w == weight {
                return Ok(Self(weight));
            }
            if w > weight || w == MAX_WEIGHT {
                return Err(SortError::InvalidWeight(weight));
            }
            w *= 10;
        }
    }

    /// Weight of the most significant decimal digit of `max`.
    pub fn for_max(max: u64) -> Self {
        let mut w = 1_u64;
        while w <= max / 10 {
            w *= 10;
        }
        Self(w)
    }

    #[inline]
    pub fn get(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn digit(self, value: u64) -> usize {
        ((value / self.0) % RADIX as u64) as usize
    }

    #[inline]
    pub fn finer(self) -> Option<Self> {
        (self.0 >= 10).then(|| Self(self.0 / 10))
    }
}

impl fmt::Display for DigitWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
