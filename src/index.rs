// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Opaque index values.
//!
//! An index is only meaningful to the container that produced it. Algorithms
//! compare, copy, and hand indices back to their container; they never do
//! arithmetic on them directly. The stepping methods here exist for
//! containers whose index space *is* integral, and they wrap instead of
//! panicking so that stepping off either end lands on a value the container
//! reports as invalid.

use std::fmt::Debug;
use std::hash::Hash;

/// A totally ordered, copyable index value.
///
/// # Example
///
/// ```
/// use seqlike::SeqIndex;
///
/// let idx: u32 = 0;
/// assert_eq!(idx.step_back(1), u32::MAX);
/// assert_eq!(u32::MAX.step_forward(1), 0);
/// assert_eq!(7u32.distance_to(3), -4);
/// ```
pub trait SeqIndex: Copy + Ord + Eq + Hash + Debug {
    /// The zero index.
    const ZERO: Self;

    /// An index value no contiguous container of this index type can hold.
    const INVALID: Self;

    /// `self + n`, wrapping on overflow.
    fn step_forward(self, n: usize) -> Self;

    /// `self - n`, wrapping on underflow.
    fn step_back(self, n: usize) -> Self;

    /// Signed number of steps from `self` to `other`.
    fn distance_to(self, other: Self) -> isize;

    /// Lossy conversion from a count. Wraps when the count does not fit.
    fn from_usize(n: usize) -> Self;

    /// Position as a count. Negative indices map to `usize::MAX` so that
    /// a bounds check against any length fails.
    fn as_usize(self) -> usize;
}

macro_rules! impl_seq_index_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl SeqIndex for $ty {
                const ZERO: Self = 0;
                const INVALID: Self = <$ty>::MAX;

                #[inline]
                fn step_forward(self, n: usize) -> Self {
                    self.wrapping_add(n as $ty)
                }

                #[inline]
                fn step_back(self, n: usize) -> Self {
                    self.wrapping_sub(n as $ty)
                }

                #[inline]
                fn distance_to(self, other: Self) -> isize {
                    (other as isize).wrapping_sub(self as isize)
                }

                #[inline]
                fn from_usize(n: usize) -> Self {
                    n as $ty
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

macro_rules! impl_seq_index_for_signed {
    ($($ty:ty),*) => {
        $(
            impl SeqIndex for $ty {
                const ZERO: Self = 0;
                const INVALID: Self = -1;

                #[inline]
                fn step_forward(self, n: usize) -> Self {
                    self.wrapping_add(n as $ty)
                }

                #[inline]
                fn step_back(self, n: usize) -> Self {
                    self.wrapping_sub(n as $ty)
                }

                #[inline]
                fn distance_to(self, other: Self) -> isize {
                    (other as isize).wrapping_sub(self as isize)
                }

                #[inline]
                fn from_usize(n: usize) -> Self {
                    n as $ty
                }

                #[inline]
                fn as_usize(self) -> usize {
                    if self < 0 {
                        usize::MAX
                    } else {
                        self as usize
                    }
                }
            }
        )*
    };
}

impl_seq_index_for_unsigned!(u8, u16, u32, u64, usize);
impl_seq_index_for_signed!(i8, i16, i32, i64, isize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsigned_step_back_from_zero_wraps_to_invalid() {
        assert_eq!(0usize.step_back(1), usize::MAX);
        assert_eq!(0u8.step_back(1), u8::INVALID);
    }

    #[test]
    fn signed_step_back_from_zero_is_negative() {
        assert_eq!(0i32.step_back(1), -1);
        assert_eq!((-1i64).as_usize(), usize::MAX);
    }

    #[test]
    fn distance_is_signed() {
        assert_eq!(2usize.distance_to(5), 3);
        assert_eq!(5usize.distance_to(2), -3);
        assert_eq!(3i16.distance_to(3), 0);
    }

    #[test]
    fn from_usize_round_trips_small_values() {
        for n in 0..200usize {
            assert_eq!(u8::from_usize(n).as_usize(), n);
            assert_eq!(i32::from_usize(n).as_usize(), n);
        }
    }
}
