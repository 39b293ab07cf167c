//! The [`Composer`] entry value that starts every composition chain.

use std::ops::{BitOr, Shl, Shr};

use crate::chain::Lift;
use crate::flow::{Leftward, Rightward};

/// The starting value of every composition chain.
///
/// `Composer` is a stateless unit value with no payload. Its sole role is
/// to be the left operand of the first directional combine, which fixes
/// the direction of the whole chain:
///
/// - `Composer >> f` (or `Composer | f`) starts a [`Rightward`] chain,
/// - `Composer << f` starts a [`Leftward`] chain.
///
/// The first combine wraps `f` directly; direction only matters once a
/// second function is added.
///
/// # Examples
///
/// ```rust
/// use fnflow::prelude::*;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// assert_eq!((Composer >> double >> increment).apply(3), 7);
/// assert_eq!((Composer << double << increment).apply(3), 8);
/// assert_eq!((Composer | double | increment).apply(3), 7);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Composer;

impl<F> Shr<F> for Composer {
    type Output = Rightward<Lift<F>>;

    /// Starts a rightward chain with `function` as its first link.
    fn shr(self, function: F) -> Self::Output {
        Rightward::new(Lift::new(function))
    }
}

impl<F> BitOr<F> for Composer {
    type Output = Rightward<Lift<F>>;

    /// Pipe alias for `Composer >> function`.
    fn bitor(self, function: F) -> Self::Output {
        self >> function
    }
}

impl<F> Shl<F> for Composer {
    type Output = Leftward<Lift<F>>;

    /// Starts a leftward chain with `function` as its first link.
    fn shl(self, function: F) -> Self::Output {
        Leftward::new(Lift::new(function))
    }
}

static_assertions::assert_impl_all!(Composer: Clone, Copy, Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composer_is_reusable() {
        // Composer is Copy; starting one chain does not consume it.
        let composer = Composer;
        let double = composer >> |x: i32| x * 2;
        let triple = composer >> |x: i32| x * 3;
        assert_eq!(double.apply(2), 4);
        assert_eq!(triple.apply(2), 6);
    }

    #[test]
    fn test_first_combine_wraps_directly() {
        // A single-link chain behaves identically in both directions.
        let double = |x: i32| x * 2;
        assert_eq!((Composer >> double).apply(5), 10);
        assert_eq!((Composer << double).apply(5), 10);
        assert_eq!((Composer | double).apply(5), 10);
    }
}
