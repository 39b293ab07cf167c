//! Fundamental combinators used alongside composition chains.
//!
//! - [`identity`]: returns its argument unchanged (I combinator)
//! - [`constant`]: ignores its input, always returns the same value
//!   (K combinator)
//! - [`flip`]: swaps the arguments of a binary function (C combinator)

/// Returns the value unchanged.
///
/// The identity function is the unit of composition: combining it into a
/// chain, in either direction, leaves the computed function unchanged.
///
/// # Examples
///
/// ```rust
/// use fnflow::prelude::*;
///
/// fn double(value: i32) -> i32 { value * 2 }
///
/// assert_eq!(identity(42), 42);
/// assert_eq!((Composer >> double >> identity).apply(5), double(5));
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its
/// input.
///
/// # Examples
///
/// ```rust
/// use fnflow::prelude::*;
///
/// let always_five = constant::<_, i32>(5);
/// assert_eq!(always_five(100), 5);
///
/// // As the final link of a chain it fixes the overall result.
/// assert_eq!((Composer >> (|x: i32| x + 1) >> constant("done")).apply(9), "done");
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Given `f(a, b)`, returns `g` such that `g(b, a) == f(a, b)`.
///
/// # Laws
///
/// - `flip(flip(f))(a, b) == f(a, b)`
/// - `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```rust
/// use fnflow::combinators::flip;
///
/// fn subtract(minuend: i32, subtrahend: i32) -> i32 { minuend - subtrahend }
///
/// let flipped = flip(subtract);
/// assert_eq!(flipped(3, 10), 7);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}
