//! The `leftward!` macro for building mathematical-order chains.

/// Builds a leftward composed value from a list of functions.
///
/// `leftward!(f, g, h)` is equivalent to `Composer << f << g << h`: the
/// function listed last runs first on the input, and the function listed
/// first runs last (outermost), mirroring mathematical `f ∘ g ∘ h`.
/// Requires at least one function; a trailing comma is accepted.
///
/// # Examples
///
/// ```rust
/// use fnflow::leftward;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// let chain = leftward!(double, increment);
/// assert_eq!(chain.apply(3), 8); // double(increment(3))
/// ```
#[macro_export]
macro_rules! leftward {
    // Accumulator rules: extend the built prefix one function at a time.
    (@extend [$accumulated:expr], $function:expr) => {
        $accumulated << $function
    };
    (@extend [$accumulated:expr], $function:expr, $($remaining:expr),+) => {
        $crate::leftward!(@extend [$accumulated << $function], $($remaining),+)
    };

    // Single function: wrap it directly.
    ($function:expr $(,)?) => {
        $crate::composer::Composer << $function
    };

    // Multiple functions: fold left, earliest function outermost.
    ($function:expr, $($remaining:expr),+ $(,)?) => {
        $crate::leftward!(@extend [$crate::composer::Composer << $function], $($remaining),+)
    };
}
