//! The `rightward!` macro for building forward-flowing chains.

/// Builds a rightward composed value from a list of functions.
///
/// `rightward!(f, g, h)` is equivalent to `Composer >> f >> g >> h`: the
/// function listed first runs first, and each later function runs on the
/// prior result. Requires at least one function; a trailing comma is
/// accepted.
///
/// # Examples
///
/// ```rust
/// use fnflow::rightward;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// let chain = rightward!(double, increment);
/// assert_eq!(chain.apply(3), 7); // increment(double(3))
/// ```
///
/// ## Closures need no extra parentheses
///
/// Unlike a literal operator chain, the macro's comma-separated arguments
/// keep closure bodies contained:
///
/// ```rust
/// use fnflow::rightward;
///
/// let chain = rightward!(|x: i32| x * 2, |x: i32| x + 1, |x: i32| x - 3);
/// assert_eq!(chain.apply(3), 4);
/// ```
#[macro_export]
macro_rules! rightward {
    // Accumulator rules: extend the built prefix one function at a time.
    (@extend [$accumulated:expr], $function:expr) => {
        $accumulated >> $function
    };
    (@extend [$accumulated:expr], $function:expr, $($remaining:expr),+) => {
        $crate::rightward!(@extend [$accumulated >> $function], $($remaining),+)
    };

    // Single function: wrap it directly.
    ($function:expr $(,)?) => {
        $crate::composer::Composer >> $function
    };

    // Multiple functions: fold left, earliest function innermost.
    ($function:expr, $($remaining:expr),+ $(,)?) => {
        $crate::rightward!(@extend [$crate::composer::Composer >> $function], $($remaining),+)
    };
}
