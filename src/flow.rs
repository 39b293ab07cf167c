//! Composed-function values: [`Rightward`] and [`Leftward`].
//!
//! A composed value wraps an evaluation chain (see [`crate::chain`]) and a
//! direction, fixed when the chain was started from
//! [`Composer`](crate::composer::Composer) and never changed. Combining an
//! existing value with a further function produces a *new* value; the
//! original is untouched and remains valid.
//!
//! # Laws
//!
//! Writing `~` for the direction's combine operator:
//!
//! - **Associativity**: `((c ~ f) ~ g) ~ h` computes the same function as
//!   `c ~ f` extended with a pre-composed `g`-then-`h`.
//! - **Identity**: combining with [`identity`](crate::combinators::identity)
//!   leaves the computed function unchanged.
//! - **Alias**: `|` and `>>` on rightward values are the same operation.
//!
//! # Direction mixing
//!
//! A chain only defines its own direction's operators, so extending it the
//! other way is a compile error, not a runtime one:
//!
//! ```compile_fail
//! use fnflow::prelude::*;
//!
//! // Rightward chains do not implement `<<`.
//! let chain = (Composer >> |x: i32| x * 2) << |x: i32| x + 1;
//! ```
//!
//! ```compile_fail
//! use fnflow::prelude::*;
//!
//! // Leftward chains implement neither `>>` nor `|`.
//! let chain = (Composer << |x: i32| x * 2) >> |x: i32| x + 1;
//! ```
//!
//! # Failure semantics
//!
//! Invocation is transparent passthrough: whatever a link does — return a
//! value, return a `Result`, panic — reaches the caller exactly as if the
//! nested call expression had been written by hand. The wrapper performs
//! no validation, wrapping, or recovery.

use std::ops::{BitOr, Shl, Shr};

use crate::chain::{Invoke, Lift, Then};

/// A composed function that evaluates left-to-right.
///
/// The function combined earliest runs first on the original input; each
/// subsequently combined function runs on the prior result. Extend with
/// `>>` or its alias `|`.
///
/// # Examples
///
/// ```rust
/// use fnflow::prelude::*;
///
/// let chain = Composer >> (|x: i32| x * 2) >> (|x: i32| x + 1);
/// assert_eq!(chain.apply(3), 7); // (3 * 2) + 1
/// ```
///
/// Values with `Copy` chains (for example chains of `fn` items) can be
/// extended without giving up the original:
///
/// ```rust
/// use fnflow::prelude::*;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// let short = Composer >> double;
/// let long = short >> increment;
/// assert_eq!(short.apply(3), 6); // unchanged by the extension
/// assert_eq!(long.apply(3), 7);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Rightward<Chain> {
    chain: Chain,
}

/// A composed function that evaluates right-to-left.
///
/// Mirrors mathematical composition `f ∘ g`: the function combined
/// earliest is outermost and runs last. Extend with `<<`.
///
/// # Examples
///
/// ```rust
/// use fnflow::prelude::*;
///
/// fn double(value: i32) -> i32 { value * 2 }
/// fn increment(value: i32) -> i32 { value + 1 }
///
/// // double(increment(3)) = 8
/// let chain = Composer << double << increment;
/// assert_eq!(chain.apply(3), 8);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Leftward<Chain> {
    chain: Chain,
}

impl<Chain> Rightward<Chain> {
    pub(crate) const fn new(chain: Chain) -> Self {
        Self { chain }
    }

    /// Invokes the composed chain on `input`.
    ///
    /// Each link must be a unary [`Fn`] whose output type matches the next
    /// link's input type; this is checked here, not when the chain was
    /// built.
    #[inline]
    pub fn apply<Input>(&self, input: Input) -> Chain::Output
    where
        Chain: Invoke<Input>,
    {
        self.chain.invoke(input)
    }

    /// Converts the composed value into a plain closure.
    ///
    /// Useful for handing a chain to iterator adapters and other
    /// higher-order APIs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnflow::prelude::*;
    ///
    /// let chain = Composer >> (|x: i32| x * 2) >> (|x: i32| x + 1);
    /// let results: Vec<i32> = (1..=3).map(chain.into_fn()).collect();
    /// assert_eq!(results, vec![3, 5, 7]);
    /// ```
    pub fn into_fn<Input>(self) -> impl Fn(Input) -> Chain::Output
    where
        Chain: Invoke<Input>,
    {
        move |input| self.chain.invoke(input)
    }

    /// Returns the underlying evaluation chain.
    pub fn into_inner(self) -> Chain {
        self.chain
    }
}

impl<Chain> Leftward<Chain> {
    pub(crate) const fn new(chain: Chain) -> Self {
        Self { chain }
    }

    /// Invokes the composed chain on `input`.
    ///
    /// Identical passthrough semantics to [`Rightward::apply`].
    #[inline]
    pub fn apply<Input>(&self, input: Input) -> Chain::Output
    where
        Chain: Invoke<Input>,
    {
        self.chain.invoke(input)
    }

    /// Converts the composed value into a plain closure.
    pub fn into_fn<Input>(self) -> impl Fn(Input) -> Chain::Output
    where
        Chain: Invoke<Input>,
    {
        move |input| self.chain.invoke(input)
    }

    /// Returns the underlying evaluation chain.
    pub fn into_inner(self) -> Chain {
        self.chain
    }
}

impl<Chain, F> Shr<F> for Rightward<Chain> {
    type Output = Rightward<Then<Chain, Lift<F>>>;

    /// Extends the chain so that `function` runs after everything
    /// combined so far.
    fn shr(self, function: F) -> Self::Output {
        Rightward::new(Then::new(self.chain, Lift::new(function)))
    }
}

impl<Chain, F> BitOr<F> for Rightward<Chain> {
    type Output = Rightward<Then<Chain, Lift<F>>>;

    /// Pipe alias for `>>`; identical semantics.
    fn bitor(self, function: F) -> Self::Output {
        self >> function
    }
}

impl<Chain, F> Shl<F> for Leftward<Chain> {
    type Output = Leftward<Then<Lift<F>, Chain>>;

    /// Extends the chain so that `function` runs first, before everything
    /// combined so far.
    fn shl(self, function: F) -> Self::Output {
        Leftward::new(Then::new(Lift::new(function), self.chain))
    }
}

#[cfg(test)]
mod tests {
    use crate::composer::Composer;

    #[test]
    fn test_rightward_applies_in_construction_order() {
        let chain = Composer >> (|x: i32| x + 1) >> (|x: i32| x * 10);
        // (2 + 1) * 10
        assert_eq!(chain.apply(2), 30);
    }

    #[test]
    fn test_leftward_applies_in_reverse_construction_order() {
        let chain = Composer << (|x: i32| x + 1) << (|x: i32| x * 10);
        // (2 * 10) + 1
        assert_eq!(chain.apply(2), 21);
    }

    #[test]
    fn test_pipe_alias_matches_shr() {
        let piped = Composer | (|x: i32| x + 1) | (|x: i32| x * 10);
        let shifted = Composer >> (|x: i32| x + 1) >> (|x: i32| x * 10);
        assert_eq!(piped.apply(2), shifted.apply(2));
    }

    #[test]
    fn test_types_flow_through_chain() {
        let chain = Composer >> (|x: i32| x.to_string()) >> (|s: String| s.len());
        assert_eq!(chain.apply(12_345), 5);
    }

    #[test]
    fn test_into_fn_round_trips() {
        let chain = Composer >> (|x: i32| x * 2);
        let function = chain.into_fn();
        assert_eq!(function(21), 42);
    }
}
