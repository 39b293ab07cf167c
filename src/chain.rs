//! Evaluation structure behind a composed value.
//!
//! Combining functions with the flow operators does not call anything and
//! does not require the combined values to be functions at all: each step
//! just nests plain value types. [`Lift`] wraps a single callable and
//! [`Then`] sequences two already-built nodes. Only invocation, through
//! the [`Invoke`] trait, places `Fn` bounds on the wrapped values — so an
//! incompatible link surfaces where the chain is *called*, not where it
//! is built.
//!
//! Both flow directions share these nodes. The direction is carried by the
//! outer wrapper ([`Rightward`](crate::flow::Rightward) or
//! [`Leftward`](crate::flow::Leftward)), which controls the nesting order
//! when it extends the chain.

/// Invocation of a chain node on an input value.
///
/// Implemented by [`Lift`] for any unary [`Fn`] and by [`Then`]
/// recursively. User code normally does not call this directly;
/// [`Rightward::apply`](crate::flow::Rightward::apply) and
/// [`Leftward::apply`](crate::flow::Leftward::apply) delegate to it.
///
/// # Examples
///
/// ```rust
/// use fnflow::chain::{Invoke, Lift, Then};
///
/// let node = Then::new(Lift::new(|x: i32| x * 2), Lift::new(|x: i32| x + 1));
/// assert_eq!(node.invoke(3), 7);
/// ```
pub trait Invoke<Input> {
    /// The result type of invoking this node.
    type Output;

    /// Evaluates this node on `input`.
    fn invoke(&self, input: Input) -> Self::Output;
}

/// Leaf node: a single callable lifted into the chain structure.
#[derive(Clone, Copy, Debug)]
pub struct Lift<F>(F);

impl<F> Lift<F> {
    /// Wraps a callable as a chain leaf.
    pub const fn new(function: F) -> Self {
        Self(function)
    }

    /// Returns the wrapped callable.
    pub fn into_inner(self) -> F {
        self.0
    }
}

impl<Input, Output, F> Invoke<Input> for Lift<F>
where
    F: Fn(Input) -> Output,
{
    type Output = Output;

    #[inline]
    fn invoke(&self, input: Input) -> Output {
        (self.0)(input)
    }
}

/// Sequencing node: evaluates `First`, then feeds the result to `Second`.
#[derive(Clone, Copy, Debug)]
pub struct Then<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Then<First, Second> {
    /// Sequences two chain nodes.
    pub const fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }
}

impl<Input, First, Second> Invoke<Input> for Then<First, Second>
where
    First: Invoke<Input>,
    Second: Invoke<First::Output>,
{
    type Output = Second::Output;

    #[inline]
    fn invoke(&self, input: Input) -> Self::Output {
        self.second.invoke(self.first.invoke(input))
    }
}
