//! # fnflow
//!
//! Directional function composition with infix operator syntax.
//!
//! ## Overview
//!
//! This library lets you chain ordinary unary functions into a new
//! composed function using operators, instead of writing nested calls:
//!
//! - `Composer >> f >> g` evaluates left-to-right: data flows forward
//!   through `f`, then `g`.
//! - `Composer << f << g` evaluates right-to-left: mathematical
//!   `f ∘ g` order, where the function written first runs last.
//! - `Composer | f | g` is an exact alias for the rightward spelling.
//!
//! Every combine step produces a new immutable value; the previous chain
//! stays valid and unaffected. A chain started in one direction can only
//! be extended in that direction — the opposite operator is simply not
//! defined for it, so mixing directions is a compile error.
//!
//! ## Example
//!
//! ```rust
//! use fnflow::prelude::*;
//!
//! fn double(value: i32) -> i32 { value * 2 }
//! fn increment(value: i32) -> i32 { value + 1 }
//!
//! // Rightward: increment(double(3)) = 7
//! let forward = Composer >> double >> increment;
//! assert_eq!(forward.apply(3), 7);
//!
//! // Leftward: double(increment(3)) = 8
//! let backward = Composer << double << increment;
//! assert_eq!(backward.apply(3), 8);
//! ```
//!
//! ## Modules
//!
//! - [`composer`]: the [`Composer`](composer::Composer) entry value that
//!   starts every chain
//! - [`flow`]: the [`Rightward`](flow::Rightward) and
//!   [`Leftward`](flow::Leftward) composed-function values
//! - [`chain`]: the evaluation structure behind a composed value
//! - [`combinators`]: `identity`, `constant`, `flip` helper functions
//! - [`rightward!`] and [`leftward!`]: variadic chain constructors

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use fnflow::prelude::*;
/// ```
pub mod prelude {
    pub use crate::chain::*;
    pub use crate::combinators::*;
    pub use crate::composer::*;
    pub use crate::flow::*;
}

pub mod chain;
pub mod combinators;
pub mod composer;
pub mod flow;

mod leftward_macro;
mod rightward_macro;
