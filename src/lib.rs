//! This crate provides indexed views over random access sequences.
//!
//! Iterating a sequence while keeping a position counter by hand is easy to
//! get wrong; [`enumerate`] borrows the sequence into a view whose cursors
//! yield `(index, element)` pairs with both advancing in lockstep.
//!
//! ```
//! use enumerate_view::enumerate;
//!
//! let mut values = vec![10u32, 20, 30];
//! for (index, value) in enumerate(&mut values) {
//!     *value += index as u32;
//! }
//! assert_eq!(values, vec![10, 21, 32]);
//! ```
//!
//! The view never copies nor owns the sequence. A shared borrow yields
//! shared element references, an exclusive borrow mutable ones, and a
//! sequence without random access is rejected when the call is compiled.
#![warn(clippy::all)]
#![deny(missing_docs)]

/// Eager enumeration passes.
pub(crate) mod algorithms;
pub use algorithms::{for_enumerate, for_enumerate_mut};
/// Indexed cursors and the enumerating view.
pub mod iter;
pub use iter::{enumerate, Enumerate, Pairs};
/// Import all traits in prelude to adapt your own sequence types.
pub mod prelude;
/// Sequence capability traits.
pub(crate) mod sequence;
pub use sequence::{RandomAccessSequence, SequenceView};
