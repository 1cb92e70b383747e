//! The enumerating view and its indexed cursors.

mod enumerate;
pub use enumerate::{enumerate, Enumerate};
mod pairs;
pub use pairs::Pairs;
