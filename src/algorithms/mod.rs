//! Eager enumeration passes.

mod for_enumerate;
pub use for_enumerate::{for_enumerate, for_enumerate_mut};
