pub use crate::sequence::{RandomAccessSequence, SequenceView};
