//! Standard sequences satisfying the random access contract.

use super::RandomAccessSequence;
use smallvec::{Array, SmallVec};

impl<T> RandomAccessSequence for [T] {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T, const N: usize> RandomAccessSequence for [T; N] {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
    fn len(&self) -> usize {
        N
    }
}

impl<T> RandomAccessSequence for Vec<T> {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T> RandomAccessSequence for Box<[T]> {
    type Item = T;
    fn as_slice(&self) -> &[T] {
        self
    }
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<A: Array> RandomAccessSequence for SmallVec<A> {
    type Item = A::Item;
    fn as_slice(&self) -> &[A::Item] {
        self
    }
    fn as_mut_slice(&mut self) -> &mut [A::Item] {
        self
    }
}
