//! The typed, fully-populated input buffer handed to a target.

use std::ops::Index;

use crate::element::Element;

/// Exactly `N` elements of type `T`, read from an input file.
///
/// A buffer can only be built from a complete array, so a target never sees
/// a short or zero-padded input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputBuffer<T: Element, const N: usize> {
    elements: [T; N],
}

impl<T: Element, const N: usize> InputBuffer<T, N> {
    /// Wrap a complete array of elements.
    #[must_use]
    pub const fn from_array(elements: [T; N]) -> Self {
        Self { elements }
    }

    /// Borrow the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Take the elements by value.
    #[must_use]
    pub fn into_inner(self) -> [T; N] {
        self.elements
    }

    /// Number of elements, always `N`.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the program declares a zero-length input.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T: Element> InputBuffer<T, 1> {
    /// Scalar view of a single-element input.
    #[must_use]
    pub fn into_scalar(self) -> T {
        let [value] = self.elements;
        value
    }
}

impl<T: Element, const N: usize> Index<usize> for InputBuffer<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.elements[index]
    }
}

impl<T: Element, const N: usize> AsRef<[T]> for InputBuffer<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}
