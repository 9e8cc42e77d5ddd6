//! Fixed-width input elements.
//!
//! Input files are dense arrays of a single element type with no header and
//! no padding. Elements are decoded in native byte order, which is what a
//! raw `fread` into a typed array produces.

use std::fmt;
use std::mem::size_of;

/// A fixed-width, plain-old-data value that can be read from an input file.
pub trait Element: Copy + Default + fmt::Debug + fmt::Display + Send + Sync + 'static {
    /// Number of bytes one element occupies in the file.
    const WIDTH: usize;

    /// Type name used in load diagnostics.
    const NAME: &'static str;

    /// Decode one element from exactly [`Self::WIDTH`] bytes.
    ///
    /// # Panics
    /// Panics if `bytes.len() != Self::WIDTH`. The loader only ever passes a
    /// fully-read element.
    fn decode(bytes: &[u8]) -> Self;

    /// Encode this element as it would appear in an input file.
    fn encode(self) -> Vec<u8>;
}

macro_rules! impl_element {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Element for $ty {
                const WIDTH: usize = size_of::<$ty>();
                const NAME: &'static str = stringify!($ty);

                fn decode(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; size_of::<$ty>()];
                    raw.copy_from_slice(bytes);
                    <$ty>::from_ne_bytes(raw)
                }

                fn encode(self) -> Vec<u8> {
                    self.to_ne_bytes().to_vec()
                }
            }
        )*
    };
}

impl_element!(u8, i8, i32, u32);

/// Encode a sequence of elements as a densely packed input file body.
#[must_use]
pub fn encode_all<T: Element>(elements: &[T]) -> Vec<u8> {
    elements.iter().flat_map(|e| e.encode()).collect()
}
