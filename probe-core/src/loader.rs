//! The input loader: reads exactly `N` elements or fails.
//!
//! A trailing partial element is not counted and bytes beyond `N` whole
//! elements are ignored. A short input is always an error, never a padded
//! buffer.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::buffer::InputBuffer;
use crate::element::Element;
use crate::error::LoadError;

/// Load `N` elements of type `T` from the file at `path`.
///
/// The file is closed before the buffer is returned, on both the success
/// and the error path.
///
/// # Errors
/// Returns [`LoadError::Open`] if the file cannot be opened,
/// [`LoadError::ShortRead`] if it holds fewer than `N` whole elements, and
/// [`LoadError::Read`] on any other I/O failure.
pub fn load<T: Element, const N: usize>(path: &Path) -> Result<InputBuffer<T, N>, LoadError> {
    let buffer = {
        let file = File::open(path).map_err(|source| LoadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        read_from::<T, N, _>(BufReader::new(file))?
    };

    tracing::debug!(
        path = %path.display(),
        element = T::NAME,
        count = N,
        "input loaded"
    );

    Ok(buffer)
}

/// Read `N` elements of type `T` from any byte source.
///
/// # Errors
/// Returns [`LoadError::ShortRead`] if the source ends before `N` whole
/// elements were read, or [`LoadError::Read`] on an I/O failure.
pub fn read_from<T: Element, const N: usize, R: Read>(
    mut reader: R,
) -> Result<InputBuffer<T, N>, LoadError> {
    let mut elements = [T::default(); N];
    let mut scratch = vec![0u8; T::WIDTH];
    let mut actual = 0;

    for slot in &mut elements {
        if !read_element(&mut reader, &mut scratch)? {
            break;
        }
        *slot = T::decode(&scratch);
        actual += 1;
    }

    if actual < N {
        return Err(LoadError::ShortRead {
            element: T::NAME,
            required: N,
            actual,
        });
    }

    Ok(InputBuffer::from_array(elements))
}

/// Fill `scratch` completely. Returns `false` if the source ended first.
fn read_element<R: Read>(reader: &mut R, scratch: &mut [u8]) -> Result<bool, LoadError> {
    let mut filled = 0;
    while filled < scratch.len() {
        match reader.read(&mut scratch[filled..]) {
            Ok(0) => return Ok(false),
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(source) => return Err(LoadError::Read { source }),
        }
    }
    Ok(true)
}
