//! Two-call "ask size, then fetch" protocol shared by the reading calls.
//!
//! The kernel reports the required buffer size on a first call made with an
//! empty buffer and fills a buffer of that size on a second call. Nothing
//! stops another process from changing the attribute set in between, so a
//! fill that does not match the probed size is reported as
//! [`Error::ConcurrentModification`] instead of being retried here.

use crate::error::{ErrnoClass, Error, Operation};
use nix::errno::Errno;
use std::{ffi::OsStr, path::Path};

/// Runs `query` once with an empty buffer to learn the size, then once more
/// with a buffer of exactly that size.
///
/// `query` receives the buffer to fill (empty for the size probe) and returns
/// the number of bytes the kernel needed or wrote.
pub(crate) fn read_sized<F>(
    operation: Operation,
    path: &Path,
    name: Option<&OsStr>,
    mut query: F,
) -> Result<Vec<u8>, Error>
where
    F: FnMut(&mut [u8]) -> Result<usize, Errno>,
{
    let size = query(&mut []).map_err(|e| Error::from_errno(operation, path, name, e))?;
    log::trace!("{operation}({}): probed {size} bytes", path.display());
    if size == 0 {
        return Ok(Vec::new());
    }
    let mut buf = vec![0; size];
    match query(&mut buf) {
        Ok(filled) if filled == size => Ok(buf),
        Ok(filled) => {
            log::warn!(
                "{operation}({}): expected {size} bytes but got {filled}",
                path.display()
            );
            Err(Error::concurrent_modification(operation, path, name))
        }
        Err(e) if ErrnoClass::from(e) == ErrnoClass::BufferTooSmall => {
            log::warn!(
                "{operation}({}): {size} bytes buffer became too small",
                path.display()
            );
            Err(Error::concurrent_modification(operation, path, name))
        }
        Err(e) => Err(Error::from_errno(operation, path, name, e)),
    }
}

/// Splits a NUL separated name list as returned by `llistxattr(2)`.
///
/// The terminator after the last name yields an empty token which is dropped.
pub(crate) fn split_names(buf: &[u8]) -> impl Iterator<Item = &[u8]> {
    buf.split(|b| *b == 0).filter(|name| !name.is_empty())
}
