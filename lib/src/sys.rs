//! Raw `l*xattr(2)` calls.
//!
//! Pointers into the caller's buffers never leave this module. An empty
//! buffer is passed to the kernel as a null pointer with size zero, which
//! turns the reading calls into size queries.

use nix::{NixPath, errno::Errno};
use std::{ffi::OsStr, path::Path, ptr};

#[inline]
fn buf_ptr(buf: &mut [u8]) -> *mut libc::c_void {
    if buf.is_empty() {
        ptr::null_mut()
    } else {
        buf.as_mut_ptr().cast()
    }
}

pub(crate) fn llistxattr(path: &Path, buf: &mut [u8]) -> Result<usize, Errno> {
    let res = path.with_nix_path(|path| {
        // SAFETY: `path` is NUL terminated and `buf` is valid for `buf.len()` bytes.
        unsafe { libc::llistxattr(path.as_ptr(), buf_ptr(buf).cast(), buf.len()) }
    })?;
    Errno::result(res).map(|n| n as usize)
}

pub(crate) fn lgetxattr(path: &Path, name: &OsStr, buf: &mut [u8]) -> Result<usize, Errno> {
    let res = path.with_nix_path(|path| {
        name.with_nix_path(|name| {
            // SAFETY: `path` and `name` are NUL terminated and `buf` is valid for `buf.len()` bytes.
            unsafe { libc::lgetxattr(path.as_ptr(), name.as_ptr(), buf_ptr(buf), buf.len()) }
        })
    })??;
    Errno::result(res).map(|n| n as usize)
}

pub(crate) fn lsetxattr(
    path: &Path,
    name: &OsStr,
    value: &[u8],
    flags: libc::c_int,
) -> Result<(), Errno> {
    let res = path.with_nix_path(|path| {
        name.with_nix_path(|name| {
            // SAFETY: `path` and `name` are NUL terminated and `value` is valid for `value.len()` bytes.
            unsafe {
                libc::lsetxattr(
                    path.as_ptr(),
                    name.as_ptr(),
                    value.as_ptr().cast(),
                    value.len(),
                    flags,
                )
            }
        })
    })??;
    Errno::result(res).map(drop)
}

pub(crate) fn lremovexattr(path: &Path, name: &OsStr) -> Result<(), Errno> {
    let res = path.with_nix_path(|path| {
        name.with_nix_path(|name| {
            // SAFETY: `path` and `name` are NUL terminated.
            unsafe { libc::lremovexattr(path.as_ptr(), name.as_ptr()) }
        })
    })??;
    Errno::result(res).map(drop)
}
