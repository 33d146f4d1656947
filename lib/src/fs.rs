//! Extended attribute operations on a path.
//!
//! None of these functions follow symbolic links: a link's own attributes are
//! read and written, never its referent's.

use crate::{
    ExtendedAttribute, SetFlags,
    error::{Error, Operation},
    sized::{read_sized, split_names},
    sys,
};
use std::{
    ffi::{OsStr, OsString},
    os::unix::ffi::OsStrExt,
    path::Path,
};

/// Lists the names of the extended attributes of `path`.
///
/// Names are returned in the order the kernel reports them. A file without
/// attributes yields an empty list.
///
/// # Errors
///
/// Returns [`Error::ConcurrentModification`] if the attribute set changed
/// while it was being read, or [`Error::SyscallFailure`] if the kernel
/// rejected the call.
///
/// # Examples
/// ```no_run
/// for name in lxattr::list_attributes("some/file")? {
///     println!("{}", name.to_string_lossy());
/// }
/// # Ok::<(), lxattr::Error>(())
/// ```
pub fn list_attributes<P: AsRef<Path>>(path: P) -> Result<Vec<OsString>, Error> {
    fn inner(path: &Path) -> Result<Vec<OsString>, Error> {
        let buf = read_sized(Operation::List, path, None, |buf| sys::llistxattr(path, buf))?;
        Ok(split_names(&buf)
            .map(|name| OsStr::from_bytes(name).to_os_string())
            .collect())
    }
    inner(path.as_ref())
}

/// Reads the value of the extended attribute `name` of `path`.
///
/// An attribute with an empty value yields an empty vector.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `path` has no attribute `name`,
/// [`Error::ConcurrentModification`] if the value changed size while it was
/// being read, or [`Error::SyscallFailure`] for any other failure.
///
/// # Examples
/// ```no_run
/// let value = lxattr::get_attribute("some/file", "user.comment")?;
/// # Ok::<(), lxattr::Error>(())
/// ```
pub fn get_attribute<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N) -> Result<Vec<u8>, Error> {
    fn inner(path: &Path, name: &OsStr) -> Result<Vec<u8>, Error> {
        read_sized(Operation::Get, path, Some(name), |buf| {
            sys::lgetxattr(path, name, buf)
        })
    }
    inner(path.as_ref(), name.as_ref())
}

/// Sets the extended attribute `name` of `path` to `value`.
///
/// # Errors
///
/// Returns [`Error::AlreadyExists`] for [`SetFlags::CreateOnly`] on an
/// existing attribute, [`Error::NotFound`] for [`SetFlags::ReplaceOnly`] on a
/// missing one, or [`Error::SyscallFailure`] for any other failure.
///
/// # Examples
/// ```no_run
/// use lxattr::SetFlags;
///
/// lxattr::set_attribute("some/file", "user.comment", b"hello", SetFlags::Either)?;
/// # Ok::<(), lxattr::Error>(())
/// ```
pub fn set_attribute<P: AsRef<Path>, N: AsRef<OsStr>>(
    path: P,
    name: N,
    value: &[u8],
    flags: SetFlags,
) -> Result<(), Error> {
    fn inner(path: &Path, name: &OsStr, value: &[u8], flags: SetFlags) -> Result<(), Error> {
        log::debug!(
            "{}({}, {}): {} bytes, {flags:?}",
            Operation::Set,
            path.display(),
            name.to_string_lossy(),
            value.len()
        );
        sys::lsetxattr(path, name, value, flags.bits())
            .map_err(|e| Error::from_errno(Operation::Set, path, Some(name), e))
    }
    inner(path.as_ref(), name.as_ref(), value, flags)
}

/// Removes the extended attribute `name` from `path`.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if `path` has no attribute `name`, or
/// [`Error::SyscallFailure`] for any other failure.
pub fn remove_attribute<P: AsRef<Path>, N: AsRef<OsStr>>(path: P, name: N) -> Result<(), Error> {
    fn inner(path: &Path, name: &OsStr) -> Result<(), Error> {
        log::debug!(
            "{}({}, {})",
            Operation::Remove,
            path.display(),
            name.to_string_lossy()
        );
        sys::lremovexattr(path, name)
            .map_err(|e| Error::from_errno(Operation::Remove, path, Some(name), e))
    }
    inner(path.as_ref(), name.as_ref())
}

/// Removes every extended attribute of `path`.
///
/// The names are listed once and removed in that order. The first failure
/// is returned as is: attributes removed before it stay removed and the rest
/// are left untouched. Attributes added after the names were listed are not
/// removed.
///
/// # Errors
///
/// Any error of [`list_attributes`] or [`remove_attribute`].
pub fn clear_attributes<P: AsRef<Path>>(path: P) -> Result<(), Error> {
    fn inner(path: &Path) -> Result<(), Error> {
        for name in list_attributes(path)? {
            remove_attribute(path, &name)?;
        }
        Ok(())
    }
    inner(path.as_ref())
}

/// Reads every extended attribute of `path` with its value.
///
/// An attribute removed between listing and reading it is skipped.
///
/// # Errors
///
/// Any error of [`list_attributes`] or [`get_attribute`] other than
/// [`Error::NotFound`].
pub fn get_all_attributes<P: AsRef<Path>>(path: P) -> Result<Vec<ExtendedAttribute>, Error> {
    fn inner(path: &Path) -> Result<Vec<ExtendedAttribute>, Error> {
        let mut xattrs = Vec::new();
        for name in list_attributes(path)? {
            match get_attribute(path, &name) {
                Ok(value) => xattrs.push(ExtendedAttribute::new(name, value)),
                Err(Error::NotFound { .. }) => log::debug!(
                    "{}: {} vanished while reading",
                    path.display(),
                    name.to_string_lossy()
                ),
                Err(e) => return Err(e),
            }
        }
        Ok(xattrs)
    }
    inner(path.as_ref())
}

/// Sets each of `xattrs` on `path` in order, stopping at the first failure.
///
/// # Errors
///
/// Any error of [`set_attribute`]. Attributes set before the failure stay set.
pub fn set_attributes<P: AsRef<Path>>(
    path: P,
    xattrs: &[ExtendedAttribute],
    flags: SetFlags,
) -> Result<(), Error> {
    fn inner(path: &Path, xattrs: &[ExtendedAttribute], flags: SetFlags) -> Result<(), Error> {
        for x in xattrs {
            set_attribute(path, x.name(), x.value(), flags)?;
        }
        Ok(())
    }
    inner(path.as_ref(), xattrs, flags)
}
