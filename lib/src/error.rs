use nix::errno::Errno;
use std::{
    ffi::{OsStr, OsString},
    fmt::{self, Display, Formatter},
    io,
    path::{Path, PathBuf},
};

/// Kernel call an [`Error`] originated from.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum Operation {
    /// `llistxattr(2)`
    List,
    /// `lgetxattr(2)`
    Get,
    /// `lsetxattr(2)`
    Set,
    /// `lremovexattr(2)`
    Remove,
}

impl Operation {
    /// Name of the underlying system call.
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "llistxattr",
            Self::Get => "lgetxattr",
            Self::Set => "lsetxattr",
            Self::Remove => "lremovexattr",
        }
    }
}

impl Display for Operation {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned by the extended attribute operations.
///
/// Every variant records the [`Operation`] that failed, the target path and
/// the attribute name when the call was about a single attribute.
#[derive(thiserror::Error, Clone, Eq, PartialEq, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The attribute set of the target changed between the size query and
    /// the data fetch. Retrying the whole call may succeed.
    #[error("{operation}({}): xattr set changed", Target(.path, .name.as_deref()))]
    ConcurrentModification {
        operation: Operation,
        path: PathBuf,
        name: Option<OsString>,
    },
    /// The named attribute does not exist.
    #[error("{operation}({}): no such attribute", Target(.path, .name.as_deref()))]
    NotFound {
        operation: Operation,
        path: PathBuf,
        name: Option<OsString>,
    },
    /// The attribute already exists and creation was requested.
    #[error("{operation}({}): attribute already exists", Target(.path, .name.as_deref()))]
    AlreadyExists {
        operation: Operation,
        path: PathBuf,
        name: Option<OsString>,
    },
    /// Any other failure reported by the kernel.
    #[error("{operation}({}): {errno}", Target(.path, .name.as_deref()))]
    SyscallFailure {
        operation: Operation,
        path: PathBuf,
        name: Option<OsString>,
        #[source]
        errno: Errno,
    },
}

impl Error {
    /// Builds an error from a kernel error code, classifying it.
    pub(crate) fn from_errno(
        operation: Operation,
        path: &Path,
        name: Option<&OsStr>,
        errno: Errno,
    ) -> Self {
        let path = path.to_path_buf();
        let name = name.map(OsStr::to_os_string);
        match ErrnoClass::from(errno) {
            ErrnoClass::NoSuchAttribute => Self::NotFound {
                operation,
                path,
                name,
            },
            ErrnoClass::AttributeExists => Self::AlreadyExists {
                operation,
                path,
                name,
            },
            ErrnoClass::BufferTooSmall | ErrnoClass::Other => Self::SyscallFailure {
                operation,
                path,
                name,
                errno,
            },
        }
    }

    pub(crate) fn concurrent_modification(
        operation: Operation,
        path: &Path,
        name: Option<&OsStr>,
    ) -> Self {
        Self::ConcurrentModification {
            operation,
            path: path.to_path_buf(),
            name: name.map(OsStr::to_os_string),
        }
    }

    /// The operation that failed.
    #[inline]
    pub fn operation(&self) -> Operation {
        match self {
            Self::ConcurrentModification { operation, .. }
            | Self::NotFound { operation, .. }
            | Self::AlreadyExists { operation, .. }
            | Self::SyscallFailure { operation, .. } => *operation,
        }
    }

    /// The target path of the failed operation.
    #[inline]
    pub fn path(&self) -> &Path {
        match self {
            Self::ConcurrentModification { path, .. }
            | Self::NotFound { path, .. }
            | Self::AlreadyExists { path, .. }
            | Self::SyscallFailure { path, .. } => path,
        }
    }

    /// The attribute name, if the operation was about a single attribute.
    #[inline]
    pub fn name(&self) -> Option<&OsStr> {
        match self {
            Self::ConcurrentModification { name, .. }
            | Self::NotFound { name, .. }
            | Self::AlreadyExists { name, .. }
            | Self::SyscallFailure { name, .. } => name.as_deref(),
        }
    }

    /// The raw kernel error code behind this error.
    ///
    /// `None` for [`Error::ConcurrentModification`] reported from a short
    /// read, where the kernel itself did not fail.
    #[inline]
    pub fn errno(&self) -> Option<Errno> {
        match self {
            Self::ConcurrentModification { .. } => None,
            Self::NotFound { .. } => Some(Errno::ENODATA),
            Self::AlreadyExists { .. } => Some(Errno::EEXIST),
            Self::SyscallFailure { errno, .. } => Some(*errno),
        }
    }

    /// Returns `true` if repeating the same call may succeed.
    #[inline]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ConcurrentModification { .. })
    }
}

impl From<Error> for io::Error {
    #[inline]
    fn from(value: Error) -> Self {
        let kind = match &value {
            Error::NotFound { .. } => io::ErrorKind::NotFound,
            Error::AlreadyExists { .. } => io::ErrorKind::AlreadyExists,
            Error::ConcurrentModification { .. } => io::ErrorKind::Other,
            Error::SyscallFailure { errno, .. } => {
                io::Error::from_raw_os_error(*errno as i32).kind()
            }
        };
        io::Error::new(kind, value)
    }
}

/// Classification of the kernel error codes the xattr calls report.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub(crate) enum ErrnoClass {
    /// `ERANGE`: the supplied buffer cannot hold the result.
    BufferTooSmall,
    /// `ENODATA` (`ENOATTR`): the named attribute is absent.
    NoSuchAttribute,
    /// `EEXIST`: the attribute exists and `XATTR_CREATE` was given.
    AttributeExists,
    Other,
}

impl From<Errno> for ErrnoClass {
    #[inline]
    fn from(value: Errno) -> Self {
        match value {
            Errno::ERANGE => Self::BufferTooSmall,
            Errno::ENODATA => Self::NoSuchAttribute,
            Errno::EEXIST => Self::AttributeExists,
            _ => Self::Other,
        }
    }
}

struct Target<'a>(&'a Path, Option<&'a OsStr>);

impl Display for Target<'_> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0.display(), f)?;
        if let Some(name) = self.1 {
            write!(f, ", {}", name.to_string_lossy())?;
        }
        Ok(())
    }
}
