//! Extended attribute access that never follows symbolic links.
//!
//! This library wraps the Linux `llistxattr(2)`, `lgetxattr(2)`,
//! `lsetxattr(2)` and `lremovexattr(2)` calls. The reading calls use the
//! kernel's two-step "query size, then fill" convention; when the attribute
//! set changes between the two steps the call fails with
//! [`Error::ConcurrentModification`] rather than returning truncated data.
//! Nothing is retried internally, deciding whether to try again is left to
//! the caller.
//!
//! ```no_run
//! use lxattr::SetFlags;
//!
//! lxattr::set_attribute("some/file", "user.origin", b"mirror", SetFlags::CreateOnly)?;
//! assert_eq!(b"mirror".to_vec(), lxattr::get_attribute("some/file", "user.origin")?);
//! lxattr::clear_attributes("some/file")?;
//! # Ok::<(), lxattr::Error>(())
//! ```
#![doc(html_root_url = "https://docs.rs/lxattr/0.1.0")]
mod attr;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod error;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod flags;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod fs;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod sized;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod sys;

pub use attr::ExtendedAttribute;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use error::{Error, Operation};
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use flags::SetFlags;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use fs::*;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use nix::errno::Errno;

/// `true` on platforms where the attribute operations are available.
pub const SUPPORTED_PLATFORM: bool = cfg!(any(target_os = "linux", target_os = "android"));
