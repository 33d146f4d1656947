/// How [`set_attribute`](crate::set_attribute) treats an existing attribute.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub enum SetFlags {
    /// Create the attribute or overwrite its value.
    #[default]
    Either,
    /// Fail with [`Error::AlreadyExists`](crate::Error::AlreadyExists) if the
    /// attribute is present.
    CreateOnly,
    /// Fail with [`Error::NotFound`](crate::Error::NotFound) if the attribute
    /// is absent.
    ReplaceOnly,
}

impl SetFlags {
    /// Value passed as the `flags` argument of `lsetxattr(2)`.
    #[inline]
    pub const fn bits(self) -> libc::c_int {
        match self {
            Self::Either => 0,
            Self::CreateOnly => libc::XATTR_CREATE,
            Self::ReplaceOnly => libc::XATTR_REPLACE,
        }
    }
}
