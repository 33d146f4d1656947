use std::ffi::{OsStr, OsString};

/// An extended attribute name/value pair read from or written to a file.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ExtendedAttribute {
    name: OsString,
    value: Vec<u8>,
}

impl ExtendedAttribute {
    /// Creates a new [`ExtendedAttribute`].
    ///
    /// # Examples
    /// ```rust
    /// use lxattr::ExtendedAttribute;
    ///
    /// let xattr = ExtendedAttribute::new("user.name".into(), b"value".into());
    /// ```
    #[inline]
    pub const fn new(name: OsString, value: Vec<u8>) -> Self {
        Self { name, value }
    }

    /// Attribute name
    ///
    /// # Examples
    /// ```rust
    /// use lxattr::ExtendedAttribute;
    ///
    /// let xattr = ExtendedAttribute::new("user.name".into(), b"value".into());
    /// assert_eq!("user.name", xattr.name());
    /// ```
    #[inline]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// Attribute value
    ///
    /// # Examples
    /// ```rust
    /// use lxattr::ExtendedAttribute;
    ///
    /// let xattr = ExtendedAttribute::new("user.name".into(), b"value".into());
    /// assert_eq!(b"value", xattr.value());
    /// ```
    #[inline]
    pub fn value(&self) -> &[u8] {
        &self.value
    }

    /// Consumes the attribute, returning its name and value.
    #[inline]
    pub fn into_parts(self) -> (OsString, Vec<u8>) {
        (self.name, self.value)
    }
}
