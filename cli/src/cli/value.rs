mod encoding;
mod log_level;
mod xattr_value;

pub(crate) use encoding::Encoding;
pub(crate) use log_level::LogLevel;
pub(crate) use xattr_value::XattrValue;
