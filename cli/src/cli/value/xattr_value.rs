use base64::Engine;
use std::str::FromStr;

/// Attribute value given on the command line.
///
/// A `0x` prefix introduces hex digits and a `0s` prefix base64, as accepted
/// by `setfattr(1)`. Anything else is taken as-is.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub(crate) struct XattrValue(Vec<u8>);

impl FromStr for XattrValue {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(if let Some(stripped) = s.strip_prefix("0x") {
            const_hex::decode(stripped).map_err(|e| e.to_string())?
        } else if let Some(stripped) = s.strip_prefix("0s") {
            base64::engine::general_purpose::STANDARD
                .decode(stripped)
                .map_err(|e| e.to_string())?
        } else {
            s.into()
        }))
    }
}

impl XattrValue {
    #[inline]
    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}
