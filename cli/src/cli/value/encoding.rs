use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// How attribute values are printed.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub(crate) enum Encoding {
    #[default]
    Text,
    Hex,
    Base64,
}

impl Display for Encoding {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Text => "text",
            Encoding::Hex => "hex",
            Encoding::Base64 => "base64",
        })
    }
}

impl FromStr for Encoding {
    type Err = String;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "text" => Ok(Self::Text),
            "hex" => Ok(Self::Hex),
            "base64" => Ok(Self::Base64),
            _ => Err("only allowed `text`, `hex` or `base64`".into()),
        }
    }
}
