use crate::{
    cli::{Encoding, Verbosity},
    command::Command,
};
use base64::Engine;
use clap::{ArgGroup, Parser, ValueHint};
use std::{
    fmt::{self, Display, Formatter, Write},
    io,
    path::PathBuf,
};

#[derive(Parser, Clone, Eq, PartialEq, Hash, Debug)]
#[command(
    group(ArgGroup::new("dump-flags").args(["name", "dump"])),
)]
pub(crate) struct GetCommand {
    #[arg(required = true, value_hint = ValueHint::AnyPath)]
    files: Vec<PathBuf>,
    #[arg(short, long, help = "Dump the value of the named extended attribute")]
    name: Option<String>,
    #[arg(short, long, help = "Dump the values of all extended attributes")]
    dump: bool,
    #[arg(short, long, help = "Encode values after retrieving them")]
    encoding: Option<Encoding>,
}

impl Command for GetCommand {
    #[inline]
    fn execute(self, _: Verbosity) -> io::Result<()> {
        get_xattrs(self)
    }
}

fn get_xattrs(args: GetCommand) -> io::Result<()> {
    for path in &args.files {
        println!("# file: {}", path.display());
        if let Some(name) = &args.name {
            let value = lxattr::get_attribute(path, name)?;
            println!("{}={}", name, DisplayValue::new(&value, args.encoding));
        } else if args.dump {
            for attr in lxattr::get_all_attributes(path)? {
                println!(
                    "{}={}",
                    attr.name().to_string_lossy(),
                    DisplayValue::new(attr.value(), args.encoding)
                );
            }
        } else {
            for name in lxattr::list_attributes(path)? {
                println!("{}", name.to_string_lossy());
            }
        }
        println!();
    }
    Ok(())
}

struct DisplayValue<'a> {
    value: &'a [u8],
    encoding: Option<Encoding>,
}

impl<'a> DisplayValue<'a> {
    #[inline]
    const fn new(value: &'a [u8], encoding: Option<Encoding>) -> Self {
        Self { value, encoding }
    }

    #[inline]
    fn fmt_auto(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.value) {
            Ok(s) => fmt_quoted(s, f),
            Err(_e) => self.fmt_hex(f),
        }
    }

    #[inline]
    fn fmt_text(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match std::str::from_utf8(self.value) {
            Ok(s) => fmt_quoted(s, f),
            Err(e) => Display::fmt(&e, f),
        }
    }

    #[inline]
    fn fmt_hex(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("0x")?;
        f.write_str(&const_hex::encode(self.value))
    }

    #[inline]
    fn fmt_base64(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("0s")?;
        f.write_str(&base64::engine::general_purpose::STANDARD.encode(self.value))
    }
}

impl Display for DisplayValue<'_> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.encoding {
            None => self.fmt_auto(f),
            Some(Encoding::Text) => self.fmt_text(f),
            Some(Encoding::Hex) => self.fmt_hex(f),
            Some(Encoding::Base64) => self.fmt_base64(f),
        }
    }
}

#[inline]
fn fmt_quoted(s: &str, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    Display::fmt(&EscapeXattrValueText(s), f)?;
    f.write_char('"')
}

struct EscapeXattrValueText<'s>(&'s str);

impl Display for EscapeXattrValueText<'_> {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.0.chars().try_for_each(|c| match c {
            '"' => f.write_str("\\\""),
            '\\' => f.write_str("\\\\"),
            _ => f.write_char(c),
        })
    }
}
