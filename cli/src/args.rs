//! Argument parsing.
//!
//! The front end recognizes exactly one flag, `-r`. Its presence anywhere
//! after the program name selects decode mode. Every other token is ignored,
//! so nothing but the recognized flags ever reaches clap.

use std::ffi::OsString;

use clap::Parser;
use hexpipe_core::codec::Mode;
use hexpipe_core::constants::DECODE_FLAG;

/// Flags the front end recognizes.
pub const RECOGNIZED_FLAGS: &[&str] = &[DECODE_FLAG];

#[derive(Parser, Debug, PartialEq, Eq)]
#[command(
    name = "hexpipe",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct CliArgs {
    /// Decode hex text from stdin back to raw bytes.
    #[arg(short = 'r')]
    pub reverse: bool,
}

impl CliArgs {
    /// Parse a full argv (program name first), dropping unrecognized tokens.
    pub fn parse_filtered<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args = args.into_iter().map(Into::into);
        let program = args.next().unwrap_or_else(|| OsString::from("hexpipe"));
        let recognized = args.filter(|arg| RECOGNIZED_FLAGS.iter().any(|flag| *arg == *flag));

        Self::try_parse_from(std::iter::once(program).chain(recognized))
    }

    pub fn mode(&self) -> Mode {
        if self.reverse {
            Mode::Decode
        } else {
            Mode::Encode
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mode_of(argv: &[&str]) -> Mode {
        CliArgs::parse_filtered(argv.iter().copied()).unwrap().mode()
    }

    #[test]
    fn no_flag_encodes() {
        assert_eq!(mode_of(&["hexpipe"]), Mode::Encode);
    }

    #[test]
    fn flag_anywhere_decodes() {
        assert_eq!(mode_of(&["hexpipe", "-r"]), Mode::Decode);
        assert_eq!(mode_of(&["hexpipe", "foo", "-r", "--bar"]), Mode::Decode);
        assert_eq!(mode_of(&["hexpipe", "-r", "-r"]), Mode::Decode);
    }

    #[test]
    fn unknown_tokens_are_ignored() {
        assert_eq!(mode_of(&["hexpipe", "--help"]), Mode::Encode);
        assert_eq!(mode_of(&["hexpipe", "--version", "-V", "-h"]), Mode::Encode);
        assert_eq!(mode_of(&["hexpipe", "-rr", "r", "--r", "-R"]), Mode::Encode);
    }

    #[test]
    fn empty_argv_encodes() {
        let args = CliArgs::parse_filtered(Vec::<OsString>::new()).unwrap();
        assert_eq!(args.mode(), Mode::Encode);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_tokens_are_ignored() {
        use std::os::unix::ffi::OsStringExt;

        let argv = vec![
            OsString::from("hexpipe"),
            OsString::from_vec(vec![0xff, 0xfe]),
            OsString::from("-r"),
        ];
        assert_eq!(CliArgs::parse_filtered(argv).unwrap().mode(), Mode::Decode);
    }
}
