//! hexpipe
//!
//! `hexpipe`      stdin bytes -> lowercase hex on stdout, newline terminated
//! `hexpipe -r`   stdin hex   -> raw bytes on stdout (newlines ignored)

use std::io::{self, Read, Write};

use anyhow::Context;
use hexpipe_core::codec::Mode;
use hexpipe_core::stream::{run_stream, StreamConfig};

mod args;

use args::CliArgs;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse_filtered(std::env::args_os())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(&args, &mut stdin.lock(), &mut stdout.lock())
}

fn run<R, W>(args: &CliArgs, reader: &mut R, writer: &mut W) -> anyhow::Result<()>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let mode = args.mode();
    let config = StreamConfig::new(mode);
    let direction = match mode {
        Mode::Encode => "encoding",
        Mode::Decode => "decoding",
    };

    run_stream(reader, writer, &config).with_context(|| format!("{direction} stdin failed"))?;
    Ok(())
}
