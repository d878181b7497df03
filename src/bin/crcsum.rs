//! Print the CRCs of a line of text, a line of hex digits, or files.
//!
//! ```text
//! crcsum [-a | -x] [--variant NAME]... [FILE]...
//! ```
//!
//! With `-a` or `-x` one line is read from standard input and any
//! files are ignored.  Otherwise each file is streamed through the
//! rolling calculators; a file that cannot be opened is reported and
//! skipped.
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use crc_tapestry::{Checksum, Crc, Variant};

/// Width of the name column in the report
const NAME_COLUMN: usize = 14;

#[derive(Parser, Debug)]
#[command(name = "crcsum", version)]
#[command(about = "Calculate CRC-16, CRC-CCITT, CRC-32 and CRC-64 values")]
struct Cli {
    /// Ask for a line of ASCII input; files are ignored
    #[arg(short = 'a', long = "ascii", short_alias = 'A', conflicts_with = "hex")]
    ascii: bool,

    /// Ask for a line of hexadecimal input; files are ignored
    #[arg(short = 'x', long = "hex", short_alias = 'X')]
    hex: bool,

    /// Only print these variants, e.g. CRC-32 or CRC-16/MODBUS
    #[arg(short = 'v', long = "variant", value_name = "NAME")]
    variants: Vec<Variant>,

    /// Files to calculate the CRCs of
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

impl Cli {
    /// Nothing to do, so show the usage
    fn wants_usage(&self) -> bool {
        !self.ascii && !self.hex && self.files.is_empty()
    }

    fn selected_variants(&self) -> Vec<Variant> {
        if self.variants.is_empty() {
            Variant::ALL.to_vec()
        } else {
            self.variants.clone()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if cli.wants_usage() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    run(&cli, stdin.lock(), &mut out)?;
    out.flush()?;

    Ok(())
}

fn run<R: BufRead, W: Write>(cli: &Cli, mut input: R, out: &mut W) -> Result<()> {
    let variants = cli.selected_variants();

    if cli.ascii || cli.hex {
        write!(out, "Input: ")?;
        out.flush()?;

        let mut line = String::new();
        input
            .read_line(&mut line)
            .context("failed to read from standard input")?;
        let line = line.trim_end_matches(['\r', '\n']);

        let data = if cli.hex {
            decode_hex(line)?
        } else {
            line.as_bytes().to_vec()
        };
        log::debug!("calculating {} CRCs over {} bytes", variants.len(), data.len());

        let results: Vec<(Variant, u64)> = variants
            .iter()
            .map(|&variant| (variant, variant.checksum(&data)))
            .collect();
        writeln!(out)?;
        report(out, &format!("\"{}\"", line), &results)?;

        return Ok(());
    }

    for path in &cli.files {
        match checksum_file(path, &variants) {
            Ok(results) => report(out, &path.display().to_string(), &results)?,
            Err(err) => {
                log::warn!("{}: {}", path.display(), err);
                writeln!(out, "{} : cannot open file", path.display())?;
            }
        }
    }

    Ok(())
}

/// Stream a file through a rolling calculator per variant.
fn checksum_file(path: &Path, variants: &[Variant]) -> io::Result<Vec<(Variant, u64)>> {
    log::debug!("reading {}", path.display());

    let mut reader = BufReader::new(File::open(path)?);
    let mut crcs: Vec<Crc> = variants.iter().map(|&variant| Crc::new(variant)).collect();

    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            break;
        }
        for &byte in buf {
            for crc in crcs.iter_mut() {
                crc.update(byte);
            }
        }
        let len = buf.len();
        reader.consume(len);
    }

    Ok(crcs
        .iter()
        .map(|crc| (crc.variant(), crc.finalize()))
        .collect())
}

/// Decode a line of hex digits, ignoring anything that isn't one.
///
/// A trailing odd digit becomes the high nibble of a final byte.
fn decode_hex(line: &str) -> Result<Vec<u8>> {
    let mut digits: String = line.chars().filter(char::is_ascii_hexdigit).collect();
    if digits.len() % 2 == 1 {
        digits.push('0');
    }

    hex::decode(&digits).context("invalid hexadecimal input")
}

/// Print one result line per variant, in hex and decimal.
fn report<W: Write>(out: &mut W, label: &str, results: &[(Variant, u64)]) -> io::Result<()> {
    writeln!(out, "{} :", label)?;

    for &(variant, value) in results {
        let digits = variant.width().hex_digits();
        let pad = 16 - digits;
        writeln!(
            out,
            "{:<NAME_COLUMN$} = 0x{:0digits$X}{:pad$}  /  {}",
            variant.name(),
            value,
            "",
            value
        )?;
    }

    Ok(())
}
