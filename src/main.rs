use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use base32_variants::{decode, encode, encode_into, EncodeOptions, Variant};
use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

const READ_BLOCK: usize = 10000;
const WRITE_BLOCK: usize = READ_BLOCK / 5 * 8;

/// Encode or decode base32 data from FILE (or standard input) to standard output.
#[derive(Parser, Debug)]
#[command(name = "base32", version)]
struct Args {
    /// Input file; `-` or nothing reads standard input
    #[arg()]
    input: Option<PathBuf>,

    #[arg(short, long, conflicts_with = "encode")]
    decode: bool,

    #[arg(short, long)]
    encode: bool,

    #[arg(short, long, value_enum, default_value_t = VariantArg::Rfc4648)]
    variant: VariantArg,

    /// Force padding on or off when encoding
    #[arg(long, conflicts_with = "decode")]
    padding: Option<bool>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum VariantArg {
    Rfc3548,
    Rfc4648,
    #[value(name = "rfc4648-hex")]
    Rfc4648Hex,
    Crockford,
}

impl From<VariantArg> for Variant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Rfc3548 => Variant::Rfc3548,
            VariantArg::Rfc4648 => Variant::Rfc4648,
            VariantArg::Rfc4648Hex => Variant::Rfc4648Hex,
            VariantArg::Crockford => Variant::Crockford,
        }
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("no such file: {}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("read error: {0}")]
    Read(io::Error),
    #[error("write error: {0}")]
    Write(io::Error),
    #[error("input is not valid UTF-8")]
    Utf8(#[from] std::str::Utf8Error),
    #[error(transparent)]
    Codec(#[from] base32_variants::Error),
}

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path).map_err(|source| CliError::Open { path: path.to_owned(), source })?;
            Ok(Box::new(BufReader::new(file)))
        }
        _ => Ok(Box::new(BufReader::new(io::stdin()))),
    }
}

fn read_block(reader: &mut dyn Read, buf: &mut [u8]) -> Result<usize, CliError> {
    loop {
        match reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(CliError::Read(e)),
        }
    }
}

/// Encodes whole 5-byte groups as they arrive; only the residual tail at EOF
/// can need padding, so the output matches a single-shot encode.
fn encode_stream(
    reader: &mut dyn Read,
    writer: &mut impl Write,
    variant: Variant,
    options: EncodeOptions,
) -> Result<(), CliError> {
    let mut read_buf = vec![0u8; READ_BLOCK];
    let mut write_buf = vec![0u8; WRITE_BLOCK];
    let mut residual = 0;

    loop {
        let num_read = read_block(reader, &mut read_buf[residual..])?;
        if num_read == 0 {
            break; // finalize
        }
        let len = residual + num_read;
        let tail = len / 5 * 5;
        let written = encode_into(&read_buf[..tail], &mut write_buf, variant, EncodeOptions::unpadded())?;
        writer.write_all(&write_buf[..written]).map_err(CliError::Write)?;

        read_buf.copy_within(tail..len, 0);
        residual = len - tail;
    }

    debug!(residual, "encoding final group");
    let last = encode(&read_buf[..residual], variant, options)?;
    writer.write_all(last.as_bytes()).map_err(CliError::Write)?;
    writer.flush().map_err(CliError::Write)
}

fn decode_all(reader: &mut dyn Read, writer: &mut impl Write, variant: Variant) -> Result<(), CliError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(CliError::Read)?;
    let text = std::str::from_utf8(&input)?;

    let decoded = decode(text.trim_matches(|c: char| c.is_ascii_whitespace()), variant)?;
    writer.write_all(&decoded).map_err(CliError::Write)?;
    writer.flush().map_err(CliError::Write)
}

fn run(args: &Args) -> Result<(), CliError> {
    let variant = Variant::from(args.variant);
    let mut reader = open_input(args.input.as_deref())?;
    let mut writer = BufWriter::new(io::stdout().lock());

    if args.decode && !args.encode {
        info!(%variant, "decoding");
        decode_all(&mut reader, &mut writer, variant)
    } else {
        let options = EncodeOptions::from(args.padding);
        info!(%variant, padding = options.padding_for(variant), "encoding");
        encode_stream(&mut reader, &mut writer, variant, options)
    }
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("base32: {}", err);
            ExitCode::FAILURE
        }
    }
}
