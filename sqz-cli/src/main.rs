//! sqz CLI - fixed-width LZW stream compressor
//!
//! Compresses or expands a single byte stream, reading from a file or
//! stdin and writing to a file or stdout.

use clap::{Parser, Subcommand};
use sqz_lzw::{CodecConfig, LzwDecoder, LzwEncoder};
use std::fs::File;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "sqz")]
#[command(author, version, about = "Fixed-width LZW stream compressor")]
#[command(long_about = "
sqz losslessly compresses a byte stream with 12-bit LZW coding.
The compressed stream carries no header; the same tool (and width)
must be used on both sides.

Examples:
  sqz compress notes.txt -o notes.sqz
  sqz expand notes.sqz -o notes.txt
  sqz compress < notes.txt > notes.sqz
  sqz expand < notes.sqz
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress input to a codeword stream
    #[command(alias = "c")]
    Compress {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print byte counts and ratio to stderr
        #[arg(short, long)]
        verbose: bool,
    },

    /// Expand a codeword stream back to the original bytes
    #[command(alias = "x")]
    Expand {
        /// Input file (stdin if omitted)
        input: Option<PathBuf>,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print byte counts and ratio to stderr
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Compress {
            input,
            output,
            verbose,
        } => cmd_compress(input.as_deref(), output.as_deref(), verbose),
        Commands::Expand {
            input,
            output,
            verbose,
        } => cmd_expand(input.as_deref(), output.as_deref(), verbose),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_compress(
    input: Option<&Path>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;

    let encoder = LzwEncoder::new(CodecConfig::DEFAULT)?;
    let compressed = encoder.encode(&data)?;

    let mut writer = open_output(output)?;
    writer.write_all(&compressed)?;
    writer.flush()?;

    if verbose {
        print_stats("compressed", data.len(), compressed.len());
    }
    Ok(())
}

fn cmd_expand(
    input: Option<&Path>,
    output: Option<&Path>,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;

    let decoder = LzwDecoder::new(CodecConfig::DEFAULT)?;
    let expanded = decoder.decode(&data)?;

    let mut writer = open_output(output)?;
    writer.write_all(&expanded)?;
    writer.flush()?;

    if verbose {
        print_stats("expanded", data.len(), expanded.len());
    }
    Ok(())
}

/// Read the whole input stream up front; the codec is single-pass over a
/// complete buffer.
fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match path {
        Some(path) => {
            File::open(path)?.read_to_end(&mut data)?;
        }
        None => {
            io::stdin().lock().read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

fn print_stats(label: &str, in_bytes: usize, out_bytes: usize) {
    if in_bytes > 0 {
        eprintln!(
            "{}: {} bytes in, {} bytes out ({:.1}%)",
            label,
            in_bytes,
            out_bytes,
            out_bytes as f64 / in_bytes as f64 * 100.0
        );
    } else {
        eprintln!("{}: {} bytes in, {} bytes out", label, in_bytes, out_bytes);
    }
}
