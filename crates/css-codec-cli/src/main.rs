//! `cssesc` CLI — escape, unescape, and inspect CSS text from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Escape text for embedding in CSS (stdin → stdout)
//! echo -n '</style>' | cssesc encode
//!
//! # Leave spaces and commas unescaped
//! cssesc encode --immune ' ,' -i fonts.txt -o fonts.css
//!
//! # Decode escapes back to the text a browser sees
//! cssesc decode -i style.css
//!
//! # Show which source bytes decode to what, as JSON
//! cssesc inspect -i style.css
//!
//! # Log replaced code points to stderr
//! cssesc -v decode -i style.css
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use css_codec::{Codec, CssCodec};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "cssesc",
    version,
    about = "CSS backslash escaping and unescaping"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log codec decisions at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Escape text so it is safe inside CSS
    Encode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Characters to leave unescaped
        #[arg(long, default_value = "")]
        immune: String,
    },
    /// Decode CSS escapes back into literal text
    Decode {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print literal and escape segments with their byte ranges as JSON
    Inspect {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let codec = CssCodec;
    match cli.command {
        Commands::Encode {
            input,
            output,
            immune,
        } => {
            let text = read_input(input.as_deref())?;
            let immune: Vec<char> = immune.chars().collect();
            let escaped = codec.encode(&immune, &text);
            write_output(output.as_deref(), &escaped)?;
        }
        Commands::Decode { input, output } => {
            let text = read_input(input.as_deref())?;
            let decoded = codec.decode(&text).context("Failed to decode CSS escapes")?;
            write_output(output.as_deref(), &decoded)?;
        }
        Commands::Inspect { input } => {
            let text = read_input(input.as_deref())?;
            let segments =
                css_codec::segments(&codec, &text).context("Failed to scan CSS escapes")?;
            let json = serde_json::to_string_pretty(&segments)?;
            print!("{}", json);
        }
    }

    Ok(())
}

/// Send logs to stderr so they never mix with escaped output on stdout.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
