use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use xo_offset_core::prelude::{Extraction, extract};

#[derive(Parser)]
#[command(name = "extract-xo-offset")]
#[command(version, about = "Extract the crystal oscillator offset from a WINC efuse dump")]
#[command(
    long_about = "Reads winc_programmer efuse output on stdin, finds the active efuse bank \
                  and prints its XO offset in hex (0x0 if no bank is found).\n\n\
                  Example:\n  winc_programmer_i2c -d winc1500 -r efuse | extract-xo-offset"
)]
struct Args {}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the offset
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    let _args = Args::parse();

    let extraction: Extraction =
        extract(io::stdin().lock()).context("failed to read efuse dump from stdin")?;
    debug!(
        "Extraction result: {:?} (offset {})",
        extraction,
        extraction.offset().value()
    );

    writeln!(io::stdout().lock(), "{}", extraction).context("failed to write XO offset")?;

    Ok(())
}
