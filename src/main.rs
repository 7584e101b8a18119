//! Ringboot - MMUKO-OS boot image generator.
//!
//! Builds a single 512-byte boot sector:
//! - RIFT header (magic, version, checksum, flags)
//! - Hand-assembled real-mode boot code
//! - Boot message and the 0x55AA signature
//!
//! The image is verified after it is written; a failed check exits with 1.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use ringboot::commands;
use ringboot::config::Config;

#[derive(Parser)]
#[command(name = "ringboot")]
#[command(about = "MMUKO-OS boot image generator")]
#[command(
    after_help = "EXAMPLES:\n  ringboot                      Build img/mmuko-os.img\n  ringboot out/boot.img         Build at a custom path\n  ringboot --verify-only        Check an existing image"
)]
struct Cli {
    /// Output image path (default: img/mmuko-os.img)
    output: Option<PathBuf>,

    /// Verify an existing image instead of building one
    #[arg(long)]
    verify_only: bool,

    /// Print the image report as JSON
    #[arg(long)]
    json: bool,

    /// Print the annotated boot code after the report
    #[arg(long)]
    listing: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new(cli.output, cli.json, cli.listing);

    let outcome = if cli.verify_only {
        commands::cmd_verify(&config)?
    } else {
        commands::cmd_build(&config)?
    };

    let code = outcome.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
