//! Build command - builds the boot image, then verifies and describes it.

use anyhow::Result;

use super::{report, Outcome};
use crate::config::Config;
use crate::image::build_image;
use crate::verify::verify_image;

/// Execute the build command.
pub fn cmd_build(config: &Config) -> Result<Outcome> {
    println!("=== MMUKO-OS Boot Image Generator ===");
    println!("Creating: {}", config.output.display());

    let path = build_image(&config.output)?;
    let verified = verify_image(&path)?;

    report(
        config,
        verified,
        "✓ Boot image created successfully",
        "✗ Boot image verification failed",
    )
}
