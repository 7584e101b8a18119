//! Verify command - checks an existing image without rebuilding it.

use anyhow::{bail, Result};

use super::{report, Outcome};
use crate::config::Config;
use crate::verify::verify_image;

/// Execute the verify command.
pub fn cmd_verify(config: &Config) -> Result<Outcome> {
    println!("=== MMUKO-OS Boot Image Verifier ===");
    config.print();
    println!();

    if !config.output.exists() {
        bail!(
            "Image not found: {}. Run 'ringboot' without --verify-only to build it first.",
            config.output.display()
        );
    }

    let verified = verify_image(&config.output)?;
    report(
        config,
        verified,
        "✓ Boot image verified",
        "✗ Boot image verification failed",
    )
}
