//! CLI command handlers.
//!
//! - `build` - build, verify and describe an image
//! - `verify` - verify and describe an existing image

pub mod build;
pub mod verify;

pub use build::cmd_build;
pub use verify::cmd_verify;

use anyhow::Result;

use crate::config::Config;
use crate::describe::describe_image;
use crate::layout::print_listing;

/// Outcome of a command, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Verified,
    Failed,
}

impl Outcome {
    pub fn exit_code(self) -> i32 {
        match self {
            Outcome::Verified => 0,
            Outcome::Failed => 1,
        }
    }
}

/// Print the success or failure marker and, on success, the report.
fn report(
    config: &Config,
    verified: bool,
    success_marker: &str,
    failure_marker: &str,
) -> Result<Outcome> {
    if !verified {
        println!("{}", failure_marker);
        return Ok(Outcome::Failed);
    }

    println!("{}", success_marker);
    println!();
    describe_image(&config.output, config.json())?;
    if config.listing {
        println!();
        print_listing();
    }
    Ok(Outcome::Verified)
}
