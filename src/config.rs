//! Run configuration for ringboot.
//!
//! Resolved from command-line arguments. There is no configuration file
//! and no environment lookup.

use std::path::PathBuf;

/// Output path used when none is given on the command line.
pub const DEFAULT_OUTPUT: &str = "img/mmuko-os.img";

/// How the image report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Ringboot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Boot image path (default: img/mmuko-os.img)
    pub output: PathBuf,
    pub report_format: ReportFormat,
    /// Print the annotated boot code after the report
    pub listing: bool,
}

impl Config {
    /// Resolve configuration, falling back to [`DEFAULT_OUTPUT`].
    pub fn new(output: Option<PathBuf>, json: bool, listing: bool) -> Self {
        Self {
            output: output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            report_format: if json {
                ReportFormat::Json
            } else {
                ReportFormat::Text
            },
            listing,
        }
    }

    pub fn json(&self) -> bool {
        self.report_format == ReportFormat::Json
    }

    /// Print configuration for debugging.
    pub fn print(&self) {
        println!("Configuration:");
        println!("  OUTPUT: {}", self.output.display());
        println!("  REPORT: {:?}", self.report_format);
        println!("  LISTING: {}", self.listing);
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, false, false)
    }
}
