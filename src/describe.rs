//! Boot image report.

use anyhow::{bail, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

use crate::common::read_file;
use crate::layout::{
    CHECKSUM_OFFSET, FLAGS_OFFSET, MAGIC_OFFSET, MESSAGE_OFFSET, SECTOR_SIZE, SIGNATURE_OFFSET,
    VERSION_OFFSET,
};

/// Summary fields decoded from a boot image.
#[derive(Debug, Clone, Serialize)]
pub struct ImageReport {
    pub path: String,
    pub size: usize,
    pub magic: String,
    pub version: u8,
    pub flags: u8,
    pub checksum: u8,
    /// Signature as hex, e.g. `55AA`.
    pub signature: String,
    pub sha256: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ImageReport {
    /// Read and decode the image at `path`.
    pub fn read(path: &Path) -> Result<Self> {
        let data = read_file(path)?;
        Self::from_bytes(path, &data)
    }

    pub fn from_bytes(path: &Path, data: &[u8]) -> Result<Self> {
        if data.len() < SECTOR_SIZE {
            bail!(
                "{} is {} bytes, too short to describe (need {})",
                path.display(),
                data.len(),
                SECTOR_SIZE
            );
        }

        Ok(Self {
            path: path.display().to_string(),
            size: data.len(),
            magic: String::from_utf8_lossy(&data[MAGIC_OFFSET..MAGIC_OFFSET + 4]).into_owned(),
            version: data[VERSION_OFFSET],
            flags: data[FLAGS_OFFSET],
            checksum: data[CHECKSUM_OFFSET],
            signature: format!(
                "{:02X}{:02X}",
                data[SIGNATURE_OFFSET],
                data[SIGNATURE_OFFSET + 1]
            ),
            sha256: format!("{:x}", Sha256::digest(data)),
            message: extract_message(data),
        })
    }

    /// Print the report as text.
    pub fn print(&self) {
        println!("Image: {}", self.path);
        println!("Size: {} bytes", self.size);
        println!("RIFT Magic: {}", self.magic);
        println!("Version: {}", self.version);
        println!("Checksum: 0x{:02X}", self.checksum);
        println!("Boot Signature: 0x{}", self.signature);
        println!("SHA256: {}", self.sha256);

        if let Some(message) = &self.message {
            println!("\nBoot Message:\n{}", message);
        }
    }

    /// Print the report as pretty JSON.
    pub fn print_json(&self) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(self)?);
        Ok(())
    }
}

/// Message text from `MESSAGE_OFFSET` up to the first NUL.
///
/// `None` when there is no NUL after the offset or the message is empty.
pub fn extract_message(data: &[u8]) -> Option<String> {
    let region = data.get(MESSAGE_OFFSET..)?;
    let len = region.iter().position(|&b| b == 0)?;
    if len == 0 {
        return None;
    }
    Some(String::from_utf8_lossy(&region[..len]).into_owned())
}

/// Read the image at `path` and print its report.
pub fn describe_image(path: &Path, json: bool) -> Result<ImageReport> {
    let report = ImageReport::read(path)?;
    if json {
        report.print_json()?;
    } else {
        report.print();
    }
    Ok(report)
}
