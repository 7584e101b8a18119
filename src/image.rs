//! Boot image builder.
//!
//! Assembles the 512-byte sector from the literal fields in [`crate::layout`]
//! and writes it to disk in one operation.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::common::write_file_with_dirs;
use crate::layout::{
    boot_code_bytes, BOOT_MESSAGE, CHECKSUM, CHECKSUM_OFFSET, CODE_OFFSET, FLAGS, FLAGS_OFFSET,
    MAGIC, MAGIC_OFFSET, MESSAGE_OFFSET, RESERVED, RESERVED_OFFSET, SECTOR_SIZE, SIGNATURE,
    SIGNATURE_OFFSET, VERSION, VERSION_OFFSET,
};

/// A complete boot sector.
#[derive(Clone, PartialEq, Eq)]
pub struct BootImage([u8; SECTOR_SIZE]);

impl BootImage {
    /// Build the sector: zero fill, then each field at its offset.
    pub fn assemble() -> Self {
        let mut sector = [0u8; SECTOR_SIZE];

        // RIFT header
        sector[MAGIC_OFFSET..MAGIC_OFFSET + MAGIC.len()].copy_from_slice(&MAGIC);
        sector[VERSION_OFFSET] = VERSION;
        sector[RESERVED_OFFSET] = RESERVED;
        sector[CHECKSUM_OFFSET] = CHECKSUM;
        sector[FLAGS_OFFSET] = FLAGS;

        let code = boot_code_bytes();
        sector[CODE_OFFSET..CODE_OFFSET + code.len()].copy_from_slice(&code);

        sector[MESSAGE_OFFSET..MESSAGE_OFFSET + BOOT_MESSAGE.len()].copy_from_slice(BOOT_MESSAGE);

        sector[SIGNATURE_OFFSET..].copy_from_slice(&SIGNATURE);

        Self(sector)
    }

    pub fn as_bytes(&self) -> &[u8; SECTOR_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for BootImage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for BootImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BootImage")
            .field("magic", &String::from_utf8_lossy(&self.0[..4]))
            .field("signature", &format_args!("{:02X?}", &self.0[SIGNATURE_OFFSET..]))
            .finish()
    }
}

/// Write a freshly assembled boot image to `path`.
///
/// Creates the parent directory if it is missing and overwrites any
/// existing file. Returns the path written.
pub fn build_image(path: &Path) -> Result<PathBuf> {
    let image = BootImage::assemble();
    write_file_with_dirs(path, &image)?;
    Ok(path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_fields() {
        let image = BootImage::assemble();
        let bytes = image.as_bytes();
        assert_eq!(&bytes[0..4], b"NXOB");
        assert_eq!(bytes[4], 0x01);
        assert_eq!(bytes[5], 0x00);
        assert_eq!(bytes[6], 0xFE);
        assert_eq!(bytes[7], 0x01);
    }

    #[test]
    fn test_code_region() {
        let image = BootImage::assemble();
        let bytes = image.as_bytes();
        assert_eq!(bytes[0x08], 0xFA);
        assert_eq!(&bytes[0x12..0x15], &[0xBE, 0x60, 0x7C]);
        assert_eq!(&bytes[0x22..0x25], &[0xF4, 0xEB, 0xFE]);
        // Gap between code and message stays zeroed
        assert!(bytes[0x25..0x60].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_message_and_padding() {
        let image = BootImage::assemble();
        let bytes = image.as_bytes();
        let end = MESSAGE_OFFSET + BOOT_MESSAGE.len();
        assert_eq!(&bytes[MESSAGE_OFFSET..end], BOOT_MESSAGE);
        assert!(bytes[end..SIGNATURE_OFFSET].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_signature() {
        let image = BootImage::assemble();
        assert_eq!(&image.as_bytes()[510..], &[0x55, 0xAA]);
    }

    #[test]
    fn test_assemble_is_deterministic() {
        assert_eq!(BootImage::assemble(), BootImage::assemble());
    }
}
