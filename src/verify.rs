//! Boot image verification.
//!
//! Checks, in order:
//! 1. The file is exactly one sector long
//! 2. The RIFT magic is present at offset 0
//! 3. The BIOS boot signature is present at offset 510
//!
//! A failed check is an expected outcome, reported as [`VerifyFailure`]
//! and never as an `Err`. Only I/O problems are errors.

use anyhow::Result;
use std::fmt;
use std::path::Path;

use crate::common::read_file;
use crate::layout::{MAGIC, MAGIC_OFFSET, SECTOR_SIZE, SIGNATURE, SIGNATURE_OFFSET};

/// The first check an image failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyFailure {
    /// Wrong file size.
    Length { actual: usize },
    /// Bytes 0..4 are not the RIFT magic.
    Magic { actual: [u8; 4] },
    /// Bytes 510..512 are not `55 AA`.
    Signature { actual: [u8; 2] },
}

impl fmt::Display for VerifyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { actual } => write!(
                f,
                "Image size is {} bytes (expected {})",
                actual, SECTOR_SIZE
            ),
            Self::Magic { actual } => write!(
                f,
                "RIFT magic is b\"{}\" (expected {})",
                actual.escape_ascii(),
                MAGIC.escape_ascii()
            ),
            Self::Signature { actual } => write!(
                f,
                "Boot signature is {:02X}{:02X} (expected {:02X}{:02X})",
                actual[0], actual[1], SIGNATURE[0], SIGNATURE[1]
            ),
        }
    }
}

impl std::error::Error for VerifyFailure {}

/// Check raw sector bytes.
pub fn check_image(data: &[u8]) -> std::result::Result<(), VerifyFailure> {
    if data.len() != SECTOR_SIZE {
        return Err(VerifyFailure::Length { actual: data.len() });
    }

    let mut magic = [0u8; 4];
    magic.copy_from_slice(&data[MAGIC_OFFSET..MAGIC_OFFSET + 4]);
    if magic != MAGIC {
        return Err(VerifyFailure::Magic { actual: magic });
    }

    let signature = [data[SIGNATURE_OFFSET], data[SIGNATURE_OFFSET + 1]];
    if signature != SIGNATURE {
        return Err(VerifyFailure::Signature { actual: signature });
    }

    Ok(())
}

/// Read the image at `path` and verify it.
///
/// Prints `ERROR: <reason>` and returns `false` if a check fails.
pub fn verify_image(path: &Path) -> Result<bool> {
    let data = read_file(path)?;
    match check_image(&data) {
        Ok(()) => Ok(true),
        Err(failure) => {
            println!("ERROR: {}", failure);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::BootImage;

    fn valid() -> Vec<u8> {
        BootImage::assemble().as_bytes().to_vec()
    }

    #[test]
    fn test_valid_image_passes() {
        assert_eq!(check_image(&valid()), Ok(()));
    }

    #[test]
    fn test_short_image() {
        let data = valid();
        assert_eq!(
            check_image(&data[..100]),
            Err(VerifyFailure::Length { actual: 100 })
        );
    }

    #[test]
    fn test_long_image() {
        let mut data = valid();
        data.push(0);
        assert_eq!(
            check_image(&data),
            Err(VerifyFailure::Length { actual: 513 })
        );
    }

    #[test]
    fn test_empty_image() {
        assert_eq!(check_image(&[]), Err(VerifyFailure::Length { actual: 0 }));
    }

    #[test]
    fn test_bad_magic() {
        let mut data = valid();
        data[0] = b'X';
        assert_eq!(
            check_image(&data),
            Err(VerifyFailure::Magic { actual: *b"XXOB" })
        );
    }

    #[test]
    fn test_bad_signature() {
        let mut data = valid();
        data[511] = 0x00;
        assert_eq!(
            check_image(&data),
            Err(VerifyFailure::Signature { actual: [0x55, 0x00] })
        );
    }

    #[test]
    fn test_length_checked_before_magic() {
        let mut data = valid();
        data[0] = 0;
        data.truncate(511);
        assert!(matches!(
            check_image(&data),
            Err(VerifyFailure::Length { .. })
        ));
    }

    #[test]
    fn test_magic_checked_before_signature() {
        let mut data = valid();
        data[1] = 0;
        data[510] = 0;
        assert!(matches!(check_image(&data), Err(VerifyFailure::Magic { .. })));
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            VerifyFailure::Length { actual: 7 }.to_string(),
            "Image size is 7 bytes (expected 512)"
        );
        assert_eq!(
            VerifyFailure::Magic { actual: [b'A', 0, b'O', b'B'] }.to_string(),
            "RIFT magic is b\"A\\x00OB\" (expected NXOB)"
        );
        assert_eq!(
            VerifyFailure::Signature { actual: [0x55, 0x00] }.to_string(),
            "Boot signature is 5500 (expected 55AA)"
        );
    }
}
