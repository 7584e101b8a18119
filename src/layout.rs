//! Boot sector layout.
//!
//! Every byte the builder places, and every offset the verifier and
//! describer read, is defined here:
//!
//! | Offset | Field     | Content               |
//! |--------|-----------|-----------------------|
//! | 0x00   | Magic     | `NXOB`                |
//! | 0x04   | Version   | `0x01`                |
//! | 0x05   | Reserved  | `0x00`                |
//! | 0x06   | Checksum  | `0xFE` (fixed value)  |
//! | 0x07   | Flags     | `0x01`                |
//! | 0x08   | Code      | [`BOOT_CODE`]         |
//! | 0x60   | Message   | [`BOOT_MESSAGE`]      |
//! | 0x1FE  | Signature | `0x55 0xAA`           |

/// Size of a boot sector in bytes.
pub const SECTOR_SIZE: usize = 512;

/// Address the BIOS loads the boot sector to.
pub const LOAD_ADDRESS: u16 = 0x7C00;

pub const MAGIC_OFFSET: usize = 0x00;
pub const VERSION_OFFSET: usize = 0x04;
pub const RESERVED_OFFSET: usize = 0x05;
pub const CHECKSUM_OFFSET: usize = 0x06;
pub const FLAGS_OFFSET: usize = 0x07;
pub const CODE_OFFSET: usize = 0x08;
pub const MESSAGE_OFFSET: usize = 0x60;
pub const SIGNATURE_OFFSET: usize = 0x1FE;

/// RIFT header magic.
pub const MAGIC: [u8; 4] = *b"NXOB";
pub const VERSION: u8 = 0x01;
pub const RESERVED: u8 = 0x00;
/// Header checksum. A fixed value, not derived from the sector contents.
pub const CHECKSUM: u8 = 0xFE;
pub const FLAGS: u8 = 0x01;

/// BIOS boot signature.
pub const SIGNATURE: [u8; 2] = [0x55, 0xAA];

/// Value left in AL when the boot code finishes (NSIGII "yes").
pub const VERIFIED_CODE: u8 = 0x55;

/// Message printed by the boot code, NUL-terminated.
pub const BOOT_MESSAGE: &[u8] = b"=== MMUKO-OS RINGBOOT ===\r\n\
OBINEXUS NSIGII Verify\r\n\
[Phase 1] SPARSE\r\n\
[Phase 2] REMEMBER\r\n\
[Phase 3] ACTIVE\r\n\
[Phase 4] VERIFY\r\n\n\
NSIGII_VERIFIED\r\n\
BOOT_SUCCESS\r\n\0";

/// One hand-assembled real-mode instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub bytes: &'static [u8],
    pub asm: &'static str,
}

const fn ins(bytes: &'static [u8], asm: &'static str) -> Instruction {
    Instruction { bytes, asm }
}

/// Boot code: set up segments and stack, print the message through the
/// BIOS teletype service, leave the verification code in AL and halt.
pub const BOOT_CODE: &[Instruction] = &[
    ins(&[0xFA], "cli"),
    ins(&[0x31, 0xC0], "xor ax, ax"),
    ins(&[0x8E, 0xD8], "mov ds, ax"),
    ins(&[0x8E, 0xC0], "mov es, ax"),
    ins(&[0xBC, 0x00, 0x7C], "mov sp, 0x7C00"),
    // si = LOAD_ADDRESS + MESSAGE_OFFSET
    ins(&[0xBE, 0x60, 0x7C], "mov si, 0x7C60"),
    ins(&[0xB4, 0x0E], "mov ah, 0x0E"),
    ins(&[0xAC], "lodsb"),
    ins(&[0x08, 0xC0], "or al, al"),
    ins(&[0x74, 0x04], "jz done"),
    ins(&[0xCD, 0x10], "int 0x10"),
    ins(&[0xEB, 0xF5], "jmp loop"),
    ins(&[0xB0, VERIFIED_CODE], "mov al, 0x55"),
    ins(&[0xF4], "hlt"),
    ins(&[0xEB, 0xFE], "jmp $"),
];

/// Flattened boot code bytes.
pub fn boot_code_bytes() -> Vec<u8> {
    BOOT_CODE
        .iter()
        .flat_map(|i| i.bytes.iter().copied())
        .collect()
}

/// Print the boot code with absolute sector offsets.
pub fn print_listing() {
    println!("Boot Code:");
    let mut offset = CODE_OFFSET;
    for instruction in BOOT_CODE {
        let hex: Vec<String> = instruction
            .bytes
            .iter()
            .map(|b| format!("{:02X}", b))
            .collect();
        println!("  0x{:04X}  {:<9} {}", offset, hex.join(" "), instruction.asm);
        offset += instruction.bytes.len();
    }
}
