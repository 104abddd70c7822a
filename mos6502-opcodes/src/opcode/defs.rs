//! Provides the table of opcodes which are outside the documented instruction set.

use thiserror::Error;

/// Opcodes which are not part of the documented 6502 instruction set, in ascending order.
/// Every opcode not listed here is legal.
///
/// Transcribed by hand from https://www.masswerk.at/6502/6502_instruction_set.html, so it
/// is checked by [`validate_table`] before any output is generated.
pub const ILLEGAL_OPCODES: [u8; 105] = [
    // 0x0
    0x02, 0x03, 0x04, 0x07, 0x0B, 0x0C, 0x0F,
    // 0x1
    0x12, 0x13, 0x14, 0x17, 0x1A, 0x1B, 0x1C, 0x1F,
    // 0x2
    0x22, 0x23, 0x27, 0x2B, 0x2F,
    // 0x3
    0x32, 0x33, 0x34, 0x37, 0x3A, 0x3B, 0x3C, 0x3F,
    // 0x4
    0x42, 0x43, 0x44, 0x47, 0x4B, 0x4F,
    // 0x5
    0x52, 0x53, 0x54, 0x57, 0x5A, 0x5B, 0x5C, 0x5F,
    // 0x6
    0x62, 0x63, 0x64, 0x67, 0x6B, 0x6F,
    // 0x7
    0x72, 0x73, 0x74, 0x77, 0x7A, 0x7B, 0x7C, 0x7F,
    // 0x8
    0x80, 0x82, 0x83, 0x87, 0x89, 0x8B, 0x8F,
    // 0x9
    0x92, 0x93, 0x97, 0x9B, 0x9C, 0x9E, 0x9F,
    // 0xA
    0xA3, 0xA7, 0xAB, 0xAF,
    // 0xB
    0xB2, 0xB3, 0xB7, 0xBB, 0xBF,
    // 0xC
    0xC2, 0xC3, 0xC7, 0xCB, 0xCF,
    // 0xD
    0xD2, 0xD3, 0xD4, 0xD7, 0xDA, 0xDB, 0xDC, 0xDF,
    // 0xE
    0xE2, 0xE3, 0xE7, 0xEB, 0xEF,
    // 0xF
    0xF2, 0xF3, 0xF4, 0xF7, 0xFA, 0xFB, 0xFC, 0xFF,
];

/// Lookup from opcode byte to whether it appears in [`ILLEGAL_OPCODES`].
const ILLEGAL_LOOKUP: [bool; 256] = {
    let mut lookup = [false; 256];
    let mut i = 0;
    while i < ILLEGAL_OPCODES.len() {
        lookup[ILLEGAL_OPCODES[i] as usize] = true;
        i += 1;
    }
    lookup
};

/// Returns true if the given opcode byte is not part of the documented instruction set.
pub fn is_illegal(value: u8) -> bool {
    ILLEGAL_LOOKUP[value as usize]
}

/// Defects that can be found in an opcode table. Entries are bytes, so they can never be
/// out of range.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum TableError {
    /// The same opcode was listed more than once.
    #[error("Opcode {0:#04x} is listed more than once")]
    Duplicate(u8),
    /// The table is not in ascending order.
    #[error("Opcode {current:#04x} is listed after {previous:#04x}")]
    OutOfOrder {
        /// The entry before the misplaced one.
        previous: u8,
        /// The misplaced entry.
        current: u8,
    },
}

/// Checks that an opcode table lists every opcode at most once, in ascending order.
pub fn validate_table(table: &[u8]) -> Result<(), TableError> {
    let mut seen = [false; 256];
    for &opcode in table {
        if seen[opcode as usize] {
            return Err(TableError::Duplicate(opcode));
        }
        seen[opcode as usize] = true;
    }
    if let Some(pair) = table.windows(2).find(|pair| pair[0] > pair[1]) {
        return Err(TableError::OutOfOrder {
            previous: pair[0],
            current: pair[1],
        });
    }
    Ok(())
}
