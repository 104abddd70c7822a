use std::fmt;

pub use defs::{is_illegal, validate_table, TableError, ILLEGAL_OPCODES};

mod defs;

// Opcode References:
// - 6502 Instruction Set: https://www.masswerk.at/6502/6502_instruction_set.html

/// Whether an opcode is part of the documented 6502 instruction set.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Legality {
    /// Officially documented instruction.
    Legal,
    /// Undocumented instruction. These still do something on real hardware, but their
    /// behavior is only known from reference tables.
    Illegal,
}

impl Legality {
    /// Both legalities, in the order their indexes are generated.
    pub const ALL: [Legality; 2] = [Legality::Legal, Legality::Illegal];

    /// Name of this legality bucket. Also used as the name of the directory the bucket's
    /// modules are generated into.
    pub fn name(self) -> &'static str {
        match self {
            Self::Legal => "legal",
            Self::Illegal => "illegal",
        }
    }

    /// Iterate over every opcode with this legality, in ascending order.
    pub fn opcodes(self) -> impl Iterator<Item = Opcode> {
        Opcode::all().filter(move |opcode| opcode.legality() == self)
    }
}

impl fmt::Display for Legality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single opcode byte. All possible u8 values are valid `Opcode`s, so constructing one
/// cannot fail.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Opcode(u8);

impl Opcode {
    /// Wraps a raw opcode byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The raw opcode byte.
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterate over all 256 opcodes in ascending order.
    pub fn all() -> impl Iterator<Item = Opcode> {
        (0u8..=0xff).map(Opcode)
    }

    /// The opcode as exactly two lowercase hex digits, without a `0x` prefix.
    pub fn hex_label(self) -> String {
        format!("{:02x}", self.0)
    }

    /// Returns true if this opcode is not part of the documented instruction set.
    pub fn is_illegal(self) -> bool {
        is_illegal(self.0)
    }

    /// Which legality bucket this opcode belongs to.
    pub fn legality(self) -> Legality {
        if self.is_illegal() {
            Legality::Illegal
        } else {
            Legality::Legal
        }
    }
}

impl From<u8> for Opcode {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode.0
    }
}

impl fmt::LowerHex for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}
