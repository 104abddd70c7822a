//! Defines the opcodes for the MOS 6502.
//!
//! Every byte is an opcode of the 6502, but only some of them are documented
//! instructions. The [`opcode`] module supplies [`Opcode`][opcode::Opcode], a single
//! opcode byte, and [`Legality`][opcode::Legality], which sorts the opcodes into the
//! documented ("legal") and undocumented ("illegal") halves of the instruction set.

pub mod opcode;
