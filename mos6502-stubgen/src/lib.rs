//! Generates placeholder instruction modules for every opcode of the MOS 6502.
//!
//! A run writes one module per opcode into a scratch directory, split into a `legal` and
//! an `illegal` directory according to [`Legality`][mos6502_opcodes::opcode::Legality],
//! along with a `mod.rs` for each directory that declares its modules in opcode order.
//! The output is meant to be copied over the emulator's instruction directories by hand.
//!
//! [`Generator`][generator::Generator] runs the whole sequence. The other modules provide
//! its individual steps.

/// Orchestrates a complete generation run.
pub mod generator;

/// Builds the `mod.rs` index for each legality bucket.
pub mod index;

/// Renders the placeholder module for a single opcode.
pub mod render;

/// Text shared by every generated file, and the options that control it.
pub mod template;

/// Owns the scratch directory that output is written into.
pub mod workspace;
