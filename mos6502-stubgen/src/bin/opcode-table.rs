//! Prints the 6502 opcode matrix with each opcode marked `L` (legal) or `I` (illegal),
//! laid out like the chart in the masswerk instruction set reference so the two can be
//! compared row by row.

use mos6502_opcodes::opcode::{Legality, Opcode};

fn main() {
    println!("{}", header());
    for high in 0u8..=0xf {
        println!("{}", row(high));
    }
    println!();
    for bucket in Legality::ALL {
        println!(
            "{} {}: {}",
            marker(bucket),
            bucket,
            bucket.opcodes().count()
        );
    }
}

/// Column labels `x0` to `xf`, aligned with the cells below them.
fn header() -> String {
    let mut line = String::from("  ");
    for low in 0u8..=0xf {
        line.push_str(&format!("  x{:x}", low));
    }
    line
}

/// One row of the matrix: the `<high>x` label followed by every opcode sharing that
/// high nibble.
fn row(high: u8) -> String {
    let mut line = format!("{:x}x", high);
    for low in 0u8..=0xf {
        line.push(' ');
        line.push_str(&cell(Opcode::new(high << 4 | low)));
    }
    line
}

fn cell(opcode: Opcode) -> String {
    format!("{}{}", opcode.hex_label(), marker(opcode.legality()))
}

fn marker(bucket: Legality) -> char {
    match bucket {
        Legality::Legal => 'L',
        Legality::Illegal => 'I',
    }
}
