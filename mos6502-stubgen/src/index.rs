use mos6502_opcodes::opcode::{Legality, Opcode};

use crate::render::module_name;
use crate::template::StubConfig;

/// Build the `mod.rs` for a legality bucket, declaring one public module per opcode in the
/// bucket in ascending opcode order.
///
/// The file is the license header, a blank line, then one `pub mod opcode<hh>;` line per
/// module. A bucket with no modules gets the header followed by a single newline, with no
/// blank line after it.
pub fn build_index(bucket: Legality, config: &StubConfig) -> String {
    render_index(&config.license_header(), bucket.opcodes())
}

/// Write the index text for the given modules, in the order they are given. The blank
/// separator line is only written before the first declaration, so no modules gives
/// `"<header>\n"`.
fn render_index(header: &str, modules: impl IntoIterator<Item = Opcode>) -> String {
    let mut index = String::from(header);
    index.push('\n');
    let mut modules = modules.into_iter().peekable();
    if modules.peek().is_some() {
        index.push('\n');
    }
    for opcode in modules {
        index.push_str(&format!("pub mod {};\n", module_name(opcode)));
    }
    index
}
