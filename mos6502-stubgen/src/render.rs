use log::trace;
use mos6502_opcodes::opcode::Opcode;
use proc_macro2::{Ident, Literal};
use quote::format_ident;

use crate::template::{StubConfig, StubTemplate};

/// Name of the module generated for `opcode`, e.g. `opcode1a`.
pub fn module_name(opcode: Opcode) -> Ident {
    format_ident!("opcode{}", opcode.hex_label())
}

/// Name of the file the module for `opcode` is written to, e.g. `opcode1a.rs`.
pub fn file_name(opcode: Opcode) -> String {
    format!("{}.rs", module_name(opcode))
}

/// Name of the placeholder type generated for `opcode`, e.g. `Opcode1a`.
pub fn type_name(opcode: Opcode) -> Ident {
    format_ident!("Opcode{}", opcode.hex_label())
}

/// Fill in the stub template for `opcode`.
pub fn stub_template(opcode: Opcode, config: &StubConfig) -> StubTemplate {
    let name = type_name(opcode);
    let interface = config.interface_name();
    let label = Literal::string(&opcode.hex_label());

    StubTemplate {
        header: config.license_header(),
        dependency: format!("use {};", config.interface),
        type_decl: format!("pub struct {name} {{}}"),
        implementation: format!(
            "\
impl {interface} for {name} {{
    fn get_name(&mut self) -> &str {{
        {label}
    }}

    fn decode(&mut self) {{
        print!(\"TBD\");
    }}
}}"
        ),
    }
}

/// Render the full text of the placeholder module for `opcode`.
pub fn render(opcode: Opcode, config: &StubConfig) -> String {
    trace!("Rendering stub for opcode {}", opcode);
    stub_template(opcode, config).to_string()
}
