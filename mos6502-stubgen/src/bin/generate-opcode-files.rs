//! Generates placeholder modules for every 6502 opcode into a scratch directory.

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use log::{error, info};

use mos6502_stubgen::generator::{Generator, DEFAULT_OUTPUT};
use mos6502_stubgen::template::{StubConfig, DEFAULT_INTERFACE};

/// Generates one placeholder module per 6502 opcode, split into legal and illegal
/// directories.
#[derive(Parser, Debug)]
struct Args {
    /// Scratch directory to generate into. Anything already there is deleted.
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,
    /// Path of the trait the generated types implement.
    #[arg(long, default_value = DEFAULT_INTERFACE)]
    interface: String,
    /// Name on the copyright line of the license header.
    #[arg(long, default_value = "fontivan")]
    copyright_holder: String,
    /// Year on the copyright line of the license header.
    #[arg(long, default_value = "2021")]
    copyright_year: String,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let config = StubConfig {
        interface: args.interface,
        copyright_holder: args.copyright_holder,
        copyright_year: args.copyright_year,
    };
    let generator = Generator::new(args.output, config);

    match generator.run() {
        Ok(report) => {
            info!(
                "Generated {} modules ({} legal, {} illegal) in {}",
                report.total(),
                report.legal,
                report.illegal,
                report.root.display()
            );
            info!(
                "To install, run from the project root: {}",
                install_command(&report.root, &generator.config().interface)
            );
        }
        Err(err) => {
            error!("{}", err);
            process::exit(1);
        }
    }
}

/// Shell command which replaces the emulator's instruction directories with the generated
/// ones. The destination is the module the interface lives in, so an interface of
/// `crate::nes::instructions::Opcode` is installed into `./src/nes/instructions/`.
fn install_command(root: &Path, interface: &str) -> String {
    let mut segments: Vec<_> = interface.trim_start_matches("::").split("::").collect();
    segments.pop();
    if segments.first() == Some(&"crate") {
        segments.remove(0);
    }
    let mut dest = String::from("./src/");
    for segment in segments {
        dest.push_str(segment);
        dest.push('/');
    }
    format!(
        "rm -rf {dest}illegal/ {dest}legal/ && cp -r {}/* {dest}",
        root.display()
    )
}
