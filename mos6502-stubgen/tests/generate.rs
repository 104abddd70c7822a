use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use mos6502_opcodes::opcode::{Legality, Opcode};
use mos6502_stubgen::generator::Generator;
use mos6502_stubgen::render::render;
use mos6502_stubgen::template::StubConfig;
use tempfile::TempDir;
use walkdir::WalkDir;

#[test]
fn generates_every_opcode() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("generated");
    Generator::new(&root, StubConfig::default()).run().unwrap();

    let tree = read_tree(&root);
    // 256 stubs plus one index per bucket.
    assert_eq!(tree.len(), 258);

    let config = StubConfig::default();
    for opcode in Opcode::all() {
        let path = PathBuf::from(opcode.legality().name())
            .join(format!("opcode{}.rs", opcode.hex_label()));
        assert_eq!(tree.get(&path), Some(&render(opcode, &config)), "{}", opcode);
    }
}

#[test]
fn known_opcodes_land_in_expected_buckets() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("generated");
    Generator::new(&root, StubConfig::default()).run().unwrap();

    assert!(root.join("legal/opcode00.rs").is_file());
    assert!(root.join("illegal/opcode02.rs").is_file());
    assert!(root.join("illegal/opcodeff.rs").is_file());
    assert!(root.join("legal/opcodefe.rs").is_file());
    assert!(root.join("legal/opcodefd.rs").is_file());
    assert!(!root.join("legal/opcode02.rs").exists());
    assert!(!root.join("illegal/opcode00.rs").exists());

    let legal = index_entries(&root.join("legal/mod.rs"));
    assert_eq!(legal.first().map(String::as_str), Some("opcode00"));
    let illegal = index_entries(&root.join("illegal/mod.rs"));
    assert_eq!(illegal.first().map(String::as_str), Some("opcode02"));
    assert_eq!(illegal.last().map(String::as_str), Some("opcodeff"));
}

#[test]
fn indexes_match_bucket_contents() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("generated");
    Generator::new(&root, StubConfig::default()).run().unwrap();

    for bucket in Legality::ALL {
        let dir = root.join(bucket.name());
        let entries = index_entries(&dir.join("mod.rs"));
        assert!(entries.windows(2).all(|pair| pair[0] < pair[1]));

        let mut files: Vec<String> = fs::read_dir(&dir)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .filter(|name| name != "mod.rs")
            .map(|name| name.trim_end_matches(".rs").to_string())
            .collect();
        files.sort();
        assert_eq!(entries, files);
        assert_eq!(entries.len(), bucket.opcodes().count());
    }
}

#[test]
fn runs_are_identical() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("generated");
    let generator = Generator::new(&root, StubConfig::default());

    generator.run().unwrap();
    let first = read_tree(&root);
    generator.run().unwrap();
    let second = read_tree(&root);
    assert_eq!(first, second);

    let other = temp.path().join("other");
    Generator::new(&other, StubConfig::default()).run().unwrap();
    assert_eq!(first, read_tree(&other));
}

#[test]
fn replaces_previous_output() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("generated");
    fs::create_dir_all(root.join("legal")).unwrap();
    fs::create_dir_all(root.join("unrelated")).unwrap();
    fs::write(root.join("legal/opcode02.rs"), "left over").unwrap();
    fs::write(root.join("legal/opcode00.rs"), "left over").unwrap();
    fs::write(root.join("unrelated/file.txt"), "left over").unwrap();
    fs::write(root.join("notes.md"), "left over").unwrap();

    Generator::new(&root, StubConfig::default()).run().unwrap();

    let tree = read_tree(&root);
    assert_eq!(tree.len(), 258);
    assert!(!root.join("legal/opcode02.rs").exists());
    assert!(!root.join("unrelated").exists());
    assert!(!root.join("notes.md").exists());
    assert_ne!(
        tree.get(Path::new("legal/opcode00.rs")).map(String::as_str),
        Some("left over")
    );
}

#[test]
fn custom_options_reach_every_file() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("generated");
    let config = StubConfig {
        interface: "crate::models::mos6502::instructions::Instruction".to_string(),
        copyright_holder: "someone else".to_string(),
        copyright_year: "2024".to_string(),
    };
    Generator::new(&root, config).run().unwrap();

    for (path, contents) in read_tree(&root) {
        assert!(
            contents.contains("// Copyright (c) 2024 someone else\n"),
            "{}",
            path.display()
        );
        syn::parse_file(&contents).unwrap();
        if path.file_name().and_then(|name| name.to_str()) != Some("mod.rs") {
            assert!(contents.contains("use crate::models::mos6502::instructions::Instruction;"));
            assert!(contents.contains("impl Instruction for Opcode"));
        }
    }
}

/// Read every file under `root`, keyed by path relative to `root`.
fn read_tree(root: &Path) -> BTreeMap<PathBuf, String> {
    WalkDir::new(root)
        .into_iter()
        .map(|entry| entry.unwrap())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            let relative = entry.path().strip_prefix(root).unwrap().to_path_buf();
            (relative, fs::read_to_string(entry.path()).unwrap())
        })
        .collect()
}

/// Modules declared by an index file, in the order they are declared.
fn index_entries(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .filter_map(|line| line.strip_prefix("pub mod "))
        .map(|line| line.trim_end_matches(';').to_string())
        .collect()
}
