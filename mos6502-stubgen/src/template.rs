use std::fmt;

use thiserror::Error;

/// Default path of the trait that generated stubs implement.
pub const DEFAULT_INTERFACE: &str = "crate::nes::instructions::Opcode";

/// Rule placed above and below the license text.
const RULE: &str = "////////////////////////////////////////////////////////////////////////////////////////////////////";

const LICENSE_BODY: &str = "\
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the \"Software\"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.";

/// Errors in the options supplied for a run.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The interface was not a plain `::` separated path of identifiers.
    #[error("Interface {0:?} is not a path to a trait")]
    InvalidInterface(String),
    /// The copyright holder or year would break out of the license comment.
    #[error("Copyright {0:?} must be a single line of text")]
    InvalidCopyright(String),
}

/// Options which apply to every file generated in a run. Rendering is a pure function of
/// the opcode and these options.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StubConfig {
    /// Path of the trait every stub implements, as it is written in the `use` line.
    pub interface: String,
    /// Name placed on the copyright line of the license header.
    pub copyright_holder: String,
    /// Year (or range of years) placed on the copyright line of the license header.
    pub copyright_year: String,
}

impl Default for StubConfig {
    fn default() -> Self {
        Self {
            interface: DEFAULT_INTERFACE.to_string(),
            copyright_holder: "fontivan".to_string(),
            copyright_year: "2021".to_string(),
        }
    }
}

impl StubConfig {
    /// Check that these options produce valid Rust.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_trait_path(&self.interface) {
            return Err(ConfigError::InvalidInterface(self.interface.clone()));
        }
        for text in [&self.copyright_holder, &self.copyright_year] {
            if text.contains(&['\n', '\r'][..]) {
                return Err(ConfigError::InvalidCopyright(text.clone()));
            }
        }
        Ok(())
    }

    /// Name of the interface trait, without the module path leading up to it.
    pub fn interface_name(&self) -> &str {
        self.interface
            .rsplit("::")
            .next()
            .unwrap_or(self.interface.as_str())
    }

    /// The license block that starts every generated file. Does not end in a newline.
    pub fn license_header(&self) -> String {
        format!(
            "{RULE}\n// MIT License\n//\n// Copyright (c) {} {}\n{LICENSE_BODY}\n{RULE}",
            self.copyright_year, self.copyright_holder,
        )
    }
}

/// Keywords which can never be used as identifiers, including the reserved ones.
const KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl",
    "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type",
    "typeof", "unsafe", "unsized", "use", "virtual", "where", "while", "yield",
];

/// Returns true if `path` names a trait that can be brought in with a `use` declaration.
///
/// `crate` and `self` may only start a relative path. `super` may start one or follow
/// `self` or another `super`. The last segment names the trait, so it is never a keyword.
fn is_trait_path(path: &str) -> bool {
    let (absolute, path) = match path.strip_prefix("::") {
        Some(rest) => (true, rest),
        None => (false, path),
    };
    let segments: Vec<&str> = path.split("::").collect();
    let Some((name, modules)) = segments.split_last() else {
        return false;
    };
    let mut leading = !absolute;
    for (i, &segment) in modules.iter().enumerate() {
        let root = match segment {
            "crate" | "self" => i == 0,
            "super" => i == 0 || matches!(modules[i - 1], "self" | "super"),
            _ => false,
        };
        if leading && root {
            continue;
        }
        leading = false;
        if !is_ident(segment) {
            return false;
        }
    }
    is_ident(name)
}

/// Returns true if `segment` is a plain identifier which is not a keyword.
fn is_ident(segment: &str) -> bool {
    if KEYWORDS.contains(&segment) {
        return false;
    }
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_ascii_alphabetic() => {
            segment != "_" && chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}

/// The sections of a generated stub module, in the order they are written. Changing the
/// shape of the stubs only requires changing how these fields are filled in.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct StubTemplate {
    /// License block.
    pub header: String,
    /// Single `use` line bringing the interface into scope.
    pub dependency: String,
    /// Declaration of the placeholder type.
    pub type_decl: String,
    /// `impl` block of the interface for the placeholder type.
    pub implementation: String,
}

impl fmt::Display for StubTemplate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}\n\n{}\n\n{}\n\n{}\n",
            self.header, self.dependency, self.type_decl, self.implementation
        )
    }
}
