//! Command handlers for the alba CLI.
//!
//! Each submodule implements one command. Shared helpers like `read_file`
//! live here in the module root.

use std::io::Read;

mod languages;
pub mod lex;
mod styles;

pub use languages::{list_languages, render_languages};
pub use lex::{lex_files, render_file, LexOptions, OutputFormat};
pub use styles::{list_styles, render_styles};

/// Read a source file, or standard input when `path` is `-`.
///
/// Errors are already phrased for the terminal.
pub fn read_file(path: &str) -> Result<String, String> {
    if path == "-" {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(e) => Err(format!("error reading from stdin: {e}")),
        };
    }
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}

#[cfg(test)]
mod tests;
