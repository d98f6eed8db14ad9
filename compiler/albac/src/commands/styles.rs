//! The `styles` command: print the Alba style table and the class each
//! token kind is highlighted as.

use std::fmt::Write as _;

use alba_lexer::{token_class, StyleTable, TokenKind};

pub fn list_styles() {
    print!("{}", render_styles(&StyleTable::alba()));
}

pub fn render_styles(table: &StyleTable) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Styles:");
    for (class, style) in table.entries() {
        let _ = writeln!(output, "  {class:<18} {style}");
    }
    let _ = writeln!(output);
    let _ = writeln!(output, "Token classes:");
    for kind in TokenKind::ALL {
        let style = table.for_kind(kind);
        let style = if style.is_empty() { "-" } else { style };
        let _ = writeln!(
            output,
            "  {:<12} {:<18} {style}",
            kind.name(),
            token_class(kind)
        );
    }
    output
}

#[cfg(test)]
mod tests;
