//! The `languages` command: list the lexers in the built-in registry.

use std::fmt::Write as _;

use alba_lexer::LexerRegistry;

pub fn list_languages() {
    print!("{}", render_languages(&LexerRegistry::with_builtin()));
}

pub fn render_languages(registry: &LexerRegistry) -> String {
    let mut output = String::new();
    for lexer in registry.iter() {
        let info = lexer.info();
        let _ = writeln!(output, "{}", info.name);
        let _ = writeln!(output, "  aliases:    {}", info.aliases.join(", "));
        let _ = writeln!(output, "  filenames:  {}", info.filenames.join(", "));
        let _ = writeln!(output, "  mimetypes:  {}", info.mimetypes.join(", "));
    }
    output
}
