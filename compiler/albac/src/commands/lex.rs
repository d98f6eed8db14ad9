//! The `lex` command: tokenize source files and print the token stream.
//!
//! The lexer for each file is picked from the built-in registry by filename
//! unless `--language=<name>` overrides it. Files are lexed in parallel by
//! default; output is printed in argument order once every file is done.

use std::fmt::Write as _;

use alba_lexer::{Lexer, LexerRegistry, StyleTable, TokenKind};
use rayon::prelude::*;

use super::read_file;

/// How each token is printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Kind, span and quoted text.
    #[default]
    Tokens,
    /// Kind only.
    Kinds,
    /// Highlighter class, resolved style and quoted text.
    Styled,
}

/// Configuration for the lex command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOptions {
    /// Paths to lex. `-` reads standard input.
    pub files: Vec<String>,
    /// Lexer name or alias, overriding filename detection.
    pub language: Option<String>,
    pub format: OutputFormat,
    /// Lex files concurrently.
    pub parallel: bool,
    /// Leave whitespace tokens out of the listing.
    pub skip_whitespace: bool,
}

impl Default for LexOptions {
    fn default() -> Self {
        LexOptions {
            files: Vec::new(),
            language: None,
            format: OutputFormat::default(),
            parallel: true,
            skip_whitespace: false,
        }
    }
}

impl LexOptions {
    /// Parse the arguments following `lex`.
    pub fn parse(args: &[String]) -> Result<Self, String> {
        let mut options = Self::default();
        for arg in args {
            match arg.as_str() {
                "--no-parallel" => options.parallel = false,
                "--kinds-only" => options.format = OutputFormat::Kinds,
                "--styled" => options.format = OutputFormat::Styled,
                "--skip-whitespace" => options.skip_whitespace = true,
                "-" => options.files.push(arg.clone()),
                other => {
                    if let Some(name) = other.strip_prefix("--language=") {
                        options.language = Some(name.to_string());
                    } else if other.starts_with('-') {
                        return Err(format!("unknown option: {other}"));
                    } else {
                        options.files.push(arg.clone());
                    }
                }
            }
        }
        if options.files.is_empty() {
            return Err("missing file path".to_string());
        }
        Ok(options)
    }
}

/// Run the lex command, exiting with status 1 if any file failed.
pub fn lex_files(options: &LexOptions) {
    let registry = LexerRegistry::with_builtin();
    let styles = StyleTable::alba();

    let outputs: Vec<Result<String, String>> = if options.parallel {
        options
            .files
            .par_iter()
            .map(|path| lex_file(path, &registry, &styles, options))
            .collect()
    } else {
        options
            .files
            .iter()
            .map(|path| lex_file(path, &registry, &styles, options))
            .collect()
    };

    let mut failed = 0;
    for output in outputs {
        match output {
            Ok(text) => print!("{text}"),
            Err(msg) => {
                eprintln!("error: {msg}");
                failed += 1;
            }
        }
    }
    tracing::debug!(files = options.files.len(), failed, "lex finished");

    if failed > 0 {
        std::process::exit(1);
    }
}

fn lex_file(
    path: &str,
    registry: &LexerRegistry,
    styles: &StyleTable,
    options: &LexOptions,
) -> Result<String, String> {
    let lexer = select_lexer(registry, path, options.language.as_deref())?;
    let source = read_file(path)?;
    render_file(path, &source, lexer, styles, options)
}

fn select_lexer<'r>(
    registry: &'r LexerRegistry,
    path: &str,
    language: Option<&str>,
) -> Result<&'r Lexer, String> {
    match language {
        Some(name) => registry
            .by_name(name)
            .ok_or_else(|| format!("unknown language '{name}'")),
        None => registry
            .for_filename(path)
            .ok_or_else(|| format!("no lexer for '{path}' (use --language=<name>)")),
    }
}

/// Lex `source` and format the listing for one file.
pub fn render_file(
    path: &str,
    source: &str,
    lexer: &Lexer,
    styles: &StyleTable,
    options: &LexOptions,
) -> Result<String, String> {
    let styled = lexer
        .highlight(source, styles)
        .map_err(|e| format!("{path}: {e}"))?;
    let shown: Vec<_> = styled
        .iter()
        .filter(|s| !(options.skip_whitespace && s.token.kind == TokenKind::Whitespace))
        .collect();

    let mut output = String::new();
    let _ = writeln!(
        output,
        "Tokens for '{path}' ({} tokens, {}):",
        shown.len(),
        lexer.name()
    );
    for styled in shown {
        let token = styled.token;
        let kind = token.kind.name();
        let _ = match options.format {
            OutputFormat::Tokens => {
                let span = token.span.to_string();
                writeln!(output, "  {kind:<12} {span:<10} {:?}", token.text)
            }
            OutputFormat::Kinds => writeln!(output, "  {kind}"),
            OutputFormat::Styled => {
                let style = format!("{:?}", styled.style);
                writeln!(output, "  {:<18} {style:<14} {:?}", styled.class, token.text)
            }
        };
    }
    Ok(output)
}

#[cfg(test)]
mod tests;
