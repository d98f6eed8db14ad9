use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn render(source: &str, options: &LexOptions) -> String {
    render_file(
        "test.al",
        source,
        &Lexer::alba(),
        &StyleTable::alba(),
        options,
    )
    .unwrap_or_else(|e| panic!("render failed: {e}"))
}

/// Listing lines split into whitespace-separated columns, header dropped.
fn columns(listing: &str) -> Vec<Vec<&str>> {
    listing
        .lines()
        .skip(1)
        .map(|line| line.split_whitespace().collect())
        .collect()
}

#[test]
fn parse_defaults() {
    let options = LexOptions::parse(&args(&["a.al", "b.ali"])).unwrap_or_default();
    assert_eq!(options.files, ["a.al", "b.ali"]);
    assert_eq!(options.format, OutputFormat::Tokens);
    assert!(options.parallel);
    assert!(!options.skip_whitespace);
    assert_eq!(options.language, None);
}

#[test]
fn parse_flags() {
    let options = LexOptions::parse(&args(&[
        "--no-parallel",
        "--styled",
        "--skip-whitespace",
        "--language=Alba",
        "-",
    ]))
    .unwrap_or_default();
    assert_eq!(options.files, ["-"]);
    assert_eq!(options.format, OutputFormat::Styled);
    assert!(!options.parallel);
    assert!(options.skip_whitespace);
    assert_eq!(options.language.as_deref(), Some("Alba"));
}

#[test]
fn parse_errors() {
    assert_eq!(
        LexOptions::parse(&args(&["--bogus", "a.al"])),
        Err("unknown option: --bogus".to_string())
    );
    assert_eq!(
        LexOptions::parse(&args(&["--kinds-only"])),
        Err("missing file path".to_string())
    );
}

#[test]
fn kinds_listing() {
    let options = LexOptions {
        format: OutputFormat::Kinds,
        ..LexOptions::default()
    };
    assert_eq!(
        render("class x", &options),
        "Tokens for 'test.al' (3 tokens, alba):\n  Keyword\n  Whitespace\n  Identifier\n"
    );
}

#[test]
fn token_listing_has_spans() {
    let listing = render("x -- c", &LexOptions::default());
    assert_eq!(
        columns(&listing),
        [
            vec!["Identifier", "0..1", "\"x\""],
            vec!["Whitespace", "1..2", "\" \""],
            vec!["CommentLine", "2..6", "\"--", "c\""],
        ]
    );
}

#[test]
fn skip_whitespace() {
    let options = LexOptions {
        format: OutputFormat::Kinds,
        skip_whitespace: true,
        ..LexOptions::default()
    };
    assert_eq!(
        render("class x {: c :}", &options),
        "Tokens for 'test.al' (3 tokens, alba):\n  Keyword\n  Identifier\n  CommentBlock\n"
    );
}

#[test]
fn styled_listing() {
    let options = LexOptions {
        format: OutputFormat::Styled,
        skip_whitespace: true,
        ..LexOptions::default()
    };
    assert_eq!(
        columns(&render("class x 1", &options)),
        [
            vec!["Keyword", "\"bold", "#005\"", "\"class\""],
            vec!["Name", "\"#f00\"", "\"x\""],
            vec!["Number", "\"\"", "\"1\""],
        ]
    );
}

#[test]
fn lexer_selection() {
    let registry = LexerRegistry::with_builtin();
    assert_eq!(
        select_lexer(&registry, "src/list.ali", None).map(Lexer::name),
        Ok("alba")
    );
    assert_eq!(
        select_lexer(&registry, "-", Some("ALBA")).map(Lexer::name),
        Ok("alba")
    );
    assert_eq!(
        select_lexer(&registry, "notes.txt", None).map(Lexer::name),
        Err("no lexer for 'notes.txt' (use --language=<name>)".to_string())
    );
    assert_eq!(
        select_lexer(&registry, "a.al", Some("cobol")).map(Lexer::name),
        Err("unknown language 'cobol'".to_string())
    );
}

#[test]
fn missing_file_is_reported() {
    let registry = LexerRegistry::with_builtin();
    let result = lex_file(
        "missing.al",
        &registry,
        &StyleTable::alba(),
        &LexOptions::default(),
    );
    assert_eq!(result, Err("cannot find file 'missing.al'".to_string()));
}

/// In-memory log sink for asserting on `tracing` output.
#[derive(Clone, Default)]
struct CapturedLog(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLog {
    fn contents(&self) -> String {
        self.0
            .lock()
            .map(|buf| String::from_utf8_lossy(&buf).into_owned())
            .unwrap_or_default()
    }
}

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if let Ok(mut log) = self.0.lock() {
            log.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLog {
    type Writer = CapturedLog;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

#[test]
fn listing_goes_through_logged_lex() {
    let log = CapturedLog::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(log.clone())
        .finish();

    let listing = tracing::subscriber::with_default(subscriber, || {
        render("x {: open", &LexOptions::default())
    });

    assert!(listing.starts_with("Tokens for 'test.al' (3 tokens, alba):"));
    let log = log.contents();
    assert!(log.contains("lexer=\"alba\""), "{log}");
    assert!(log.contains("unclosed=1"), "{log}");
    assert!(log.contains("lexed count=3"), "{log}");
}
