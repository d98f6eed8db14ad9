use super::*;

#[test]
fn alba_metadata() {
    assert_eq!(ALBA.name, "alba");
    assert_eq!(ALBA.names().collect::<Vec<_>>(), ["alba", "Alba"]);
    assert_eq!(ALBA.filenames, ["*.al", "*.ali"]);
    assert_eq!(ALBA.mimetypes, ["text/x-alba"]);
}

#[test]
fn name_lookup_ignores_case() {
    assert!(ALBA.matches_name("alba"));
    assert!(ALBA.matches_name("ALBA"));
    assert!(!ALBA.matches_name("alb"));
}

#[test]
fn filename_patterns() {
    assert!(ALBA.matches_filename("main.al"));
    assert!(ALBA.matches_filename("src/lib/list.ali"));
    assert!(ALBA.matches_filename(".al"));
    assert!(!ALBA.matches_filename("main.alx"));
    assert!(!ALBA.matches_filename("main.AL"));
    assert!(!ALBA.matches_filename("al"));
}

#[test]
fn mimetype_lookup() {
    assert!(ALBA.matches_mimetype("text/x-alba"));
    assert!(ALBA.matches_mimetype("Text/X-Alba"));
    assert!(!ALBA.matches_mimetype("text/plain"));
}

#[test]
fn glob_wildcards() {
    assert!(glob_match(b"*", b""));
    assert!(glob_match(b"*", b"anything"));
    assert!(glob_match(b"a?c", b"abc"));
    assert!(!glob_match(b"a?c", b"ac"));
    assert!(glob_match(b"*.tar.*", b"x.tar.gz"));
    assert!(glob_match(b"a*b*c", b"aXbYbZc"));
    assert!(!glob_match(b"a*b*c", b"aXbYbZ"));
    assert!(!glob_match(b"", b"x"));
}
