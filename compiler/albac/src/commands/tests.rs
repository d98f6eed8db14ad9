use pretty_assertions::assert_eq;

use super::read_file;

#[test]
fn missing_file_message() {
    assert_eq!(
        read_file("does/not/exist.al"),
        Err("cannot find file 'does/not/exist.al'".to_string())
    );
}

#[test]
fn reads_existing_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml");
    let content = read_file(path).unwrap_or_default();
    assert!(content.contains("name = \"albac\""));
}
