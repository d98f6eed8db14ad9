use pretty_assertions::assert_eq;

use super::*;

#[test]
fn style_entries_come_first() {
    let output = render_styles(&StyleTable::alba());
    let lines: Vec<Vec<&str>> = output
        .lines()
        .take(7)
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(
        lines,
        [
            vec!["Styles:"],
            vec!["Comment", "italic", "#888"],
            vec!["Keyword", "bold", "#005"],
            vec!["Name", "#f00"],
            vec!["Name.Class", "bold", "#0f0"],
            vec!["Name.Function", "#0f0"],
            vec!["String", "bg:#eee", "#111"],
        ]
    );
}

#[test]
fn token_classes_resolve_through_parents() {
    let output = render_styles(&StyleTable::alba());
    let classes: Vec<Vec<&str>> = output
        .lines()
        .skip_while(|line| *line != "Token classes:")
        .skip(1)
        .map(|line| line.split_whitespace().collect())
        .collect();
    assert_eq!(classes.len(), TokenKind::ALL.len());
    assert_eq!(classes[0], ["Whitespace", "Text.Whitespace", "-"]);
    assert_eq!(classes[2], ["CommentBlock", "Comment.Multiline", "italic", "#888"]);
    assert_eq!(classes[4], ["Identifier", "Name", "#f00"]);
}
