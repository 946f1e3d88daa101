use syntax::fixture;
use syntax::{MemoryIndex, SyntaxKind};

use crate::{CompletionContext, should_auto_popup};

#[test]
fn prefix_is_the_typed_part_of_the_word() {
    let fx = fixture::parse(r#"(File (Statements (Symbol "prin$0tln")))"#).unwrap();
    let index = MemoryIndex::new();

    let cx = CompletionContext::at_offset(&fx.tree, fx.cursor.unwrap(), &index).unwrap();
    assert_eq!(cx.position.kind(), SyntaxKind::Ident);
    assert_eq!(cx.prefix, "prin");

    let whole = CompletionContext::new(cx.position, &index);
    assert_eq!(whole.prefix, "println");
}

#[test]
fn prefix_is_empty_on_punctuation_and_trivia() {
    let index = MemoryIndex::new();

    let fx = fixture::parse(r#"(File (Statements (Punct "($0")))"#).unwrap();
    let cx = CompletionContext::at_offset(&fx.tree, fx.cursor.unwrap(), &index).unwrap();
    assert_eq!(cx.position.kind(), SyntaxKind::Punct);
    assert_eq!(cx.prefix, "");

    let fx = fixture::parse(r#"(File (Statements (Eol "\n$0")))"#).unwrap();
    let cx = CompletionContext::at_offset(&fx.tree, fx.cursor.unwrap(), &index).unwrap();
    assert_eq!(cx.position.kind(), SyntaxKind::Eol);
    assert_eq!(cx.prefix, "");
}

#[test]
fn word_at_the_cursor_wins_over_following_punctuation() {
    let fx = fixture::parse(r#"(File (Statements (Symbol "Geo$0") (Punct ".")))"#).unwrap();
    let index = MemoryIndex::new();

    let cx = CompletionContext::at_offset(&fx.tree, fx.cursor.unwrap(), &index).unwrap();
    assert_eq!(cx.prefix, "Geo");
}

#[test]
fn auto_popup_on_trigger_characters_outside_text() {
    let fx = fixture::parse(r#"(File (Statements (Symbol "Base$0")))"#).unwrap();
    let token = fx.cursor_token().unwrap();

    for typed in ['.', '(', '[', ' '] {
        assert!(should_auto_popup(token, typed), "{typed:?}");
    }
    assert!(!should_auto_popup(token, 'a'));
    assert!(!should_auto_popup(token, ','));
}

#[test]
fn no_auto_popup_inside_strings_and_commands() {
    let string = fixture::parse(
        r#"(File (Statements (String (Punct "\"") (StringContent (Literal "a$0")) (Punct "\""))))"#,
    )
    .unwrap();
    assert!(!should_auto_popup(string.cursor_token().unwrap(), '.'));

    let quote = fixture::parse(r#"(File (Statements (String (Punct "\"$0") (Punct "\""))))"#)
        .unwrap();
    assert!(!should_auto_popup(quote.cursor_token().unwrap(), ' '));

    let command = fixture::parse(
        r#"(File (Statements (Command (Punct "`") (Literal "ls$0") (Punct "`"))))"#,
    )
    .unwrap();
    assert!(!should_auto_popup(command.cursor_token().unwrap(), ' '));
}
