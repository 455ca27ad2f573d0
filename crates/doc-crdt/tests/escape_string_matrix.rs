use doc_crdt::escape_string;

#[test]
fn plain_text_passes_through_unchanged() {
    assert_eq!(escape_string("hello world"), "hello world");
    assert_eq!(escape_string(""), "");
}

#[test]
fn double_quote_gets_a_doubled_backslash() {
    assert_eq!(escape_string("hello world\""), r#"hello world\\""#);
}

#[test]
fn backslash_becomes_four_backslashes() {
    assert_eq!(escape_string("hello world\\"), r"hello world\\\\");
}

#[test]
fn named_control_characters_use_single_letter_escapes() {
    assert_eq!(escape_string("hello world\n"), r"hello world\\n");
    assert_eq!(escape_string("a\rb"), r"a\\rb");
    assert_eq!(escape_string("a\tb"), r"a\\tb");
    assert_eq!(escape_string("a\u{0008}b"), r"a\\bb");
    assert_eq!(escape_string("a\u{000C}b"), r"a\\fb");
}

#[test]
fn unnamed_control_characters_use_four_hex_digits() {
    assert_eq!(escape_string("hello world\u{0000}"), r"hello world\\u0000");
    assert_eq!(escape_string("a\u{001F}b"), r"a\\u001fb");
    assert_eq!(escape_string("a\u{000B}b"), r"a\\u000bb");
}

#[test]
fn non_control_unicode_passes_through_unchanged() {
    assert_eq!(escape_string("hello world\u{1234}"), "hello world\u{1234}");
    assert_eq!(escape_string("héllo 🌍"), "héllo 🌍");
}

#[test]
fn escapes_compose_left_to_right() {
    assert_eq!(escape_string("\\\"\n"), r#"\\\\\\"\\n"#);
}
