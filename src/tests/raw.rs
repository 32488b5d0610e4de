//! Raw-mode token streams checked against full expected vectors.

use alloc::{string::{String, ToString}, vec::Vec};

use rstest::rstest;

use super::{raw_tokens, reassemble};
use crate::{RawTokenizer, TokenKind};

fn assert_stream(input: &str, expected: &[(char, TokenKind, &str)]) {
    let tokens = raw_tokens(input);
    assert_eq!(tokens.len(), input.chars().count());
    assert_eq!(reassemble(&tokens), input);

    let got: Vec<(char, TokenKind, String)> = tokens
        .iter()
        .map(|t| (t.content.chars().next().unwrap(), t.kind, t.path.clone()))
        .collect();
    let want: Vec<(char, TokenKind, String)> = expected
        .iter()
        .map(|&(c, kind, path)| (c, kind, path.to_string()))
        .collect();
    assert_eq!(got, want);
}

#[rstest]
#[case('{', TokenKind::ObjectStart)]
#[case('}', TokenKind::ObjectEnd)]
#[case('[', TokenKind::ArrayStart)]
#[case(']', TokenKind::ArrayEnd)]
#[case(',', TokenKind::Comma)]
#[case(':', TokenKind::Colon)]
#[case('"', TokenKind::Quote)]
#[case(' ', TokenKind::Whitespace)]
#[case('\t', TokenKind::Whitespace)]
#[case('\n', TokenKind::Whitespace)]
#[case('\r', TokenKind::Whitespace)]
#[case('0', TokenKind::Number)]
#[case('9', TokenKind::Number)]
#[case('-', TokenKind::Number)]
#[case('t', TokenKind::Boolean)]
#[case('f', TokenKind::Boolean)]
#[case('n', TokenKind::Null)]
#[case('@', TokenKind::Unknown)]
#[case('%', TokenKind::Unknown)]
fn classifies_lone_characters(#[case] c: char, #[case] kind: TokenKind) {
    let mut tokenizer = RawTokenizer::new();
    let token = tokenizer.push(c);
    assert_eq!(token.kind, kind);
    assert_eq!(token.content, String::from(c));
    assert_eq!(token.path, "$");
}

#[test]
fn simple_object() {
    use TokenKind::{
        Colon, Comma, Key, Number, ObjectEnd, ObjectStart, Quote, String as Str, StringEscape,
        Whitespace,
    };

    assert_stream(
        r#"{"a":"te\n\"st", "b":42}"#,
        &[
            ('{', ObjectStart, "$"),
            ('"', Quote, "$"),
            ('a', Key, "$"),
            ('"', Quote, "$"),
            (':', Colon, "$.a"),
            ('"', Quote, "$.a"),
            ('t', Str, "$.a"),
            ('e', Str, "$.a"),
            ('\\', StringEscape, "$.a"),
            ('n', Str, "$.a"),
            ('\\', StringEscape, "$.a"),
            ('"', Str, "$.a"),
            ('s', Str, "$.a"),
            ('t', Str, "$.a"),
            ('"', Quote, "$.a"),
            (',', Comma, "$"),
            (' ', Whitespace, "$"),
            ('"', Quote, "$"),
            ('b', Key, "$"),
            ('"', Quote, "$"),
            (':', Colon, "$.b"),
            ('4', Number, "$.b"),
            ('2', Number, "$.b"),
            ('}', ObjectEnd, "$"),
        ],
    );
}

#[test]
fn nested_containers_and_literals() {
    use TokenKind::{
        ArrayEnd, ArrayStart, Boolean, Colon, Comma, Key, Null, Number, ObjectEnd, ObjectStart,
        Quote, String as Str,
    };

    assert_stream(
        r#"{"a":{"b":[1,2,"3"],"c":true,"d":{"e":null}},"fake":-1.1}"#,
        &[
            ('{', ObjectStart, "$"),
            ('"', Quote, "$"),
            ('a', Key, "$"),
            ('"', Quote, "$"),
            (':', Colon, "$.a"),
            ('{', ObjectStart, "$.a"),
            ('"', Quote, "$.a"),
            ('b', Key, "$.a"),
            ('"', Quote, "$.a"),
            (':', Colon, "$.a.b"),
            ('[', ArrayStart, "$.a.b"),
            ('1', Number, "$.a.b[0]"),
            (',', Comma, "$.a.b[1]"),
            ('2', Number, "$.a.b[1]"),
            (',', Comma, "$.a.b[2]"),
            ('"', Quote, "$.a.b[2]"),
            ('3', Str, "$.a.b[2]"),
            ('"', Quote, "$.a.b[2]"),
            (']', ArrayEnd, "$.a.b"),
            (',', Comma, "$.a"),
            ('"', Quote, "$.a"),
            ('c', Key, "$.a"),
            ('"', Quote, "$.a"),
            (':', Colon, "$.a.c"),
            ('t', Boolean, "$.a.c"),
            ('r', Boolean, "$.a.c"),
            ('u', Boolean, "$.a.c"),
            ('e', Boolean, "$.a.c"),
            (',', Comma, "$.a"),
            ('"', Quote, "$.a"),
            ('d', Key, "$.a"),
            ('"', Quote, "$.a"),
            (':', Colon, "$.a.d"),
            ('{', ObjectStart, "$.a.d"),
            ('"', Quote, "$.a.d"),
            ('e', Key, "$.a.d"),
            ('"', Quote, "$.a.d"),
            (':', Colon, "$.a.d.e"),
            ('n', Null, "$.a.d.e"),
            ('u', Null, "$.a.d.e"),
            ('l', Null, "$.a.d.e"),
            ('l', Null, "$.a.d.e"),
            ('}', ObjectEnd, "$.a.d"),
            ('}', ObjectEnd, "$.a"),
            (',', Comma, "$"),
            ('"', Quote, "$"),
            ('f', Key, "$"),
            ('a', Key, "$"),
            ('k', Key, "$"),
            ('e', Key, "$"),
            ('"', Quote, "$"),
            (':', Colon, "$.fake"),
            ('-', Number, "$.fake"),
            ('1', Number, "$.fake"),
            ('.', Number, "$.fake"),
            ('1', Number, "$.fake"),
            ('}', ObjectEnd, "$"),
        ],
    );
}

#[test]
fn scalar_termination_redispatches_within_one_push() {
    let tokens = raw_tokens("[1]");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].kind, TokenKind::ArrayStart);
    assert_eq!(tokens[1].kind, TokenKind::Number);
    assert_eq!(tokens[2].kind, TokenKind::ArrayEnd);
    assert_eq!(tokens[2].path, "$");
}

#[test]
fn escaped_quote_stays_string_content() {
    let tokens = raw_tokens(r#""te\n\"st""#);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::Quote,
            TokenKind::String,
            TokenKind::String,
            TokenKind::StringEscape,
            TokenKind::String,
            TokenKind::StringEscape,
            TokenKind::String,
            TokenKind::String,
            TokenKind::String,
            TokenKind::Quote,
        ]
    );
}

#[test]
fn key_escapes_use_key_kinds() {
    let tokens = raw_tokens(r#"{"k\n\"":"vA"}"#);
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::ObjectStart,
            TokenKind::Quote,
            TokenKind::Key,
            TokenKind::KeyEscape,
            TokenKind::Key,
            TokenKind::KeyEscape,
            TokenKind::Key,
            TokenKind::Quote,
            TokenKind::Colon,
            TokenKind::Quote,
            TokenKind::String,
            TokenKind::String,
            TokenKind::Quote,
            TokenKind::ObjectEnd,
        ]
    );
    assert_eq!(reassemble(&tokens), r#"{"k\n\"":"vA"}"#);
}

#[test]
fn unicode_escape_digits_are_plain_content() {
    let tokens = raw_tokens("{\"u\":\"\\u0041B\"}");
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    // Only the backslash is marked as an escape; the `u` and the four hex
    // digits are ordinary string content.
    assert_eq!(
        kinds,
        [
            TokenKind::ObjectStart,
            TokenKind::Quote,
            TokenKind::Key,
            TokenKind::Quote,
            TokenKind::Colon,
            TokenKind::Quote,
            TokenKind::StringEscape,
            TokenKind::String,
            TokenKind::String,
            TokenKind::String,
            TokenKind::String,
            TokenKind::String,
            TokenKind::String,
            TokenKind::Quote,
            TokenKind::ObjectEnd,
        ]
    );
    assert_eq!(reassemble(&tokens), "{\"u\":\"\\u0041B\"}");

    let input =
        "{\"unicode\":\"\\u0041\\u0042\\u0043\",\"with_spaces\" : \"text\\t\\nmore\"}";
    let tokens = raw_tokens(input);
    assert_eq!(tokens.len(), input.chars().count());
    assert_eq!(reassemble(&tokens), input);
}

#[test]
fn escaped_whitespace_round_trips() {
    let input = r#"{"mixed":"\t\n\r\b\f","nested":{"inner":"text\twith\nnewlines"}}"#;
    let tokens = raw_tokens(input);
    assert_eq!(tokens.len(), input.chars().count());
    assert_eq!(reassemble(&tokens), input);
}

#[test]
fn unknown_characters_do_not_derail_the_stream() {
    let tokens = raw_tokens("{@}");
    assert_eq!(tokens[0].kind, TokenKind::ObjectStart);
    assert_eq!(tokens[1].kind, TokenKind::Unknown);
    assert_eq!(tokens[2].kind, TokenKind::ObjectEnd);
    assert_eq!(reassemble(&tokens), "{@}");
}

#[test]
fn multibyte_characters_are_single_tokens() {
    let input = r#"{"name":"张三"}"#;
    let tokens = raw_tokens(input);
    assert_eq!(tokens.len(), input.chars().count());
    assert_eq!(reassemble(&tokens), input);
    assert_eq!(tokens[9].content, "张");
    assert_eq!(tokens[9].kind, TokenKind::String);
    assert_eq!(tokens[9].path, "$.name");
}
