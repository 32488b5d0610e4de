//! The token vocabulary shared by the raw machine and the decoding facade.

use alloc::string::String;

/// The syntactic role of a tokenized character.
///
/// The set is closed: every character of a JSON document maps onto exactly
/// one of these kinds. Characters that fit nowhere (malformed input) map
/// onto [`TokenKind::Unknown`] rather than producing an error.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A character that matched no JSON construct.
    Unknown,
    /// A content character of a string value.
    String,
    /// A backslash starting an escape sequence in a string value.
    StringEscape,
    /// A character of a number literal, including sign, dot and exponent.
    Number,
    /// A character of a `true` or `false` literal.
    Boolean,
    /// A character of a `null` literal.
    Null,
    /// An opening `{`.
    ObjectStart,
    /// A closing `}`.
    ObjectEnd,
    /// An opening `[`.
    ArrayStart,
    /// A closing `]`.
    ArrayEnd,
    /// A content character of an object key.
    Key,
    /// A backslash starting an escape sequence in an object key.
    KeyEscape,
    /// A `,` separating array elements or object members.
    Comma,
    /// A `:` separating a key from its value.
    Colon,
    /// A `"` opening or closing a string or key.
    Quote,
    /// Insignificant whitespace between tokens.
    Whitespace,
}

/// A classified piece of input, tagged with the JSON path it belongs to.
///
/// In raw mode `content` is always exactly the one pushed character, so
/// concatenating the contents of every token reproduces the input. With
/// escape decoding enabled, `content` may instead be the decoded form of a
/// whole escape sequence (for example a real newline for `\n`).
///
/// `path` names the logical location of the character in the document's
/// nesting, in a JSON-path-like syntax: a `$` root marker followed by
/// `.key` per object level and `[index]` per array level, outermost first.
/// Keys are not escaped, so keys containing `.` or `[` produce ambiguous
/// paths.
#[cfg_attr(
    any(test, feature = "serde"),
    derive(serde::Serialize, serde::Deserialize)
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The character(s) this token stands for.
    pub content: String,
    /// The syntactic role of the character.
    pub kind: TokenKind,
    /// Where in the document's nesting the character sits.
    pub path: String,
}
