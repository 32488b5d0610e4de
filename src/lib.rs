//! A streaming, character-at-a-time JSON tokenizer with path tracking.
//!
//! Feed input one [`char`] at a time and get back, for every character, a
//! [`Token`] carrying the character itself, a [`TokenKind`] describing its
//! syntactic role, and a JSON-path-like string (`$.users[1].profile.name`)
//! naming where in the document's nesting that character sits. Nothing is
//! buffered beyond the scalar value currently being read and a stack of
//! container frames, so memory use is bounded by nesting depth, not by
//! document size — the tokenizer is built for huge or unbounded streams
//! where only a few fields matter.
//!
//! The tokenizer does not validate the document: malformed input degrades
//! to [`TokenKind::Unknown`] tokens rather than errors, and bracket
//! balance is the caller's concern.
//!
//! # Examples
//!
//! ```
//! use jsontok::{StreamingTokenizer, TokenKind, TokenizerOptions};
//!
//! let mut tokenizer = StreamingTokenizer::new(TokenizerOptions::default());
//! let mut name = String::new();
//! for c in r#"{"users":[{"name":"ada"},{"name":"grace"}]}"#.chars() {
//!     if let Some(token) = tokenizer.push(c) {
//!         if token.path == "$.users[1].name" && token.kind == TokenKind::String {
//!             name.push_str(&token.content);
//!         }
//!     }
//! }
//! assert_eq!(name, "grace");
//! ```
//!
//! With [`TokenizerOptions::decode_escapes`] enabled, escape sequences in
//! string values are buffered and re-emitted as single decoded tokens; an
//! escape like `\n` comes back as one token containing a real newline.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod escape_buffer;
mod options;
mod path;
mod token;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use options::TokenizerOptions;
pub use token::{Token, TokenKind};
pub use tokenizer::{RawTokenizer, StreamingTokenizer};
