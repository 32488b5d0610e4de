//! Cross-module scenario tests for the tokenizer and its decoding facade.

mod raw;

use alloc::{string::String, vec::Vec};

use crate::{RawTokenizer, StreamingTokenizer, Token, TokenizerOptions};

/// Tokenizes `input` in raw mode, one token per character.
pub(crate) fn raw_tokens(input: &str) -> Vec<Token> {
    let mut tokenizer = RawTokenizer::new();
    input.chars().map(|c| tokenizer.push(c)).collect()
}

/// Tokenizes `input` with escape decoding enabled, skipping the pushes
/// that emit nothing.
pub(crate) fn decoded_tokens(input: &str) -> Vec<Token> {
    let mut tokenizer = StreamingTokenizer::new(TokenizerOptions {
        decode_escapes: true,
    });
    input.chars().filter_map(|c| tokenizer.push(c)).collect()
}

/// Concatenates token contents back into a string.
pub(crate) fn reassemble(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.content.as_str()).collect()
}
