//! The character-dispatch state machine and the streaming facade.
//!
//! [`RawTokenizer`] is the core: push one character, get exactly one token
//! back, every time. Dispatch is an exhaustive match over a closed
//! [`State`] enum; the container stack and path rendering live in
//! [`PathStack`]. When a number or keyword is terminated by a structural
//! character, that character is re-dispatched through the idle handler
//! within the same call, so the 1:1 character-to-token mapping holds even
//! though scalars have no terminator of their own.
//!
//! [`StreamingTokenizer`] wraps the core and optionally rewrites escape
//! sequences in string values: raw escape tokens are withheld and, once a
//! whole sequence has arrived, replaced by one token carrying the decoded
//! text. Object keys are exempt and always stream through raw.
//!
//! Path timing is defined per operator, not as "whatever the stack says":
//! a closing `}`/`]` renders the parent path (after the pop), a comma
//! renders the position of the *upcoming* element or member, and the
//! closing quote of a key renders the path from before the key was
//! assigned. The tests in `crate::tests::paths` pin these down.

use alloc::string::String;

use crate::{
    escape_buffer::EscapeBuffer,
    options::TokenizerOptions,
    path::PathStack,
    token::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Between values; structural characters are handled here.
    Idle,
    /// Inside a string value.
    StringValue,
    /// Inside an object key.
    StringKey,
    /// Inside a number literal.
    Number,
    /// Inside `true` or `false`.
    BooleanLiteral,
    /// Inside `null`.
    NullLiteral,
}

/// The low-level tokenizer: one token out for every character in.
///
/// Feeding the characters of a document in order yields a token stream
/// whose concatenated contents reproduce the document exactly. No
/// validation is performed; a character that fits nothing becomes a
/// [`TokenKind::Unknown`] token and parsing carries on.
#[derive(Debug)]
pub struct RawTokenizer {
    state: State,
    path: PathStack,
    buffer: String,
    escape_next: bool,
}

impl Default for RawTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RawTokenizer {
    /// Creates a tokenizer positioned before the first character of a
    /// document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: State::Idle,
            path: PathStack::new(),
            buffer: String::new(),
            escape_next: false,
        }
    }

    /// Processes one input character and returns its token.
    pub fn push(&mut self, c: char) -> Token {
        match self.state {
            State::Idle => self.handle_idle(c),
            State::StringKey => self.handle_string(c, true),
            State::StringValue => self.handle_string(c, false),
            State::Number => self.handle_number(c),
            State::BooleanLiteral | State::NullLiteral => self.handle_keyword(c),
        }
    }

    fn token(&mut self, c: char, kind: TokenKind) -> Token {
        Token {
            content: String::from(c),
            kind,
            path: self.path.render(),
        }
    }

    fn handle_idle(&mut self, c: char) -> Token {
        match c {
            '{' => {
                self.path.begin_element();
                self.path.push_object();
                self.token(c, TokenKind::ObjectStart)
            }
            '}' => {
                self.path.pop();
                self.state = State::Idle;
                self.buffer.clear();
                self.token(c, TokenKind::ObjectEnd)
            }
            '[' => {
                self.path.begin_element();
                self.path.push_array();
                // The fresh frame has no element yet, so the rendered path
                // is still the parent's.
                self.token(c, TokenKind::ArrayStart)
            }
            ']' => {
                self.state = State::Idle;
                self.buffer.clear();
                self.path.pop();
                self.token(c, TokenKind::ArrayEnd)
            }
            '"' => {
                self.buffer.clear();
                if self.path.awaiting_key() {
                    self.state = State::StringKey;
                } else {
                    self.path.begin_element();
                    self.state = State::StringValue;
                }
                self.token(c, TokenKind::Quote)
            }
            ':' => {
                self.state = State::Idle;
                self.buffer.clear();
                self.token(c, TokenKind::Colon)
            }
            ',' => {
                self.state = State::Idle;
                self.buffer.clear();
                self.path.next_sibling();
                self.token(c, TokenKind::Comma)
            }
            ' ' | '\t' | '\n' | '\r' => self.token(c, TokenKind::Whitespace),
            _ => self.handle_value_start(c),
        }
    }

    fn handle_value_start(&mut self, c: char) -> Token {
        let kind = match c {
            '0'..='9' | '-' => {
                self.state = State::Number;
                TokenKind::Number
            }
            't' | 'f' => {
                self.state = State::BooleanLiteral;
                TokenKind::Boolean
            }
            'n' => {
                self.state = State::NullLiteral;
                TokenKind::Null
            }
            // Nothing a well-formed document starts a value with.
            _ => return self.token(c, TokenKind::Unknown),
        };
        self.path.begin_element();
        self.buffer.clear();
        self.buffer.push(c);
        self.token(c, kind)
    }

    fn handle_string(&mut self, c: char, is_key: bool) -> Token {
        let content_kind = if is_key {
            TokenKind::Key
        } else {
            TokenKind::String
        };

        if self.escape_next {
            // The escape flag covers exactly one character; `\uXXXX` hex
            // digits after the `u` arrive here as ordinary content.
            self.escape_next = false;
            self.buffer.push(c);
            return self.token(c, content_kind);
        }

        match c {
            '"' => {
                // Render before assigning the key: the closing quote still
                // belongs to the pre-assignment context.
                let path = self.path.render();
                if is_key {
                    self.path.set_key(core::mem::take(&mut self.buffer));
                }
                self.state = State::Idle;
                Token {
                    content: String::from(c),
                    kind: TokenKind::Quote,
                    path,
                }
            }
            '\\' => {
                self.escape_next = true;
                self.buffer.push(c);
                let kind = if is_key {
                    TokenKind::KeyEscape
                } else {
                    TokenKind::StringEscape
                };
                self.token(c, kind)
            }
            _ => {
                self.buffer.push(c);
                self.token(c, content_kind)
            }
        }
    }

    fn handle_number(&mut self, c: char) -> Token {
        if c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-') {
            self.buffer.push(c);
            return self.token(c, TokenKind::Number);
        }
        // The number ended; this character belongs to the surrounding
        // structure and is re-dispatched within the same call.
        self.state = State::Idle;
        self.handle_idle(c)
    }

    fn handle_keyword(&mut self, c: char) -> Token {
        if c.is_ascii_alphabetic() {
            self.buffer.push(c);
            let kind = match self.state {
                State::BooleanLiteral => TokenKind::Boolean,
                State::NullLiteral => TokenKind::Null,
                // Unreachable from `push`, kept exhaustive.
                _ => TokenKind::Unknown,
            };
            return self.token(c, kind);
        }
        self.state = State::Idle;
        self.buffer.clear();
        self.handle_idle(c)
    }
}

/// A tokenizer for JSON character streams, with optional escape decoding.
///
/// In the default configuration this is a thin wrapper over
/// [`RawTokenizer`] and [`push`](Self::push) returns a token for every
/// character. With [`TokenizerOptions::decode_escapes`] enabled, `push`
/// returns `None` while an escape sequence in a string value is being
/// assembled and then one token carrying the decoded text.
#[derive(Debug)]
pub struct StreamingTokenizer {
    inner: RawTokenizer,
    options: TokenizerOptions,
    escape: EscapeBuffer,
}

impl StreamingTokenizer {
    /// Creates a tokenizer with the given options.
    #[must_use]
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            inner: RawTokenizer::new(),
            options,
            escape: EscapeBuffer::new(),
        }
    }

    /// Processes one input character.
    ///
    /// Returns `None` only in decode mode, while an escape sequence is
    /// incomplete or after one turned out to be undecodable. A sequence
    /// still pending when the stream ends is silently dropped.
    pub fn push(&mut self, c: char) -> Option<Token> {
        let token = self.inner.push(c);
        if !self.options.decode_escapes {
            return Some(token);
        }

        match token.kind {
            TokenKind::StringEscape => {
                // Starting a new escape abandons any stale partial digits
                // (only possible on malformed input such as `\u12\n`); a
                // decoded high surrogate half stays pending so the next
                // `\uXXXX` can complete the pair.
                self.escape.begin();
                None
            }
            // Escape sequences never span the end of a string; whatever
            // is still pending at the closing quote is dropped.
            TokenKind::Quote => {
                self.escape.reset();
                Some(token)
            }
            TokenKind::String if self.escape.is_pending() => match self.escape.feed(c) {
                Ok(Some(decoded)) => Some(Token {
                    content: String::from(decoded),
                    kind: TokenKind::String,
                    path: token.path,
                }),
                Ok(None) => None,
                // Undecodable sequence: drop it and this character, then
                // resume passing tokens through.
                Err(_) => None,
            },
            _ => Some(token),
        }
    }
}
