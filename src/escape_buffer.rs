//! Incremental decoding of JSON string escape sequences.
//!
//! [`EscapeBuffer`] consumes the characters of one escape sequence as they
//! arrive — the character after the backslash, and for `\u` the four ASCII
//! hex digits that follow — and produces the decoded [`char`] as soon as
//! the sequence is complete. The four hex digits are accumulated into a
//! `u32` without buffering them; after a successful decode the buffer
//! resets automatically so the next escape can begin.
//!
//! Supplementary-plane characters are encoded in JSON as two `\u` escapes
//! forming a surrogate pair. A decoded high half is held until the next
//! `\u` escape supplies the low half, and the pair is combined into the
//! real scalar value.
//!
//! # Errors
//!
//! - Feeding an escape character JSON does not define (`\q`) returns an
//!   `Err`.
//! - Feeding a non-hexadecimal character inside `\uXXXX` returns an `Err`.
//! - A low surrogate with no preceding high half returns an `Err`.

use thiserror::Error;

/// Reasons an escape sequence failed to decode.
#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum EscapeError {
    #[error("invalid escape character '{0}'")]
    InvalidEscapeChar(char),
    #[error("invalid unicode escape sequence at character: '{0}'")]
    InvalidUnicodeEscapeChar(char),
    #[error("invalid unicode escape sequence \\u{0:04X}")]
    InvalidUnicodeEscapeSequence(u32),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
enum EscapeState {
    /// No escape in progress.
    #[default]
    Empty,
    /// A backslash has been seen; the next character selects the escape.
    Started,
    /// Inside `\uXXXX`, accumulating hex digits.
    Unicode { acc: u32, len: u8 },
}

const HIGH_SURROGATES: core::ops::RangeInclusive<u32> = 0xD800..=0xDBFF;
const LOW_SURROGATES: core::ops::RangeInclusive<u32> = 0xDC00..=0xDFFF;

/// Accumulates the characters of one escape sequence and decodes them into
/// a Unicode character.
#[derive(Debug, Default)]
pub(crate) struct EscapeBuffer {
    state: EscapeState,
    /// A decoded high surrogate half, waiting for its low half.
    high: Option<u32>,
}

impl EscapeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while an escape sequence is being assembled, including between
    /// the halves of a surrogate pair.
    pub fn is_pending(&self) -> bool {
        self.state != EscapeState::Empty || self.high.is_some()
    }

    /// Starts a new escape sequence, discarding any partial digits. A
    /// pending high surrogate half is kept: the new escape may be the low
    /// half that completes it.
    pub fn begin(&mut self) {
        self.state = EscapeState::Started;
    }

    /// Clears any accumulated state, returning the buffer to idle.
    pub fn reset(&mut self) {
        self.state = EscapeState::Empty;
        self.high = None;
    }

    /// Convert a single ASCII hex digit into its 0..=15 value.
    #[inline]
    fn hex_val(c: char) -> Option<u32> {
        match c {
            '0'..='9' => Some((c as u32) - ('0' as u32)),
            'a'..='f' => Some((c as u32) - ('a' as u32) + 10),
            'A'..='F' => Some((c as u32) - ('A' as u32) + 10),
            _ => None,
        }
    }

    /// Feeds the next character of the sequence.
    ///
    /// - Returns `Ok(None)` while the sequence is incomplete.
    /// - Returns `Ok(Some(ch))` when the sequence just completed, resetting
    ///   the buffer.
    /// - Returns `Err` on a character no JSON escape can contain; the
    ///   buffer resets and the caller decides what to drop.
    pub fn feed(&mut self, c: char) -> Result<Option<char>, EscapeError> {
        match self.state {
            EscapeState::Empty => {
                // Only reachable while a high half is pending. The pair
                // never completed; the half is dropped and `c` is ordinary
                // content.
                if self.high.take().is_some() {
                    Ok(Some(c))
                } else {
                    Err(EscapeError::InvalidEscapeChar(c))
                }
            }
            EscapeState::Started => {
                let decoded = match c {
                    '"' => '"',
                    '\\' => '\\',
                    '/' => '/',
                    'b' => '\u{0008}',
                    'f' => '\u{000C}',
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    'u' => {
                        self.state = EscapeState::Unicode { acc: 0, len: 0 };
                        return Ok(None);
                    }
                    _ => {
                        self.reset();
                        return Err(EscapeError::InvalidEscapeChar(c));
                    }
                };
                self.reset();
                Ok(Some(decoded))
            }
            EscapeState::Unicode { acc, len } => {
                let Some(d) = Self::hex_val(c) else {
                    self.reset();
                    return Err(EscapeError::InvalidUnicodeEscapeChar(c));
                };

                let acc = (acc << 4) | d;
                let len = len + 1;
                if len < 4 {
                    self.state = EscapeState::Unicode { acc, len };
                    return Ok(None);
                }

                // Exactly 4 digits accumulated; leave the digit state
                // clean regardless of outcome.
                self.state = EscapeState::Empty;
                self.complete_unicode(acc)
            }
        }
    }

    /// Resolves a fully accumulated `\uXXXX` code unit, pairing surrogate
    /// halves into their supplementary-plane scalar.
    fn complete_unicode(&mut self, code: u32) -> Result<Option<char>, EscapeError> {
        if HIGH_SURROGATES.contains(&code) {
            if self.high.is_some() {
                // Two high halves in a row; neither can pair.
                self.high = None;
                return Err(EscapeError::InvalidUnicodeEscapeSequence(code));
            }
            self.high = Some(code);
            return Ok(None);
        }

        if LOW_SURROGATES.contains(&code) {
            return match self.high.take() {
                Some(high) => {
                    let combined = 0x10000 + ((high - 0xD800) << 10) + (code - 0xDC00);
                    match core::char::from_u32(combined) {
                        Some(ch) => Ok(Some(ch)),
                        None => Err(EscapeError::InvalidUnicodeEscapeSequence(combined)),
                    }
                }
                None => Err(EscapeError::InvalidUnicodeEscapeSequence(code)),
            };
        }

        // A scalar in the basic plane; an unpaired high half is dropped.
        self.high = None;
        match core::char::from_u32(code) {
            Some(ch) => Ok(Some(ch)),
            None => Err(EscapeError::InvalidUnicodeEscapeSequence(code)),
        }
    }
}
