/// Configuration options for the streaming tokenizer.
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizerOptions {
    /// Whether to decode escape sequences in string *values*.
    ///
    /// When enabled, the raw escape tokens of a value are buffered instead
    /// of emitted; once a whole escape sequence has arrived it is replaced
    /// by a single token carrying the decoded text (a real newline for
    /// `\n`, the decoded character for `\uXXXX`, and so on). While a
    /// sequence is incomplete, [`StreamingTokenizer::push`] returns `None`.
    ///
    /// Escapes in object *keys* are never decoded and always pass through
    /// as raw `KeyEscape`/`Key` tokens.
    ///
    /// [`StreamingTokenizer::push`]: crate::StreamingTokenizer::push
    ///
    /// # Default
    ///
    /// `false`
    pub decode_escapes: bool,
}
