//! Configuration Module - Lexer Settings

/// Configuration for the lexer
///
/// # Examples
///
/// ```rust
/// use limboc_lex::LexerConfig;
///
/// let config = LexerConfig::default();
/// assert!(config.strip_bom);
///
/// // Treat a leading byte-order mark as ordinary (invalid) input
/// let config = LexerConfig { strip_bom: false };
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    /// Skip a leading UTF-8 byte-order mark (U+FEFF) before the first token
    ///
    /// The mark is not counted as a column.
    /// Default: true
    pub strip_bom: bool,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self { strip_bom: true }
    }
}
