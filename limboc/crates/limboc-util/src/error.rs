//! Core error types for limboc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for UTF-8 encoding and decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Utf8Error {
    /// The input was empty
    #[error("no bytes to decode")]
    Empty,

    /// The lead byte does not start a 1-4 byte sequence
    #[error("invalid UTF-8 lead byte {byte:#04x}")]
    InvalidLeadByte { byte: u8 },

    /// A continuation byte does not match `10xxxxxx`
    #[error("invalid UTF-8 continuation byte {byte:#04x} at index {index}")]
    InvalidContinuation { byte: u8, index: usize },

    /// The input ends in the middle of a multi-byte sequence
    #[error("truncated UTF-8 sequence: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },

    /// The codepoint is above U+10FFFF
    #[error("codepoint {0:#x} is outside the Unicode range")]
    CodepointOutOfRange(u32),

    /// The output buffer cannot hold the encoded sequence
    #[error("output buffer too small: need {needed} bytes, have {available}")]
    BufferTooSmall { needed: usize, available: usize },
}

/// Error type for source map operations
#[derive(Debug, Error)]
pub enum SourceMapError {
    /// File not found in the source map
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Offset out of bounds for file
    #[error("Offset out of bounds: file has {file_len} bytes, offset is {offset}")]
    OffsetOutOfBounds { file_len: usize, offset: usize },
}

/// Result type alias for UTF-8 operations
pub type Utf8Result<T> = std::result::Result<T, Utf8Error>;

/// Result type alias for source map operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;
