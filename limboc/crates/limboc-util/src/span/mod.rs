//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations,
//! including byte offsets, line/column information, and file identification.
//!
//! # Examples
//!
//! ```
//! use limboc_util::span::{FileId, Span};
//!
//! // A three byte span starting at offset 10, on line 1, column 5
//! let span = Span::new(10, 13, 1, 5);
//! assert_eq!(span.len(), 3);
//!
//! // The same span, tagged with the file it came from
//! let span = Span::with_file(10, 13, FileId(2), 1, 5);
//! assert_eq!(span.file_id, FileId(2));
//! ```

mod source_map;

pub use source_map::{SourceFile, SourceMap};

/// The sequence number of a source file
///
/// File numbers are assigned sequentially, starting at 1, as files are added
/// to the [`SourceMap`]. They appear in diagnostic prefixes.
///
/// # Examples
///
/// ```
/// use limboc_util::span::FileId;
///
/// let id = FileId(1);
/// assert_eq!(id.number(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(pub usize);

impl FileId {
    /// A placeholder for spans that are not tied to a loaded file
    pub const DUMMY: FileId = FileId(0);

    /// Get the raw file number
    #[inline]
    pub const fn number(&self) -> usize {
        self.0
    }
}

impl Default for FileId {
    #[inline]
    fn default() -> Self {
        Self::DUMMY
    }
}

/// Source location span
///
/// A `Span` is the half-open byte range `start..end` of some text in a
/// source file, together with the 1-based line and column of `start`.
/// The column counts codepoints, not display cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
    /// File identifier
    pub file_id: FileId,
}

impl Span {
    /// Dummy span for testing
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
        file_id: FileId::DUMMY,
    };

    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use limboc_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        debug_assert!(start <= end, "span start {} > end {}", start, end);
        Self {
            start,
            end,
            line,
            column,
            file_id: FileId::DUMMY,
        }
    }

    /// Create a new span associated with a specific file
    #[inline]
    pub fn with_file(start: usize, end: usize, file_id: FileId, line: u32, column: u32) -> Self {
        Self {
            file_id,
            ..Self::new(start, end, line, column)
        }
    }

    /// Returns true if the span covers no bytes
    ///
    /// # Examples
    ///
    /// ```
    /// use limboc_util::span::Span;
    ///
    /// assert!(Span::new(4, 4, 1, 5).is_empty());
    /// assert!(!Span::new(4, 5, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The byte range covered by this span
    #[inline]
    pub fn range(&self) -> std::ops::Range<usize> {
        self.start..self.end
    }

    /// Returns true if the byte offset falls inside the span
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(10, 20, 1, 5);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.line, 1);
        assert_eq!(span.column, 5);
        assert_eq!(span.file_id, FileId::DUMMY);
    }

    #[test]
    fn test_span_with_file() {
        let span = Span::with_file(0, 3, FileId(7), 2, 1);
        assert_eq!(span.file_id.number(), 7);
        assert_eq!(span.line, 2);
    }

    #[test]
    fn test_span_len_and_range() {
        let span = Span::new(3, 9, 1, 4);
        assert_eq!(span.len(), 6);
        assert_eq!(span.range(), 3..9);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(3, 6, 1, 4);
        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(5));
        assert!(!span.contains(6));
    }

    #[test]
    fn test_dummy_span() {
        assert_eq!(Span::DUMMY.len(), 0);
        assert_eq!(Span::default(), Span::DUMMY);
    }
}
