//! Source map for managing loaded source files.
//!
//! Source files are immutable once loaded. Every token and diagnostic refers
//! back into a file's byte buffer, so files are handed out as
//! `Arc<SourceFile>` and live as long as anything still points into them.

use std::sync::Arc;

use super::FileId;
use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// The content is kept as raw bytes. Decoding is the lexer's job, and a
/// file with malformed UTF-8 must still be representable so that the
/// error can be reported against it.
///
/// # Examples
///
/// ```
/// use limboc_util::span::SourceFile;
///
/// let file = SourceFile::new(1, "hello.b", "implement Hello;");
/// assert_eq!(file.name(), "hello.b");
/// assert_eq!(file.content(), b"implement Hello;");
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// Sequential file number
    id: FileId,
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
}

impl SourceFile {
    /// Create a new source file
    pub fn new(number: usize, name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        Self {
            id: FileId(number),
            name: name.into(),
            content: Arc::from(content.as_ref()),
        }
    }

    /// Get the file identifier
    #[inline]
    pub fn id(&self) -> FileId {
        self.id
    }

    /// Get the file number used in diagnostic prefixes
    #[inline]
    pub fn number(&self) -> usize {
        self.id.0
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Length of the file in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns true if the file has no content
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Find the line enclosing a byte offset
    ///
    /// Scans backward from `offset` to just after the previous `\n` (or the
    /// start of the file) and forward to the next `\n` (or the end of the
    /// file). The returned range excludes the newline. An offset equal to
    /// the file length is valid and names the last line.
    ///
    /// # Examples
    ///
    /// ```
    /// use limboc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new(1, "a.b", "x := 1;\ny := 2;\n");
    /// assert_eq!(file.line_bounds(10).unwrap(), 8..15);
    /// assert_eq!(file.line_bounds(7).unwrap(), 0..7);
    /// assert!(file.line_bounds(99).is_err());
    /// ```
    pub fn line_bounds(&self, offset: usize) -> SourceMapResult<std::ops::Range<usize>> {
        if offset > self.content.len() {
            return Err(SourceMapError::OffsetOutOfBounds {
                file_len: self.content.len(),
                offset,
            });
        }

        let mut start = offset;
        while start > 0 && self.content[start - 1] != b'\n' {
            start -= 1;
        }

        let mut end = offset;
        while end < self.content.len() && self.content[end] != b'\n' {
            end += 1;
        }

        Ok(start..end)
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("content_len", &self.content.len())
            .finish()
    }
}

/// A source map owning every loaded source file
///
/// # Examples
///
/// ```
/// use limboc_util::span::SourceMap;
///
/// let mut map = SourceMap::new();
/// let file = map.add_file("main.b", "implement Main;");
/// assert_eq!(file.number(), 1);
/// assert_eq!(map.get(file.id()).unwrap().name(), "main.b");
/// ```
#[derive(Default)]
pub struct SourceMap {
    files: Vec<Arc<SourceFile>>,
}

impl SourceMap {
    /// Create a new empty source map
    #[inline]
    pub fn new() -> Self {
        Self { files: Vec::new() }
    }

    /// Add a new source file
    ///
    /// The file is numbered in load order, starting from 1.
    pub fn add_file(&mut self, name: impl Into<String>, content: impl AsRef<[u8]>) -> Arc<SourceFile> {
        let number = self.files.len() + 1;
        let file = Arc::new(SourceFile::new(number, name, content));
        tracing::debug!(file = file.name(), number, bytes = file.len(), "loaded source file");
        self.files.push(Arc::clone(&file));
        file
    }

    /// Get a source file by its ID
    #[inline]
    pub fn get(&self, id: FileId) -> Option<Arc<SourceFile>> {
        id.0.checked_sub(1)
            .and_then(|index| self.files.get(index))
            .cloned()
    }

    /// Get a source file by its ID with error handling
    pub fn get_file(&self, id: FileId) -> SourceMapResult<Arc<SourceFile>> {
        self.get(id)
            .ok_or_else(|| SourceMapError::FileNotFound(format!("FileId({})", id.0)))
    }

    /// Get the number of files in the source map
    #[inline]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Iterate over all files in load order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<SourceFile>> {
        self.files.iter()
    }
}
