//! Rendering and emission of diagnostics.

use std::cell::{Cell, RefCell};
use std::io::Write;

use super::Diagnostic;
use crate::config::EmitterConfig;
use crate::span::{SourceFile, Span};
use crate::unicode::display_width;

/// Render a diagnostic to text.
///
/// With a span and its source file, the output is the enclosing source line
/// and a caret line. Without one, it is just the message. Either way the
/// text ends with a newline.
pub fn render(diagnostic: &Diagnostic, file: Option<&SourceFile>) -> String {
    match (diagnostic.span, file) {
        (Some(span), Some(file)) => render_located(file, span, &diagnostic.message)
            .unwrap_or_else(|| format!("{}\n", diagnostic.message)),
        _ => format!("{}\n", diagnostic.message),
    }
}

fn render_located(file: &SourceFile, span: Span, message: &str) -> Option<String> {
    let line = file.line_bounds(span.start).ok()?;
    let content = file.content();

    let prefix = format!("{}:{}: ", file.name(), file.number());
    let column = prefix.len() + display_width(&content[line.start..span.start]);

    Some(format!(
        "{}{}\n{}^ {}\n",
        prefix,
        String::from_utf8_lossy(&content[line]),
        " ".repeat(column),
        message
    ))
}

/// Where a [`Handler`] writes rendered diagnostics
#[derive(Debug)]
pub enum Sink {
    /// The process's standard error stream
    Stderr,
    /// An in-memory buffer, read back with [`Handler::take_output`]
    Buffer(Vec<u8>),
}

impl Sink {
    fn write(&mut self, text: &str) {
        let result = match self {
            Sink::Stderr => {
                let mut stderr = std::io::stderr().lock();
                stderr.write_all(text.as_bytes()).and_then(|()| stderr.flush())
            }
            Sink::Buffer(buffer) => buffer.write_all(text.as_bytes()),
        };
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write diagnostic");
        }
    }
}

/// Handler for reporting diagnostics
///
/// Warnings are written and counted. Errors are fatal: the `-> !` entry
/// points write the diagnostic and then terminate the process with the
/// configured exit status.
///
/// # Examples
///
/// ```
/// use limboc_util::diagnostic::Handler;
/// use limboc_util::span::{SourceFile, Span};
///
/// let handler = Handler::buffered();
/// let file = SourceFile::new(1, "w.b", "x = 1;");
/// handler.warn_at(&file, Span::new(2, 3, 1, 3), "did you mean `:=`?");
///
/// assert_eq!(handler.warning_count(), 1);
/// assert!(handler.take_output().ends_with("^ did you mean `:=`?\n"));
/// ```
pub struct Handler {
    config: EmitterConfig,
    sink: RefCell<Sink>,
    error_count: Cell<usize>,
    warning_count: Cell<usize>,
}

impl Handler {
    /// Create a handler writing to standard error
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Create a handler writing to standard error with the given settings
    pub fn with_config(config: EmitterConfig) -> Self {
        Self::with_sink(config, Sink::Stderr)
    }

    /// Create a handler that keeps its output in memory (for testing)
    pub fn buffered() -> Self {
        Self::with_sink(EmitterConfig::default(), Sink::Buffer(Vec::new()))
    }

    /// Create a handler with an explicit sink
    pub fn with_sink(config: EmitterConfig, sink: Sink) -> Self {
        Self {
            config,
            sink: RefCell::new(sink),
            error_count: Cell::new(0),
            warning_count: Cell::new(0),
        }
    }

    /// The handler's settings
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    /// Render and write a diagnostic without terminating
    pub fn emit(&self, diagnostic: &Diagnostic, file: Option<&SourceFile>) {
        tracing::debug!(
            level = %diagnostic.level,
            file = file.map(SourceFile::name),
            offset = diagnostic.span.map(|span| span.start),
            message = %diagnostic.message,
            "emitting diagnostic"
        );

        let counter = if diagnostic.is_fatal() {
            &self.error_count
        } else {
            &self.warning_count
        };
        counter.set(counter.get() + 1);

        self.sink.borrow_mut().write(&render(diagnostic, file));
    }

    /// Write a diagnostic and terminate the process
    pub fn abort(&self, diagnostic: &Diagnostic, file: Option<&SourceFile>) -> ! {
        self.emit(diagnostic, file);
        std::process::exit(self.config.exit_code)
    }

    /// Report an error with no source location and terminate
    pub fn error(&self, message: impl Into<String>) -> ! {
        self.abort(&Diagnostic::error(message), None)
    }

    /// Report an error at a source location and terminate
    pub fn error_at(&self, file: &SourceFile, span: Span, message: impl Into<String>) -> ! {
        self.abort(&Diagnostic::error(message).with_span(span), Some(file))
    }

    /// Report a warning at a source location
    pub fn warn_at(&self, file: &SourceFile, span: Span, message: impl Into<String>) {
        self.emit(&Diagnostic::warning(message).with_span(span), Some(file));
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.error_count.get() > 0
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.warning_count.get()
    }

    /// Drain everything written to a buffered sink
    ///
    /// Returns an empty string for a handler writing to standard error.
    pub fn take_output(&self) -> String {
        match &mut *self.sink.borrow_mut() {
            Sink::Buffer(buffer) => String::from_utf8_lossy(&std::mem::take(buffer)).into_owned(),
            Sink::Stderr => String::new(),
        }
    }
}

impl Default for Handler {
    fn default() -> Self {
        Self::new()
    }
}
