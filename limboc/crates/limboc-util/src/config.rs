//! Configuration Module - Diagnostic Emission Settings
//!
//! Settings that control how the diagnostic [`Handler`](crate::Handler)
//! behaves when it terminates the process.

/// Configuration for diagnostic emission
///
/// # Examples
///
/// ```rust
/// use limboc_util::EmitterConfig;
///
/// // Exit with EXIT_FAILURE on fatal errors
/// let config = EmitterConfig::default();
/// assert_eq!(config.exit_code, 1);
///
/// // A driver that reserves status 1 for something else
/// let config = EmitterConfig { exit_code: 2 };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Process exit status used after a fatal diagnostic
    ///
    /// Should be non-zero so callers can tell the run failed.
    /// Default: 1
    pub exit_code: i32,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self { exit_code: 1 }
    }
}
