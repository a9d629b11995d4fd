//! Defines the custom error type for the `core` module.

use std::path::PathBuf;
use thiserror::Error;

/// The primary error type of the crate.
///
/// Resolving a snapshot never fails; these errors come from setting up the
/// status item and from reading an explicitly requested config file.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Represents an I/O error, typically from reading the config file.
    #[error("I/O error for path {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),

    /// The config file exists but is not valid JSON for `AppConfig`.
    #[error("Invalid config file {1}: {0}")]
    Config(#[source] serde_json::Error, PathBuf),

    /// The Objective-C runtime refused to register a helper class.
    #[error("Failed to register Objective-C class {0}")]
    ClassRegistration(&'static str),

    /// `NSStatusBar` did not hand out a status item.
    #[error("The system status bar did not provide a status item")]
    StatusItemUnavailable,

    /// AppKit could not allocate an image.
    #[error("Failed to create image: {0}")]
    ImageUnavailable(&'static str),
}
