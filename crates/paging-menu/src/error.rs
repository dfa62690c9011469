//! Error types for the paging menu.

use std::path::PathBuf;

use paging_menu_core::ViewError;
use paging_menu_render::RenderError;

/// Result type alias for menu operations.
pub type MenuResult<T> = std::result::Result<T, MenuError>;

/// Errors that can occur while building or configuring menu items.
#[derive(Debug, thiserror::Error)]
pub enum MenuError {
    /// The options given to a menu item contradict each other.
    ///
    /// This is a programming error on the caller's side; the item is not built.
    #[error("invalid menu configuration: {0}")]
    InvalidConfiguration(String),

    /// A view hierarchy operation failed.
    #[error("view hierarchy error: {0}")]
    View(#[from] ViewError),

    /// An image or font could not be loaded.
    #[error("render resource error: {0}")]
    Render(#[from] RenderError),

    /// A configuration file could not be parsed.
    #[error("failed to parse menu configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A configuration file could not be read.
    #[error("failed to read menu configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl MenuError {
    /// Create an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
