//! Font system management and font database access.

use std::path::Path;

use crate::error::{RenderError, RenderResult};

/// Configuration for initializing the font system.
#[derive(Debug, Clone)]
pub struct FontSystemConfig {
    /// Whether to load system fonts on initialization.
    pub load_system_fonts: bool,
    /// Locale string for text shaping (e.g., "en-US").
    pub locale: String,
    /// Default sans-serif font family name.
    pub sans_serif_family: Option<String>,
    /// Default monospace font family name.
    pub monospace_family: Option<String>,
}

impl Default for FontSystemConfig {
    fn default() -> Self {
        Self {
            load_system_fonts: true,
            locale: sys_locale::get_locale().unwrap_or_else(|| "en-US".to_string()),
            sans_serif_family: None,
            monospace_family: None,
        }
    }
}

impl FontSystemConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to load system fonts on initialization.
    pub fn load_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }

    /// Set the locale for text shaping.
    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn sans_serif_family(mut self, family: impl Into<String>) -> Self {
        self.sans_serif_family = Some(family.into());
        self
    }

    pub fn monospace_family(mut self, family: impl Into<String>) -> Self {
        self.monospace_family = Some(family.into());
        self
    }
}

/// Font loading and lookup, wrapping cosmic-text's `FontSystem`.
///
/// `FontSystem` needs `&mut` access for shaping because cosmic-text caches
/// internally. Share it between menu items through
/// [`SharedFontSystem`](super::SharedFontSystem).
pub struct FontSystem {
    inner: cosmic_text::FontSystem,
}

impl FontSystem {
    /// Create a new font system with default configuration.
    ///
    /// This loads all system fonts, which may take a noticeable amount of time.
    pub fn new() -> Self {
        Self::with_config(FontSystemConfig::default())
    }

    /// Create a new font system with custom configuration.
    pub fn with_config(config: FontSystemConfig) -> Self {
        let mut inner = if config.load_system_fonts {
            cosmic_text::FontSystem::new()
        } else {
            let db = fontdb::Database::new();
            cosmic_text::FontSystem::new_with_locale_and_db(config.locale.clone(), db)
        };

        let db = inner.db_mut();
        if let Some(ref family) = config.sans_serif_family {
            db.set_sans_serif_family(family);
        }
        if let Some(ref family) = config.monospace_family {
            db.set_monospace_family(family);
        }

        tracing::debug!(
            locale = %config.locale,
            faces = inner.db().faces().count(),
            "font system initialized"
        );

        Self { inner }
    }

    /// Get a mutable reference to the underlying cosmic-text font system.
    pub fn inner_mut(&mut self) -> &mut cosmic_text::FontSystem {
        &mut self.inner
    }

    /// Number of font faces currently loaded.
    pub fn face_count(&self) -> usize {
        self.inner.db().faces().count()
    }

    /// Load a font file from disk.
    pub fn load_font_file(&mut self, path: impl AsRef<Path>) -> RenderResult<()> {
        self.inner
            .db_mut()
            .load_font_file(path.as_ref())
            .map_err(|e| RenderError::FontLoad(format!("{}: {e}", path.as_ref().display())))
    }

    /// Load font data from memory.
    ///
    /// The data should be the raw contents of a TTF, OTF, TTC, or OTC file.
    pub fn load_font_data(&mut self, data: Vec<u8>) {
        self.inner.db_mut().load_font_data(data);
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}
