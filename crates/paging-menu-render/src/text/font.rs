//! Font representation and configuration.

use super::types::{FontFamily, FontStyle, FontWeight};

/// A font specification: family, size and styling.
///
/// `Font` does not reference font data; a [`TextMeasurer`] resolves it when
/// measuring text.
///
/// # Example
///
/// ```
/// use paging_menu_render::text::{Font, FontFamily, FontWeight};
///
/// let font = Font::new(FontFamily::SansSerif, 16.0);
/// let bold = Font::builder()
///     .family(FontFamily::name("Inter"))
///     .size(16.0)
///     .weight(FontWeight::BOLD)
///     .build();
/// assert_ne!(font, bold);
/// ```
///
/// [`TextMeasurer`]: super::TextMeasurer
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    family: FontFamily,
    /// Font size in pixels.
    size: f32,
    weight: FontWeight,
    style: FontStyle,
    /// Letter spacing adjustment in pixels.
    letter_spacing: f32,
}

impl Font {
    /// Create a new font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
            letter_spacing: 0.0,
        }
    }

    /// The default sans-serif font at the given size.
    pub fn system(size: f32) -> Self {
        Self::new(FontFamily::SansSerif, size)
    }

    /// The default sans-serif bold font at the given size.
    pub fn bold_system(size: f32) -> Self {
        Self::system(size).with_weight(FontWeight::BOLD)
    }

    /// Create a font builder for more complex font specifications.
    pub fn builder() -> FontBuilder {
        FontBuilder::new()
    }

    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Get the font size in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn letter_spacing(&self) -> f32 {
        self.letter_spacing
    }

    /// Create a copy of this font with a different size.
    pub fn with_size(&self, size: f32) -> Self {
        let mut font = self.clone();
        font.size = size;
        font
    }

    /// Create a copy of this font with a different weight.
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        let mut font = self.clone();
        font.weight = weight;
        font
    }

    /// Convert to cosmic-text Attrs for text shaping.
    pub fn to_attrs(&self) -> cosmic_text::Attrs<'_> {
        cosmic_text::Attrs::new()
            .family(self.family.to_cosmic())
            .weight(self.weight.to_cosmic())
            .style(self.style.to_cosmic())
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0)
    }
}

/// Builder for creating `Font` instances.
#[derive(Debug, Clone, Default)]
pub struct FontBuilder {
    family: Option<FontFamily>,
    size: Option<f32>,
    weight: FontWeight,
    style: FontStyle,
    letter_spacing: f32,
}

impl FontBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = Some(family);
        self
    }

    /// Set the font size in pixels.
    pub fn size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn letter_spacing(mut self, spacing: f32) -> Self {
        self.letter_spacing = spacing;
        self
    }

    /// Build the font specification.
    ///
    /// If no family was specified, uses SansSerif.
    /// If no size was specified, uses 16.0.
    pub fn build(self) -> Font {
        Font {
            family: self.family.unwrap_or_default(),
            size: self.size.unwrap_or(16.0),
            weight: self.weight,
            style: self.style,
            letter_spacing: self.letter_spacing,
        }
    }
}
