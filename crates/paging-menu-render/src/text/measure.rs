//! Natural text size measurement.
//!
//! Menu items size themselves from the unconstrained size of their labels.
//! [`TextMeasurer`] is the seam between the widget and the text stack:
//! [`SharedFontSystem`] shapes with cosmic-text, while [`MonospaceMeasurer`]
//! gives fixed per-character metrics for tests and terminal-like hosts.

use cosmic_text::{Buffer, Metrics, Shaping, Wrap};
use parking_lot::Mutex;
use unicode_segmentation::UnicodeSegmentation;

use super::font::Font;
use super::font_system::FontSystem;
use crate::types::Size;

/// Default line height as a multiple of the font size.
pub const DEFAULT_LINE_HEIGHT: f32 = 1.2;

/// Measures the natural size of a run of text.
///
/// Measurement is unbounded in both directions and does not wrap, so the
/// result is the width of the longest line and the height of all lines.
/// Empty text measures as [`Size::ZERO`].
pub trait TextMeasurer: Send + Sync {
    fn measure(&self, text: &str, font: &Font) -> Size;
}

/// A cosmic-text backed measurer that can be shared between widgets.
pub struct SharedFontSystem {
    font_system: Mutex<FontSystem>,
    line_height: f32,
}

impl SharedFontSystem {
    pub fn new(font_system: FontSystem) -> Self {
        Self {
            font_system: Mutex::new(font_system),
            line_height: DEFAULT_LINE_HEIGHT,
        }
    }

    /// Set the line height multiplier used for measurement.
    pub fn with_line_height(mut self, multiplier: f32) -> Self {
        self.line_height = multiplier;
        self
    }

    /// Run a closure with exclusive access to the font system, e.g. to load fonts.
    pub fn with_font_system<R>(&self, f: impl FnOnce(&mut FontSystem) -> R) -> R {
        f(&mut self.font_system.lock())
    }
}

impl TextMeasurer for SharedFontSystem {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let mut guard = self.font_system.lock();
        let font_system = guard.inner_mut();

        let metrics = Metrics::new(font.size(), font.size() * self.line_height);
        let mut buffer = Buffer::new(font_system, metrics);
        buffer.set_wrap(font_system, Wrap::None);
        buffer.set_size(font_system, None, None);
        buffer.set_text(font_system, text, font.to_attrs(), Shaping::Advanced);
        buffer.shape_until_scroll(font_system, false);

        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            height = height.max(run.line_top + run.line_height);
        }

        let spacing = letter_spacing_for(text, font);
        tracing::trace!(text, width, height, "measured text");
        Size::new(width + spacing, height)
    }
}

/// A measurer where every grapheme advances by `font.size() * advance_ratio`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    advance_ratio: f32,
    line_height: f32,
}

impl MonospaceMeasurer {
    pub fn new(advance_ratio: f32, line_height: f32) -> Self {
        Self {
            advance_ratio,
            line_height,
        }
    }
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self::new(0.6, DEFAULT_LINE_HEIGHT)
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &Font) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let advance = font.size() * self.advance_ratio + font.letter_spacing();
        let mut width: f32 = 0.0;
        let mut lines = 0usize;
        for line in text.lines() {
            width = width.max(line.graphemes(true).count() as f32 * advance);
            lines += 1;
        }
        // `lines()` drops a trailing empty line.
        if text.ends_with('\n') {
            lines += 1;
        }

        Size::new(width, lines as f32 * font.size() * self.line_height)
    }
}

fn letter_spacing_for(text: &str, font: &Font) -> f32 {
    if font.letter_spacing() == 0.0 {
        return 0.0;
    }
    text.graphemes(true).count() as f32 * font.letter_spacing()
}
