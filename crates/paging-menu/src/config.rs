//! Loading menu options from TOML.
//!
//! A configuration file describes the menu and its items:
//!
//! ```toml
//! mode = "standard"
//! width_mode = { fixed = 80.0 }
//! center_item = true
//! height = 44.0
//! background_color = "#FFFFFF"
//! selected_background_color = "#F2F2F2"
//! divider_image = "divider.png"
//!
//! [focus]
//! mode = "underline"
//! height = 2.0
//! color = "#007AFF"
//!
//! [[items]]
//! kind = "text"
//! title = { text = "Home", font = { size = 15.0 } }
//!
//! [[items]]
//! kind = "multiline"
//! horizontal_margin = 12.0
//! title = { text = "Inbox" }
//! description = { text = "3 new", font = { size = 11.0 } }
//!
//! [[items]]
//! kind = "image"
//! image = "star.png"
//! selected_image = "star-filled.png"
//! ```
//!
//! Relative image paths are resolved against the directory of the file
//! passed to [`MenuConfig::load`].

use std::path::{Path, PathBuf};

use paging_menu_core::logging::targets;
use paging_menu_render::{Color, Font, FontFamily, FontStyle, FontWeight, Image};
use serde::Deserialize;

use crate::error::{MenuError, MenuResult};
use crate::options::{
    DEFAULT_HORIZONTAL_MARGIN, DEFAULT_MENU_HEIGHT, FocusMode, MenuItemOptions, MenuItemText,
    MenuItemWidthMode, MenuMode, MenuOptions,
};

/// A colour written as `"#RRGGBB"` or `"#RRGGBBAA"`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "String")]
pub struct HexColor(pub Color);

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Color::from_hex(&value)
            .map(HexColor)
            .ok_or_else(|| format!("invalid hex colour '{value}'"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModeConfig {
    #[default]
    Standard,
    SegmentedControl,
    Infinite,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthModeConfig {
    #[default]
    Flexible,
    Fixed(f32),
}

impl From<WidthModeConfig> for MenuItemWidthMode {
    fn from(value: WidthModeConfig) -> Self {
        match value {
            WidthModeConfig::Flexible => MenuItemWidthMode::Flexible,
            WidthModeConfig::Fixed(width) => MenuItemWidthMode::Fixed(width),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "mode", rename_all = "kebab-case", deny_unknown_fields)]
pub enum FocusConfig {
    None,
    Underline {
        height: f32,
        color: HexColor,
        #[serde(default)]
        horizontal_padding: f32,
    },
    RoundRect {
        radius: f32,
        height: f32,
        color: HexColor,
        #[serde(default)]
        horizontal_padding: f32,
    },
}

impl From<&FocusConfig> for FocusMode {
    fn from(value: &FocusConfig) -> Self {
        match *value {
            FocusConfig::None => FocusMode::None,
            FocusConfig::Underline {
                height,
                color,
                horizontal_padding,
            } => FocusMode::Underline {
                height,
                color: color.0,
                horizontal_padding,
            },
            FocusConfig::RoundRect {
                radius,
                height,
                color,
                horizontal_padding,
            } => FocusMode::RoundRect {
                radius,
                horizontal_padding,
                height,
                color: color.0,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FontConfig {
    #[serde(default)]
    pub family: FontFamily,
    #[serde(default = "default_font_size")]
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub style: FontStyle,
    #[serde(default)]
    pub letter_spacing: f32,
}

fn default_font_size() -> f32 {
    16.0
}

impl From<&FontConfig> for Font {
    fn from(value: &FontConfig) -> Self {
        Font::builder()
            .family(value.family.clone())
            .size(value.size)
            .weight(value.weight)
            .style(value.style)
            .letter_spacing(value.letter_spacing)
            .build()
    }
}

/// One label's text and styling. Unset fields keep the item defaults.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextConfig {
    pub text: String,
    pub color: Option<HexColor>,
    pub selected_color: Option<HexColor>,
    pub font: Option<FontConfig>,
    /// Falls back to `font` when unset.
    pub selected_font: Option<FontConfig>,
}

impl TextConfig {
    fn to_text(&self) -> MenuItemText {
        let mut text = MenuItemText::new(self.text.clone());
        if let Some(color) = self.color {
            text.color = color.0;
        }
        if let Some(color) = self.selected_color {
            text.selected_color = color.0;
        }
        if let Some(font) = &self.font {
            text.font = font.into();
            text.selected_font = text.font.clone();
        }
        if let Some(font) = &self.selected_font {
            text.selected_font = font.into();
        }
        text
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ItemContentConfig {
    Text {
        title: TextConfig,
    },
    Multiline {
        title: TextConfig,
        description: TextConfig,
    },
    Image {
        image: PathBuf,
        selected_image: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ItemConfig {
    #[serde(flatten)]
    pub content: ItemContentConfig,
    pub horizontal_margin: Option<f32>,
}

/// A menu described in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MenuConfig {
    #[serde(default)]
    pub mode: ModeConfig,
    /// Ignored by segmented controls.
    #[serde(default)]
    pub width_mode: WidthModeConfig,
    #[serde(default)]
    pub center_item: bool,
    #[serde(default = "default_height")]
    pub height: f32,
    pub background_color: Option<HexColor>,
    pub selected_background_color: Option<HexColor>,
    pub divider_image: Option<PathBuf>,
    pub focus: Option<FocusConfig>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    #[serde(skip)]
    base_dir: Option<PathBuf>,
}

fn default_height() -> f32 {
    DEFAULT_MENU_HEIGHT
}

impl MenuConfig {
    /// Parse a configuration from a TOML string.
    ///
    /// Relative image paths are resolved against the working directory.
    pub fn from_toml_str(s: &str) -> MenuResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> MenuResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| MenuError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut config = Self::from_toml_str(&contents)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(
            target: targets::CONFIG,
            path = %path.display(),
            items = config.items.len(),
            "loaded menu configuration"
        );
        Ok(config)
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path.to_path_buf(),
        }
    }

    fn open_image(&self, path: &Path) -> MenuResult<Image> {
        Ok(Image::open(self.resolve(path))?)
    }

    /// Build the menu options and one set of item options per configured
    /// item, loading any referenced images.
    pub fn to_options(&self) -> MenuResult<(MenuOptions, Vec<MenuItemOptions>)> {
        let width_mode = self.width_mode.into();
        let mode = match self.mode {
            ModeConfig::Standard => MenuMode::Standard {
                width_mode,
                center_item: self.center_item,
            },
            ModeConfig::SegmentedControl => MenuMode::SegmentedControl,
            ModeConfig::Infinite => MenuMode::Infinite { width_mode },
        };

        let defaults = MenuOptions::default();
        let menu = MenuOptions {
            mode,
            focus_mode: self.focus.as_ref().map_or(defaults.focus_mode, FocusMode::from),
            background_color: self.background_color.map_or(defaults.background_color, |c| c.0),
            selected_background_color: self
                .selected_background_color
                .map_or(defaults.selected_background_color, |c| c.0),
            item_count: self.items.len(),
            divider_image: self
                .divider_image
                .as_deref()
                .map(|path| self.open_image(path))
                .transpose()?,
            height: self.height,
        };
        menu.validate()?;

        let items = self
            .items
            .iter()
            .map(|item| -> MenuResult<MenuItemOptions> {
                let options = match &item.content {
                    ItemContentConfig::Text { title } => MenuItemOptions::text(title.to_text()),
                    ItemContentConfig::Multiline { title, description } => {
                        MenuItemOptions::multiline(title.to_text(), description.to_text())
                    }
                    ItemContentConfig::Image {
                        image,
                        selected_image,
                    } => MenuItemOptions::image(
                        self.open_image(image)?,
                        selected_image
                            .as_deref()
                            .map(|path| self.open_image(path))
                            .transpose()?,
                    ),
                }
                .with_horizontal_margin(item.horizontal_margin.unwrap_or(DEFAULT_HORIZONTAL_MARGIN));
                options.validate()?;
                Ok(options)
            })
            .collect::<MenuResult<Vec<_>>>()?;

        Ok((menu, items))
    }
}
