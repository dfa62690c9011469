//! Options shared by a whole menu and options for a single item.
//!
//! [`MenuOptions`] is owned by the menu container and shared by every item
//! through an `Arc`; items only read it. [`MenuItemOptions`] belongs to one
//! item and decides which content that item shows.

use paging_menu_render::{Color, Font, Image};

use crate::error::{MenuError, MenuResult};

/// Default item height in logical units.
pub const DEFAULT_MENU_HEIGHT: f32 = 50.0;

/// Default horizontal margin on each side of an item's content.
pub const DEFAULT_HORIZONTAL_MARGIN: f32 = 20.0;

/// How an item's content width is derived.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum MenuItemWidthMode {
    /// The natural width of the content, rounded up to a whole unit.
    #[default]
    Flexible,
    /// A fixed content width, whatever the content.
    Fixed(f32),
}

/// The overall layout mode of the menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuMode {
    /// Items laid out side by side, scrolling when they overflow.
    Standard {
        width_mode: MenuItemWidthMode,
        /// Whether the container keeps the selected item centred.
        center_item: bool,
    },
    /// Items share the container width equally and carry no margins.
    SegmentedControl,
    /// Items repeat endlessly in both directions.
    Infinite { width_mode: MenuItemWidthMode },
}

impl MenuMode {
    /// The item width mode, or `None` for a segmented control.
    pub fn width_mode(&self) -> Option<MenuItemWidthMode> {
        match *self {
            MenuMode::Standard { width_mode, .. } | MenuMode::Infinite { width_mode } => {
                Some(width_mode)
            }
            MenuMode::SegmentedControl => None,
        }
    }

    pub fn is_segmented_control(&self) -> bool {
        matches!(self, MenuMode::SegmentedControl)
    }
}

impl Default for MenuMode {
    fn default() -> Self {
        MenuMode::Standard {
            width_mode: MenuItemWidthMode::Flexible,
            center_item: false,
        }
    }
}

/// How the container highlights the selected item.
///
/// Items only care whether the mode is [`FocusMode::RoundRect`]: the rounded
/// highlight is drawn behind the item, so the item keeps a transparent
/// background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusMode {
    None,
    Underline {
        height: f32,
        color: Color,
        horizontal_padding: f32,
    },
    RoundRect {
        radius: f32,
        horizontal_padding: f32,
        height: f32,
        color: Color,
    },
}

impl Default for FocusMode {
    fn default() -> Self {
        FocusMode::Underline {
            height: 3.0,
            color: Color::BLUE,
            horizontal_padding: 0.0,
        }
    }
}

/// Options shared by all items of one menu.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuOptions {
    pub mode: MenuMode,
    pub focus_mode: FocusMode,
    pub background_color: Color,
    pub selected_background_color: Color,
    /// Number of items in the menu.
    pub item_count: usize,
    /// Image drawn at the trailing edge of items that ask for a divider.
    pub divider_image: Option<Image>,
    /// Height of every item.
    pub height: f32,
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self {
            mode: MenuMode::default(),
            focus_mode: FocusMode::default(),
            background_color: Color::WHITE,
            selected_background_color: Color::WHITE,
            item_count: 0,
            divider_image: None,
            height: DEFAULT_MENU_HEIGHT,
        }
    }
}

impl MenuOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mode(mut self, mode: MenuMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_focus_mode(mut self, focus_mode: FocusMode) -> Self {
        self.focus_mode = focus_mode;
        self
    }

    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_selected_background_color(mut self, color: Color) -> Self {
        self.selected_background_color = color;
        self
    }

    pub fn with_item_count(mut self, count: usize) -> Self {
        self.item_count = count;
        self
    }

    pub fn with_divider_image(mut self, image: Image) -> Self {
        self.divider_image = Some(image);
        self
    }

    pub fn with_height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    /// Background an item should show for the given selection state.
    pub fn background_for(&self, selected: bool) -> Color {
        match self.focus_mode {
            FocusMode::RoundRect { .. } => Color::TRANSPARENT,
            FocusMode::None | FocusMode::Underline { .. } => {
                if selected {
                    self.selected_background_color
                } else {
                    self.background_color
                }
            }
        }
    }

    /// Check that items can be sized with these options.
    pub fn validate(&self) -> MenuResult<()> {
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(MenuError::invalid(format!(
                "menu height must be positive, got {}",
                self.height
            )));
        }

        match self.mode.width_mode() {
            None if self.item_count == 0 => Err(MenuError::invalid(
                "a segmented control needs at least one item",
            )),
            Some(MenuItemWidthMode::Fixed(width)) if !width.is_finite() || width < 0.0 => Err(
                MenuError::invalid(format!("fixed item width must be non-negative, got {width}")),
            ),
            _ => Ok(()),
        }
    }
}

/// Text, colours and fonts of one label, for both selection states.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemText {
    pub text: String,
    pub color: Color,
    pub selected_color: Color,
    pub font: Font,
    pub selected_font: Font,
}

impl MenuItemText {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::LIGHT_GRAY,
            selected_color: Color::BLACK,
            font: Font::system(16.0),
            selected_font: Font::system(16.0),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_selected_color(mut self, color: Color) -> Self {
        self.selected_color = color;
        self
    }

    pub fn with_font(mut self, font: Font) -> Self {
        self.font = font;
        self
    }

    pub fn with_selected_font(mut self, font: Font) -> Self {
        self.selected_font = font;
        self
    }

    pub fn color_for(&self, selected: bool) -> Color {
        if selected { self.selected_color } else { self.color }
    }

    pub fn font_for(&self, selected: bool) -> &Font {
        if selected { &self.selected_font } else { &self.font }
    }

    fn validate(&self) -> MenuResult<()> {
        for font in [&self.font, &self.selected_font] {
            if !font.size().is_finite() || font.size() <= 0.0 {
                return Err(MenuError::invalid(format!(
                    "font size for {:?} must be positive, got {}",
                    self.text,
                    font.size()
                )));
            }
        }
        Ok(())
    }
}

impl Default for MenuItemText {
    fn default() -> Self {
        Self::new("Menu")
    }
}

/// The content an item shows. Fixed for the lifetime of the item.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItemMode {
    Text(MenuItemText),
    MultilineText {
        title: MenuItemText,
        description: MenuItemText,
    },
    Image {
        image: Image,
        /// Shown instead of `image` while selected.
        selected_image: Option<Image>,
    },
}

/// Options for a single menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItemOptions {
    pub mode: MenuItemMode,
    /// Margin on each side of the content. Ignored by segmented controls.
    pub horizontal_margin: f32,
}

impl MenuItemOptions {
    pub fn new(mode: MenuItemMode) -> Self {
        Self {
            mode,
            horizontal_margin: DEFAULT_HORIZONTAL_MARGIN,
        }
    }

    /// A single-line text item.
    pub fn text(text: MenuItemText) -> Self {
        Self::new(MenuItemMode::Text(text))
    }

    /// A two-line item with a title above a description.
    pub fn multiline(title: MenuItemText, description: MenuItemText) -> Self {
        Self::new(MenuItemMode::MultilineText { title, description })
    }

    /// An image item.
    pub fn image(image: Image, selected_image: Option<Image>) -> Self {
        Self::new(MenuItemMode::Image {
            image,
            selected_image,
        })
    }

    pub fn with_horizontal_margin(mut self, margin: f32) -> Self {
        self.horizontal_margin = margin;
        self
    }

    pub fn validate(&self) -> MenuResult<()> {
        if !self.horizontal_margin.is_finite() || self.horizontal_margin < 0.0 {
            return Err(MenuError::invalid(format!(
                "horizontal margin must be non-negative, got {}",
                self.horizontal_margin
            )));
        }

        match &self.mode {
            MenuItemMode::Text(text) => text.validate(),
            MenuItemMode::MultilineText { title, description } => {
                title.validate()?;
                description.validate()
            }
            MenuItemMode::Image { .. } => Ok(()),
        }
    }
}
