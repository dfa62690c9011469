//! Single-line text labels inside a menu item.

use paging_menu_core::{ViewId, ViewKind, ViewTree};
use paging_menu_render::{Color, Font, Size, TextMeasurer};

use crate::options::MenuItemText;

/// A centred, single-line label.
///
/// The text never changes after construction; colour and font follow the
/// owning item's selection state.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    id: ViewId,
    text: String,
    color: Color,
    font: Font,
}

impl Label {
    pub(crate) fn new(tree: &mut ViewTree, name: &str, text: &MenuItemText, selected: bool) -> Self {
        Self {
            id: tree.create(ViewKind::Label, name),
            text: text.text.clone(),
            color: text.color_for(selected),
            font: text.font_for(selected).clone(),
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Apply colour and font for a selection state.
    pub(crate) fn apply_style(&mut self, text: &MenuItemText, selected: bool) {
        self.color = text.color_for(selected);
        self.font = text.font_for(selected).clone();
    }

    /// Unconstrained size of the text in the current font.
    pub fn natural_size(&self, measurer: &dyn TextMeasurer) -> Size {
        measurer.measure(&self.text, &self.font)
    }
}
