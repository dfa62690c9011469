//! The menu item widget.
//!
//! A [`MenuItemView`] is one selectable entry of a paged menu. It shows a
//! single line of text, a title with a description below it, or an image,
//! and sizes itself from that content:
//!
//! ```
//! use std::sync::Arc;
//!
//! use paging_menu::{MenuItemOptions, MenuItemText, MenuItemView, MenuOptions};
//! use paging_menu_core::ViewTree;
//! use paging_menu_render::{Font, MonospaceMeasurer, Size};
//!
//! let mut tree = ViewTree::new();
//! let menu = Arc::new(MenuOptions::new().with_item_count(1));
//! let item = MenuItemOptions::text(MenuItemText::new("AB").with_font(Font::system(10.0)))
//!     .with_horizontal_margin(5.0);
//!
//! let mut view = MenuItemView::builder(menu, item, Arc::new(MonospaceMeasurer::new(1.0, 1.0)))
//!     .with_container_size(Size::new(320.0, 568.0))
//!     .build(&mut tree)
//!     .unwrap();
//!
//! assert_eq!(view.width(), 30.0);
//! view.set_selected(true);
//! assert!(view.is_selected());
//! ```

use std::sync::Arc;

use paging_menu_core::logging::targets;
use paging_menu_core::{ViewId, ViewKind, ViewTree};
use paging_menu_render::{Color, Image, Point, Rect, Size, TextMeasurer};

use crate::constraint::WidthConstraint;
use crate::error::{MenuError, MenuResult};
use crate::image_view::ImageView;
use crate::label::Label;
use crate::options::{MenuItemMode, MenuItemOptions, MenuItemText, MenuOptions};
use crate::sizing;

/// Vertical offset of the divider from the item's centre line.
pub const DIVIDER_CENTER_OFFSET: f32 = 1.0;

/// Content of an item, fixed at construction.
#[derive(Debug)]
enum Content {
    Text {
        text: MenuItemText,
        title: Label,
        width: WidthConstraint,
    },
    MultilineText {
        title_text: MenuItemText,
        description_text: MenuItemText,
        title: Label,
        description: Label,
        title_width: WidthConstraint,
        description_width: WidthConstraint,
    },
    Image {
        image: Image,
        selected_image: Option<Image>,
        image_view: ImageView,
        width: WidthConstraint,
    },
}

/// Inputs to the label width calculation, borrowed from the item.
struct LabelSizing<'a> {
    menu: &'a MenuOptions,
    horizontal_margin: f32,
    container: Size,
    measurer: &'a dyn TextMeasurer,
}

impl LabelSizing<'_> {
    fn label_size(&self, label: &Label) -> Size {
        sizing::calculate_label_size(
            label.natural_size(self.measurer),
            self.menu,
            self.horizontal_margin,
            self.container,
        )
    }
}

/// One item of a paged menu.
pub struct MenuItemView {
    id: ViewId,
    menu_options: Arc<MenuOptions>,
    horizontal_margin: f32,
    measurer: Arc<dyn TextMeasurer>,
    content: Content,
    divider: Option<ImageView>,
    background_color: Color,
    selected: bool,
    container_size: Size,
    size: Size,
}

impl MenuItemView {
    /// Start building an item.
    pub fn builder(
        menu_options: Arc<MenuOptions>,
        item_options: MenuItemOptions,
        measurer: Arc<dyn TextMeasurer>,
    ) -> MenuItemViewBuilder {
        MenuItemViewBuilder {
            menu_options,
            item_options,
            measurer,
            add_divider: false,
            container_size: Size::ZERO,
            name: None,
        }
    }

    /// The item's own node in the view tree.
    pub fn view_id(&self) -> ViewId {
        self.id
    }

    pub fn menu_options(&self) -> &Arc<MenuOptions> {
        &self.menu_options
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    /// The container size the item was last sized against.
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// The item size resolved by the last [`layout`](Self::layout) pass.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The horizontal margin actually applied on each side.
    pub fn horizontal_margin(&self) -> f32 {
        sizing::effective_margin(&self.menu_options.mode, self.horizontal_margin)
    }

    pub fn title_label(&self) -> Option<&Label> {
        match &self.content {
            Content::Text { title, .. } | Content::MultilineText { title, .. } => Some(title),
            Content::Image { .. } => None,
        }
    }

    pub fn description_label(&self) -> Option<&Label> {
        match &self.content {
            Content::MultilineText { description, .. } => Some(description),
            Content::Text { .. } | Content::Image { .. } => None,
        }
    }

    pub fn image_view(&self) -> Option<&ImageView> {
        match &self.content {
            Content::Image { image_view, .. } => Some(image_view),
            Content::Text { .. } | Content::MultilineText { .. } => None,
        }
    }

    pub fn divider_image_view(&self) -> Option<&ImageView> {
        self.divider.as_ref()
    }

    /// The primary width constraint: on the title label for text items, on
    /// the item itself for image items.
    pub fn width_constraint(&self) -> WidthConstraint {
        match &self.content {
            Content::Text { width, .. } | Content::Image { width, .. } => *width,
            Content::MultilineText { title_width, .. } => *title_width,
        }
    }

    /// The description label's constraint, for multi-line items.
    pub fn description_width_constraint(&self) -> Option<WidthConstraint> {
        match &self.content {
            Content::MultilineText {
                description_width, ..
            } => Some(*description_width),
            Content::Text { .. } | Content::Image { .. } => None,
        }
    }

    /// The width the item occupies given its constraints and content.
    ///
    /// Multi-line items are as wide as the wider of their two labels.
    pub fn width(&self) -> f32 {
        match &self.content {
            Content::Text { width, .. } | Content::Image { width, .. } => width.constant,
            Content::MultilineText {
                title,
                description,
                title_width,
                description_width,
                ..
            } => {
                let title = title_width.resolve(title.natural_size(self.measurer.as_ref()).width);
                let description = description_width
                    .resolve(description.natural_size(self.measurer.as_ref()).width);
                title.max(description)
            }
        }
    }

    /// Change the selection state.
    ///
    /// Updates the background colour, then re-styles the content: text items
    /// switch colour and font and re-measure their width, image items show
    /// the selected image if there is one. Image widths are left untouched.
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        self.background_color = self.menu_options.background_for(selected);

        let sizer = LabelSizing {
            menu: &self.menu_options,
            horizontal_margin: self.horizontal_margin,
            container: self.container_size,
            measurer: self.measurer.as_ref(),
        };

        match &mut self.content {
            Content::Text { text, title, width } => {
                title.apply_style(text, selected);
                width.set_constant(sizer.label_size(title).width);
            }
            Content::MultilineText {
                title_text,
                description_text,
                title,
                description,
                title_width,
                description_width,
            } => {
                title.apply_style(title_text, selected);
                description.apply_style(description_text, selected);
                title_width.set_constant(sizer.label_size(title).width);
                description_width.set_constant(sizer.label_size(description).width);
            }
            Content::Image {
                image,
                selected_image,
                image_view,
                ..
            } => {
                let shown = match (selected, selected_image.as_ref()) {
                    (true, Some(selected_image)) => selected_image,
                    _ => &*image,
                };
                image_view.set_image(shown);
            }
        }

        tracing::trace!(
            target: targets::MENU_ITEM,
            id = ?self.id,
            selected,
            width = self.width_constraint().constant,
            "selection changed"
        );
    }

    /// Re-size for a new container size, e.g. after rotation.
    ///
    /// Only segmented controls depend on the container width; for every
    /// other menu mode this does nothing.
    pub fn update_constraints(&mut self, container_size: Size) {
        if !self.menu_options.mode.is_segmented_control() {
            return;
        }
        self.container_size = container_size;

        let sizer = LabelSizing {
            menu: &self.menu_options,
            horizontal_margin: self.horizontal_margin,
            container: container_size,
            measurer: self.measurer.as_ref(),
        };

        match &mut self.content {
            Content::Text { title, width, .. } => {
                width.set_constant(sizer.label_size(title).width);
            }
            Content::MultilineText {
                title,
                description,
                title_width,
                description_width,
                ..
            } => {
                title_width.set_constant(sizer.label_size(title).width);
                description_width.set_constant(sizer.label_size(description).width);
            }
            Content::Image { width, .. } => {
                width.set_constant(sizing::segment_width(
                    container_size,
                    self.menu_options.item_count,
                ));
            }
        }

        tracing::debug!(
            target: targets::MENU_ITEM,
            id = ?self.id,
            container_width = container_size.width,
            width = self.width_constraint().constant,
            "constraints updated"
        );
    }

    /// Resolve frames for the item and its children.
    ///
    /// The item keeps its origin; its size becomes the resolved width by the
    /// menu height. Children are positioned in the item's coordinate space.
    pub fn layout(&mut self, tree: &mut ViewTree) -> MenuResult<()> {
        let height = self.menu_options.height;
        let width = self.width();
        let measurer = self.measurer.as_ref();

        match &self.content {
            Content::Text { title, .. } => {
                tree.set_frame(title.view_id(), Rect::new(0.0, 0.0, width, height))?;
            }
            Content::MultilineText {
                title, description, ..
            } => {
                let title_height = title.natural_size(measurer).height.floor();
                let description_height = description.natural_size(measurer).height.floor();
                let margin = (height - (title_height + description_height)).max(0.0) / 2.0;

                tree.set_frame(title.view_id(), Rect::new(0.0, margin, width, title_height))?;
                tree.set_frame(
                    description.view_id(),
                    Rect::new(0.0, margin + title_height, width, description_height),
                )?;
            }
            Content::Image { image_view, .. } => {
                let center = Point::new(width / 2.0, height / 2.0);
                tree.set_frame(image_view.view_id(), Rect::from_center(center, image_view.size()))?;
            }
        }

        if let Some(divider) = &self.divider {
            let size = divider.size();
            let center_y = height / 2.0 + DIVIDER_CENTER_OFFSET;
            tree.set_frame(
                divider.view_id(),
                Rect::new(width - size.width, center_y - size.height / 2.0, size.width, size.height),
            )?;
        }

        let origin = tree.frame(self.id)?.origin;
        tree.set_frame(self.id, Rect::new(origin.x, origin.y, width, height))?;
        self.size = Size::new(width, height);
        Ok(())
    }

    /// Detach the content nodes and divider from the view tree.
    ///
    /// Safe to call repeatedly, and after the parent destroyed the nodes.
    pub fn cleanup(&mut self, tree: &mut ViewTree) {
        let detach = |tree: &mut ViewTree, id: ViewId| {
            if tree.contains(id) {
                // Cannot fail for a live node.
                let _ = tree.remove_from_superview(id);
            }
        };

        match &self.content {
            Content::Text { title, .. } => detach(tree, title.view_id()),
            Content::MultilineText {
                title, description, ..
            } => {
                detach(tree, title.view_id());
                detach(tree, description.view_id());
            }
            Content::Image { image_view, .. } => detach(tree, image_view.view_id()),
        }

        if let Some(divider) = &self.divider {
            detach(tree, divider.view_id());
        }

        tracing::debug!(target: targets::MENU_ITEM, id = ?self.id, "menu item cleaned up");
    }
}

impl std::fmt::Debug for MenuItemView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuItemView")
            .field("id", &self.id)
            .field("content", &self.content)
            .field("divider", &self.divider)
            .field("selected", &self.selected)
            .field("background_color", &self.background_color)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

/// Builder for [`MenuItemView`].
pub struct MenuItemViewBuilder {
    menu_options: Arc<MenuOptions>,
    item_options: MenuItemOptions,
    measurer: Arc<dyn TextMeasurer>,
    add_divider: bool,
    container_size: Size,
    name: Option<String>,
}

impl MenuItemViewBuilder {
    /// Attach the menu's divider image at the trailing edge.
    pub fn with_divider(mut self, add_divider: bool) -> Self {
        self.add_divider = add_divider;
        self
    }

    /// Size of the menu container.
    ///
    /// Segmented controls split its width between items and fail to build
    /// without a positive width.
    pub fn with_container_size(mut self, size: Size) -> Self {
        self.container_size = size;
        self
    }

    /// Name of the item node, shown in view tree dumps.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Validate the options, create the item's nodes in `tree` and size it.
    ///
    /// Fails with [`MenuError::InvalidConfiguration`] if the options are
    /// inconsistent, or if the menu is a segmented control and the container
    /// width is not positive. The item node is created detached; the caller adds it to its container.
    pub fn build(self, tree: &mut ViewTree) -> MenuResult<MenuItemView> {
        let Self {
            menu_options,
            item_options,
            measurer,
            add_divider,
            container_size,
            name,
        } = self;

        menu_options.validate()?;
        item_options.validate()?;
        if menu_options.mode.is_segmented_control()
            && !(container_size.width.is_finite() && container_size.width > 0.0)
        {
            return Err(MenuError::invalid(format!(
                "a segmented control needs a positive container width, got {}",
                container_size.width
            )));
        }
        let MenuItemOptions {
            mode,
            horizontal_margin,
        } = item_options;

        let id = tree.create(ViewKind::MenuItem, name.unwrap_or_else(|| "menu-item".into()));
        let sizer = LabelSizing {
            menu: &menu_options,
            horizontal_margin,
            container: container_size,
            measurer: measurer.as_ref(),
        };

        let content = match mode {
            MenuItemMode::Text(text) => {
                let title = Label::new(tree, "title", &text, false);
                tree.add_subview(id, title.view_id())?;
                let width = WidthConstraint::equal(sizer.label_size(&title).width);
                Content::Text { text, title, width }
            }
            MenuItemMode::MultilineText { title, description } => {
                let title_label = Label::new(tree, "title", &title, false);
                let description_label = Label::new(tree, "description", &description, false);
                tree.add_subview(id, title_label.view_id())?;
                tree.add_subview(id, description_label.view_id())?;
                Content::MultilineText {
                    title_width: WidthConstraint::at_least(sizer.label_size(&title_label).width),
                    description_width: WidthConstraint::at_least(
                        sizer.label_size(&description_label).width,
                    ),
                    title_text: title,
                    description_text: description,
                    title: title_label,
                    description: description_label,
                }
            }
            MenuItemMode::Image {
                image,
                selected_image,
            } => {
                let image_view = ImageView::new(tree, ViewKind::Image, "image", image.clone());
                tree.add_subview(id, image_view.view_id())?;
                let width = WidthConstraint::equal(sizing::image_item_width(
                    &image,
                    &menu_options,
                    horizontal_margin,
                    container_size,
                ));
                Content::Image {
                    image,
                    selected_image,
                    image_view,
                    width,
                }
            }
        };

        let divider = match (add_divider, &menu_options.divider_image) {
            (true, Some(image)) => {
                let divider = ImageView::new(tree, ViewKind::Divider, "divider", image.clone());
                tree.add_subview(id, divider.view_id())?;
                Some(divider)
            }
            (true, None) => {
                tracing::warn!(
                    target: targets::MENU_ITEM,
                    "divider requested but the menu has no divider image"
                );
                None
            }
            (false, _) => None,
        };

        let mut view = MenuItemView {
            id,
            background_color: menu_options.background_for(false),
            menu_options,
            horizontal_margin,
            measurer,
            content,
            divider,
            selected: false,
            container_size,
            size: Size::ZERO,
        };
        view.layout(tree)?;

        tracing::debug!(
            target: targets::MENU_ITEM,
            id = ?view.id,
            width = view.size.width,
            divider = view.divider.is_some(),
            "menu item built"
        );
        Ok(view)
    }
}

static_assertions::assert_impl_all!(MenuItemView: Send, Sync);

#[cfg(test)]
mod tests {
    use paging_menu_render::{Font, MonospaceMeasurer};

    use super::*;
    use crate::options::{FocusMode, MenuItemWidthMode, MenuMode};

    fn measurer() -> Arc<dyn TextMeasurer> {
        Arc::new(MonospaceMeasurer::new(1.0, 1.0))
    }

    fn text(s: &str) -> MenuItemText {
        MenuItemText::new(s)
            .with_font(Font::system(10.0))
            .with_selected_font(Font::system(12.0))
    }

    #[test]
    fn builds_text_item() {
        let mut tree = ViewTree::new();
        let view = MenuItemView::builder(
            Arc::new(MenuOptions::new()),
            MenuItemOptions::text(text("AB")).with_horizontal_margin(5.0),
            measurer(),
        )
        .build(&mut tree)
        .unwrap();

        assert_eq!(view.width(), 30.0);
        assert_eq!(view.width_constraint(), WidthConstraint::equal(30.0));
        assert!(view.description_label().is_none());
        assert!(view.image_view().is_none());
        let title = view.title_label().unwrap();
        assert_eq!(tree.superview(title.view_id()), Some(view.view_id()));
        assert_eq!(view.size(), Size::new(30.0, 50.0));
    }

    #[test]
    fn selection_resizes_text() {
        let mut tree = ViewTree::new();
        let mut view = MenuItemView::builder(
            Arc::new(MenuOptions::new()),
            MenuItemOptions::text(text("AB")).with_horizontal_margin(0.0),
            measurer(),
        )
        .build(&mut tree)
        .unwrap();

        view.set_selected(true);
        assert_eq!(view.width(), 24.0);
        assert_eq!(view.title_label().unwrap().font().size(), 12.0);

        view.set_selected(false);
        assert_eq!(view.width(), 20.0);
    }

    #[test]
    fn round_rect_keeps_background_clear() {
        let mut tree = ViewTree::new();
        let menu = MenuOptions::new().with_focus_mode(FocusMode::RoundRect {
            radius: 10.0,
            horizontal_padding: 4.0,
            height: 30.0,
            color: Color::GRAY,
        });
        let mut view =
            MenuItemView::builder(Arc::new(menu), MenuItemOptions::text(text("A")), measurer())
                .build(&mut tree)
                .unwrap();
        assert_eq!(view.background_color(), Color::TRANSPARENT);
        view.set_selected(true);
        assert_eq!(view.background_color(), Color::TRANSPARENT);
    }

    #[test]
    fn update_constraints_ignored_outside_segmented_control() {
        let mut tree = ViewTree::new();
        let menu = MenuOptions::new().with_mode(MenuMode::Standard {
            width_mode: MenuItemWidthMode::Fixed(50.0),
            center_item: true,
        });
        let mut view = MenuItemView::builder(
            Arc::new(menu),
            MenuItemOptions::text(text("A")).with_horizontal_margin(5.0),
            measurer(),
        )
        .with_container_size(Size::new(320.0, 480.0))
        .build(&mut tree)
        .unwrap();

        view.update_constraints(Size::new(480.0, 320.0));
        assert_eq!(view.width(), 60.0);
        assert_eq!(view.container_size(), Size::new(320.0, 480.0));
    }

    #[test]
    fn divider_without_image_is_skipped() {
        let mut tree = ViewTree::new();
        let view = MenuItemView::builder(
            Arc::new(MenuOptions::new()),
            MenuItemOptions::text(text("A")),
            measurer(),
        )
        .with_divider(true)
        .build(&mut tree)
        .unwrap();
        assert!(view.divider_image_view().is_none());
        assert_eq!(tree.subviews(view.view_id()).len(), 1);
    }

    #[test]
    fn invalid_options_fail_to_build() {
        let mut tree = ViewTree::new();
        let menu = MenuOptions::new().with_mode(MenuMode::SegmentedControl);
        let result = MenuItemView::builder(Arc::new(menu), MenuItemOptions::text(text("A")), measurer())
            .build(&mut tree);
        assert!(result.is_err());
        assert!(tree.is_empty());
    }

    #[test]
    fn segmented_control_requires_container_width() {
        let mut tree = ViewTree::new();
        let menu = Arc::new(
            MenuOptions::new()
                .with_mode(MenuMode::SegmentedControl)
                .with_item_count(3),
        );

        for size in [Size::ZERO, Size::new(-10.0, 400.0), Size::new(f32::INFINITY, 400.0)] {
            let result =
                MenuItemView::builder(menu.clone(), MenuItemOptions::text(text("A")), measurer())
                    .with_container_size(size)
                    .build(&mut tree);
            assert!(matches!(result, Err(MenuError::InvalidConfiguration(_))));
        }
        assert!(tree.is_empty());

        // Other modes never read the container size.
        let view = MenuItemView::builder(
            Arc::new(MenuOptions::new()),
            MenuItemOptions::text(text("A")),
            measurer(),
        )
        .build(&mut tree)
        .unwrap();
        assert_eq!(view.container_size(), Size::ZERO);
    }
}
