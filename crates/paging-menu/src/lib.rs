//! Paging Menu - menu items for horizontally paged menus and tab strips.
//!
//! A paged menu is a horizontal strip of selectable items above a set of
//! swipeable pages. This crate provides the item widget, [`MenuItemView`],
//! which shows text, a title with a description, or an image, and sizes
//! itself from the menu's layout mode.
//!
//! Items share one [`MenuOptions`] through an `Arc` and each get their own
//! [`MenuItemOptions`]. Text is measured through a
//! [`TextMeasurer`](paging_menu_render::TextMeasurer): use
//! [`SharedFontSystem`](paging_menu_render::SharedFontSystem) for real fonts
//! or [`MonospaceMeasurer`](paging_menu_render::MonospaceMeasurer) for
//! deterministic sizing.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use paging_menu::prelude::*;
//! use paging_menu_render::FontSystem;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (menu, items) = MenuConfig::load("menu.toml")?.to_options()?;
//!     let menu = Arc::new(menu);
//!     let measurer: Arc<dyn TextMeasurer> = Arc::new(SharedFontSystem::new(FontSystem::new()));
//!
//!     let mut tree = ViewTree::new();
//!     let container = tree.create(ViewKind::Container, "menu");
//!     for (index, item) in items.into_iter().enumerate() {
//!         let view = MenuItemView::builder(menu.clone(), item, measurer.clone())
//!             .with_divider(index + 1 < menu.item_count)
//!             .with_container_size(Size::new(375.0, 667.0))
//!             .build(&mut tree)?;
//!         tree.add_subview(container, view.view_id())?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
mod constraint;
mod error;
mod image_view;
mod label;
mod menu_item_view;
mod options;
pub mod prelude;
pub mod sizing;

pub use config::MenuConfig;
pub use constraint::{Relation, WidthConstraint};
pub use error::{MenuError, MenuResult};
pub use image_view::ImageView;
pub use label::Label;
pub use menu_item_view::{DIVIDER_CENTER_OFFSET, MenuItemView, MenuItemViewBuilder};
pub use options::{
    DEFAULT_HORIZONTAL_MARGIN, DEFAULT_MENU_HEIGHT, FocusMode, MenuItemMode, MenuItemOptions,
    MenuItemText, MenuItemWidthMode, MenuMode, MenuOptions,
};
