//! Prelude module for the paging menu.
//!
//! ```ignore
//! use paging_menu::prelude::*;
//! ```

// ============================================================================
// Menu Items
// ============================================================================

pub use crate::{MenuItemView, MenuItemViewBuilder, WidthConstraint};

// ============================================================================
// Options and Configuration
// ============================================================================

pub use crate::{
    FocusMode, MenuConfig, MenuError, MenuItemOptions, MenuItemText, MenuItemWidthMode, MenuMode,
    MenuOptions, MenuResult,
};

// ============================================================================
// View Hierarchy
// ============================================================================

pub use paging_menu_core::{ViewId, ViewKind, ViewTree};

// ============================================================================
// Geometry, Images and Text
// ============================================================================

pub use paging_menu_render::{
    Color, Font, Image, MonospaceMeasurer, Point, Rect, SharedFontSystem, Size, TextMeasurer,
};
