//! Item width calculation.
//!
//! Everything here is a pure function of the options, the natural content
//! size and the container size handed in by the caller.

use paging_menu_core::logging::targets;
use paging_menu_render::{Image, Size};

use crate::options::{MenuItemWidthMode, MenuMode, MenuOptions};

/// Content width for a natural size under a width mode.
pub fn label_width(natural: Size, width_mode: MenuItemWidthMode) -> f32 {
    match width_mode {
        MenuItemWidthMode::Flexible => natural.width.ceil(),
        MenuItemWidthMode::Fixed(width) => width,
    }
}

/// The margin actually applied on each side. Segmented controls use none.
pub fn effective_margin(mode: &MenuMode, horizontal_margin: f32) -> f32 {
    if mode.is_segmented_control() {
        0.0
    } else {
        horizontal_margin
    }
}

/// Width of one segment when the container is split evenly between items.
pub fn segment_width(container: Size, item_count: usize) -> f32 {
    container.width / item_count as f32
}

/// Size of a label slot: resolved width plus margins, and the floored
/// natural height.
pub fn calculate_label_size(
    natural: Size,
    menu: &MenuOptions,
    horizontal_margin: f32,
    container: Size,
) -> Size {
    let item_width = match menu.mode {
        MenuMode::Standard { width_mode, .. } | MenuMode::Infinite { width_mode } => {
            label_width(natural, width_mode)
        }
        MenuMode::SegmentedControl => segment_width(container, menu.item_count),
    };
    let margin = effective_margin(&menu.mode, horizontal_margin);

    let size = Size::new(item_width + margin * 2.0, natural.height.floor());
    tracing::trace!(
        target: targets::LAYOUT,
        natural_width = natural.width,
        width = size.width,
        height = size.height,
        "label size"
    );
    size
}

/// Width of an image item.
pub fn image_item_width(
    image: &Image,
    menu: &MenuOptions,
    horizontal_margin: f32,
    container: Size,
) -> f32 {
    match menu.mode {
        MenuMode::SegmentedControl => segment_width(container, menu.item_count),
        MenuMode::Standard { .. } | MenuMode::Infinite { .. } => {
            image.width() + effective_margin(&menu.mode, horizontal_margin) * 2.0
        }
    }
}
