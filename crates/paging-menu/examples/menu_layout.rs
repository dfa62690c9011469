//! Menu item layout example.
//!
//! Builds a small menu, either from a TOML file or inline, measures it with
//! the system fonts and prints the resulting view tree before and after a
//! selection change.
//!
//! Run with: cargo run -p paging-menu --example menu_layout [menu.toml]

use std::sync::Arc;

use paging_menu::prelude::*;
use paging_menu_core::logging::ViewTreeDebug;
use paging_menu_render::{FontSystem, FontWeight};

fn inline_menu() -> (MenuOptions, Vec<MenuItemOptions>) {
    let title = |s: &str| {
        MenuItemText::new(s).with_selected_font(Font::system(16.0).with_weight(FontWeight::BOLD))
    };
    let items = vec![
        MenuItemOptions::text(title("Home")),
        MenuItemOptions::text(title("Trending")),
        MenuItemOptions::multiline(
            title("Inbox"),
            MenuItemText::new("3 unread").with_font(Font::system(11.0)),
        ),
    ];
    let menu = MenuOptions::new()
        .with_mode(MenuMode::Standard {
            width_mode: MenuItemWidthMode::Flexible,
            center_item: true,
        })
        .with_item_count(items.len());
    (menu, items)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let (menu, items) = match std::env::args().nth(1) {
        Some(path) => MenuConfig::load(path)?.to_options()?,
        None => inline_menu(),
    };
    let menu = Arc::new(menu);
    let measurer: Arc<dyn TextMeasurer> = Arc::new(SharedFontSystem::new(FontSystem::new()));
    let container_size = Size::new(375.0, 667.0);

    let mut tree = ViewTree::new();
    let container = tree.create(ViewKind::Container, "menu");
    let mut views = Vec::with_capacity(items.len());
    let mut x = 0.0;
    for (index, item) in items.into_iter().enumerate() {
        let mut view = MenuItemView::builder(menu.clone(), item, measurer.clone())
            .with_divider(index + 1 < menu.item_count)
            .with_container_size(container_size)
            .with_name(format!("item-{index}"))
            .build(&mut tree)?;
        tree.add_subview(container, view.view_id())?;
        tree.set_frame(view.view_id(), Rect::new(x, 0.0, 0.0, 0.0))?;
        view.layout(&mut tree)?;
        x += view.width();
        views.push(view);
    }

    let debug = ViewTreeDebug::new().with_frames(true);
    println!("{}", debug.format_subtree(&tree, container)?);

    if let Some(first) = views.first_mut() {
        first.set_selected(true);
        first.layout(&mut tree)?;
        println!("{}", debug.format_subtree(&tree, container)?);
    }

    for view in &mut views {
        view.cleanup(&mut tree);
    }
    Ok(())
}
