//! Integration tests for menu item sizing, selection and cleanup.
//!
//! Text is measured with a monospace measurer where every character of a
//! size-10 font is 10 units wide and 10 units tall.

use std::sync::Arc;

use paging_menu::prelude::*;
use paging_menu::{MenuItemViewBuilder, Relation};
use paging_menu_core::logging::{TreeStyle, ViewTreeDebug};
use proptest::prelude::*;

const CONTAINER: Size = Size::new(320.0, 568.0);

fn measurer() -> Arc<dyn TextMeasurer> {
    Arc::new(MonospaceMeasurer::new(1.0, 1.0))
}

fn text(s: &str) -> MenuItemText {
    MenuItemText::new(s)
        .with_color(Color::GRAY)
        .with_selected_color(Color::BLACK)
        .with_font(Font::system(10.0))
        .with_selected_font(Font::bold_system(14.0))
}

fn standard(width_mode: MenuItemWidthMode) -> MenuOptions {
    MenuOptions::new()
        .with_mode(MenuMode::Standard {
            width_mode,
            center_item: false,
        })
        .with_item_count(3)
}

fn builder(menu: MenuOptions, item: MenuItemOptions) -> MenuItemViewBuilder {
    MenuItemView::builder(Arc::new(menu), item, measurer()).with_container_size(CONTAINER)
}

fn image(name: &str, width: f32, height: f32) -> Image {
    Image::new(name, Size::new(width, height)).unwrap()
}

#[test]
fn test_flexible_text_width() {
    let mut tree = ViewTree::new();
    let view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::text(text("AB")).with_horizontal_margin(5.0),
    )
    .build(&mut tree)
    .unwrap();

    assert_eq!(view.width(), 30.0);
    assert_eq!(view.width_constraint().relation, Relation::Equal);
    assert_eq!(tree.frame(view.view_id()).unwrap().size, Size::new(30.0, 50.0));
}

#[test]
fn test_fixed_text_width_ignores_text() {
    let mut tree = ViewTree::new();
    for s in ["", "A", "A much longer title than fits"] {
        let view = builder(
            standard(MenuItemWidthMode::Fixed(64.0)),
            MenuItemOptions::text(text(s)).with_horizontal_margin(8.0),
        )
        .build(&mut tree)
        .unwrap();
        assert_eq!(view.width(), 80.0, "text {s:?}");
    }
}

#[test]
fn test_empty_text_keeps_margins() {
    let mut tree = ViewTree::new();
    let view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::text(text("")).with_horizontal_margin(6.0),
    )
    .build(&mut tree)
    .unwrap();
    assert_eq!(view.width(), 12.0);
}

#[test]
fn test_selection_round_trip() {
    let mut tree = ViewTree::new();
    let mut view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::text(text("Home")).with_horizontal_margin(5.0),
    )
    .build(&mut tree)
    .unwrap();

    let width = view.width();
    let title = view.title_label().unwrap().clone();
    let background = view.background_color();

    view.set_selected(true);
    assert_eq!(view.width(), 4.0 * 14.0 + 10.0);
    assert_eq!(view.title_label().unwrap().color(), Color::BLACK);
    assert_eq!(view.title_label().unwrap().font(), &Font::bold_system(14.0));

    view.set_selected(false);
    assert_eq!(view.width(), width);
    assert_eq!(view.title_label().unwrap(), &title);
    assert_eq!(view.background_color(), background);
}

#[test]
fn test_selected_background() {
    let mut tree = ViewTree::new();
    let menu = standard(MenuItemWidthMode::Flexible)
        .with_background_color(Color::WHITE)
        .with_selected_background_color(Color::LIGHT_GRAY);
    let mut view = builder(menu, MenuItemOptions::text(text("A")))
        .build(&mut tree)
        .unwrap();

    assert_eq!(view.background_color(), Color::WHITE);
    view.set_selected(true);
    assert_eq!(view.background_color(), Color::LIGHT_GRAY);
}

#[test]
fn test_multiline_constraints() {
    let mut tree = ViewTree::new();
    let mut view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::multiline(text("ABCD"), text("ABCDEF")).with_horizontal_margin(0.0),
    )
    .build(&mut tree)
    .unwrap();

    assert_eq!(view.width_constraint(), WidthConstraint::at_least(40.0));
    assert_eq!(
        view.description_width_constraint(),
        Some(WidthConstraint::at_least(60.0))
    );
    assert_eq!(view.width(), 60.0);

    // Both labels are 10 tall, centred in the 50 high item.
    let title = tree.frame(view.title_label().unwrap().view_id()).unwrap();
    let description = tree
        .frame(view.description_label().unwrap().view_id())
        .unwrap();
    assert_eq!(title, Rect::new(0.0, 15.0, 60.0, 10.0));
    assert_eq!(description, Rect::new(0.0, 25.0, 60.0, 10.0));

    view.set_selected(true);
    assert_eq!(view.width_constraint(), WidthConstraint::at_least(56.0));
    assert_eq!(
        view.description_width_constraint(),
        Some(WidthConstraint::at_least(84.0))
    );
}

#[test]
fn test_segmented_control_splits_container() {
    let mut tree = ViewTree::new();
    let menu = Arc::new(
        MenuOptions::new()
            .with_mode(MenuMode::SegmentedControl)
            .with_item_count(3),
    );

    let views: Vec<_> = ["A", "Much longer", "C"]
        .into_iter()
        .map(|s| {
            MenuItemView::builder(
                menu.clone(),
                MenuItemOptions::text(text(s)).with_horizontal_margin(25.0),
                measurer(),
            )
            .with_container_size(Size::new(300.0, 500.0))
            .build(&mut tree)
            .unwrap()
        })
        .collect();

    for view in &views {
        assert_eq!(view.width(), 100.0);
        assert_eq!(view.horizontal_margin(), 0.0);
    }
}

#[test]
fn test_segmented_control_follows_rotation() {
    let mut tree = ViewTree::new();
    let menu = MenuOptions::new()
        .with_mode(MenuMode::SegmentedControl)
        .with_item_count(4);
    let mut text_view = builder(menu.clone(), MenuItemOptions::text(text("A")))
        .build(&mut tree)
        .unwrap();
    let mut image_view = builder(menu, MenuItemOptions::image(image("icon", 24.0, 24.0), None))
        .build(&mut tree)
        .unwrap();
    assert_eq!(text_view.width(), 80.0);
    assert_eq!(image_view.width(), 80.0);

    let rotated = Size::new(CONTAINER.height, CONTAINER.width);
    text_view.update_constraints(rotated);
    image_view.update_constraints(rotated);
    assert_eq!(text_view.width(), 142.0);
    assert_eq!(image_view.width(), 142.0);

    // Selection re-measures against the rotated container.
    text_view.set_selected(true);
    assert_eq!(text_view.width(), 142.0);
    assert_eq!(text_view.container_size(), rotated);

    text_view.layout(&mut tree).unwrap();
    assert_eq!(tree.frame(text_view.view_id()).unwrap().width(), 142.0);
}

#[test]
fn test_segmented_control_without_container_fails() {
    let mut tree = ViewTree::new();
    let menu = Arc::new(
        MenuOptions::new()
            .with_mode(MenuMode::SegmentedControl)
            .with_item_count(3),
    );
    let result = MenuItemView::builder(menu, MenuItemOptions::text(text("A")), measurer())
        .build(&mut tree);
    assert!(matches!(result, Err(MenuError::InvalidConfiguration(_))));
    assert!(tree.is_empty());
}

#[test]
fn test_segmented_multiline_follows_rotation() {
    let mut tree = ViewTree::new();
    let menu = MenuOptions::new()
        .with_mode(MenuMode::SegmentedControl)
        .with_item_count(4);
    let mut view = builder(
        menu,
        MenuItemOptions::multiline(text("ABCD"), text("ABCDEF")).with_horizontal_margin(15.0),
    )
    .build(&mut tree)
    .unwrap();
    assert_eq!(view.width_constraint(), WidthConstraint::at_least(80.0));
    assert_eq!(
        view.description_width_constraint(),
        Some(WidthConstraint::at_least(80.0))
    );

    view.update_constraints(Size::new(CONTAINER.height, CONTAINER.width));
    assert_eq!(view.width_constraint(), WidthConstraint::at_least(142.0));
    assert_eq!(
        view.description_width_constraint(),
        Some(WidthConstraint::at_least(142.0))
    );
    assert_eq!(view.width_constraint().relation, Relation::GreaterThanOrEqual);
    assert_eq!(view.width(), 142.0);
}

#[test]
fn test_image_selection_swaps_image() {
    let mut tree = ViewTree::new();
    let base = image("star", 24.0, 24.0);
    let selected = image("star-filled", 24.0, 24.0);
    let mut view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::image(base.clone(), Some(selected.clone())).with_horizontal_margin(8.0),
    )
    .build(&mut tree)
    .unwrap();

    let constraint = view.width_constraint();
    assert_eq!(constraint, WidthConstraint::equal(40.0));

    view.set_selected(true);
    assert_eq!(view.image_view().unwrap().image(), &selected);
    assert_eq!(view.width_constraint(), constraint);

    view.set_selected(false);
    assert_eq!(view.image_view().unwrap().image(), &base);
    assert_eq!(view.width_constraint(), constraint);
}

#[test]
fn test_image_selection_without_selected_image() {
    let mut tree = ViewTree::new();
    let base = image("star", 24.0, 24.0);
    let mut view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::image(base.clone(), None),
    )
    .build(&mut tree)
    .unwrap();

    view.set_selected(true);
    assert_eq!(view.image_view().unwrap().image(), &base);
    assert!(view.title_label().is_none());
}

#[test]
fn test_image_is_centred() {
    let mut tree = ViewTree::new();
    let view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::image(image("icon", 20.0, 30.0), None).with_horizontal_margin(10.0),
    )
    .build(&mut tree)
    .unwrap();

    let frame = tree.frame(view.image_view().unwrap().view_id()).unwrap();
    assert_eq!(frame, Rect::new(10.0, 10.0, 20.0, 30.0));
}

#[test]
fn test_divider_at_trailing_edge() {
    let mut tree = ViewTree::new();
    let menu = standard(MenuItemWidthMode::Flexible).with_divider_image(image("divider", 1.0, 20.0));
    let view = builder(menu, MenuItemOptions::text(text("AB")).with_horizontal_margin(5.0))
        .with_divider(true)
        .build(&mut tree)
        .unwrap();

    let divider = view.divider_image_view().unwrap();
    assert_eq!(tree.superview(divider.view_id()), Some(view.view_id()));
    let frame = tree.frame(divider.view_id()).unwrap();
    assert_eq!(frame.right(), 30.0);
    assert_eq!(frame.center().y, 26.0);
}

#[test]
fn test_item_subtree_dump() {
    let mut tree = ViewTree::new();
    let menu = standard(MenuItemWidthMode::Flexible).with_divider_image(image("divider", 1.0, 20.0));
    let view = builder(menu, MenuItemOptions::text(text("AB")).with_horizontal_margin(5.0))
        .with_divider(true)
        .with_name("home")
        .build(&mut tree)
        .unwrap();

    let dump = ViewTreeDebug::new()
        .with_style(TreeStyle::Ascii)
        .with_frames(true)
        .format_subtree(&tree, view.view_id())
        .unwrap();
    assert_eq!(
        dump,
        "home (MenuItem) @ 0,0 30x50\n\
         +-- title (Label) @ 0,0 30x50\n\
         `-- divider (Divider) @ 29,16 1x20\n"
    );
}

#[test]
fn test_cleanup_twice() {
    let mut tree = ViewTree::new();
    let menu = standard(MenuItemWidthMode::Flexible).with_divider_image(image("divider", 1.0, 20.0));
    let mut view = builder(menu, MenuItemOptions::multiline(text("A"), text("B")))
        .with_divider(true)
        .build(&mut tree)
        .unwrap();
    assert_eq!(tree.subviews(view.view_id()).len(), 3);

    view.cleanup(&mut tree);
    assert!(tree.subviews(view.view_id()).is_empty());
    view.cleanup(&mut tree);
    assert!(tree.subviews(view.view_id()).is_empty());
}

#[test]
fn test_image_item_cleanup() {
    let mut tree = ViewTree::new();
    let menu = standard(MenuItemWidthMode::Flexible).with_divider_image(image("divider", 1.0, 20.0));
    let mut view = builder(menu, MenuItemOptions::image(image("icon", 24.0, 24.0), None))
        .with_divider(true)
        .build(&mut tree)
        .unwrap();
    let image_id = view.image_view().unwrap().view_id();
    assert_eq!(tree.superview(image_id), Some(view.view_id()));
    assert_eq!(tree.subviews(view.view_id()).len(), 2);

    view.cleanup(&mut tree);
    assert!(tree.subviews(view.view_id()).is_empty());
    assert!(tree.superview(image_id).is_none());
    view.cleanup(&mut tree);
    assert!(tree.subviews(view.view_id()).is_empty());
}

#[test]
fn test_cleanup_after_destroy() {
    let mut tree = ViewTree::new();
    let mut view = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::text(text("A")),
    )
    .build(&mut tree)
    .unwrap();

    tree.destroy(view.view_id()).unwrap();
    view.cleanup(&mut tree);
    assert!(tree.is_empty());
}

#[test]
fn test_invalid_item_options() {
    let mut tree = ViewTree::new();
    let result = builder(
        standard(MenuItemWidthMode::Flexible),
        MenuItemOptions::text(text("A")).with_horizontal_margin(-1.0),
    )
    .build(&mut tree);
    assert!(matches!(result, Err(MenuError::InvalidConfiguration(_))));
}

proptest! {
    #[test]
    fn flexible_width_grows_with_text(
        s in "[a-zA-Z ]{0,24}",
        extra in "[a-zA-Z]{1,8}",
        margin in 0.0f32..40.0,
    ) {
        let mut tree = ViewTree::new();
        let short = builder(
            standard(MenuItemWidthMode::Flexible),
            MenuItemOptions::text(text(&s)).with_horizontal_margin(margin),
        )
        .build(&mut tree)
        .unwrap();
        let long = builder(
            standard(MenuItemWidthMode::Flexible),
            MenuItemOptions::text(text(&format!("{s}{extra}"))).with_horizontal_margin(margin),
        )
        .build(&mut tree)
        .unwrap();

        prop_assert_eq!(short.width(), (s.len() as f32 * 10.0).ceil() + 2.0 * margin);
        prop_assert!(long.width() >= short.width());
    }

    #[test]
    fn fixed_width_ignores_text(
        s in "\\PC{0,32}",
        width in 0.0f32..300.0,
        margin in 0.0f32..40.0,
    ) {
        let mut tree = ViewTree::new();
        let mut view = builder(
            standard(MenuItemWidthMode::Fixed(width)),
            MenuItemOptions::text(text(&s)).with_horizontal_margin(margin),
        )
        .build(&mut tree)
        .unwrap();

        prop_assert_eq!(view.width(), width + 2.0 * margin);
        view.set_selected(true);
        prop_assert_eq!(view.width(), width + 2.0 * margin);
    }
}
