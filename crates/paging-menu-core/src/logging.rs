//! Logging and debugging facilities.
//!
//! The paging menu uses the `tracing` crate for instrumentation. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("paging_menu=debug")
//!     .init();
//! ```
//!
//! [`ViewTreeDebug`] renders a view subtree as indented text, which is handy
//! when checking what a menu item attached or detached.

use std::fmt::Write as FmtWrite;

use crate::view::{ViewId, ViewResult, ViewTree};

/// Target names for log filtering.
pub mod targets {
    /// View hierarchy target.
    pub const VIEW: &str = "paging_menu_core::view";
    /// Menu item lifecycle and selection target.
    pub const MENU_ITEM: &str = "paging_menu::menu_item";
    /// Width calculation target.
    pub const LAYOUT: &str = "paging_menu::layout";
    /// Configuration loading target.
    pub const CONFIG: &str = "paging_menu::config";
}

/// Style options for tree visualization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreeStyle {
    /// ASCII characters for tree branches.
    Ascii,
    /// Unicode box-drawing characters.
    #[default]
    Unicode,
}

/// Debug utility for visualizing a view hierarchy.
#[derive(Debug, Clone, Default)]
pub struct ViewTreeDebug {
    style: TreeStyle,
    show_frames: bool,
}

impl ViewTreeDebug {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: TreeStyle) -> Self {
        self.style = style;
        self
    }

    /// Include each node's frame in the output.
    pub fn with_frames(mut self, show: bool) -> Self {
        self.show_frames = show;
        self
    }

    /// Format the subtree rooted at `root`.
    pub fn format_subtree(&self, tree: &ViewTree, root: ViewId) -> ViewResult<String> {
        let mut output = String::new();
        self.format_into(tree, root, "", true, true, &mut output)?;
        Ok(output)
    }

    fn format_into(
        &self,
        tree: &ViewTree,
        id: ViewId,
        indent: &str,
        is_last: bool,
        is_root: bool,
        output: &mut String,
    ) -> ViewResult<()> {
        let (tee, corner, pipe) = match self.style {
            TreeStyle::Ascii => ("+-- ", "`-- ", "|   "),
            TreeStyle::Unicode => ("\u{251c}\u{2500}\u{2500} ", "\u{2514}\u{2500}\u{2500} ", "\u{2502}   "),
        };

        output.push_str(indent);
        if !is_root {
            output.push_str(if is_last { corner } else { tee });
        }

        let name = tree.name(id)?;
        let display_name = if name.is_empty() { "(unnamed)" } else { name };
        let _ = write!(output, "{display_name} ({:?})", tree.kind(id)?);
        if self.show_frames {
            let f = tree.frame(id)?;
            let _ = write!(
                output,
                " @ {},{} {}x{}",
                f.origin.x, f.origin.y, f.size.width, f.size.height
            );
        }
        output.push('\n');

        let child_indent = if is_root {
            String::new()
        } else if is_last {
            format!("{indent}    ")
        } else {
            format!("{indent}{pipe}")
        };

        let children = tree.subviews(id);
        for (i, &child) in children.iter().enumerate() {
            self.format_into(tree, child, &child_indent, i + 1 == children.len(), false, output)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use paging_menu_render::Rect;

    use super::*;
    use crate::view::{ViewError, ViewKind};

    #[test]
    fn formats_hierarchy() {
        let mut tree = ViewTree::new();
        let root = tree.create(ViewKind::Container, "menu");
        let item = tree.create(ViewKind::MenuItem, "home");
        let label = tree.create(ViewKind::Label, "");
        tree.add_subview(root, item).unwrap();
        tree.add_subview(item, label).unwrap();

        let output = ViewTreeDebug::new()
            .with_style(TreeStyle::Ascii)
            .format_subtree(&tree, root)
            .unwrap();
        assert_eq!(
            output,
            "menu (Container)\n`-- home (MenuItem)\n    `-- (unnamed) (Label)\n"
        );
    }

    #[test]
    fn shows_frames() {
        let mut tree = ViewTree::new();
        let item = tree.create(ViewKind::MenuItem, "item");
        tree.set_frame(item, Rect::new(0.0, 0.0, 30.0, 50.0)).unwrap();
        let output = ViewTreeDebug::new()
            .with_frames(true)
            .format_subtree(&tree, item)
            .unwrap();
        assert!(output.contains("30x50"));
    }

    #[test]
    fn invalid_root() {
        let mut tree = ViewTree::new();
        let item = tree.create(ViewKind::MenuItem, "item");
        tree.destroy(item).unwrap();
        assert_eq!(
            ViewTreeDebug::new().format_subtree(&tree, item),
            Err(ViewError::InvalidViewId)
        );
    }
}
