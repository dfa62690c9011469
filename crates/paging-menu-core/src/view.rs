//! The view hierarchy.
//!
//! A [`ViewTree`] is an arena of view nodes linked by parent/child edges.
//! Nodes carry only structure (kind, name, parent, children) and a frame;
//! the widgets that own them keep their own content. Attaching and detaching
//! are cheap and detaching an already detached node is a no-op, matching the
//! usual toolkit semantics for "remove from superview".

use paging_menu_render::Rect;
use slotmap::{SlotMap, new_key_type};
use thiserror::Error;

use crate::logging::targets;

new_key_type! {
    /// A handle to a node in a [`ViewTree`].
    ///
    /// Handles stay valid until the node is destroyed; a destroyed handle is
    /// never reused for a different node.
    pub struct ViewId;
}

impl ViewId {
    /// Convert the ViewId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }
}

/// What a view node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// A plain container, e.g. the menu strip holding the items.
    Container,
    /// A menu item.
    MenuItem,
    /// A single-line text label.
    Label,
    /// An image view.
    Image,
    /// A decorative divider image.
    Divider,
}

/// Errors from view hierarchy operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    /// The handle does not refer to a live node.
    #[error("invalid or destroyed view id")]
    InvalidViewId,
    /// Attaching would make a node its own ancestor.
    #[error("cannot add a view as a subview of itself or its descendant")]
    CircularParentage,
}

/// Result type for view operations.
pub type ViewResult<T> = Result<T, ViewError>;

#[derive(Debug)]
struct ViewNode {
    kind: ViewKind,
    name: String,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    frame: Rect,
}

/// An arena of view nodes.
#[derive(Debug, Default)]
pub struct ViewTree {
    nodes: SlotMap<ViewId, ViewNode>,
}

impl ViewTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detached node.
    pub fn create(&mut self, kind: ViewKind, name: impl Into<String>) -> ViewId {
        let name = name.into();
        let id = self.nodes.insert(ViewNode {
            kind,
            name,
            parent: None,
            children: Vec::new(),
            frame: Rect::ZERO,
        });
        tracing::trace!(target: targets::VIEW, ?id, ?kind, "view created");
        id
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.contains_key(id)
    }

    /// Attach `child` as the last subview of `parent`.
    ///
    /// A child that already has a superview is moved.
    pub fn add_subview(&mut self, parent: ViewId, child: ViewId) -> ViewResult<()> {
        if !self.contains(parent) || !self.contains(child) {
            return Err(ViewError::InvalidViewId);
        }
        if parent == child || self.is_descendant(parent, child) {
            return Err(ViewError::CircularParentage);
        }

        self.detach(child);
        self.nodes[parent].children.push(child);
        self.nodes[child].parent = Some(parent);
        tracing::trace!(target: targets::VIEW, ?parent, ?child, "subview added");
        Ok(())
    }

    /// Detach a node from its superview. Detaching a detached node does nothing.
    pub fn remove_from_superview(&mut self, id: ViewId) -> ViewResult<()> {
        if !self.contains(id) {
            return Err(ViewError::InvalidViewId);
        }
        if self.detach(id) {
            tracing::trace!(target: targets::VIEW, ?id, "removed from superview");
        }
        Ok(())
    }

    fn detach(&mut self, id: ViewId) -> bool {
        let Some(parent) = self.nodes[id].parent.take() else {
            return false;
        };
        if let Some(node) = self.nodes.get_mut(parent) {
            node.children.retain(|&c| c != id);
        }
        true
    }

    /// Destroy a node and its whole subtree.
    pub fn destroy(&mut self, id: ViewId) -> ViewResult<()> {
        if !self.contains(id) {
            return Err(ViewError::InvalidViewId);
        }
        self.detach(id);

        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            if let Some(node) = self.nodes.remove(next) {
                stack.extend(node.children);
            }
        }
        Ok(())
    }

    pub fn superview(&self, id: ViewId) -> Option<ViewId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Subviews in insertion order. Empty for an invalid id.
    pub fn subviews(&self, id: ViewId) -> &[ViewId] {
        self.nodes.get(id).map(|n| n.children.as_slice()).unwrap_or(&[])
    }

    /// Whether the node currently has a superview.
    pub fn is_attached(&self, id: ViewId) -> bool {
        self.superview(id).is_some()
    }

    /// Whether `id` is somewhere below `ancestor`.
    pub fn is_descendant(&self, id: ViewId, ancestor: ViewId) -> bool {
        let mut current = self.superview(id);
        while let Some(p) = current {
            if p == ancestor {
                return true;
            }
            current = self.superview(p);
        }
        false
    }

    pub fn kind(&self, id: ViewId) -> ViewResult<ViewKind> {
        self.nodes
            .get(id)
            .map(|n| n.kind)
            .ok_or(ViewError::InvalidViewId)
    }

    pub fn name(&self, id: ViewId) -> ViewResult<&str> {
        self.nodes
            .get(id)
            .map(|n| n.name.as_str())
            .ok_or(ViewError::InvalidViewId)
    }

    /// Frame of the node in its superview's coordinate space.
    pub fn frame(&self, id: ViewId) -> ViewResult<Rect> {
        self.nodes
            .get(id)
            .map(|n| n.frame)
            .ok_or(ViewError::InvalidViewId)
    }

    pub fn set_frame(&mut self, id: ViewId, frame: Rect) -> ViewResult<()> {
        let node = self.nodes.get_mut(id).ok_or(ViewError::InvalidViewId)?;
        node.frame = frame;
        Ok(())
    }
}
