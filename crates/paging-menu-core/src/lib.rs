//! Core systems for the paging menu: the view hierarchy and logging support.
//!
//! Widgets attach their content nodes to a [`ViewTree`] owned by the menu
//! container. The tree records structure and frames only; it never paints.

pub mod logging;
mod view;

pub use view::{ViewError, ViewId, ViewKind, ViewResult, ViewTree};
