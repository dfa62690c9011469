//! Rendering primitives for the paging menu.
//!
//! This crate provides the value types a menu item is built from: geometry
//! ([`Point`], [`Size`], [`Rect`]), [`Color`], fonts and text measurement
//! (the [`text`] module), and [`Image`] handles with intrinsic sizes.
//!
//! Nothing here draws. Painting belongs to the host toolkit; these types only
//! describe what should be drawn and how large it is.

mod error;
mod image;
pub mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use crate::image::{Image, ImageSource};
pub use text::{
    DEFAULT_LINE_HEIGHT, Font, FontBuilder, FontFamily, FontStyle, FontSystem, FontSystemConfig,
    FontWeight, MonospaceMeasurer, SharedFontSystem, TextMeasurer,
};
pub use types::{Color, Point, Rect, Size};
