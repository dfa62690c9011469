//! Fonts and text measurement.
//!
//! Fonts are plain descriptions ([`Font`]); a [`TextMeasurer`] turns a string
//! and a font into its natural size.
//!
//! ```
//! use paging_menu_render::Size;
//! use paging_menu_render::text::{Font, MonospaceMeasurer, TextMeasurer};
//!
//! let measurer = MonospaceMeasurer::new(1.0, 1.0);
//! let size = measurer.measure("AB", &Font::system(10.0));
//! assert_eq!(size, Size::new(20.0, 10.0));
//! ```

mod font;
mod font_system;
mod measure;
mod types;

pub use font::{Font, FontBuilder};
pub use font_system::{FontSystem, FontSystemConfig};
pub use measure::{DEFAULT_LINE_HEIGHT, MonospaceMeasurer, SharedFontSystem, TextMeasurer};
pub use types::{FontFamily, FontStyle, FontWeight};
