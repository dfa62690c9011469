//! Image views for image items and dividers.

use paging_menu_core::{ViewId, ViewKind, ViewTree};
use paging_menu_render::{Image, Size};

/// A view showing one image at a fixed size.
///
/// The size is taken from the first image shown and does not change when the
/// image is swapped.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageView {
    id: ViewId,
    image: Image,
    size: Size,
}

impl ImageView {
    pub(crate) fn new(tree: &mut ViewTree, kind: ViewKind, name: &str, image: Image) -> Self {
        Self {
            id: tree.create(kind, name),
            size: image.size(),
            image,
        }
    }

    pub fn view_id(&self) -> ViewId {
        self.id
    }

    /// The image currently displayed.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// The fixed display size.
    pub fn size(&self) -> Size {
        self.size
    }

    pub(crate) fn set_image(&mut self, image: &Image) {
        if &self.image != image {
            self.image = image.clone();
        }
    }
}
