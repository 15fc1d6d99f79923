//! Gallery images shown on the public site, grouped by a free-text tag
//! ("food", "ambience", …).

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

/// A photo in the site gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImage {
  pub id:            Id,
  pub title:         String,
  /// Image URL; binary data never enters the store.
  pub image:         String,
  pub alt_text:      String,
  /// Free-text grouping tag, not a [`MenuCategory`](crate::menu::MenuCategory)
  /// reference.
  pub category:      String,
  pub display_order: i32,
}

/// Input to `create_gallery_image`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewGalleryImage {
  #[validate(length(min = 1))]
  pub title:         String,
  #[validate(length(min = 1))]
  pub image:         String,
  #[validate(length(min = 1))]
  pub alt_text:      String,
  #[validate(length(min = 1))]
  pub category:      String,
  pub display_order: i32,
}

/// Partial update for a gallery image.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GalleryImagePatch {
  #[validate(length(min = 1))]
  pub title:         Option<String>,
  #[validate(length(min = 1))]
  pub image:         Option<String>,
  #[validate(length(min = 1))]
  pub alt_text:      Option<String>,
  #[validate(length(min = 1))]
  pub category:      Option<String>,
  pub display_order: Option<i32>,
}

impl GalleryImagePatch {
  /// Shallow-merge the supplied fields onto `img`. The id never changes.
  pub fn apply(self, img: &mut GalleryImage) {
    if let Some(title) = self.title {
      img.title = title;
    }
    if let Some(image) = self.image {
      img.image = image;
    }
    if let Some(alt_text) = self.alt_text {
      img.alt_text = alt_text;
    }
    if let Some(category) = self.category {
      img.category = category;
    }
    if let Some(display_order) = self.display_order {
      img.display_order = display_order;
    }
  }
}
