//! Guest testimonials shown on the home page.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

/// A guest review. `rating` supports half-steps (4.5) for star rendering;
/// `date` is a display string, not a parsed calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
  pub id:     Id,
  pub name:   String,
  pub text:   String,
  pub rating: f32,
  pub date:   String,
  pub image:  Option<String>,
}

/// Input to `create_testimonial`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTestimonial {
  #[validate(length(min = 1))]
  pub name:   String,
  #[validate(length(min = 1))]
  pub text:   String,
  #[validate(range(min = 0.5, max = 5.0))]
  pub rating: f32,
  #[validate(length(min = 1))]
  pub date:   String,
  pub image:  Option<String>,
}

/// Partial update for a testimonial.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestimonialPatch {
  #[validate(length(min = 1))]
  pub name:   Option<String>,
  #[validate(length(min = 1))]
  pub text:   Option<String>,
  #[validate(range(min = 0.5, max = 5.0))]
  pub rating: Option<f32>,
  #[validate(length(min = 1))]
  pub date:   Option<String>,
  pub image:  Option<String>,
}

impl TestimonialPatch {
  /// Shallow-merge the supplied fields onto `testimonial`.
  pub fn apply(self, testimonial: &mut Testimonial) {
    if let Some(name) = self.name {
      testimonial.name = name;
    }
    if let Some(text) = self.text {
      testimonial.text = text;
    }
    if let Some(rating) = self.rating {
      testimonial.rating = rating;
    }
    if let Some(date) = self.date {
      testimonial.date = date;
    }
    if let Some(image) = self.image {
      testimonial.image = Some(image);
    }
  }
}
