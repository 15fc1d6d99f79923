//! Restaurant identity singletons — [`RestaurantInfo`] and [`AboutSection`].
//!
//! Both rows exist at most once, stored under the fixed id 1. Writes are
//! full-field upserts: create if absent, otherwise replace every field while
//! keeping the id. The partial-merge semantics of the other entities do not
//! apply here.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

/// The fixed id under which each singleton row is stored.
pub const SINGLETON_ID: Id = 1;

// ─── Opening hours ───────────────────────────────────────────────────────────

/// Human-readable opening hours, one display string per weekday
/// (e.g. `"11:30 AM - 9:30 PM"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyHours {
  pub monday:    String,
  pub tuesday:   String,
  pub wednesday: String,
  pub thursday:  String,
  pub friday:    String,
  pub saturday:  String,
  pub sunday:    String,
}

// ─── Social links ────────────────────────────────────────────────────────────

/// The restaurant's social-media presence. Every platform is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub facebook:  Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub instagram: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub twitter:   Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub yelp:      Option<String>,
}

// ─── Restaurant info ─────────────────────────────────────────────────────────

/// The restaurant's public identity: name, address, contact details, hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
  pub id:           Id,
  pub name:         String,
  pub tagline:      String,
  pub description:  String,
  pub address:      String,
  pub city:         String,
  pub state:        String,
  pub zip:          String,
  pub country:      String,
  pub phone:        String,
  pub email:        String,
  pub hours:        WeeklyHours,
  pub social_links: SocialLinks,
}

/// Input to `upsert_restaurant_info`. The id is never caller-supplied.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurantInfo {
  #[validate(length(min = 1))]
  pub name:         String,
  #[validate(length(min = 1))]
  pub tagline:      String,
  #[validate(length(min = 1))]
  pub description:  String,
  #[validate(length(min = 1))]
  pub address:      String,
  #[validate(length(min = 1))]
  pub city:         String,
  #[validate(length(min = 1))]
  pub state:        String,
  #[validate(length(min = 1))]
  pub zip:          String,
  #[validate(length(min = 1))]
  pub country:      String,
  #[validate(length(min = 1))]
  pub phone:        String,
  #[validate(email)]
  pub email:        String,
  pub hours:        WeeklyHours,
  #[serde(default)]
  pub social_links: SocialLinks,
}

// ─── About section ───────────────────────────────────────────────────────────

/// The "our story" section: narrative paragraphs plus the chef's card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
  pub id:         Id,
  pub heading:    String,
  pub paragraph1: String,
  pub paragraph2: String,
  pub paragraph3: Option<String>,
  pub chef_name:  String,
  pub chef_title: String,
  pub chef_image: Option<String>,
}

/// Input to `upsert_about_section`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewAboutSection {
  #[validate(length(min = 1))]
  pub heading:    String,
  #[validate(length(min = 1))]
  pub paragraph1: String,
  #[validate(length(min = 1))]
  pub paragraph2: String,
  pub paragraph3: Option<String>,
  #[validate(length(min = 1))]
  pub chef_name:  String,
  #[validate(length(min = 1))]
  pub chef_title: String,
  pub chef_image: Option<String>,
}
