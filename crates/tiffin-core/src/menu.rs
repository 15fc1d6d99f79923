//! Menu types — categories and the items that belong to them.
//!
//! An item's `category_id` SHOULD reference an existing [`MenuCategory`], but
//! the store does not enforce referential integrity: deleting a category
//! leaves its items in place with a dangling reference, and readers filter
//! rather than fail.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::Id;

// ─── Categories ──────────────────────────────────────────────────────────────

/// A menu section, e.g. "Appetizers". `display_order` drives presentation
/// sort order only; it is not required to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategory {
  pub id:            Id,
  pub name:          String,
  pub description:   Option<String>,
  pub display_order: i32,
}

/// Input to `create_menu_category`. The id is always store-assigned.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuCategory {
  #[validate(length(min = 1))]
  pub name:          String,
  pub description:   Option<String>,
  pub display_order: i32,
}

/// Partial update for a category. `None` fields retain their prior values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuCategoryPatch {
  #[validate(length(min = 1))]
  pub name:          Option<String>,
  pub description:   Option<String>,
  pub display_order: Option<i32>,
}

impl MenuCategoryPatch {
  /// Shallow-merge the supplied fields onto `category`. The id never changes.
  pub fn apply(self, category: &mut MenuCategory) {
    if let Some(name) = self.name {
      category.name = name;
    }
    if let Some(description) = self.description {
      category.description = Some(description);
    }
    if let Some(display_order) = self.display_order {
      category.display_order = display_order;
    }
  }
}

// ─── Spice level ─────────────────────────────────────────────────────────────

/// Heat rating printed next to an item on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiceLevel {
  None,
  Mild,
  Medium,
  Hot,
  #[serde(rename = "Extra Hot")]
  ExtraHot,
}

// ─── Items ───────────────────────────────────────────────────────────────────

/// A single dish. `price` is a display string ("$16.99"), not a numeric
/// amount — the site never does arithmetic on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
  pub id:             Id,
  pub category_id:    Id,
  pub name:           String,
  pub description:    String,
  pub price:          String,
  pub image:          Option<String>,
  pub spice_level:    Option<SpiceLevel>,
  pub is_vegetarian:  bool,
  pub is_vegan:       bool,
  pub is_gluten_free: bool,
  pub display_order:  i32,
  pub featured:       bool,
}

/// Input to `create_menu_item`. Dietary flags and `featured` default to
/// `false` when omitted.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
  pub category_id:    Id,
  #[validate(length(min = 1))]
  pub name:           String,
  #[validate(length(min = 1))]
  pub description:    String,
  #[validate(length(min = 1))]
  pub price:          String,
  pub image:          Option<String>,
  pub spice_level:    Option<SpiceLevel>,
  #[serde(default)]
  pub is_vegetarian:  bool,
  #[serde(default)]
  pub is_vegan:       bool,
  #[serde(default)]
  pub is_gluten_free: bool,
  pub display_order:  i32,
  #[serde(default)]
  pub featured:       bool,
}

/// Partial update for an item. `None` fields retain their prior values.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemPatch {
  pub category_id:    Option<Id>,
  #[validate(length(min = 1))]
  pub name:           Option<String>,
  #[validate(length(min = 1))]
  pub description:    Option<String>,
  #[validate(length(min = 1))]
  pub price:          Option<String>,
  pub image:          Option<String>,
  pub spice_level:    Option<SpiceLevel>,
  pub is_vegetarian:  Option<bool>,
  pub is_vegan:       Option<bool>,
  pub is_gluten_free: Option<bool>,
  pub display_order:  Option<i32>,
  pub featured:       Option<bool>,
}

impl MenuItemPatch {
  /// Shallow-merge the supplied fields onto `item`. The id never changes.
  pub fn apply(self, item: &mut MenuItem) {
    if let Some(category_id) = self.category_id {
      item.category_id = category_id;
    }
    if let Some(name) = self.name {
      item.name = name;
    }
    if let Some(description) = self.description {
      item.description = description;
    }
    if let Some(price) = self.price {
      item.price = price;
    }
    if let Some(image) = self.image {
      item.image = Some(image);
    }
    if let Some(spice_level) = self.spice_level {
      item.spice_level = Some(spice_level);
    }
    if let Some(is_vegetarian) = self.is_vegetarian {
      item.is_vegetarian = is_vegetarian;
    }
    if let Some(is_vegan) = self.is_vegan {
      item.is_vegan = is_vegan;
    }
    if let Some(is_gluten_free) = self.is_gluten_free {
      item.is_gluten_free = is_gluten_free;
    }
    if let Some(display_order) = self.display_order {
      item.display_order = display_order;
    }
    if let Some(featured) = self.featured {
      item.featured = featured;
    }
  }
}
