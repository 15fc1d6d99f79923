//! The `RestaurantStore` trait.
//!
//! The trait is implemented by storage backends (currently
//! `tiffin-store-mem`). Higher layers (`tiffin-api`, `tiffin-server`) depend
//! on this abstraction, not on any concrete backend, so a database-backed
//! implementation can be swapped in without touching the handlers.
//!
//! Conventions shared by every implementation:
//!
//! - Absence is a normal outcome, not an error: lookups return `Ok(None)` and
//!   deletes return `Ok(false)` for unknown ids.
//! - `create_*` assigns the next unused id for that entity type; ids are
//!   monotonic and never reused, even after deletes.
//! - `update_*` shallow-merges the patch onto the existing record and never
//!   changes the id.
//! - The singleton upserts replace every field while keeping the fixed id.
//!
//! All methods return `Send` futures so the trait can be used in
//! multi-threaded async runtimes (e.g. tokio with `axum`).

use std::future::Future;

use crate::{
  Id,
  gallery::{GalleryImage, GalleryImagePatch, NewGalleryImage},
  menu::{
    MenuCategory, MenuCategoryPatch, MenuItem, MenuItemPatch, NewMenuCategory,
    NewMenuItem,
  },
  reservation::{NewReservation, Reservation, ReservationStatus},
  restaurant::{AboutSection, NewAboutSection, NewRestaurantInfo, RestaurantInfo},
  testimonial::{NewTestimonial, Testimonial, TestimonialPatch},
  user::{NewUser, User},
};

/// Abstraction over a Tiffin storage backend.
pub trait RestaurantStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Restaurant info (singleton) ───────────────────────────────────────

  /// Fetch the restaurant-info singleton. `None` until the first upsert.
  fn restaurant_info(
    &self,
  ) -> impl Future<Output = Result<Option<RestaurantInfo>, Self::Error>> + Send + '_;

  /// Create the singleton under the fixed id if absent, otherwise replace
  /// all of its fields.
  fn upsert_restaurant_info(
    &self,
    info: NewRestaurantInfo,
  ) -> impl Future<Output = Result<RestaurantInfo, Self::Error>> + Send + '_;

  // ── Menu categories ───────────────────────────────────────────────────

  /// All categories, ascending by `display_order` (ties in insertion order).
  fn list_menu_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<MenuCategory>, Self::Error>> + Send + '_;

  fn get_menu_category(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<MenuCategory>, Self::Error>> + Send + '_;

  fn create_menu_category(
    &self,
    category: NewMenuCategory,
  ) -> impl Future<Output = Result<MenuCategory, Self::Error>> + Send + '_;

  fn update_menu_category(
    &self,
    id: Id,
    patch: MenuCategoryPatch,
  ) -> impl Future<Output = Result<Option<MenuCategory>, Self::Error>> + Send + '_;

  /// Remove a category. Items referencing it are deliberately left in place
  /// with a dangling `category_id`; readers filter them by category instead
  /// of failing.
  fn delete_menu_category(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Menu items ────────────────────────────────────────────────────────

  /// All items, ascending by `display_order` (ties in insertion order).
  fn list_menu_items(
    &self,
  ) -> impl Future<Output = Result<Vec<MenuItem>, Self::Error>> + Send + '_;

  /// Items in one category, ascending by `display_order`. An unknown or
  /// deleted category id yields an empty list.
  fn menu_items_by_category(
    &self,
    category_id: Id,
  ) -> impl Future<Output = Result<Vec<MenuItem>, Self::Error>> + Send + '_;

  /// Items flagged `featured`, ascending by `display_order`.
  fn featured_menu_items(
    &self,
  ) -> impl Future<Output = Result<Vec<MenuItem>, Self::Error>> + Send + '_;

  fn get_menu_item(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<MenuItem>, Self::Error>> + Send + '_;

  fn create_menu_item(
    &self,
    item: NewMenuItem,
  ) -> impl Future<Output = Result<MenuItem, Self::Error>> + Send + '_;

  fn update_menu_item(
    &self,
    id: Id,
    patch: MenuItemPatch,
  ) -> impl Future<Output = Result<Option<MenuItem>, Self::Error>> + Send + '_;

  fn delete_menu_item(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── About section (singleton) ─────────────────────────────────────────

  fn about_section(
    &self,
  ) -> impl Future<Output = Result<Option<AboutSection>, Self::Error>> + Send + '_;

  fn upsert_about_section(
    &self,
    about: NewAboutSection,
  ) -> impl Future<Output = Result<AboutSection, Self::Error>> + Send + '_;

  // ── Gallery images ────────────────────────────────────────────────────

  /// All images, ascending by `display_order` (ties in insertion order).
  fn list_gallery_images(
    &self,
  ) -> impl Future<Output = Result<Vec<GalleryImage>, Self::Error>> + Send + '_;

  /// Images with an exactly matching free-text category tag, ascending by
  /// `display_order`.
  fn gallery_images_by_category<'a>(
    &'a self,
    category: &'a str,
  ) -> impl Future<Output = Result<Vec<GalleryImage>, Self::Error>> + Send + 'a;

  fn get_gallery_image(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<GalleryImage>, Self::Error>> + Send + '_;

  fn create_gallery_image(
    &self,
    image: NewGalleryImage,
  ) -> impl Future<Output = Result<GalleryImage, Self::Error>> + Send + '_;

  fn update_gallery_image(
    &self,
    id: Id,
    patch: GalleryImagePatch,
  ) -> impl Future<Output = Result<Option<GalleryImage>, Self::Error>> + Send + '_;

  fn delete_gallery_image(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Testimonials ──────────────────────────────────────────────────────

  /// All testimonials, in insertion order.
  fn list_testimonials(
    &self,
  ) -> impl Future<Output = Result<Vec<Testimonial>, Self::Error>> + Send + '_;

  fn get_testimonial(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Testimonial>, Self::Error>> + Send + '_;

  fn create_testimonial(
    &self,
    testimonial: NewTestimonial,
  ) -> impl Future<Output = Result<Testimonial, Self::Error>> + Send + '_;

  fn update_testimonial(
    &self,
    id: Id,
    patch: TestimonialPatch,
  ) -> impl Future<Output = Result<Option<Testimonial>, Self::Error>> + Send + '_;

  fn delete_testimonial(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Reservations ──────────────────────────────────────────────────────

  /// All reservations, newest first by `created_at`.
  fn list_reservations(
    &self,
  ) -> impl Future<Output = Result<Vec<Reservation>, Self::Error>> + Send + '_;

  fn get_reservation(
    &self,
    id: Id,
  ) -> impl Future<Output = Result<Option<Reservation>, Self::Error>> + Send + '_;

  /// Store a new reservation with `status` forced to
  /// [`ReservationStatus::Pending`] and a store-assigned `created_at`.
  fn create_reservation(
    &self,
    reservation: NewReservation,
  ) -> impl Future<Output = Result<Reservation, Self::Error>> + Send + '_;

  /// Set the status of an existing reservation. Any of the three statuses
  /// may be set at any time; `None` if the id is unknown.
  fn set_reservation_status(
    &self,
    id: Id,
    status: ReservationStatus,
  ) -> impl Future<Output = Result<Option<Reservation>, Self::Error>> + Send + '_;

  // ── Users ─────────────────────────────────────────────────────────────

  fn user_by_username<'a>(
    &'a self,
    username: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// Create a staff account. The uniqueness check on `username` and the
  /// insert happen as one atomic step inside the store.
  fn create_user(
    &self,
    user: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;
}
