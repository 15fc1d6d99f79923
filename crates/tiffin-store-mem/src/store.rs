//! [`MemStore`] — the map-backed implementation of [`RestaurantStore`].

use std::{collections::BTreeMap, sync::Arc};

use chrono::Utc;
use tokio::sync::RwLock;

use tiffin_core::{
  Id,
  gallery::{GalleryImage, GalleryImagePatch, NewGalleryImage},
  menu::{
    MenuCategory, MenuCategoryPatch, MenuItem, MenuItemPatch, NewMenuCategory,
    NewMenuItem,
  },
  reservation::{NewReservation, Reservation, ReservationStatus},
  restaurant::{
    AboutSection, NewAboutSection, NewRestaurantInfo, RestaurantInfo,
    SINGLETON_ID,
  },
  store::RestaurantStore,
  testimonial::{NewTestimonial, Testimonial, TestimonialPatch},
  user::{NewUser, User},
};

use crate::{Error, Result};

// ─── Id generation ───────────────────────────────────────────────────────────

/// Hands out ids from 1, strictly increasing. Deletion never returns an id
/// to the pool.
struct IdCounter(Id);

impl IdCounter {
  fn next(&mut self) -> Id {
    let id = self.0;
    self.0 += 1;
    id
  }
}

impl Default for IdCounter {
  fn default() -> Self {
    Self(1)
  }
}

// ─── Inner state ─────────────────────────────────────────────────────────────

/// Everything the store holds, behind one lock. Maps are keyed by id; since
/// ids are monotonic, `BTreeMap` iteration order is insertion order.
#[derive(Default)]
struct Inner {
  restaurant_info: Option<RestaurantInfo>,
  about_section:   Option<AboutSection>,
  categories:      BTreeMap<Id, MenuCategory>,
  items:           BTreeMap<Id, MenuItem>,
  gallery:         BTreeMap<Id, GalleryImage>,
  testimonials:    BTreeMap<Id, Testimonial>,
  reservations:    BTreeMap<Id, Reservation>,
  users:           BTreeMap<Id, User>,

  category_ids:    IdCounter,
  item_ids:        IdCounter,
  gallery_ids:     IdCounter,
  testimonial_ids: IdCounter,
  reservation_ids: IdCounter,
  user_ids:        IdCounter,
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A restaurant store held entirely in process memory.
///
/// Cloning is cheap — the inner state is reference-counted. One `RwLock`
/// guards all entity maps, which serialises every check-then-write sequence
/// (id assignment, singleton upsert, username uniqueness).
#[derive(Clone, Default)]
pub struct MemStore {
  inner: Arc<RwLock<Inner>>,
}

impl MemStore {
  /// An empty store. Seed data is the server's concern, applied through the
  /// trait at startup.
  pub fn new() -> Self {
    Self::default()
  }
}

/// Stable sort ascending by a display-order key; ties keep map (= insertion)
/// order.
fn by_display_order<T>(mut rows: Vec<T>, order: impl Fn(&T) -> i32) -> Vec<T> {
  rows.sort_by_key(|row| order(row));
  rows
}

impl RestaurantStore for MemStore {
  type Error = Error;

  // ── Restaurant info (singleton) ───────────────────────────────────────────

  async fn restaurant_info(&self) -> Result<Option<RestaurantInfo>> {
    Ok(self.inner.read().await.restaurant_info.clone())
  }

  async fn upsert_restaurant_info(
    &self,
    info: NewRestaurantInfo,
  ) -> Result<RestaurantInfo> {
    let mut inner = self.inner.write().await;
    // Full replace; the id stays fixed whether or not the row existed.
    let record = RestaurantInfo {
      id:           SINGLETON_ID,
      name:         info.name,
      tagline:      info.tagline,
      description:  info.description,
      address:      info.address,
      city:         info.city,
      state:        info.state,
      zip:          info.zip,
      country:      info.country,
      phone:        info.phone,
      email:        info.email,
      hours:        info.hours,
      social_links: info.social_links,
    };
    inner.restaurant_info = Some(record.clone());
    Ok(record)
  }

  // ── Menu categories ───────────────────────────────────────────────────────

  async fn list_menu_categories(&self) -> Result<Vec<MenuCategory>> {
    let inner = self.inner.read().await;
    let rows = inner.categories.values().cloned().collect();
    Ok(by_display_order(rows, |c: &MenuCategory| c.display_order))
  }

  async fn get_menu_category(&self, id: Id) -> Result<Option<MenuCategory>> {
    Ok(self.inner.read().await.categories.get(&id).cloned())
  }

  async fn create_menu_category(
    &self,
    category: NewMenuCategory,
  ) -> Result<MenuCategory> {
    let mut inner = self.inner.write().await;
    let id = inner.category_ids.next();
    let record = MenuCategory {
      id,
      name:          category.name,
      description:   category.description,
      display_order: category.display_order,
    };
    inner.categories.insert(id, record.clone());
    Ok(record)
  }

  async fn update_menu_category(
    &self,
    id: Id,
    patch: MenuCategoryPatch,
  ) -> Result<Option<MenuCategory>> {
    let mut inner = self.inner.write().await;
    let Some(category) = inner.categories.get_mut(&id) else {
      return Ok(None);
    };
    patch.apply(category);
    Ok(Some(category.clone()))
  }

  async fn delete_menu_category(&self, id: Id) -> Result<bool> {
    // No cascade: items keep their (now dangling) category_id and readers
    // filter them by category.
    Ok(self.inner.write().await.categories.remove(&id).is_some())
  }

  // ── Menu items ────────────────────────────────────────────────────────────

  async fn list_menu_items(&self) -> Result<Vec<MenuItem>> {
    let inner = self.inner.read().await;
    let rows = inner.items.values().cloned().collect();
    Ok(by_display_order(rows, |i: &MenuItem| i.display_order))
  }

  async fn menu_items_by_category(&self, category_id: Id) -> Result<Vec<MenuItem>> {
    let inner = self.inner.read().await;
    let rows = inner
      .items
      .values()
      .filter(|item| item.category_id == category_id)
      .cloned()
      .collect();
    Ok(by_display_order(rows, |i: &MenuItem| i.display_order))
  }

  async fn featured_menu_items(&self) -> Result<Vec<MenuItem>> {
    let inner = self.inner.read().await;
    let rows = inner
      .items
      .values()
      .filter(|item| item.featured)
      .cloned()
      .collect();
    Ok(by_display_order(rows, |i: &MenuItem| i.display_order))
  }

  async fn get_menu_item(&self, id: Id) -> Result<Option<MenuItem>> {
    Ok(self.inner.read().await.items.get(&id).cloned())
  }

  async fn create_menu_item(&self, item: NewMenuItem) -> Result<MenuItem> {
    let mut inner = self.inner.write().await;
    let id = inner.item_ids.next();
    // category_id is not checked against the categories map; a dangling
    // reference is tolerated by every reader.
    let record = MenuItem {
      id,
      category_id:    item.category_id,
      name:           item.name,
      description:    item.description,
      price:          item.price,
      image:          item.image,
      spice_level:    item.spice_level,
      is_vegetarian:  item.is_vegetarian,
      is_vegan:       item.is_vegan,
      is_gluten_free: item.is_gluten_free,
      display_order:  item.display_order,
      featured:       item.featured,
    };
    inner.items.insert(id, record.clone());
    Ok(record)
  }

  async fn update_menu_item(
    &self,
    id: Id,
    patch: MenuItemPatch,
  ) -> Result<Option<MenuItem>> {
    let mut inner = self.inner.write().await;
    let Some(item) = inner.items.get_mut(&id) else {
      return Ok(None);
    };
    patch.apply(item);
    Ok(Some(item.clone()))
  }

  async fn delete_menu_item(&self, id: Id) -> Result<bool> {
    Ok(self.inner.write().await.items.remove(&id).is_some())
  }

  // ── About section (singleton) ─────────────────────────────────────────────

  async fn about_section(&self) -> Result<Option<AboutSection>> {
    Ok(self.inner.read().await.about_section.clone())
  }

  async fn upsert_about_section(
    &self,
    about: NewAboutSection,
  ) -> Result<AboutSection> {
    let mut inner = self.inner.write().await;
    let record = AboutSection {
      id:         SINGLETON_ID,
      heading:    about.heading,
      paragraph1: about.paragraph1,
      paragraph2: about.paragraph2,
      paragraph3: about.paragraph3,
      chef_name:  about.chef_name,
      chef_title: about.chef_title,
      chef_image: about.chef_image,
    };
    inner.about_section = Some(record.clone());
    Ok(record)
  }

  // ── Gallery images ────────────────────────────────────────────────────────

  async fn list_gallery_images(&self) -> Result<Vec<GalleryImage>> {
    let inner = self.inner.read().await;
    let rows = inner.gallery.values().cloned().collect();
    Ok(by_display_order(rows, |g: &GalleryImage| g.display_order))
  }

  async fn gallery_images_by_category(
    &self,
    category: &str,
  ) -> Result<Vec<GalleryImage>> {
    let inner = self.inner.read().await;
    let rows = inner
      .gallery
      .values()
      .filter(|img| img.category == category)
      .cloned()
      .collect();
    Ok(by_display_order(rows, |g: &GalleryImage| g.display_order))
  }

  async fn get_gallery_image(&self, id: Id) -> Result<Option<GalleryImage>> {
    Ok(self.inner.read().await.gallery.get(&id).cloned())
  }

  async fn create_gallery_image(
    &self,
    image: NewGalleryImage,
  ) -> Result<GalleryImage> {
    let mut inner = self.inner.write().await;
    let id = inner.gallery_ids.next();
    let record = GalleryImage {
      id,
      title:         image.title,
      image:         image.image,
      alt_text:      image.alt_text,
      category:      image.category,
      display_order: image.display_order,
    };
    inner.gallery.insert(id, record.clone());
    Ok(record)
  }

  async fn update_gallery_image(
    &self,
    id: Id,
    patch: GalleryImagePatch,
  ) -> Result<Option<GalleryImage>> {
    let mut inner = self.inner.write().await;
    let Some(image) = inner.gallery.get_mut(&id) else {
      return Ok(None);
    };
    patch.apply(image);
    Ok(Some(image.clone()))
  }

  async fn delete_gallery_image(&self, id: Id) -> Result<bool> {
    Ok(self.inner.write().await.gallery.remove(&id).is_some())
  }

  // ── Testimonials ──────────────────────────────────────────────────────────

  async fn list_testimonials(&self) -> Result<Vec<Testimonial>> {
    Ok(self.inner.read().await.testimonials.values().cloned().collect())
  }

  async fn get_testimonial(&self, id: Id) -> Result<Option<Testimonial>> {
    Ok(self.inner.read().await.testimonials.get(&id).cloned())
  }

  async fn create_testimonial(
    &self,
    testimonial: NewTestimonial,
  ) -> Result<Testimonial> {
    let mut inner = self.inner.write().await;
    let id = inner.testimonial_ids.next();
    let record = Testimonial {
      id,
      name:   testimonial.name,
      text:   testimonial.text,
      rating: testimonial.rating,
      date:   testimonial.date,
      image:  testimonial.image,
    };
    inner.testimonials.insert(id, record.clone());
    Ok(record)
  }

  async fn update_testimonial(
    &self,
    id: Id,
    patch: TestimonialPatch,
  ) -> Result<Option<Testimonial>> {
    let mut inner = self.inner.write().await;
    let Some(testimonial) = inner.testimonials.get_mut(&id) else {
      return Ok(None);
    };
    patch.apply(testimonial);
    Ok(Some(testimonial.clone()))
  }

  async fn delete_testimonial(&self, id: Id) -> Result<bool> {
    Ok(self.inner.write().await.testimonials.remove(&id).is_some())
  }

  // ── Reservations ──────────────────────────────────────────────────────────

  async fn list_reservations(&self) -> Result<Vec<Reservation>> {
    let inner = self.inner.read().await;
    let mut rows: Vec<Reservation> =
      inner.reservations.values().cloned().collect();
    // Newest first; ids break created_at ties deterministically.
    rows.sort_by(|a, b| {
      b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id))
    });
    Ok(rows)
  }

  async fn get_reservation(&self, id: Id) -> Result<Option<Reservation>> {
    Ok(self.inner.read().await.reservations.get(&id).cloned())
  }

  async fn create_reservation(
    &self,
    reservation: NewReservation,
  ) -> Result<Reservation> {
    let mut inner = self.inner.write().await;
    let id = inner.reservation_ids.next();
    // status and created_at are always store-assigned, whatever the caller
    // sent over the wire.
    let record = Reservation {
      id,
      name:       reservation.name,
      email:      reservation.email,
      phone:      reservation.phone,
      date:       reservation.date,
      time:       reservation.time,
      guests:     reservation.guests,
      occasion:   reservation.occasion,
      message:    reservation.message,
      status:     ReservationStatus::Pending,
      created_at: Utc::now(),
    };
    inner.reservations.insert(id, record.clone());
    Ok(record)
  }

  async fn set_reservation_status(
    &self,
    id: Id,
    status: ReservationStatus,
  ) -> Result<Option<Reservation>> {
    let mut inner = self.inner.write().await;
    let Some(reservation) = inner.reservations.get_mut(&id) else {
      return Ok(None);
    };
    reservation.status = status;
    Ok(Some(reservation.clone()))
  }

  // ── Users ─────────────────────────────────────────────────────────────────

  async fn user_by_username(&self, username: &str) -> Result<Option<User>> {
    let inner = self.inner.read().await;
    Ok(
      inner
        .users
        .values()
        .find(|user| user.username == username)
        .cloned(),
    )
  }

  async fn create_user(&self, user: NewUser) -> Result<User> {
    let mut inner = self.inner.write().await;
    // Check-then-insert under the same write guard, so two concurrent
    // creates for one username cannot both succeed.
    if inner.users.values().any(|u| u.username == user.username) {
      return Err(Error::UsernameTaken(user.username));
    }
    let id = inner.user_ids.next();
    let record = User {
      id,
      username: user.username,
      password: user.password,
      role:     user.role,
    };
    inner.users.insert(id, record.clone());
    Ok(record)
  }
}
