//! Startup seed data.
//!
//! The store is volatile, so every boot recreates the staff account and the
//! Spice Haven sample content: restaurant info, the about section, five menu
//! categories, six dishes, eight gallery photos, and three testimonials.
//! Ids are store-assigned, so menu items reference the ids returned for the
//! categories rather than hard-coding them.

use tiffin_core::{
  gallery::NewGalleryImage,
  menu::{NewMenuCategory, NewMenuItem, SpiceLevel},
  restaurant::{NewAboutSection, NewRestaurantInfo, SocialLinks, WeeklyHours},
  store::RestaurantStore,
  testimonial::NewTestimonial,
  user::NewUser,
};

/// Populate `store` with the staff account and the default site content.
pub async fn seed<S>(
  store: &S,
  admin_username: &str,
  admin_password_hash: &str,
) -> Result<(), S::Error>
where
  S: RestaurantStore,
{
  store
    .create_user(NewUser {
      username: admin_username.to_string(),
      password: admin_password_hash.to_string(),
      role:     "admin".to_string(),
    })
    .await?;

  store
    .upsert_restaurant_info(NewRestaurantInfo {
      name:         "Spice Haven".into(),
      tagline:      "Authentic Indian Cuisine".into(),
      description:  "Experience the rich flavors and aromatic spices of \
                     traditional Indian cooking in a modern, elegant setting."
        .into(),
      address:      "123 Spice Avenue".into(),
      city:         "Vancouver".into(),
      state:        "BC".into(),
      zip:          "V6B 1A9".into(),
      country:      "Canada".into(),
      phone:        "(604) 123-4567".into(),
      email:        "info@spicehaven.ca".into(),
      hours:        WeeklyHours {
        monday:    "11:30 AM - 9:30 PM".into(),
        tuesday:   "11:30 AM - 9:30 PM".into(),
        wednesday: "11:30 AM - 9:30 PM".into(),
        thursday:  "11:30 AM - 9:30 PM".into(),
        friday:    "11:30 AM - 10:30 PM".into(),
        saturday:  "11:30 AM - 10:30 PM".into(),
        sunday:    "12:00 PM - 9:00 PM".into(),
      },
      social_links: SocialLinks {
        facebook:  Some("https://facebook.com/spicehaven".into()),
        instagram: Some("https://instagram.com/spicehaven".into()),
        twitter:   Some("https://twitter.com/spicehaven".into()),
        yelp:      Some("https://yelp.com/spicehaven".into()),
      },
    })
    .await?;

  store
    .upsert_about_section(NewAboutSection {
      heading:    "Our Story".into(),
      paragraph1: "At Spice Haven, we bring the authentic flavors of India \
                   to your table. Established in 2005 by Chef Raj Sharma, \
                   our restaurant combines traditional cooking techniques \
                   with locally sourced ingredients to create dishes that \
                   honor India's rich culinary heritage."
        .into(),
      paragraph2: "Our recipes have been passed down through generations, \
                   preserving the authentic tastes and aromas that make \
                   Indian cuisine so beloved around the world. Each dish is \
                   carefully prepared with hand-ground spices and fresh \
                   ingredients."
        .into(),
      paragraph3: Some(
        "Whether you're familiar with Indian cuisine or trying it for the \
         first time, our friendly staff will guide you through our menu to \
         ensure a memorable dining experience."
          .into(),
      ),
      chef_name:  "Chef Raj Sharma".into(),
      chef_title: "Executive Chef & Founder".into(),
      chef_image: Some(
        "https://images.unsplash.com/photo-1566554273541-37a9ca77b91f?w=128"
          .into(),
      ),
    })
    .await?;

  let category = |name: &str, description: &str, display_order: i32| {
    NewMenuCategory {
      name: name.to_string(),
      description: Some(description.to_string()),
      display_order,
    }
  };
  let appetizers = store
    .create_menu_category(category(
      "Appetizers",
      "Start your meal with these delicious starters",
      1,
    ))
    .await?;
  let mains = store
    .create_menu_category(category(
      "Main Course",
      "Signature dishes full of flavor and aroma",
      2,
    ))
    .await?;
  let breads = store
    .create_menu_category(category(
      "Breads",
      "Traditional Indian breads, baked fresh",
      3,
    ))
    .await?;
  let desserts = store
    .create_menu_category(category("Desserts", "Sweet treats to end your meal", 4))
    .await?;
  let beverages = store
    .create_menu_category(category(
      "Beverages",
      "Refreshing drinks and traditional favorites",
      5,
    ))
    .await?;

  let dishes = [
    NewMenuItem {
      category_id:    appetizers.id,
      name:           "Vegetable Samosas".into(),
      description:    "Crispy pastry filled with spiced potatoes, peas, and \
                       aromatic spices. Served with tamarind chutney."
        .into(),
      price:          "$7.99".into(),
      image:          Some(
        "https://images.unsplash.com/photo-1567188040759-fb8a883dc6d8?w=500"
          .into(),
      ),
      spice_level:    Some(SpiceLevel::Medium),
      is_vegetarian:  true,
      is_vegan:       false,
      is_gluten_free: false,
      display_order:  1,
      featured:       true,
    },
    NewMenuItem {
      category_id:    mains.id,
      name:           "Butter Chicken".into(),
      description:    "Tender chicken cooked in a rich tomato and butter \
                       sauce with aromatic spices. Served with basmati rice."
        .into(),
      price:          "$16.99".into(),
      image:          Some(
        "https://images.unsplash.com/photo-1585937421612-70a008356a82?w=500"
          .into(),
      ),
      spice_level:    Some(SpiceLevel::Mild),
      is_vegetarian:  false,
      is_vegan:       false,
      is_gluten_free: true,
      display_order:  1,
      featured:       true,
    },
    NewMenuItem {
      category_id:    mains.id,
      name:           "Palak Paneer".into(),
      description:    "Fresh cottage cheese cubes in a creamy spinach sauce \
                       with aromatic spices. Served with basmati rice."
        .into(),
      price:          "$14.99".into(),
      image:          Some(
        "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=500"
          .into(),
      ),
      spice_level:    Some(SpiceLevel::Mild),
      is_vegetarian:  true,
      is_vegan:       false,
      is_gluten_free: true,
      display_order:  2,
      featured:       true,
    },
    NewMenuItem {
      category_id:    breads.id,
      name:           "Garlic Naan".into(),
      description:    "Traditional leavened flatbread baked in a tandoor \
                       oven, topped with garlic and fresh cilantro."
        .into(),
      price:          "$3.99".into(),
      image:          Some(
        "https://images.unsplash.com/photo-1605653411309-11cc3c87a86b?w=500"
          .into(),
      ),
      spice_level:    Some(SpiceLevel::None),
      is_vegetarian:  true,
      is_vegan:       false,
      is_gluten_free: false,
      display_order:  1,
      featured:       true,
    },
    NewMenuItem {
      category_id:    desserts.id,
      name:           "Gulab Jamun".into(),
      description:    "Soft milk solids dumplings soaked in rose-flavored \
                       sugar syrup. Served warm with a touch of cardamom."
        .into(),
      price:          "$5.99".into(),
      image:          Some(
        "https://images.unsplash.com/photo-1593250186288-c82cb5d6a1a0?w=500"
          .into(),
      ),
      spice_level:    Some(SpiceLevel::None),
      is_vegetarian:  true,
      is_vegan:       false,
      is_gluten_free: false,
      display_order:  1,
      featured:       true,
    },
    NewMenuItem {
      category_id:    beverages.id,
      name:           "Masala Chai".into(),
      description:    "Traditional Indian spiced tea prepared with a blend \
                       of aromatic spices, milk, and sweetener."
        .into(),
      price:          "$3.49".into(),
      image:          Some(
        "https://images.unsplash.com/photo-1572097662444-9c6a7d8d0544?w=500"
          .into(),
      ),
      spice_level:    Some(SpiceLevel::None),
      is_vegetarian:  true,
      is_vegan:       false,
      is_gluten_free: true,
      display_order:  1,
      featured:       true,
    },
  ];
  for dish in dishes {
    store.create_menu_item(dish).await?;
  }

  let photos = [
    (
      "Restaurant Interior",
      "https://images.unsplash.com/photo-1505253758473-96b7015fcd40?w=1000",
      "Restaurant interior with elegant seating",
      "ambience",
      1,
    ),
    (
      "Restaurant Ambience",
      "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?w=1000",
      "Warm restaurant ambience with mood lighting",
      "ambience",
      2,
    ),
    (
      "Butter Chicken",
      "https://images.unsplash.com/photo-1585937421612-70a008356a82?w=1000",
      "Creamy butter chicken in a bowl",
      "food",
      1,
    ),
    (
      "Palak Paneer",
      "https://images.unsplash.com/photo-1565557623262-b51c2513a641?w=1000",
      "Palak paneer with cheese cubes",
      "food",
      2,
    ),
    (
      "Restaurant Seating",
      "https://images.unsplash.com/photo-1414235077428-338989a2e8c0?w=1000",
      "Elegant restaurant seating arrangement",
      "ambience",
      3,
    ),
    (
      "Tandoori Dishes",
      "https://images.unsplash.com/photo-1506368249639-73a05d6f6488?w=1000",
      "Assortment of tandoori dishes",
      "food",
      3,
    ),
    (
      "Dessert Platter",
      "https://images.unsplash.com/photo-1532634922-8fe0b757fb13?w=1000",
      "Traditional Indian desserts on a platter",
      "food",
      4,
    ),
    (
      "Restaurant Bar",
      "https://images.unsplash.com/photo-1555396273-367ea4eb4db5?w=1000",
      "Well-stocked bar at the restaurant",
      "ambience",
      4,
    ),
  ];
  for (title, image, alt_text, tag, display_order) in photos {
    store
      .create_gallery_image(NewGalleryImage {
        title: title.to_string(),
        image: image.to_string(),
        alt_text: alt_text.to_string(),
        category: tag.to_string(),
        display_order,
      })
      .await?;
  }

  let reviews = [
    (
      "Sarah Johnson",
      "The butter chicken was absolutely divine! Perfectly spiced and the \
       flavors were authentic. The service was excellent and the ambiance \
       was perfect for our anniversary dinner.",
      5.0,
      "March 15, 2023",
      "https://randomuser.me/api/portraits/women/45.jpg",
    ),
    (
      "David Chen",
      "As a vegetarian, I was impressed by the range of options. The palak \
       paneer was creamy and flavorful, and the garlic naan was the perfect \
       accompaniment. Will definitely be back!",
      5.0,
      "February 8, 2023",
      "https://randomuser.me/api/portraits/men/32.jpg",
    ),
    (
      "Maria Rodriguez",
      "First time trying Indian cuisine and I couldn't have picked a better \
       place! The staff was patient in explaining the menu and recommending \
       dishes based on my preferences. A memorable experience!",
      4.5,
      "January 22, 2023",
      "https://randomuser.me/api/portraits/women/68.jpg",
    ),
  ];
  for (name, text, rating, date, image) in reviews {
    store
      .create_testimonial(NewTestimonial {
        name: name.to_string(),
        text: text.to_string(),
        rating,
        date: date.to_string(),
        image: Some(image.to_string()),
      })
      .await?;
  }

  tracing::info!("seeded default site content");
  Ok(())
}

#[cfg(test)]
mod tests {
  use tiffin_store_mem::MemStore;

  use super::*;

  #[tokio::test]
  async fn seed_populates_every_collection() {
    let store = MemStore::new();
    seed(&store, "admin", "$argon2id$stub").await.unwrap();

    assert_eq!(store.list_menu_categories().await.unwrap().len(), 5);
    assert_eq!(store.list_menu_items().await.unwrap().len(), 6);
    assert_eq!(store.list_gallery_images().await.unwrap().len(), 8);
    assert_eq!(store.list_testimonials().await.unwrap().len(), 3);

    let info = store.restaurant_info().await.unwrap().unwrap();
    assert_eq!(info.name, "Spice Haven");
    let about = store.about_section().await.unwrap().unwrap();
    assert_eq!(about.heading, "Our Story");

    let admin = store.user_by_username("admin").await.unwrap().unwrap();
    assert_eq!(admin.role, "admin");
  }

  #[tokio::test]
  async fn seeded_items_reference_live_categories() {
    let store = MemStore::new();
    seed(&store, "admin", "$argon2id$stub").await.unwrap();

    let categories = store.list_menu_categories().await.unwrap();
    for item in store.list_menu_items().await.unwrap() {
      assert!(
        categories.iter().any(|c| c.id == item.category_id),
        "dangling category for {}",
        item.name
      );
    }
  }

  #[tokio::test]
  async fn seeding_twice_keeps_singletons_single() {
    let store = MemStore::new();
    seed(&store, "admin", "$argon2id$stub").await.unwrap();

    // A second run duplicates list entities but must not duplicate the
    // fixed-id rows. The admin user collides instead.
    assert!(seed(&store, "admin", "$argon2id$stub").await.is_err());
    let info = store.restaurant_info().await.unwrap().unwrap();
    assert_eq!(info.id, 1);
  }
}
