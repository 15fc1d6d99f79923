use std::sync::Arc;

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};
use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use rand_core::OsRng;
use serde_json::{Value, json};
use tiffin_core::{store::RestaurantStore as _, user::NewUser};
use tiffin_store_mem::MemStore;
use tower::ServiceExt as _;

use super::*;

async fn make_state(password: &str) -> AppState<MemStore> {
  let store = MemStore::new();
  let salt = SaltString::generate(&mut OsRng);
  let hash = Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .unwrap()
    .to_string();
  store
    .create_user(NewUser {
      username: "admin".into(),
      password: hash,
      role:     "admin".into(),
    })
    .await
    .unwrap();

  AppState {
    store:    Arc::new(store),
    sessions: Arc::new(SessionStore::new()),
  }
}

async fn oneshot_raw(
  state:   AppState<MemStore>,
  method:  &str,
  uri:     &str,
  headers: Vec<(header::HeaderName, &str)>,
  body:    Value,
) -> axum::response::Response {
  let mut builder = Request::builder().method(method).uri(uri);
  for (k, v) in headers {
    builder = builder.header(k, v);
  }
  let body = if body.is_null() {
    Body::empty()
  } else {
    builder = builder.header(header::CONTENT_TYPE, "application/json");
    Body::from(body.to_string())
  };
  let req = builder.body(body).unwrap();
  api_router(state).oneshot(req).await.unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

/// Log in as the seeded admin and return the session cookie pair
/// (`tiffin_session=<token>`).
async fn login_cookie(state: &AppState<MemStore>) -> String {
  let resp = oneshot_raw(
    state.clone(),
    "POST",
    "/login",
    vec![],
    json!({ "username": "admin", "password": "secret" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let set_cookie = resp
    .headers()
    .get(header::SET_COOKIE)
    .unwrap()
    .to_str()
    .unwrap();
  set_cookie.split(';').next().unwrap().to_string()
}

// ── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn login_sets_cookie_and_returns_user() {
  let state = make_state("secret").await;
  let resp = oneshot_raw(
    state,
    "POST",
    "/login",
    vec![],
    json!({ "username": "admin", "password": "secret" }),
  )
  .await;

  assert_eq!(resp.status(), StatusCode::OK);
  let cookie = resp
    .headers()
    .get(header::SET_COOKIE)
    .unwrap()
    .to_str()
    .unwrap()
    .to_string();
  assert!(cookie.starts_with("tiffin_session="), "cookie: {cookie}");
  assert!(cookie.contains("HttpOnly"), "cookie: {cookie}");

  let body = body_json(resp).await;
  assert_eq!(body["message"], "Login successful");
  assert_eq!(body["user"]["username"], "admin");
  assert!(body["user"].get("password").is_none());
}

#[tokio::test]
async fn login_wrong_password_is_401() {
  let state = make_state("secret").await;
  let resp = oneshot_raw(
    state,
    "POST",
    "/login",
    vec![],
    json!({ "username": "admin", "password": "wrong" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(body_json(resp).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_unknown_user_matches_wrong_password() {
  let state = make_state("secret").await;
  let resp = oneshot_raw(
    state,
    "POST",
    "/login",
    vec![],
    json!({ "username": "nobody", "password": "secret" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(body_json(resp).await["message"], "Invalid credentials");
}

#[tokio::test]
async fn login_empty_fields_is_400() {
  let state = make_state("secret").await;
  let resp = oneshot_raw(
    state,
    "POST",
    "/login",
    vec![],
    json!({ "username": "", "password": "" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(
    body_json(resp).await["message"],
    "Username and password are required"
  );
}

#[tokio::test]
async fn auth_check_reflects_session_state() {
  let state = make_state("secret").await;

  let resp =
    oneshot_raw(state.clone(), "GET", "/auth/check", vec![], Value::Null).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["authenticated"], false);
  assert!(body.get("user").is_none());

  let cookie = login_cookie(&state).await;
  let resp = oneshot_raw(
    state,
    "GET",
    "/auth/check",
    vec![(header::COOKIE, cookie.as_str())],
    Value::Null,
  )
  .await;
  let body = body_json(resp).await;
  assert_eq!(body["authenticated"], true);
  assert_eq!(body["user"]["username"], "admin");
}

#[tokio::test]
async fn logout_revokes_the_session() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;

  let resp = oneshot_raw(
    state.clone(),
    "POST",
    "/logout",
    vec![(header::COOKIE, cookie.as_str())],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["message"], "Logged out successfully");

  // The old token no longer opens the gate.
  let resp = oneshot_raw(
    state,
    "GET",
    "/reservations",
    vec![(header::COOKIE, cookie.as_str())],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn gated_write_without_session_is_401() {
  let state = make_state("secret").await;
  let resp = oneshot_raw(
    state,
    "POST",
    "/menu-categories",
    vec![],
    json!({ "name": "Starters", "displayOrder": 1 }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  assert_eq!(body_json(resp).await["message"], "Unauthorized");
}

// ── Singletons ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn restaurant_info_404_until_first_upsert() {
  let state = make_state("secret").await;

  let resp =
    oneshot_raw(state.clone(), "GET", "/restaurant-info", vec![], Value::Null)
      .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(
    body_json(resp).await["message"],
    "Restaurant info not found"
  );

  let cookie = login_cookie(&state).await;
  let payload = json!({
    "name": "Spice Haven",
    "tagline": "Fine Indian dining",
    "description": "Family recipes from Punjab, served since 1987.",
    "address": "123 Curry Lane",
    "city": "Portland",
    "state": "OR",
    "zip": "97201",
    "country": "USA",
    "phone": "(503) 555-0142",
    "email": "hello@spicehaven.example",
    "hours": {
      "monday": "11:30 AM - 9:30 PM", "tuesday": "11:30 AM - 9:30 PM",
      "wednesday": "11:30 AM - 9:30 PM", "thursday": "11:30 AM - 9:30 PM",
      "friday": "11:30 AM - 10:30 PM", "saturday": "11:30 AM - 10:30 PM",
      "sunday": "12:00 PM - 9:00 PM"
    },
    "socialLinks": { "instagram": "https://instagram.com/spicehaven" }
  });
  let resp = oneshot_raw(
    state.clone(),
    "PUT",
    "/restaurant-info",
    vec![(header::COOKIE, cookie.as_str())],
    payload,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body["id"], 1);
  assert_eq!(body["name"], "Spice Haven");

  let resp =
    oneshot_raw(state, "GET", "/restaurant-info", vec![], Value::Null).await;
  assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn about_section_roundtrip() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;

  let resp =
    oneshot_raw(state.clone(), "GET", "/about", vec![], Value::Null).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);

  let resp = oneshot_raw(
    state.clone(),
    "PUT",
    "/about",
    vec![(header::COOKIE, cookie.as_str())],
    json!({
      "heading": "Our Story",
      "paragraph1": "It began with a family recipe.",
      "paragraph2": "Now we serve it every day.",
      "chefName": "Rajesh Sharma",
      "chefTitle": "Executive Chef"
    }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["id"], 1);
}

// ── Menu CRUD ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn category_crud_roundtrip() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;
  let auth = vec![(header::COOKIE, cookie.as_str())];

  let resp = oneshot_raw(
    state.clone(),
    "POST",
    "/menu-categories",
    auth.clone(),
    json!({ "name": "Starters", "description": "Small plates", "displayOrder": 1 }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let created = body_json(resp).await;
  assert_eq!(created["id"], 1);
  assert_eq!(created["displayOrder"], 1);

  let resp = oneshot_raw(
    state.clone(),
    "PUT",
    "/menu-categories/1",
    auth.clone(),
    json!({ "description": "Shareable small plates" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let updated = body_json(resp).await;
  assert_eq!(updated["name"], "Starters");
  assert_eq!(updated["description"], "Shareable small plates");

  let resp = oneshot_raw(
    state.clone(),
    "DELETE",
    "/menu-categories/1",
    auth,
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(
    body_json(resp).await["message"],
    "Category deleted successfully"
  );

  let resp =
    oneshot_raw(state, "GET", "/menu-categories/1", vec![], Value::Null).await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await["message"], "Category not found");
}

#[tokio::test]
async fn category_validation_failure_is_400_with_errors() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;

  let resp = oneshot_raw(
    state,
    "POST",
    "/menu-categories",
    vec![(header::COOKIE, cookie.as_str())],
    json!({ "name": "", "displayOrder": 1 }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = body_json(resp).await;
  assert_eq!(body["message"], "Invalid data");
  assert!(body["errors"].get("name").is_some(), "body: {body}");
}

#[tokio::test]
async fn featured_route_is_not_swallowed_by_the_id_route() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;
  let auth = vec![(header::COOKIE, cookie.as_str())];

  let item = |name: &str, featured: bool| {
    json!({
      "name": name,
      "description": "Slow-cooked",
      "price": "$12.95",
      "categoryId": 1,
      "displayOrder": 1,
      "featured": featured
    })
  };
  for (name, featured) in [("Rogan Josh", true), ("Plain Rice", false)] {
    let resp = oneshot_raw(
      state.clone(),
      "POST",
      "/menu-items",
      auth.clone(),
      item(name, featured),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = oneshot_raw(
    state.clone(),
    "GET",
    "/menu-items/featured",
    vec![],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  assert_eq!(body[0]["name"], "Rogan Josh");

  let resp = oneshot_raw(
    state,
    "GET",
    "/menu-items/category/1",
    vec![],
    Value::Null,
  )
  .await;
  assert_eq!(body_json(resp).await.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn gallery_category_filter_matches_tag() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;
  let auth = vec![(header::COOKIE, cookie.as_str())];

  for (alt, category) in [("Thali", "food"), ("Dining room", "interior")] {
    let resp = oneshot_raw(
      state.clone(),
      "POST",
      "/gallery",
      auth.clone(),
      json!({
        "title": alt,
        "image": "https://img.example/x.jpg",
        "altText": alt,
        "category": category,
        "displayOrder": 1
      }),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
  }

  let resp = oneshot_raw(
    state,
    "GET",
    "/gallery/category/food",
    vec![],
    Value::Null,
  )
  .await;
  let body = body_json(resp).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  assert_eq!(body[0]["altText"], "Thali");
}

#[tokio::test]
async fn testimonial_rating_out_of_range_is_400() {
  let state = make_state("secret").await;
  let cookie = login_cookie(&state).await;

  let resp = oneshot_raw(
    state,
    "POST",
    "/testimonials",
    vec![(header::COOKIE, cookie.as_str())],
    json!({ "name": "Priya", "text": "Wonderful!", "rating": 6.0, "date": "August 2026" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["message"], "Invalid data");
}

// ── Reservations ─────────────────────────────────────────────────────────────

fn booking() -> Value {
  json!({
    "name": "Asha Patel",
    "email": "asha@example.com",
    "phone": "07700 900123",
    "date": "2026-09-12",
    "time": "19:30",
    "guests": 4,
    "occasion": "Anniversary",
    "message": "Window table please"
  })
}

#[tokio::test]
async fn public_booking_is_created_pending() {
  let state = make_state("secret").await;

  // No cookie needed, and a smuggled status must not stick.
  let mut payload = booking();
  payload["status"] = json!("confirmed");
  let resp =
    oneshot_raw(state.clone(), "POST", "/reservations", vec![], payload).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let body = body_json(resp).await;
  assert_eq!(body["id"], 1);
  assert_eq!(body["status"], "pending");
  assert!(body.get("createdAt").is_some());

  // Listing is staff-only.
  let resp = oneshot_raw(
    state.clone(),
    "GET",
    "/reservations",
    vec![],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

  let cookie = login_cookie(&state).await;
  let resp = oneshot_raw(
    state,
    "GET",
    "/reservations",
    vec![(header::COOKIE, cookie.as_str())],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body = body_json(resp).await;
  assert_eq!(body.as_array().unwrap().len(), 1);
  assert_eq!(body[0]["name"], "Asha Patel");
}

#[tokio::test]
async fn booking_validation_failure_is_400() {
  let state = make_state("secret").await;

  let mut payload = booking();
  payload["email"] = json!("not-an-email");
  payload["guests"] = json!(0);
  let resp = oneshot_raw(state, "POST", "/reservations", vec![], payload).await;

  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let body = body_json(resp).await;
  assert_eq!(body["message"], "Invalid data");
  assert!(body["errors"].get("email").is_some(), "body: {body}");
  assert!(body["errors"].get("guests").is_some(), "body: {body}");
}

#[tokio::test]
async fn status_update_happy_path_and_bad_value() {
  let state = make_state("secret").await;
  oneshot_raw(state.clone(), "POST", "/reservations", vec![], booking()).await;
  let cookie = login_cookie(&state).await;
  let auth = vec![(header::COOKIE, cookie.as_str())];

  let resp = oneshot_raw(
    state.clone(),
    "PUT",
    "/reservations/1/status",
    auth.clone(),
    json!({ "status": "confirmed" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["status"], "confirmed");

  let resp = oneshot_raw(
    state.clone(),
    "PUT",
    "/reservations/1/status",
    auth.clone(),
    json!({ "status": "bogus" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  assert_eq!(body_json(resp).await["message"], "Invalid status");

  let resp = oneshot_raw(
    state,
    "PUT",
    "/reservations/99/status",
    auth,
    json!({ "status": "cancelled" }),
  )
  .await;
  assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  assert_eq!(body_json(resp).await["message"], "Reservation not found");
}

#[tokio::test]
async fn get_single_reservation_is_gated() {
  let state = make_state("secret").await;
  oneshot_raw(state.clone(), "POST", "/reservations", vec![], booking()).await;

  let resp = oneshot_raw(
    state.clone(),
    "GET",
    "/reservations/1",
    vec![],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

  let cookie = login_cookie(&state).await;
  let resp = oneshot_raw(
    state,
    "GET",
    "/reservations/1",
    vec![(header::COOKIE, cookie.as_str())],
    Value::Null,
  )
  .await;
  assert_eq!(resp.status(), StatusCode::OK);
  assert_eq!(body_json(resp).await["guests"], 4);
}
