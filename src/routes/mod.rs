use axum::{Router, routing::get};

use crate::state::AppState;

pub mod auth;
pub mod courses;
pub mod doc;
pub mod health;
pub mod message;
pub mod pages;

/// Root-level page and form routes, the browser-facing surface.
pub fn create_site_router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/login", get(pages::login_page).post(auth::login))
        .route("/register", get(pages::register_page).post(auth::register))
        .route("/logout", get(auth::logout))
        .route("/dashboard", get(pages::dashboard))
}

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(courses::list_courses))
        .route("/message", get(message::current_message))
}
