use axum::{
    response::Redirect,
    routing::{get, post},
    Router,
};
use book_controller::BookListController;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod models;
pub mod routes;
pub mod utils;

use routes::{
    books::{
        begin_edit, cancel_edit, confirm_delete, create_book, delete_book, refresh, show_page,
        submit_edit,
    },
    health::health_check,
};

/// The page has a single user session, so one controller serves every request.
/// It guards its own state, so a page render never waits on a backend call.
pub type SharedController = Arc<BookListController>;

#[derive(Clone)]
pub struct AppState {
    pub controller: SharedController,
    pub base_path: Arc<str>,
}

impl AppState {
    pub fn page_path(&self) -> String {
        page_path(&self.base_path)
    }

    pub fn back_to_page(&self) -> Redirect {
        Redirect::to(&self.page_path())
    }
}

fn page_path(base_path: &str) -> String {
    if base_path.is_empty() {
        "/".to_string()
    } else {
        base_path.to_string()
    }
}

/// Builds the router; `base_path` must already be normalized.
pub fn create_app(base_path: &str, controller: SharedController) -> Router {
    let state = AppState {
        controller,
        base_path: Arc::from(base_path),
    };

    let mut router = Router::new()
        .route("/status", get(health_check))
        .route(&page_path(base_path), get(show_page));
    if !base_path.is_empty() {
        router = router.route(&format!("{}/", base_path), get(show_page));
    }

    router
        .route(&format!("{}/refresh", base_path), post(refresh))
        .route(&format!("{}/books", base_path), post(create_book))
        .route(&format!("{}/books/:id", base_path), post(submit_edit))
        .route(&format!("{}/books/:id/edit", base_path), post(begin_edit))
        .route(&format!("{}/books/:id/cancel", base_path), post(cancel_edit))
        .route(
            &format!("{}/books/:id/delete", base_path),
            get(confirm_delete).post(delete_book),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
