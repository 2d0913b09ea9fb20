//! Client-side state and backend plumbing for the book catalog page.
//!
//! [`controller::BookListController`] is the entry point. It keeps a
//! [`state::CatalogState`], advances it through the pure [`update::update`]
//! reducer, and executes the backend calls the reducer asks for through a
//! [`services::api::BookApi`].

pub mod config;
pub mod controller;
pub mod models;
pub mod services;
pub mod state;
pub mod update;
pub mod view;

pub use config::ApiConfig;
pub use controller::{Api, BookListController};
pub use models::book::{Book, BookDraft, BookId};
pub use services::api::{ApiError, BookApi, HttpBookApi};
pub use state::{CatalogState, EditMode};
pub use update::{Confirmation, DELETE_PROMPT};
pub use view::{BookRow, ListView, View};
