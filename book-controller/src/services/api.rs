use crate::config::ApiConfig;
use crate::models::book::{Book, BookDraft, BookId};
use crate::models::responses::ErrorResponse;
use async_trait::async_trait;
use reqwest::{Client, Response};
use thiserror::Error;
use tracing::{error, info, warn};

pub const FETCH_FAILED: &str = "Failed to fetch books";
pub const CREATE_FAILED: &str = "Failed to create book";
pub const UPDATE_FAILED: &str = "Failed to update book";
pub const DELETE_FAILED: &str = "Failed to delete book";

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed, or a success body could not be decoded.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Rejected { status: u16, message: String },
}

/// The REST operations the catalog needs from its backend.
#[async_trait]
pub trait BookApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError>;
    async fn create_book(&self, draft: &BookDraft) -> Result<(), ApiError>;
    async fn update_book(&self, id: BookId, draft: &BookDraft) -> Result<(), ApiError>;
    async fn delete_book(&self, id: BookId) -> Result<(), ApiError>;
}

pub struct HttpBookApi {
    client: Client,
    base_url: String,
}

impl HttpBookApi {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    fn book_url(&self, id: BookId) -> String {
        format!("{}/api/books/{}/", self.base_url, id)
    }
}

/// Builds the error for a non-success response, preferring the backend's
/// `error` field over `fallback`.
async fn rejection(response: Response, fallback: &str) -> ApiError {
    let status = response.status();

    let message = match response.json::<ErrorResponse>().await {
        Ok(body) => body.into_message(),
        Err(e) => {
            warn!("Unreadable error body for status {}: {}", status, e);
            None
        }
    };

    ApiError::Rejected {
        status: status.as_u16(),
        message: message.unwrap_or_else(|| fallback.to_string()),
    }
}

#[async_trait]
impl BookApi for HttpBookApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        let url = format!("{}/api/books/", self.base_url);
        let response = self.client.get(&url).send().await?;

        if response.status().is_success() {
            let books: Vec<Book> = response.json().await?;
            info!("Fetched {} books", books.len());
            Ok(books)
        } else {
            error!("Failed to fetch books: {}", response.status());
            Err(ApiError::Rejected {
                status: response.status().as_u16(),
                message: FETCH_FAILED.to_string(),
            })
        }
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<(), ApiError> {
        info!("Creating book {:?}", draft.title);

        let url = format!("{}/api/books/create/", self.base_url);
        let response = self.client.post(&url).json(draft).send().await?;

        if response.status().is_success() {
            info!("Successfully created book {:?}", draft.title);
            Ok(())
        } else {
            error!("Failed to create book {:?}: {}", draft.title, response.status());
            Err(rejection(response, CREATE_FAILED).await)
        }
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> Result<(), ApiError> {
        info!("Updating book {}", id);

        let response = self.client.put(self.book_url(id)).json(draft).send().await?;

        if response.status().is_success() {
            info!("Successfully updated book {}", id);
            Ok(())
        } else {
            error!("Failed to update book {}: {}", id, response.status());
            Err(rejection(response, UPDATE_FAILED).await)
        }
    }

    async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        info!("Deleting book {}", id);

        let response = self.client.delete(self.book_url(id)).send().await?;

        if response.status().is_success() {
            info!("Successfully deleted book {}", id);
            Ok(())
        } else {
            error!("Failed to delete book {}: {}", id, response.status());
            Err(ApiError::Rejected {
                status: response.status().as_u16(),
                message: DELETE_FAILED.to_string(),
            })
        }
    }
}
