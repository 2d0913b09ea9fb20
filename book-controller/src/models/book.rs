use serde::{Deserialize, Serialize};

pub type BookId = u32;

/// A book record as owned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub release_year: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Unsaved form contents for creating or editing a book.
///
/// `release_year` stays optional because an empty form field has no year yet.
/// Required fields are checked by the input layer before a draft is submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub release_year: Option<i32>,
    pub description: String,
}

impl BookDraft {
    pub fn new(
        title: impl Into<String>,
        release_year: i32,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            release_year: Some(release_year),
            description: description.into(),
        }
    }

    /// Returns the message for the first required field that is missing.
    pub fn missing_required(&self) -> Option<&'static str> {
        if self.title.trim().is_empty() {
            Some("Title is required")
        } else if self.release_year.is_none() {
            Some("Release year is required")
        } else {
            None
        }
    }
}

impl From<&Book> for BookDraft {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            release_year: Some(book.release_year),
            description: book.description.clone().unwrap_or_default(),
        }
    }
}
