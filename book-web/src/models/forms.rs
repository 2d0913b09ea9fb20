use book_controller::{BookDraft, Confirmation};
use serde::Deserialize;

/// Fields posted by the create and edit forms.
#[derive(Debug, Default, Deserialize)]
pub struct BookForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub release_year: String,
    #[serde(default)]
    pub description: String,
}

impl BookForm {
    /// A year that is empty or not a number becomes `None`.
    pub fn into_draft(self) -> BookDraft {
        BookDraft {
            release_year: self.release_year.trim().parse().ok(),
            title: self.title,
            description: self.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    pub confirm: Option<String>,
}

impl DeleteForm {
    pub fn confirmation(&self) -> Confirmation {
        match self.confirm.as_deref() {
            Some("yes") => Confirmation::Confirmed,
            _ => Confirmation::Declined,
        }
    }
}
