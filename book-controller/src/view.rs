use crate::models::book::{Book, BookDraft};
use crate::state::{CatalogState, EditMode};
use chrono::{DateTime, Utc};

/// What the page should show, independent of how it is rendered.
#[derive(Debug, PartialEq)]
pub struct View<'a> {
    pub create_draft: &'a BookDraft,
    pub error: Option<&'a str>,
    pub last_refreshed: Option<DateTime<Utc>>,
    pub list: ListView<'a>,
}

#[derive(Debug, PartialEq)]
pub enum ListView<'a> {
    Loading,
    Books(Vec<BookRow<'a>>),
}

#[derive(Debug, PartialEq)]
pub enum BookRow<'a> {
    Display(&'a Book),
    Editing { book: &'a Book, draft: &'a BookDraft },
}

impl<'a> View<'a> {
    pub fn of(state: &'a CatalogState) -> Self {
        let list = if state.loading {
            ListView::Loading
        } else {
            ListView::Books(
                state
                    .books
                    .iter()
                    .map(|book| row(book, &state.edit_mode))
                    .collect(),
            )
        };

        Self {
            create_draft: &state.create_draft,
            error: state.error.as_deref(),
            last_refreshed: state.last_refreshed,
            list,
        }
    }
}

fn row<'a>(book: &'a Book, edit_mode: &'a EditMode) -> BookRow<'a> {
    match edit_mode {
        EditMode::Editing { id, draft } if *id == book.id => BookRow::Editing { book, draft },
        _ => BookRow::Display(book),
    }
}
