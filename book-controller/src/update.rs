//! The catalog's state transitions.
//!
//! [`update`] never performs I/O. Anything that needs the backend comes back
//! as a [`Command`], and its outcome is fed in again as another [`Msg`].

use crate::models::book::{Book, BookDraft, BookId};
use crate::services::api::ApiError;
use crate::state::{CatalogState, EditMode, RequestTicket};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

pub const DELETE_PROMPT: &str = "Delete this book?";

/// The user's answer to [`DELETE_PROMPT`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Confirmed,
    Declined,
}

#[derive(Debug)]
pub enum Msg {
    RefreshRequested,
    BooksLoaded {
        ticket: RequestTicket,
        fetched_at: DateTime<Utc>,
        result: Result<Vec<Book>, ApiError>,
    },
    CreateDraftChanged(BookDraft),
    CreateSubmitted(BookDraft),
    CreateFinished(Result<(), ApiError>),
    EditStarted(Book),
    EditDraftChanged(BookDraft),
    EditSubmitted { id: BookId, draft: BookDraft },
    EditFinished { id: BookId, result: Result<(), ApiError> },
    EditCancelled,
    DeleteRequested { id: BookId, confirmation: Confirmation },
    DeleteFinished { id: BookId, result: Result<(), ApiError> },
    InputRejected(String),
}

/// Backend work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    None,
    FetchBooks(RequestTicket),
    CreateBook(BookDraft),
    UpdateBook { id: BookId, draft: BookDraft },
    DeleteBook(BookId),
}

pub fn update(state: &mut CatalogState, msg: Msg) -> Command {
    match msg {
        Msg::RefreshRequested => begin_refresh(state),

        Msg::BooksLoaded {
            ticket,
            fetched_at,
            result,
        } => {
            if ticket < state.latest_ticket() {
                debug!("Discarding superseded book list from {:?}", ticket);
                return Command::None;
            }

            state.loading = false;
            match result {
                Ok(books) => {
                    state.books = books;
                    state.last_refreshed = Some(fetched_at);
                }
                Err(e) => {
                    warn!("Refresh failed: {}", e);
                    state.error = Some(e.to_string());
                }
            }
            Command::None
        }

        Msg::CreateDraftChanged(draft) => {
            state.create_draft = draft;
            Command::None
        }

        Msg::CreateSubmitted(draft) => {
            state.error = None;
            state.create_draft = draft.clone();
            Command::CreateBook(draft)
        }

        Msg::CreateFinished(Ok(())) => {
            state.create_draft = BookDraft::default();
            begin_refresh(state)
        }

        Msg::CreateFinished(Err(e)) => {
            warn!("Create failed: {}", e);
            state.error = Some(e.to_string());
            Command::None
        }

        Msg::EditStarted(book) => {
            if let Some(previous) = state.edit_mode.editing_id() {
                debug!("Switching edit from book {} to book {}", previous, book.id);
            }
            state.edit_mode = EditMode::Editing {
                id: book.id,
                draft: BookDraft::from(&book),
            };
            Command::None
        }

        Msg::EditDraftChanged(new_draft) => {
            match &mut state.edit_mode {
                EditMode::Editing { draft, .. } => *draft = new_draft,
                EditMode::Idle => debug!("Ignoring edit draft change while not editing"),
            }
            Command::None
        }

        Msg::EditSubmitted { id, draft } => {
            state.error = None;
            if let EditMode::Editing {
                id: editing,
                draft: current,
            } = &mut state.edit_mode
            {
                if *editing == id {
                    *current = draft.clone();
                }
            }
            Command::UpdateBook { id, draft }
        }

        Msg::EditFinished { id, result } => match result {
            Ok(()) => {
                debug!("Leaving edit mode after saving book {}", id);
                state.edit_mode = EditMode::Idle;
                begin_refresh(state)
            }
            Err(e) => {
                warn!("Update of book {} failed: {}", id, e);
                state.error = Some(e.to_string());
                Command::None
            }
        },

        Msg::EditCancelled => {
            state.edit_mode = EditMode::Idle;
            Command::None
        }

        Msg::DeleteRequested {
            id,
            confirmation: Confirmation::Declined,
        } => {
            debug!("Delete of book {} declined", id);
            Command::None
        }

        Msg::DeleteRequested {
            id,
            confirmation: Confirmation::Confirmed,
        } => {
            state.error = None;
            Command::DeleteBook(id)
        }

        Msg::DeleteFinished { id, result } => match result {
            Ok(()) => begin_refresh(state),
            Err(e) => {
                warn!("Delete of book {} failed: {}", id, e);
                state.error = Some(e.to_string());
                Command::None
            }
        },

        Msg::InputRejected(message) => {
            state.error = Some(message);
            Command::None
        }
    }
}

fn begin_refresh(state: &mut CatalogState) -> Command {
    state.error = None;
    state.loading = true;
    Command::FetchBooks(state.issue_ticket())
}
