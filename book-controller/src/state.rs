use crate::models::book::{Book, BookDraft, BookId};
use chrono::{DateTime, Utc};

/// Sequence number attached to each list refresh. Later tickets compare greater.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Which book, if any, is shown with editable fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditMode {
    #[default]
    Idle,
    Editing { id: BookId, draft: BookDraft },
}

impl EditMode {
    pub fn editing_id(&self) -> Option<BookId> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { id, .. } => Some(*id),
        }
    }

    pub fn draft(&self) -> Option<&BookDraft> {
        match self {
            EditMode::Idle => None,
            EditMode::Editing { draft, .. } => Some(draft),
        }
    }
}

/// Everything the catalog page knows. Only [`crate::update::update`] mutates it.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    /// The backend's list as of the last successful refresh, in response order.
    pub books: Vec<Book>,
    pub create_draft: BookDraft,
    pub edit_mode: EditMode,
    pub loading: bool,
    pub error: Option<String>,
    pub last_refreshed: Option<DateTime<Utc>>,
    latest_ticket: RequestTicket,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.iter().find(|book| book.id == id)
    }

    /// The ticket of the most recently started refresh.
    pub fn latest_ticket(&self) -> RequestTicket {
        self.latest_ticket
    }

    pub(crate) fn issue_ticket(&mut self) -> RequestTicket {
        self.latest_ticket = self.latest_ticket.next();
        self.latest_ticket
    }
}
