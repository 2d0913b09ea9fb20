use crate::models::book::{Book, BookDraft, BookId};
use crate::services::api::BookApi;
use crate::state::CatalogState;
use crate::update::{update, Command, Confirmation, Msg};
use crate::view::View;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{info, warn};

pub type Api = Arc<dyn BookApi + Send + Sync>;

/// Owns the catalog state and runs the backend calls its transitions ask for.
///
/// The state lock is only held while a message is applied, never across a
/// backend call, so readers see `loading` while a request is in flight.
/// Failures never surface as `Err`; they land in [`CatalogState::error`].
pub struct BookListController {
    api: Api,
    state: Mutex<CatalogState>,
}

impl BookListController {
    pub fn new(api: Api) -> Self {
        Self {
            api,
            state: Mutex::new(CatalogState::new()),
        }
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> CatalogState {
        self.lock().clone()
    }

    /// Runs `f` on the view of the current state.
    pub fn with_view<R>(&self, f: impl FnOnce(View<'_>) -> R) -> R {
        let state = self.lock();
        f(View::of(&state))
    }

    pub async fn refresh_list(&self) {
        self.dispatch(Msg::RefreshRequested).await;
    }

    pub async fn submit_create(&self, draft: BookDraft) {
        self.dispatch(Msg::CreateSubmitted(draft)).await;
    }

    pub fn begin_edit(&self, book: &Book) {
        self.apply_local(Msg::EditStarted(book.clone()));
    }

    pub async fn submit_edit(&self, id: BookId, draft: BookDraft) {
        self.dispatch(Msg::EditSubmitted { id, draft }).await;
    }

    pub fn cancel_edit(&self) {
        self.apply_local(Msg::EditCancelled);
    }

    pub async fn delete_book(&self, id: BookId, confirmation: Confirmation) {
        self.dispatch(Msg::DeleteRequested { id, confirmation }).await;
    }

    pub fn update_create_draft(&self, draft: BookDraft) {
        self.apply_local(Msg::CreateDraftChanged(draft));
    }

    pub fn update_edit_draft(&self, draft: BookDraft) {
        self.apply_local(Msg::EditDraftChanged(draft));
    }

    /// Shows a message from the input layer, typically a missing required field.
    pub fn reject_input(&self, message: impl Into<String>) {
        self.apply_local(Msg::InputRejected(message.into()));
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, msg: Msg) -> Command {
        update(&mut self.lock(), msg)
    }

    async fn dispatch(&self, msg: Msg) {
        let mut command = self.apply(msg);

        loop {
            let outcome = match command {
                Command::None => return,
                Command::FetchBooks(ticket) => {
                    let result = self.api.list_books().await;
                    Msg::BooksLoaded {
                        ticket,
                        fetched_at: Utc::now(),
                        result,
                    }
                }
                Command::CreateBook(draft) => {
                    Msg::CreateFinished(self.api.create_book(&draft).await)
                }
                Command::UpdateBook { id, draft } => Msg::EditFinished {
                    id,
                    result: self.api.update_book(id, &draft).await,
                },
                Command::DeleteBook(id) => {
                    let result = self.api.delete_book(id).await;
                    if result.is_ok() {
                        info!("Book {} deleted, refreshing list", id);
                    }
                    Msg::DeleteFinished { id, result }
                }
            };

            command = self.apply(outcome);
        }
    }

    fn apply_local(&self, msg: Msg) {
        let command = self.apply(msg);
        if command != Command::None {
            warn!("Dropping backend command from a local action: {:?}", command);
        }
    }
}
