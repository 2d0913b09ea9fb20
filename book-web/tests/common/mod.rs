use async_trait::async_trait;
use axum::Router;
use book_controller::{ApiError, Book, BookApi, BookDraft, BookId, BookListController};
use book_web::{create_app, SharedController};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Records every call; mutations succeed unless `reject` is set.
///
/// With `hold_list` set, a list call signals `list_started` and then waits
/// for `list_release` before answering.
#[derive(Default)]
pub struct RecordingApi {
    pub books: Mutex<Vec<Book>>,
    pub calls: Mutex<Vec<String>>,
    pub reject: Mutex<Option<String>>,
    pub hold_list: AtomicBool,
    pub list_started: Notify,
    pub list_release: Notify,
}

impl RecordingApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn check(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.reject.lock().unwrap().clone() {
            Some(message) => Err(ApiError::Rejected {
                status: 400,
                message,
            }),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl BookApi for RecordingApi {
    async fn list_books(&self) -> Result<Vec<Book>, ApiError> {
        self.calls.lock().unwrap().push("list".to_string());
        if self.hold_list.load(Ordering::SeqCst) {
            self.list_started.notify_one();
            self.list_release.notified().await;
        }
        let books = self.books.lock().unwrap().clone();
        Ok(books)
    }

    async fn create_book(&self, draft: &BookDraft) -> Result<(), ApiError> {
        self.check(format!("create {}", draft.title))?;
        let mut books = self.books.lock().unwrap();
        let id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        books.push(Book {
            id,
            title: draft.title.clone(),
            release_year: draft.release_year.unwrap_or_default(),
            description: Some(draft.description.clone()),
        });
        Ok(())
    }

    async fn update_book(&self, id: BookId, draft: &BookDraft) -> Result<(), ApiError> {
        self.check(format!("update {} {}", id, draft.title))?;
        if let Some(book) = self.books.lock().unwrap().iter_mut().find(|b| b.id == id) {
            book.title = draft.title.clone();
            book.release_year = draft.release_year.unwrap_or_default();
            book.description = Some(draft.description.clone());
        }
        Ok(())
    }

    async fn delete_book(&self, id: BookId) -> Result<(), ApiError> {
        self.check(format!("delete {}", id))?;
        self.books.lock().unwrap().retain(|b| b.id != id);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub controller: SharedController,
    pub api: Arc<RecordingApi>,
}

pub fn sample_books() -> Vec<Book> {
    vec![
        Book {
            id: 3,
            title: "Hyperion".to_string(),
            release_year: 1989,
            description: None,
        },
        Book {
            id: 5,
            title: "Solaris".to_string(),
            release_year: 1961,
            description: Some("Ocean".to_string()),
        },
    ]
}

/// Builds the app with an already refreshed controller.
pub async fn create_test_app(base_path: &str) -> TestApp {
    let api = Arc::new(RecordingApi {
        books: Mutex::new(sample_books()),
        ..RecordingApi::default()
    });

    let controller = Arc::new(BookListController::new(api.clone()));
    controller.refresh_list().await;

    TestApp {
        router: create_app(base_path, controller.clone()),
        controller,
        api,
    }
}
