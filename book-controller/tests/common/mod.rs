use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use book_controller::{ApiConfig, Book};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

/// In-process stand-in for the books backend.
#[derive(Default)]
pub struct StubBackend {
    pub books: Vec<Book>,
    pub next_id: u32,
    /// When set, every request is answered with this status and raw body.
    pub reject_with: Option<(StatusCode, String)>,
    pub payloads: Vec<Value>,
    pub requests: Vec<String>,
}

pub type Store = Arc<Mutex<StubBackend>>;

pub fn store(books: Vec<Book>) -> Store {
    let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
    Arc::new(Mutex::new(StubBackend {
        books,
        next_id,
        ..StubBackend::default()
    }))
}

pub fn book(id: u32, title: &str, release_year: i32, description: Option<&str>) -> Book {
    Book {
        id,
        title: title.to_string(),
        release_year,
        description: description.map(str::to_string),
    }
}

fn router(store: Store) -> Router {
    Router::new()
        .route("/api/books/", get(list_books))
        .route("/api/books/create/", post(create_book))
        .route("/api/books/:id/", put(update_book).delete(delete_book))
        .with_state(store)
}

/// Serves the stub on an ephemeral port and returns a config pointing at it.
pub async fn spawn_backend(store: Store) -> ApiConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(store)).await.unwrap();
    });

    ApiConfig::new(format!("http://{}/", addr))
}

/// A stub that can be taken down mid-test.
pub struct RunningBackend {
    pub config: ApiConfig,
    shutdown: oneshot::Sender<()>,
    handle: JoinHandle<()>,
}

impl RunningBackend {
    /// Stops accepting connections and waits until open ones are closed.
    pub async fn stop(self) {
        let _ = self.shutdown.send(());
        self.handle.await.unwrap();
    }
}

pub async fn spawn_stoppable_backend(store: Store) -> RunningBackend {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (shutdown, stopped) = oneshot::channel::<()>();
    let handle = tokio::spawn(async move {
        axum::serve(listener, router(store))
            .with_graceful_shutdown(async {
                let _ = stopped.await;
            })
            .await
            .unwrap();
    });

    RunningBackend {
        config: ApiConfig::new(format!("http://{}", addr)),
        shutdown,
        handle,
    }
}

fn rejection(backend: &StubBackend) -> Option<Response> {
    backend
        .reject_with
        .clone()
        .map(|(status, body)| (status, body).into_response())
}

fn draft_fields(payload: &Value) -> (String, i32, Option<String>) {
    (
        payload["title"].as_str().unwrap_or_default().to_string(),
        payload["release_year"].as_i64().unwrap_or_default() as i32,
        payload["description"].as_str().map(str::to_string),
    )
}

async fn list_books(State(store): State<Store>) -> Response {
    let mut backend = store.lock().unwrap();
    backend.requests.push("GET /api/books/".to_string());
    if let Some(response) = rejection(&backend) {
        return response;
    }
    Json(backend.books.clone()).into_response()
}

async fn create_book(State(store): State<Store>, Json(payload): Json<Value>) -> Response {
    let mut backend = store.lock().unwrap();
    backend.requests.push("POST /api/books/create/".to_string());
    backend.payloads.push(payload.clone());
    if let Some(response) = rejection(&backend) {
        return response;
    }

    let (title, release_year, description) = draft_fields(&payload);
    let id = backend.next_id;
    backend.next_id += 1;
    backend.books.push(Book {
        id,
        title,
        release_year,
        description,
    });
    StatusCode::CREATED.into_response()
}

async fn update_book(
    Path(id): Path<u32>,
    State(store): State<Store>,
    Json(payload): Json<Value>,
) -> Response {
    let mut backend = store.lock().unwrap();
    backend.requests.push(format!("PUT /api/books/{}/", id));
    backend.payloads.push(payload.clone());
    if let Some(response) = rejection(&backend) {
        return response;
    }

    let (title, release_year, description) = draft_fields(&payload);
    match backend.books.iter_mut().find(|b| b.id == id) {
        Some(book) => {
            book.title = title;
            book.release_year = release_year;
            book.description = description;
            StatusCode::OK.into_response()
        }
        None => (StatusCode::NOT_FOUND, r#"{"error": "Book not found"}"#).into_response(),
    }
}

async fn delete_book(Path(id): Path<u32>, State(store): State<Store>) -> Response {
    let mut backend = store.lock().unwrap();
    backend.requests.push(format!("DELETE /api/books/{}/", id));
    if let Some(response) = rejection(&backend) {
        return response;
    }

    backend.books.retain(|b| b.id != id);
    StatusCode::NO_CONTENT.into_response()
}
