use crate::models::forms::{BookForm, DeleteForm};
use crate::utils::html::{render_delete_confirmation, render_page};
use crate::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    Form,
};
use book_controller::BookId;
use tracing::{info, warn};

pub async fn show_page(State(app): State<AppState>) -> Html<String> {
    Html(app.controller.with_view(|view| render_page(&view, &app.base_path)))
}

pub async fn refresh(State(app): State<AppState>) -> Redirect {
    app.controller.refresh_list().await;
    app.back_to_page()
}

pub async fn create_book(State(app): State<AppState>, Form(form): Form<BookForm>) -> Redirect {
    let draft = form.into_draft();
    let controller = &app.controller;

    match draft.missing_required() {
        Some(message) => {
            info!("Rejected new book: {}", message);
            controller.update_create_draft(draft);
            controller.reject_input(message);
        }
        None => controller.submit_create(draft).await,
    }

    app.back_to_page()
}

pub async fn begin_edit(Path(id): Path<BookId>, State(app): State<AppState>) -> Redirect {
    let controller = &app.controller;

    match controller.state().book(id).cloned() {
        Some(book) => controller.begin_edit(&book),
        None => warn!("Cannot edit book {}: not in the current list", id),
    }

    app.back_to_page()
}

pub async fn submit_edit(
    Path(id): Path<BookId>,
    State(app): State<AppState>,
    Form(form): Form<BookForm>,
) -> Redirect {
    let draft = form.into_draft();
    let controller = &app.controller;

    match draft.missing_required() {
        Some(message) => {
            info!("Rejected edit of book {}: {}", id, message);
            if controller.state().edit_mode.editing_id() == Some(id) {
                controller.update_edit_draft(draft);
            }
            controller.reject_input(message);
        }
        None => controller.submit_edit(id, draft).await,
    }

    app.back_to_page()
}

pub async fn cancel_edit(Path(id): Path<BookId>, State(app): State<AppState>) -> Redirect {
    info!("Cancelled edit of book {}", id);
    app.controller.cancel_edit();
    app.back_to_page()
}

pub async fn confirm_delete(Path(id): Path<BookId>, State(app): State<AppState>) -> Html<String> {
    let state = app.controller.state();
    Html(render_delete_confirmation(id, state.book(id), &app.base_path))
}

pub async fn delete_book(
    Path(id): Path<BookId>,
    State(app): State<AppState>,
    Form(form): Form<DeleteForm>,
) -> Redirect {
    app.controller.delete_book(id, form.confirmation()).await;
    app.back_to_page()
}
