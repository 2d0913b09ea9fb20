use book_controller::{Book, BookDraft, BookId, BookRow, ListView, View, DELETE_PROMPT};

pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn document(body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Book List</title>\n</head>\n<body>\n<div class=\"app-container\">\n{}</div>\n</body>\n</html>\n",
        body
    )
}

fn year_value(draft: &BookDraft) -> String {
    draft
        .release_year
        .map(|year| year.to_string())
        .unwrap_or_default()
}

fn draft_inputs(draft: &BookDraft, with_placeholders: bool) -> String {
    let placeholder = |text: &str| {
        if with_placeholders {
            format!(" placeholder=\"{}\"", text)
        } else {
            String::new()
        }
    };

    format!(
        "<input name=\"title\"{} value=\"{}\" required>\n<input name=\"release_year\" type=\"number\"{} value=\"{}\" required>\n<input name=\"description\"{} value=\"{}\">\n",
        placeholder("Title"),
        escape(&draft.title),
        placeholder("Release Year"),
        year_value(draft),
        placeholder("Description"),
        escape(&draft.description),
    )
}

fn render_row(row: &BookRow<'_>, base_path: &str) -> String {
    match row {
        BookRow::Editing { book, draft } => format!(
            "<li>\n<form method=\"post\" action=\"{base}/books/{id}\" class=\"edit-form\">\n{inputs}<button type=\"submit\">Save</button>\n<button type=\"submit\" formaction=\"{base}/books/{id}/cancel\" formnovalidate>Cancel</button>\n</form>\n</li>\n",
            base = base_path,
            id = book.id,
            inputs = draft_inputs(draft, false),
        ),
        BookRow::Display(book) => {
            let description = match book.description.as_deref() {
                Some(text) if !text.is_empty() => {
                    format!("<div class=\"book-desc\">{}</div>\n", escape(text))
                }
                _ => String::new(),
            };
            format!(
                "<li>\n<span class=\"book-title\">{title}</span>\n<span class=\"book-year\">({year})</span>\n{description}<form method=\"post\" action=\"{base}/books/{id}/edit\" style=\"display:inline\"><button type=\"submit\">Edit</button></form>\n<a href=\"{base}/books/{id}/delete\" class=\"book-delete\">Delete</a>\n</li>\n",
                title = escape(&book.title),
                year = book.release_year,
                description = description,
                base = base_path,
                id = book.id,
            )
        }
    }
}

/// Renders the catalog page for the current view.
pub fn render_page(view: &View<'_>, base_path: &str) -> String {
    let mut body = String::from("<h1>Book List</h1>\n");

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}/books\" class=\"create-form\">\n{}<button type=\"submit\">Add Book</button>\n</form>\n",
        base_path,
        draft_inputs(view.create_draft, true),
    ));

    if let Some(error) = view.error {
        body.push_str(&format!("<div class=\"error\">{}</div>\n", escape(error)));
    }

    body.push_str(&format!(
        "<form method=\"post\" action=\"{}/refresh\"><button type=\"submit\">Reload</button></form>\n",
        base_path
    ));
    if let Some(at) = view.last_refreshed {
        body.push_str(&format!(
            "<p class=\"last-refreshed\">Last updated {}</p>\n",
            at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    match &view.list {
        ListView::Loading => body.push_str("<div>Loading...</div>\n"),
        ListView::Books(rows) => {
            body.push_str("<ul class=\"book-list\">\n");
            for row in rows {
                body.push_str(&render_row(row, base_path));
            }
            body.push_str("</ul>\n");
        }
    }

    document(&body)
}

/// Asks before deleting; `book` is `None` when the id is not in the current list.
pub fn render_delete_confirmation(id: BookId, book: Option<&Book>, base_path: &str) -> String {
    let subject = match book {
        Some(book) => format!("{} ({})", escape(&book.title), book.release_year),
        None => format!("Book #{}", id),
    };

    document(&format!(
        "<h1>Book List</h1>\n<p>{prompt}</p>\n<p class=\"book-title\">{subject}</p>\n<form method=\"post\" action=\"{base}/books/{id}/delete\">\n<button type=\"submit\" name=\"confirm\" value=\"yes\">Delete</button>\n<button type=\"submit\" name=\"confirm\" value=\"no\">Cancel</button>\n</form>\n",
        prompt = DELETE_PROMPT,
        subject = subject,
        base = base_path,
        id = id,
    ))
}
