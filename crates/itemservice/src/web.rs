// File: src/web.rs
// Purpose: HTTP routes for items and the login page

use crate::error::AppError;
use crate::form_context::FormContext;
use crate::handler::{ItemHandler, Submission};
use crate::item::{Item, ItemForm};
use crate::messages::MessageSource;
use crate::response::{Ok, Redirect};
use crate::store::ItemStore;
use crate::validation::BindingResult;
use crate::views::{MaudRenderer, View, ViewRenderer};
use axum::extract::{Form, Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub handler: ItemHandler,
    pub messages: Arc<MessageSource>,
    pub renderer: Arc<dyn ViewRenderer>,
}

impl AppState {
    pub fn new(store: Arc<dyn ItemStore>, messages: MessageSource) -> Self {
        Self {
            handler: ItemHandler::new(store),
            messages: Arc::new(messages),
            renderer: Arc::new(MaudRenderer),
        }
    }

    pub fn with_renderer(mut self, renderer: Arc<dyn ViewRenderer>) -> Self {
        self.renderer = renderer;
        self
    }

    fn page(&self, view: View<'_>) -> Response {
        Ok().html(self.renderer.render(&view)).into_response()
    }

    /// Re-render a rejected form with its resolved errors
    fn rejected_form(&self, item: &Item, errors: &BindingResult) -> Response {
        let form = FormContext::resolve(item, errors, &self.messages);
        let view = match item.id {
            Some(id) => View::EditForm { id, form: &form },
            None => View::AddForm { form: &form },
        };
        self.page(view)
    }
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/items", get(list_items))
        .route("/items/add", get(add_form).post(add_item))
        .route("/items/:id", get(show_item))
        .route("/items/:id/edit", get(edit_form).post(edit_item))
        .route("/login", get(login_form))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Check if request accepts JSON
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

#[derive(Debug, Default, Deserialize)]
struct ItemQuery {
    #[serde(default)]
    status: Option<String>,
}

impl ItemQuery {
    /// Only `status=true` shows the banner; any other value is ignored
    fn saved(&self) -> bool {
        self.status.as_deref() == Some("true")
    }
}

async fn index() -> Response {
    Redirect().to("/items").into_response()
}

async fn list_items(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let items = state.handler.list().await?;
    if accepts_json(&headers) {
        return Result::Ok(Json(items).into_response());
    }
    Result::Ok(state.page(View::Items { items: &items }))
}

async fn show_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<ItemQuery>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let item = state.handler.find(id).await?;
    if accepts_json(&headers) {
        return Result::Ok(Json(item).into_response());
    }
    Result::Ok(state.page(View::Item {
        item: &item,
        saved: query.saved(),
    }))
}

async fn add_form(State(state): State<AppState>) -> Response {
    let form = FormContext::for_item(&Item::default());
    state.page(View::AddForm { form: &form })
}

async fn add_item(
    State(state): State<AppState>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    match state.handler.submit(&form).await? {
        Submission::Saved { id, .. } => {
            Result::Ok(Redirect().to(format!("/items/{}?status=true", id)).into_response())
        }
        Submission::Rejected { item, errors } => Result::Ok(state.rejected_form(&item, &errors)),
    }
}

async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let item = state.handler.find(id).await?;
    let form = FormContext::for_item(&item);
    Result::Ok(state.page(View::EditForm { id, form: &form }))
}

async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(form): Form<ItemForm>,
) -> Result<Response, AppError> {
    match state.handler.edit(id, &form).await? {
        Submission::Saved { id, .. } => {
            Result::Ok(Redirect().to(format!("/items/{}", id)).into_response())
        }
        Submission::Rejected { item, errors } => Result::Ok(state.rejected_form(&item, &errors)),
    }
}

async fn login_form(State(state): State<AppState>) -> Response {
    state.page(View::LoginForm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_accepts_json() {
        let mut headers = HeaderMap::new();
        assert!(!accepts_json(&headers));

        headers.insert(header::ACCEPT, HeaderValue::from_static("text/html"));
        assert!(!accepts_json(&headers));

        headers.insert(
            header::ACCEPT,
            HeaderValue::from_static("application/json, text/plain"),
        );
        assert!(accepts_json(&headers));
    }

    #[test]
    fn test_status_query_is_lenient() {
        let query = |status: Option<&str>| ItemQuery {
            status: status.map(str::to_string),
        };
        assert!(query(Some("true")).saved());
        assert!(!query(Some("yes")).saved());
        assert!(!query(Some("")).saved());
        assert!(!query(None).saved());
    }
}
