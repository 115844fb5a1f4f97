// File: src/response.rs
// Purpose: Ok(), Error() and Redirect() response builders used by the routes

use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use maud::Markup;

/// Rendered page, 200 OK
#[derive(Debug, Default)]
pub struct OkResponse {
    body: Option<Markup>,
}

impl OkResponse {
    pub fn html(mut self, body: Markup) -> Self {
        self.body = Some(body);
        self
    }
}

impl IntoResponse for OkResponse {
    fn into_response(self) -> Response {
        let body = self.body.map(|m| m.into_string()).unwrap_or_default();
        (StatusCode::OK, Html(body)).into_response()
    }
}

/// Error page; 500 unless a status is given
#[derive(Debug)]
pub struct ErrorResponse {
    body: Option<Markup>,
    status: StatusCode,
}

impl ErrorResponse {
    pub fn html(mut self, body: Markup) -> Self {
        self.body = Some(body);
        self
    }

    pub fn status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let body = self.body.map(|m| m.into_string()).unwrap_or_default();
        (self.status, Html(body)).into_response()
    }
}

/// Always 303 See Other
#[derive(Debug)]
pub struct RedirectResponse {
    location: String,
}

impl RedirectResponse {
    pub fn to(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }
}

impl IntoResponse for RedirectResponse {
    fn into_response(self) -> Response {
        (StatusCode::SEE_OTHER, [(header::LOCATION, self.location)]).into_response()
    }
}

#[allow(non_snake_case)]
pub fn Ok() -> OkResponse {
    OkResponse::default()
}

#[allow(non_snake_case)]
pub fn Error() -> ErrorResponse {
    ErrorResponse {
        body: None,
        status: StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[allow(non_snake_case)]
pub fn Redirect() -> RedirectResponse {
    RedirectResponse {
        location: "/".to_string(),
    }
}
