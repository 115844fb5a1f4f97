// Item service - server-side form validation with coded error messages
// Items are bound from raw form input, validated, and either persisted or
// sent back to the form with resolved messages.

pub mod config;
pub mod error;
pub mod form_context;
pub mod handler;
pub mod item;
pub mod messages;
pub mod response;
pub mod store;
pub mod validation;
pub mod views;
pub mod web;

pub use config::Config;
pub use error::AppError;
pub use form_context::FormContext;
pub use handler::{check, ItemHandler, Submission};
pub use item::{Item, ItemForm};
pub use messages::MessageSource;
pub use store::{ItemStore, MemoryItemStore, SqlItemStore, StoreError};
pub use validation::{BindingResult, ErrorCode, ErrorScope, Validate, ValidationError};
pub use views::{MaudRenderer, View, ViewRenderer};
pub use web::{router, AppState};

// Re-export commonly used types from dependencies
pub use axum;
pub use axum::http::StatusCode;
