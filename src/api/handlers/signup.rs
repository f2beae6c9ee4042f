use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use crate::api::protocols::{HttpRequest, HttpResponse};
use crate::app::AppState;

/// Sign up a new account
///
/// POST /api/signup
///
/// A body that is not JSON, or lacks a JSON content type, is handed to the
/// controller as an empty body, so the caller still gets the usual
/// `{"error": ...}` client error.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> HttpResponse {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable sign up body");
            Value::Null
        }
    };

    state.signup.handle(HttpRequest { body }).await
}
