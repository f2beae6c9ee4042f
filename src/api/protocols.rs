// Contracts of the presentation layer: transport-neutral request/response
// shapes and the ports controllers depend on

use async_trait::async_trait;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use crate::api::errors::HttpError;
use crate::domain::account::Account;
use crate::domain::errors::Result;

/// Inbound request as seen by a controller
///
/// The body is kept untyped; each controller picks the fields it needs.
#[derive(Debug, Clone, Default)]
pub struct HttpRequest {
    pub body: Value,
}

/// Payload of an [`HttpResponse`]
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(Account),
    Error(HttpError),
}

/// Outcome of a controller, converted to an axum response at the edge
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status_code: StatusCode,
    pub body: ResponseBody,
}

impl IntoResponse for HttpResponse {
    fn into_response(self) -> Response {
        (self.status_code, Json(self.body)).into_response()
    }
}

/// Request handler independent of the HTTP framework
#[async_trait]
pub trait Controller: Send + Sync {
    async fn handle(&self, request: HttpRequest) -> HttpResponse;
}

/// Email format check
///
/// An `Err` means the check itself failed, which is not the same as the
/// address being malformed.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool>;
}
