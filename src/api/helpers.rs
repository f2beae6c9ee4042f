use axum::http::StatusCode;

use crate::api::errors::HttpError;
use crate::api::protocols::{HttpResponse, ResponseBody};
use crate::domain::account::Account;

/// Response for `error`, with the status code the error maps to
pub fn from_error(error: HttpError) -> HttpResponse {
    HttpResponse {
        status_code: error.status(),
        body: ResponseBody::Error(error),
    }
}

/// 500 with the generic server error body
pub fn server_error() -> HttpResponse {
    from_error(HttpError::Server)
}

/// 201 carrying the created account
pub fn created(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::CREATED,
        body: ResponseBody::Account(account),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;
    use serde_json::{json, Value};

    async fn into_json(response: HttpResponse) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn created_renders_account_fields() {
        let account = Account {
            id: "valid-id".to_string(),
            name: "valid-name".to_string(),
            email: "valid-email".to_string(),
            password: "valid-password".to_string(),
        };

        let (status, body) = into_json(created(account)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(
            body,
            json!({
                "id": "valid-id",
                "name": "valid-name",
                "email": "valid-email",
                "password": "valid-password"
            })
        );
    }

    #[tokio::test]
    async fn server_error_renders_generic_body() {
        let (status, body) = into_json(server_error()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "internal server error" }));
    }

    #[tokio::test]
    async fn client_errors_render_as_bad_request() {
        let (status, body) = into_json(from_error(HttpError::missing_param("name"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "missing param: name" }));

        let (status, body) = into_json(from_error(HttpError::invalid_param("email"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "invalid param: email" }));
    }

    #[test]
    fn server_error_is_the_server_variant() {
        assert_eq!(from_error(HttpError::Server), server_error());
    }
}
