// Composition root: wires concrete adapters into controllers and mounts
// them on the router

use std::any::Any;
use std::sync::Arc;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{self, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api::controllers::SignUpController;
use crate::api::handlers::{health::health_check, signup::signup};
use crate::api::helpers::server_error;
use crate::api::protocols::Controller;
use crate::data::usecases::DbAddAccount;
use crate::domain::repositories::AddAccountRepository;
use crate::infrastructure::cryptography::BcryptAdapter;
use crate::infrastructure::validators::EmailValidatorAdapter;

/// Shared router state
#[derive(Clone)]
pub struct AppState {
    pub signup: Arc<dyn Controller>,
}

/// Builds the sign up controller on top of the given repository
pub fn make_signup_controller(
    repository: Arc<dyn AddAccountRepository>,
    bcrypt_cost: u32,
) -> SignUpController {
    let encrypter = Arc::new(BcryptAdapter::new(bcrypt_cost));
    let add_account = Arc::new(DbAddAccount::new(encrypter, repository));

    SignUpController::new(Arc::new(EmailValidatorAdapter), add_account)
}

/// Builds the application router
pub fn build_router(state: AppState) -> Router {
    let cors_layer = CorsLayer::new()
        .allow_origin(cors::Any)
        .allow_methods(cors::Any)
        .allow_headers(cors::Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Account routes
        .route("/api/signup", post(signup))
        // Middleware
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer)
        // Shared state
        .with_state(state)
}

fn handle_panic(_err: Box<dyn Any + Send + 'static>) -> Response {
    tracing::error!("request handler panicked");
    server_error().into_response()
}
