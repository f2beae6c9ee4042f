use std::sync::Arc;

use clean_signup_api::app::{build_router, make_signup_controller, AppState};
use clean_signup_api::config::Config;
use clean_signup_api::domain::repositories::AddAccountRepository;
use clean_signup_api::infrastructure::repositories::{
    InMemoryAccountRepository, PostgresAccountRepository,
};
use sqlx::postgres::PgPoolOptions;

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::from_env().expect("Invalid configuration");

    let repository: Arc<dyn AddAccountRepository> = match &config.database_url {
        Some(database_url) => {
            tracing::info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await
                .expect("Failed to connect to database");

            tracing::info!("Database connected successfully");
            Arc::new(PostgresAccountRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, accounts are kept in memory");
            Arc::new(InMemoryAccountRepository::new())
        }
    };

    let state = AppState {
        signup: Arc::new(make_signup_controller(repository, config.bcrypt_cost)),
    };
    let app = build_router(state);

    // Start server
    tracing::info!("Server listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app).await.expect("Server failed");
}
