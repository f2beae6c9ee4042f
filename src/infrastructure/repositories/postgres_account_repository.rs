use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::account::{Account, AddAccountInput};
use crate::domain::errors::{DomainError, Result};
use crate::domain::repositories::AddAccountRepository;

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    password: String,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            email: row.email,
            password: row.password,
        }
    }
}

/// PostgreSQL implementation of AddAccountRepository
///
/// Ids are generated here as UUID v4; the primary key on `accounts.id`
/// rejects the (unlikely) duplicate instead of overwriting a row.
pub struct PostgresAccountRepository {
    pool: PgPool,
}

impl PostgresAccountRepository {
    /// Creates a new PostgresAccountRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AddAccountRepository for PostgresAccountRepository {
    async fn add(&self, input: AddAccountInput) -> Result<Account> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            INSERT INTO accounts (id, name, email, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email, password
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(input.name)
        .bind(input.email)
        .bind(input.password)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::Repository(format!("Failed to create account: {}", e)))?;

        Ok(row.into())
    }
}
