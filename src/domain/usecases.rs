use async_trait::async_trait;

use crate::domain::account::{Account, AddAccountInput};
use crate::domain::errors::Result;

/// Use case creating a new account from validated input
#[async_trait]
pub trait AddAccount: Send + Sync {
    /// Create the account and return it as stored
    async fn add(&self, input: AddAccountInput) -> Result<Account>;
}
