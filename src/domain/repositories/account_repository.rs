use async_trait::async_trait;

use crate::domain::account::{Account, AddAccountInput};
use crate::domain::errors::Result;

/// Persistence port for new accounts
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Store the account and return the full record, generated id included.
    ///
    /// `input.password` is expected to be hashed already.
    async fn add(&self, input: AddAccountInput) -> Result<Account>;
}
