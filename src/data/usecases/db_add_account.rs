use std::sync::Arc;

use async_trait::async_trait;

use crate::data::protocols::Encrypter;
use crate::domain::account::{Account, AddAccountInput};
use crate::domain::errors::Result;
use crate::domain::repositories::AddAccountRepository;
use crate::domain::usecases::AddAccount;

/// [`AddAccount`] backed by an [`Encrypter`] and an [`AddAccountRepository`].
///
/// Errors from either collaborator are returned as is; turning them into a
/// response is the controller's job.
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    add_account_repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(
        encrypter: Arc<dyn Encrypter>,
        add_account_repository: Arc<dyn AddAccountRepository>,
    ) -> Self {
        Self {
            encrypter,
            add_account_repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    async fn add(&self, input: AddAccountInput) -> Result<Account> {
        let hashed_password = self.encrypter.encrypt(&input.password).await?;

        let account = self
            .add_account_repository
            .add(AddAccountInput {
                password: hashed_password,
                ..input
            })
            .await?;

        tracing::debug!(account_id = %account.id, "account created");

        Ok(account)
    }
}
