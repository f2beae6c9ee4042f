use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::account::{Account, AddAccountInput};
use crate::domain::errors::Result;
use crate::domain::repositories::AddAccountRepository;

/// Process-local account store
///
/// Used when no database is configured. Accounts are lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: RwLock<HashMap<String, Account>>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an account by its id
    pub async fn find_by_id(&self, id: &str) -> Option<Account> {
        self.accounts.read().await.get(id).cloned()
    }

    /// Number of stored accounts
    pub async fn len(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.accounts.read().await.is_empty()
    }
}

#[async_trait]
impl AddAccountRepository for InMemoryAccountRepository {
    async fn add(&self, input: AddAccountInput) -> Result<Account> {
        let mut accounts = self.accounts.write().await;

        loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = accounts.entry(id.clone()) {
                let account = Account {
                    id,
                    name: input.name,
                    email: input.email,
                    password: input.password,
                };
                slot.insert(account.clone());
                return Ok(account);
            }
        }
    }
}
