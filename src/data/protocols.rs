use async_trait::async_trait;

use crate::domain::errors::Result;

/// One-way transformation of a secret into its stored representation.
///
/// Output may be salted, so two calls with the same value are allowed to
/// differ.
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> Result<String>;
}
