// Password hashing with bcrypt
// Hashing is CPU bound, so it runs on the blocking thread pool

use async_trait::async_trait;
use bcrypt::hash;

use crate::data::protocols::Encrypter;
use crate::domain::errors::{DomainError, Result};

/// [`Encrypter`] producing salted bcrypt hashes
///
/// # Example
/// ```
/// use clean_signup_api::data::protocols::Encrypter;
/// use clean_signup_api::infrastructure::cryptography::BcryptAdapter;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let hashed = BcryptAdapter::new(4)
///     .encrypt("my_password")
///     .await
///     .expect("valid hash");
/// assert!(bcrypt::verify("my_password", &hashed).unwrap());
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BcryptAdapter {
    cost: u32,
}

impl BcryptAdapter {
    /// Creates an adapter hashing with the given bcrypt cost (4 to 31)
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }
}

#[async_trait]
impl Encrypter for BcryptAdapter {
    async fn encrypt(&self, value: &str) -> Result<String> {
        let value = value.to_owned();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || hash(value, cost))
            .await
            .map_err(|e| DomainError::Encryption(e.to_string()))?
            .map_err(|e| DomainError::Encryption(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bcrypt::verify;

    const TEST_COST: u32 = 4;

    #[tokio::test]
    async fn hash_verifies_against_plaintext() {
        let password = "test_password_123";
        let hashed = BcryptAdapter::new(TEST_COST)
            .encrypt(password)
            .await
            .expect("valid hash");

        assert_ne!(hashed, password);
        assert!(verify(password, &hashed).expect("valid verification"));
        assert!(!verify("wrong_password", &hashed).expect("valid verification"));
    }

    #[tokio::test]
    async fn hash_different_outputs() {
        let sut = BcryptAdapter::new(TEST_COST);
        let hash1 = sut.encrypt("test_password_123").await.expect("valid hash");
        let hash2 = sut.encrypt("test_password_123").await.expect("valid hash");

        // Salted
        assert_ne!(hash1, hash2);
    }

    #[tokio::test]
    async fn invalid_cost_fails() {
        let result = BcryptAdapter::new(2).encrypt("test_password_123").await;

        assert!(matches!(result, Err(DomainError::Encryption(_))));
    }
}
