use serde::Serialize;

/// Persisted account as returned by the repository.
///
/// # Invariants
/// - `id` is assigned once, by the repository that stored the account
/// - `password` holds the hasher output, never the submitted plaintext
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Data needed to create an account.
///
/// Built by the sign up controller once the request passed validation. The
/// usecase hands a copy with the hashed password down to the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}
