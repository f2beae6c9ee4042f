// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_account_repository;
pub mod postgres_account_repository;

pub use in_memory_account_repository::InMemoryAccountRepository;
pub use postgres_account_repository::PostgresAccountRepository;
