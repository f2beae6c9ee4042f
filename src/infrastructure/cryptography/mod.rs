// Password hashing adapters

pub mod bcrypt_adapter;

pub use bcrypt_adapter::BcryptAdapter;
