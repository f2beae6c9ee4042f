pub mod db_add_account;

pub use db_add_account::DbAddAccount;
