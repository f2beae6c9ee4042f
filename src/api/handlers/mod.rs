pub mod health;
pub mod signup;
