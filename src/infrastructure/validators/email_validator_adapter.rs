use validator::ValidateEmail;

use crate::api::protocols::EmailValidator;
use crate::domain::errors::Result;

/// [`EmailValidator`] delegating to the `validator` crate's HTML5 email check
#[derive(Debug, Default, Clone, Copy)]
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> Result<bool> {
        Ok(email.to_owned().validate_email())
    }
}
