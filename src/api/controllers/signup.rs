use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::api::errors::HttpError;
use crate::api::helpers::{created, from_error};
use crate::api::protocols::{Controller, EmailValidator, HttpRequest, HttpResponse};
use crate::domain::account::{Account, AddAccountInput};
use crate::domain::errors::DomainError;
use crate::domain::usecases::AddAccount;

/// Fields a sign up body must carry, in the order they are checked
pub const REQUIRED_FIELDS: [&str; 4] = ["name", "email", "password", "passwordConfirmation"];

/// Controller for account sign up
///
/// Checks, in order: every required field is present, the password
/// confirmation matches, the email is well formed. Only then is the
/// account created. Collaborator failures become a 500 and are logged.
pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(
        email_validator: Arc<dyn EmailValidator>,
        add_account: Arc<dyn AddAccount>,
    ) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }

    async fn sign_up(&self, body: &Value) -> Result<Account, HttpError> {
        let input = self.validate(body)?;

        self.add_account.add(input).await.map_err(server_failure)
    }

    /// Turns the untyped body into an [`AddAccountInput`]
    fn validate(&self, body: &Value) -> Result<AddAccountInput, HttpError> {
        if let Some(field) = REQUIRED_FIELDS
            .into_iter()
            .find(|field| is_falsy(body.get(*field)))
        {
            return Err(HttpError::missing_param(field));
        }

        let name = string_field(body, "name")?;
        let email = string_field(body, "email")?;
        let password = string_field(body, "password")?;
        let password_confirmation = string_field(body, "passwordConfirmation")?;

        if password != password_confirmation {
            return Err(HttpError::invalid_param("passwordConfirmation"));
        }

        if !self.email_validator.is_valid(email).map_err(server_failure)? {
            return Err(HttpError::invalid_param("email"));
        }

        Ok(AddAccountInput {
            name: name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

#[async_trait]
impl Controller for SignUpController {
    async fn handle(&self, request: HttpRequest) -> HttpResponse {
        match self.sign_up(&request.body).await {
            Ok(account) => created(account),
            Err(error) => from_error(error),
        }
    }
}

fn server_failure(error: DomainError) -> HttpError {
    tracing::error!(error = %error, "sign up failed");
    HttpError::Server
}

/// Absent, `null`, `false`, `0` and `""` all count as not provided
fn is_falsy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(_) => false,
    }
}

fn string_field<'a>(body: &'a Value, field: &str) -> Result<&'a str, HttpError> {
    body.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| HttpError::invalid_param(field))
}
