//! Signup form submitted at the end of the flow.

use amb_shared::validation::first_blank;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// The four text fields of the signup form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupForm {
    pub nickname: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(
        nickname: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            nickname: nickname.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Checks that every field is filled and that both passwords agree
    ///
    /// Blank fields are reported before a password mismatch. Passwords are
    /// compared exactly, surrounding whitespace included.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = [
            ("nickname", self.nickname.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.as_str()),
            ("confirmPassword", self.confirm_password.as_str()),
        ];
        if let Some(field) = first_blank(&fields) {
            return Err(ValidationError::MissingField {
                field: field.to_string(),
            });
        }

        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        Ok(())
    }
}
