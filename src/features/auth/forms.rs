//! Raw field values captured from each page, and their conversion into
//! requests. Conversion is where local validation happens: a value that fails
//! here never reaches the network. Inputs holding passwords do not derive
//! `Debug`.

use crate::features::auth::{
    types::{
        FormRequest, LoginRequest, PasswordChangeRequest, PasswordEmailRequest, RegisterRequest,
    },
    validation::{
        ensure_passwords_match, validate_email, validate_name, validate_password,
    },
};
use secrecy::SecretString;

/// Field values of one form, as typed.
pub trait FormInput {
    type Request: FormRequest;

    /// Builds the request or returns the message to show instead of submitting.
    fn validate(&self) -> Result<Self::Request, &'static str>;
}

#[derive(Clone, Default)]
pub struct LoginInput {
    pub email: String,
    pub password: String,
}

impl FormInput for LoginInput {
    type Request = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, &'static str> {
        let email = self.email.trim();
        validate_email(email)?;
        validate_password(&self.password)?;

        Ok(LoginRequest {
            login: email.to_string(),
            password: SecretString::from(self.password.clone()),
        })
    }
}

#[derive(Clone, Default)]
pub struct RegisterInput {
    pub name: String,
    pub email: String,
    pub password: String,
    pub repeat_password: String,
}

impl FormInput for RegisterInput {
    type Request = RegisterRequest;

    fn validate(&self) -> Result<RegisterRequest, &'static str> {
        ensure_passwords_match(&self.password, &self.repeat_password)?;
        let name = self.name.trim();
        let email = self.email.trim();
        validate_name(name)?;
        validate_email(email)?;
        validate_password(&self.password)?;

        Ok(RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: SecretString::from(self.password.clone()),
        })
    }
}

#[derive(Clone, Default)]
pub struct ResetPasswordInput {
    pub email: String,
    pub password: String,
    pub repeat_password: String,
    pub reset_token: Option<String>,
}

impl FormInput for ResetPasswordInput {
    type Request = PasswordChangeRequest;

    fn validate(&self) -> Result<PasswordChangeRequest, &'static str> {
        ensure_passwords_match(&self.password, &self.repeat_password)?;
        let email = self.email.trim();
        validate_email(email)?;
        validate_password(&self.password)?;

        Ok(PasswordChangeRequest {
            email: email.to_string(),
            password: SecretString::from(self.password.clone()),
            reset_token: self
                .reset_token
                .as_deref()
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct ForgotPasswordInput {
    pub email: String,
}

impl FormInput for ForgotPasswordInput {
    type Request = PasswordEmailRequest;

    fn validate(&self) -> Result<PasswordEmailRequest, &'static str> {
        let email = self.email.trim();
        validate_email(email)?;

        Ok(PasswordEmailRequest {
            email: email.to_string(),
        })
    }
}
