//! Request and response types for the auth form endpoints. Requests are sent
//! as `application/x-www-form-urlencoded` bodies; responses share one JSON
//! envelope. Password fields are wrapped in `SecretString` so they never show
//! up in `Debug` output or logs.

use crate::routes::paths;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::Value;
use url::form_urlencoded;

/// Name of the CSRF field; always the last pair of every form body.
pub const CSRF_FIELD: &str = "csrf_token";

/// What the page does after the server accepted a submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SuccessAction {
    /// Full page load to the given URL.
    Redirect(String),
    /// Show a blocking notification, then load `target`.
    NotifyThenRedirect {
        notice: &'static str,
        target: &'static str,
    },
    /// Show an inline notification and stay on the page.
    Notify(&'static str),
}

/// A form that can be posted to one auth endpoint.
pub trait FormRequest {
    /// Endpoint path, relative to the configured base URL.
    const PATH: &'static str;
    /// Message shown when the request never produced a usable response.
    const FAILURE_MESSAGE: &'static str;

    /// Ordered field pairs, excluding the CSRF token.
    fn fields(&self) -> Vec<(&'static str, &str)>;

    fn on_success(&self, response: &AuthResponse) -> SuccessAction;
}

/// Encodes the request fields followed by the CSRF token.
pub fn encode_form<R: FormRequest + ?Sized>(request: &R, csrf_token: &str) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in request.fields() {
        serializer.append_pair(name, value);
    }
    serializer.append_pair(CSRF_FIELD, csrf_token);
    serializer.finish()
}

/// JSON envelope returned by every auth endpoint.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct AuthResponse {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub csrf: Option<String>,
}

impl AuthResponse {
    /// Only a numeric `1` counts as success; a string `"1"`, `true`, or a
    /// missing `result` are all failures.
    pub fn is_success(&self) -> bool {
        self.result
            .as_ref()
            .and_then(Value::as_f64)
            .is_some_and(|value| value == 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct LoginRequest {
    pub login: String,
    pub password: SecretString,
}

impl FormRequest for LoginRequest {
    const PATH: &'static str = "/auth/login";
    const FAILURE_MESSAGE: &'static str = "Network or server error. Please try again.";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("login", self.login.as_str()),
            ("password", self.password.expose_secret()),
        ]
    }

    fn on_success(&self, response: &AuthResponse) -> SuccessAction {
        let target = response
            .url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(paths::MAIN);
        SuccessAction::Redirect(target.to_string())
    }
}

#[derive(Clone, Debug)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: SecretString,
}

impl FormRequest for RegisterRequest {
    const PATH: &'static str = "/site/register";
    const FAILURE_MESSAGE: &'static str = "Could not complete registration. Please try again.";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("password", self.password.expose_secret()),
        ]
    }

    fn on_success(&self, _response: &AuthResponse) -> SuccessAction {
        SuccessAction::NotifyThenRedirect {
            notice: "Registration complete. You can sign in now.",
            target: paths::LOGIN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PasswordChangeRequest {
    pub email: String,
    pub password: SecretString,
    /// Reset token from the emailed link; absent when the page was opened directly.
    pub reset_token: Option<String>,
}

impl FormRequest for PasswordChangeRequest {
    const PATH: &'static str = "/password/change";
    const FAILURE_MESSAGE: &'static str = "Could not change the password. Please try again.";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![
            ("email", self.email.as_str()),
            ("password", self.password.expose_secret()),
        ];
        if let Some(token) = self.reset_token.as_deref() {
            fields.push(("token", token));
        }
        fields
    }

    fn on_success(&self, _response: &AuthResponse) -> SuccessAction {
        SuccessAction::NotifyThenRedirect {
            notice: "Password changed. Sign in with your new password.",
            target: paths::LOGIN,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PasswordEmailRequest {
    pub email: String,
}

impl FormRequest for PasswordEmailRequest {
    const PATH: &'static str = "/password/email";
    const FAILURE_MESSAGE: &'static str = "Could not send the reset email. Please try again.";

    fn fields(&self) -> Vec<(&'static str, &str)> {
        vec![("email", self.email.as_str())]
    }

    fn on_success(&self, _response: &AuthResponse) -> SuccessAction {
        SuccessAction::Notify("If the address is registered, a reset link is on its way.")
    }
}
