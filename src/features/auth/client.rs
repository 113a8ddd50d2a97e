//! Browser transport for the auth forms. Every endpoint shares the same
//! envelope, so one transport serves all of them.

use crate::{
    app_lib::{post_form, AppError},
    features::auth::{flow::FormTransport, types::AuthResponse},
};

#[derive(Clone, Copy, Default)]
pub struct BrowserTransport;

impl FormTransport for BrowserTransport {
    async fn post_form(&self, path: &'static str, body: String) -> Result<AuthResponse, AppError> {
        post_form(path, body).await
    }
}
