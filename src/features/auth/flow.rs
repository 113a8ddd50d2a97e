//! The submission exchange shared by every auth form: one POST carrying the
//! form fields plus the current CSRF token, then a classification of the
//! reply. The flow never retries; after a failure the user resubmits.

use crate::{
    app_lib::AppError,
    features::auth::{
        csrf::CsrfStore,
        types::{encode_form, AuthResponse, FormRequest, SuccessAction},
    },
};
use tracing::{debug, info, warn};

/// Shown when the server rejects a submission without saying why.
pub const REJECTED_FALLBACK: &str = "Request failed.";

/// Sends an encoded form body and decodes the auth envelope.
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    async fn post_form(&self, path: &'static str, body: String) -> Result<AuthResponse, AppError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(SuccessAction),
    /// The server answered with a failure; the text is shown verbatim.
    Rejected(String),
    /// No usable answer (network, timeout, malformed body); generic text.
    Failed(String),
}

/// Posts `request` once. On a rejection that carries a fresh `csrf`, the
/// store is updated before returning so the next attempt uses it.
pub async fn submit<R, T, C>(transport: &T, csrf: &C, request: &R) -> SubmitOutcome
where
    R: FormRequest,
    T: FormTransport + ?Sized,
    C: CsrfStore + ?Sized,
{
    let body = encode_form(request, &csrf.current());
    debug!(path = R::PATH, "submitting form");

    match transport.post_form(R::PATH, body).await {
        Ok(response) if response.is_success() => {
            info!(path = R::PATH, "form accepted");
            SubmitOutcome::Succeeded(request.on_success(&response))
        }
        Ok(response) => {
            let renewed = response.csrf.filter(|token| !token.trim().is_empty());
            warn!(
                path = R::PATH,
                csrf_renewed = renewed.is_some(),
                "form rejected by server"
            );
            if let Some(token) = renewed {
                csrf.replace(token);
            }
            let message = response
                .error
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| REJECTED_FALLBACK.to_string());
            SubmitOutcome::Rejected(message)
        }
        Err(err) => {
            warn!(path = R::PATH, kind = err.kind(), error = %err, "form submission failed");
            SubmitOutcome::Failed(R::FAILURE_MESSAGE.to_string())
        }
    }
}
