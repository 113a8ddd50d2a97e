//! CSRF token context for the frontend. The provider seeds the token once from
//! the server-rendered page and shares it with every form through Leptos
//! context; forms replace it when a failed submission returns a fresh one.

use crate::features::auth::csrf::CsrfStore;
use leptos::prelude::*;
use tracing::{debug, warn};

#[derive(Clone, Copy)]
/// CSRF token shared through Leptos.
pub struct CsrfContext {
    pub token: RwSignal<String>,
}

impl CsrfContext {
    fn new(token: String) -> Self {
        Self {
            token: RwSignal::new(token),
        }
    }
}

impl CsrfStore for CsrfContext {
    fn current(&self) -> String {
        self.token.try_get_untracked().unwrap_or_default()
    }

    fn replace(&self, token: String) {
        if self.token.try_set(token).is_some() {
            debug!("csrf context disposed before the token could be replaced");
        }
    }
}

/// Provides the CSRF context, seeded from the page markup.
#[component]
pub fn CsrfProvider(children: Children) -> impl IntoView {
    let token = initial_token().unwrap_or_default();
    if token.is_empty() {
        warn!("page carries no csrf token; the server will reject submissions until it issues one");
    }
    provide_context(CsrfContext::new(token));

    view! { {children()} }
}

/// Returns the current CSRF context or a fallback seeded from the page.
pub fn use_csrf() -> CsrfContext {
    use_context::<CsrfContext>()
        .unwrap_or_else(|| CsrfContext::new(initial_token().unwrap_or_default()))
}

/// Reads `<meta name="csrf-token">`, falling back to the first hidden
/// `input.csrf_token` the server template rendered.
fn initial_token() -> Option<String> {
    let document = web_sys::window()?.document()?;

    let from_meta = document
        .query_selector(r#"meta[name="csrf-token"]"#)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));
    let from_input = || {
        document
            .query_selector("input.csrf_token")
            .ok()
            .flatten()
            .and_then(|input| input.get_attribute("value"))
    };

    from_meta
        .filter(|token| !token.trim().is_empty())
        .or_else(from_input)
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}
