use crate::features::auth::state::use_csrf;
use leptos::prelude::*;

/// Hidden `csrf_token` input mirroring the shared token, so a no-JS fallback
/// post and the server templates see the same value the requests carry.
#[component]
pub fn CsrfField() -> impl IntoView {
    let csrf = use_csrf();

    view! {
        <input
            type="hidden"
            class="csrf_token"
            name="csrf_token"
            prop:value=move || csrf.token.get()
        />
    }
}
