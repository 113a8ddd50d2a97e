//! Asks the backend to email a reset link. The reply is identical whether or
//! not the address is registered, so the page only ever shows a neutral notice.

use crate::components::{AuthCard, CsrfField, FormError, Notice, SubmitButton, TextField};
use crate::features::auth::{
    client::BrowserTransport,
    controller::use_auth_form,
    flow::submit,
    forms::ForgotPasswordInput,
    state::use_csrf,
    types::PasswordEmailRequest,
    validation::{EMAIL_HINT, EMAIL_MAX_CHARS, EMAIL_MIN_CHARS, EMAIL_PATTERN},
};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let csrf = use_csrf();
    let form = use_auth_form();
    let email = RwSignal::new(String::new());
    let submitting = form.submitting();
    let notice = form.notice();

    let email_action = Action::new_local(move |request: &PasswordEmailRequest| {
        let request = request.clone();
        async move { submit(&BrowserTransport, &csrf, &request).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = email_action.value().get() {
            form.settle(outcome);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let input = ForgotPasswordInput {
            email: email.get_untracked(),
        };
        if let Some(request) = form.prepare(&input) {
            email_action.dispatch(request);
        }
    };

    view! {
        <AuthCard title="Reset your password">
            <FormError text=form.error_text() />
            {move || {
                notice
                    .get()
                    .map(|message| {
                        view! {
                            <div class="mb-4">
                                <Notice message=message />
                            </div>
                        }
                    })
            }}
            <form on:submit=on_submit>
                <TextField
                    id="email"
                    name="email"
                    label="Your e-mail"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    pattern=EMAIL_PATTERN
                    min_chars=EMAIL_MIN_CHARS
                    max_chars=EMAIL_MAX_CHARS
                    title=EMAIL_HINT
                    disabled=submitting
                />
                <CsrfField />
                <SubmitButton label="Send reset link" disabled=submitting busy=submitting />
            </form>
            <a
                href=paths::LOGIN
                class="mt-4 inline-block text-sm text-blue-700 hover:underline dark:text-blue-400"
            >
                "Back to sign in"
            </a>
        </AuthCard>
    }
}
