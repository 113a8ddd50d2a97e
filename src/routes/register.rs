use crate::components::{AuthCard, CsrfField, FormError, SubmitButton, TextField};
use crate::features::auth::{
    client::BrowserTransport,
    controller::use_auth_form,
    flow::submit,
    forms::RegisterInput,
    state::use_csrf,
    types::RegisterRequest,
    validation::{
        password_mismatch, EMAIL_HINT, EMAIL_MAX_CHARS, EMAIL_MIN_CHARS, NAME_HINT,
        NAME_MAX_CHARS, NAME_MIN_CHARS, NAME_PATTERN, PASSWORD_HINT, PASSWORD_MAX_CHARS,
        PASSWORD_MIN_CHARS, PASSWORD_PATTERN,
    },
};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

/// Registration form. The repeat field is checked live; while the two
/// passwords differ the submit button stays disabled.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let csrf = use_csrf();
    let form = use_auth_form();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let repeat_password = RwSignal::new(String::new());

    let mismatch =
        Signal::derive(move || password_mismatch(&password.get(), &repeat_password.get()));
    let submitting = form.submitting();
    let submit_disabled = Signal::derive(move || submitting.get() || mismatch.get().is_some());

    let register_action = Action::new_local(move |request: &RegisterRequest| {
        let request = request.clone();
        async move { submit(&BrowserTransport, &csrf, &request).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = register_action.value().get() {
            form.settle(outcome);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let input = RegisterInput {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            repeat_password: repeat_password.get_untracked(),
        };
        if let Some(request) = form.prepare(&input) {
            register_action.dispatch(request);
        }
    };

    view! {
        <AuthCard title="Create account">
            <FormError text=form.error_text() />
            <form on:submit=on_submit>
                <TextField
                    id="name"
                    name="name"
                    label="Your name"
                    autocomplete="name"
                    value=name
                    pattern=NAME_PATTERN
                    min_chars=NAME_MIN_CHARS
                    max_chars=NAME_MAX_CHARS
                    title=NAME_HINT
                    disabled=submitting
                />
                <TextField
                    id="email"
                    name="email"
                    label="Your e-mail"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    min_chars=EMAIL_MIN_CHARS
                    max_chars=EMAIL_MAX_CHARS
                    title=EMAIL_HINT
                    disabled=submitting
                />
                <TextField
                    id="password"
                    name="password"
                    label="Choose a password (10-72 characters)"
                    input_type="password"
                    autocomplete="new-password"
                    value=password
                    pattern=PASSWORD_PATTERN
                    min_chars=PASSWORD_MIN_CHARS
                    max_chars=PASSWORD_MAX_CHARS
                    title=PASSWORD_HINT
                    disabled=submitting
                />
                <TextField
                    id="repeat_password"
                    name="repeat_password"
                    label="Repeat the password"
                    input_type="password"
                    autocomplete="new-password"
                    value=repeat_password
                    pattern=PASSWORD_PATTERN
                    min_chars=PASSWORD_MIN_CHARS
                    max_chars=PASSWORD_MAX_CHARS
                    title=PASSWORD_HINT
                    disabled=submitting
                />
                {move || {
                    mismatch
                        .get()
                        .map(|message| {
                            view! { <p class="-mt-2 mb-4 text-xs text-red-600">{message}</p> }
                        })
                }}
                <CsrfField />
                <SubmitButton label="Register" disabled=submit_disabled busy=submitting />
            </form>
        </AuthCard>
    }
}
