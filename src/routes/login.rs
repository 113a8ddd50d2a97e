use crate::components::{AuthCard, CsrfField, FormError, SubmitButton, TextField};
use crate::features::auth::{
    client::BrowserTransport,
    controller::use_auth_form,
    flow::submit,
    forms::LoginInput,
    state::use_csrf,
    types::LoginRequest,
    validation::{
        EMAIL_HINT, EMAIL_MAX_CHARS, EMAIL_MIN_CHARS, EMAIL_PATTERN, PASSWORD_HINT,
        PASSWORD_MAX_CHARS, PASSWORD_MIN_CHARS, PASSWORD_PATTERN,
    },
};
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    let csrf = use_csrf();
    let form = use_auth_form();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let login_action = Action::new_local(move |request: &LoginRequest| {
        let request = request.clone();
        async move { submit(&BrowserTransport, &csrf, &request).await }
    });

    Effect::new(move |_| {
        if let Some(outcome) = login_action.value().get() {
            form.settle(outcome);
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();

        let input = LoginInput {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        if let Some(request) = form.prepare(&input) {
            login_action.dispatch(request);
        }
    };

    view! {
        <AuthCard title="Sign in">
            <FormError text=form.error_text() />
            <form on:submit=on_submit>
                <TextField
                    id="i_name"
                    name="login"
                    label="E-mail"
                    input_type="email"
                    autocomplete="email"
                    value=email
                    pattern=EMAIL_PATTERN
                    min_chars=EMAIL_MIN_CHARS
                    max_chars=EMAIL_MAX_CHARS
                    title=EMAIL_HINT
                />
                <TextField
                    id="i_password"
                    name="password"
                    label="Password"
                    input_type="password"
                    autocomplete="current-password"
                    value=password
                    pattern=PASSWORD_PATTERN
                    min_chars=PASSWORD_MIN_CHARS
                    max_chars=PASSWORD_MAX_CHARS
                    title=PASSWORD_HINT
                />
                <CsrfField />
                <SubmitButton label="Sign in" disabled=form.submitting() busy=form.submitting() />
            </form>
            <a
                href=paths::FORGOT_PASSWORD
                class="btn_reset_password mt-4 inline-block text-sm text-blue-700 hover:underline dark:text-blue-400"
            >
                "Forgot your password?"
            </a>
        </AuthCard>
    }
}
