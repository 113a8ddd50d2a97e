pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod forgot_password;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod register;
#[cfg(target_arch = "wasm32")]
mod reset_password;

#[cfg(target_arch = "wasm32")]
pub(crate) use pages::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod pages {
    use super::{
        forgot_password::ForgotPasswordPage, login::LoginPage, not_found::NotFoundPage,
        register::RegisterPage, reset_password::ResetPasswordPage,
    };
    use leptos::prelude::*;
    use leptos_router::components::{Route, Routes};
    use leptos_router::path;

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/register") view=RegisterPage />
                <Route path=path!("/forgot/password") view=ForgotPasswordPage />
                <Route path=path!("/password/reset/:token") view=ResetPasswordPage />
                <Route path=path!("/*any") view=NotFoundPage />
            </Routes>
        }
    }
}
