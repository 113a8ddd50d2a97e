//! Fallback for paths the auth bundle does not serve.

use crate::components::AuthCard;
use crate::routes::paths;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AuthCard title="Page not found">
            <p class="mb-6 text-sm text-gray-500 dark:text-gray-400">
                "The page you requested does not exist."
            </p>
            <a
                href=paths::LOGIN
                class="inline-flex items-center rounded-lg bg-blue-700 px-5 py-2.5 text-sm font-medium text-white hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700"
            >
                "Go to sign in"
            </a>
        </AuthCard>
    }
}
