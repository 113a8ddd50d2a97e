//! Message banners for auth pages. Messages must be safe to render and never
//! include secrets or tokens.

use leptos::prelude::*;

/// Success banner for notices that stay on the page.
#[component]
pub fn Notice(message: &'static str) -> impl IntoView {
    view! {
        <div
            class="rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700 dark:border-emerald-400 dark:bg-emerald-900/30 dark:text-emerald-200"
            role="status"
        >
            {message}
        </div>
    }
}

/// Transient error line above a form. It always occupies a line, showing a
/// non-breaking space when there is nothing to report.
#[component]
pub fn FormError(#[prop(into)] text: Signal<String>) -> impl IntoView {
    view! {
        <div
            class="jsError mx-2 mb-3 min-h-[1rem] text-center text-xs text-red-600 dark:text-red-400"
            role="alert"
            aria-live="polite"
        >
            {move || text.get()}
        </div>
    }
}
