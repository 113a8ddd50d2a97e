use leptos::prelude::*;

/// Centered card wrapping one auth form.
#[component]
pub fn AuthCard(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div id="page-auth" class="flex min-h-[70vh] items-center justify-center px-6 py-10">
            <div
                id="form_auth"
                class="form-auth w-full max-w-md rounded-2xl border border-slate-200 bg-white/90 p-6 shadow-sm sm:p-8 dark:border-slate-700 dark:bg-slate-900"
            >
                <h1 class="mb-4 text-2xl font-semibold text-slate-900 dark:text-white">{title}</h1>
                {children()}
            </div>
        </div>
    }
}
