use leptos::prelude::*;

/// Form submit button. While `busy`, it shows a small spinner next to the label.
#[component]
pub fn SubmitButton(
    label: &'static str,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <button
            type="submit"
            class="confirm-auth inline-flex w-full items-center justify-center gap-2 rounded-lg bg-blue-700 px-5 py-2.5 text-center text-sm font-medium text-white hover:bg-blue-800 focus:outline-none focus:ring-4 focus:ring-blue-300 dark:bg-blue-600 dark:hover:bg-blue-700 dark:focus:ring-blue-800"
            class:cursor-not-allowed=move || disabled.get()
            class:opacity-70=move || disabled.get()
            disabled=move || disabled.get()
        >
            {move || {
                busy.get()
                    .then_some(view! {
                        <span
                            class="inline-block h-4 w-4 animate-spin rounded-full border-2 border-blue-200 border-t-white"
                            role="status"
                            aria-label="Sending"
                        ></span>
                    })
            }}
            {label}
        </button>
    }
}
