//! Labelled input bound to a signal. Constraint attributes (`pattern`,
//! `minlength`, `maxlength`) come from `features::auth::validation` so the
//! browser and the submit check agree.

use leptos::prelude::*;

#[component]
pub fn TextField(
    id: &'static str,
    name: &'static str,
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(optional)] pattern: Option<&'static str>,
    #[prop(optional)] min_chars: Option<usize>,
    #[prop(optional)] max_chars: Option<usize>,
    #[prop(optional)] title: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="form-group mb-4">
            <label class="mb-2 block text-sm font-medium text-gray-900 dark:text-white" for=id>
                {label}
            </label>
            <input
                id=id
                name=name
                type=input_type
                class="form-control block w-full rounded-lg border border-gray-300 bg-gray-50 p-2.5 text-sm text-gray-900 focus:border-blue-500 focus:ring-blue-500 disabled:opacity-70 dark:border-gray-600 dark:bg-gray-700 dark:text-white"
                autocomplete=autocomplete
                pattern=pattern
                minlength=min_chars.map(|chars| chars.to_string())
                maxlength=max_chars.map(|chars| chars.to_string())
                title=title
                required
                prop:value=move || value.get()
                disabled=move || disabled.get()
                on:input=move |event| value.set(event_target_value(&event))
            />
        </div>
    }
}
