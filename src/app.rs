use crate::features::auth::state::CsrfProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <CsrfProvider>
            <Router>
                <AppRoutes />
            </Router>
        </CsrfProvider>
    }
}
