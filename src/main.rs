// Only the browser build mounts the UI; native builds exist to run the unit
// tests of the platform-independent modules.
#![cfg_attr(not(target_arch = "wasm32"), allow(dead_code, unused_imports))]

#[cfg(target_arch = "wasm32")]
mod app;
#[path = "lib/mod.rs"]
mod app_lib;
#[cfg(target_arch = "wasm32")]
mod components;
mod features;
mod routes;

#[cfg(target_arch = "wasm32")]
pub fn main() {
    use crate::app::App;
    use crate::app_lib::{build_info, config::AppConfig, telemetry};
    use leptos::prelude::mount_to_body;

    let config = AppConfig::load();
    telemetry::init(config.log_level);
    tracing::info!(
        version = build_info::PKG_VERSION,
        commit = build_info::GIT_COMMIT_HASH,
        "mounting auth pages"
    );

    mount_to_body(App);
}

#[cfg(not(target_arch = "wasm32"))]
pub fn main() {}
