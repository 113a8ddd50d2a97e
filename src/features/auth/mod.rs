//! Auth feature module: the login, registration, password reset and
//! forgot-password submissions. Everything except the Leptos glue is
//! platform-independent and unit-tested natively. This module handles
//! passwords and CSRF tokens and must never log either.
//!
//! Flow Overview: a page collects `forms::*Input`, `status::FormStatus`
//! validates and locks the form, `flow::submit` performs the single POST, and
//! the settlement either navigates away or shows the error until the
//! `timer::ResetTimer` clears it.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
#[cfg(target_arch = "wasm32")]
pub(crate) mod controller;
pub(crate) mod csrf;
pub(crate) mod flow;
pub(crate) mod forms;
#[cfg(target_arch = "wasm32")]
pub(crate) mod state;
pub(crate) mod status;
#[cfg(test)]
mod testing;
pub(crate) mod timer;
pub(crate) mod types;
pub(crate) mod validation;
