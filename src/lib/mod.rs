//! Shared frontend utilities for configuration, errors, the form HTTP helper,
//! logging, and build metadata.
//!
//! ## Form Submission Contract
//!
//! Every auth form POSTs an `application/x-www-form-urlencoded` body that always
//! carries `csrf_token`, and the backend answers with one JSON envelope:
//! `{result, url?, error?, csrf?}`. `result == 1` is success; anything else is a
//! failure whose `error` is shown verbatim and whose `csrf` (when present)
//! replaces the token used by the next attempt.
//!
//! These helpers do not store secrets, but callers must still avoid logging
//! form bodies.

pub(crate) mod api;
pub(crate) mod build_info;
pub(crate) mod config;
pub(crate) mod errors;
#[cfg(target_arch = "wasm32")]
pub(crate) mod telemetry;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::post_form;
pub(crate) use errors::AppError;
