//! Domain-level frontend features. Routes import these modules to keep view
//! code focused while keeping validation, submission and token handling in
//! one place.

pub(crate) mod auth;
