//! Shared frontend utilities for API access, configuration, and errors.
//! Feature clients go through these helpers so network behavior stays
//! consistent across routes; nothing here handles tokens directly, the
//! session lives in an `HttpOnly` cookie the browser attaches itself.

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;

#[cfg(target_arch = "wasm32")]
pub(crate) use api::{
    get_json_with_credentials, post_empty_with_credentials, post_json_with_credentials,
};
#[cfg(target_arch = "wasm32")]
pub(crate) use errors::AppError;
