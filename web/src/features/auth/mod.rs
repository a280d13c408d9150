//! Auth feature module covering login, logout, and session hydration over
//! the cookie the server sets. It keeps request plumbing out of the UI and
//! must avoid logging credentials.

#[cfg(target_arch = "wasm32")]
pub(crate) mod client;
pub(crate) mod types;
