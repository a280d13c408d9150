//! Build-time configuration for the API endpoint. The default empty base
//! keeps requests relative so the dev server can proxy them; deployments
//! that serve the app and API from different origins set the base URL at
//! build time.

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_base_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        let api_base_url = option_env!("AGORA_API_BASE_URL").unwrap_or("");
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }
}

/// Joins a base URL and a path without doubling or dropping slashes.
/// An empty base leaves the path relative.
pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}
