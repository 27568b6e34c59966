use gloo::console::error;
use gloo::net::http::Request;
use gloo::storage::{LocalStorage, Storage};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct FrontendConfig {
    pub api_url: String,
}

const API_URL: &str = "api_url";

/// Base URL used when /config/config.json is missing or unreadable.
pub const DEFAULT_API_URL: &str = "https://intellisurgetechnologies.onrender.com";

pub async fn load_config() {
    let response = match Request::get("/config/config.json").send().await {
        Ok(response) => response,
        Err(e) => {
            error!(format!("Failed to fetch config, using defaults: {e:?}"));
            return;
        }
    };

    match response.json::<FrontendConfig>().await {
        Ok(config) => {
            LocalStorage::set(API_URL, config.api_url)
                .expect("failed to write api_url to localStorage");
        }
        Err(e) => {
            error!(format!("Failed to parse config.json, using defaults: {e:?}"));
        }
    }
}

/// API base URL: cached config value, or the production default.
pub fn api_base() -> String {
    LocalStorage::get::<String>(API_URL)
        .ok()
        .filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_owned())
}
