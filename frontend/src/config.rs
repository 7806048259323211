//! Application configuration.
//!
//! Centralized configuration for the RAG Load frontend. The UI is served
//! by the same origin that relays `/api/process-files`, so the API base is
//! empty and requests stay relative.

use ragload::PROCESS_ENDPOINT;

/// Backend API base URL.
///
/// Empty: requests go to the origin that served the page.
pub const API_BASE_URL: &str = "";

/// Application name, shown in the page title and hero.
pub const APP_NAME: &str = "RAG File Processor";

/// Full URL of the processing endpoint.
pub fn process_url() -> String {
    format!("{}{}", API_BASE_URL, PROCESS_ENDPOINT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_url_is_relative() {
        assert_eq!(process_url(), "/api/process-files");
    }
}
