//! HTTP client initialization.

use reqwest::Client;

use crate::config::Config;
use crate::error_handling::InitializationError;

/// Builds the shared HTTP client used for all API requests.
///
/// The client carries the configured per-request timeout and a
/// crate-identifying User-Agent. Both collector passes share this one
/// client, so connections to the API host are pooled across the run.
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if the client cannot be
/// constructed.
pub fn init_client(config: &Config) -> Result<Client, InitializationError> {
    let client = Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent.clone())
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_client_with_defaults() {
        let config = Config::default();
        assert!(init_client(&config).is_ok());
    }

    #[test]
    fn test_init_client_custom_timeout() {
        let config = Config {
            timeout_seconds: 1,
            ..Default::default()
        };
        assert!(init_client(&config).is_ok());
    }
}
