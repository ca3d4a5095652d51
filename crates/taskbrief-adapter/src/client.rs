/*
[INPUT]:  HTTP configuration (timeouts)
[OUTPUT]: Configured reqwest client shared by both adapters
[POS]:    HTTP layer - client construction
[UPDATE]: When adding connection options or changing client behavior
*/

use crate::error::Result;
use reqwest::Client;
use std::time::Duration;

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Build a reqwest client from the given configuration
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_build_client() {
        let config = ClientConfig::default();
        assert!(build_http_client(&config).is_ok());
    }
}
