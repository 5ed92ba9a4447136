//! HTTP client configuration: retry classification and additional,
//! separately configured transports for designated operations.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Handle name of the default transport in generated clients.
pub const DEFAULT_HTTP_CLIENT_HANDLE: &str = "httpClient";

/// Retry policy and transport layout for generated clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HttpClientConfiguration {
    /// Whether errors not named in either list below are retried.
    pub retry_on_unknown_error: bool,
    /// Errors that must never be retried, regardless of the default.
    pub unretriable_errors: Vec<String>,
    /// Errors that are always retried, regardless of the default.
    pub retriable_errors: Vec<String>,
    /// Named alternate transports, each scoped to specific operations.
    pub additional_clients: BTreeMap<String, AdditionalHttpClient>,
}

impl Default for HttpClientConfiguration {
    fn default() -> Self {
        Self {
            retry_on_unknown_error: true,
            unretriable_errors: Vec::new(),
            retriable_errors: Vec::new(),
            additional_clients: BTreeMap::new(),
        }
    }
}

impl HttpClientConfiguration {
    /// The transport handle the named operation routes through.
    ///
    /// Operations claimed by an additional client use that client's handle;
    /// everything else uses [`DEFAULT_HTTP_CLIENT_HANDLE`].
    pub fn client_handle_for(&self, operation_name: &str) -> &str {
        for (handle, client) in &self.additional_clients {
            if client.operations.iter().any(|op| op == operation_name) {
                return handle;
            }
        }
        DEFAULT_HTTP_CLIENT_HANDLE
    }

    /// All transport handles a generated client declares, default first.
    pub fn all_client_handles(&self) -> Vec<&str> {
        let mut handles = vec![DEFAULT_HTTP_CLIENT_HANDLE];
        handles.extend(self.additional_clients.keys().map(String::as_str));
        handles
    }
}

/// An alternate transport bound to a subset of operations — used when a few
/// operations need distinct signing or payload handling from the majority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AdditionalHttpClient {
    /// Operation names routed through this client.
    pub operations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_data_client() -> HttpClientConfiguration {
        let mut config = HttpClientConfiguration::default();
        config.additional_clients.insert(
            "dataHttpClient".to_string(),
            AdditionalHttpClient {
                operations: vec!["GetObject".to_string(), "PutObject".to_string()],
            },
        );
        config
    }

    #[test]
    fn test_client_handle_routing() {
        let config = config_with_data_client();

        assert_eq!(config.client_handle_for("GetObject"), "dataHttpClient");
        assert_eq!(config.client_handle_for("PutObject"), "dataHttpClient");
        assert_eq!(config.client_handle_for("ListBuckets"), "httpClient");
    }

    #[test]
    fn test_all_client_handles_default_first() {
        let config = config_with_data_client();
        assert_eq!(
            config.all_client_handles(),
            vec!["httpClient", "dataHttpClient"]
        );
    }

    #[test]
    fn test_deserialize_defaults() {
        let config: HttpClientConfiguration = serde_json::from_str("{}").unwrap();
        assert!(config.retry_on_unknown_error);
        assert!(config.additional_clients.is_empty());
    }

    #[test]
    fn test_deserialize_full() {
        let config: HttpClientConfiguration = serde_json::from_str(
            r#"{
                "retryOnUnknownError": false,
                "unretriableErrors": ["AccessDenied"],
                "retriableErrors": ["Throttling"],
                "additionalClients": {
                    "dataHttpClient": {"operations": ["GetObject"]}
                }
            }"#,
        )
        .unwrap();

        assert!(!config.retry_on_unknown_error);
        assert_eq!(config.unretriable_errors, vec!["AccessDenied"]);
        assert_eq!(config.retriable_errors, vec!["Throttling"]);
        assert_eq!(config.client_handle_for("GetObject"), "dataHttpClient");
    }
}
