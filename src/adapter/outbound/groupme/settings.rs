//! GroupMe connection configuration.

use serde::Deserialize;

/// GroupMe API and identity settings.
///
/// The access token is never read from the config file; it is filled in from
/// `GROUPME_ACCESS_TOKEN` at load time.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMeConfig {
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Group whose messages are tallied.
    #[serde(default)]
    pub group_id: String,
    /// Bot that posts replies into the group.
    #[serde(default)]
    pub bot_id: String,
    /// Account that owns the access token.
    #[serde(default)]
    pub user_id: String,
    /// Loaded from `GROUPME_ACCESS_TOKEN` at runtime.
    #[serde(skip)]
    pub access_token: String,
    #[serde(default)]
    pub http: GroupMeHttpConfig,
}

fn default_api_url() -> String {
    "https://api.groupme.com/v3".to_string()
}

impl Default for GroupMeConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            group_id: String::new(),
            bot_id: String::new(),
            user_id: String::new(),
            access_token: String::new(),
            http: GroupMeHttpConfig::default(),
        }
    }
}

/// GroupMe HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupMeHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    30_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for GroupMeHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
        }
    }
}
