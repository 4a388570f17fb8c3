use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub gemini_api_key: Option<SecretString>,
    pub gemini_model: String,
    pub yahoo_client_id: Option<String>,
    pub web_server_host: String,
    pub web_server_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: env::var("GEMINI_API_KEY").ok().map(SecretString::from),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            yahoo_client_id: env::var("YAHOO_CLIENT_ID").ok(),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4000),
        }
    }

    /// Logs which optional upstream credentials are absent. A missing key
    /// disables only the endpoint that needs it, so startup continues.
    pub fn log_startup_warnings(&self) {
        if self.gemini_api_key.is_none() {
            log::error!("Missing GEMINI_API_KEY: /api/chat will answer 500");
        }
        if self.yahoo_client_id.is_none() {
            log::warn!("Missing YAHOO_CLIENT_ID: /api/ruby will answer 500");
        }
    }

    pub fn test_config() -> Self {
        Self {
            gemini_api_key: Some(SecretString::from("test_gemini_key".to_string())),
            gemini_model: "gemini-2.5-flash".to_string(),
            yahoo_client_id: Some("test_yahoo_client_id".to_string()),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 4000,
        }
    }
}
