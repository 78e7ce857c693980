//! Process configuration, read once at startup from `.env` and the environment.

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    pub generation: GenerationSettings,
    pub render: RenderConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: String,
    pub api_url: String,
    pub model: String,
    /// `None` leaves the HTTP client's own default in place.
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    /// Reject tables of contents that break the chapter/section/subsection shape.
    pub strict_toc: bool,
    pub chat_model: String,
}

#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    pub escape_raw_html: bool,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub topic: String,
    pub cache_dir: PathBuf,
    pub toc_file: String,
}

impl LlmConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5001,
        }
    }
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            strict_toc: true,
            chat_model: DEFAULT_CHAT_MODEL.to_string(),
        }
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            topic: "Python Programming".to_string(),
            cache_dir: PathBuf::from("cache"),
            toc_file: "python_toc.json".to_string(),
        }
    }
}

impl Config {
    /// Builds a configuration with every optional setting at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            llm: LlmConfig::new(api_key),
            server: ServerConfig::default(),
            generation: GenerationSettings::default(),
            render: RenderConfig::default(),
            batch: BatchConfig::default(),
        }
    }

    /// Loads `.env` (if any) and then reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads every setting through `lookup`, so callers can supply something
    /// other than the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = get("OPENAI_API_KEY").ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;
        let mut config = Self::new(api_key);

        if let Some(url) = get("OPENAI_API_URL") {
            config.llm.api_url = url;
        }
        if let Some(model) = get("PRIMER_MODEL") {
            config.llm.model = model;
        }
        if let Some(raw) = get("PRIMER_REQUEST_TIMEOUT_SECS") {
            config.llm.request_timeout_secs = Some(parse_number("PRIMER_REQUEST_TIMEOUT_SECS", raw)?);
        }

        if let Some(host) = get("PRIMER_HOST") {
            config.server.host = host;
        }
        if let Some(raw) = get("PRIMER_PORT") {
            config.server.port = parse_number("PRIMER_PORT", raw)?;
        }

        if let Some(raw) = get("PRIMER_STRICT_TOC") {
            config.generation.strict_toc = parse_flag("PRIMER_STRICT_TOC", raw)?;
        }
        if let Some(model) = get("PRIMER_CHAT_MODEL") {
            config.generation.chat_model = model;
        }

        if let Some(raw) = get("PRIMER_ESCAPE_RAW_HTML") {
            config.render.escape_raw_html = parse_flag("PRIMER_ESCAPE_RAW_HTML", raw)?;
        }

        if let Some(topic) = get("PRIMER_BATCH_TOPIC") {
            config.batch.topic = topic;
        }
        if let Some(dir) = get("PRIMER_CACHE_DIR") {
            config.batch.cache_dir = PathBuf::from(dir);
        }
        if let Some(file) = get("PRIMER_TOC_FILE") {
            config.batch.toc_file = file;
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: String) -> Result<T, ConfigError> {
    raw.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value: raw })
}

fn parse_flag(var: &'static str, raw: String) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = Config::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("OPENAI_API_KEY")));
    }

    #[test]
    fn blank_api_key_counts_as_missing() {
        let err = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(_)));
    }

    #[test]
    fn defaults_apply() {
        let config = Config::from_lookup(lookup(&[("OPENAI_API_KEY", "sk-test")])).unwrap();
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(config.llm.model, DEFAULT_MODEL);
        assert_eq!(config.llm.api_url, DEFAULT_API_URL);
        assert!(config.llm.request_timeout_secs.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:5001");
        assert!(config.generation.strict_toc);
        assert!(!config.render.escape_raw_html);
        assert_eq!(config.batch.toc_file, "python_toc.json");
        assert_eq!(config.batch.cache_dir, PathBuf::from("cache"));
    }

    #[test]
    fn overrides_apply() {
        let config = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PRIMER_PORT", "8080"),
            ("PRIMER_STRICT_TOC", "off"),
            ("PRIMER_ESCAPE_RAW_HTML", "true"),
            ("PRIMER_BATCH_TOPIC", "Algebra"),
            ("PRIMER_REQUEST_TIMEOUT_SECS", "45"),
        ]))
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert!(!config.generation.strict_toc);
        assert!(config.render.escape_raw_html);
        assert_eq!(config.batch.topic, "Algebra");
        assert_eq!(config.llm.request_timeout_secs, Some(45));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("PRIMER_PORT", "eighty"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PRIMER_PORT", .. }));
    }
}
