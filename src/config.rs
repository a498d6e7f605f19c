use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8080,
            body_limit_bytes: 1024 * 1024,
            log_format: LogFormat::Text,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            host: get("APP_HOST").unwrap_or(defaults.host),
            port: get("APP_PORT")
                .and_then(|v| v.parse::<u16>().ok())
                .unwrap_or(defaults.port),
            body_limit_bytes: get("BODY_LIMIT_BYTES")
                .and_then(|v| v.parse::<usize>().ok())
                .unwrap_or(defaults.body_limit_bytes),
            log_format: match get("LOG_FORMAT").as_deref() {
                Some("json") => LogFormat::Json,
                _ => defaults.log_format,
            },
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_map(pairs: &[(&str, &str)]) -> AppConfig {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| map.get(k).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let cfg = from_map(&[]);
        assert_eq!(cfg.bind_addr(), "0.0.0.0:8080");
        assert_eq!(cfg.body_limit_bytes, 1024 * 1024);
        assert_eq!(cfg.log_format, LogFormat::Text);
    }

    #[test]
    fn test_reads_overrides() {
        let cfg = from_map(&[
            ("APP_HOST", "127.0.0.1"),
            ("APP_PORT", "9000"),
            ("BODY_LIMIT_BYTES", "2048"),
            ("LOG_FORMAT", "json"),
        ]);
        assert_eq!(cfg.bind_addr(), "127.0.0.1:9000");
        assert_eq!(cfg.body_limit_bytes, 2048);
        assert_eq!(cfg.log_format, LogFormat::Json);
    }

    #[test]
    fn test_bad_numbers_fall_back() {
        let cfg = from_map(&[("APP_PORT", "eighty"), ("BODY_LIMIT_BYTES", "-1")]);
        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.body_limit_bytes, 1024 * 1024);
    }
}
