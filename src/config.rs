use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-preview-09-2025";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub templates_dir: PathBuf,
    pub bind_addr: SocketAddr,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = match var("BIND_ADDR") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                log::warn!("Invalid BIND_ADDR {:?} ({}), using {}", raw, e, DEFAULT_BIND_ADDR);
                default_bind_addr()
            }),
            None => default_bind_addr(),
        };

        Self {
            api_key: var("GEMINI_API_KEY"),
            model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.into()),
            api_base: var("GEMINI_API_BASE").unwrap_or_else(|| DEFAULT_API_BASE.into()),
            data_dir: var("DATA_DIR").unwrap_or_else(|| "Data".into()).into(),
            static_dir: var("STATIC_DIR").unwrap_or_else(|| "static".into()).into(),
            templates_dir: var("TEMPLATES_DIR").unwrap_or_else(|| "templates".into()).into(),
            bind_addr,
        }
    }

    pub fn upload_dir(&self) -> PathBuf {
        self.static_dir.join("uploads")
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 5000))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = config_from(&[]);
        assert!(config.api_key.is_none());
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.data_dir, PathBuf::from("Data"));
        assert_eq!(config.upload_dir(), PathBuf::from("static").join("uploads"));
        assert_eq!(config.bind_addr.port(), 5000);
    }

    #[test]
    fn empty_api_key_counts_as_missing() {
        let config = config_from(&[("GEMINI_API_KEY", "  ")]);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn bad_bind_addr_falls_back() {
        let config = config_from(&[("BIND_ADDR", "not-an-address"), ("DATA_DIR", "/srv/jrai")]);
        assert_eq!(config.bind_addr, default_bind_addr());
        assert_eq!(config.data_dir, PathBuf::from("/srv/jrai"));
    }
}
