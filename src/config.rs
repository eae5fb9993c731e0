//! Runtime settings read from environment variables.
//!
//! | Variable     | Default                |
//! |--------------|------------------------|
//! | `HOST`       | `0.0.0.0`              |
//! | `PORT`       | `3000`                 |
//! | `DATA_FILE`  | `tournament-data.json` |
//! | `STATIC_DIR` | `public`               |
//! | `UPLOAD_DIR` | `uploads`              |

use std::path::PathBuf;

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_data_file() -> PathBuf {
    PathBuf::from("tournament-data.json")
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("public")
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

/// Where to listen and where the document, front-end pages and transient uploads live.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub data_file: PathBuf,
    pub static_dir: PathBuf,
    pub upload_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: default_data_file(),
            static_dir: default_static_dir(),
            upload_dir: default_upload_dir(),
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset or empty values fall back to defaults; so does an unparsable `PORT`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            host: get("HOST").unwrap_or_else(default_host),
            port: get("PORT")
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or_else(default_port),
            data_file: get("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(default_data_file),
            static_dir: get("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_static_dir),
            upload_dir: get("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(default_upload_dir),
        }
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
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(ServerConfig::from_lookup(lookup(&[])), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let cfg = ServerConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8081"),
            ("DATA_FILE", "/var/lib/bracket/data.json"),
            ("UPLOAD_DIR", "/tmp/up"),
        ]));
        assert_eq!(cfg.host, "127.0.0.1");
        assert_eq!(cfg.port, 8081);
        assert_eq!(cfg.data_file, PathBuf::from("/var/lib/bracket/data.json"));
        assert_eq!(cfg.static_dir, PathBuf::from("public"));
        assert_eq!(cfg.upload_dir, PathBuf::from("/tmp/up"));
    }

    #[test]
    fn bad_port_falls_back() {
        let cfg = ServerConfig::from_lookup(lookup(&[("PORT", "eighty"), ("HOST", "  ")]));
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.host, "0.0.0.0");
    }
}
