use std::path::PathBuf;

use anyhow::{Context, Result, bail};

const DEFAULT_DB_PATH: &str = "stash_app.db";

pub struct Config {
    pub db_path: PathBuf,
    pub host: String,
    pub port: u16,
    /// Populate demo data before serving if the database is empty.
    pub seed_on_start: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let db_path = match (get("STASH_DB_PATH"), get("DATABASE_URL")) {
            (Some(path), _) => PathBuf::from(path),
            (None, Some(url)) => sqlite_path(&url)?,
            (None, None) => PathBuf::from(DEFAULT_DB_PATH),
        };

        let host = get("STASH_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = get("STASH_PORT")
            .unwrap_or_else(|| "8000".into())
            .parse()
            .context("STASH_PORT must be a port number")?;
        let seed_on_start = match get("STASH_SEED_ON_START") {
            Some(raw) => parse_flag(&raw).context("STASH_SEED_ON_START must be a boolean")?,
            None => true,
        };

        Ok(Self {
            db_path,
            host,
            port,
            seed_on_start,
        })
    }
}

/// Accepts `sqlite:///relative.db`, `sqlite:////abs/path.db` and `sqlite://file.db`.
fn sqlite_path(url: &str) -> Result<PathBuf> {
    let Some(rest) = url.strip_prefix("sqlite://") else {
        bail!("DATABASE_URL must be a sqlite:// URL, got '{}'", url);
    };
    let path = rest.strip_prefix('/').unwrap_or(rest);
    if path.is_empty() {
        bail!("DATABASE_URL has no file path");
    }
    Ok(PathBuf::from(path))
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("unrecognised flag value '{}'", other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let cfg = config(&[]).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("stash_app.db"));
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.port, 8000);
        assert!(cfg.seed_on_start);
    }

    #[test]
    fn explicit_path_wins_over_url() {
        let cfg = config(&[("STASH_DB_PATH", "/tmp/a.db"), ("DATABASE_URL", "sqlite:///./b.db")]).unwrap();
        assert_eq!(cfg.db_path, PathBuf::from("/tmp/a.db"));
    }

    #[test]
    fn sqlite_urls() {
        assert_eq!(sqlite_path("sqlite:///./stash_app.db").unwrap(), PathBuf::from("./stash_app.db"));
        assert_eq!(sqlite_path("sqlite:////var/lib/stash.db").unwrap(), PathBuf::from("/var/lib/stash.db"));
        assert!(sqlite_path("postgres://localhost/stash").is_err());
        assert!(sqlite_path("sqlite:///").is_err());
    }

    #[test]
    fn seed_flag_and_port_are_validated() {
        assert!(!config(&[("STASH_SEED_ON_START", "off")]).unwrap().seed_on_start);
        assert!(config(&[("STASH_SEED_ON_START", "maybe")]).is_err());
        assert!(config(&[("STASH_PORT", "http")]).is_err());
    }
}
