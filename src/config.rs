use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_DIST_DIR: &str = "workspace/frontend/dist";

#[derive(Debug, Error)]
pub enum HostConfigError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid bind address '{address}': {source}")]
    BindAddress {
        address: String,
        source: std::net::AddrParseError,
    },
}

/// Values given on the command line or through the environment. They win
/// over the config file.
#[derive(Debug, Default, Clone)]
pub struct HostOverrides {
    pub bind_address: Option<String>,
    pub dist_dir: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawHostConfig {
    bind_address: String,
    dist_dir: String,
}

/// Resolved static host configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub bind_address: SocketAddr,
    pub dist_dir: PathBuf,
}

impl HostConfig {
    /// Defaults, then the optional TOML file at `path`, then `overrides`.
    pub fn load(path: impl AsRef<Path>, overrides: HostOverrides) -> Result<Self, HostConfigError> {
        let path = path.as_ref();
        tracing::debug!("Reading optional config file {}", path.display());

        let raw: RawHostConfig = config::Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("dist_dir", DEFAULT_DIST_DIR)?
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .set_override_option("bind_address", overrides.bind_address)?
            .set_override_option("dist_dir", overrides.dist_dir)?
            .build()?
            .try_deserialize()?;

        let bind_address = raw
            .bind_address
            .parse()
            .map_err(|source| HostConfigError::BindAddress {
                address: raw.bind_address.clone(),
                source,
            })?;

        Ok(Self {
            bind_address,
            dist_dir: PathBuf::from(raw.dist_dir),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = HostConfig::load(dir.path().join("missing.toml"), HostOverrides::default()).unwrap();

        assert_eq!(config.bind_address, DEFAULT_BIND_ADDRESS.parse().unwrap());
        assert_eq!(config.dist_dir, PathBuf::from(DEFAULT_DIST_DIR));
    }

    #[test]
    fn test_file_then_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("smartcharge.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "bind_address = \"127.0.0.1:9000\"").unwrap();
        writeln!(file, "dist_dir = \"/srv/bundle\"").unwrap();

        let from_file = HostConfig::load(&path, HostOverrides::default()).unwrap();
        assert_eq!(from_file.bind_address, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(from_file.dist_dir, PathBuf::from("/srv/bundle"));

        let overrides = HostOverrides {
            bind_address: Some("127.0.0.1:3000".to_string()),
            dist_dir: None,
        };
        let overridden = HostConfig::load(&path, overrides).unwrap();
        assert_eq!(overridden.bind_address, "127.0.0.1:3000".parse().unwrap());
        assert_eq!(overridden.dist_dir, PathBuf::from("/srv/bundle"));
    }

    #[test]
    fn test_invalid_bind_address() {
        let dir = tempfile::tempdir().unwrap();
        let overrides = HostOverrides {
            bind_address: Some("not-an-address".to_string()),
            dist_dir: None,
        };
        let err = HostConfig::load(dir.path().join("none.toml"), overrides).unwrap_err();
        assert!(matches!(err, HostConfigError::BindAddress { .. }));
        assert!(err.to_string().contains("not-an-address"));
    }
}
