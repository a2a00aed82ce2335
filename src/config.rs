use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("PORT must be a valid u16: {0}")]
    InvalidPort(String),

    #[error("invalid HOST:PORT combination: {0}")]
    InvalidAddress(String),

    #[error("SEED_ROOM must look like ID:OWNER, got {0:?}")]
    InvalidSeedRoom(String),
}

/// A room created at startup with a known id, e.g. `SEED_ROOM=SJRAZS:aaaa`
#[derive(Debug, Clone, PartialEq)]
pub struct SeedRoom {
    pub room_id: String,
    pub owner: String,
}

impl SeedRoom {
    fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.split_once(':') {
            Some((room_id, owner)) if !room_id.is_empty() && !owner.is_empty() => Ok(Self {
                room_id: room_id.to_string(),
                owner: owner.to_string(),
            }),
            _ => Err(ConfigError::InvalidSeedRoom(raw.to_string())),
        }
    }
}

/// Server settings read from the environment
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the `index.html` served for unmatched paths
    pub static_dir: PathBuf,
    pub seed_room: Option<SeedRoom>,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|e| ConfigError::InvalidPort(format!("{raw}: {e}")))?,
            None => 3000,
        };
        let static_dir = lookup("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("public"));
        let seed_room = lookup("SEED_ROOM")
            .filter(|raw| !raw.is_empty())
            .map(|raw| SeedRoom::parse(&raw))
            .transpose()?;

        Ok(Self {
            host,
            port,
            static_dir,
            seed_room,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| ConfigError::InvalidAddress(format!("{e}")))
    }
}
