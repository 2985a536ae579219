use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub mod security;

pub use security::apply_security_headers;

const DEFAULT_DATA_DIR: &str = "./data";
const DEFAULT_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding one JSON file per stored record.
    pub data_dir: PathBuf,
    pub addr: SocketAddr,
    /// Enables HSTS. Set with `RUST_ENV=production`.
    pub production: bool,
}

impl Config {
    pub fn from_env() -> Self {
        let data_dir = env::var("MARKETPLACE_DATA_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string());

        let production = env::var("RUST_ENV")
            .map(|v| v.to_lowercase() == "production")
            .unwrap_or(false);

        Self {
            data_dir: PathBuf::from(data_dir),
            addr: parse_addr(env::var("MARKETPLACE_ADDR").ok().as_deref()),
            production,
        }
    }
}

fn parse_addr(raw: Option<&str>) -> SocketAddr {
    let default = || {
        DEFAULT_ADDR
            .parse()
            .unwrap_or_else(|_| SocketAddr::from(([127, 0, 0, 1], 3001)))
    };

    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => default(),
        Some(value) => match value.parse::<SocketAddr>() {
            Ok(addr) => addr,
            Err(e) => {
                tracing::warn!("Config: Invalid MARKETPLACE_ADDR '{}': {}, using {}", value, e, DEFAULT_ADDR);
                default()
            }
        },
    }
}
