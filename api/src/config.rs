use std::env;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_RESERVED_NAMES: &str = "Café Existente";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// JSON file with the initial cafes; the built-in seed is used when unset
    pub seed_file: Option<PathBuf>,
    /// Names that create always treats as already taken
    pub reserved_names: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            seed_file: None,
            reserved_names: parse_reserved_names(DEFAULT_RESERVED_NAMES),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            seed_file: env::var("CAFES_SEED_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            reserved_names: parse_reserved_names(
                &env::var("CAFES_RESERVED_NAMES")
                    .unwrap_or_else(|_| DEFAULT_RESERVED_NAMES.to_string()),
            ),
        })
    }
}

/// Split a comma separated list, dropping blank entries
pub fn parse_reserved_names(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
