use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use anyhow::{anyhow, Result};
use tracing::info;

pub struct Config {
    pub bind_addr: String,
    pub database_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self> {
        Ok(Self {
            bind_addr: try_load("ENQUATE_BIND_ADDR", "0.0.0.0:8080")?,
            database_path: try_load("ENQUATE_DATABASE_PATH", "database/enquate_app.db")?,
            static_dir: try_load("ENQUATE_STATIC_DIR", "static")?,
        })
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T>
where
    T::Err: Display,
{
    let value = env::var(key).unwrap_or_else(|_| {
        info!("{key} not set, using default: {default}");
        default.to_string()
    });

    value
        .parse()
        .map_err(|e| anyhow!("invalid {key} value {value:?}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_when_unset() {
        let port: u16 = try_load("ENQUATE_TEST_UNSET_PORT", "8080").unwrap();
        assert_eq!(port, 8080);
    }

    #[test]
    fn rejects_unparsable_default() {
        let port = try_load::<u16>("ENQUATE_TEST_UNSET_PORT", "not-a-port");
        assert!(port.is_err());
    }
}
