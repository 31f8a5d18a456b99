use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    8000
}

impl Config {
    /// Load the common settings.
    ///
    /// Sources, lowest precedence first: an optional `configuration` file,
    /// `APP__*` environment variables, then a bare `PORT` variable.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", std::env::var("PORT").ok())?
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_port_is_8000() {
        assert_eq!(Config::default().port, 8000);
    }

    #[test]
    fn port_is_parsed_from_string_source() {
        let config = Cfg::builder()
            .set_override("port", "9100")
            .unwrap()
            .build()
            .unwrap();

        let parsed: Config = config.try_deserialize().unwrap();
        assert_eq!(parsed.port, 9100);
    }

    #[test]
    fn missing_port_falls_back_to_default() {
        let config = Cfg::builder().build().unwrap();
        let parsed: Config = config.try_deserialize().unwrap();
        assert_eq!(parsed.port, 8000);
    }
}
