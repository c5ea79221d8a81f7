use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use std::str::FromStr;
use thiserror::Error;
use tracing::Level;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    light: Device,
    thermostat: Device,
}

impl AppConfig {
    pub fn load() -> Result<Self, AppConfigError> {
        Self::load_with(environment())
    }

    fn load_with(environment: Environment) -> Result<Self, AppConfigError> {
        let config = Config::builder()
            .set_default("core.log_level", "warn")?
            .set_default("light.name", "living room")?
            .set_default("thermostat.name", "thermostat")?
            .add_source(config::File::with_name("home_remote").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<AppConfig>()?;

        Ok(config)
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn light(&self) -> &Device {
        &self.light
    }

    pub fn thermostat(&self) -> &Device {
        &self.thermostat
    }
}

// HOME_REMOTE__CORE__LOG_LEVEL=debug sets core.log_level
fn environment() -> Environment {
    Environment::with_prefix("HOME_REMOTE").separator("__")
}

#[derive(Debug, Deserialize)]
pub struct Core {
    log_level: String,
}

impl Core {
    pub fn log_level(&self) -> Result<Level, AppConfigError> {
        Level::from_str(&self.log_level).map_err(|_| AppConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[derive(Debug, Deserialize)]
pub struct Device {
    name: String,
}

impl Device {
    pub fn name(&self) -> &str {
        &self.name
    }
}

#[derive(Error, Debug)]
pub enum AppConfigError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid log level '{0}', expected one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                core: Core {
                    log_level: "warn".to_string(),
                },
                light: Device {
                    name: "living room".to_string(),
                },
                thermostat: Device {
                    name: "thermostat".to_string(),
                },
            },
        }
    }

    pub fn log_level(mut self, log_level: &str) -> Self {
        self.config.core.log_level = log_level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
