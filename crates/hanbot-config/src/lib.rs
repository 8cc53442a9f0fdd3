use serde::{Deserialize, Serialize};

use self::bot::BotConfig;
use self::health::HealthConfig;
use self::translator::TranslatorConfig;

pub mod bot;
pub mod health;
pub mod translator;

#[derive(Serialize, Deserialize)]
pub struct Config {
    pub bot: BotConfig,
    pub translator: TranslatorConfig,
    pub health: HealthConfig,
}

impl Config {
    /// Build the full configuration from the process environment.
    ///
    /// Fails only when a required credential is missing; everything else has
    /// a working default.
    pub fn from_env() -> Result<Self, MissingCredential> {
        Ok(Config {
            bot: BotConfig::from_env(),
            translator: TranslatorConfig::from_env()?,
            health: HealthConfig::from_env(),
        })
    }
}

/// A required secret was not set in the environment.
#[derive(Debug)]
pub struct MissingCredential(pub &'static str);

impl std::fmt::Display for MissingCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "required environment variable {} is not set", self.0)
    }
}

impl std::error::Error for MissingCredential {}
