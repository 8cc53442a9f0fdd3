use std::env;

use serde::{Deserialize, Serialize};

fn default_port() -> u16 {
    8080
}

/// Liveness HTTP server settings.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct HealthConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

impl HealthConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_port);

        Self { port }
    }
}
