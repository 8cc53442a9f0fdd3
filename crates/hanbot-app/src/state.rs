use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::Instant;

use hanbot_config::Config;
use tokio::sync::RwLock;

pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub started_at: Instant,
    pub ready: AtomicBool,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            started_at: Instant::now(),
            ready: AtomicBool::new(false),
        }
    }
}
