use std::sync::Arc;
use std::time::Instant;

use symptom_engine::{Catalog, NoiseSource, Predictor, ThreadRngNoise};

use crate::config::ServerConfig;

/// Predictor shared by all request handlers
pub type SharedPredictor = Arc<Predictor<'static, Box<dyn NoiseSource>>>;

/// Main HealHub server state
#[derive(Clone)]
pub struct HealHubServer {
    /// Server configuration
    pub config: ServerConfig,
    /// Symptom matching engine over the built-in catalog
    pub predictor: SharedPredictor,
    started_at: Instant,
}

impl HealHubServer {
    /// Create a server backed by the built-in catalog and thread-local randomness
    pub fn new(config: ServerConfig) -> Self {
        Self::with_noise(config, Box::new(ThreadRngNoise))
    }

    /// Create a server with a specific noise source.
    /// This is useful for testing
    pub fn with_noise(config: ServerConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self {
            config,
            predictor: Arc::new(Predictor::new(Catalog::builtin(), noise)),
            started_at: Instant::now(),
        }
    }

    /// Get server configuration
    pub fn get_config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.predictor.catalog()
    }

    pub fn uptime_secs(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
