use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub latency_ms: u64,
    pub theme_storage_path: String,
    pub audit_capacity: usize,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let latency_ms = env::var("STORE_LATENCY_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(300);
        let theme_storage_path =
            env::var("THEME_STORAGE_PATH").unwrap_or_else(|_| "theme.json".to_string());
        let audit_capacity = env::var("AUDIT_CAPACITY")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(256);
        Self {
            latency_ms,
            theme_storage_path,
            audit_capacity,
        }
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            latency_ms: 300,
            theme_storage_path: "theme.json".to_string(),
            audit_capacity: 256,
        }
    }
}
