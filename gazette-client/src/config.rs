use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server_url: String,
    pub refresh_period_secs: u64,
    pub resize_debounce_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: "http://localhost:5000".to_string(),
            refresh_period_secs: 10,
            resize_debounce_ms: 300,
        }
    }
}

impl Config {
    pub fn load() -> Self {
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("gazette").join("config.json");
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    if let Ok(config) = serde_json::from_str(&content) {
                        return config;
                    }
                }
            }
        }
        Self::default()
    }

    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("gazette");
            std::fs::create_dir_all(&app_dir)?;
            let config_path = app_dir.join("config.json");
            let content = serde_json::to_string_pretty(self)?;
            std::fs::write(config_path, content)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_feed_timings() {
        let config = Config::default();
        assert_eq!(config.refresh_period_secs, 10);
        assert_eq!(config.resize_debounce_ms, 300);
    }

    #[test]
    fn round_trips_through_json() {
        let config = Config {
            server_url: "https://news.example.org".into(),
            refresh_period_secs: 30,
            resize_debounce_ms: 150,
        };
        let raw = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.server_url, config.server_url);
        assert_eq!(back.refresh_period_secs, 30);
    }
}
