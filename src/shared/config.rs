use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    pub thumbnails: ThumbnailConfig,
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Rows older than this are removed by cleanup.
    pub max_age_days: i64,
    /// Hard ceiling on cached restaurant rows.
    pub max_entries: u32,
    /// Ceiling on thumbnail bytes on disk.
    pub max_size_mb: u64,
    /// Half-width of the bounding box used for location-scoped reads.
    pub nearby_radius_meters: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThumbnailConfig {
    pub dir: String,
    pub size_px: u32,
    pub wifi_only: bool,
    pub fetch_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Recommendation views inside this window are suppressed.
    pub cooldown_hours: i64,
    pub retention_days: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig {
                url: "sqlite:data/yasumeshi.db".to_string(),
                max_connections: 5,
                connection_timeout: 30,
            },
            cache: CacheConfig {
                max_age_days: 7,
                max_entries: 200,
                max_size_mb: 50,
                nearby_radius_meters: 5_000.0,
            },
            thumbnails: ThumbnailConfig {
                dir: "./data/thumbnails".to_string(),
                size_px: 200,
                wifi_only: true,
                fetch_timeout_secs: 5,
            },
            history: HistoryConfig {
                cooldown_hours: 24,
                retention_days: 7,
            },
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(v) = std::env::var("YASUMESHI_DATABASE_URL") {
            if !v.trim().is_empty() {
                cfg.database.url = v;
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_CACHE_MAX_AGE_DAYS") {
            if let Some(value) = parse_i64(&v) {
                cfg.cache.max_age_days = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_CACHE_MAX_ENTRIES") {
            if let Some(value) = parse_u32(&v) {
                cfg.cache.max_entries = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_CACHE_MAX_SIZE_MB") {
            if let Some(value) = parse_u64(&v) {
                cfg.cache.max_size_mb = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_NEARBY_RADIUS_METERS") {
            if let Some(value) = parse_f64(&v) {
                if value > 0.0 {
                    cfg.cache.nearby_radius_meters = value;
                }
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_THUMBNAIL_DIR") {
            if !v.trim().is_empty() {
                cfg.thumbnails.dir = v;
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_THUMBNAIL_WIFI_ONLY") {
            cfg.thumbnails.wifi_only = parse_bool(&v, cfg.thumbnails.wifi_only);
        }
        if let Ok(v) = std::env::var("YASUMESHI_THUMBNAIL_TIMEOUT_SECS") {
            if let Some(value) = parse_u64(&v) {
                cfg.thumbnails.fetch_timeout_secs = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_HISTORY_COOLDOWN_HOURS") {
            if let Some(value) = parse_i64(&v) {
                cfg.history.cooldown_hours = value.max(1);
            }
        }
        if let Ok(v) = std::env::var("YASUMESHI_HISTORY_RETENTION_DAYS") {
            if let Some(value) = parse_i64(&v) {
                cfg.history.retention_days = value.max(1);
            }
        }

        cfg
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.database.max_connections == 0 {
            return Err("Database max_connections must be greater than 0".to_string());
        }
        if self.cache.max_entries == 0 {
            return Err("Cache max_entries must be greater than 0".to_string());
        }
        if self.cache.max_size_mb == 0 {
            return Err("Cache max_size_mb must be greater than 0".to_string());
        }
        if self.cache.nearby_radius_meters <= 0.0 {
            return Err("Cache nearby_radius_meters must be positive".to_string());
        }
        if self.thumbnails.size_px == 0 {
            return Err("Thumbnail size_px must be greater than 0".to_string());
        }
        if self.history.cooldown_hours <= 0 {
            return Err("History cooldown_hours must be positive".to_string());
        }
        if self.history.retention_days <= 0 {
            return Err("History retention_days must be positive".to_string());
        }
        Ok(())
    }
}

fn parse_bool(s: &str, default: bool) -> bool {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}

fn parse_u32(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok()
}

fn parse_u64(value: &str) -> Option<u64> {
    value.trim().parse::<u64>().ok()
}

fn parse_i64(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}

fn parse_f64(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let cfg = AppConfig::default();
        assert!(cfg.validate().is_ok());
        assert_eq!(cfg.cache.max_entries, 200);
        assert_eq!(cfg.cache.max_age_days, 7);
        assert_eq!(cfg.history.cooldown_hours, 24);
    }

    #[test]
    fn zero_ceilings_are_rejected() {
        let mut cfg = AppConfig::default();
        cfg.cache.max_entries = 0;
        assert!(cfg.validate().is_err());

        let mut cfg = AppConfig::default();
        cfg.cache.nearby_radius_meters = 0.0;
        assert!(cfg.validate().is_err());
    }
}
