use serde::{Deserialize, Serialize};

/// Snapshot of the local cache footprint. Recomputed from storage on every
/// refresh, never incrementally tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CacheStats {
    pub restaurant_count: i64,
    pub thumbnail_bytes: u64,
    pub display_size: String,
}

impl CacheStats {
    pub fn new(restaurant_count: i64, thumbnail_bytes: u64) -> Self {
        Self {
            restaurant_count,
            thumbnail_bytes,
            display_size: format_size(thumbnail_bytes),
        }
    }
}

pub fn format_size(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_size_thresholds() {
        assert_eq!(format_size(0), "0 B");
        assert_eq!(format_size(1023), "1023 B");
        assert_eq!(format_size(1024), "1.0 KB");
        assert_eq!(format_size(1536), "1.5 KB");
        assert_eq!(format_size(1024 * 1024), "1.0 MB");
        assert_eq!(format_size(5 * 1024 * 1024 + 512 * 1024), "5.5 MB");
    }

    #[test]
    fn stats_carry_display_size() {
        let stats = CacheStats::new(12, 2048);
        assert_eq!(stats.restaurant_count, 12);
        assert_eq!(stats.display_size, "2.0 KB");
    }
}
