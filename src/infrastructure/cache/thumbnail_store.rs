use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, warn};

/// File-per-restaurant thumbnail directory. Shared between the cache writer
/// and the orphan sweep; every operation is best-effort and logged rather
/// than fatal, since a missing thumbnail degrades to "no image".
pub struct ThumbnailStore {
    dir: PathBuf,
}

impl ThumbnailStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, restaurant_id: &str) -> PathBuf {
        self.dir.join(format!("{restaurant_id}.jpg"))
    }

    pub async fn write(&self, restaurant_id: &str, bytes: &[u8]) -> std::io::Result<PathBuf> {
        fs::create_dir_all(&self.dir).await?;
        let path = self.path_for(restaurant_id);
        fs::write(&path, bytes).await?;
        Ok(path)
    }

    /// Removes one thumbnail, returning the bytes freed.
    pub async fn remove(&self, restaurant_id: &str) -> u64 {
        let path = self.path_for(restaurant_id);
        let size = fs::metadata(&path).await.map(|m| m.len()).unwrap_or(0);
        if let Err(err) = fs::remove_file(&path).await {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("Failed to remove thumbnail {}: {}", path.display(), err);
            }
            return 0;
        }
        size
    }

    pub async fn total_bytes(&self) -> u64 {
        let mut total = 0;
        let Ok(mut entries) = fs::read_dir(&self.dir).await else {
            return 0;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            if let Ok(metadata) = entry.metadata().await {
                if metadata.is_file() {
                    total += metadata.len();
                }
            }
        }
        total
    }

    /// Deletes every file whose basename is not in `live_ids`. The id
    /// snapshot is taken once by the caller before the sweep starts, so ids
    /// removed in the same cleanup pass count as orphaned. Returns the
    /// number of files removed.
    pub async fn sweep_orphans(&self, live_ids: &HashSet<String>) -> u64 {
        let mut removed = 0;
        let Ok(mut entries) = fs::read_dir(&self.dir).await else {
            return 0;
        };
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if live_ids.contains(stem) {
                continue;
            }
            match fs::remove_file(&path).await {
                Ok(()) => {
                    debug!("Swept orphaned thumbnail {}", path.display());
                    removed += 1;
                }
                Err(err) => warn!("Failed to sweep {}: {}", path.display(), err),
            }
        }
        removed
    }

    pub async fn clear(&self) -> u64 {
        self.sweep_orphans(&HashSet::new()).await
    }
}
