use chrono::Utc;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use uuid::Uuid;

const ARTIFACT_PREFIX: &str = "papercast_";
const ARTIFACT_SUFFIX: &str = ".mp3";

/// Artifacts older than this are removed on the next store call.
const MAX_ARTIFACT_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Writes rendered audio to timestamped files in a temporary directory and
/// opportunistically sweeps stale siblings on each write. There is no
/// background timer; a quiet store simply accumulates at most one day of
/// artifacts.
#[derive(Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Persist one render's audio bytes, returning the artifact path.
    pub async fn store(&self, audio: &[u8]) -> std::io::Result<PathBuf> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let name = format!(
            "{}{}_{}{}",
            ARTIFACT_PREFIX,
            Utc::now().timestamp(),
            Uuid::new_v4().simple(),
            ARTIFACT_SUFFIX
        );
        let path = self.dir.join(name);
        tokio::fs::write(&path, audio).await?;

        tracing::info!(
            path = %path.display(),
            size_bytes = audio.len(),
            "Audio artifact stored"
        );

        self.sweep().await;

        Ok(path)
    }

    pub async fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        tokio::fs::read(path).await
    }

    /// Remove artifacts older than the retention window. Sweep failures are
    /// logged, never propagated; a failed cleanup must not fail a render.
    async fn sweep(&self) {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(error = %e, dir = %self.dir.display(), "Artifact sweep skipped");
                return;
            }
        };

        let now = SystemTime::now();
        while let Ok(Some(entry)) = entries.next_entry().await {
            let path = entry.path();
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if !name.starts_with(ARTIFACT_PREFIX) || !name.ends_with(ARTIFACT_SUFFIX) {
                continue;
            }

            let expired = entry
                .metadata()
                .await
                .ok()
                .and_then(|m| m.modified().ok())
                .and_then(|modified| now.duration_since(modified).ok())
                .map(|age| age > MAX_ARTIFACT_AGE)
                .unwrap_or(false);

            if expired {
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => tracing::info!(path = %path.display(), "Stale artifact removed"),
                    Err(e) => {
                        tracing::warn!(error = %e, path = %path.display(), "Failed to remove stale artifact")
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stores_audio_under_prefixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let path = store.store(b"audio-bytes").await.unwrap();

        let name = path.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with(ARTIFACT_PREFIX));
        assert!(name.ends_with(ARTIFACT_SUFFIX));
        assert_eq!(store.read(&path).await.unwrap(), b"audio-bytes");
    }

    #[tokio::test]
    async fn consecutive_stores_produce_distinct_paths() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let first = store.store(b"one").await.unwrap();
        let second = store.store(b"two").await.unwrap();
        assert_ne!(first, second);
    }

    #[tokio::test]
    async fn sweep_removes_artifacts_older_than_a_day() {
        let dir = tempfile::tempdir().unwrap();
        let store = ArtifactStore::new(dir.path());

        let stale = store.store(b"stale").await.unwrap();
        let stale_mtime = SystemTime::now() - Duration::from_secs(25 * 60 * 60);
        std::fs::File::options()
            .write(true)
            .open(&stale)
            .unwrap()
            .set_modified(stale_mtime)
            .unwrap();

        let fresh = store.store(b"fresh").await.unwrap();

        assert!(!stale.exists(), "stale artifact should be swept");
        assert!(fresh.exists(), "fresh artifact must survive the sweep");
    }

    #[tokio::test]
    async fn sweep_ignores_unrelated_files() {
        let dir = tempfile::tempdir().unwrap();
        let unrelated = dir.path().join("keep.txt");
        std::fs::write(&unrelated, b"keep").unwrap();
        let old_mtime = SystemTime::now() - Duration::from_secs(48 * 60 * 60);
        std::fs::File::options()
            .write(true)
            .open(&unrelated)
            .unwrap()
            .set_modified(old_mtime)
            .unwrap();

        let store = ArtifactStore::new(dir.path());
        store.store(b"audio").await.unwrap();

        assert!(unrelated.exists());
    }
}
