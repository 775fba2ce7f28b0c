use crate::domain::dialogue::Dialogue;
use moka::future::Cache;
use std::path::PathBuf;
use std::time::Duration;
use uuid::Uuid;

/// Per-session state: the current dialogue, the source text it was generated
/// from (needed for regeneration), and the latest rendered artifact.
#[derive(Debug, Clone)]
pub struct Session {
    pub dialogue: Dialogue,
    pub source_text: String,
    pub artifact: Option<PathBuf>,
    /// Character count of the last render, reported alongside the audio.
    pub character_count: usize,
}

/// Session-scoped dialogue cache. Sessions are isolated from each other and
/// expire after a period of inactivity; nothing is persisted.
#[derive(Clone)]
pub struct SessionStore {
    cache: Cache<Uuid, Session>,
}

impl SessionStore {
    pub fn new(time_to_idle: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_idle(time_to_idle)
            .build();
        Self { cache }
    }

    pub async fn get(&self, session_id: Uuid) -> Option<Session> {
        self.cache.get(&session_id).await
    }

    pub async fn put(&self, session_id: Uuid, session: Session) {
        self.cache.insert(session_id, session).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dialogue::{DialogueLine, Speaker};

    fn session() -> Session {
        Session {
            dialogue: Dialogue {
                scratchpad: String::new(),
                lines: vec![DialogueLine {
                    speaker: Speaker::Speaker1,
                    text: "Hello".to_string(),
                }],
            },
            source_text: "source".to_string(),
            artifact: None,
            character_count: 5,
        }
    }

    #[tokio::test]
    async fn stores_and_retrieves_sessions() {
        let store = SessionStore::new(Duration::from_secs(60));
        let id = Uuid::new_v4();

        assert!(store.get(id).await.is_none());

        store.put(id, session()).await;
        let loaded = store.get(id).await.unwrap();
        assert_eq!(loaded.source_text, "source");
        assert_eq!(loaded.dialogue.lines.len(), 1);
    }

    #[tokio::test]
    async fn sessions_are_isolated_by_id() {
        let store = SessionStore::new(Duration::from_secs(60));
        store.put(Uuid::new_v4(), session()).await;

        assert!(store.get(Uuid::new_v4()).await.is_none());
    }
}
