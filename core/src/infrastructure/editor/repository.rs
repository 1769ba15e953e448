use std::collections::HashMap;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::editor::{
    entities::{BeginEdit, EditSession, EditSessionUpdate},
    ports::EditSessionRepository,
};

#[derive(Debug, Default)]
pub struct InMemoryEditSessionRepository {
    sessions: RwLock<HashMap<Uuid, EditSession>>,
}

impl InMemoryEditSessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EditSessionRepository for InMemoryEditSessionRepository {
    async fn insert(&self, session: EditSession) -> EditSession {
        self.sessions
            .write()
            .await
            .insert(session.id, session.clone());
        session
    }

    async fn get(&self, session_id: Uuid) -> Option<EditSession> {
        self.sessions.read().await.get(&session_id).cloned()
    }

    async fn update(&self, session_id: Uuid, update: EditSessionUpdate) -> Option<EditSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&session_id)?;
        session.apply(update);
        Some(session.clone())
    }

    async fn begin_edit(&self, session_id: Uuid) -> BeginEdit {
        let mut sessions = self.sessions.write().await;

        match sessions.get_mut(&session_id) {
            None => BeginEdit::NotFound,
            Some(session) if session.is_editing => BeginEdit::AlreadyEditing,
            Some(session) => {
                session.is_editing = true;
                BeginEdit::Started(session.clone())
            }
        }
    }

    async fn remove(&self, session_id: Uuid) -> Option<EditSession> {
        self.sessions.write().await.remove(&session_id)
    }

    async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn update_after_remove_is_dropped() {
        let repository = InMemoryEditSessionRepository::new();
        let session = repository
            .insert(EditSession::open(Uuid::new_v4(), Some("a".into())))
            .await;

        assert!(repository.remove(session.id).await.is_some());

        let late = repository
            .update(session.id, EditSessionUpdate::edited("b".into()))
            .await;
        assert!(late.is_none());
        assert!(repository.get(session.id).await.is_none());
    }

    #[tokio::test]
    async fn begin_edit_is_exclusive() {
        let repository = InMemoryEditSessionRepository::new();
        let session = repository
            .insert(EditSession::open(Uuid::new_v4(), Some("a".into())))
            .await;

        assert!(matches!(
            repository.begin_edit(session.id).await,
            BeginEdit::Started(ref s) if s.is_editing
        ));
        assert_eq!(
            repository.begin_edit(session.id).await,
            BeginEdit::AlreadyEditing
        );

        repository
            .update(session.id, EditSessionUpdate::edited("b".into()))
            .await;
        assert!(matches!(
            repository.begin_edit(session.id).await,
            BeginEdit::Started(_)
        ));
        assert_eq!(
            repository.begin_edit(Uuid::new_v4()).await,
            BeginEdit::NotFound
        );
    }
}
