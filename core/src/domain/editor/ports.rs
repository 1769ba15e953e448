use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::entities::Dish,
    editor::{
        entities::{BeginEdit, EditSession, EditSessionUpdate},
        value_objects::ApplyEditInput,
    },
};

/// Open edit sessions, keyed by session id.
#[cfg_attr(test, mockall::automock)]
pub trait EditSessionRepository: Send + Sync + 'static {
    fn insert(&self, session: EditSession) -> impl Future<Output = EditSession> + Send;

    fn get(&self, session_id: Uuid) -> impl Future<Output = Option<EditSession>> + Send;

    /// `None` when the session has been closed in the meantime.
    fn update(
        &self,
        session_id: Uuid,
        update: EditSessionUpdate,
    ) -> impl Future<Output = Option<EditSession>> + Send;

    /// Marks the session as editing unless an edit is already running on it.
    fn begin_edit(&self, session_id: Uuid) -> impl Future<Output = BeginEdit> + Send;

    fn remove(&self, session_id: Uuid) -> impl Future<Output = Option<EditSession>> + Send;

    /// Drops every session; used when the dish store is cleared or replaced.
    fn clear(&self) -> impl Future<Output = ()> + Send;
}

/// Service trait for the per-dish image editing workflow
#[cfg_attr(test, mockall::automock)]
pub trait EditorService: Send + Sync {
    fn open_edit_session(
        &self,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<EditSession, CoreError>> + Send;

    fn get_edit_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<EditSession, CoreError>> + Send;

    fn apply_edit(
        &self,
        input: ApplyEditInput,
    ) -> impl Future<Output = Result<EditSession, CoreError>> + Send;

    fn revert_edit(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<EditSession, CoreError>> + Send;

    /// Writes the working image back into the dish and ends the session.
    fn commit_edit(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    /// Ends the session without touching the dish.
    fn close_edit_session(
        &self,
        session_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
