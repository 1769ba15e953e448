use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use crate::domain::{
    dish::ports::{DishRepository, GenerationClient},
    editor::ports::EditSessionRepository,
    notification::ports::NotificationRepository,
    settings::ports::SettingsRepository,
};

/// The workflow orchestrator. Every service trait of the studio is implemented on this type.
pub struct Service<D, G, E, N, S>
where
    D: DishRepository,
    G: GenerationClient,
    E: EditSessionRepository,
    N: NotificationRepository,
    S: SettingsRepository,
{
    pub(crate) dish_repository: Arc<D>,
    pub(crate) generation_client: Arc<G>,
    pub(crate) edit_session_repository: Arc<E>,
    pub(crate) notification_repository: Arc<N>,
    pub(crate) settings_repository: Arc<S>,
    pub(crate) parsing: Arc<AtomicBool>,
}

impl<D, G, E, N, S> Service<D, G, E, N, S>
where
    D: DishRepository,
    G: GenerationClient,
    E: EditSessionRepository,
    N: NotificationRepository,
    S: SettingsRepository,
{
    pub fn new(
        dish_repository: D,
        generation_client: G,
        edit_session_repository: E,
        notification_repository: N,
        settings_repository: S,
    ) -> Self {
        Self {
            dish_repository: Arc::new(dish_repository),
            generation_client: Arc::new(generation_client),
            edit_session_repository: Arc::new(edit_session_repository),
            notification_repository: Arc::new(notification_repository),
            settings_repository: Arc::new(settings_repository),
            parsing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// True while a menu parse request is outstanding.
    pub fn is_parsing(&self) -> bool {
        self.parsing.load(Ordering::SeqCst)
    }

    /// `None` when another parse already holds the flag.
    pub(crate) fn try_begin_parsing(&self) -> Option<ParsingGuard> {
        self.parsing
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .ok()?;

        Some(ParsingGuard {
            flag: self.parsing.clone(),
        })
    }
}

impl<D, G, E, N, S> Clone for Service<D, G, E, N, S>
where
    D: DishRepository,
    G: GenerationClient,
    E: EditSessionRepository,
    N: NotificationRepository,
    S: SettingsRepository,
{
    fn clone(&self) -> Self {
        Self {
            dish_repository: self.dish_repository.clone(),
            generation_client: self.generation_client.clone(),
            edit_session_repository: self.edit_session_repository.clone(),
            notification_repository: self.notification_repository.clone(),
            settings_repository: self.settings_repository.clone(),
            parsing: self.parsing.clone(),
        }
    }
}

/// Clears the parsing flag when dropped, whatever way the parse workflow exits.
pub(crate) struct ParsingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for ParsingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::SeqCst);
    }
}
