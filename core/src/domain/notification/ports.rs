use crate::domain::notification::entities::Notification;

/// Bounded feed of notifications, newest last.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationRepository: Send + Sync + 'static {
    fn push(&self, notification: Notification) -> impl Future<Output = ()> + Send;

    /// Up to `limit` most recent notifications, newest first.
    fn recent(&self, limit: usize) -> impl Future<Output = Vec<Notification>> + Send;
}
