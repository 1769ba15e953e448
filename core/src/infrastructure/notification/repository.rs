use std::collections::VecDeque;

use tokio::sync::RwLock;

use crate::domain::notification::{entities::Notification, ports::NotificationRepository};

/// Ring buffer of the most recent notifications.
#[derive(Debug)]
pub struct InMemoryNotificationRepository {
    capacity: usize,
    notifications: RwLock<VecDeque<Notification>>,
}

impl InMemoryNotificationRepository {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            capacity,
            notifications: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }
}

impl NotificationRepository for InMemoryNotificationRepository {
    async fn push(&self, notification: Notification) {
        let mut notifications = self.notifications.write().await;
        if notifications.len() == self.capacity {
            notifications.pop_front();
        }
        notifications.push_back(notification);
    }

    async fn recent(&self, limit: usize) -> Vec<Notification> {
        self.notifications
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn evicts_oldest_and_lists_newest_first() {
        let repository = InMemoryNotificationRepository::new(2);

        repository.push(Notification::error("first")).await;
        repository.push(Notification::error("second")).await;
        repository.push(Notification::error("third")).await;

        let messages: Vec<String> = repository
            .recent(10)
            .await
            .into_iter()
            .map(|n| n.message)
            .collect();

        assert_eq!(messages, vec!["third", "second"]);
    }
}
