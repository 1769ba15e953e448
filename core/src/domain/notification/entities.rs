use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Error,
}

/// A user-visible message about a workflow that did not go as asked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub dish_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: String, dish_id: Option<Uuid>) -> Self {
        Self {
            id: generate_uuid_v7(),
            level,
            message,
            dish_id,
            created_at: generate_timestamp(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message.into(), None)
    }

    pub fn dish_error(dish_id: Uuid, message: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, message.into(), Some(dish_id))
    }
}
