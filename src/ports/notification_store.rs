//! NotificationStore port - per-user notification feed

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::Notification;

#[async_trait]
pub trait NotificationStore: Send + Sync {
    /// Append a notification to the user's feed
    async fn push(&self, user_id: &UserId, notification: Notification) -> Result<(), DomainError>;

    /// Up to `limit` notifications, newest first
    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<Notification>, DomainError>;
}
