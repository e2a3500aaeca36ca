//! ListNotificationsHandler - Query handler for the notification feed.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::Notification;
use crate::ports::NotificationStore;

pub const DEFAULT_NOTIFICATION_LIMIT: usize = 20;

#[derive(Debug, Clone)]
pub struct ListNotificationsQuery {
    pub user_id: UserId,
    pub limit: usize,
}

pub struct ListNotificationsHandler {
    store: Arc<dyn NotificationStore>,
}

impl ListNotificationsHandler {
    pub fn new(store: Arc<dyn NotificationStore>) -> Self {
        Self { store }
    }

    /// Newest first; a user with an empty feed sees a single welcome entry.
    pub async fn handle(&self, query: ListNotificationsQuery) -> Result<Vec<Notification>, DomainError> {
        let notifications = self
            .store
            .list_recent(&query.user_id, query.limit)
            .await?;

        if notifications.is_empty() && query.limit > 0 {
            return Ok(vec![Notification::welcome()]);
        }
        Ok(notifications)
    }
}
