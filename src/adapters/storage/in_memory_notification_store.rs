//! In-Memory Notification Store Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::notification::Notification;
use crate::ports::NotificationStore;

/// Oldest entries are dropped once a feed grows past this.
const MAX_FEED_LENGTH: usize = 100;

#[derive(Debug, Clone, Default)]
pub struct InMemoryNotificationStore {
    feeds: Arc<RwLock<HashMap<UserId, Vec<Notification>>>>,
}

impl InMemoryNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl NotificationStore for InMemoryNotificationStore {
    async fn push(&self, user_id: &UserId, notification: Notification) -> Result<(), DomainError> {
        let mut feeds = self.feeds.write().await;
        let feed = feeds.entry(user_id.clone()).or_default();
        feed.push(notification);
        if feed.len() > MAX_FEED_LENGTH {
            let excess = feed.len() - MAX_FEED_LENGTH;
            feed.drain(..excess);
        }
        Ok(())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<Notification>, DomainError> {
        Ok(self
            .feeds
            .read()
            .await
            .get(user_id)
            .map(|feed| feed.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::SegmentId;

    fn user() -> UserId {
        UserId::new("user-1").unwrap()
    }

    #[tokio::test]
    async fn list_recent_is_newest_first_and_limited() {
        let store = InMemoryNotificationStore::new();
        for n in 1..=3 {
            store
                .push(
                    &user(),
                    Notification::segment_completed(SegmentId::new(format!("week{}", n)).unwrap(), n),
                )
                .await
                .unwrap();
        }

        let titles: Vec<String> = store
            .list_recent(&user(), 2)
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.title)
            .collect();
        assert_eq!(titles, vec!["Week 3 completed", "Week 2 completed"]);
    }

    #[tokio::test]
    async fn feed_is_capped() {
        let store = InMemoryNotificationStore::new();
        for _ in 0..(MAX_FEED_LENGTH + 10) {
            store.push(&user(), Notification::welcome()).await.unwrap();
        }
        let all = store.list_recent(&user(), usize::MAX).await.unwrap();
        assert_eq!(all.len(), MAX_FEED_LENGTH);
    }

    #[tokio::test]
    async fn unknown_user_has_empty_feed() {
        let store = InMemoryNotificationStore::new();
        assert!(store.list_recent(&user(), 10).await.unwrap().is_empty());
    }
}
