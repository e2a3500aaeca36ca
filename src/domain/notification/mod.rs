//! Notification domain module.
//!
//! Notifications are produced by the application layer after a completion
//! is published. The engine itself never emits them.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{NotificationId, SegmentId, Timestamp};

/// What a notification is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationKind {
    Welcome,
    SegmentCompleted { segment_id: SegmentId, number: usize },
    SegmentUnlocked { segment_id: SegmentId, number: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub created_at: Timestamp,
}

impl Notification {
    fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            title: title.into(),
            message: message.into(),
            created_at: Timestamp::now(),
        }
    }

    pub fn welcome() -> Self {
        Self::new(
            NotificationKind::Welcome,
            "Welcome to Sixpack Creator",
            "Your 12-week core programme starts with week 1. Complete every day to unlock the next week.",
        )
    }

    pub fn segment_completed(segment_id: SegmentId, number: usize) -> Self {
        Self::new(
            NotificationKind::SegmentCompleted { segment_id, number },
            format!("Week {} completed", number),
            format!("You finished every session of week {}. Keep it up!", number),
        )
    }

    pub fn segment_unlocked(segment_id: SegmentId, number: usize) -> Self {
        Self::new(
            NotificationKind::SegmentUnlocked { segment_id, number },
            format!("Week {} unlocked", number),
            format!("Week {} is now available.", number),
        )
    }
}
