//! GetSegmentDetailHandler - Query handler for a single week's view.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, SegmentId, UserId};
use crate::domain::program::Program;
use crate::domain::progression::SegmentDetail;
use crate::ports::CompletionStore;

#[derive(Debug, Clone)]
pub struct GetSegmentDetailQuery {
    pub user_id: UserId,
    pub segment_id: SegmentId,
}

pub struct GetSegmentDetailHandler {
    program: Arc<Program>,
    store: Arc<dyn CompletionStore>,
}

impl GetSegmentDetailHandler {
    pub fn new(program: Arc<Program>, store: Arc<dyn CompletionStore>) -> Self {
        Self { program, store }
    }

    pub async fn handle(&self, query: GetSegmentDetailQuery) -> Result<SegmentDetail, DomainError> {
        let stored = self.store.load(&query.user_id).await?;
        Ok(SegmentDetail::derive(
            &self.program,
            &stored.log.completion_set(),
            &query.segment_id,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCompletionStore;
    use crate::domain::foundation::{ErrorCode, SegmentState};
    use crate::domain::program::reference_program;

    fn handler() -> GetSegmentDetailHandler {
        GetSegmentDetailHandler::new(
            Arc::new(reference_program().clone()),
            Arc::new(InMemoryCompletionStore::new()),
        )
    }

    #[tokio::test]
    async fn returns_locked_detail_for_later_week() {
        let detail = handler()
            .handle(GetSegmentDetailQuery {
                user_id: UserId::new("user-1").unwrap(),
                segment_id: SegmentId::new("week2").unwrap(),
            })
            .await
            .unwrap();

        assert_eq!(detail.state, SegmentState::Locked);
        assert_eq!(detail.activities.len(), 3);
        assert_eq!(detail.next_segment_id, Some(SegmentId::new("week3").unwrap()));
    }

    #[tokio::test]
    async fn unknown_segment_is_not_found() {
        let err = handler()
            .handle(GetSegmentDetailQuery {
                user_id: UserId::new("user-1").unwrap(),
                segment_id: SegmentId::new("week0").unwrap(),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SegmentNotFound);
    }
}
