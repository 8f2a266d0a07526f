use std::sync::Arc;

use nh_core::ports::NotesGatewayPort;
use nh_core::{GatewayError, ListNotesParams, NotesPage};
use tracing::debug;

/// Use case for fetching one page of notes, optionally filtered by search.
pub struct ListNotes {
    gateway: Arc<dyn NotesGatewayPort>,
    per_page: u32,
}

impl ListNotes {
    pub fn from_arc(gateway: Arc<dyn NotesGatewayPort>, per_page: u32) -> Self {
        Self { gateway, per_page }
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Fetch `page` (1-based). An empty `search` lists all notes.
    ///
    /// No range checks are made on `page`; an out-of-range page simply comes
    /// back empty from the server.
    #[tracing::instrument(
        name = "usecase.list_notes.execute",
        skip(self),
        fields(per_page = self.per_page)
    )]
    pub async fn execute(&self, page: u32, search: &str) -> Result<NotesPage, GatewayError> {
        let params = ListNotesParams::new(page, self.per_page, search);
        let result = self.gateway.list(&params).await?;
        debug!(
            returned = result.notes.len(),
            total_pages = result.total_pages,
            total_notes = result.total_notes,
            "listed notes"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use nh_core::ports::mock_ports::MockNotesGateway;

    fn empty_page() -> NotesPage {
        NotesPage {
            notes: vec![],
            total_pages: 0,
            total_notes: 0,
        }
    }

    #[tokio::test]
    async fn empty_search_sends_no_search_param() {
        let mut gateway = MockNotesGateway::new();
        gateway
            .expect_list()
            .with(eq(ListNotesParams {
                page: 1,
                per_page: 12,
                search: None,
            }))
            .times(1)
            .returning(|_| Ok(empty_page()));

        let use_case = ListNotes::from_arc(Arc::new(gateway), 12);
        use_case.execute(1, "").await.unwrap();
    }

    #[tokio::test]
    async fn search_is_forwarded() {
        let mut gateway = MockNotesGateway::new();
        gateway
            .expect_list()
            .with(eq(ListNotesParams {
                page: 1,
                per_page: 12,
                search: Some("meeting".to_string()),
            }))
            .times(1)
            .returning(|_| Ok(empty_page()));

        let use_case = ListNotes::from_arc(Arc::new(gateway), 12);
        use_case.execute(1, "meeting").await.unwrap();
    }

    #[tokio::test]
    async fn gateway_errors_propagate_unchanged() {
        let mut gateway = MockNotesGateway::new();
        gateway.expect_list().returning(|_| {
            Err(GatewayError::Server {
                status: 500,
                message: "internal".to_string(),
            })
        });

        let use_case = ListNotes::from_arc(Arc::new(gateway), 12);
        let err = use_case.execute(2, "").await.unwrap_err();

        assert_eq!(err.status(), Some(500));
    }
}
