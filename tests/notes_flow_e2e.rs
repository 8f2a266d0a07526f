//! End-to-end: config → wiring → controller → reqwest gateway → mock server.

use mockito::{Matcher, Server};
use nh_app::ControllerEvent;
use nh_core::{AppConfig, NoteId};
use notehub_lib::bootstrap::wire;

fn page_body(ids: &[i64], total_notes: u32) -> String {
    let notes: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "title": format!("note {}", id),
                "content": "",
                "tag": "Todo"
            })
        })
        .collect();
    serde_json::json!({ "notes": notes, "totalPages": 1, "totalNotes": total_notes }).to_string()
}

#[tokio::test]
async fn delete_then_refetch_drops_note_from_view() {
    let mut server = Server::new_async().await;
    let config = AppConfig {
        api_base_url: format!("{}/api/notes", server.url()),
        ..AppConfig::default()
    }
    .with_token(Some("test-token".to_string()));

    let before = server
        .mock("GET", "/api/notes")
        .match_query(Matcher::Exact("page=1&perPage=12".to_string()))
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(page_body(&[41, 42], 2))
        .expect(1)
        .create_async()
        .await;

    let deps = wire(config).unwrap();
    let mut controller = deps.notes_controller();

    assert!(controller.sync().await);
    assert!(matches!(
        controller.next_event().await,
        ControllerEvent::FetchSettled { is_active: true, .. }
    ));
    assert_eq!(controller.view().await.notes.len(), 2);
    before.assert_async().await;
    before.remove_async().await;

    let delete = server
        .mock("DELETE", "/api/notes/42")
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(r#"{"message":"Note deleted","deletedNoteId":42}"#)
        .create_async()
        .await;
    let after = server
        .mock("GET", "/api/notes")
        .match_query(Matcher::Exact("page=1&perPage=12".to_string()))
        .with_status(200)
        .with_body(page_body(&[41], 1))
        .expect(1)
        .create_async()
        .await;

    let response = controller.delete_note(&NoteId::from(42)).await.unwrap();
    assert_eq!(response.deleted_note_id, NoteId::from(42));

    assert!(matches!(
        controller.next_event().await,
        ControllerEvent::FetchSettled { is_active: true, .. }
    ));
    let view = controller.view().await;

    delete.assert_async().await;
    after.assert_async().await;
    assert_eq!(view.total_notes, 1);
    assert!(view.notes.iter().all(|n| n.id != NoteId::from(42)));
}
