mod common;

use serde_json::Value;

#[tokio::test]
async fn health_reports_store_ok_and_chat_disabled() {
    let (server, _store) = common::test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["checks"]["store"]["status"], "ok");
    assert_eq!(body["checks"]["chat_upstream"]["status"], "disabled");
}
