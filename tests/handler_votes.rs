mod common;

use serde_json::{Value, json};

fn default_table() -> Value {
    json!({
        "owner": {
            "priorities": { "features": 0, "stability": 0 },
            "values": { "right": 0, "wrong": 0 }
        },
        "team": {
            "remote": { "no": 0, "yes": 0 },
            "size": { "grow": 0, "keep": 0 }
        }
    })
}

#[tokio::test]
async fn get_votes_returns_default_shape_on_first_read() {
    let (server, _store) = common::test_server();

    let response = server.get("/votes").await;
    response.assert_status_ok();
    response.assert_json(&default_table());
}

#[tokio::test]
async fn get_votes_by_category_returns_sub_mapping() {
    let (server, _store) = common::test_server();

    let response = server.get("/votes").add_query_param("category", "owner").await;
    response.assert_status_ok();
    response.assert_json(&json!({
        "priorities": { "features": 0, "stability": 0 },
        "values": { "right": 0, "wrong": 0 }
    }));
}

#[tokio::test]
async fn get_votes_unknown_category_is_404() {
    let (server, _store) = common::test_server();

    let response = server.get("/votes").add_query_param("category", "ghosts").await;
    response.assert_status_not_found();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "not_found");
}

#[tokio::test]
async fn three_votes_on_the_same_leaf_count_to_three() {
    let (server, _store) = common::test_server();

    let mut last = Value::Null;
    for _ in 0..3 {
        let response = server
            .post("/votes")
            .add_query_param("category", "owner")
            .add_query_param("topicId", "values")
            .add_query_param("optionId", "right")
            .await;
        response.assert_status_ok();
        last = response.json::<Value>();
    }

    assert_eq!(last["values"]["right"], 3);
    assert_eq!(last["values"]["wrong"], 0);
    assert_eq!(last["priorities"]["features"], 0);
    assert_eq!(last["priorities"]["stability"], 0);

    let read_back = server.get("/votes").add_query_param("category", "owner").await;
    assert_eq!(read_back.json::<Value>(), last);
}

#[tokio::test]
async fn vote_creates_new_topic_and_option_under_existing_category() {
    let (server, _store) = common::test_server();

    let response = server
        .post("/votes")
        .add_query_param("category", "team")
        .add_query_param("topicId", "mascot")
        .add_query_param("optionId", "crab")
        .await;

    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["mascot"]["crab"], 1);
    // default topics stay untouched
    assert_eq!(body["size"]["grow"], 0);
}

#[tokio::test]
async fn vote_on_unknown_category_is_404_and_mutates_nothing() {
    let (server, _store) = common::test_server();

    let response = server
        .post("/votes")
        .add_query_param("category", "ghosts")
        .add_query_param("topicId", "values")
        .add_query_param("optionId", "right")
        .await;
    response.assert_status_not_found();

    let table = server.get("/votes").await;
    table.assert_json(&default_table());
}

#[tokio::test]
async fn vote_with_incomplete_path_is_400() {
    let (server, _store) = common::test_server();

    let response = server
        .post("/votes")
        .add_query_param("category", "owner")
        .add_query_param("topicId", "values")
        .await;
    response.assert_status_bad_request();

    let body = response.json::<Value>();
    assert_eq!(body["error"]["code"], "validation_error");
}

#[tokio::test]
async fn reset_restores_the_default_shape() {
    let (server, _store) = common::test_server();

    for _ in 0..2 {
        server
            .post("/votes")
            .add_query_param("category", "owner")
            .add_query_param("topicId", "values")
            .add_query_param("optionId", "wrong")
            .await
            .assert_status_ok();
    }

    let response = server.post("/votes").add_query_param("reset", "true").await;
    response.assert_status_ok();
    response.assert_json(&json!({ "message": "vote table reset" }));

    let table = server.get("/votes").await;
    table.assert_json(&default_table());
}

#[tokio::test]
async fn options_preflight_is_answered_by_the_cors_layer() {
    use axum::http::{HeaderValue, Method, header};

    let (server, _store) = common::test_server();

    let response = server
        .method(Method::OPTIONS, "/votes")
        .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:5173"))
        .add_header(
            header::ACCESS_CONTROL_REQUEST_METHOD,
            HeaderValue::from_static("POST"),
        )
        .await;

    response.assert_status_ok();
    assert!(
        response
            .maybe_header(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_some()
    );
    assert!(response.as_bytes().is_empty());
}

#[tokio::test]
async fn unsupported_method_is_405() {
    let (server, _store) = common::test_server();

    let response = server.delete("/votes").await;
    response.assert_status(axum::http::StatusCode::METHOD_NOT_ALLOWED);
}
