//! HTTP-level tests for article comments and `/api/comments`.

mod common;

use axum::http::{Method, StatusCode};
use serde_json::json;
use sqlx::PgPool;

use common::{body_json, build_test_app, delete, get, patch_json, post_json, send_raw_json};

fn comment_ids(json: &serde_json::Value) -> Vec<i64> {
    json["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["comment_id"].as_i64().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn list_comments_newest_first(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/articles/9/comments").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(comment_ids(&json), vec![17, 1]);
    let first = &json["comments"][0];
    assert_eq!(first["article_id"], 9);
    assert_eq!(first["author"], "icellusedkars");
    assert_eq!(first["votes"], 20);
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn list_comments_for_article_without_any(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(app, "/api/articles/2/comments").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "comments": [] }));
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn list_comments_errors(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/articles/9999/comments").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Article does not exist");

    let app = build_test_app(pool);
    let response = get(app, "/api/articles/nine/comments").await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid id");
}

// ---------------------------------------------------------------------------
// Posting
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn post_comment_creates_it(pool: PgPool) {
    let app = build_test_app(pool.clone());

    let response = post_json(
        app,
        "/api/articles/2/comments",
        json!({ "username": "lurker", "body": "First!" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let comment = &body_json(response).await["comment"];
    assert_eq!(comment["comment_id"], 19);
    assert_eq!(comment["article_id"], 2);
    assert_eq!(comment["author"], "lurker");
    assert_eq!(comment["body"], "First!");
    assert_eq!(comment["votes"], 0);

    let app = build_test_app(pool);
    let article = body_json(get(app, "/api/articles/2").await).await;
    assert_eq!(article["article"]["comment_count"], 1);
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn post_comment_ignores_extra_keys(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/articles/2/comments",
        json!({ "username": "lurker", "body": "Hi", "votes": 1000 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["comment"]["votes"], 0);
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn post_comment_validation(pool: PgPool) {
    let cases = [
        ("/api/articles/abc/comments", json!({ "username": "lurker", "body": "x" }), StatusCode::BAD_REQUEST, "Invalid id"),
        ("/api/articles/2/comments", json!({ "username": "lurker" }), StatusCode::BAD_REQUEST, "Invalid comment"),
        ("/api/articles/2/comments", json!({ "username": "lurker", "body": "" }), StatusCode::BAD_REQUEST, "Invalid comment"),
        ("/api/articles/2/comments", json!({ "username": 7, "body": "x" }), StatusCode::BAD_REQUEST, "Invalid comment"),
        ("/api/articles/9999/comments", json!({ "username": "lurker", "body": "x" }), StatusCode::NOT_FOUND, "Article does not exist"),
        ("/api/articles/2/comments", json!({ "username": "nobody", "body": "x" }), StatusCode::NOT_FOUND, "Username does not exist"),
    ];

    for (uri, body, status, message) in cases {
        let app = build_test_app(pool.clone());
        let response = post_json(app, uri, body.clone()).await;
        assert_eq!(response.status(), status, "{uri} {body}");
        assert_eq!(body_json(response).await["message"], message, "{uri} {body}");
    }
}

// A missing article is reported even when the username is also unknown.
#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn post_comment_checks_article_before_user(pool: PgPool) {
    let app = build_test_app(pool);

    let response = post_json(
        app,
        "/api/articles/9999/comments",
        json!({ "username": "nobody", "body": "x" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Article does not exist");
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn malformed_json_is_bad_request(pool: PgPool) {
    let app = build_test_app(pool);

    let response = send_raw_json(app, Method::POST, "/api/articles/2/comments", "{\"username\": ").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Bad request");
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn patch_comment_adds_votes(pool: PgPool) {
    let app = build_test_app(pool);

    let response = patch_json(app, "/api/comments/1", json!({ "inc_votes": -6 })).await;

    assert_eq!(response.status(), StatusCode::OK);
    let comment = &body_json(response).await["comment"];
    assert_eq!(comment["comment_id"], 1);
    assert_eq!(comment["votes"], 10);
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn patch_comment_validation(pool: PgPool) {
    let cases = [
        ("/api/comments/1", json!({}), StatusCode::BAD_REQUEST, "Invalid body"),
        ("/api/comments/1", json!({ "inc_votes": "up" }), StatusCode::BAD_REQUEST, "Invalid new vote value"),
        ("/api/comments/x", json!({ "inc_votes": 1 }), StatusCode::BAD_REQUEST, "Invalid id"),
        ("/api/comments/9999", json!({ "inc_votes": 1 }), StatusCode::NOT_FOUND, "Comment does not exist"),
    ];

    for (uri, body, status, message) in cases {
        let app = build_test_app(pool.clone());
        let response = patch_json(app, uri, body.clone()).await;
        assert_eq!(response.status(), status, "{uri} {body}");
        assert_eq!(body_json(response).await["message"], message, "{uri} {body}");
    }
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn delete_comment_removes_it(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = delete(app, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool.clone());
    let json = body_json(get(app, "/api/articles/9/comments").await).await;
    assert_eq!(comment_ids(&json), vec![17]);

    let app = build_test_app(pool);
    let response = delete(app, "/api/comments/1").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "Comment does not exist");
}

#[sqlx::test(migrations = "../db/migrations", fixtures(path = "../../db/tests/fixtures", scripts("seed")))]
async fn delete_comment_rejects_bad_id(pool: PgPool) {
    let app = build_test_app(pool);

    let response = delete(app, "/api/comments/-1").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["message"], "Invalid id");
}
