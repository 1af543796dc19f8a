//! `GET /api`: a machine-readable directory of every endpoint.

use axum::Json;
use gazette_core::article_query::{SortColumn, DEFAULT_PAGE_LIMIT};
use serde_json::{json, Value};

/// GET /api
///
/// Keys are `"METHOD /path"`; each value describes the endpoint and, where
/// relevant, its accepted queries and an example body.
pub async fn describe_endpoints() -> Json<Value> {
    Json(endpoint_directory())
}

pub fn endpoint_directory() -> Value {
    let sort_columns: Vec<&str> = SortColumn::ALL.iter().map(|c| c.as_str()).collect();

    json!({
        "GET /api": {
            "description": "serves this directory of all available endpoints"
        },
        "GET /api/topics": {
            "description": "serves an array of all topics"
        },
        "POST /api/topics": {
            "description": "creates a topic",
            "exampleBody": { "slug": "paper", "description": "what books are made of" }
        },
        "GET /api/users": {
            "description": "serves an array of all users"
        },
        "GET /api/users/:username": {
            "description": "serves the user with the given username"
        },
        "GET /api/articles": {
            "description": "serves a page of articles, each with its comment_count",
            "queries": {
                "topic": "filter by topic slug",
                "sort_by": sort_columns,
                "order": ["asc", "desc"],
                "limit": format!("page size, default {DEFAULT_PAGE_LIMIT}"),
                "p": "1-based page number"
            }
        },
        "POST /api/articles": {
            "description": "creates an article",
            "exampleBody": {
                "author": "rogersop",
                "title": "Understanding fish",
                "body": "Fish are friends, not food",
                "topic": "mitch"
            }
        },
        "GET /api/articles/:article_id": {
            "description": "serves the article with the given id, including comment_count"
        },
        "PATCH /api/articles/:article_id": {
            "description": "adds inc_votes to the article's votes",
            "exampleBody": { "inc_votes": 1 }
        },
        "DELETE /api/articles/:article_id": {
            "description": "deletes the article and its comments"
        },
        "GET /api/articles/:article_id/comments": {
            "description": "serves the article's comments, newest first"
        },
        "POST /api/articles/:article_id/comments": {
            "description": "adds a comment to the article",
            "exampleBody": { "username": "butter_bridge", "body": "Great read" }
        },
        "PATCH /api/comments/:comment_id": {
            "description": "adds inc_votes to the comment's votes",
            "exampleBody": { "inc_votes": -1 }
        },
        "DELETE /api/comments/:comment_id": {
            "description": "deletes the comment"
        }
    })
}
