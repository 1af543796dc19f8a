//! Response envelope types for API handlers.
//!
//! Every payload is wrapped in an object keyed by the resource name:
//! `{ "article": ... }`, `{ "articles": [...] }`.

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ArticleResponse<T: Serialize> {
    pub article: T,
}

#[derive(Debug, Serialize)]
pub struct ArticlesResponse<T: Serialize> {
    pub articles: T,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse<T: Serialize> {
    pub comment: T,
}

#[derive(Debug, Serialize)]
pub struct CommentsResponse<T: Serialize> {
    pub comments: T,
}

#[derive(Debug, Serialize)]
pub struct TopicResponse<T: Serialize> {
    pub topic: T,
}

#[derive(Debug, Serialize)]
pub struct TopicsResponse<T: Serialize> {
    pub topics: T,
}

#[derive(Debug, Serialize)]
pub struct UserResponse<T: Serialize> {
    pub user: T,
}

#[derive(Debug, Serialize)]
pub struct UsersResponse<T: Serialize> {
    pub users: T,
}
