//! Validation of path ids and JSON request bodies.
//!
//! Bodies are deserialized loosely (every field is an optional
//! [`serde_json::Value`]) so that "missing" and "wrong type" can be reported
//! with distinct messages, then narrowed into the typed `New*` structs the
//! repositories accept.

use serde::Deserialize;
use serde_json::Value;

use crate::error::CoreError;
use crate::types::{DbId, Votes};

pub const MSG_INVALID_ID: &str = "Invalid id";
pub const MSG_BAD_REQUEST: &str = "Bad request";
pub const MSG_INVALID_BODY: &str = "Invalid body";
pub const MSG_INVALID_VOTE: &str = "Invalid new vote value";
pub const MSG_INVALID_COMMENT: &str = "Invalid comment";
pub const MSG_ARTICLE_MISSING_KEYS: &str = "Article object is missing keys";
pub const MSG_INVALID_ARTICLE_VALUES: &str = "Invalid article values";
pub const MSG_INVALID_TOPIC: &str = "Invalid topic";

/// Maximum slug length, matching the `topics.slug` column.
pub const MAX_SLUG_LENGTH: usize = 64;

// ---------------------------------------------------------------------------
// Path ids
// ---------------------------------------------------------------------------

/// Parse a numeric path segment (`article_id`, `comment_id`).
///
/// Only strictly positive integers are accepted.
pub fn parse_id(raw: &str) -> Result<DbId, CoreError> {
    raw.parse::<DbId>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| CoreError::invalid(MSG_INVALID_ID))
}

// ---------------------------------------------------------------------------
// Votes
// ---------------------------------------------------------------------------

/// Which entity a vote update targets; the two report failures differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTarget {
    Article,
    Comment,
}

impl VoteTarget {
    fn missing_message(self) -> &'static str {
        match self {
            VoteTarget::Article => MSG_BAD_REQUEST,
            VoteTarget::Comment => MSG_INVALID_BODY,
        }
    }

    fn invalid_message(self) -> &'static str {
        match self {
            VoteTarget::Article => MSG_BAD_REQUEST,
            VoteTarget::Comment => MSG_INVALID_VOTE,
        }
    }

    /// Parse the path id of the entity being voted on.
    ///
    /// A malformed article id is a plain `Bad request`; a malformed comment
    /// id is `Invalid id`, as everywhere else.
    pub fn parse_id(self, raw: &str) -> Result<DbId, CoreError> {
        parse_id(raw).map_err(|err| match self {
            VoteTarget::Article => CoreError::invalid(MSG_BAD_REQUEST),
            VoteTarget::Comment => err,
        })
    }
}

/// Body of `PATCH /articles/{id}` and `PATCH /comments/{id}`.
#[derive(Debug, Default, Deserialize)]
pub struct VoteUpdate {
    pub inc_votes: Option<Value>,
}

impl VoteUpdate {
    /// The signed vote delta. Must be a JSON integer within `i32`.
    pub fn delta(&self, target: VoteTarget) -> Result<Votes, CoreError> {
        let value = self
            .inc_votes
            .as_ref()
            .ok_or_else(|| CoreError::invalid(target.missing_message()))?;

        value
            .as_i64()
            .and_then(|n| Votes::try_from(n).ok())
            .ok_or_else(|| CoreError::invalid(target.invalid_message()))
    }
}

// ---------------------------------------------------------------------------
// Articles
// ---------------------------------------------------------------------------

/// Body of `POST /articles` as received.
#[derive(Debug, Default, Deserialize)]
pub struct ArticleDraft {
    pub author: Option<Value>,
    pub title: Option<Value>,
    pub body: Option<Value>,
    pub topic: Option<Value>,
}

/// A validated article ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewArticle {
    pub author: String,
    pub title: String,
    pub body: String,
    pub topic: String,
}

impl ArticleDraft {
    /// Missing keys are reported before malformed values.
    pub fn validate(self) -> Result<NewArticle, CoreError> {
        let (Some(author), Some(title), Some(body), Some(topic)) =
            (self.author, self.title, self.body, self.topic)
        else {
            return Err(CoreError::invalid(MSG_ARTICLE_MISSING_KEYS));
        };

        let field = |v: Value| {
            non_empty_string(v).ok_or_else(|| CoreError::invalid(MSG_INVALID_ARTICLE_VALUES))
        };

        Ok(NewArticle {
            author: field(author)?,
            title: field(title)?,
            body: field(body)?,
            topic: field(topic)?,
        })
    }
}

// ---------------------------------------------------------------------------
// Comments
// ---------------------------------------------------------------------------

/// Body of `POST /articles/{id}/comments` as received.
#[derive(Debug, Default, Deserialize)]
pub struct CommentDraft {
    pub username: Option<Value>,
    pub body: Option<Value>,
}

/// A validated comment ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

impl CommentDraft {
    pub fn validate(self) -> Result<NewComment, CoreError> {
        let author = self.username.and_then(non_empty_string);
        let body = self.body.and_then(non_empty_string);
        match (author, body) {
            (Some(author), Some(body)) => Ok(NewComment { author, body }),
            _ => Err(CoreError::invalid(MSG_INVALID_COMMENT)),
        }
    }
}

// ---------------------------------------------------------------------------
// Topics
// ---------------------------------------------------------------------------

/// Body of `POST /topics` as received.
#[derive(Debug, Default, Deserialize)]
pub struct TopicDraft {
    pub slug: Option<Value>,
    pub description: Option<Value>,
}

/// A validated topic ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTopic {
    pub slug: String,
    pub description: String,
}

impl TopicDraft {
    /// The slug must be URL-safe: ASCII alphanumerics, `-` and `_`.
    /// The description may be empty but must be a string when given.
    pub fn validate(self) -> Result<NewTopic, CoreError> {
        let slug = self
            .slug
            .and_then(non_empty_string)
            .filter(|s| is_valid_slug(s))
            .ok_or_else(|| CoreError::invalid(MSG_INVALID_TOPIC))?;

        let description = match self.description {
            None => String::new(),
            Some(Value::String(s)) => s,
            Some(_) => return Err(CoreError::invalid(MSG_INVALID_TOPIC)),
        };

        Ok(NewTopic { slug, description })
    }
}

pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

fn non_empty_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
