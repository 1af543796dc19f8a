/// Numeric primary keys (`article_id`, `comment_id`) are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Vote tallies are PostgreSQL INTEGER.
pub type Votes = i32;
