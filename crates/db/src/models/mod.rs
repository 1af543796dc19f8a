//! Row structs returned by the repositories.
//!
//! Each derives `FromRow` for sqlx and `Serialize` for the HTTP layer. Insert
//! inputs are the validated `New*` types from `gazette_core::payload`.

pub mod article;
pub mod comment;
pub mod topic;
pub mod user;
