pub mod articles;
pub mod comments;
pub mod endpoints;
pub mod topics;
pub mod users;
