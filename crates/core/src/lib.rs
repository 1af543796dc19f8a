//! Domain logic for the Gazette news API.
//!
//! Everything here is pure: parameter parsing, payload validation and the
//! error kinds shared by the database and HTTP layers. No I/O.

pub mod article_query;
pub mod error;
pub mod payload;
pub mod types;
