//! Article listing parameters (`GET /articles?topic=&sort_by=&order=&limit=&p=`).
//!
//! Raw query-string values arrive as [`ArticleListParams`]. [`ArticleListParams::validate`]
//! turns them into an [`ArticleListing`] whose sort column and direction come
//! from closed enums, so the data layer can place them in SQL text without ever
//! touching client input. The topic filter is carried through as a value to be
//! bound, never interpolated.
//!
//! The topic existence check needs the database and is performed by the
//! caller *before* `validate`, which keeps the reporting order: topic,
//! `sort_by`, `order`, `limit`, `p`.

use serde::Deserialize;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Page size used when `limit` is absent.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

pub const MSG_TOPIC_NOT_FOUND: &str = "Topic does not exist";
pub const MSG_INVALID_SORT_BY: &str = "Sort_by value is not valid";
pub const MSG_INVALID_ORDER: &str = "Invalid order value";
pub const MSG_INVALID_LIMIT: &str = "Invalid limit value";
pub const MSG_INVALID_PAGE: &str = "Invalid page value";

// ---------------------------------------------------------------------------
// Sort column
// ---------------------------------------------------------------------------

/// Columns an article listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortColumn {
    Title,
    Topic,
    Author,
    Body,
    #[default]
    CreatedAt,
    Votes,
    ArticleId,
}

impl SortColumn {
    pub const ALL: [SortColumn; 7] = [
        SortColumn::Title,
        SortColumn::Topic,
        SortColumn::Author,
        SortColumn::Body,
        SortColumn::CreatedAt,
        SortColumn::Votes,
        SortColumn::ArticleId,
    ];

    /// Parse a `sort_by` value. Matching is exact (column names are lowercase).
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == raw)
    }

    /// The public name of the column as accepted in `sort_by`.
    pub fn as_str(self) -> &'static str {
        match self {
            SortColumn::Title => "title",
            SortColumn::Topic => "topic",
            SortColumn::Author => "author",
            SortColumn::Body => "body",
            SortColumn::CreatedAt => "created_at",
            SortColumn::Votes => "votes",
            SortColumn::ArticleId => "article_id",
        }
    }

    /// Qualified column reference against the `articles a` alias.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortColumn::Title => "a.title",
            SortColumn::Topic => "a.topic",
            SortColumn::Author => "a.author",
            SortColumn::Body => "a.body",
            SortColumn::CreatedAt => "a.created_at",
            SortColumn::Votes => "a.votes",
            SortColumn::ArticleId => "a.article_id",
        }
    }
}

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse an `order` value, ignoring ASCII case.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.eq_ignore_ascii_case("asc") {
            Some(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Some(SortOrder::Desc)
        } else {
            None
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Raw parameters
// ---------------------------------------------------------------------------

/// Article listing query parameters exactly as received.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleListParams {
    pub topic: Option<String>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<String>,
    pub p: Option<String>,
}

impl ArticleListParams {
    /// The topic filter, treating `?topic=` as absent.
    pub fn topic_filter(&self) -> Option<&str> {
        self.topic.as_deref().filter(|t| !t.is_empty())
    }

    /// Validate `sort_by`, `order`, `limit` and `p`, in that order.
    pub fn validate(&self) -> Result<ArticleListing, CoreError> {
        let sort = match self.sort_by.as_deref() {
            None | Some("") => SortColumn::default(),
            Some(raw) => {
                SortColumn::parse(raw).ok_or_else(|| CoreError::invalid(MSG_INVALID_SORT_BY))?
            }
        };

        let order = match self.order.as_deref() {
            None => SortOrder::default(),
            Some(raw) => {
                SortOrder::parse(raw).ok_or_else(|| CoreError::invalid(MSG_INVALID_ORDER))?
            }
        };

        let limit = match self.limit.as_deref() {
            None => DEFAULT_PAGE_LIMIT,
            Some(raw) => parse_positive(raw).ok_or_else(|| CoreError::invalid(MSG_INVALID_LIMIT))?,
        };

        let page = match self.p.as_deref() {
            None => 1,
            Some(raw) => parse_positive(raw).ok_or_else(|| CoreError::invalid(MSG_INVALID_PAGE))?,
        };

        let offset = (page - 1)
            .checked_mul(limit)
            .ok_or_else(|| CoreError::invalid(MSG_INVALID_PAGE))?;

        Ok(ArticleListing {
            topic: self.topic_filter().map(str::to_string),
            sort,
            order,
            limit,
            offset,
        })
    }
}

/// Parse a strictly positive integer.
fn parse_positive(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok().filter(|n| *n > 0)
}

// ---------------------------------------------------------------------------
// Validated listing
// ---------------------------------------------------------------------------

/// A validated, normalized article listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleListing {
    pub topic: Option<String>,
    pub sort: SortColumn,
    pub order: SortOrder,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ArticleListing {
    fn default() -> Self {
        Self {
            topic: None,
            sort: SortColumn::default(),
            order: SortOrder::default(),
            limit: DEFAULT_PAGE_LIMIT,
            offset: 0,
        }
    }
}

impl ArticleListing {
    /// The `ORDER BY` body: the requested column, then `created_at DESC` and
    /// `article_id` so equal keys come back in a stable order.
    pub fn order_clause(&self) -> String {
        let mut clause = format!("{} {}", self.sort.as_sql(), self.order.as_sql());
        if self.sort != SortColumn::CreatedAt {
            clause.push_str(", a.created_at DESC");
        }
        if self.sort != SortColumn::ArticleId {
            clause.push_str(", a.article_id ASC");
        }
        clause
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
