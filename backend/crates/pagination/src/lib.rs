//! Page/limit pagination primitives shared by catalog endpoints.
//!
//! Listing endpoints accept `page` and `limit` as raw query-string values.
//! [`PageRequest::from_query`] parses them with a strict contract:
//!
//! - absent or empty values fall back to [`DEFAULT_PAGE`] and
//!   [`DEFAULT_LIMIT`];
//! - values that are present but not integers are rejected with
//!   [`PageParamError`];
//! - integers outside the accepted range are coerced rather than rejected
//!   (`page < 1` becomes `1`, `limit` outside `1..=MAX_LIMIT` becomes
//!   [`DEFAULT_LIMIT`]).
//!
//! Results travel back to clients inside a [`Page`] envelope carrying the
//! effective page and limit together with the unpaginated total.
//!
//! # Example
//!
//! ```
//! use pagination::{Page, PageRequest};
//!
//! let request = PageRequest::from_query(Some("3"), Some("500")).expect("integers parse");
//! assert_eq!(request.page(), 3);
//! assert_eq!(request.limit(), 10);
//! assert_eq!(request.offset(), 20);
//!
//! let page = Page::new(vec!["a", "b"], request, 22);
//! assert_eq!(page.total, 22);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page used when the client does not supply one.
pub const DEFAULT_PAGE: u64 = 1;
/// Limit used when the client does not supply one or supplies one out of range.
pub const DEFAULT_LIMIT: u32 = 10;
/// Largest accepted page size.
pub const MAX_LIMIT: u32 = 100;

/// Errors raised when a pagination parameter is present but malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageParamError {
    /// `page` is not an integer.
    #[error("Invalid page")]
    InvalidPage,
    /// `limit` is not an integer.
    #[error("Invalid limit")]
    InvalidLimit,
}

impl PageParamError {
    /// Name of the offending query parameter.
    #[must_use]
    pub const fn field(self) -> &'static str {
        match self {
            Self::InvalidPage => "page",
            Self::InvalidLimit => "limit",
        }
    }
}

/// Effective page coordinates after parsing and clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    /// Build a request from already-parsed integers, applying the clamping
    /// rules.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::clamped(-4, 0);
    /// assert_eq!((request.page(), request.limit()), (1, 10));
    /// ```
    #[must_use]
    pub fn clamped(page: i64, limit: i64) -> Self {
        let page = u64::try_from(page)
            .ok()
            .filter(|value| *value >= 1)
            .unwrap_or(DEFAULT_PAGE);
        let limit = u32::try_from(limit)
            .ok()
            .filter(|value| (1..=MAX_LIMIT).contains(value))
            .unwrap_or(DEFAULT_LIMIT);
        Self { page, limit }
    }

    /// Parse raw query-string values.
    ///
    /// `page` is parsed before `limit`, so a request with both malformed
    /// reports [`PageParamError::InvalidPage`].
    ///
    /// # Errors
    /// Returns [`PageParamError`] naming the first parameter that is present
    /// but not an integer.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Result<Self, PageParamError> {
        let page = parse_param(page, DEFAULT_PAGE_RAW, PageParamError::InvalidPage)?;
        let limit = parse_param(limit, DEFAULT_LIMIT_RAW, PageParamError::InvalidLimit)?;
        Ok(Self::clamped(page, limit))
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(&self) -> u64 {
        self.page
    }

    /// Maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Number of items to skip, saturating on overflow.
    #[must_use]
    pub const fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.limit as u64)
    }
}

const DEFAULT_PAGE_RAW: i64 = 1;
const DEFAULT_LIMIT_RAW: i64 = 10;

fn parse_param(
    raw: Option<&str>,
    default: i64,
    error: PageParamError,
) -> Result<i64, PageParamError> {
    match raw {
        None | Some("") => Ok(default),
        Some(value) => value.parse::<i64>().map_err(|_| error),
    }
}

/// Page envelope returned by listing endpoints.
///
/// Serialises as `{"data": [...], "page": 1, "limit": 10, "total": 42}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Effective one-based page number.
    pub page: u64,
    /// Effective page size.
    pub limit: u32,
    /// Count of all matching items, ignoring pagination.
    pub total: u64,
}

impl<T> Page<T> {
    /// Wrap a page of items with the request that produced it.
    #[must_use]
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        Self {
            data,
            page: request.page(),
            limit: request.limit(),
            total,
        }
    }

    /// Convert every item, keeping the pagination metadata.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            data: self.data.into_iter().map(f).collect(),
            page: self.page,
            limit: self.limit,
            total: self.total,
        }
    }
}
