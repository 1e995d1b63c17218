//! Page-number pagination primitives shared by the places backend.
//!
//! The crate owns three concerns:
//!
//! - [`PageRequest`]: a validated `(page, limit)` pair with offset arithmetic.
//! - [`PageMeta`]: the `{total, page, pageSize}` block returned to clients.
//! - [`Paginated`]: the `{meta, data}` envelope wrapping one page of items.
//!
//! Adapters parse raw query strings; this crate only enforces the numeric
//! bounds so every endpoint applies identical defaults and limits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Page number used when the client does not supply one.
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the client does not supply one.
pub const DEFAULT_LIMIT: u32 = 10;

/// Largest page size a client may request.
pub const MAX_LIMIT: u32 = 100;

/// Errors raised when a page request falls outside the accepted bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRequestError {
    /// Page numbers are one-based.
    #[error("page must be at least 1")]
    PageOutOfRange,
    /// Page size must be between 1 and [`MAX_LIMIT`].
    #[error("limit must be between 1 and {max}, got {got}")]
    LimitOutOfRange {
        /// Rejected page size.
        got: u32,
        /// Upper bound in force.
        max: u32,
    },
}

/// Validated one-based page request.
///
/// # Examples
/// ```
/// use pagination::PageRequest;
///
/// let request = PageRequest::new(3, 20).expect("bounds are valid");
/// assert_eq!(request.offset(), 40);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    page: u32,
    limit: u32,
}

impl PageRequest {
    /// Build a request after checking `page >= 1` and `1 <= limit <= MAX_LIMIT`.
    ///
    /// # Errors
    /// Returns [`PageRequestError`] naming the first violated bound.
    pub const fn new(page: u32, limit: u32) -> Result<Self, PageRequestError> {
        if page == 0 {
            return Err(PageRequestError::PageOutOfRange);
        }
        if limit == 0 || limit > MAX_LIMIT {
            return Err(PageRequestError::LimitOutOfRange {
                got: limit,
                max: MAX_LIMIT,
            });
        }
        Ok(Self { page, limit })
    }

    /// One-based page number.
    #[must_use]
    pub const fn page(self) -> u32 {
        self.page
    }

    /// Effective page size.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Number of items preceding this page in the ordered result set.
    #[must_use]
    pub fn offset(self) -> u64 {
        u64::from(self.page.saturating_sub(1)).saturating_mul(u64::from(self.limit))
    }

    /// Slice one page out of an already ordered sequence.
    ///
    /// Pages beyond the end yield an empty vector rather than an error.
    ///
    /// # Examples
    /// ```
    /// use pagination::PageRequest;
    ///
    /// let request = PageRequest::new(2, 2).expect("bounds are valid");
    /// assert_eq!(request.slice(vec![1, 2, 3, 4, 5]), vec![3, 4]);
    /// ```
    #[must_use]
    pub fn slice<T>(self, ordered: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(self.limit).unwrap_or(usize::MAX);
        ordered.into_iter().skip(skip).take(take).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Pagination metadata returned alongside each page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Number of items matching the query, independent of page and limit.
    pub total: u64,
    /// One-based page number that was served.
    pub page: u32,
    /// Effective page size after defaults and validation.
    pub page_size: u32,
}

impl PageMeta {
    /// Metadata for a page served from `request` out of `total` matches.
    #[must_use]
    pub const fn for_request(total: u64, request: PageRequest) -> Self {
        Self {
            total,
            page: request.page,
            page_size: request.limit,
        }
    }

    /// Metadata describing a response that carries exactly one item.
    #[must_use]
    pub const fn single() -> Self {
        Self {
            total: 1,
            page: 1,
            page_size: 1,
        }
    }
}

/// `{meta, data}` envelope for one page of results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Pagination metadata.
    pub meta: PageMeta,
    /// Items on this page, in result order.
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Wrap an already sliced page.
    #[must_use]
    pub const fn new(meta: PageMeta, data: Vec<T>) -> Self {
        Self { meta, data }
    }

    /// Wrap a single item with [`PageMeta::single`].
    #[must_use]
    pub fn single(item: T) -> Self {
        Self {
            meta: PageMeta::single(),
            data: vec![item],
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit coverage for bounds checking, slicing, and envelope shape.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 1)]
    #[case(1, MAX_LIMIT)]
    #[case(999_999, 10)]
    fn accepts_requests_within_bounds(#[case] page: u32, #[case] limit: u32) {
        let request = PageRequest::new(page, limit).expect("bounds are valid");
        assert_eq!(request.page(), page);
        assert_eq!(request.limit(), limit);
    }

    #[rstest]
    #[case(0, 10, PageRequestError::PageOutOfRange)]
    #[case(1, 0, PageRequestError::LimitOutOfRange { got: 0, max: MAX_LIMIT })]
    #[case(1, 101, PageRequestError::LimitOutOfRange { got: 101, max: MAX_LIMIT })]
    fn rejects_requests_outside_bounds(
        #[case] page: u32,
        #[case] limit: u32,
        #[case] expected: PageRequestError,
    ) {
        assert_eq!(PageRequest::new(page, limit), Err(expected));
    }

    #[rstest]
    fn default_request_uses_documented_defaults() {
        let request = PageRequest::default();
        assert_eq!(request.page(), DEFAULT_PAGE);
        assert_eq!(request.limit(), DEFAULT_LIMIT);
        assert_eq!(request.offset(), 0);
    }

    #[rstest]
    fn offset_does_not_overflow_for_large_pages() {
        let request = PageRequest::new(u32::MAX, MAX_LIMIT).expect("bounds are valid");
        assert_eq!(
            request.offset(),
            u64::from(u32::MAX - 1) * u64::from(MAX_LIMIT)
        );
    }

    #[rstest]
    fn slice_past_the_end_is_empty() {
        let request = PageRequest::new(4, 2).expect("bounds are valid");
        assert!(request.slice(vec![1, 2, 3, 4, 5]).is_empty());
    }

    #[rstest]
    fn concatenated_pages_reproduce_the_sequence() {
        let items: Vec<u32> = (0..23).collect();
        let mut collected = Vec::new();
        for page in 1..=3 {
            let request = PageRequest::new(page, 10).expect("bounds are valid");
            collected.extend(request.slice(items.clone()));
        }
        assert_eq!(collected, items);
    }

    #[rstest]
    fn envelope_serialises_with_camel_case_meta() {
        let request = PageRequest::new(2, 5).expect("bounds are valid");
        let page = Paginated::new(PageMeta::for_request(12, request), vec!["a"]);
        let json = serde_json::to_value(&page).expect("envelope serialises");
        assert_eq!(
            json,
            serde_json::json!({
                "meta": { "total": 12, "page": 2, "pageSize": 5 },
                "data": ["a"]
            })
        );
    }

    #[rstest]
    fn single_envelope_reports_one_item() {
        let page = Paginated::single(7_u8);
        assert_eq!(page.meta, PageMeta::single());
        assert_eq!(page.data, vec![7_u8]);
    }
}
