//! Offset pagination: query parameters, the (items, total) result pair, and
//! derived page math. Listings are ordered newest-first by `created_at` with
//! `id` as a tie-break so repeated queries walk the collection exactly once.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const DEFAULT_WINDOW_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 100;

/// One bounded slice of an ordered listing plus the full matching-row count.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: i64,
}

/// Page-based query parameters (`?page=&size=`), 1-indexed.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

fn default_page() -> i64 {
    1
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PageQuery {
    /// Converts to a (skip, limit) window, rejecting out-of-range values.
    pub fn window(&self) -> Result<(i64, i64), AppError> {
        if self.page < 1 {
            return Err(AppError::Validation("page must be at least 1".into()));
        }
        if self.size < 1 {
            return Err(AppError::Validation("size must be at least 1".into()));
        }
        if self.size > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "size must be at most {}",
                MAX_LIMIT
            )));
        }
        Ok(((self.page - 1) * self.size, self.size))
    }
}

/// Offset-based query parameters (`?skip=&limit=`).
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct WindowQuery {
    #[serde(default)]
    pub skip: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    DEFAULT_WINDOW_LIMIT
}

impl WindowQuery {
    pub fn window(&self) -> Result<(i64, i64), AppError> {
        if self.skip < 0 {
            return Err(AppError::Validation("skip must not be negative".into()));
        }
        if self.limit < 1 {
            return Err(AppError::Validation("limit must be at least 1".into()));
        }
        if self.limit > MAX_LIMIT {
            return Err(AppError::Validation(format!(
                "limit must be at most {}",
                MAX_LIMIT
            )));
        }
        Ok((self.skip, self.limit))
    }
}

/// ceil(total / size); an empty collection has zero pages, not one.
pub fn total_pages(total: i64, size: i64) -> i64 {
    if total == 0 {
        0
    } else {
        (total + size - 1) / size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_maps_to_skip_limit() {
        let q = PageQuery { page: 1, size: 5 };
        assert_eq!(q.window().unwrap(), (0, 5));
        let q = PageQuery { page: 3, size: 5 };
        assert_eq!(q.window().unwrap(), (10, 5));
    }

    #[test]
    fn page_query_rejects_out_of_range() {
        assert!(PageQuery { page: 0, size: 5 }.window().is_err());
        assert!(PageQuery { page: 1, size: 0 }.window().is_err());
        assert!(PageQuery { page: 1, size: MAX_LIMIT + 1 }.window().is_err());
    }

    #[test]
    fn window_query_rejects_out_of_range() {
        assert!(WindowQuery { skip: -1, limit: 10 }.window().is_err());
        assert!(WindowQuery { skip: 0, limit: 0 }.window().is_err());
        assert_eq!(WindowQuery { skip: 7, limit: 3 }.window().unwrap(), (7, 3));
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(15, 5), 3);
        assert_eq!(total_pages(16, 5), 4);
    }
}
