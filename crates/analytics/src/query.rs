//! Pagination and lookup.

use serde::Serialize;

use dataset::Dataset;
use types::{Passenger, PassengerId};

use crate::error::QueryError;

/// Page used when the client does not ask for one.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when the client does not ask for one.
pub const DEFAULT_PER_PAGE: u64 = 10;

/// A validated pagination request (`page >= 1`, `per_page >= 1`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    per_page: u64,
}

impl PageRequest {
    pub fn new(page: u64, per_page: u64) -> Result<Self, QueryError> {
        if page == 0 {
            return Err(QueryError::InvalidPage(page));
        }
        if per_page == 0 {
            return Err(QueryError::InvalidPerPage(per_page));
        }
        Ok(Self { page, per_page })
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn per_page(&self) -> u64 {
        self.per_page
    }

    /// Half-open record range `[start, end)` before clipping to the dataset.
    fn bounds(&self) -> (usize, usize) {
        let start = (self.page - 1).saturating_mul(self.per_page);
        let end = start.saturating_add(self.per_page);
        (to_index(start), to_index(end))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

/// One page of passengers plus the paging metadata.
#[derive(Debug, Clone, Serialize)]
pub struct Page {
    pub data: Vec<Passenger>,
    pub total: usize,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

/// Slice the dataset into the requested page.
///
/// Pages past the end yield an empty `data` vector, not an error.
pub fn paginate(dataset: &Dataset, request: PageRequest) -> Page {
    let records = dataset.records();
    let total = records.len();
    let (start, end) = request.bounds();

    let data = if start >= total {
        Vec::new()
    } else {
        records[start..end.min(total)].to_vec()
    };

    Page {
        data,
        total,
        page: request.page,
        per_page: request.per_page,
        total_pages: (total as u64).div_ceil(request.per_page),
    }
}

/// Look up a single passenger.
pub fn find_by_id(dataset: &Dataset, id: PassengerId) -> Option<&Passenger> {
    dataset.get(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::five_passengers;

    fn ids(page: &Page) -> Vec<u64> {
        page.data.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_page_request_validation() {
        assert!(PageRequest::new(1, 1).is_ok());
        assert_eq!(PageRequest::new(0, 10), Err(QueryError::InvalidPage(0)));
        assert_eq!(PageRequest::new(1, 0), Err(QueryError::InvalidPerPage(0)));
    }

    #[test]
    fn test_default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 1);
        assert_eq!(request.per_page(), 10);
    }

    #[test]
    fn test_second_page_of_two() {
        let dataset = five_passengers();
        let page = paginate(&dataset, PageRequest::new(2, 2).unwrap());

        assert_eq!(ids(&page), vec![3, 4]);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 2);
        assert_eq!(page.per_page, 2);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_last_page_is_clipped() {
        let dataset = five_passengers();
        let page = paginate(&dataset, PageRequest::new(3, 2).unwrap());
        assert_eq!(ids(&page), vec![5]);
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let dataset = five_passengers();
        let page = paginate(&dataset, PageRequest::new(4, 2).unwrap());
        assert!(page.data.is_empty());
        assert_eq!(page.total_pages, 3);

        let huge = paginate(&dataset, PageRequest::new(u64::MAX, u64::MAX).unwrap());
        assert!(huge.data.is_empty());
        assert_eq!(huge.total_pages, 1);
    }

    #[test]
    fn test_page_invariants_hold_for_all_sizes() {
        let dataset = five_passengers();
        for per_page in 1..=7u64 {
            for page in 1..=7u64 {
                let result = paginate(&dataset, PageRequest::new(page, per_page).unwrap());
                assert!(result.data.len() as u64 <= per_page);
                assert_eq!(result.total_pages, 5u64.div_ceil(per_page));
            }
        }
    }

    #[test]
    fn test_find_by_id() {
        let dataset = five_passengers();
        for id in 1..=5 {
            assert_eq!(find_by_id(&dataset, PassengerId(id)).unwrap().id.0, id);
        }
        assert!(find_by_id(&dataset, PassengerId(999)).is_none());
        assert!(find_by_id(&dataset, PassengerId(0)).is_none());
    }

    #[test]
    fn test_page_serialization() {
        let dataset = five_passengers();
        let page = paginate(&dataset, PageRequest::new(1, 1).unwrap());
        let json = serde_json::to_value(&page).unwrap();

        assert_eq!(json["total"], 5);
        assert_eq!(json["per_page"], 1);
        assert_eq!(json["total_pages"], 5);
        assert_eq!(json["data"][0]["PassengerId"], 1);
    }
}
