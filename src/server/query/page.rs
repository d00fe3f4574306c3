use crate::server::error::query::QueryError;

/// Offset/limit pair computed from 1-based pagination parameters.
///
/// `skip`/`take` of `None` both mean "no slicing": the caller omitted
/// pagination and wants every matching row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSlice {
    pub skip: Option<u64>,
    pub take: Option<u64>,
}

impl PageSlice {
    /// Computes the slice for a 1-based page and a page size.
    ///
    /// Both-or-neither semantics: if either parameter is absent the result is
    /// unbounded and the downstream query fetches all rows. A provided page or
    /// page size of zero is rejected before any query is issued.
    ///
    /// # Arguments
    /// - `page` - 1-based page number, if the caller paginates
    /// - `page_size` - Number of rows per page, if the caller paginates
    ///
    /// # Returns
    /// - `Ok(PageSlice)` - skip = (page - 1) * page_size, take = page_size,
    ///   or the unbounded slice when either parameter is absent
    /// - `Err(QueryError::InvalidPage)` - A provided value was zero
    pub fn new(page: Option<u64>, page_size: Option<u64>) -> Result<Self, QueryError> {
        if page == Some(0) {
            return Err(QueryError::InvalidPage("page must be at least 1".to_string()));
        }
        if page_size == Some(0) {
            return Err(QueryError::InvalidPage(
                "pageSize must be at least 1".to_string(),
            ));
        }

        match (page, page_size) {
            (Some(page), Some(page_size)) => Ok(Self {
                skip: Some((page - 1) * page_size),
                take: Some(page_size),
            }),
            _ => Ok(Self::unbounded()),
        }
    }

    /// The slice that fetches every matching row.
    pub fn unbounded() -> Self {
        Self {
            skip: None,
            take: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_present_computes_skip_and_take() {
        let slice = PageSlice::new(Some(2), Some(10)).unwrap();
        assert_eq!(slice.skip, Some(10));
        assert_eq!(slice.take, Some(10));

        let slice = PageSlice::new(Some(1), Some(25)).unwrap();
        assert_eq!(slice.skip, Some(0));
        assert_eq!(slice.take, Some(25));

        let slice = PageSlice::new(Some(7), Some(3)).unwrap();
        assert_eq!(slice.skip, Some(18));
        assert_eq!(slice.take, Some(3));
    }

    #[test]
    fn missing_page_is_unbounded() {
        let slice = PageSlice::new(None, Some(10)).unwrap();
        assert_eq!(slice, PageSlice::unbounded());
    }

    #[test]
    fn missing_page_size_is_unbounded() {
        let slice = PageSlice::new(Some(3), None).unwrap();
        assert_eq!(slice, PageSlice::unbounded());
    }

    #[test]
    fn both_missing_is_unbounded() {
        let slice = PageSlice::new(None, None).unwrap();
        assert_eq!(slice.skip, None);
        assert_eq!(slice.take, None);
    }

    #[test]
    fn zero_page_is_rejected() {
        assert!(matches!(
            PageSlice::new(Some(0), Some(10)),
            Err(QueryError::InvalidPage(_))
        ));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            PageSlice::new(Some(1), Some(0)),
            Err(QueryError::InvalidPage(_))
        ));
    }

    #[test]
    fn zero_is_rejected_even_when_partner_is_absent() {
        assert!(PageSlice::new(Some(0), None).is_err());
        assert!(PageSlice::new(None, Some(0)).is_err());
    }
}
