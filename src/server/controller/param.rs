//! Query-string parsing shared by the listing and catalog search endpoints.
//!
//! Search parameters arrive as raw strings (comma-separated id lists, camelCase
//! sort names) and are parsed here into the typed filter model before any of
//! them reach a query builder. Unknown sort fields and malformed ids are
//! rejected up front.

use serde::Deserialize;

use crate::server::{
    error::AppError,
    query::filter::{ListingFilter, SortField, SortOrder},
};

/// Raw search parameters as they appear in the query string.
///
/// Every field is optional; an empty query returns the whole collection in
/// default order.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    /// Comma-separated brand ids, e.g. `brandIds=1,4,9`.
    pub brand_ids: Option<String>,
    /// Comma-separated category ids.
    pub category_ids: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub mileage_min: Option<i32>,
    pub mileage_max: Option<i32>,
    pub model_name: Option<String>,
    pub vendor_name: Option<String>,
    pub vendor_id: Option<i32>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

impl SearchQuery {
    /// Builds the typed filter from the raw parameters.
    ///
    /// # Returns
    /// - `Ok(ListingFilter)` - Parsed filter, not yet range-validated
    /// - `Err(AppError::BadRequest)` - An id list contains a non-numeric entry
    pub fn filter(&self) -> Result<ListingFilter, AppError> {
        Ok(ListingFilter {
            brand_ids: parse_id_list(self.brand_ids.as_deref())?,
            category_ids: parse_id_list(self.category_ids.as_deref())?,
            price_min: self.price_min,
            price_max: self.price_max,
            mileage_min: self.mileage_min,
            mileage_max: self.mileage_max,
            model_name: self.model_name.clone(),
            vendor_name: self.vendor_name.clone(),
            vendor_id: self.vendor_id,
        })
    }

    /// Parses the sort parameters, falling back to the defaults when absent.
    ///
    /// # Returns
    /// - `Ok((SortField, SortOrder))` - Recognized sort field and direction
    /// - `Err(AppError::QueryErr(InvalidSortField))` - Unrecognized value
    pub fn sort(&self) -> Result<(SortField, SortOrder), AppError> {
        let sort_by = match self.sort_by.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortField::default(),
        };
        let sort_order = match self.sort_order.as_deref() {
            Some(raw) => raw.parse()?,
            None => SortOrder::default(),
        };

        Ok((sort_by, sort_order))
    }
}

/// Pagination parameters for simple paginated collections.
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    pub page: Option<u64>,
    pub page_size: Option<u64>,
}

/// Query-string parameter of the recommended-listings endpoint.
#[derive(Deserialize, Default)]
pub struct RecommendedQuery {
    pub amount: Option<u64>,
}

/// Splits a comma-separated id list into integers.
fn parse_id_list(raw: Option<&str>) -> Result<Vec<i32>, AppError> {
    let Some(raw) = raw else {
        return Ok(Vec::new());
    };

    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i32>()
                .map_err(|_| AppError::BadRequest(format!("Invalid id '{}' in filter", part)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_list_parses_and_trims() {
        let ids = parse_id_list(Some("1, 4,9")).unwrap();
        assert_eq!(ids, vec![1, 4, 9]);
    }

    #[test]
    fn id_list_rejects_garbage() {
        let result = parse_id_list(Some("1,abc"));
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn empty_query_yields_empty_filter_and_defaults() {
        let query = SearchQuery::default();

        let filter = query.filter().unwrap();
        assert!(filter.brand_ids.is_empty());
        assert!(filter.price_min.is_none());

        let (sort_by, sort_order) = query.sort().unwrap();
        assert_eq!(sort_by, SortField::CreatedAt);
        assert_eq!(sort_order, SortOrder::Asc);
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let query = SearchQuery {
            sort_by: Some("password".to_string()),
            ..Default::default()
        };

        assert!(query.sort().is_err());
    }
}
