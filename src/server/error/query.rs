use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors produced by the listing query engine (paginator, filter compiler,
/// statistics aggregator).
#[derive(Error, Debug, PartialEq, Eq)]
pub enum QueryError {
    /// Page or page size was zero.
    ///
    /// Pages are 1-based and a page size of zero never makes sense; both are
    /// rejected before any query is issued. Results in a 400 Bad Request.
    #[error("Invalid pagination: {0}")]
    InvalidPage(String),

    /// A range filter had its minimum above its maximum.
    ///
    /// Applies to both the price and the mileage range. Results in a 400 Bad
    /// Request.
    #[error("Invalid {field} range: min {min} exceeds max {max}")]
    InvalidRange {
        field: &'static str,
        min: String,
        max: String,
    },

    /// The requested sort field is not one of the recognized sortable columns.
    ///
    /// The raw string is never forwarded to the database. Results in a 400 Bad
    /// Request naming the offending value.
    #[error("Unknown sort field '{0}'")]
    InvalidSortField(String),

    /// The requested histogram dimension is not `price` or `mileage`.
    ///
    /// Results in a 400 Bad Request naming the offending value.
    #[error("Unknown statistics dimension '{0}'")]
    InvalidDimension(String),

    /// Statistics were requested over an empty matching set.
    ///
    /// Without an observed minimum and maximum the bucket ranges are undefined,
    /// so the aggregator refuses to fabricate them. Results in a 500 Internal
    /// Server Error, mirroring the upstream behavior of the histogram endpoint.
    #[error("No data available to compute {0} statistics")]
    NoData(&'static str),
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::NoData(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
