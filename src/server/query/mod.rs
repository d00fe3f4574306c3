//! Listing query engine.
//!
//! The three cooperating pieces behind marketplace search and statistics:
//!
//! - **Paginator** (`page`) - Turns 1-based page/page-size parameters into a
//!   skip/take pair, where absent pagination means "fetch everything".
//! - **Filter compiler** (`filter`) - Translates optional search parameters
//!   into a SeaORM `Condition`, parameterized by a [`filter::FieldMapping`] so
//!   the same compiler serves both the marketplace (listing) and the catalog
//!   (car) schemas.
//! - **Statistics aggregator** (`stats`) - Buckets matching rows into fixed
//!   price/mileage value classes and counts rows per bucket for distribution
//!   bar charts.
//!
//! All three are read-only; the data layer feeds them a base query that
//! already excludes soft-deleted rows.

pub mod filter;
pub mod page;
pub mod stats;
