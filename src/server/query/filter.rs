use sea_orm::sea_query::{
    ColumnRef, Condition, Expr, ExprTrait, Func, IntoColumnRef, Order, SimpleExpr,
};
use std::str::FromStr;

use crate::server::error::query::QueryError;

/// Validated search parameters for a listing or catalog query.
///
/// Every field is optional; an absent field contributes no clause to the
/// compiled predicate. Id vectors follow scalar-or-list semantics: one id
/// compiles to an equality, several to a set membership, none to nothing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingFilter {
    pub brand_ids: Vec<i32>,
    pub category_ids: Vec<i32>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub mileage_min: Option<i32>,
    pub mileage_max: Option<i32>,
    pub model_name: Option<String>,
    pub vendor_name: Option<String>,
    pub vendor_id: Option<i32>,
}

impl ListingFilter {
    /// Checks range coherence before the filter is compiled.
    ///
    /// A range with both bounds present must satisfy min <= max. Single-bound
    /// ranges pass validation; they simply produce no clause (see
    /// [`ListingFilter::compile`]).
    ///
    /// # Returns
    /// - `Ok(())` - All present ranges are coherent
    /// - `Err(QueryError::InvalidRange)` - A minimum exceeds its maximum
    pub fn validate(&self) -> Result<(), QueryError> {
        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            if min > max {
                return Err(QueryError::InvalidRange {
                    field: "price",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        if let (Some(min), Some(max)) = (self.mileage_min, self.mileage_max) {
            if min > max {
                return Err(QueryError::InvalidRange {
                    field: "mileage",
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Compiles the filter into a conjunction of independent optional clauses.
    ///
    /// Each clause appears only when its parameter was supplied and the
    /// mapping carries a column for its role:
    ///
    /// - brand/category ids: equality for one id, `IN` for several, nothing
    ///   for an empty list
    /// - price/mileage ranges: an inclusive closed range only when **both**
    ///   bounds are present; a single bound yields no clause at all
    /// - model/vendor names: case-insensitive substring match, each added as
    ///   its own top-level `AND` term
    /// - vendor id: exact match, used for a vendor's own inventory view
    ///
    /// # Arguments
    /// - `mapping` - Column mapping naming which concrete columns play each
    ///   filter role
    ///
    /// # Returns
    /// - `Condition` - `AND` of all present clauses (empty condition matches
    ///   everything)
    pub fn compile(&self, mapping: &FieldMapping) -> Condition {
        let mut cond = Condition::all()
            .add_option(id_clause(&mapping.brand_id, &self.brand_ids))
            .add_option(id_clause(&mapping.category_id, &self.category_ids));

        if let (Some(min), Some(max)) = (self.price_min, self.price_max) {
            cond = cond
                .add(Expr::col(mapping.price.clone()).gte(min))
                .add(Expr::col(mapping.price.clone()).lte(max));
        }

        if let Some(mileage) = &mapping.mileage {
            if let (Some(min), Some(max)) = (self.mileage_min, self.mileage_max) {
                cond = cond
                    .add(Expr::col(mileage.clone()).gte(min))
                    .add(Expr::col(mileage.clone()).lte(max));
            }
        }

        if let (Some(col), Some(name)) = (&mapping.model_name, &self.model_name) {
            cond = cond.add(name_clause(col, name));
        }

        if let (Some(col), Some(name)) = (&mapping.vendor_name, &self.vendor_name) {
            cond = cond.add(name_clause(col, name));
        }

        if let (Some(col), Some(vendor_id)) = (&mapping.vendor_id, self.vendor_id) {
            cond = cond.add(Expr::col(col.clone()).eq(vendor_id));
        }

        cond
    }
}

/// Equality for a single id, set membership for several, nothing for none.
fn id_clause(col: &ColumnRef, ids: &[i32]) -> Option<SimpleExpr> {
    match ids {
        [] => None,
        [only] => Some(Expr::col(col.clone()).eq(*only)),
        many => Some(Expr::col(col.clone()).is_in(many.iter().copied())),
    }
}

/// Case-insensitive substring match: `LOWER(col) LIKE '%needle%'`.
fn name_clause(col: &ColumnRef, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(col.clone())))
        .like(format!("%{}%", needle.to_lowercase()))
}

/// Maps filter roles onto concrete columns so the same compiler can target
/// different schemas.
///
/// The marketplace mapping points the price role at the listing's own price,
/// while the catalog mapping points it at the car's base price. Roles a
/// schema does not have (the catalog has no mileage or vendor) are `None`
/// and their parameters compile to no clause.
#[derive(Debug, Clone)]
pub struct FieldMapping {
    pub price: ColumnRef,
    pub mileage: Option<ColumnRef>,
    pub brand_id: ColumnRef,
    pub category_id: ColumnRef,
    pub model_name: Option<ColumnRef>,
    pub vendor_name: Option<ColumnRef>,
    pub vendor_id: Option<ColumnRef>,
    pub year: ColumnRef,
    pub created_at: ColumnRef,
    pub view_count: Option<ColumnRef>,
    pub favorite_count: Option<ColumnRef>,
}

impl FieldMapping {
    /// Mapping for marketplace listing queries (listing joined with car,
    /// model, and vendor).
    pub fn marketplace() -> Self {
        use entity::{car, car_model, listing, vendor};

        Self {
            price: (listing::Entity, listing::Column::Price).into_column_ref(),
            mileage: Some((listing::Entity, listing::Column::Mileage).into_column_ref()),
            brand_id: (car::Entity, car::Column::BrandId).into_column_ref(),
            category_id: (car::Entity, car::Column::CategoryId).into_column_ref(),
            model_name: Some((car_model::Entity, car_model::Column::Name).into_column_ref()),
            vendor_name: Some((vendor::Entity, vendor::Column::Name).into_column_ref()),
            vendor_id: Some((listing::Entity, listing::Column::VendorId).into_column_ref()),
            year: (listing::Entity, listing::Column::Year).into_column_ref(),
            created_at: (listing::Entity, listing::Column::CreatedAt).into_column_ref(),
            view_count: Some((listing::Entity, listing::Column::ViewCount).into_column_ref()),
            favorite_count: Some(
                (listing::Entity, listing::Column::FavoriteCount).into_column_ref(),
            ),
        }
    }

    /// Mapping for catalog car queries (car joined with its model).
    pub fn catalog() -> Self {
        use entity::{car, car_model};

        Self {
            price: (car::Entity, car::Column::BasePrice).into_column_ref(),
            mileage: None,
            brand_id: (car::Entity, car::Column::BrandId).into_column_ref(),
            category_id: (car::Entity, car::Column::CategoryId).into_column_ref(),
            model_name: Some((car_model::Entity, car_model::Column::Name).into_column_ref()),
            vendor_name: None,
            vendor_id: None,
            year: (car::Entity, car::Column::Year).into_column_ref(),
            created_at: (car::Entity, car::Column::CreatedAt).into_column_ref(),
            view_count: None,
            favorite_count: None,
        }
    }
}

/// Recognized sortable fields.
///
/// The raw query-string value is parsed into this closed set; anything else
/// is rejected instead of being passed through to the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    CreatedAt,
    Price,
    Mileage,
    Year,
    ViewCount,
    FavoriteCount,
}

impl SortField {
    /// Resolves the sort field to a concrete column under the given mapping.
    ///
    /// # Returns
    /// - `Ok(ColumnRef)` - The column to order by
    /// - `Err(QueryError::InvalidSortField)` - The schema has no column for
    ///   this role (e.g. sorting the catalog by mileage)
    pub fn resolve(&self, mapping: &FieldMapping) -> Result<ColumnRef, QueryError> {
        let col = match self {
            Self::CreatedAt => Some(mapping.created_at.clone()),
            Self::Price => Some(mapping.price.clone()),
            Self::Mileage => mapping.mileage.clone(),
            Self::Year => Some(mapping.year.clone()),
            Self::ViewCount => mapping.view_count.clone(),
            Self::FavoriteCount => mapping.favorite_count.clone(),
        };

        col.ok_or_else(|| QueryError::InvalidSortField(format!("{:?}", self)))
    }
}

impl FromStr for SortField {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "price" => Ok(Self::Price),
            "mileage" => Ok(Self::Mileage),
            "year" => Ok(Self::Year),
            "viewCount" | "view_count" => Ok(Self::ViewCount),
            "favoriteCount" | "favorite_count" => Ok(Self::FavoriteCount),
            other => Err(QueryError::InvalidSortField(other.to_string())),
        }
    }
}

/// Sort direction, ascending by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn into_order(self) -> Order {
        match self {
            Self::Asc => Order::Asc,
            Self::Desc => Order::Desc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(QueryError::InvalidSortField(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    /// Renders only the WHERE clause of the compiled filter. The projection
    /// names every listing column, so assertions about absent predicates must
    /// not look at the full statement.
    fn to_sql(filter: &ListingFilter) -> String {
        let sql = entity::prelude::Listing::find()
            .filter(filter.compile(&FieldMapping::marketplace()))
            .build(DbBackend::Sqlite)
            .to_string();
        clause_of(&sql).to_string()
    }

    fn clause_of(sql: &str) -> &str {
        sql.split_once(" WHERE ").map(|(_, c)| c).unwrap_or("")
    }

    #[test]
    fn empty_filter_compiles_to_no_clauses() {
        // An empty condition renders as a bare TRUE, never a column predicate.
        let sql = to_sql(&ListingFilter::default());
        assert!(!sql.contains('"'), "unexpected clause in: {}", sql);
    }

    #[test]
    fn single_brand_id_compiles_to_equality() {
        let filter = ListingFilter {
            brand_ids: vec![4],
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(sql.contains("\"car\".\"brand_id\" = 4"), "{}", sql);
        assert!(!sql.contains("IN"), "{}", sql);
    }

    #[test]
    fn brand_id_list_compiles_to_set_membership() {
        let filter = ListingFilter {
            brand_ids: vec![1, 3],
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(sql.contains("\"car\".\"brand_id\" IN (1, 3)"), "{}", sql);
    }

    #[test]
    fn price_clause_requires_both_bounds() {
        // The documented quirk: a lone minimum produces no price clause.
        let filter = ListingFilter {
            price_min: Some(100_000.0),
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(!sql.contains("price"), "{}", sql);

        let filter = ListingFilter {
            price_min: Some(100_000.0),
            price_max: Some(500_000.0),
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(sql.contains("\"listing\".\"price\" >= 100000"), "{}", sql);
        assert!(sql.contains("\"listing\".\"price\" <= 500000"), "{}", sql);
    }

    #[test]
    fn clause_set_matches_supplied_parameters_exactly() {
        let filter = ListingFilter {
            category_ids: vec![2],
            mileage_min: Some(0),
            mileage_max: Some(60_000),
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(sql.contains("category_id"), "{}", sql);
        assert!(sql.contains("mileage"), "{}", sql);
        assert!(!sql.contains("brand_id"), "{}", sql);
        assert!(!sql.contains("price"), "{}", sql);
        assert!(!sql.contains("LIKE"), "{}", sql);
    }

    #[test]
    fn name_clauses_are_case_insensitive_substring_matches() {
        let filter = ListingFilter {
            model_name: Some("Civic".to_string()),
            vendor_name: Some("Premium".to_string()),
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(
            sql.contains("LOWER(\"car_model\".\"name\") LIKE '%civic%'"),
            "{}",
            sql
        );
        assert!(
            sql.contains("LOWER(\"vendor\".\"name\") LIKE '%premium%'"),
            "{}",
            sql
        );
    }

    #[test]
    fn vendor_id_compiles_to_exact_match() {
        let filter = ListingFilter {
            vendor_id: Some(9),
            ..Default::default()
        };
        let sql = to_sql(&filter);
        assert!(sql.contains("\"listing\".\"vendor_id\" = 9"), "{}", sql);
    }

    #[test]
    fn catalog_mapping_ignores_roles_it_does_not_have() {
        let filter = ListingFilter {
            mileage_min: Some(0),
            mileage_max: Some(10_000),
            vendor_name: Some("anyone".to_string()),
            ..Default::default()
        };
        let sql = entity::prelude::Car::find()
            .filter(filter.compile(&FieldMapping::catalog()))
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(!clause_of(&sql).contains('"'), "{}", sql);
    }

    #[test]
    fn inverted_range_fails_validation() {
        let filter = ListingFilter {
            price_min: Some(500.0),
            price_max: Some(100.0),
            ..Default::default()
        };
        assert!(matches!(
            filter.validate(),
            Err(QueryError::InvalidRange { field: "price", .. })
        ));

        let filter = ListingFilter {
            mileage_min: Some(90_000),
            mileage_max: Some(10),
            ..Default::default()
        };
        assert!(filter.validate().is_err());
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        assert!(matches!(
            "basePrice; DROP TABLE listing".parse::<SortField>(),
            Err(QueryError::InvalidSortField(_))
        ));
        assert_eq!("price".parse::<SortField>().unwrap(), SortField::Price);
        assert_eq!(
            "createdAt".parse::<SortField>().unwrap(),
            SortField::CreatedAt
        );
    }

    #[test]
    fn sort_field_unmapped_for_schema_is_rejected() {
        assert!(SortField::Mileage.resolve(&FieldMapping::catalog()).is_err());
        assert!(SortField::Mileage
            .resolve(&FieldMapping::marketplace())
            .is_ok());
    }
}
