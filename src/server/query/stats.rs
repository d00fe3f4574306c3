use sea_orm::sea_query::{Alias, ColumnRef, Condition, Expr, ExprTrait, Func};
use sea_orm::{
    ConnectionTrait, EntityTrait, FromQueryResult, PaginatorTrait, QueryFilter, QuerySelect,
    Select,
};
use std::str::FromStr;

use crate::server::error::{query::QueryError, AppError};

/// Histogram dimension: the listing attribute whose distribution is bucketed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Price,
    Mileage,
}

impl Dimension {
    fn name(&self) -> &'static str {
        match self {
            Self::Price => "price",
            Self::Mileage => "mileage",
        }
    }

    /// The named value classes of this dimension, in display order.
    ///
    /// Price classes are half-open on the right so that adjacent classes
    /// tile without double counting (except for the shared boundary the
    /// last bucket of each class absorbs). Mileage classes are closed
    /// integer ranges, so every non-last bucket's upper bound backs off by
    /// one from the next bucket's lower bound.
    fn classes(&self) -> [ClassSpec; 4] {
        match self {
            Self::Price => [
                ClassSpec {
                    name: "eco",
                    bounds: ClassBounds::Fixed {
                        min: 0.0,
                        max: 1_000_000.0,
                    },
                    step: 10_000.0,
                    inclusive: false,
                },
                ClassSpec {
                    name: "mid",
                    bounds: ClassBounds::Fixed {
                        min: 1_000_000.0,
                        max: 3_000_000.0,
                    },
                    step: 50_000.0,
                    inclusive: false,
                },
                ClassSpec {
                    name: "high",
                    bounds: ClassBounds::Fixed {
                        min: 3_000_000.0,
                        max: 5_000_000.0,
                    },
                    step: 50_000.0,
                    inclusive: false,
                },
                ClassSpec {
                    name: "all",
                    bounds: ClassBounds::Observed,
                    step: 50_000.0,
                    inclusive: false,
                },
            ],
            Self::Mileage => [
                ClassSpec {
                    name: "low",
                    bounds: ClassBounds::Fixed {
                        min: 1.0,
                        max: 50_000.0,
                    },
                    step: 5_000.0,
                    inclusive: true,
                },
                ClassSpec {
                    name: "mid",
                    bounds: ClassBounds::Fixed {
                        min: 50_001.0,
                        max: 150_000.0,
                    },
                    step: 10_000.0,
                    inclusive: true,
                },
                ClassSpec {
                    name: "high",
                    bounds: ClassBounds::Fixed {
                        min: 150_001.0,
                        max: 300_000.0,
                    },
                    step: 10_000.0,
                    inclusive: true,
                },
                ClassSpec {
                    name: "all",
                    bounds: ClassBounds::ObservedMax { min: 1.0 },
                    step: 5_000.0,
                    inclusive: true,
                },
            ],
        }
    }
}

impl FromStr for Dimension {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price" => Ok(Self::Price),
            "mileage" => Ok(Self::Mileage),
            other => Err(QueryError::InvalidDimension(other.to_string())),
        }
    }
}

/// Where a class takes its minimum and maximum from.
#[derive(Debug, Clone, Copy)]
enum ClassBounds {
    /// Constant bounds, independent of the data.
    Fixed { min: f64, max: f64 },
    /// Both bounds come from the matching rows' min/max aggregates.
    Observed,
    /// Fixed minimum, maximum from the matching rows' max aggregate.
    ObservedMax { min: f64 },
}

#[derive(Debug, Clone, Copy)]
struct ClassSpec {
    name: &'static str,
    bounds: ClassBounds,
    step: f64,
    inclusive: bool,
}

/// One histogram bucket before counting.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bucket {
    lower: f64,
    upper: f64,
    last: bool,
}

/// Lays out the buckets of one class.
///
/// The last bucket absorbs whatever remainder width is left after the full
/// steps, so its upper bound is the class maximum rather than
/// `lower + step`.
fn layout(min: f64, max: f64, step: f64, inclusive: bool) -> Vec<Bucket> {
    let span = if inclusive { max - min + 1.0 } else { max - min };
    // A degenerate range (every matching row shares one value) still gets a
    // single bucket so the observed class is never empty.
    let bar_count = ((span / step).ceil() as i64).max(1);

    (0..bar_count)
        .map(|i| {
            let lower = min + i as f64 * step;
            let last = i == bar_count - 1;
            let upper = if last {
                max
            } else if inclusive {
                lower + step - 1.0
            } else {
                lower + step
            };
            Bucket { lower, upper, last }
        })
        .collect()
}

/// Bucketed distribution of one value class.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassHistogram {
    pub class: &'static str,
    pub bar_count: u32,
    pub bar_range: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub bars: Vec<u64>,
}

/// Histograms for every class of one dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionStats {
    pub dimension: &'static str,
    pub classes: Vec<ClassHistogram>,
}

/// Buckets the rows matched by `base` into the dimension's value classes and
/// counts each bucket.
///
/// `base` carries the externally compiled filter predicate and any joins it
/// needs; `value` names the column being bucketed under that select. The
/// observed minimum and maximum are fetched once and reused by the classes
/// with data-derived bounds. Bucket counts are issued as one count query per
/// bucket since bucket widths are non-uniform and the last bucket absorbs
/// the remainder.
///
/// # Errors
/// - `QueryError::NoData` - No rows match, so the observed bounds are null
///   and bucket ranges cannot be derived
/// - `AppError::DbErr` - A min/max or count query failed
pub async fn aggregate<C, E>(
    db: &C,
    base: Select<E>,
    value: &ColumnRef,
    dimension: Dimension,
) -> Result<DimensionStats, AppError>
where
    C: ConnectionTrait,
    E: EntityTrait,
    E::Model: FromQueryResult + Sized + Send + Sync,
{
    // Integer-typed value columns must be cast or the f64 tuple refuses to
    // decode.
    let bounds: Option<(Option<f64>, Option<f64>)> = base
        .clone()
        .select_only()
        .expr_as(
            Func::min(Expr::col(value.clone()).cast_as(Alias::new("REAL"))),
            "min_value",
        )
        .expr_as(
            Func::max(Expr::col(value.clone()).cast_as(Alias::new("REAL"))),
            "max_value",
        )
        .into_tuple()
        .one(db)
        .await?;
    let (observed_min, observed_max) = bounds.unwrap_or((None, None));

    let (observed_min, observed_max) = match (observed_min, observed_max) {
        (Some(min), Some(max)) => (min, max),
        _ => return Err(QueryError::NoData(dimension.name()).into()),
    };

    let mut classes = Vec::with_capacity(4);
    for spec in dimension.classes() {
        let (min, max) = match spec.bounds {
            ClassBounds::Fixed { min, max } => (min, max),
            ClassBounds::Observed => (observed_min, observed_max),
            ClassBounds::ObservedMax { min } => (min, observed_max),
        };

        let buckets = layout(min, max, spec.step, spec.inclusive);
        let mut bars = Vec::with_capacity(buckets.len());
        for bucket in &buckets {
            // The last bucket closes on its upper bound so the class maximum
            // itself is counted.
            let upper = Expr::col(value.clone());
            let upper = if spec.inclusive || bucket.last {
                upper.lte(bucket.upper)
            } else {
                upper.lt(bucket.upper)
            };
            let count = base
                .clone()
                .filter(
                    Condition::all()
                        .add(Expr::col(value.clone()).gte(bucket.lower))
                        .add(upper),
                )
                .count(db)
                .await?;
            bars.push(count);
        }

        classes.push(ClassHistogram {
            class: spec.name,
            bar_count: bars.len() as u32,
            bar_range: spec.step,
            min_value: min,
            max_value: max,
            bars,
        });
    }

    Ok(DimensionStats {
        dimension: dimension.name(),
        classes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_open_layout_steps_by_range() {
        // The eco price class: [0, 1_000_000) in 10_000 steps.
        let buckets = layout(0.0, 1_000_000.0, 10_000.0, false);
        assert_eq!(buckets.len(), 100);
        assert_eq!(buckets[0].lower, 0.0);
        assert_eq!(buckets[0].upper, 10_000.0);
        assert_eq!(buckets[42].lower, 420_000.0);
        assert_eq!(buckets[99].lower, 990_000.0);
        assert_eq!(buckets[99].upper, 1_000_000.0);
        assert!(buckets[99].last);
    }

    #[test]
    fn inclusive_layout_backs_off_by_one() {
        // The low mileage class: [1, 50_000] in 5_000 steps.
        let buckets = layout(1.0, 50_000.0, 5_000.0, true);
        assert_eq!(buckets.len(), 10);
        assert_eq!(buckets[0].lower, 1.0);
        assert_eq!(buckets[0].upper, 5_000.0);
        assert_eq!(buckets[1].lower, 5_001.0);
        assert_eq!(buckets[1].upper, 10_000.0);
        assert_eq!(buckets[9].upper, 50_000.0);
    }

    #[test]
    fn last_bucket_absorbs_remainder_width() {
        // 1_000_000 wide observed range over 50_000 steps: 20 even buckets.
        let buckets = layout(500_000.0, 1_500_000.0, 50_000.0, false);
        assert_eq!(buckets.len(), 20);
        assert_eq!(buckets[19].lower, 1_450_000.0);
        assert_eq!(buckets[19].upper, 1_500_000.0);

        // A range that does not divide evenly: the last bucket is narrower.
        let buckets = layout(0.0, 125_000.0, 50_000.0, false);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets[2].lower, 100_000.0);
        assert_eq!(buckets[2].upper, 125_000.0);
    }

    #[test]
    fn degenerate_range_collapses_to_one_bucket() {
        // All matching rows share one value: the observed class still has a
        // bucket that counts them.
        let buckets = layout(300.0, 300.0, 50_000.0, false);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].lower, 300.0);
        assert_eq!(buckets[0].upper, 300.0);
        assert!(buckets[0].last);

        let buckets = layout(300.0, 300.0, 5_000.0, true);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].lower, 300.0);
        assert_eq!(buckets[0].upper, 300.0);
    }

    #[test]
    fn dimension_parses_from_query_string() {
        assert_eq!("price".parse::<Dimension>().unwrap(), Dimension::Price);
        assert_eq!("mileage".parse::<Dimension>().unwrap(), Dimension::Mileage);
        assert!(matches!(
            "horsepower".parse::<Dimension>(),
            Err(QueryError::InvalidDimension(_))
        ));
    }

    #[test]
    fn mileage_classes_tile_without_overlap() {
        let [low, mid, high, _] = Dimension::Mileage.classes();
        let low_buckets = layout(1.0, 50_000.0, low.step, true);
        let mid_buckets = layout(50_001.0, 150_000.0, mid.step, true);
        let high_buckets = layout(150_001.0, 300_000.0, high.step, true);

        let last_low = low_buckets.last().copied();
        let first_mid = mid_buckets.first().copied();
        assert_eq!(last_low.map(|b| b.upper), Some(50_000.0));
        assert_eq!(first_mid.map(|b| b.lower), Some(50_001.0));
        assert_eq!(mid_buckets.last().map(|b| b.upper), Some(150_000.0));
        assert_eq!(high_buckets.first().map(|b| b.lower), Some(150_001.0));
    }
}
