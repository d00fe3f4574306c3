use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ClassHistogramDto {
    pub class: String,
    pub bar_count: u32,
    pub bar_range: f64,
    pub min_value: f64,
    pub max_value: f64,
    pub bars: Vec<u64>,
}

#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct DimensionStatsDto {
    pub dimension: String,
    pub classes: Vec<ClassHistogramDto>,
}
