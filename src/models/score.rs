use serde::{Deserialize, Serialize};

/// Mean per-record score within each scoring bucket. Absent buckets are
/// reported as 0 but excluded from the overall mean.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub macronutrients: f64,
    pub micronutrients: f64,
    pub harmful_substances: f64,
}

/// 0-100 nutrition score with per-category breakdown and a short ranked
/// list of recommendations. Recomputed fully on each call; never cached.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NutritionScore {
    pub overall: f64,
    pub breakdown: ScoreBreakdown,
    pub recommendations: Vec<String>,
}
