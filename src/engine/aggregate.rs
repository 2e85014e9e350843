use std::collections::HashMap;

use crate::error::{NutriError, Result};
use crate::models::NutrientReading;

/// Sum reading amounts per substance name.
///
/// Names match case-sensitively with no normalization. Non-positive
/// amounts still contribute; filtering happens downstream when a substance
/// has no usable reference. An empty input yields an empty map.
///
/// Fails fast on a reading that violates the basic contract (blank name,
/// non-finite amount) rather than coercing it into misleading totals.
pub fn aggregate(readings: &[NutrientReading]) -> Result<HashMap<String, f64>> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for reading in readings {
        if reading.name.trim().is_empty() {
            return Err(NutriError::InvalidReading(
                "reading has no substance name".to_string(),
            ));
        }
        if !reading.amount.is_finite() {
            return Err(NutriError::InvalidReading(format!(
                "non-finite amount for {}",
                reading.name
            )));
        }

        *totals.entry(reading.name.clone()).or_insert(0.0) += reading.amount;
    }

    Ok(totals)
}
