use crate::engine::constants::{
    MAX_RECOMMENDATIONS, SCORE_ACCEPTABLE, SCORE_DEFICIENT, SCORE_EXCESS_BENEFICIAL,
    SCORE_EXCESS_HARMFUL, SCORE_OPTIMAL,
};
use crate::models::{ComparisonRecord, NutrientCategory, NutritionScore, ScoreBreakdown, Status};

/// Points awarded to one record.
fn record_points(record: &ComparisonRecord) -> f64 {
    match record.status {
        Status::Optimal => SCORE_OPTIMAL,
        Status::Acceptable => SCORE_ACCEPTABLE,
        Status::Deficient => SCORE_DEFICIENT,
        Status::Excess => {
            if record.category.is_harmful() {
                SCORE_EXCESS_HARMFUL
            } else {
                SCORE_EXCESS_BENEFICIAL
            }
        }
    }
}

#[derive(Default)]
struct Bucket {
    total: f64,
    count: usize,
}

impl Bucket {
    fn add(&mut self, points: f64) {
        self.total += points;
        self.count += 1;
    }

    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total / self.count as f64
        }
    }
}

/// Score a comparison-record set 0-100.
///
/// Calorie records score in the macronutrient bucket. Empty buckets read
/// as 0 in the breakdown but are excluded from the overall mean, not
/// averaged in as zeros. Recommendations keep the record-set order and
/// truncate at 5.
pub fn score(records: &[ComparisonRecord]) -> NutritionScore {
    let mut macros = Bucket::default();
    let mut micros = Bucket::default();
    let mut harmful = Bucket::default();

    for record in records {
        let points = record_points(record);
        match record.category {
            NutrientCategory::Calorie | NutrientCategory::Macronutrient => macros.add(points),
            NutrientCategory::Micronutrient => micros.add(points),
            NutrientCategory::Harmful => harmful.add(points),
        }
    }

    let populated: Vec<&Bucket> = [&macros, &micros, &harmful]
        .into_iter()
        .filter(|bucket| bucket.count > 0)
        .collect();
    let overall = if populated.is_empty() {
        0.0
    } else {
        populated.iter().map(|bucket| bucket.mean()).sum::<f64>() / populated.len() as f64
    };

    let mut recommendations = Vec::new();
    for record in records {
        match record.status {
            Status::Deficient => recommendations.push(format!("Increase {}", record.substance)),
            Status::Excess => recommendations.push(format!("Reduce {}", record.substance)),
            _ => {}
        }
    }
    recommendations.truncate(MAX_RECOMMENDATIONS);

    NutritionScore {
        overall,
        breakdown: ScoreBreakdown {
            macronutrients: macros.mean(),
            micronutrients: micros.mean(),
            harmful_substances: harmful.mean(),
        },
        recommendations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::EducationEntry;
    use crate::models::{Unit, VisualConfig};

    fn record(substance: &str, category: NutrientCategory, status: Status) -> ComparisonRecord {
        ComparisonRecord {
            substance: substance.to_string(),
            category,
            consumed: 1.0,
            unit: Unit::Grams,
            display_amount: "1.0 g".to_string(),
            status,
            reference_values: Vec::new(),
            layers: Vec::new(),
            visual_config: VisualConfig {
                max_bar_width: 300.0,
                indicator_size: 12.0,
            },
            education: EducationEntry::generic(substance),
        }
    }

    #[test]
    fn test_score_aggregation_excludes_empty_buckets() {
        let records = vec![
            record("protein", NutrientCategory::Macronutrient, Status::Optimal),
            record("sodium", NutrientCategory::Harmful, Status::Excess),
        ];
        let result = score(&records);

        assert!((result.breakdown.macronutrients - 100.0).abs() < 1e-9);
        assert!((result.breakdown.harmful_substances - 20.0).abs() < 1e-9);
        assert_eq!(result.breakdown.micronutrients, 0.0);
        // micronutrients absent from the divisor: (100 + 20) / 2
        assert!((result.overall - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_excess_scores_by_category() {
        let harmful = score(&[record("sodium", NutrientCategory::Harmful, Status::Excess)]);
        let beneficial = score(&[record("iron", NutrientCategory::Micronutrient, Status::Excess)]);
        assert!((harmful.overall - 20.0).abs() < 1e-9);
        assert!((beneficial.overall - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_calories_score_with_macronutrients() {
        let records = vec![
            record("calories", NutrientCategory::Calorie, Status::Optimal),
            record("protein", NutrientCategory::Macronutrient, Status::Deficient),
        ];
        let result = score(&records);
        assert!((result.breakdown.macronutrients - 70.0).abs() < 1e-9);
        assert!((result.overall - 70.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_set_scores_zero() {
        let result = score(&[]);
        assert_eq!(result.overall, 0.0);
        assert!(result.recommendations.is_empty());
    }

    #[test]
    fn test_recommendations_in_record_order_truncated() {
        let records = vec![
            record("calcium", NutrientCategory::Micronutrient, Status::Deficient),
            record("iron", NutrientCategory::Micronutrient, Status::Deficient),
            record("magnesium", NutrientCategory::Micronutrient, Status::Deficient),
            record("potassium", NutrientCategory::Micronutrient, Status::Deficient),
            record("vitamin-c", NutrientCategory::Micronutrient, Status::Optimal),
            record("sodium", NutrientCategory::Harmful, Status::Excess),
            record("sugar", NutrientCategory::Harmful, Status::Excess),
        ];
        let result = score(&records);

        assert_eq!(
            result.recommendations,
            vec![
                "Increase calcium",
                "Increase iron",
                "Increase magnesium",
                "Increase potassium",
                "Reduce sodium",
            ]
        );
    }
}
