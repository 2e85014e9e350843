use std::collections::HashMap;

use crate::engine::classify::classify;
use crate::engine::constants::DAYS_PER_WEEK;
use crate::engine::layers::{annotate_positions, compute_layers, reference_basis};
use crate::engine::scoring::score;
use crate::engine::units::display_amount;
use crate::models::{
    ComparisonRecord, DayEntry, DisplayScale, NutrientCategory, ReferenceValue, Status,
    VisualConfig, WeeklyRecord, WeeklyReport, WeeklyTrend,
};

/// Merge seven daily record sets into one weekly report.
///
/// Consumed totals sum across the week and every reference scales by 7,
/// so a substance eaten at the same ratio of its daily allowance all week
/// keeps the same status in the rollup. The per-day breakdown always has
/// 7 entries; days without data carry value 0 classified against the
/// daily, unscaled references.
pub fn build_weekly_report(daily_sets: &[Vec<ComparisonRecord>], scale: &DisplayScale) -> WeeklyReport {
    let mut slots: Vec<&[ComparisonRecord]> = Vec::with_capacity(DAYS_PER_WEEK);
    for i in 0..DAYS_PER_WEEK {
        slots.push(daily_sets.get(i).map(Vec::as_slice).unwrap_or(&[]));
    }

    // substance -> (first day's record as reference template, per-day values)
    let mut by_substance: HashMap<String, (&ComparisonRecord, Vec<f64>)> = HashMap::new();
    for (day_index, day) in slots.iter().enumerate() {
        for record in *day {
            let entry = by_substance
                .entry(record.substance.clone())
                .or_insert_with(|| (record, vec![0.0; DAYS_PER_WEEK]));
            entry.1[day_index] = record.consumed;
        }
    }

    let mut records = Vec::with_capacity(by_substance.len());
    for (substance, (template, daily_values)) in by_substance {
        records.push(roll_up(&substance, template, &daily_values, scale));
    }
    records.sort_by(|a, b| {
        a.record
            .category
            .sort_rank()
            .cmp(&b.record.category.sort_rank())
            .then_with(|| a.record.substance.cmp(&b.record.substance))
    });

    let days_with_data = slots.iter().filter(|day| !day.is_empty()).count() as u32;
    WeeklyReport {
        records,
        days_with_data,
        consistency_score: days_with_data as f64 / DAYS_PER_WEEK as f64 * 100.0,
    }
}

fn roll_up(
    substance: &str,
    template: &ComparisonRecord,
    daily_values: &[f64],
    scale: &DisplayScale,
) -> WeeklyRecord {
    let daily_refs: Vec<ReferenceValue> = template
        .reference_values
        .iter()
        .map(|p| p.reference.clone())
        .collect();
    let weekly_refs: Vec<ReferenceValue> = daily_refs
        .iter()
        .map(|r| r.scaled(DAYS_PER_WEEK as f64))
        .collect();

    let weekly_total: f64 = daily_values.iter().sum();
    let category = template.category;
    let unit = template.unit;
    let basis = reference_basis(&weekly_refs).unwrap_or(0.0);

    let daily_breakdown: Vec<DayEntry> = daily_values
        .iter()
        .enumerate()
        .map(|(i, &value)| DayEntry {
            day_number: (i + 1) as u32,
            value,
            status: classify(value, &daily_refs, category),
        })
        .collect();

    WeeklyRecord {
        record: ComparisonRecord {
            substance: substance.to_string(),
            category,
            consumed: weekly_total,
            unit,
            display_amount: display_amount(weekly_total, unit),
            status: classify(weekly_total, &weekly_refs, category),
            reference_values: annotate_positions(&weekly_refs, basis),
            layers: compute_layers(weekly_total, basis, scale),
            visual_config: VisualConfig::from(scale),
            education: template.education.clone(),
        },
        daily_breakdown,
        weekly_average: weekly_total / DAYS_PER_WEEK as f64,
        daily_variation: population_std_dev(daily_values),
    }
}

/// Week-over-week movement between two weekly reports.
///
/// A substance improves when its status ordinal rises (excess ranks below
/// deficient); substances absent from either week are left out.
pub fn analyze_trend(current: &WeeklyReport, previous: &WeeklyReport) -> WeeklyTrend {
    let nutrition_score_change =
        score(&comparison_records(current)).overall - score(&comparison_records(previous)).overall;
    let calorie_change = weekly_calories(current) - weekly_calories(previous);

    let previous_status: HashMap<&str, Status> = previous
        .records
        .iter()
        .map(|w| (w.record.substance.as_str(), w.record.status))
        .collect();

    let mut improving = Vec::new();
    let mut declining = Vec::new();
    for weekly in &current.records {
        let Some(&prior) = previous_status.get(weekly.record.substance.as_str()) else {
            continue;
        };
        let now = weekly.record.status;
        if now.trend_rank() > prior.trend_rank() {
            improving.push(weekly.record.substance.clone());
        } else if now.trend_rank() < prior.trend_rank() {
            declining.push(weekly.record.substance.clone());
        }
    }

    WeeklyTrend {
        nutrition_score_change,
        calorie_change,
        improving,
        declining,
    }
}

fn comparison_records(report: &WeeklyReport) -> Vec<ComparisonRecord> {
    report.records.iter().map(|w| w.record.clone()).collect()
}

fn weekly_calories(report: &WeeklyReport) -> f64 {
    report
        .records
        .iter()
        .filter(|w| w.record.category == NutrientCategory::Calorie)
        .map(|w| w.record.consumed)
        .sum()
}

/// Population standard deviation of the daily values.
fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let variance =
        values.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::data::{EducationLibrary, ReferenceTable};
    use crate::engine::builder::build_comparison_records;
    use crate::models::{AgeGroup, Gender, Profile};

    fn daily_records(totals: &[(&str, f64)]) -> Vec<ComparisonRecord> {
        let totals: HashMap<String, f64> = totals
            .iter()
            .map(|(name, amount)| (name.to_string(), *amount))
            .collect();
        build_comparison_records(
            &totals,
            &Profile {
                age_group: AgeGroup::Adult,
                gender: Gender::Male,
            },
            &ReferenceTable::builtin(),
            &EducationLibrary::builtin(),
            &DisplayScale::default(),
        )
    }

    #[test]
    fn test_scaling_is_status_invariant() {
        // Seven identical days at the same ratio of the daily allowance
        // must keep the daily status in the weekly rollup.
        for consumed in [30.0, 50.0, 60.0, 400.0] {
            let day = daily_records(&[("protein", consumed)]);
            let daily_status = day[0].status;

            let week: Vec<Vec<ComparisonRecord>> = (0..7).map(|_| day.clone()).collect();
            let report = build_weekly_report(&week, &DisplayScale::default());

            assert_eq!(report.records[0].record.status, daily_status);
        }
    }

    #[test]
    fn test_weekly_totals_and_references_scale() {
        let day = daily_records(&[("sodium", 2000.0)]);
        let week: Vec<Vec<ComparisonRecord>> = (0..7).map(|_| day.clone()).collect();
        let report = build_weekly_report(&week, &DisplayScale::default());

        let weekly = &report.records[0];
        assert!((weekly.record.consumed - 14000.0).abs() < 1e-9);
        let recommended = &weekly.record.reference_values[0].reference;
        assert!((recommended.value - 10500.0).abs() < 1e-9);
    }

    #[test]
    fn test_missing_days_zero_filled() {
        let day = daily_records(&[("iron", 8.0)]);
        let week = vec![day, Vec::new(), Vec::new()];
        let report = build_weekly_report(&week, &DisplayScale::default());

        let weekly = &report.records[0];
        assert_eq!(weekly.daily_breakdown.len(), 7);
        assert!((weekly.daily_breakdown[0].value - 8.0).abs() < 1e-9);
        for entry in &weekly.daily_breakdown[1..] {
            assert_eq!(entry.value, 0.0);
            // zero against the daily references, not the weekly ones
            assert_eq!(entry.status, Status::Deficient);
        }
        assert_eq!(report.days_with_data, 1);
        assert!((report.consistency_score - 100.0 / 7.0).abs() < 1e-9);
    }

    #[test]
    fn test_average_and_variation() {
        let mut week = Vec::new();
        for value in [1000.0, 2000.0, 1500.0] {
            week.push(daily_records(&[("sodium", value)]));
        }
        week.extend((0..4).map(|_| Vec::new()));
        let report = build_weekly_report(&week, &DisplayScale::default());

        let weekly = &report.records[0];
        assert!((weekly.weekly_average - 4500.0 / 7.0).abs() < 1e-9);
        assert!(weekly.daily_variation > 0.0);
        assert_eq!(report.days_with_data, 3);
    }

    #[test]
    fn test_population_std_dev() {
        assert_eq!(population_std_dev(&[]), 0.0);
        assert_eq!(population_std_dev(&[5.0, 5.0, 5.0]), 0.0);
        // [2, 4, 4, 4, 5, 5, 7, 9] has a population std dev of exactly 2
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std_dev(&values) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_trend_improving_and_declining() {
        // previous week: sodium fine, iron deficient
        let previous_day = daily_records(&[("sodium", 1000.0), ("iron", 2.0)]);
        // current week: sodium over, iron optimal
        let current_day = daily_records(&[("sodium", 3000.0), ("iron", 8.0)]);

        let previous: Vec<Vec<ComparisonRecord>> = (0..7).map(|_| previous_day.clone()).collect();
        let current: Vec<Vec<ComparisonRecord>> = (0..7).map(|_| current_day.clone()).collect();

        let scale = DisplayScale::default();
        let trend = analyze_trend(
            &build_weekly_report(&current, &scale),
            &build_weekly_report(&previous, &scale),
        );

        assert_eq!(trend.improving, vec!["iron".to_string()]);
        assert_eq!(trend.declining, vec!["sodium".to_string()]);
        // previous: iron deficient (40) + sodium optimal (100) -> 70
        // current: iron optimal (100) + sodium excess-harmful (20) -> 60
        assert!((trend.nutrition_score_change - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_trend_calorie_change() {
        let previous_day = daily_records(&[("calories", 2000.0)]);
        let current_day = daily_records(&[("calories", 2200.0)]);

        let previous: Vec<Vec<ComparisonRecord>> = (0..7).map(|_| previous_day.clone()).collect();
        let current: Vec<Vec<ComparisonRecord>> = (0..7).map(|_| current_day.clone()).collect();

        let scale = DisplayScale::default();
        let trend = analyze_trend(
            &build_weekly_report(&current, &scale),
            &build_weekly_report(&previous, &scale),
        );
        assert!((trend.calorie_change - 1400.0).abs() < 1e-9);
    }
}
