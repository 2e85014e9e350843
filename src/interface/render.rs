use crate::engine::units::display_amount;
use crate::models::{
    ComparisonRecord, DayEntry, DisplayScale, NutritionScore, Status, WeeklyReport, WeeklyTrend,
};

/// Character width of the reference span of a terminal bar. Consumption
/// can overshoot up to 2x this span before the layer percentage clamps.
pub const BAR_CHARS: usize = 30;

/// Display scale for terminal rendering: layer widths land directly in
/// character cells.
pub fn display_scale() -> DisplayScale {
    DisplayScale {
        max_bar_width: BAR_CHARS as f64,
        indicator_size: 1.0,
    }
}

/// Draw one record's consumption bar with reference markers.
fn render_bar(record: &ComparisonRecord) -> String {
    let mut cells = vec!['·'; BAR_CHARS * 2];

    if let Some(layer) = record.layers.first() {
        let filled = (layer.width.round() as usize).min(cells.len());
        for cell in cells.iter_mut().take(filled) {
            *cell = '█';
        }
    }

    for positioned in &record.reference_values {
        let index = (positioned.position / 100.0 * BAR_CHARS as f64).round() as usize;
        cells[index.min(BAR_CHARS * 2 - 1)] = '|';
    }

    cells.into_iter().collect()
}

fn reference_legend(record: &ComparisonRecord) -> String {
    record
        .reference_values
        .iter()
        .map(|p| {
            format!(
                "{} {}",
                p.reference.label,
                display_amount(p.reference.value, p.reference.unit)
            )
        })
        .collect::<Vec<String>>()
        .join("  ")
}

/// Display the daily comparison report grouped by category.
pub fn display_daily_report(records: &[ComparisonRecord]) {
    if records.is_empty() {
        println!("No comparable substances logged for this day.");
        return;
    }

    println!();
    println!("=== Daily Nutrition Report ===");

    let mut current_category = None;
    for record in records {
        if current_category != Some(record.category) {
            current_category = Some(record.category);
            println!();
            println!("--- {} ---", record.category.label());
        }

        println!(
            "  {:<16} {:>10}  [{}]",
            record.substance,
            record.display_amount,
            record.status.label()
        );
        println!("    {}", render_bar(record));
        println!("    {}", reference_legend(record));
    }

    println!();
}

fn day_symbol(entry: &DayEntry) -> char {
    if entry.value == 0.0 {
        return '-';
    }
    match entry.status {
        Status::Optimal => '+',
        Status::Acceptable => '~',
        Status::Deficient => '.',
        Status::Excess => '!',
    }
}

/// Display the weekly rollup, with trend lines when a prior week exists.
pub fn display_weekly_report(report: &WeeklyReport, trend: Option<&WeeklyTrend>) {
    if report.records.is_empty() {
        println!("No comparable substances logged this week.");
        return;
    }

    println!();
    println!("=== Weekly Nutrition Report ===");

    let mut current_category = None;
    for weekly in &report.records {
        let record = &weekly.record;
        if current_category != Some(record.category) {
            current_category = Some(record.category);
            println!();
            println!("--- {} ---", record.category.label());
        }

        let days: String = weekly.daily_breakdown.iter().map(day_symbol).collect();
        println!(
            "  {:<16} {:>10}  [{}]  days {}  avg {}",
            record.substance,
            record.display_amount,
            record.status.label(),
            days,
            display_amount(weekly.weekly_average, record.unit),
        );
    }

    println!();
    println!("--- Summary ---");
    println!("Days with data: {}/7", report.days_with_data);
    println!("Consistency: {:.0}%", report.consistency_score);

    if let Some(trend) = trend {
        let score_sign = if trend.nutrition_score_change >= 0.0 { "+" } else { "" };
        let calorie_sign = if trend.calorie_change >= 0.0 { "+" } else { "" };
        println!(
            "Score vs prior week: {}{:.0}",
            score_sign, trend.nutrition_score_change
        );
        println!(
            "Calories vs prior week: {}{:.0} kcal",
            calorie_sign, trend.calorie_change
        );
        if !trend.improving.is_empty() {
            println!("Improving: {}", trend.improving.join(", "));
        }
        if !trend.declining.is_empty() {
            println!("Declining: {}", trend.declining.join(", "));
        }
    }

    println!();
}

/// Display the nutrition score and its recommendations.
pub fn display_score(score: &NutritionScore) {
    println!();
    println!("=== Nutrition Score ===");
    println!("Overall: {:.0} / 100", score.overall);
    println!("  macronutrients:     {:.0}", score.breakdown.macronutrients);
    println!("  micronutrients:     {:.0}", score.breakdown.micronutrients);
    println!("  harmful substances: {:.0}", score.breakdown.harmful_substances);

    if !score.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for (i, recommendation) in score.recommendations.iter().enumerate() {
            println!("  {}. {}", i + 1, recommendation);
        }
    }

    println!();
}
