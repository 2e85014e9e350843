use std::path::Path;

use chrono::{Duration, Local, NaiveDate};
use clap::Parser;
use serde::Deserialize;

use nutri_lens_rs::cli::{Cli, Command};
use nutri_lens_rs::data::{EducationLibrary, ReferenceTable};
use nutri_lens_rs::engine::{
    aggregate, analyze_trend, build_comparison_records, build_weekly_report, score,
};
use nutri_lens_rs::error::{NutriError, Result};
use nutri_lens_rs::interface::{
    collect_food_entry, display_daily_report, display_scale, display_score,
    display_weekly_report, prompt_profile, prompt_yes_no,
};
use nutri_lens_rs::models::{
    ComparisonRecord, LoggedFood, MealType, NutrientReading, Profile, ReadingCategory,
    WeeklyReport,
};
use nutri_lens_rs::state::{load_log, save_log, LogManager};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();
    let references = load_references(cli.references.as_deref())?;

    match command {
        Command::Log { date } => cmd_log(&cli.file, &references, date),
        Command::Today { date } => cmd_today(&cli.file, &references, date),
        Command::Week { start, trend } => cmd_week(&cli.file, &references, start, trend),
        Command::Score { date } => cmd_score(&cli.file, &references, date),
        Command::Import { path } => cmd_import(&cli.file, &path),
        Command::Profile => cmd_profile(&cli.file),
        Command::Reset { log, profile } => cmd_reset(&cli.file, log, profile),
    }
}

fn load_manager(file_path: &str) -> Result<LogManager> {
    let path = Path::new(file_path);
    if !path.exists() {
        return Ok(LogManager::empty());
    }
    Ok(LogManager::new(load_log(path)?))
}

fn load_references(path: Option<&str>) -> Result<ReferenceTable> {
    match path {
        Some(path) => ReferenceTable::from_csv_path(path),
        None => Ok(ReferenceTable::builtin()),
    }
}

fn require_profile(manager: &LogManager) -> Result<Profile> {
    manager.profile().copied().ok_or(NutriError::ProfileMissing)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build the comparison records for one logged day.
fn daily_records(
    manager: &LogManager,
    date: NaiveDate,
    profile: &Profile,
    references: &ReferenceTable,
) -> Result<Vec<ComparisonRecord>> {
    let readings = manager.readings_for(date);
    let totals = aggregate(&readings)?;
    Ok(build_comparison_records(
        &totals,
        profile,
        references,
        &EducationLibrary::builtin(),
        &display_scale(),
    ))
}

/// Build the weekly report for the 7 days starting at `start`.
fn weekly_report(
    manager: &LogManager,
    start: NaiveDate,
    profile: &Profile,
    references: &ReferenceTable,
) -> Result<WeeklyReport> {
    let education = EducationLibrary::builtin();
    let scale = display_scale();

    let mut daily_sets = Vec::new();
    for readings in manager.week_readings(start) {
        let totals = aggregate(&readings)?;
        daily_sets.push(build_comparison_records(
            &totals, profile, references, &education, &scale,
        ));
    }
    Ok(build_weekly_report(&daily_sets, &scale))
}

/// Log a food interactively.
fn cmd_log(file: &str, references: &ReferenceTable, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let mut manager = load_manager(file)?;

    if manager.profile().is_none() {
        println!("No profile configured yet.");
        manager.set_profile(prompt_profile()?);
    }

    let food = collect_food_entry(references)?;
    if food.readings.is_empty() {
        println!("No readings entered; nothing logged.");
        return Ok(());
    }

    let name = food.name.clone();
    let count = food.readings.len();
    manager.log_food(date, food);
    save_log(file, &manager.to_state())?;
    println!("Logged {} reading(s) for {} on {}.", count, name, date);

    Ok(())
}

/// Show the daily comparison report.
fn cmd_today(file: &str, references: &ReferenceTable, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let manager = load_manager(file)?;
    let profile = require_profile(&manager)?;

    let records = daily_records(&manager, date, &profile, references)?;
    println!(
        "Report for {} ({}, {})",
        date,
        profile.age_group.label(),
        profile.gender.label()
    );
    display_daily_report(&records);

    if !records.is_empty() {
        println!("Nutrition score: {:.0} / 100", score(&records).overall);
    }

    Ok(())
}

/// Show the weekly rollup report.
fn cmd_week(
    file: &str,
    references: &ReferenceTable,
    start: Option<NaiveDate>,
    trend: bool,
) -> Result<()> {
    let start = start.unwrap_or_else(|| today() - Duration::days(6));
    let manager = load_manager(file)?;
    let profile = require_profile(&manager)?;

    let current = weekly_report(&manager, start, &profile, references)?;

    let trend_data = if trend {
        let previous = weekly_report(&manager, start - Duration::days(7), &profile, references)?;
        if previous.days_with_data > 0 {
            Some(analyze_trend(&current, &previous))
        } else {
            println!("No data in the prior week; skipping trend.");
            None
        }
    } else {
        None
    };

    println!("Week starting {}", start);
    display_weekly_report(&current, trend_data.as_ref());

    Ok(())
}

/// Show the nutrition score for a day.
fn cmd_score(file: &str, references: &ReferenceTable, date: Option<NaiveDate>) -> Result<()> {
    let date = date.unwrap_or_else(today);
    let manager = load_manager(file)?;
    let profile = require_profile(&manager)?;

    let records = daily_records(&manager, date, &profile, references)?;
    if records.is_empty() {
        println!("Nothing logged for {}.", date);
        return Ok(());
    }
    display_score(&score(&records));

    Ok(())
}

/// CSV row shape for imported analysis readings.
#[derive(Debug, Deserialize)]
struct ImportRow {
    date: NaiveDate,
    food: String,
    meal_type: MealType,
    substance: String,
    category: ReadingCategory,
    amount: f64,
}

/// Import analysis readings from a CSV file.
fn cmd_import(file: &str, path: &str) -> Result<()> {
    let mut manager = load_manager(file)?;
    let mut reader = csv::Reader::from_path(path)?;

    // consecutive rows for the same (date, food, meal) form one entry
    let mut pending: Option<(NaiveDate, LoggedFood)> = None;
    let mut foods = 0usize;
    let mut readings = 0usize;

    for row in reader.deserialize() {
        let row: ImportRow = row?;
        let reading =
            NutrientReading::new(&row.substance, row.category, row.amount, row.meal_type);
        if !reading.is_valid() {
            return Err(NutriError::InvalidReading(format!(
                "row for '{}' in {}",
                row.substance, path
            )));
        }
        readings += 1;

        let same_entry = pending.as_ref().is_some_and(|(date, food)| {
            *date == row.date && food.name == row.food && food.meal_type == row.meal_type
        });

        if same_entry {
            if let Some((_, food)) = pending.as_mut() {
                food.readings.push(reading);
            }
        } else {
            if let Some((date, food)) = pending.take() {
                manager.log_food(date, food);
                foods += 1;
            }
            pending = Some((
                row.date,
                LoggedFood {
                    name: row.food,
                    meal_type: row.meal_type,
                    readings: vec![reading],
                },
            ));
        }
    }

    if let Some((date, food)) = pending.take() {
        manager.log_food(date, food);
        foods += 1;
    }

    save_log(file, &manager.to_state())?;
    println!("Imported {} reading(s) across {} food(s).", readings, foods);

    Ok(())
}

/// Set the demographic profile.
fn cmd_profile(file: &str) -> Result<()> {
    let mut manager = load_manager(file)?;

    if let Some(profile) = manager.profile() {
        println!(
            "Current profile: {} / {}",
            profile.age_group.label(),
            profile.gender.label()
        );
    }

    manager.set_profile(prompt_profile()?);
    save_log(file, &manager.to_state())?;
    println!("Profile saved.");

    Ok(())
}

/// Reset stored state.
fn cmd_reset(file: &str, log: bool, profile: bool) -> Result<()> {
    if !log && !profile {
        println!("Please specify at least one reset option:");
        println!("  --log      Clear all logged days");
        println!("  --profile  Clear the stored profile");
        return Ok(());
    }

    let path = Path::new(file);
    if !path.exists() {
        eprintln!("Log file not found: {}", file);
        return Ok(());
    }

    let mut manager = load_manager(file)?;

    if log {
        let confirmed = prompt_yes_no("Clear all logged days?", false)?;
        if confirmed {
            manager.clear_log();
            println!("Cleared the food log.");
        }
    }

    if profile {
        manager.clear_profile();
        println!("Cleared the profile.");
    }

    save_log(file, &manager.to_state())?;

    Ok(())
}
