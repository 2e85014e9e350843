use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// NutriLens: compare logged nutrient intake against demographic
/// reference values, per day and per week.
#[derive(Parser, Debug)]
#[command(name = "nutri_lens")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the nutrition log JSON file.
    #[arg(short, long, default_value = "nutrition_log.json")]
    pub file: String,

    /// CSV file overriding the built-in reference table.
    #[arg(long)]
    pub references: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Log a food and its nutrient readings interactively.
    Log {
        /// Date to log under (YYYY-MM-DD, defaults to today).
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Show the daily comparison report.
    Today {
        /// Date to report on (defaults to today).
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Show the weekly rollup report.
    Week {
        /// First day of the week (defaults to 6 days before today).
        #[arg(short, long)]
        start: Option<NaiveDate>,

        /// Compare against the preceding week.
        #[arg(long)]
        trend: bool,
    },

    /// Show the nutrition score for a day.
    Score {
        /// Date to score (defaults to today).
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Import analysis readings from a CSV file.
    Import {
        /// CSV with columns date,food,meal_type,substance,category,amount.
        path: String,
    },

    /// Set the demographic profile used for reference resolution.
    Profile,

    /// Reset stored state.
    Reset {
        /// Clear all logged days.
        #[arg(long)]
        log: bool,

        /// Clear the stored profile.
        #[arg(long)]
        profile: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Today { date: None }
    }
}
