pub mod aggregate;
pub mod builder;
pub mod classify;
pub mod constants;
pub mod layers;
pub mod scoring;
pub mod units;
pub mod weekly;

pub use aggregate::aggregate;
pub use builder::build_comparison_records;
pub use classify::classify;
pub use layers::{annotate_positions, compute_layers, reference_basis};
pub use scoring::score;
pub use units::{display_amount, normalize};
pub use weekly::{analyze_trend, build_weekly_report};
