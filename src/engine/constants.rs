// ─────────────────────────────────────────────────────────────────────────────
// Classification
// ─────────────────────────────────────────────────────────────────────────────

/// Lower edge of the optimal window as a fraction of the target.
pub const OPTIMAL_WINDOW_LOW: f64 = 0.8;

/// Upper edge of the optimal window as a fraction of the target.
pub const OPTIMAL_WINDOW_HIGH: f64 = 1.2;

// ─────────────────────────────────────────────────────────────────────────────
// Layers and positions
// ─────────────────────────────────────────────────────────────────────────────

/// Layer percentage is clamped to this ceiling before scaling to width.
pub const LAYER_PERCENTAGE_CAP: f64 = 200.0;

/// Reference markers clamp to the edge of the display scale.
pub const POSITION_CAP: f64 = 100.0;

/// Fixed presentation height of a consumption layer.
pub const LAYER_HEIGHT: f64 = 4.0;

/// Fixed presentation corner radius of a consumption layer.
pub const LAYER_BORDER_RADIUS: f64 = 10.0;

/// Default display scale for callers that do not supply one.
pub const DEFAULT_MAX_BAR_WIDTH: f64 = 300.0;
pub const DEFAULT_INDICATOR_SIZE: f64 = 12.0;

// ─────────────────────────────────────────────────────────────────────────────
// Weekly rollup
// ─────────────────────────────────────────────────────────────────────────────

/// Days in a weekly rollup; daily references scale by this factor.
pub const DAYS_PER_WEEK: usize = 7;

// ─────────────────────────────────────────────────────────────────────────────
// Scoring
// ─────────────────────────────────────────────────────────────────────────────

/// Per-record score values by status.
pub const SCORE_OPTIMAL: f64 = 100.0;
pub const SCORE_ACCEPTABLE: f64 = 80.0;
pub const SCORE_DEFICIENT: f64 = 40.0;

/// Excess scores harsher for harmful substances than for beneficial ones.
pub const SCORE_EXCESS_HARMFUL: f64 = 20.0;
pub const SCORE_EXCESS_BENEFICIAL: f64 = 60.0;

/// Recommendations list is truncated to this length, in record-sort order.
pub const MAX_RECOMMENDATIONS: usize = 5;
