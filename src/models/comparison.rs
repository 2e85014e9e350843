use serde::{Deserialize, Serialize};

use crate::data::EducationEntry;
use crate::models::reference::{NutrientCategory, ReferenceValue, Unit};

/// Classification outcome for one substance against its references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Deficient,
    Optimal,
    Acceptable,
    Excess,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Deficient => "deficient",
            Status::Optimal => "optimal",
            Status::Acceptable => "acceptable",
            Status::Excess => "excess",
        }
    }

    /// Ordinal used for week-over-week movement. Excess ranks below
    /// deficient: it is the worst outcome for most substances.
    pub fn trend_rank(self) -> u8 {
        match self {
            Status::Excess => 0,
            Status::Deficient => 1,
            Status::Acceptable => 2,
            Status::Optimal => 3,
        }
    }
}

/// Display-scale configuration supplied by the rendering caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayScale {
    pub max_bar_width: f64,
    pub indicator_size: f64,
}

impl Default for DisplayScale {
    fn default() -> Self {
        Self {
            max_bar_width: crate::engine::constants::DEFAULT_MAX_BAR_WIDTH,
            indicator_size: crate::engine::constants::DEFAULT_INDICATOR_SIZE,
        }
    }
}

/// Presentation settings carried through on each record.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualConfig {
    pub max_bar_width: f64,
    pub indicator_size: f64,
}

impl From<&DisplayScale> for VisualConfig {
    fn from(scale: &DisplayScale) -> Self {
        Self {
            max_bar_width: scale.max_bar_width,
            indicator_size: scale.indicator_size,
        }
    }
}

/// One stacked visual magnitude of consumption against the display scale.
///
/// `percentage` is clamped to [0, 200]; `width` scales linearly with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionLayer {
    pub value: f64,
    pub percentage: f64,
    pub height: f64,
    pub width: f64,
    pub border_radius: f64,
}

/// A reference value annotated with its bar position (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedReference {
    #[serde(flatten)]
    pub reference: ReferenceValue,
    pub position: f64,
}

/// One substance's consumption classified and laid out against its
/// references. Built fresh per aggregation call; never mutated after
/// construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonRecord {
    pub substance: String,
    pub category: NutrientCategory,
    pub consumed: f64,
    pub unit: Unit,
    pub display_amount: String,
    pub status: Status,
    pub reference_values: Vec<PositionedReference>,
    pub layers: Vec<ConsumptionLayer>,
    pub visual_config: VisualConfig,
    pub education: EducationEntry,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_rank_ordering() {
        // Excess is the worst outcome, below deficient.
        assert!(Status::Excess.trend_rank() < Status::Deficient.trend_rank());
        assert!(Status::Deficient.trend_rank() < Status::Acceptable.trend_rank());
        assert!(Status::Acceptable.trend_rank() < Status::Optimal.trend_rank());
    }
}
