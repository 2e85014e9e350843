use crate::engine::constants::{OPTIMAL_WINDOW_HIGH, OPTIMAL_WINDOW_LOW};
use crate::models::{NutrientCategory, ReferenceKind, ReferenceValue, Status};

fn value_of(references: &[ReferenceValue], kind: ReferenceKind) -> Option<f64> {
    references.iter().find(|r| r.kind == kind).map(|r| r.value)
}

/// Classify a consumed total against its resolved references.
///
/// Branches are checked in a fixed order; the first match wins, so an
/// upper-limit breach reports excess even if the value would also satisfy
/// the optimal window against the recommended target.
///
/// Harmful substances have no deficient or acceptable state: less is
/// always at least as good.
pub fn classify(consumed: f64, references: &[ReferenceValue], category: NutrientCategory) -> Status {
    if category.is_harmful() {
        return classify_harmful(consumed, references);
    }
    classify_beneficial(consumed, references)
}

fn classify_harmful(consumed: f64, references: &[ReferenceValue]) -> Status {
    if let Some(upper) = value_of(references, ReferenceKind::UpperLimit) {
        if consumed >= upper {
            return Status::Excess;
        }
    }
    if let Some(recommended) = value_of(references, ReferenceKind::Recommended) {
        if consumed > recommended {
            return Status::Excess;
        }
    }
    Status::Optimal
}

fn classify_beneficial(consumed: f64, references: &[ReferenceValue]) -> Status {
    if let Some(upper) = value_of(references, ReferenceKind::UpperLimit) {
        if consumed >= upper {
            return Status::Excess;
        }
    }
    if let Some(maximum) = value_of(references, ReferenceKind::Maximum) {
        if consumed > maximum {
            return Status::Excess;
        }
    }

    let target = value_of(references, ReferenceKind::Recommended)
        .or_else(|| value_of(references, ReferenceKind::Minimum));
    let Some(target) = target else {
        return Status::Acceptable;
    };

    if consumed < OPTIMAL_WINDOW_LOW * target {
        Status::Deficient
    } else if consumed <= OPTIMAL_WINDOW_HIGH * target {
        Status::Optimal
    } else {
        Status::Acceptable
    }
}
