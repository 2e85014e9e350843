use crate::engine::constants::{
    LAYER_BORDER_RADIUS, LAYER_HEIGHT, LAYER_PERCENTAGE_CAP, POSITION_CAP,
};
use crate::models::{
    ConsumptionLayer, DisplayScale, PositionedReference, ReferenceKind, ReferenceValue,
};

/// The value every percentage and position is computed against: the
/// recommended reference if present, else the largest available reference.
pub fn reference_basis(references: &[ReferenceValue]) -> Option<f64> {
    if let Some(recommended) = references
        .iter()
        .find(|r| r.kind == ReferenceKind::Recommended)
    {
        return Some(recommended.value);
    }
    references
        .iter()
        .map(|r| r.value)
        .max_by(f64::total_cmp)
}

/// Consumption layers for one substance.
///
/// A single primary layer is produced when `consumed > 0`; otherwise the
/// list is empty. Percentage is clamped to [0, 200] and width scales
/// linearly with it against the display scale.
pub fn compute_layers(consumed: f64, basis: f64, scale: &DisplayScale) -> Vec<ConsumptionLayer> {
    if consumed <= 0.0 || basis <= 0.0 {
        return Vec::new();
    }

    let percentage = (consumed / basis * 100.0).min(LAYER_PERCENTAGE_CAP);
    vec![ConsumptionLayer {
        value: consumed,
        percentage,
        height: LAYER_HEIGHT,
        width: scale.max_bar_width * percentage / 100.0,
        border_radius: LAYER_BORDER_RADIUS,
    }]
}

/// Annotate each reference with its bar position (0-100% of the display
/// scale), clamped so a reference beyond the scale renders at its edge.
pub fn annotate_positions(references: &[ReferenceValue], basis: f64) -> Vec<PositionedReference> {
    references
        .iter()
        .map(|reference| {
            let position = if basis > 0.0 {
                (reference.value / basis * 100.0).min(POSITION_CAP)
            } else {
                0.0
            };
            PositionedReference {
                reference: reference.clone(),
                position,
            }
        })
        .collect()
}
