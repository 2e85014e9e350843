use crate::models::Unit;

/// Convert a raw amount to its display magnitude and unit.
///
/// The comparison math always runs in the reading's native unit; this
/// conversion applies only at display time. Grams under 1 step down to
/// milligrams; milligrams and micrograms step up at 1000. Calories never
/// convert.
pub fn normalize(value: f64, unit: Unit) -> (f64, Unit) {
    match unit {
        Unit::Grams => {
            if value >= 1.0 {
                (value, Unit::Grams)
            } else {
                (value * 1000.0, Unit::Milligrams)
            }
        }
        Unit::Milligrams => {
            if value >= 1000.0 {
                (value / 1000.0, Unit::Grams)
            } else {
                (value, Unit::Milligrams)
            }
        }
        Unit::Micrograms => {
            if value >= 1000.0 {
                (value / 1000.0, Unit::Milligrams)
            } else {
                (value, Unit::Micrograms)
            }
        }
        Unit::Kilocalories => (value, Unit::Kilocalories),
    }
}

/// Format an amount for display: grams with one decimal, everything else
/// rounded to an integer.
pub fn display_amount(value: f64, unit: Unit) -> String {
    let (value, unit) = normalize(value, unit);
    match unit {
        Unit::Grams => format!("{:.1} {}", value, unit),
        Unit::Milligrams | Unit::Micrograms | Unit::Kilocalories => {
            format!("{:.0} {}", value, unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_one_and_above_stay_grams() {
        assert_eq!(display_amount(75.25, Unit::Grams), "75.2 g");
        assert_eq!(display_amount(1.0, Unit::Grams), "1.0 g");
    }

    #[test]
    fn test_grams_below_one_become_milligrams() {
        assert_eq!(display_amount(0.35, Unit::Grams), "350 mg");
        assert_eq!(display_amount(0.015, Unit::Grams), "15 mg");
    }

    #[test]
    fn test_milligrams_escalate_at_thousand() {
        assert_eq!(display_amount(3200.0, Unit::Milligrams), "3.2 g");
        assert_eq!(display_amount(999.0, Unit::Milligrams), "999 mg");
        assert_eq!(display_amount(1000.0, Unit::Milligrams), "1.0 g");
    }

    #[test]
    fn test_micrograms_escalate_to_milligrams() {
        assert_eq!(display_amount(1500.0, Unit::Micrograms), "2 mg");
        assert_eq!(display_amount(15.0, Unit::Micrograms), "15 mcg");
    }

    #[test]
    fn test_calories_never_convert() {
        assert_eq!(display_amount(2150.4, Unit::Kilocalories), "2150 kcal");
        assert_eq!(display_amount(2150.6, Unit::Kilocalories), "2151 kcal");
    }
}
