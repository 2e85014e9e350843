use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Short educational blurb shown alongside a comparison record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub title: String,
    pub summary: String,
}

impl EducationEntry {
    pub fn new(title: &str, summary: &str) -> Self {
        Self {
            title: title.to_string(),
            summary: summary.to_string(),
        }
    }

    /// Fallback for substances the library does not know.
    pub fn generic(substance: &str) -> Self {
        Self {
            title: substance.to_string(),
            summary: format!(
                "No detailed information is available for {}. Compare your intake \
                 against the reference markers shown.",
                substance
            ),
        }
    }
}

/// Static educational-content table keyed by substance name.
///
/// Lookup never fails: unknown substances get a generic fallback entry.
#[derive(Debug, Clone, Default)]
pub struct EducationLibrary {
    entries: HashMap<String, EducationEntry>,
}

impl EducationLibrary {
    pub fn new(entries: HashMap<String, EducationEntry>) -> Self {
        Self { entries }
    }

    /// The content shipped with the application.
    pub fn builtin() -> Self {
        let mut entries = HashMap::new();
        let mut add = |name: &str, title: &str, summary: &str| {
            entries.insert(name.to_string(), EducationEntry::new(title, summary));
        };

        add(
            "calories",
            "Calories",
            "Total energy from food. Needs vary with age, activity, and body \
             composition; a consistent large surplus or deficit shifts weight over time.",
        );
        add(
            "protein",
            "Protein",
            "Builds and repairs tissue and supports immune function. Spreading \
             intake across meals improves utilization.",
        );
        add(
            "carbohydrate",
            "Carbohydrates",
            "The body's primary fuel. Whole-grain sources digest slower and \
             carry fiber and micronutrients that refined sources lack.",
        );
        add(
            "fat",
            "Fat",
            "Needed for hormone production and absorption of fat-soluble \
             vitamins. Unsaturated sources are preferable to saturated ones.",
        );
        add(
            "fiber",
            "Dietary fiber",
            "Feeds gut bacteria, slows glucose absorption, and supports \
             regularity. Most adults consume well below the recommended amount.",
        );
        add(
            "sugar",
            "Added sugar",
            "Provides energy with no other nutrients. High intake is linked to \
             dental caries and metabolic disease; limits apply to added, not natural, sugar.",
        );
        add(
            "saturated-fat",
            "Saturated fat",
            "Raises LDL cholesterol when consumed in excess. Replacing it with \
             unsaturated fat improves cardiovascular risk markers.",
        );
        add(
            "sodium",
            "Sodium",
            "Essential electrolyte, but most diets far exceed the need. \
             Sustained high intake raises blood pressure in salt-sensitive people.",
        );
        add(
            "cholesterol",
            "Dietary cholesterol",
            "Found only in animal foods. Its effect on blood cholesterol is \
             smaller than that of saturated fat for most people.",
        );
        add(
            "potassium",
            "Potassium",
            "Counterbalances sodium and supports nerve and muscle function. \
             Fruit, vegetables, and legumes are the richest sources.",
        );
        add(
            "calcium",
            "Calcium",
            "Builds bone mass and drives muscle contraction. Absorption \
             depends on vitamin D status.",
        );
        add(
            "iron",
            "Iron",
            "Carries oxygen in red blood cells. Requirements differ sharply by \
             sex and life stage; plant iron absorbs better alongside vitamin C.",
        );
        add(
            "magnesium",
            "Magnesium",
            "Cofactor in hundreds of enzymatic reactions, including energy \
             metabolism and muscle relaxation.",
        );
        add(
            "vitamin-c",
            "Vitamin C",
            "Antioxidant required for collagen synthesis and iron absorption. \
             The body does not store it, so regular intake matters.",
        );
        add(
            "vitamin-d",
            "Vitamin D",
            "Regulates calcium absorption and immune signalling. Dietary \
             sources are scarce; sunlight drives most synthesis.",
        );

        Self { entries }
    }

    /// Content for a substance, falling back to a generic entry.
    pub fn lookup(&self, substance: &str) -> EducationEntry {
        self.entries
            .get(substance)
            .cloned()
            .unwrap_or_else(|| EducationEntry::generic(substance))
    }

    pub fn get(&self, substance: &str) -> Option<&EducationEntry> {
        self.entries.get(substance)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_substance() {
        let library = EducationLibrary::builtin();
        let entry = library.lookup("sodium");
        assert_eq!(entry.title, "Sodium");
    }

    #[test]
    fn test_lookup_unknown_falls_back() {
        let library = EducationLibrary::builtin();
        let entry = library.lookup("astaxanthin");
        assert_eq!(entry.title, "astaxanthin");
        assert!(entry.summary.contains("astaxanthin"));
    }
}
