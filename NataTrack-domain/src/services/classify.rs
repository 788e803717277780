use std::ops::RangeInclusive;

use crate::entities::reading::{Category, Ruleset};

/// Threshold table for one rule set. All cutoffs are inclusive lower bounds
/// except `elevated_diastolic_below`, which the diastolic value must stay
/// under for the elevated tier to apply.
///
/// These numbers encode published clinical guidance and are part of the
/// user-facing documentation; they must not be adjusted without a matching
/// change to the guideline text shown by the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub crisis_systolic: u16,
    pub crisis_diastolic: u16,
    pub stage2_systolic: u16,
    pub stage2_diastolic: u16,
    pub stage1_systolic: u16,
    pub stage1_diastolic: u16,
    pub elevated_systolic: u16,
    pub elevated_diastolic_below: u16,
}

/// Standard adult thresholds
pub const GENERAL_THRESHOLDS: Thresholds = Thresholds {
    crisis_systolic: 180,
    crisis_diastolic: 120,
    stage2_systolic: 140,
    stage2_diastolic: 90,
    stage1_systolic: 130,
    stage1_diastolic: 80,
    elevated_systolic: 120,
    elevated_diastolic_below: 80,
};

/// Pregnancy thresholds: the crisis tier starts at the severe preeclampsia
/// range and the stage 1 / elevated diastolic cutoffs sit higher than the
/// general table
pub const PREGNANCY_THRESHOLDS: Thresholds = Thresholds {
    crisis_systolic: 160,
    crisis_diastolic: 110,
    stage2_systolic: 140,
    stage2_diastolic: 90,
    stage1_systolic: 130,
    stage1_diastolic: 85,
    elevated_systolic: 120,
    elevated_diastolic_below: 85,
};

/// Accepted submission ranges for the vitals of one rule set.
/// Pregnancy ranges are narrower to catch entry mistakes around
/// physiologically plausible values.
#[derive(Debug, Clone)]
pub struct VitalRanges {
    pub systolic: RangeInclusive<u16>,
    pub diastolic: RangeInclusive<u16>,
    pub pulse: RangeInclusive<u16>,
}

/// Accepted submission ranges under the general rule set
pub const GENERAL_RANGES: VitalRanges = VitalRanges {
    systolic: 70..=250,
    diastolic: 40..=150,
    pulse: 40..=200,
};

/// Accepted submission ranges under the pregnancy rule set
pub const PREGNANCY_RANGES: VitalRanges = VitalRanges {
    systolic: 80..=220,
    diastolic: 50..=140,
    pulse: 50..=150,
};

impl Ruleset {
    /// The threshold table governing this rule set
    pub fn thresholds(&self) -> &'static Thresholds {
        match self {
            Ruleset::General => &GENERAL_THRESHOLDS,
            Ruleset::Pregnancy => &PREGNANCY_THRESHOLDS,
        }
    }

    /// The accepted submission ranges for this rule set
    pub fn vital_ranges(&self) -> &'static VitalRanges {
        match self {
            Ruleset::General => &GENERAL_RANGES,
            Ruleset::Pregnancy => &PREGNANCY_RANGES,
        }
    }
}

/// Categorize a blood pressure reading under the given rule set.
///
/// Tiers are checked from most to least severe and the first match wins.
/// Every tier trips on systolic OR diastolic except `Elevated`, which is
/// conjunctive: systolic at or above its cutoff AND diastolic below
/// `elevated_diastolic_below`. The asymmetry comes straight from the
/// guideline tables and must be kept as-is.
///
/// Inputs are assumed pre-validated; this is a total function over the
/// integer domain and performs no range checking.
pub fn classify(systolic: u16, diastolic: u16, ruleset: Ruleset) -> Category {
    let t = ruleset.thresholds();

    if systolic >= t.crisis_systolic || diastolic >= t.crisis_diastolic {
        Category::Crisis
    } else if systolic >= t.stage2_systolic || diastolic >= t.stage2_diastolic {
        Category::Stage2
    } else if systolic >= t.stage1_systolic || diastolic >= t.stage1_diastolic {
        Category::Stage1
    } else if systolic >= t.elevated_systolic && diastolic < t.elevated_diastolic_below {
        Category::Elevated
    } else {
        Category::Normal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_category_normal() {
        let category = classify(110, 75, Ruleset::General);
        assert_eq!(category, Category::Normal);
    }

    #[test]
    fn test_general_category_elevated() {
        let category = classify(125, 75, Ruleset::General);
        assert_eq!(category, Category::Elevated);
    }

    #[test]
    fn test_general_category_stage1() {
        // Test systolic in range
        let category = classify(135, 75, Ruleset::General);
        assert_eq!(category, Category::Stage1);

        // Test diastolic in range
        let category = classify(110, 85, Ruleset::General);
        assert_eq!(category, Category::Stage1);
    }

    #[test]
    fn test_general_category_stage2() {
        let category = classify(145, 75, Ruleset::General);
        assert_eq!(category, Category::Stage2);

        let category = classify(110, 95, Ruleset::General);
        assert_eq!(category, Category::Stage2);
    }

    #[test]
    fn test_general_category_crisis() {
        let category = classify(185, 75, Ruleset::General);
        assert_eq!(category, Category::Crisis);

        let category = classify(110, 125, Ruleset::General);
        assert_eq!(category, Category::Crisis);
    }

    #[test]
    fn test_pregnancy_boundaries() {
        // Crisis trips on systolic alone at the severe preeclampsia cutoff
        assert_eq!(classify(160, 0, Ruleset::Pregnancy), Category::Crisis);
        // One below both crisis cutoffs lands in stage 2
        assert_eq!(classify(159, 109, Ruleset::Pregnancy), Category::Stage2);
        // Diastolic 85 reaches stage 1 under pregnancy rules
        assert_eq!(classify(130, 85, Ruleset::Pregnancy), Category::Stage1);
        // Systolic at the watch cutoff with diastolic under 85
        assert_eq!(classify(120, 84, Ruleset::Pregnancy), Category::Elevated);
        // Below every cutoff
        assert_eq!(classify(119, 84, Ruleset::Pregnancy), Category::Normal);
    }

    #[test]
    fn test_elevated_requires_low_diastolic() {
        // Diastolic 80 pushes a 125-systolic reading into stage 1 under the
        // general rules rather than leaving it elevated
        assert_eq!(classify(125, 80, Ruleset::General), Category::Stage1);
        // Same shape under pregnancy rules at the 85 cutoff
        assert_eq!(classify(125, 85, Ruleset::Pregnancy), Category::Stage1);
    }

    #[test]
    fn test_rulesets_diverge_between_160_and_179() {
        // The same vitals are a crisis in pregnancy but stage 2 generally
        assert_eq!(classify(165, 100, Ruleset::Pregnancy), Category::Crisis);
        assert_eq!(classify(165, 100, Ruleset::General), Category::Stage2);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let first = classify(133, 82, Ruleset::Pregnancy);
        for _ in 0..10 {
            assert_eq!(classify(133, 82, Ruleset::Pregnancy), first);
        }
    }
}
