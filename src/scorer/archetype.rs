use std::cmp::Ordering;

use crate::types::profile::ProductivityType;
use crate::types::scoring::{CategoryTotals, Total};

/// A type's weighted score kept as an exact fraction, weights in tenths.
#[derive(Debug, Clone, Copy)]
pub struct WeightedScore {
    numerator: Total,
    denominator: Total,
}

impl WeightedScore {
    fn new(numerator: Total, denominator: Total) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    pub fn value(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl PartialEq for WeightedScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for WeightedScore {}

impl PartialOrd for WeightedScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for WeightedScore {
    // Denominators are positive constants, so cross-multiplying keeps order.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.numerator * other.denominator).cmp(&(other.numerator * self.denominator))
    }
}

pub fn weighted_score(kind: ProductivityType, totals: &CategoryTotals) -> WeightedScore {
    let CategoryTotals {
        cognitive_rhythm,
        work_style,
        energy_pattern,
        focus_drivers,
        tool_usage,
    } = *totals;
    match kind {
        // (cognitive * 1.5 + focus) / 2.5
        ProductivityType::DeepWorkBeast => {
            WeightedScore::new(15 * cognitive_rhythm + 10 * focus_drivers, 25)
        }
        // (work style * 1.2 + tools) / 2.2
        ProductivityType::SprintStrategist => {
            WeightedScore::new(12 * work_style + 10 * tool_usage, 22)
        }
        // (energy * 1.3 + focus) / 2.3
        ProductivityType::FlowSurfer => {
            WeightedScore::new(13 * energy_pattern + 10 * focus_drivers, 23)
        }
        // (work style * 1.1 + tools * 1.1) / 2.2
        ProductivityType::StructureSeeker => {
            WeightedScore::new(11 * work_style + 11 * tool_usage, 22)
        }
        // mean of all five
        ProductivityType::HybridHarmonizer => WeightedScore::new(10 * totals.sum(), 50),
    }
}

/// Picks the type with the greatest weighted score. On a tie the type
/// declared later in `ProductivityType::ALL` wins, so uniform answers land
/// on `HybridHarmonizer`.
pub fn select_type(totals: &CategoryTotals) -> (ProductivityType, WeightedScore) {
    let mut best = (
        ProductivityType::ALL[0],
        weighted_score(ProductivityType::ALL[0], totals),
    );
    for kind in ProductivityType::ALL.into_iter().skip(1) {
        let score = weighted_score(kind, totals);
        if score >= best.1 {
            best = (kind, score);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals(c: Total, w: Total, e: Total, f: Total, t: Total) -> CategoryTotals {
        CategoryTotals {
            cognitive_rhythm: c,
            work_style: w,
            energy_pattern: e,
            focus_drivers: f,
            tool_usage: t,
        }
    }

    #[test]
    fn weighted_scores_match_formula_table() {
        let totals = totals(10, 12, 14, 16, 18);
        let close = |kind, expected: f64| {
            (weighted_score(kind, &totals).value() - expected).abs() < 1e-9
        };
        assert!(close(ProductivityType::DeepWorkBeast, (10.0 * 1.5 + 16.0) / 2.5));
        assert!(close(ProductivityType::SprintStrategist, (12.0 * 1.2 + 18.0) / 2.2));
        assert!(close(ProductivityType::FlowSurfer, (14.0 * 1.3 + 16.0) / 2.3));
        assert!(close(ProductivityType::StructureSeeker, (12.0 * 1.1 + 18.0 * 1.1) / 2.2));
        assert!(close(ProductivityType::HybridHarmonizer, 70.0 / 5.0));
    }

    #[test]
    fn uniform_totals_tie_exactly() {
        let totals = totals(12, 12, 12, 12, 12);
        let first = weighted_score(ProductivityType::DeepWorkBeast, &totals);
        for kind in ProductivityType::ALL {
            assert_eq!(weighted_score(kind, &totals), first, "{kind}");
        }
    }

    #[test]
    fn ties_resolve_to_last_declared_type() {
        assert_eq!(
            select_type(&CategoryTotals::default()).0,
            ProductivityType::HybridHarmonizer
        );
        for total in [4, 12, 20] {
            assert_eq!(
                select_type(&totals(total, total, total, total, total)).0,
                ProductivityType::HybridHarmonizer,
                "uniform {total}"
            );
        }
    }

    #[test]
    fn partial_tie_prefers_later_type() {
        // work style equal to tools ties the two planner formulas at 20
        let totals = totals(0, 20, 0, 0, 20);
        assert_eq!(
            weighted_score(ProductivityType::SprintStrategist, &totals),
            weighted_score(ProductivityType::StructureSeeker, &totals)
        );
        assert_eq!(select_type(&totals).0, ProductivityType::StructureSeeker);
    }

    #[test]
    fn strong_cognitive_rhythm_selects_deep_work_beast() {
        assert_eq!(
            select_type(&totals(20, 8, 8, 16, 8)).0,
            ProductivityType::DeepWorkBeast
        );
    }

    #[test]
    fn strong_work_style_selects_sprint_strategist() {
        // 1.2 on work style outweighs the symmetric 1.1 / 1.1 split
        assert_eq!(
            select_type(&totals(4, 20, 4, 4, 10)).0,
            ProductivityType::SprintStrategist
        );
    }

    #[test]
    fn strong_energy_selects_flow_surfer() {
        assert_eq!(
            select_type(&totals(8, 8, 20, 16, 8)).0,
            ProductivityType::FlowSurfer
        );
    }

    #[test]
    fn strong_tools_selects_structure_seeker() {
        assert_eq!(
            select_type(&totals(4, 10, 4, 4, 20)).0,
            ProductivityType::StructureSeeker
        );
    }

    #[test]
    fn strong_unweighted_spread_selects_hybrid_harmonizer() {
        // no focus answers drags both focus-weighted formulas below the mean
        assert_eq!(
            select_type(&totals(18, 10, 18, 0, 10)).0,
            ProductivityType::HybridHarmonizer
        );
    }
}
