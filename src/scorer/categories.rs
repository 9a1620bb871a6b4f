use crate::questions::{self, SCALE_MAX, SCALE_MIN};
use crate::types::answers::AnswerSet;
use crate::types::scoring::{Category, CategoryScores, CategoryTotals, Score, Total};

/// Reads one answer onto the option scale. Missing answers count as zero.
pub fn scaled_answer(answers: &AnswerSet, question: &str) -> Total {
    answers
        .get(question)
        .map(|value| value.clamp(SCALE_MIN, SCALE_MAX))
        .unwrap_or(0)
}

pub fn category_totals(answers: &AnswerSet) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for category in Category::ALL {
        for question in questions::category_questions(category) {
            totals.add(category, scaled_answer(answers, question.id));
        }
    }
    totals
}

/// `round(total / max * 100)`, rounding halves up.
pub fn normalize(total: Total, max: Total) -> Score {
    if max <= 0 {
        return 0;
    }
    let total = total.clamp(0, max);
    (total * 200 + max) / (2 * max)
}

pub fn category_scores(totals: &CategoryTotals) -> CategoryScores {
    let score = |category| normalize(totals.get(category), questions::category_max_total(category));
    CategoryScores::new(
        score(Category::CognitiveRhythm),
        score(Category::WorkStyle),
        score(Category::EnergyPattern),
        score(Category::FocusDrivers),
        score(Category::ToolUsage),
    )
}
