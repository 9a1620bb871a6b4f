pub mod archetype;
pub mod categories;
pub mod chronotype;

use crate::types::answers::AnswerSet;
use crate::types::report::{Compatibility, QuizResult};

/// Scores a completed quiz.
///
/// Pure and infallible: missing answers contribute zero and values outside
/// the option scale are clamped, so callers that need stricter input run
/// [`crate::validate`] first.
pub fn compute_result(answers: &AnswerSet) -> QuizResult {
    let totals = categories::category_totals(answers);
    let score = categories::category_scores(&totals);
    let (kind, weighted) = archetype::select_type(&totals);
    let chronotype = chronotype::chronotype(answers);

    tracing::debug!(
        cognitive_rhythm = totals.cognitive_rhythm,
        work_style = totals.work_style,
        energy_pattern = totals.energy_pattern,
        focus_drivers = totals.focus_drivers,
        tool_usage = totals.tool_usage,
        "category totals"
    );
    tracing::debug!(
        kind = kind.label(),
        weighted = weighted.value(),
        chronotype = chronotype.label(),
        "classified"
    );

    let profile = kind.profile();
    QuizResult {
        kind,
        chronotype,
        description: profile.description,
        time_blocking: profile.time_blocking.to_vec(),
        tools: profile.tools.to_vec(),
        habits: profile.habits.to_vec(),
        strengths: profile.strengths.to_vec(),
        challenges: profile.challenges.to_vec(),
        compatibility: Compatibility {
            works_well_with: profile.works_well_with.to_vec(),
            challenges_with: profile.challenges_with.to_vec(),
        },
        score,
    }
}
