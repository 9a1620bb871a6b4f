use crate::questions::{SCALE_MAX, SCALE_MIN};
use crate::types::answers::AnswerSet;
use crate::types::profile::Chronotype;

const MORNING_QUESTION: &str = "q1";
const ENERGY_FLOW_QUESTION: &str = "q5";
const RECOVERY_QUESTION: &str = "q6";
const WORK_PATTERN_QUESTION: &str = "q4";

const HIGH: i64 = 4;
const LOW: i64 = 2;

/// Resolves the chronotype from raw answers; the first matching rule wins.
///
/// A missing answer fails every comparison, so an unanswered quiz lands on
/// `BalancedPerformer` rather than being read as an all-zero night owl.
pub fn chronotype(answers: &AnswerSet) -> Chronotype {
    let answer = |id: &str| answers.get(id).map(|value| value.clamp(SCALE_MIN, SCALE_MAX));
    let at_least = |id: &str, threshold: i64| answer(id).is_some_and(|value| value >= threshold);
    let at_most = |id: &str, threshold: i64| answer(id).is_some_and(|value| value <= threshold);

    if at_least(MORNING_QUESTION, HIGH) && at_least(ENERGY_FLOW_QUESTION, HIGH) {
        Chronotype::MorningLark
    } else if at_most(MORNING_QUESTION, LOW) && at_most(ENERGY_FLOW_QUESTION, LOW) {
        Chronotype::NightOwl
    } else if at_least(RECOVERY_QUESTION, HIGH) {
        Chronotype::BiphasicPerformer
    } else if at_least(WORK_PATTERN_QUESTION, HIGH) {
        Chronotype::UltradianSprinter
    } else {
        Chronotype::BalancedPerformer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, i64)]) -> AnswerSet {
        pairs.iter().map(|(key, value)| (*key, *value)).collect()
    }

    #[test]
    fn early_riser_with_morning_energy_is_morning_lark() {
        let set = answers(&[("q1", 5), ("q5", 4), ("q6", 5), ("q4", 5)]);
        assert_eq!(chronotype(&set), Chronotype::MorningLark);
    }

    #[test]
    fn late_sharpness_with_evening_energy_is_night_owl() {
        let set = answers(&[("q1", 0), ("q5", 2), ("q6", 5)]);
        assert_eq!(chronotype(&set), Chronotype::NightOwl);
    }

    #[test]
    fn short_break_recovery_is_biphasic_when_rhythm_is_mixed() {
        let set = answers(&[("q1", 3), ("q5", 3), ("q6", 4), ("q4", 5)]);
        assert_eq!(chronotype(&set), Chronotype::BiphasicPerformer);
    }

    #[test]
    fn sprint_work_pattern_is_ultradian_sprinter() {
        let set = answers(&[("q1", 5), ("q5", 1), ("q6", 3), ("q4", 4)]);
        assert_eq!(chronotype(&set), Chronotype::UltradianSprinter);
    }

    #[test]
    fn nothing_matching_is_balanced() {
        let set = answers(&[("q1", 3), ("q5", 3), ("q6", 3), ("q4", 3)]);
        assert_eq!(chronotype(&set), Chronotype::BalancedPerformer);
    }

    #[test]
    fn missing_answers_never_match_a_rule() {
        assert_eq!(chronotype(&AnswerSet::default()), Chronotype::BalancedPerformer);
        // q5 missing: night owl needs both answers
        assert_eq!(
            chronotype(&answers(&[("q1", 1)])),
            Chronotype::BalancedPerformer
        );
    }
}
