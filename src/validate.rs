use crate::error::{Result, WorkstyleError};
use crate::questions;
use crate::types::answers::AnswerSet;
use crate::types::report::Finding;

/// Checks an answer set against the question bank.
pub fn answer_findings(answers: &AnswerSet, allow_unknown_keys: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    for question in questions::questions() {
        match answers.get(question.id) {
            None => findings.push(Finding::new(
                "answers.missing",
                format!("Missing answer for {}", question.id),
                format!("\"{}\" has no answer.", question.text),
                true,
                Some(question.id),
            )),
            Some(value) if !question.accepts(value) => {
                let (min, max) = question.value_range();
                findings.push(Finding::new(
                    "answers.out_of_range",
                    format!("Answer for {} is out of range", question.id),
                    format!("{value} is not a valid option; expected {min} to {max}."),
                    true,
                    Some(question.id),
                ));
            }
            Some(_) => {}
        }
    }

    for (key, _) in answers.iter() {
        if questions::question(key).is_none() {
            findings.push(Finding::new(
                "answers.unknown_key",
                format!("Unknown question {key}"),
                format!("\"{key}\" is not part of the question bank and is ignored."),
                !allow_unknown_keys,
                Some(key),
            ));
        }
    }

    findings
}

/// Fails when any finding is blocking.
pub fn ensure_valid(findings: &[Finding]) -> Result<()> {
    let blocking = findings
        .iter()
        .filter(|finding| finding.blocking)
        .collect::<Vec<_>>();
    if blocking.is_empty() {
        return Ok(());
    }

    let summary = blocking
        .iter()
        .take(3)
        .map(|finding| finding.title.to_lowercase())
        .collect::<Vec<_>>()
        .join("; ");
    let more = blocking.len().saturating_sub(3);
    let message = if more > 0 {
        format!("{summary} (and {more} more)")
    } else {
        summary
    };
    Err(WorkstyleError::InvalidAnswers(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(value: i64) -> AnswerSet {
        questions::questions()
            .iter()
            .map(|question| (question.id, value))
            .collect()
    }

    #[test]
    fn complete_answers_have_no_findings() {
        assert!(answer_findings(&complete(3), false).is_empty());
    }

    #[test]
    fn missing_answers_are_blocking() {
        let findings = answer_findings(&AnswerSet::default(), true);
        assert_eq!(findings.len(), 25);
        assert!(findings
            .iter()
            .all(|finding| finding.id == "answers.missing" && finding.blocking));
    }

    #[test]
    fn values_outside_question_options_are_blocking() {
        let mut answers = complete(3);
        answers.insert("q2", 0);
        answers.insert("q5", 6);
        answers.insert("q1", 0);

        let findings = answer_findings(&answers, true);
        let flagged = findings
            .iter()
            .filter(|finding| finding.id == "answers.out_of_range")
            .filter_map(|finding| finding.question.as_deref())
            .collect::<Vec<_>>();
        assert_eq!(flagged, ["q2", "q5"]);
        assert!(findings.iter().all(|finding| finding.blocking));
    }

    #[test]
    fn unknown_keys_warn_or_block_per_setting() {
        let mut answers = complete(4);
        answers.insert("q26", 3);

        let lenient = answer_findings(&answers, true);
        assert_eq!(lenient.len(), 1);
        assert_eq!(lenient[0].id, "answers.unknown_key");
        assert!(!lenient[0].blocking);

        let strict = answer_findings(&answers, false);
        assert!(strict[0].blocking);
    }

    #[test]
    fn ensure_valid_passes_warnings_through() {
        let mut answers = complete(4);
        answers.insert("extra", 1);
        let findings = answer_findings(&answers, true);
        assert!(ensure_valid(&findings).is_ok());
    }

    #[test]
    fn ensure_valid_summarizes_blocking_findings() {
        let findings = answer_findings(&AnswerSet::default(), true);
        let err = ensure_valid(&findings).expect_err("missing answers should fail");
        let message = err.to_string();
        assert!(message.contains("invalid answers"));
        assert!(message.contains("missing answer for q1"));
        assert!(message.contains("and 22 more"));
    }
}
