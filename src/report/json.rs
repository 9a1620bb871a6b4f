use crate::questions::Question;
use crate::types::profile::ProductivityType;
use crate::types::report::QuizResult;
use serde_json::json;

pub fn to_json(result: &QuizResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(result)
}

pub fn questions_to_json(questions: &[Question]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(questions)
}

pub fn profile_to_json(kind: ProductivityType) -> Result<String, serde_json::Error> {
    let profile = kind.profile();
    let document = json!({
        "type": kind,
        "description": profile.description,
        "timeBlocking": profile.time_blocking,
        "tools": profile.tools,
        "habits": profile.habits,
        "strengths": profile.strengths,
        "challenges": profile.challenges,
        "compatibility": {
            "works_well_with": profile.works_well_with,
            "challenges_with": profile.challenges_with,
        },
    });
    serde_json::to_string_pretty(&document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions;
    use crate::scorer::compute_result;
    use crate::types::answers::AnswerSet;

    #[test]
    fn json_result_contains_type_and_scores() {
        let rendered =
            to_json(&compute_result(&AnswerSet::default())).expect("json should serialize");
        assert!(rendered.contains("\"type\": \"Hybrid Harmonizer\""));
        assert!(rendered.contains("\"chronotype\": \"Balanced Performer\""));
        assert!(rendered.contains("\"workStyle\": 0"));
    }

    #[test]
    fn json_questions_list_every_option() {
        let rendered = questions_to_json(questions::questions()).expect("json should serialize");
        let parsed: serde_json::Value =
            serde_json::from_str(&rendered).expect("rendered json should parse");
        assert_eq!(parsed.as_array().map(Vec::len), Some(25));
        assert_eq!(parsed[0]["id"], "q1");
        assert_eq!(parsed[0]["category"], "cognitiveRhythm");
        assert_eq!(parsed[0]["options"][5]["value"], 0);
        assert!(parsed[24]["category"].is_null());
    }

    #[test]
    fn json_profile_names_compatible_types() {
        let rendered =
            profile_to_json(ProductivityType::FlowSurfer).expect("json should serialize");
        assert!(rendered.contains("\"type\": \"Flow Surfer\""));
        assert!(rendered.contains("\"Sprint Strategist\""));
    }
}
