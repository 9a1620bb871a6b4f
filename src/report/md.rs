use crate::questions::Question;
use crate::types::profile::ProductivityType;
use crate::types::report::QuizResult;
use crate::types::scoring::Category;

pub fn to_markdown(result: &QuizResult) -> String {
    let mut output = String::new();
    output.push_str("# Productivity Style Report\n\n");
    output.push_str(&format!("Type: {}\n", result.kind));
    output.push_str(&format!("Chronotype: {}\n\n", result.chronotype));
    output.push_str(result.description);
    output.push_str("\n\n");

    output.push_str("## Category Scores\n\n");
    for category in Category::ALL {
        output.push_str(&format!(
            "- {}: {}/100\n",
            category.label().to_lowercase(),
            result.score.get(category)
        ));
    }
    output.push('\n');

    push_list(&mut output, "Time Blocking", &result.time_blocking);
    push_list(&mut output, "Tools", &result.tools);
    push_list(&mut output, "Habits", &result.habits);
    push_list(&mut output, "Strengths", &result.strengths);
    push_list(&mut output, "Challenges", &result.challenges);
    push_compatibility(
        &mut output,
        &result.compatibility.works_well_with,
        &result.compatibility.challenges_with,
    );

    output
}

pub fn profile_to_markdown(kind: ProductivityType) -> String {
    let profile = kind.profile();
    let mut output = String::new();
    output.push_str(&format!("# {kind}\n\n"));
    output.push_str(profile.description);
    output.push_str("\n\n");
    push_list(&mut output, "Time Blocking", profile.time_blocking);
    push_list(&mut output, "Tools", profile.tools);
    push_list(&mut output, "Habits", profile.habits);
    push_list(&mut output, "Strengths", profile.strengths);
    push_list(&mut output, "Challenges", profile.challenges);
    push_compatibility(&mut output, profile.works_well_with, profile.challenges_with);
    output
}

pub fn questions_to_markdown(questions: &[Question]) -> String {
    let mut output = String::new();
    output.push_str("# Productivity Style Quiz\n\n");
    for (index, question) in questions.iter().enumerate() {
        output.push_str(&format!(
            "## {}. {} ({})\n\n",
            index + 1,
            question.text,
            question.id
        ));
        for option in question.options {
            output.push_str(&format!("- [{}] {}\n", option.value, option.label));
        }
        output.push('\n');
    }
    output
}

fn push_list(output: &mut String, heading: &str, items: &[&str]) {
    output.push_str(&format!("## {heading}\n\n"));
    if items.is_empty() {
        output.push_str("- none\n\n");
        return;
    }
    for item in items {
        output.push_str(&format!("- {item}\n"));
    }
    output.push('\n');
}

fn push_compatibility(
    output: &mut String,
    works_well_with: &[ProductivityType],
    challenges_with: &[ProductivityType],
) {
    let join = |kinds: &[ProductivityType]| {
        if kinds.is_empty() {
            "none".to_string()
        } else {
            kinds
                .iter()
                .map(|kind| kind.label())
                .collect::<Vec<_>>()
                .join(", ")
        }
    };
    output.push_str("## Compatibility\n\n");
    output.push_str(&format!("- works well with: {}\n", join(works_well_with)));
    output.push_str(&format!("- challenges with: {}\n", join(challenges_with)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions;
    use crate::scorer::compute_result;
    use crate::types::answers::AnswerSet;

    #[test]
    fn markdown_report_contains_sections() {
        let answers: AnswerSet = questions::questions()
            .iter()
            .map(|question| (question.id, 5))
            .collect();
        let rendered = to_markdown(&compute_result(&answers));
        assert!(rendered.contains("# Productivity Style Report"));
        assert!(rendered.contains("Type: Hybrid Harmonizer"));
        assert!(rendered.contains("Chronotype: Morning Lark"));
        assert!(rendered.contains("## Category Scores"));
        assert!(rendered.contains("- cognitive rhythm: 100/100"));
        assert!(rendered.contains("## Time Blocking"));
        assert!(rendered.contains("## Compatibility"));
    }

    #[test]
    fn markdown_profile_marks_empty_challenges() {
        let rendered = profile_to_markdown(ProductivityType::HybridHarmonizer);
        assert!(rendered.starts_with("# Hybrid Harmonizer"));
        assert!(rendered.contains("- challenges with: none"));
    }

    #[test]
    fn markdown_questions_number_each_entry() {
        let rendered = questions_to_markdown(questions::questions());
        assert!(rendered.contains("## 1. What time of day do you feel mentally sharpest? (q1)"));
        assert!(rendered.contains("- [0] Late night (8 PM or later)"));
        assert!(rendered.contains("(q25)"));
    }
}
