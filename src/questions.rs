use serde::Serialize;

use crate::types::scoring::Category;
use crate::types::scoring::Category::{CognitiveRhythm, EnergyPattern, FocusDrivers, ToolUsage, WorkStyle};

/// Lowest value any option carries.
pub const SCALE_MIN: i64 = 0;
/// Highest value any option carries.
pub const SCALE_MAX: i64 = 5;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuestionOption {
    pub value: i64,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    /// `None` for questions that are asked but not scored.
    pub category: Option<Category>,
    pub options: &'static [QuestionOption],
}

impl Question {
    pub fn accepts(&self, value: i64) -> bool {
        self.options.iter().any(|option| option.value == value)
    }

    pub fn value_range(&self) -> (i64, i64) {
        let values = self.options.iter().map(|option| option.value);
        let min = values.clone().min().unwrap_or(SCALE_MIN);
        let max = values.max().unwrap_or(SCALE_MAX);
        (min, max)
    }
}

macro_rules! options {
    ($($value:literal => $label:literal),+ $(,)?) => {
        &[$(QuestionOption { value: $value, label: $label }),+]
    };
}

static QUESTION_BANK: [Question; 25] = [
    Question {
        id: "q1",
        text: "What time of day do you feel mentally sharpest?",
        category: Some(CognitiveRhythm),
        options: options![
            5 => "Early morning (5-8 AM)",
            4 => "Morning (8-11 AM)",
            3 => "Midday (11 AM-2 PM)",
            2 => "Afternoon (2-5 PM)",
            1 => "Evening (5-8 PM)",
            0 => "Late night (8 PM or later)",
        ],
    },
    Question {
        id: "q2",
        text: "How long does it typically take you to get into a productive flow state?",
        category: Some(CognitiveRhythm),
        options: options![
            5 => "Almost immediately (less than 5 minutes)",
            4 => "Quickly (5-15 minutes)",
            3 => "Moderately fast (15-30 minutes)",
            2 => "It takes some time (30-60 minutes)",
            1 => "Usually quite a while (over 1 hour)",
        ],
    },
    Question {
        id: "q3",
        text: "When approaching a large project, do you prefer to:",
        category: Some(WorkStyle),
        options: options![
            5 => "Break it into many small tasks and work in short bursts",
            4 => "Create a detailed plan with milestones before starting",
            3 => "Dive in and figure it out as I go",
            2 => "Clear a large block of time to work without interruption",
            1 => "Wait for inspiration to strike before getting started",
        ],
    },
    Question {
        id: "q4",
        text: "Which work pattern best describes you?",
        category: Some(WorkStyle),
        options: options![
            5 => "I prefer to work in short, intense sprints",
            4 => "I like a consistent, steady pace throughout the day",
            3 => "I work best when I have long blocks of focused time",
            2 => "My energy and focus fluctuate throughout the day",
            1 => "I prefer to work when inspiration strikes me",
        ],
    },
    Question {
        id: "q5",
        text: "How does your energy typically flow throughout the day?",
        category: Some(EnergyPattern),
        options: options![
            5 => "Highest in the morning, gradually decreasing",
            4 => "Peaks mid-morning and mid-afternoon",
            3 => "Builds gradually, reaching peak in late afternoon",
            2 => "Low in morning, highest in evening/night",
            1 => "Unpredictable fluctuations throughout the day",
        ],
    },
    Question {
        id: "q6",
        text: "After intense focus, how do you prefer to recover?",
        category: Some(EnergyPattern),
        options: options![
            5 => "Short breaks (5-10 minutes) between tasks",
            4 => "Physical activity (walk, stretch, exercise)",
            3 => "Switch to a different type of work",
            2 => "Longer breaks with complete mental disconnection",
            1 => "Social interaction or conversations",
        ],
    },
    Question {
        id: "q7",
        text: "What environment helps you focus best?",
        category: Some(FocusDrivers),
        options: options![
            5 => "Complete silence with minimal distractions",
            4 => "Background ambient noise or music",
            3 => "Moderate activity around me (like a café)",
            2 => "Changing environments based on my task",
            1 => "Collaborative spaces with others working nearby",
        ],
    },
    Question {
        id: "q8",
        text: "How do you respond to deadlines?",
        category: Some(FocusDrivers),
        options: options![
            5 => "I work steadily well ahead of the deadline",
            4 => "I create a schedule and stick to it",
            3 => "I start early but finish with a final push",
            2 => "I work well under pressure as the deadline approaches",
            1 => "I need deadline pressure to get motivated",
        ],
    },
    Question {
        id: "q9",
        text: "Which productivity tools do you find most helpful?",
        category: Some(ToolUsage),
        options: options![
            5 => "Detailed task management systems",
            4 => "Calendar blocking and scheduling",
            3 => "Simple to-do lists",
            2 => "Focus timers (like Pomodoro)",
            1 => "Minimal tools/analog systems",
        ],
    },
    Question {
        id: "q10",
        text: "What's your biggest productivity challenge?",
        category: Some(ToolUsage),
        options: options![
            5 => "Getting started on tasks",
            4 => "Maintaining focus without distractions",
            3 => "Balancing multiple projects/responsibilities",
            2 => "Managing energy throughout the day",
            1 => "Feeling motivated or inspired",
        ],
    },
    Question {
        id: "q11",
        text: "How do you handle interruptions during focused work?",
        category: Some(WorkStyle),
        options: options![
            5 => "Deal with them quickly and jump straight back in",
            4 => "Note them down and handle them at a set time",
            3 => "It depends on how urgent they are",
            2 => "Block them out completely until I'm done",
            1 => "They usually derail me for a while",
        ],
    },
    Question {
        id: "q12",
        text: "When does your energy dip the most?",
        category: Some(EnergyPattern),
        options: options![
            5 => "Rarely, my energy stays steady",
            4 => "Briefly after lunch",
            3 => "Mid-afternoon",
            2 => "Late morning",
            1 => "It varies from day to day",
        ],
    },
    Question {
        id: "q13",
        text: "How do you keep track of what you need to do?",
        category: Some(ToolUsage),
        options: options![
            5 => "A dedicated task manager with projects and tags",
            4 => "A calendar with time blocks",
            3 => "A running list in a notes app",
            2 => "Sticky notes or a paper notebook",
            1 => "Mostly in my head",
        ],
    },
    Question {
        id: "q14",
        text: "How long can you sustain deep concentration on one task?",
        category: Some(CognitiveRhythm),
        options: options![
            5 => "More than 2 hours",
            4 => "90 minutes to 2 hours",
            3 => "About an hour",
            2 => "30-45 minutes",
            1 => "Less than 30 minutes",
        ],
    },
    Question {
        id: "q15",
        text: "What most often breaks your focus?",
        category: Some(FocusDrivers),
        options: options![
            5 => "Very little once I'm in the zone",
            4 => "Notifications I forgot to silence",
            3 => "Nearby conversations or noise",
            2 => "My own wandering thoughts",
            1 => "Hunger, fatigue or physical discomfort",
        ],
    },
    Question {
        id: "q16",
        text: "What gets you started on a difficult task?",
        category: Some(FocusDrivers),
        options: options![
            5 => "The challenge itself",
            4 => "A clear first step written down",
            3 => "Knowing someone depends on it",
            2 => "A reward once it's done",
            1 => "An approaching deadline",
        ],
    },
    Question {
        id: "q17",
        text: "How do you prefer to plan your week?",
        category: Some(WorkStyle),
        options: options![
            5 => "Every hour is planned in advance",
            4 => "Key blocks planned, gaps left open",
            3 => "A priority list without fixed times",
            2 => "I plan each day that morning",
            1 => "I respond to whatever comes up",
        ],
    },
    Question {
        id: "q18",
        text: "How do you best absorb complex information?",
        category: Some(CognitiveRhythm),
        options: options![
            5 => "Reading and taking detailed notes",
            4 => "Working through examples hands-on",
            3 => "Discussing it with others",
            2 => "Watching demos or videos",
            1 => "Letting it sink in over a few days",
        ],
    },
    Question {
        id: "q19",
        text: "How often do you adjust your productivity system?",
        category: Some(ToolUsage),
        options: options![
            5 => "I refine it every week",
            4 => "A few times a year",
            3 => "When my current approach stops working",
            2 => "Rarely",
            1 => "I don't really have a system",
        ],
    },
    Question {
        id: "q20",
        text: "How do you usually feel at the end of a workday?",
        category: Some(EnergyPattern),
        options: options![
            5 => "Still energized",
            4 => "Pleasantly tired",
            3 => "Drained but satisfied",
            2 => "Completely exhausted",
            1 => "It swings widely from day to day",
        ],
    },
    Question {
        id: "q21",
        text: "How do you prefer to collaborate with others?",
        category: None,
        options: options![
            5 => "Scheduled working sessions with a clear agenda",
            4 => "Short daily check-ins",
            3 => "Async updates in a shared document",
            2 => "Ad hoc calls when something comes up",
            1 => "I prefer to work alone and share the result",
        ],
    },
    Question {
        id: "q22",
        text: "How do you feel about handling several tasks at once?",
        category: None,
        options: options![
            5 => "I enjoy juggling many things",
            4 => "Fine, as long as they are related",
            3 => "Manageable for short periods",
            2 => "I'd rather finish one thing first",
            1 => "It makes me lose track of everything",
        ],
    },
    Question {
        id: "q23",
        text: "How important is a tidy workspace to you?",
        category: None,
        options: options![
            5 => "Essential, I clean up before starting",
            4 => "Important, I tidy up at the end of the day",
            3 => "Nice to have",
            2 => "I barely notice",
            1 => "Creative clutter helps me think",
        ],
    },
    Question {
        id: "q24",
        text: "What do you do after finishing a big piece of work?",
        category: None,
        options: options![
            5 => "Review what went well and what didn't",
            4 => "Move straight on to the next thing",
            3 => "Share it with the people involved",
            2 => "Take a real break to recharge",
            1 => "Celebrate with something fun",
        ],
    },
    Question {
        id: "q25",
        text: "How do you feel about working from different locations?",
        category: None,
        options: options![
            5 => "I need the same desk every day",
            4 => "I prefer one main spot with occasional changes",
            3 => "I switch between two or three places",
            2 => "I move around depending on the task",
            1 => "A new place every day keeps me fresh",
        ],
    },
];

/// The full bank, in the order a quiz presents it.
pub fn questions() -> &'static [Question] {
    &QUESTION_BANK
}

pub fn question(id: &str) -> Option<&'static Question> {
    QUESTION_BANK.iter().find(|question| question.id == id)
}

pub fn category_questions(category: Category) -> impl Iterator<Item = &'static Question> {
    QUESTION_BANK
        .iter()
        .filter(move |question| question.category == Some(category))
}

/// Largest possible total for a category: question count times `SCALE_MAX`.
pub fn category_max_total(category: Category) -> i64 {
    category_questions(category).count() as i64 * SCALE_MAX
}
