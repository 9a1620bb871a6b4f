use crate::types::profile::ProductivityType;
use crate::types::profile::ProductivityType::{
    DeepWorkBeast, FlowSurfer, HybridHarmonizer, SprintStrategist, StructureSeeker,
};

/// Static recommendation content for one productivity type.
#[derive(Debug)]
pub struct TypeProfile {
    pub description: &'static str,
    pub time_blocking: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub habits: &'static [&'static str],
    pub strengths: &'static [&'static str],
    pub challenges: &'static [&'static str],
    pub works_well_with: &'static [ProductivityType],
    pub challenges_with: &'static [ProductivityType],
}

impl ProductivityType {
    pub fn profile(self) -> &'static TypeProfile {
        match self {
            DeepWorkBeast => &DEEP_WORK_BEAST,
            SprintStrategist => &SPRINT_STRATEGIST,
            FlowSurfer => &FLOW_SURFER,
            StructureSeeker => &STRUCTURE_SEEKER,
            HybridHarmonizer => &HYBRID_HARMONIZER,
        }
    }
}

static DEEP_WORK_BEAST: TypeProfile = TypeProfile {
    description: "You thrive in long, uninterrupted sessions of focused work. You need significant time to enter your flow state, but once there, you can achieve remarkable depth and quality of work. You prioritize complex, challenging tasks that require deep thinking.",
    time_blocking: &[
        "Schedule 2-3 hour blocks of uninterrupted deep work",
        "Hold meetings only during your lower energy periods",
        "Plan for 15-30 minutes of warmup before deep work",
        "End your day with planning for tomorrow",
        "Create a ritual to signal the start of deep work sessions",
        "Use 90-minute cycles aligned with your ultradian rhythm",
    ],
    tools: &[
        "Freedom",
        "Brain.fm",
        "RescueTime",
        "Notion",
        "Evernote",
        "Forest app",
        "Noise-canceling headphones",
    ],
    habits: &[
        "Create a pre-deep work ritual to signal focus time",
        "Use noise-canceling headphones during focus sessions",
        "Turn off all notifications during deep work",
        "Take a short walk before starting deep work",
        "Keep a 'distraction log' during focus sessions",
        "Practice meditation to improve concentration",
    ],
    strengths: &[
        "Exceptional ability to concentrate for extended periods",
        "High output quality on complex knowledge work",
        "Strong analytical thinking and problem-solving",
        "Excellent at completing challenging, long-term projects",
        "Natural fit for roles requiring depth over breadth",
    ],
    challenges: &[
        "May struggle with frequent interruptions",
        "Can find it difficult to shift between tasks quickly",
        "Might overlook smaller details when focused on the big picture",
        "Can be resistant to collaboration during flow states",
        "May need longer recovery after intense focus periods",
    ],
    works_well_with: &[StructureSeeker, HybridHarmonizer],
    challenges_with: &[SprintStrategist, FlowSurfer],
};

static SPRINT_STRATEGIST: TypeProfile = TypeProfile {
    description: "You excel in short, high-intensity work bursts. You prefer variety and can quickly shift between different tasks, making you highly adaptable and efficient. Your energy comes in waves, and you instinctively know how to ride them.",
    time_blocking: &[
        "Use 25-minute Pomodoro sprints with 5-minute breaks",
        "Group similar tasks together in blocks",
        "Schedule high-energy tasks during your peak hours",
        "Build in transition time between different types of work",
        "Plan your day in 30-minute increments",
        "Allow for spontaneous productivity bursts",
    ],
    tools: &[
        "Toggl",
        "Forest",
        "Taskade",
        "TickTick",
        "Sorted",
        "TimeBloc",
        "Focus@Will",
        "Any.do",
    ],
    habits: &[
        "Start each day by identifying your top 3 priorities",
        "Take short breaks between tasks to reset your focus",
        "Use a timer for focused work sessions",
        "Change your environment for different types of tasks",
        "Practice the '2-minute rule' for quick tasks",
        "Use visual cues to track daily progress",
    ],
    strengths: &[
        "Outstanding adaptability to changing priorities",
        "Efficient handling of varied workloads",
        "Quick decision-making under pressure",
        "Natural multitasker who can juggle different responsibilities",
        "High energy output in short, focused bursts",
    ],
    challenges: &[
        "Might find it challenging to sustain focus on a single task",
        "Can sometimes start more than they finish",
        "May underestimate time needed for complex tasks",
        "Risk of burnout from constant task-switching",
        "Can struggle with projects requiring extended deep thinking",
    ],
    works_well_with: &[FlowSurfer, HybridHarmonizer],
    challenges_with: &[DeepWorkBeast, StructureSeeker],
};

static FLOW_SURFER: TypeProfile = TypeProfile {
    description: "You work best when you can ride your natural creative waves. You need autonomy and the right environment to produce your best work, with strong sensitivity to your surroundings. Your productivity is closely tied to your inspiration and physical state.",
    time_blocking: &[
        "Create flexible time blocks that can shift based on energy",
        "Schedule creative work when you feel most inspired",
        "Build in buffer time between commitments",
        "Reserve one day per week for your most creative work",
        "Track your energy patterns to identify optimal creative windows",
        "Allow for 'creativity incubation' time with no specific output goals",
    ],
    tools: &[
        "Muse",
        "Brain.fm",
        "Notion",
        "MindNode",
        "Trello",
        "Day.io",
        "Inspiration cards",
        "Environment switcher",
    ],
    habits: &[
        "Track your energy levels to identify natural patterns",
        "Create an inspiring workspace that shifts with your projects",
        "Use music or ambient sounds that match your current task",
        "Take advantage of high-creativity moments when they occur",
        "Keep an inspiration journal or idea capture system",
        "Design your environment to minimize unnecessary decisions",
    ],
    strengths: &[
        "Exceptional creative thinking and innovation",
        "Strong intuitive understanding of complex systems",
        "Ability to make unconventional connections between ideas",
        "Natural at work requiring artistic or lateral thinking",
        "High-quality output when working in optimal conditions",
    ],
    challenges: &[
        "May find structured environments limiting",
        "Output can be inconsistent based on inspiration and environment",
        "Might struggle with administrative or routine tasks",
        "Can find it difficult to articulate creative process to others",
        "May resist planning and scheduling",
    ],
    works_well_with: &[SprintStrategist, HybridHarmonizer],
    challenges_with: &[DeepWorkBeast, StructureSeeker],
};

static STRUCTURE_SEEKER: TypeProfile = TypeProfile {
    description: "You thrive with clear routines and organized systems. You prefer predictability and benefit from detailed planning and regular checkpoints. For you, productivity is about consistency and methodical progress.",
    time_blocking: &[
        "Create a consistent daily schedule with fixed blocks",
        "Use time-tracking to optimize your routines",
        "Schedule regular review and planning sessions",
        "Set specific start and end times for all tasks",
        "Plan your week in advance with detailed time allocation",
        "Create templates for recurring activities and workflows",
    ],
    tools: &[
        "Sunsama",
        "Motion",
        "Google Calendar",
        "Things 3",
        "Todoist",
        "Roam Research",
        "Airtable",
        "OmniFocus",
    ],
    habits: &[
        "Begin and end your workday at consistent times",
        "Use checklists for recurring processes",
        "Schedule buffer time between meetings",
        "Do a weekly review every Friday afternoon",
        "Create templates for common tasks and communications",
        "Batch process emails and messages at specific times",
    ],
    strengths: &[
        "Excellent at creating and maintaining systems",
        "Consistent, reliable output and follow-through",
        "Strong organizational skills and attention to detail",
        "Natural talent for logistics and operations",
        "Ability to create order from chaos",
    ],
    challenges: &[
        "Can be thrown off by unexpected changes",
        "Might over-plan at the expense of execution",
        "Can struggle with ambiguous directions or goals",
        "May find it difficult to adapt when plans don't work out",
        "Risk of getting caught in perfectionism",
    ],
    works_well_with: &[DeepWorkBeast, HybridHarmonizer],
    challenges_with: &[SprintStrategist, FlowSurfer],
};

static HYBRID_HARMONIZER: TypeProfile = TypeProfile {
    description: "You naturally balance structure and flexibility. You adapt your work style intuitively based on the task at hand and your current energy levels. This versatility allows you to excel across different types of projects and environments.",
    time_blocking: &[
        "Alternate between structured days and flexible days",
        "Use theme days to batch similar activities",
        "Create morning and afternoon rituals for transitions",
        "Adjust your schedule weekly based on priorities",
        "Balance deep work with collaborative sessions",
        "Reserve both structured and unstructured thinking time",
    ],
    tools: &[
        "Notion",
        "Google Calendar",
        "TickTick",
        "Todoist",
        "Centered",
        "Tiago Forte's PARA method",
        "Obsidian",
        "Coda",
    ],
    habits: &[
        "Check in with yourself throughout the day to assess energy",
        "Move between different workspaces based on task type",
        "Use different productivity techniques for different projects",
        "Balance planned work with spontaneous creative time",
        "Practice context switching with transitional rituals",
        "Regularly experiment with new productivity methods",
    ],
    strengths: &[
        "Versatility across different work contexts",
        "Natural ability to balance structure with creativity",
        "Strong adaptability to different team dynamics",
        "Excellent at translating between different working styles",
        "Ability to optimize approach based on the specific challenge",
    ],
    challenges: &[
        "May sometimes lack the depth of specialists",
        "Can find it hard to commit to a single approach",
        "Might struggle to explain their adaptive methodology to others",
        "Can be pulled in too many directions without boundaries",
        "May need to actively protect focus time",
    ],
    works_well_with: &[DeepWorkBeast, SprintStrategist, FlowSurfer, StructureSeeker],
    challenges_with: &[],
};
