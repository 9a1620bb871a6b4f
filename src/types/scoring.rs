use serde::Serialize;

/// Raw sum of answer values within one category.
pub type Total = i64;

/// Category total rescaled to `0..=100`.
pub type Score = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    CognitiveRhythm,
    WorkStyle,
    EnergyPattern,
    FocusDrivers,
    ToolUsage,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::CognitiveRhythm,
        Category::WorkStyle,
        Category::EnergyPattern,
        Category::FocusDrivers,
        Category::ToolUsage,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CognitiveRhythm => "Cognitive rhythm",
            Category::WorkStyle => "Work style",
            Category::EnergyPattern => "Energy pattern",
            Category::FocusDrivers => "Focus drivers",
            Category::ToolUsage => "Tool usage",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    pub cognitive_rhythm: Total,
    pub work_style: Total,
    pub energy_pattern: Total,
    pub focus_drivers: Total,
    pub tool_usage: Total,
}

impl CategoryTotals {
    pub fn get(&self, category: Category) -> Total {
        match category {
            Category::CognitiveRhythm => self.cognitive_rhythm,
            Category::WorkStyle => self.work_style,
            Category::EnergyPattern => self.energy_pattern,
            Category::FocusDrivers => self.focus_drivers,
            Category::ToolUsage => self.tool_usage,
        }
    }

    pub fn add(&mut self, category: Category, value: Total) {
        let slot = match category {
            Category::CognitiveRhythm => &mut self.cognitive_rhythm,
            Category::WorkStyle => &mut self.work_style,
            Category::EnergyPattern => &mut self.energy_pattern,
            Category::FocusDrivers => &mut self.focus_drivers,
            Category::ToolUsage => &mut self.tool_usage,
        };
        *slot += value;
    }

    pub fn sum(&self) -> Total {
        Category::ALL.iter().map(|category| self.get(*category)).sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub cognitive: Score,
    pub work_style: Score,
    pub energy: Score,
    pub focus: Score,
    pub tool_usage: Score,
}

impl CategoryScores {
    pub fn new(cognitive: Score, work_style: Score, energy: Score, focus: Score, tool_usage: Score) -> Self {
        Self {
            cognitive,
            work_style,
            energy,
            focus,
            tool_usage,
        }
    }

    pub fn get(&self, category: Category) -> Score {
        match category {
            Category::CognitiveRhythm => self.cognitive,
            Category::WorkStyle => self.work_style,
            Category::EnergyPattern => self.energy,
            Category::FocusDrivers => self.focus,
            Category::ToolUsage => self.tool_usage,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn totals_accumulate_per_category() {
        let mut totals = CategoryTotals::default();
        totals.add(Category::WorkStyle, 3);
        totals.add(Category::WorkStyle, 4);
        totals.add(Category::ToolUsage, 2);
        assert_eq!(totals.get(Category::WorkStyle), 7);
        assert_eq!(totals.get(Category::CognitiveRhythm), 0);
        assert_eq!(totals.sum(), 9);
    }

    #[test]
    fn scores_serialize_with_short_keys() {
        let rendered = serde_json::to_string(&CategoryScores::new(10, 20, 30, 40, 50))
            .expect("scores should serialize");
        assert!(rendered.contains("\"cognitive\":10"));
        assert!(rendered.contains("\"workStyle\":20"));
        assert!(rendered.contains("\"toolUsage\":50"));
    }
}
