use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::WorkstyleError;

/// The five productivity archetypes, in tie-break order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductivityType {
    DeepWorkBeast,
    SprintStrategist,
    FlowSurfer,
    StructureSeeker,
    HybridHarmonizer,
}

impl ProductivityType {
    pub const ALL: [ProductivityType; 5] = [
        ProductivityType::DeepWorkBeast,
        ProductivityType::SprintStrategist,
        ProductivityType::FlowSurfer,
        ProductivityType::StructureSeeker,
        ProductivityType::HybridHarmonizer,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ProductivityType::DeepWorkBeast => "Deep Work Beast",
            ProductivityType::SprintStrategist => "Sprint Strategist",
            ProductivityType::FlowSurfer => "Flow Surfer",
            ProductivityType::StructureSeeker => "Structure Seeker",
            ProductivityType::HybridHarmonizer => "Hybrid Harmonizer",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            ProductivityType::DeepWorkBeast => "deep-work-beast",
            ProductivityType::SprintStrategist => "sprint-strategist",
            ProductivityType::FlowSurfer => "flow-surfer",
            ProductivityType::StructureSeeker => "structure-seeker",
            ProductivityType::HybridHarmonizer => "hybrid-harmonizer",
        }
    }
}

impl fmt::Display for ProductivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ProductivityType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Accepts either the slug (`flow-surfer`) or the display label
/// (`Flow Surfer`), case-insensitively.
impl FromStr for ProductivityType {
    type Err = WorkstyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ProductivityType::ALL
            .into_iter()
            .find(|kind| {
                kind.slug().eq_ignore_ascii_case(wanted) || kind.label().eq_ignore_ascii_case(wanted)
            })
            .ok_or_else(|| WorkstyleError::UnknownType(wanted.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chronotype {
    MorningLark,
    NightOwl,
    BiphasicPerformer,
    UltradianSprinter,
    BalancedPerformer,
}

impl Chronotype {
    pub fn label(self) -> &'static str {
        match self {
            Chronotype::MorningLark => "Morning Lark",
            Chronotype::NightOwl => "Night Owl",
            Chronotype::BiphasicPerformer => "Bi-phasic Performer",
            Chronotype::UltradianSprinter => "Ultradian Sprinter",
            Chronotype::BalancedPerformer => "Balanced Performer",
        }
    }
}

impl fmt::Display for Chronotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Chronotype {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
