use serde::{Deserialize, Serialize};

/// The fixed five-part structure every lesson plan carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonOutline {
    pub introduction: String,
    pub development: String,
    pub practice: String,
    pub assessment: String,
    pub closure: String,
}

/// One part of a [`LessonOutline`], in teaching order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineSection {
    Introduction,
    Development,
    Practice,
    Assessment,
    Closure,
}

impl OutlineSection {
    /// All sections in the order they are taught and rendered.
    pub const ALL: [OutlineSection; 5] = [
        OutlineSection::Introduction,
        OutlineSection::Development,
        OutlineSection::Practice,
        OutlineSection::Assessment,
        OutlineSection::Closure,
    ];

    pub fn label(self) -> &'static str {
        match self {
            OutlineSection::Introduction => "Introduction",
            OutlineSection::Development => "Development",
            OutlineSection::Practice => "Practice",
            OutlineSection::Assessment => "Assessment",
            OutlineSection::Closure => "Closure",
        }
    }

    /// Field name as it appears in serialized plans.
    pub fn key(self) -> &'static str {
        match self {
            OutlineSection::Introduction => "introduction",
            OutlineSection::Development => "development",
            OutlineSection::Practice => "practice",
            OutlineSection::Assessment => "assessment",
            OutlineSection::Closure => "closure",
        }
    }
}

impl LessonOutline {
    pub fn get(&self, section: OutlineSection) -> &str {
        match section {
            OutlineSection::Introduction => &self.introduction,
            OutlineSection::Development => &self.development,
            OutlineSection::Practice => &self.practice,
            OutlineSection::Assessment => &self.assessment,
            OutlineSection::Closure => &self.closure,
        }
    }

    pub fn get_mut(&mut self, section: OutlineSection) -> &mut String {
        match section {
            OutlineSection::Introduction => &mut self.introduction,
            OutlineSection::Development => &mut self.development,
            OutlineSection::Practice => &mut self.practice,
            OutlineSection::Assessment => &mut self.assessment,
            OutlineSection::Closure => &mut self.closure,
        }
    }

    /// Iterate `(section, body)` pairs in teaching order.
    pub fn sections(&self) -> impl Iterator<Item = (OutlineSection, &str)> {
        OutlineSection::ALL
            .into_iter()
            .map(move |section| (section, self.get(section)))
    }
}
