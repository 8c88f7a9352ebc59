use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::CoreError;
use crate::models::outline::{LessonOutline, OutlineSection};

/// One lesson's metadata, content lists, fixed outline, and optional
/// generated content.
///
/// Serialized with camelCase keys. Any key missing from the input
/// deserializes to an empty value, so partially filled drafts load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LessonPlan {
    pub id: Uuid,
    pub topic: String,
    pub grade_level: String,
    pub main_concept: String,
    pub sub_topics: Vec<String>,
    pub materials: Vec<String>,
    pub objectives: Vec<String>,
    pub outline: LessonOutline,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_content: Option<String>,
    pub created_at: jiff::Timestamp,
    pub updated_at: jiff::Timestamp,
}

/// The three free-text sequences, addressed by tag instead of field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListField {
    SubTopics,
    Materials,
    Objectives,
}

impl ListField {
    pub const ALL: [ListField; 3] = [
        ListField::SubTopics,
        ListField::Materials,
        ListField::Objectives,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ListField::SubTopics => "subTopics",
            ListField::Materials => "materials",
            ListField::Objectives => "objectives",
        }
    }
}

/// Single-line required fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarField {
    Topic,
    GradeLevel,
    MainConcept,
}

impl ScalarField {
    pub const ALL: [ScalarField; 3] = [
        ScalarField::Topic,
        ScalarField::GradeLevel,
        ScalarField::MainConcept,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ScalarField::Topic => "topic",
            ScalarField::GradeLevel => "gradeLevel",
            ScalarField::MainConcept => "mainConcept",
        }
    }
}

impl Default for LessonPlan {
    fn default() -> Self {
        Self::new()
    }
}

impl LessonPlan {
    /// An empty plan with a fresh id.
    pub fn new() -> Self {
        let now = jiff::Timestamp::now();
        Self {
            id: Uuid::new_v4(),
            topic: String::new(),
            grade_level: String::new(),
            main_concept: String::new(),
            sub_topics: Vec::new(),
            materials: Vec::new(),
            objectives: Vec::new(),
            outline: LessonOutline::default(),
            ai_content: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn scalar(&self, field: ScalarField) -> &str {
        match field {
            ScalarField::Topic => &self.topic,
            ScalarField::GradeLevel => &self.grade_level,
            ScalarField::MainConcept => &self.main_concept,
        }
    }

    pub fn scalar_mut(&mut self, field: ScalarField) -> &mut String {
        match field {
            ScalarField::Topic => &mut self.topic,
            ScalarField::GradeLevel => &mut self.grade_level,
            ScalarField::MainConcept => &mut self.main_concept,
        }
    }

    pub fn list(&self, field: ListField) -> &[String] {
        match field {
            ListField::SubTopics => &self.sub_topics,
            ListField::Materials => &self.materials,
            ListField::Objectives => &self.objectives,
        }
    }

    pub fn list_mut(&mut self, field: ListField) -> &mut Vec<String> {
        match field {
            ListField::SubTopics => &mut self.sub_topics,
            ListField::Materials => &mut self.materials,
            ListField::Objectives => &mut self.objectives,
        }
    }

    /// Generated content, treating an empty string the same as absent.
    pub fn ai_content(&self) -> Option<&str> {
        self.ai_content.as_deref().filter(|s| !s.is_empty())
    }

    /// Mark the plan as modified now.
    pub fn touch(&mut self) {
        self.updated_at = jiff::Timestamp::now();
    }

    /// Check the fields required for submission: the three scalars and all
    /// five outline sections must be non-blank.
    ///
    /// Reports the first offending field by its serialized key.
    pub fn validate(&self) -> Result<(), CoreError> {
        for field in ScalarField::ALL {
            if self.scalar(field).trim().is_empty() {
                return Err(CoreError::MissingField(field.key().to_string()));
            }
        }
        for section in OutlineSection::ALL {
            if self.outline.get(section).trim().is_empty() {
                return Err(CoreError::MissingField(format!("outline.{}", section.key())));
            }
        }
        Ok(())
    }
}
