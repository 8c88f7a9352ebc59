use crate::models::lesson_plan::LessonPlan;
use crate::models::outline::LessonOutline;

impl LessonPlan {
    /// The built-in example draft a new form starts from.
    pub fn sample() -> Self {
        Self {
            topic: "Photosynthesis: Nature's Solar Power".to_string(),
            grade_level: "6th Grade".to_string(),
            main_concept: "Understanding how plants convert sunlight into energy through photosynthesis"
                .to_string(),
            sub_topics: to_strings(&[
                "Light energy and chlorophyll",
                "Carbon dioxide and water as reactants",
                "Glucose and oxygen as products",
                "The role of chloroplasts",
            ]),
            materials: to_strings(&[
                "Live plants",
                "Microscope",
                "Plant cell diagrams",
                "Colored pencils",
                "Photosynthesis simulation software",
            ]),
            objectives: to_strings(&[
                "Explain the basic process of photosynthesis",
                "Identify the key components needed for photosynthesis",
                "Draw and label the parts of a chloroplast",
                "Describe how plants store and use energy",
            ]),
            outline: LessonOutline {
                introduction: "Begin with a demonstration using a live plant and asking students how they \
                    think plants get their food. Connect this to their prior knowledge about energy and \
                    living things."
                    .to_string(),
                development: "Use interactive diagrams and models to explain the photosynthesis process. \
                    Guide students through the reactants and products using molecular models. Demonstrate \
                    the role of chloroplasts using microscope observations."
                    .to_string(),
                practice: "Students will work in groups to create their own photosynthesis models, label \
                    diagrams, and run simple experiments with plants in different light conditions."
                    .to_string(),
                assessment: "Students will complete a concept map showing the relationships between \
                    sunlight, chlorophyll, water, carbon dioxide, glucose, and oxygen in photosynthesis."
                    .to_string(),
                closure: "Review key concepts through a quick quiz game. Students share one new thing they \
                    learned about how plants make their own food."
                    .to_string(),
            },
            ..Self::new()
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
