// Position definitions: skill vocabularies, interview questions, experience thresholds.
// The JSON store lives in `store`; the scoring engine only ever sees a `&PositionConfig`.

pub mod handlers;
pub mod store;

use serde::{Deserialize, Serialize};

pub use store::PositionStore;

/// An interview question and the keywords a good answer should cover.
///
/// Serialized as a two-element array `["question", ["kw1", "kw2"]]` to stay
/// compatible with existing positions files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Vec<String>)", into = "(String, Vec<String>)")]
pub struct Question {
    pub prompt: String,
    pub keywords: Vec<String>,
}

impl Question {
    pub fn new(prompt: &str, keywords: &[&str]) -> Self {
        Self {
            prompt: prompt.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl From<(String, Vec<String>)> for Question {
    fn from((prompt, keywords): (String, Vec<String>)) -> Self {
        Self { prompt, keywords }
    }
}

impl From<Question> for (String, Vec<String>) {
    fn from(q: Question) -> Self {
        (q.prompt, q.keywords)
    }
}

/// Requirements for a single job role.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionConfig {
    #[serde(alias = "requiredSkills")]
    pub required_skills: Vec<String>,
    #[serde(default, alias = "preferredSkills")]
    pub preferred_skills: Vec<String>,
    #[serde(default)]
    pub technical: Vec<Question>,
    #[serde(default)]
    pub behavioral: Vec<Question>,
    #[serde(default, alias = "experienceThreshold")]
    pub experience_threshold: u32,
}

impl PositionConfig {
    /// Admin-level validation applied before a position is stored.
    /// Returns every problem found, empty when the definition is acceptable.
    pub fn validate(&self, name: &str) -> Vec<String> {
        let mut errors = Vec::new();

        if name.trim().is_empty() {
            errors.push("Position name is required".to_string());
        }
        if self.required_skills.is_empty() {
            errors.push("Required skills are mandatory".to_string());
        }
        if let Some(blank) = self.blank_skill_list() {
            errors.push(format!("{blank} contain an empty entry"));
        }
        if self.technical.is_empty() {
            errors.push("Technical questions required".to_string());
        }
        if self.behavioral.is_empty() {
            errors.push("Behavioral questions required".to_string());
        }

        errors
    }

    /// Names the first skill list holding a blank entry, if any.
    /// A blank term would turn the vocabulary pattern into one that matches everywhere.
    pub fn blank_skill_list(&self) -> Option<&'static str> {
        let has_blank = |skills: &[String]| skills.iter().any(|s| s.trim().is_empty());

        if has_blank(&self.required_skills) {
            Some("Required skills")
        } else if has_blank(&self.preferred_skills) {
            Some("Preferred skills")
        } else {
            None
        }
    }

    /// Technical questions followed by behavioral ones.
    pub fn all_questions(&self) -> impl Iterator<Item = &Question> {
        self.technical.iter().chain(self.behavioral.iter())
    }
}

fn skills(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Positions written to a fresh positions file.
pub fn default_positions() -> Vec<(String, PositionConfig)> {
    vec![
        (
            "Data Scientist".to_string(),
            PositionConfig {
                required_skills: skills(&[
                    "Python",
                    "SQL",
                    "Machine Learning",
                    "Statistics",
                    "Data Visualization",
                ]),
                preferred_skills: skills(&["TensorFlow", "PyTorch", "Big Data", "Cloud Computing"]),
                technical: vec![
                    Question::new(
                        "Explain bias-variance tradeoff",
                        &["bias", "variance", "overfitting"],
                    ),
                    Question::new(
                        "Handle missing data techniques",
                        &["imputation", "deletion", "modeling"],
                    ),
                    Question::new(
                        "Cross-validation methods",
                        &["k-fold", "stratified", "time-series"],
                    ),
                ],
                behavioral: vec![
                    Question::new(
                        "Describe complex data analysis project",
                        &["process", "tools", "results"],
                    ),
                    Question::new(
                        "Stay updated with DS trends",
                        &["courses", "research", "experiments"],
                    ),
                    Question::new(
                        "Handle tight deadlines",
                        &["prioritization", "communication", "tools"],
                    ),
                ],
                experience_threshold: 2,
            },
        ),
        (
            "Software Engineer".to_string(),
            PositionConfig {
                required_skills: skills(&[
                    "Java",
                    "Python",
                    "System Design",
                    "Algorithms",
                    "Databases",
                ]),
                preferred_skills: skills(&["Microservices", "AWS", "Docker", "Kubernetes"]),
                technical: vec![
                    Question::new(
                        "SOLID principles explanation",
                        &["single responsibility", "open-closed", "interface"],
                    ),
                    Question::new(
                        "Database optimization strategies",
                        &["indexing", "normalization", "sharding"],
                    ),
                    Question::new(
                        "REST API best practices",
                        &["stateless", "versioning", "documentation"],
                    ),
                    Question::new(
                        "Debugging complex systems",
                        &["logging", "testing", "monitoring"],
                    ),
                ],
                behavioral: vec![
                    Question::new(
                        "Handle conflicting requirements",
                        &["communication", "prioritization", "documentation"],
                    ),
                    Question::new(
                        "Code review process",
                        &["checklist", "automation", "feedback"],
                    ),
                    Question::new(
                        "Manage technical debt",
                        &["refactoring", "documentation", "tooling"],
                    ),
                ],
                experience_threshold: 3,
            },
        ),
    ]
}
