use serde::{Deserialize, Serialize};

/// A claim/truth/advice triple with optional supporting citations, sourced
/// from the static local database. Read-only for the duration of a request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MythRecord {
    pub myth: String,
    pub truth: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advice: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
}

/// A credible source backing a myth record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    pub title: String,
    pub url: String,
}

impl Citation {
    /// Renders the citation as a markdown link.
    pub fn as_markdown(&self) -> String {
        format!("[{}]({})", self.title, self.url)
    }
}

/// Nutrition facts for one food. Field names mirror the caller-supplied data;
/// values are interpolated into the prompt, never validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionRecord {
    pub food: String,
    #[serde(rename = "Protein_g")]
    pub protein_g: f64,
    #[serde(rename = "Calories")]
    pub calories: f64,
}
