use serde::{Deserialize, Serialize};

use crate::ExperienceLevel;

/// Employer-facing payload for creating a posting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateJobRequest {
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_payload_fills_defaults() {
        let request: CreateJobRequest =
            serde_json::from_value(serde_json::json!({ "title": "Data Analyst" })).unwrap();

        assert_eq!(request.title, "Data Analyst");
        assert!(request.skills.is_empty());
        assert_eq!(request.experience_level, ExperienceLevel::Mid);
        assert_eq!(request.job_type, "");
    }
}
