pub mod api;
pub mod db;
pub mod logging;
pub mod matching;
pub mod notify;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Commonly used data models shared by the matching engine and the API layer.

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeekerProfile {
    pub id: Option<i64>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub job_preferences: JobPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field_of_study: String,
}

/// One employment span. Entries with `current = true` carry no end date and
/// are measured against "now" at scoring time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub current: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobPreferences {
    #[serde(default)]
    pub job_types: Vec<String>,
    #[serde(default)]
    pub work_locations: Vec<String>,
    #[serde(default)]
    pub remote_preference: Option<RemotePreference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemotePreference {
    Remote,
    Onsite,
    Hybrid,
    Flexible,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Entry,
    #[default]
    Mid,
    Senior,
}

impl ExperienceLevel {
    /// Unknown or missing levels fall back to mid, the catalog default.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "entry" => Self::Entry,
            "senior" => Self::Senior,
            _ => Self::Mid,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Mid => "mid",
            Self::Senior => "senior",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    /// Work mode or contract kind as published by the employer. Free-form;
    /// compared literally against seeker job-type preferences.
    #[serde(rename = "type", default)]
    pub job_type: String,
    #[serde(default)]
    pub location: String,
    pub is_active: bool,
}

impl Default for JobPosting {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            skills: Vec::new(),
            experience_level: ExperienceLevel::default(),
            job_type: String::new(),
            location: String::new(),
            is_active: true,
        }
    }
}
