pub mod reasons;
pub mod recommend;
pub mod scoring;
pub mod skills;
pub mod weights;

use chrono::{NaiveDate, Utc};

pub use reasons::{match_reasons, match_reasons_at};
pub use recommend::{
    find_matching_candidates, find_matching_jobs, CandidateRecommendation, JobRecommendation,
    RecommendError, RecommendationConfig, RecommendationEngine,
};
pub use scoring::{calculate_match_score, calculate_match_score_at, MatchScore};
pub use skills::{fuzzy_skill_match, skills_overlap, SkillsOverlap};

use crate::{JobPosting, SeekerProfile};

/// Ephemeral outcome of matching one seeker against one posting. Computed on
/// demand, never persisted by the engine itself.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    pub score: u8,
    pub reasons: Vec<String>,
    pub skills_match: Vec<String>,
    pub skills_gap: Vec<String>,
}

pub fn evaluate_match(profile: &SeekerProfile, job: &JobPosting) -> MatchResult {
    evaluate_match_at(profile, job, Utc::now().date_naive())
}

pub fn evaluate_match_at(profile: &SeekerProfile, job: &JobPosting, now: NaiveDate) -> MatchResult {
    let overlap = skills_overlap(&profile.skills, &job.skills);

    MatchResult {
        score: calculate_match_score_at(profile, job, now).total,
        reasons: match_reasons_at(profile, job, now),
        skills_match: overlap.matched,
        skills_gap: overlap.gap,
    }
}
