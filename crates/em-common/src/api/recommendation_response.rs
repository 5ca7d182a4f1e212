use serde::{Deserialize, Serialize};

use crate::matching::recommend::{CandidateRecommendation, JobRecommendation};
use crate::JobPosting;

/// Payload for `GET /api/recommendations/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub success: bool,
    pub recommendations: Vec<RecommendedJob>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendedJob {
    pub job: JobPosting,
    pub score: u8,
    pub reasons: Vec<String>,
}

impl From<JobRecommendation> for RecommendedJob {
    fn from(value: JobRecommendation) -> Self {
        Self {
            job: value.job,
            score: value.score,
            reasons: value.reasons,
        }
    }
}

impl RecommendationsResponse {
    pub fn from_ranked(ranked: Vec<JobRecommendation>) -> Self {
        let recommendations: Vec<_> = ranked.into_iter().map(RecommendedJob::from).collect();
        Self {
            success: true,
            count: recommendations.len(),
            recommendations,
        }
    }
}

/// Payload for `GET /api/jobs/:id/match`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchCheckResponse {
    pub score: u8,
    pub reasons: Vec<String>,
    pub match_level: MatchLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchLevel {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl MatchLevel {
    /// Bucket a 0-100 score for display.
    pub fn from_score(score: u8) -> Self {
        match score {
            80.. => Self::Excellent,
            60.. => Self::Good,
            40.. => Self::Fair,
            _ => Self::Poor,
        }
    }
}

/// Payload for `GET /api/jobs/:id/candidates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidatesResponse {
    pub success: bool,
    pub candidates: Vec<RankedCandidate>,
    pub count: usize,
}

/// Employer view of one ranked candidate. Exposes the profile id only;
/// contact details stay behind the profile service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedCandidate {
    pub seeker_id: Option<i64>,
    pub score: u8,
    pub reasons: Vec<String>,
}

impl From<CandidateRecommendation> for RankedCandidate {
    fn from(value: CandidateRecommendation) -> Self {
        Self {
            seeker_id: value.seeker.id,
            score: value.score,
            reasons: value.reasons,
        }
    }
}

impl CandidatesResponse {
    pub fn from_ranked(ranked: Vec<CandidateRecommendation>) -> Self {
        let candidates: Vec<_> = ranked.into_iter().map(RankedCandidate::from).collect();
        Self {
            success: true,
            count: candidates.len(),
            candidates,
        }
    }
}
