use chrono::Utc;
use tracing::instrument;

use super::reasons::match_reasons_at;
use super::scoring::calculate_match_score_at;
use crate::db::{
    jobs::{fetch_active_jobs, fetch_job_by_id, JobStoreError},
    seekers::{fetch_active_seekers, fetch_seeker_by_id, SeekerStoreError},
    PgPool,
};
use crate::{JobPosting, SeekerProfile};

/// Runtime knobs for the recommendation engine.
#[derive(Debug, Clone)]
pub struct RecommendationConfig {
    /// Result count when the caller does not ask for one.
    pub default_limit: usize,
    /// Upper bound on caller-supplied limits.
    pub max_limit: usize,
    /// Minimum score for job-alert fan-out.
    pub notify_threshold: u8,
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            default_limit: 10,
            max_limit: 100,
            notify_threshold: 60,
        }
    }
}

impl RecommendationConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            default_limit: env_parsed("EM_DEFAULT_LIMIT")
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.default_limit),
            max_limit: env_parsed("EM_MAX_LIMIT")
                .filter(|limit| *limit > 0)
                .unwrap_or(defaults.max_limit),
            notify_threshold: env_parsed("EM_NOTIFY_THRESHOLD")
                .unwrap_or(defaults.notify_threshold),
        }
    }
}

fn env_parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|value| value.parse().ok())
}

/// One ranked posting for a seeker.
#[derive(Debug, Clone, PartialEq)]
pub struct JobRecommendation {
    pub job: JobPosting,
    pub score: u8,
    pub reasons: Vec<String>,
}

/// One ranked seeker for a posting (employer "top candidates" view).
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRecommendation {
    pub seeker: SeekerProfile,
    pub score: u8,
    pub reasons: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error(transparent)]
    Seekers(#[from] SeekerStoreError),
    #[error(transparent)]
    Jobs(#[from] JobStoreError),
}

pub struct RecommendationEngine {
    config: RecommendationConfig,
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new(RecommendationConfig::default())
    }
}

impl RecommendationEngine {
    pub fn new(config: RecommendationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecommendationConfig {
        &self.config
    }

    /// Score every active posting for one seeker, drop zero scores, sort
    /// descending and truncate. The sort is stable, so equal scores keep the
    /// fetch order and results stay deterministic.
    pub fn rank_jobs(
        &self,
        profile: &SeekerProfile,
        jobs: &[JobPosting],
        limit: Option<usize>,
    ) -> Vec<JobRecommendation> {
        let now = Utc::now().date_naive();

        let mut ranked: Vec<JobRecommendation> = jobs
            .iter()
            .filter(|job| job.is_active)
            .map(|job| JobRecommendation {
                job: job.clone(),
                score: calculate_match_score_at(profile, job, now).total,
                reasons: match_reasons_at(profile, job, now),
            })
            .filter(|rec| rec.score > 0)
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.clamp_limit(limit));
        ranked
    }

    /// Mirror of [`rank_jobs`]: rank seekers against one posting.
    pub fn rank_candidates(
        &self,
        job: &JobPosting,
        seekers: &[SeekerProfile],
        limit: Option<usize>,
    ) -> Vec<CandidateRecommendation> {
        let now = Utc::now().date_naive();

        let mut ranked: Vec<CandidateRecommendation> = seekers
            .iter()
            .map(|seeker| CandidateRecommendation {
                seeker: seeker.clone(),
                score: calculate_match_score_at(seeker, job, now).total,
                reasons: match_reasons_at(seeker, job, now),
            })
            .filter(|rec| rec.score > 0)
            .collect();

        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked.truncate(self.clamp_limit(limit));
        ranked
    }

    fn clamp_limit(&self, limit: Option<usize>) -> usize {
        limit
            .unwrap_or(self.config.default_limit)
            .clamp(1, self.config.max_limit)
    }
}

/// Ranked postings for one seeker. A missing seeker, or an account that is
/// not a seeker, yields an empty list; only an unreachable store is an error.
/// Recommendations are advisory and must never block a page.
#[instrument(skip(pool, engine))]
pub async fn find_matching_jobs(
    pool: &PgPool,
    engine: &RecommendationEngine,
    seeker_id: i64,
    limit: Option<usize>,
) -> Result<Vec<JobRecommendation>, RecommendError> {
    let Some(profile) = fetch_seeker_by_id(pool, seeker_id).await? else {
        return Ok(Vec::new());
    };

    let jobs = fetch_active_jobs(pool).await?;
    Ok(engine.rank_jobs(&profile, &jobs, limit))
}

/// Ranked seekers for one posting. Missing or inactive postings yield an
/// empty list, mirroring [`find_matching_jobs`].
#[instrument(skip(pool, engine))]
pub async fn find_matching_candidates(
    pool: &PgPool,
    engine: &RecommendationEngine,
    job_id: i64,
    limit: Option<usize>,
) -> Result<Vec<CandidateRecommendation>, RecommendError> {
    let Some(job) = fetch_job_by_id(pool, job_id).await? else {
        return Ok(Vec::new());
    };

    if !job.is_active {
        return Ok(Vec::new());
    }

    let seekers = fetch_active_seekers(pool).await?;
    Ok(engine.rank_candidates(&job, &seekers, limit))
}
