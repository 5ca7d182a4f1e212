use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use em_common::api::recommendation_response::{
    MatchCheckResponse, MatchLevel, RecommendationsResponse,
};
use em_common::db::{fetch_job_by_id, fetch_seeker_by_id};
use em_common::matching::{evaluate_match, find_matching_jobs};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize)]
pub struct RecommendationsQuery {
    pub limit: Option<usize>,
    /// Explicit seeker, for API-key clients acting on a seeker's behalf.
    /// JWT clients default to their own subject.
    pub seeker_id: Option<i64>,
}

fn resolve_seeker_id(auth: &AuthUser, explicit: Option<i64>) -> Result<i64, ApiError> {
    match explicit {
        Some(id) => Ok(id),
        None => auth.seeker_id(),
    }
}

/// GET /api/recommendations/jobs
pub async fn recommended_jobs(
    State(state): State<SharedState>,
    auth: AuthUser,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<RecommendationsResponse>, ApiError> {
    let seeker_id = resolve_seeker_id(&auth, query.seeker_id)?;

    let ranked = find_matching_jobs(&state.pool, &state.engine, seeker_id, query.limit).await?;

    Ok(Json(RecommendationsResponse::from_ranked(ranked)))
}

/// GET /api/jobs/:id/match: how well one posting fits the caller.
pub async fn job_match(
    State(state): State<SharedState>,
    Path(job_id): Path<i64>,
    auth: AuthUser,
    Query(query): Query<RecommendationsQuery>,
) -> Result<Json<MatchCheckResponse>, ApiError> {
    let seeker_id = resolve_seeker_id(&auth, query.seeker_id)?;

    let job = fetch_job_by_id(&state.pool, job_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("job {job_id} not found")))?;

    let profile = fetch_seeker_by_id(&state.pool, seeker_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("seeker {seeker_id} not found")))?;

    let outcome = evaluate_match(&profile, &job);

    Ok(Json(MatchCheckResponse {
        score: outcome.score,
        reasons: outcome.reasons,
        match_level: MatchLevel::from_score(outcome.score),
    }))
}
