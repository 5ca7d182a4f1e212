use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use em_common::api::recommendation_response::CandidatesResponse;
use em_common::matching::find_matching_candidates;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize)]
pub struct CandidatesQuery {
    pub limit: Option<usize>,
}

/// GET /api/jobs/:id/candidates: employer "top candidates" view. Unknown or
/// closed postings produce an empty list rather than an error.
pub async fn list_candidates(
    State(state): State<SharedState>,
    Path(job_id): Path<i64>,
    _auth: AuthUser,
    Query(query): Query<CandidatesQuery>,
) -> Result<Json<CandidatesResponse>, ApiError> {
    let ranked = find_matching_candidates(&state.pool, &state.engine, job_id, query.limit).await?;

    Ok(Json(CandidatesResponse::from_ranked(ranked)))
}
