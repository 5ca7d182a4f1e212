use axum::{extract::State, http::StatusCode, Json};

use em_common::api::job_request::CreateJobRequest;
use em_common::db::insert_job;
use em_common::notify::notify_matching_seekers;
use em_common::JobPosting;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

/// POST /api/jobs: store a posting, then kick off job-alert fan-out off the
/// request path. Alerting is advisory: a large seeker pool must never delay
/// the creation response, and a fan-out failure never fails the request.
pub async fn create_job(
    State(state): State<SharedState>,
    _auth: AuthUser,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobPosting>), ApiError> {
    if request.title.trim().is_empty() {
        return Err(ApiError::BadRequest("job title is required".into()));
    }

    let job = insert_job(&state.pool, &request).await?;

    let pool = state.pool.clone();
    let notifier = state.notifier.clone();
    let threshold = state.engine.config().notify_threshold;
    let created = job.clone();
    tokio::spawn(async move {
        if let Err(err) = notify_matching_seekers(&pool, notifier.as_ref(), &created, threshold).await
        {
            tracing::error!(error = %err, "job alert fan-out failed");
        }
    });

    Ok((StatusCode::CREATED, Json(job)))
}
