use deadpool_postgres::PoolError;
use serde_json::Value;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use super::seekers::parse_json_field;
use crate::api::job_request::CreateJobRequest;
use crate::db::PgPool;
use crate::{ExperienceLevel, JobPosting};

#[derive(Debug, thiserror::Error)]
pub enum JobStoreError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

fn job_from_row(row: &Row) -> JobPosting {
    JobPosting {
        id: Some(row.get("id")),
        title: row.get::<_, Option<String>>("title").unwrap_or_default(),
        skills: parse_json_field(row.get("skills")),
        experience_level: row
            .get::<_, Option<String>>("experience_level")
            .as_deref()
            .map(ExperienceLevel::parse)
            .unwrap_or_default(),
        job_type: row.get::<_, Option<String>>("job_type").unwrap_or_default(),
        location: row.get::<_, Option<String>>("location").unwrap_or_default(),
        is_active: row.get("is_active"),
    }
}

const JOB_COLUMNS: &str = "id, title, skills, experience_level, job_type, location, is_active";

#[instrument(skip(pool))]
pub async fn fetch_job_by_id(
    pool: &PgPool,
    job_id: i64,
) -> Result<Option<JobPosting>, JobStoreError> {
    let client = pool.get().await?;

    let query = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = $1");
    let row = client.query_opt(&query, &[&job_id]).await?;

    Ok(row.as_ref().map(job_from_row))
}

/// Active catalog in a deterministic order (newest first, id as tiebreak) so
/// ranked results stay stable across identical requests.
#[instrument(skip(pool))]
pub async fn fetch_active_jobs(pool: &PgPool) -> Result<Vec<JobPosting>, JobStoreError> {
    let client = pool.get().await?;

    let query =
        format!("SELECT {JOB_COLUMNS} FROM jobs WHERE is_active ORDER BY posted_at DESC, id DESC");
    let rows = client.query(&query, &[]).await?;

    Ok(rows.iter().map(job_from_row).collect())
}

/// Store a new posting and return it with its assigned id.
#[instrument(skip(pool, request))]
pub async fn insert_job(
    pool: &PgPool,
    request: &CreateJobRequest,
) -> Result<JobPosting, JobStoreError> {
    let client = pool.get().await?;

    let skills = serde_json::to_value(&request.skills).unwrap_or(Value::Null);
    let row = client
        .query_one(
            "INSERT INTO jobs (title, skills, experience_level, job_type, location, is_active, posted_at) \
             VALUES ($1, $2, $3, $4, $5, true, now()) \
             RETURNING id",
            &[
                &request.title,
                &skills,
                &request.experience_level.as_str(),
                &request.job_type,
                &request.location,
            ],
        )
        .await?;

    Ok(JobPosting {
        id: Some(row.get("id")),
        title: request.title.clone(),
        skills: request.skills.clone(),
        experience_level: request.experience_level,
        job_type: request.job_type.clone(),
        location: request.location.clone(),
        is_active: true,
    })
}
