use deadpool_postgres::PoolError;
use serde_json::Value;
use tokio_postgres::{Error as PgError, Row};
use tracing::instrument;

use crate::db::PgPool;
use crate::SeekerProfile;

#[derive(Debug, thiserror::Error)]
pub enum SeekerStoreError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Lenient jsonb decode: malformed or missing documents fall back to the
/// type's defaults instead of failing the whole request.
pub(crate) fn parse_json_field<T>(value: Option<Value>) -> T
where
    T: serde::de::DeserializeOwned + Default,
{
    value
        .and_then(|v| serde_json::from_value(v).ok())
        .unwrap_or_default()
}

fn seeker_from_row(row: &Row) -> SeekerProfile {
    SeekerProfile {
        id: Some(row.get("id")),
        skills: parse_json_field(row.get("skills")),
        education: parse_json_field(row.get("education")),
        work_experience: parse_json_field(row.get("work_experience")),
        job_preferences: parse_json_field(row.get("job_preferences")),
    }
}

const SEEKER_COLUMNS: &str = "id, skills, education, work_experience, job_preferences";

/// Look up one profile. Accounts whose role is not `seeker` are treated the
/// same as missing rows.
#[instrument(skip(pool))]
pub async fn fetch_seeker_by_id(
    pool: &PgPool,
    seeker_id: i64,
) -> Result<Option<SeekerProfile>, SeekerStoreError> {
    let client = pool.get().await?;

    let query =
        format!("SELECT {SEEKER_COLUMNS} FROM seekers WHERE id = $1 AND role = 'seeker'");
    let row = client.query_opt(&query, &[&seeker_id]).await?;

    Ok(row.as_ref().map(seeker_from_row))
}

/// Candidate set for employer views and job-alert fan-out.
#[instrument(skip(pool))]
pub async fn fetch_active_seekers(pool: &PgPool) -> Result<Vec<SeekerProfile>, SeekerStoreError> {
    let client = pool.get().await?;

    let query = format!(
        "SELECT {SEEKER_COLUMNS} FROM seekers WHERE role = 'seeker' AND is_active ORDER BY id"
    );
    let rows = client.query(&query, &[]).await?;

    Ok(rows.iter().map(seeker_from_row).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Education, JobPreferences};
    use serde_json::json;

    #[test]
    fn parse_json_field_reads_wellformed_documents() {
        let education: Vec<Education> = parse_json_field(Some(json!([
            {"degree": "Bachelor of Science", "field_of_study": "Computer Science"}
        ])));

        assert_eq!(education.len(), 1);
        assert_eq!(education[0].degree, "Bachelor of Science");
    }

    #[test]
    fn parse_json_field_defaults_on_missing_or_malformed() {
        let missing: Vec<String> = parse_json_field(None);
        assert!(missing.is_empty());

        let wrong_shape: JobPreferences = parse_json_field(Some(json!("not an object")));
        assert_eq!(wrong_shape, JobPreferences::default());

        let null: Vec<String> = parse_json_field(Some(Value::Null));
        assert!(null.is_empty());
    }
}
