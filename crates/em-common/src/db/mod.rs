pub mod jobs;
pub mod pool;
pub mod seekers;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use jobs::{fetch_active_jobs, fetch_job_by_id, insert_job, JobStoreError};
pub use pool::{create_pool_from_url, create_pool_from_url_checked, DbPoolError, PgPool};
pub use seekers::{fetch_active_seekers, fetch_seeker_by_id, SeekerStoreError};
