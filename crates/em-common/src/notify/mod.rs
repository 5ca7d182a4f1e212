pub mod fanout;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

pub use fanout::{fan_out_job_alerts, notify_matching_seekers, FanoutReport};

/// Alert sent to a seeker when a new posting scores at or above the
/// notification threshold.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobAlert {
    pub seeker_id: i64,
    pub job_id: i64,
    pub job_title: String,
    pub score: u8,
    pub reasons: Vec<String>,
    pub skills_match: Vec<String>,
    pub skills_gap: Vec<String>,
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification delivery failed: {0}")]
    Delivery(String),
}

/// Delivery capability injected into the fan-out. Email, in-app and push
/// transports all live behind this seam; the engine never reaches for a
/// global delivery handle.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, alert: JobAlert) -> Result<(), NotifyError>;
}

/// Default transport: writes alerts to the service log. Stands in for the
/// external delivery collaborator in development.
#[derive(Debug, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, alert: JobAlert) -> Result<(), NotifyError> {
        info!(
            seeker_id = alert.seeker_id,
            job_id = alert.job_id,
            score = alert.score,
            matched = alert.skills_match.len(),
            missing = alert.skills_gap.len(),
            "job alert"
        );
        Ok(())
    }
}
