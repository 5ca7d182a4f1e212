use chrono::Utc;
use tracing::{info, instrument, warn};

use super::{JobAlert, Notifier};
use crate::db::{seekers::fetch_active_seekers, PgPool, SeekerStoreError};
use crate::matching::evaluate_match_at;
use crate::{JobPosting, SeekerProfile};

/// Outcome counters for one fan-out batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanoutReport {
    pub evaluated: usize,
    pub notified: usize,
    pub below_threshold: usize,
    pub failed: usize,
}

/// Score every active seeker against a freshly created posting and alert the
/// ones at or above `threshold`.
#[instrument(skip(pool, notifier, job))]
pub async fn notify_matching_seekers(
    pool: &PgPool,
    notifier: &dyn Notifier,
    job: &JobPosting,
    threshold: u8,
) -> Result<FanoutReport, SeekerStoreError> {
    let seekers = fetch_active_seekers(pool).await?;
    Ok(fan_out_job_alerts(notifier, job, &seekers, threshold).await)
}

/// Candidates are processed independently: a failed delivery is logged and
/// skipped so one bad address never stalls the batch.
pub async fn fan_out_job_alerts(
    notifier: &dyn Notifier,
    job: &JobPosting,
    seekers: &[SeekerProfile],
    threshold: u8,
) -> FanoutReport {
    let Some(job_id) = job.id else {
        warn!("job alert fan-out skipped: posting has no id");
        return FanoutReport::default();
    };

    let now = Utc::now().date_naive();
    let mut report = FanoutReport::default();

    for seeker in seekers {
        let Some(seeker_id) = seeker.id else {
            continue;
        };
        report.evaluated += 1;

        let outcome = evaluate_match_at(seeker, job, now);
        if outcome.score < threshold {
            report.below_threshold += 1;
            continue;
        }

        let alert = JobAlert {
            seeker_id,
            job_id,
            job_title: job.title.clone(),
            score: outcome.score,
            reasons: outcome.reasons,
            skills_match: outcome.skills_match,
            skills_gap: outcome.skills_gap,
        };

        match notifier.send(alert).await {
            Ok(()) => report.notified += 1,
            Err(err) => {
                report.failed += 1;
                warn!(seeker_id, error = %err, "job alert delivery failed");
            }
        }
    }

    info!(
        evaluated = report.evaluated,
        notified = report.notified,
        below_threshold = report.below_threshold,
        failed = report.failed,
        "job alert fan-out complete"
    );

    report
}
