use chrono::{NaiveDate, Utc};

use super::scoring::total_experience_years;
use super::skills::skills_overlap;
use crate::{ExperienceLevel, JobPosting, SeekerProfile};

/// Study fields the explainer surfaces. Narrower than the scoring tier on
/// purpose: reasons only call out the strongest signals.
const REASON_FIELD_KEYWORDS: [&str; 2] = ["computer", "technology"];

/// Human-readable reasons why a posting matched, ordered
/// skills, experience, education, location. Advisory only; derived from the
/// same inputs as the score but never fed back into it.
pub fn match_reasons(profile: &SeekerProfile, job: &JobPosting) -> Vec<String> {
    match_reasons_at(profile, job, Utc::now().date_naive())
}

pub fn match_reasons_at(profile: &SeekerProfile, job: &JobPosting, now: NaiveDate) -> Vec<String> {
    let mut reasons = Vec::new();

    let overlap = skills_overlap(&profile.skills, &job.skills);
    if !overlap.matched.is_empty() {
        reasons.push(format!(
            "Matches {} required skills: {}",
            overlap.matched.len(),
            overlap.matched.join(", ")
        ));
    }

    if let Some(message) = experience_reason(profile, job.experience_level, now) {
        reasons.push(message.to_string());
    }

    if has_relevant_education(profile) {
        reasons.push("You have a relevant educational background".to_string());
    }

    if matches_preferred_location(profile, job) {
        reasons.push("This job matches your preferred work location".to_string());
    }

    reasons
}

/// One fixed sentence per good-match tier of the experience rule table.
/// Seekers with no recorded history never land in a tier.
fn experience_reason(
    profile: &SeekerProfile,
    level: ExperienceLevel,
    now: NaiveDate,
) -> Option<&'static str> {
    if profile.work_experience.is_empty() {
        return None;
    }

    let years = total_experience_years(&profile.work_experience, now);

    match level {
        ExperienceLevel::Entry if years <= 2.0 => {
            Some("Your experience level fits this entry-level role")
        }
        ExperienceLevel::Mid if (2.0..=5.0).contains(&years) => {
            Some("Your experience is a strong fit for this mid-level role")
        }
        ExperienceLevel::Senior if years >= 5.0 => {
            Some("Your years of experience qualify you for this senior role")
        }
        _ => None,
    }
}

fn has_relevant_education(profile: &SeekerProfile) -> bool {
    profile.education.iter().any(|entry| {
        let field = entry.field_of_study.to_lowercase();

        REASON_FIELD_KEYWORDS.iter().any(|kw| field.contains(kw))
            || entry.degree.to_lowercase().contains("bachelor")
    })
}

fn matches_preferred_location(profile: &SeekerProfile, job: &JobPosting) -> bool {
    let preferred = &profile.job_preferences.work_locations;
    if preferred.is_empty() {
        return false;
    }

    let location = job.location.to_lowercase();
    preferred
        .iter()
        .any(|wanted| location.contains(&wanted.to_lowercase()))
}
