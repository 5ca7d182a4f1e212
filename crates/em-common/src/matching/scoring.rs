use chrono::{NaiveDate, Utc};

use super::skills::skills_overlap;
use super::weights::MATCH_WEIGHTS;
use crate::{ExperienceLevel, JobPosting, RemotePreference, SeekerProfile, WorkExperience};

/// Study fields and degrees the scorer treats as relevant to the catalog.
const RELEVANT_FIELD_KEYWORDS: [&str; 4] = ["computer", "technology", "business", "engineering"];
const RELEVANT_DEGREE_KEYWORDS: [&str; 2] = ["bachelor", "master"];

/// Final score plus the four sub-scores it was combined from. Sub-scores are
/// kept for explanations and dashboards; only `total` is contractual.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchScore {
    pub total: u8,
    pub skills: f64,
    pub education: f64,
    pub experience: f64,
    pub preferences: f64,
}

/// Score one seeker against one posting on a 0-100 scale.
pub fn calculate_match_score(profile: &SeekerProfile, job: &JobPosting) -> MatchScore {
    calculate_match_score_at(profile, job, Utc::now().date_naive())
}

/// Deterministic variant of [`calculate_match_score`]; `now` anchors
/// open-ended work history entries.
pub fn calculate_match_score_at(
    profile: &SeekerProfile,
    job: &JobPosting,
    now: NaiveDate,
) -> MatchScore {
    let skills = score_skills(profile, job);
    let education = score_education(profile);
    let experience = score_experience(profile, job.experience_level, now);
    let preferences = score_preferences(profile, job);

    let weighted = skills * MATCH_WEIGHTS.skills
        + education * MATCH_WEIGHTS.education
        + experience * MATCH_WEIGHTS.experience
        + preferences * MATCH_WEIGHTS.preferences;

    // Round half away from zero. The weights sum to 1.0, so the cap only
    // guards against rounding pushing past 100.
    let total = weighted.round().min(100.0) as u8;

    MatchScore {
        total,
        skills,
        education,
        experience,
        preferences,
    }
}

/// Share of required skills the profile covers, or neutral 50 when the
/// posting lists no requirements.
fn score_skills(profile: &SeekerProfile, job: &JobPosting) -> f64 {
    let overlap = skills_overlap(&profile.skills, &job.skills);
    let required = overlap.required();
    if required == 0 {
        return 50.0;
    }

    overlap.matched.len() as f64 / required as f64 * 100.0
}

fn score_education(profile: &SeekerProfile) -> f64 {
    if profile.education.is_empty() {
        return 30.0;
    }

    let relevant = profile.education.iter().any(|entry| {
        let field = entry.field_of_study.to_lowercase();
        let degree = entry.degree.to_lowercase();

        RELEVANT_FIELD_KEYWORDS
            .iter()
            .any(|kw| field.contains(kw) || degree.contains(kw))
            || RELEVANT_DEGREE_KEYWORDS.iter().any(|kw| degree.contains(kw))
    });

    if relevant {
        80.0
    } else {
        40.0
    }
}

/// Total professional years across the work history, anchored at `now` for
/// current positions. Negative spans count as zero; the sum is kept to one
/// decimal place.
pub fn total_experience_years(entries: &[WorkExperience], now: NaiveDate) -> f64 {
    let days: f64 = entries
        .iter()
        .filter_map(|entry| {
            let start = entry.start_date?;
            let end = if entry.current { now } else { entry.end_date? };
            Some(((end - start).num_days() as f64).max(0.0))
        })
        .sum();

    (days / 365.25 * 10.0).round() / 10.0
}

fn score_experience(profile: &SeekerProfile, level: ExperienceLevel, now: NaiveDate) -> f64 {
    if profile.work_experience.is_empty() {
        return 20.0;
    }

    let years = total_experience_years(&profile.work_experience, now);

    // Ordered rule table; the first matching arm wins.
    match level {
        ExperienceLevel::Entry if years <= 2.0 => 90.0,
        ExperienceLevel::Mid if (2.0..=5.0).contains(&years) => 90.0,
        ExperienceLevel::Senior if years >= 5.0 => 90.0,
        ExperienceLevel::Entry => 70.0,
        ExperienceLevel::Mid if years < 2.0 => 60.0,
        ExperienceLevel::Senior => 50.0,
        ExperienceLevel::Mid => 40.0,
    }
}

/// Base 50 with independent adjustments for job type, preferred locations and
/// remote compatibility, clamped to [0, 100].
fn score_preferences(profile: &SeekerProfile, job: &JobPosting) -> f64 {
    let prefs = &profile.job_preferences;
    let mut score: f64 = 50.0;

    if !prefs.job_types.is_empty() {
        if prefs.job_types.iter().any(|wanted| wanted == &job.job_type) {
            score += 20.0;
        } else {
            score -= 10.0;
        }
    }

    if !prefs.work_locations.is_empty() {
        let location = job.location.to_lowercase();
        let nearby = prefs
            .work_locations
            .iter()
            .any(|preferred| location.contains(&preferred.to_lowercase()));

        score += if nearby { 15.0 } else { -5.0 };
    }

    if let Some(preference) = prefs.remote_preference {
        let compatible = remote_compatible(preference, &job.job_type);
        score += if compatible { 15.0 } else { -5.0 };
    }

    score.clamp(0.0, 100.0)
}

/// Compatibility of a seeker's remote preference with a posting's work mode.
/// Hybrid seekers also accept fully remote roles; unrecognized posting modes
/// only satisfy flexible seekers.
fn remote_compatible(preference: RemotePreference, job_type: &str) -> bool {
    let mode = job_type.trim().to_lowercase();

    match preference {
        RemotePreference::Flexible => true,
        RemotePreference::Remote => mode == "remote",
        RemotePreference::Onsite => mode == "onsite",
        RemotePreference::Hybrid => mode == "hybrid" || mode == "remote",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Education, JobPreferences};

    fn anchor() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
    }

    fn experience_span(start: (i32, u32, u32), end: Option<(i32, u32, u32)>) -> WorkExperience {
        WorkExperience {
            start_date: NaiveDate::from_ymd_opt(start.0, start.1, start.2),
            end_date: end.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            current: end.is_none(),
        }
    }

    fn profile_with_years(years: i32) -> SeekerProfile {
        SeekerProfile {
            work_experience: vec![experience_span((2026 - years, 1, 1), Some((2026, 1, 1)))],
            ..SeekerProfile::default()
        }
    }

    fn strong_profile() -> SeekerProfile {
        SeekerProfile {
            skills: vec!["JavaScript".into(), "React".into(), "Node.js".into()],
            education: vec![Education {
                degree: "Bachelor of Science".into(),
                field_of_study: "Computer Science".into(),
            }],
            work_experience: vec![experience_span((2022, 1, 1), Some((2025, 1, 1)))],
            job_preferences: JobPreferences {
                job_types: vec!["remote".into()],
                work_locations: vec!["Kigali".into()],
                remote_preference: Some(RemotePreference::Remote),
            },
            ..SeekerProfile::default()
        }
    }

    fn base_job() -> JobPosting {
        JobPosting {
            title: "Frontend Developer".into(),
            skills: vec!["JavaScript".into(), "React".into()],
            experience_level: ExperienceLevel::Mid,
            job_type: "remote".into(),
            location: "Kigali, Rwanda".into(),
            ..JobPosting::default()
        }
    }

    #[test]
    fn strong_profile_scores_high() {
        let score = calculate_match_score_at(&strong_profile(), &base_job(), anchor());

        // skills 100, education 80, experience 90 (3y vs mid), preferences 100
        assert_eq!(score.skills, 100.0);
        assert_eq!(score.education, 80.0);
        assert_eq!(score.experience, 90.0);
        assert_eq!(score.preferences, 100.0);
        assert_eq!(score.total, 94);
    }

    #[test]
    fn partial_skill_overlap_matches_documented_example() {
        let profile = SeekerProfile {
            skills: vec!["javascript".into(), "react".into()],
            ..SeekerProfile::default()
        };
        let job = JobPosting {
            skills: vec!["JavaScript".into(), "Node.js".into()],
            ..JobPosting::default()
        };

        let score = calculate_match_score_at(&profile, &job, anchor());

        // 50*0.4 + 30*0.2 + 20*0.25 + 50*0.15 = 38.5, rounded half-up.
        assert_eq!(score.skills, 50.0);
        assert_eq!(score.education, 30.0);
        assert_eq!(score.experience, 20.0);
        assert_eq!(score.preferences, 50.0);
        assert_eq!(score.total, 39);
    }

    #[test]
    fn empty_requirements_are_neutral_regardless_of_profile() {
        let job = JobPosting {
            skills: vec![],
            experience_level: ExperienceLevel::Entry,
            ..JobPosting::default()
        };

        for profile in [SeekerProfile::default(), strong_profile()] {
            let score = calculate_match_score_at(&profile, &job, anchor());
            assert_eq!(score.skills, 50.0);
        }
    }

    #[test]
    fn degenerate_inputs_score_thirty_nine() {
        let score =
            calculate_match_score_at(&SeekerProfile::default(), &JobPosting::default(), anchor());
        assert_eq!(score.total, 39);
    }

    #[test]
    fn empty_work_history_short_circuits_for_every_level() {
        for level in [
            ExperienceLevel::Entry,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
        ] {
            let job = JobPosting {
                experience_level: level,
                ..JobPosting::default()
            };
            let score = calculate_match_score_at(&SeekerProfile::default(), &job, anchor());
            assert_eq!(score.experience, 20.0);
        }
    }

    #[test]
    fn experience_rule_table_tiers() {
        let cases = [
            (ExperienceLevel::Entry, 1, 90.0),
            (ExperienceLevel::Entry, 4, 70.0),
            (ExperienceLevel::Mid, 3, 90.0),
            (ExperienceLevel::Mid, 1, 60.0),
            (ExperienceLevel::Mid, 7, 40.0),
            (ExperienceLevel::Senior, 8, 90.0),
            (ExperienceLevel::Senior, 3, 50.0),
        ];

        for (level, years, expected) in cases {
            let job = JobPosting {
                experience_level: level,
                ..JobPosting::default()
            };
            let score = calculate_match_score_at(&profile_with_years(years), &job, anchor());
            assert_eq!(
                score.experience, expected,
                "level {level:?} with {years} years"
            );
        }
    }

    #[test]
    fn experience_years_ignore_negative_and_open_spans() {
        let entries = vec![
            // end precedes start: contributes nothing
            WorkExperience {
                start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
                end_date: NaiveDate::from_ymd_opt(2023, 1, 1),
                current: false,
            },
            // current position measured against the anchor
            experience_span((2024, 1, 1), None),
        ];

        let years = total_experience_years(&entries, anchor());
        assert_eq!(years, 2.0);
    }

    #[test]
    fn experience_years_round_to_one_decimal() {
        let entries = vec![experience_span((2025, 6, 1), Some((2026, 1, 1)))];
        let years = total_experience_years(&entries, anchor());
        assert_eq!(years, 0.6);
    }

    #[test]
    fn preferences_reward_and_penalize_independently() {
        let mut profile = strong_profile();
        let job = base_job();

        // All three aligned: 50 + 20 + 15 + 15, clamped at 100.
        let aligned = calculate_match_score_at(&profile, &job, anchor());
        assert_eq!(aligned.preferences, 100.0);

        // All three misaligned: 50 - 10 - 5 - 5.
        profile.job_preferences = JobPreferences {
            job_types: vec!["onsite".into()],
            work_locations: vec!["Musanze".into()],
            remote_preference: Some(RemotePreference::Onsite),
        };
        let misaligned = calculate_match_score_at(&profile, &job, anchor());
        assert_eq!(misaligned.preferences, 30.0);

        // Empty preference sections leave the base untouched.
        profile.job_preferences = JobPreferences::default();
        let neutral = calculate_match_score_at(&profile, &job, anchor());
        assert_eq!(neutral.preferences, 50.0);
    }

    #[test]
    fn job_type_membership_is_literal() {
        let mut profile = strong_profile();
        profile.job_preferences = JobPreferences {
            job_types: vec!["Remote".into()],
            ..JobPreferences::default()
        };

        // "Remote" != "remote": membership is compared literally.
        let score = calculate_match_score_at(&profile, &base_job(), anchor());
        assert_eq!(score.preferences, 40.0);
    }

    #[test]
    fn remote_compatibility_table() {
        assert!(remote_compatible(RemotePreference::Flexible, "anything"));
        assert!(remote_compatible(RemotePreference::Remote, "Remote"));
        assert!(!remote_compatible(RemotePreference::Remote, "hybrid"));
        assert!(remote_compatible(RemotePreference::Onsite, "onsite"));
        assert!(!remote_compatible(RemotePreference::Onsite, "remote"));
        assert!(remote_compatible(RemotePreference::Hybrid, "hybrid"));
        assert!(remote_compatible(RemotePreference::Hybrid, "remote"));
        assert!(!remote_compatible(RemotePreference::Hybrid, "onsite"));
        assert!(!remote_compatible(RemotePreference::Remote, "contract"));
    }

    #[test]
    fn education_tiers() {
        let mut profile = SeekerProfile::default();
        assert_eq!(
            calculate_match_score_at(&profile, &base_job(), anchor()).education,
            30.0
        );

        profile.education = vec![Education {
            degree: "Diploma".into(),
            field_of_study: "Fine Arts".into(),
        }];
        assert_eq!(
            calculate_match_score_at(&profile, &base_job(), anchor()).education,
            40.0
        );

        profile.education = vec![Education {
            degree: "Master of Business Administration".into(),
            field_of_study: "Management".into(),
        }];
        assert_eq!(
            calculate_match_score_at(&profile, &base_job(), anchor()).education,
            80.0
        );
    }

    #[test]
    fn score_stays_within_bounds_and_is_idempotent() {
        let profiles = [SeekerProfile::default(), strong_profile()];
        let jobs = [JobPosting::default(), base_job()];

        for profile in &profiles {
            for job in &jobs {
                let first = calculate_match_score_at(profile, job, anchor());
                let second = calculate_match_score_at(profile, job, anchor());
                assert!(first.total <= 100);
                assert_eq!(first, second);
            }
        }
    }
}
