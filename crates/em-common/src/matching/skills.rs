use unicode_normalization::UnicodeNormalization;

/// Matched and missing required skills for one posting, both kept in the
/// posting's original order with the posting's original spelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SkillsOverlap {
    pub matched: Vec<String>,
    pub gap: Vec<String>,
}

fn normalize_term(input: &str) -> String {
    input.nfkc().collect::<String>().trim().to_lowercase()
}

/// Case-insensitive substring containment in either direction. "javascript"
/// matches "JavaScript" and "React" matches "react native".
pub fn fuzzy_skill_match(a: &str, b: &str) -> bool {
    let a = normalize_term(a);
    let b = normalize_term(b);
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.contains(&b) || b.contains(&a)
}

/// Split a posting's required skills into matched and gap against a profile.
/// Every caller goes through this helper; the containment heuristic can be
/// swapped for a proper similarity metric without touching scoring math.
pub fn skills_overlap(profile_skills: &[String], job_skills: &[String]) -> SkillsOverlap {
    let mut overlap = SkillsOverlap::default();

    for required in job_skills {
        if required.trim().is_empty() {
            continue;
        }

        let owned = profile_skills
            .iter()
            .any(|skill| fuzzy_skill_match(skill, required));

        if owned {
            overlap.matched.push(required.clone());
        } else {
            overlap.gap.push(required.clone());
        }
    }

    overlap
}

impl SkillsOverlap {
    /// Number of required skills considered, matched or not.
    pub fn required(&self) -> usize {
        self.matched.len() + self.gap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn containment_works_in_both_directions() {
        assert!(fuzzy_skill_match("react", "React Native"));
        assert!(fuzzy_skill_match("React Native", "react"));
        assert!(fuzzy_skill_match("javascript", "JavaScript"));
        assert!(!fuzzy_skill_match("java", "python"));
    }

    #[test]
    fn blank_terms_never_match() {
        assert!(!fuzzy_skill_match("", "rust"));
        assert!(!fuzzy_skill_match("rust", "   "));
    }

    #[test]
    fn overlap_keeps_posting_order_and_spelling() {
        let overlap = skills_overlap(
            &skills(&["javascript", "react"]),
            &skills(&["Node.js", "JavaScript", "React"]),
        );

        assert_eq!(overlap.matched, skills(&["JavaScript", "React"]));
        assert_eq!(overlap.gap, skills(&["Node.js"]));
        assert_eq!(overlap.required(), 3);
    }

    #[test]
    fn blank_required_entries_are_ignored() {
        let overlap = skills_overlap(&skills(&["rust"]), &skills(&["", "Rust", "  "]));

        assert_eq!(overlap.matched, skills(&["Rust"]));
        assert!(overlap.gap.is_empty());
        assert_eq!(overlap.required(), 1);
    }

    #[test]
    fn empty_requirements_yield_empty_overlap() {
        let overlap = skills_overlap(&skills(&["rust"]), &[]);
        assert_eq!(overlap, SkillsOverlap::default());
        assert_eq!(overlap.required(), 0);
    }
}
