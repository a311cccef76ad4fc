use tracing::debug;

use super::domain::{Candidate, FilterCriteria, HardConstraints, RequirementSet, SalaryRange};
use super::similarity::fuzzy_match;

/// Applies recruiter overrides on top of extracted requirements.
///
/// An override wins only when it is present and non-empty; a minimum
/// experience of `Some(0)` counts as present. A salary override replaces the
/// whole range with `0..=max_salary`. Preferred skills that collide with an
/// overridden required list are dropped so both lists stay disjoint.
pub fn merge_overrides(extracted: &RequirementSet, overrides: &FilterCriteria) -> RequirementSet {
    let required_skills = match overrides.skills.as_deref() {
        Some(skills) if !skills.is_empty() => skills.to_vec(),
        _ => extracted.required_skills.clone(),
    };

    let preferred_skills = extracted
        .preferred_skills
        .iter()
        .filter(|preferred| {
            !required_skills
                .iter()
                .any(|required| required.eq_ignore_ascii_case(preferred))
        })
        .cloned()
        .collect();

    let locations = match overrides.locations.as_deref() {
        Some(locations) if !locations.is_empty() => locations.to_vec(),
        _ => extracted.locations.clone(),
    };

    let salary_range = match overrides.max_salary {
        Some(max) if max > 0.0 => Some(SalaryRange { min: 0.0, max }),
        _ => extracted.salary_range,
    };

    RequirementSet {
        required_skills,
        preferred_skills,
        min_experience: overrides.min_experience.unwrap_or(extracted.min_experience),
        locations,
        salary_range,
    }
}

/// Keeps candidates that satisfy every hard constraint, preserving input order.
///
/// Skills are never filtered on here; they only affect the score.
pub fn apply_hard_filters<'a>(
    candidates: &'a [Candidate],
    constraints: &HardConstraints,
    fuzzy_threshold: usize,
) -> Vec<&'a Candidate> {
    let survivors: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| passes(candidate, constraints, fuzzy_threshold))
        .collect();

    debug!(
        pool = candidates.len(),
        survivors = survivors.len(),
        "applied hard filters"
    );

    survivors
}

fn passes(candidate: &Candidate, constraints: &HardConstraints, fuzzy_threshold: usize) -> bool {
    // A zero minimum is "no constraint", not "at least zero".
    if constraints.min_experience > 0 && candidate.experience < constraints.min_experience {
        return false;
    }

    if !constraints.locations.is_empty()
        && !constraints
            .locations
            .iter()
            .any(|allowed| fuzzy_match(allowed, &candidate.location, fuzzy_threshold))
    {
        return false;
    }

    if let Some(max_salary) = constraints.max_salary {
        if max_salary > 0.0 && candidate.salary_expectation > max_salary {
            return false;
        }
    }

    true
}
