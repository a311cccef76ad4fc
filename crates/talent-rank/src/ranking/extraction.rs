use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use super::domain::{RequirementSet, SalaryRange};
use super::vocabulary::Vocabulary;

/// One LPA (lakh per annum) in currency units.
pub const LPA_MULTIPLIER: f64 = 100_000.0;

/// Ceiling applied to a bare salary figure. Heuristic, kept as-is.
pub const BARE_SALARY_CEILING_FACTOR: f64 = 1.2;

static PREFERRED_MARKER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)preferred|nice to have|plus").unwrap());

// "5+ years", "3-5 yrs", "2 year"
static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)\+?\s*(?:-\s*[0-9]+\s*)?(?:years?|yrs?)").unwrap());

// "8-12 LPA", "8 to 12 LPA"
static LPA_RANGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+)(?:\s*-\s*|\s+to\s+)([0-9]+)\s*LPA").unwrap());

static BARE_SALARY_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[0-9]{6,}").unwrap());

/// Keyword and pattern based parser turning job-description text into requirements.
///
/// Never fails: anything it cannot recognise is left empty or zero.
#[derive(Debug, Clone, Default)]
pub struct RequirementExtractor {
    vocabulary: Vocabulary,
}

impl RequirementExtractor {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn extract(&self, text: &str) -> RequirementSet {
        let (required_skills, preferred_skills) = self.extract_skills(text);
        let requirements = RequirementSet {
            required_skills,
            preferred_skills,
            min_experience: extract_min_experience(text),
            locations: self.extract_locations(text),
            salary_range: extract_salary_range(text),
        };

        debug!(
            required = requirements.required_skills.len(),
            preferred = requirements.preferred_skills.len(),
            min_experience = requirements.min_experience,
            locations = requirements.locations.len(),
            has_salary = requirements.salary_range.is_some(),
            "extracted job requirements"
        );

        requirements
    }

    /// Splits at the first "preferred" / "nice to have" / "plus" marker.
    fn extract_skills(&self, text: &str) -> (Vec<String>, Vec<String>) {
        let mut sections = PREFERRED_MARKER_RE.split(text);
        let required_section = sections.next().unwrap_or_default().to_lowercase();
        let preferred_section = sections.collect::<Vec<_>>().join(" ").to_lowercase();

        let required = self.skills_in(&required_section);
        let preferred: Vec<String> = self
            .skills_in(&preferred_section)
            .into_iter()
            .filter(|skill| !required.contains(skill))
            .collect();

        if required.is_empty() && preferred.is_empty() {
            return (self.skills_in(&text.to_lowercase()), Vec::new());
        }

        (required, preferred)
    }

    fn skills_in(&self, lowered: &str) -> Vec<String> {
        self.vocabulary
            .skills
            .iter()
            .filter(|skill| lowered.contains(&skill.to_lowercase()))
            .cloned()
            .collect()
    }

    fn extract_locations(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.vocabulary
            .locations
            .iter()
            .filter(|location| lowered.contains(&location.to_lowercase()))
            .cloned()
            .collect()
    }
}

fn extract_min_experience(text: &str) -> u32 {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        // The capture is all digits, so a parse failure can only be overflow.
        .map(|years| years.as_str().parse::<u32>().unwrap_or(u32::MAX))
        .unwrap_or(0)
}

fn extract_salary_range(text: &str) -> Option<SalaryRange> {
    if let Some(caps) = LPA_RANGE_RE.captures(text) {
        let low = caps.get(1).and_then(|m| m.as_str().parse::<f64>().ok());
        let high = caps.get(2).and_then(|m| m.as_str().parse::<f64>().ok());
        if let (Some(low), Some(high)) = (low, high) {
            return Some(SalaryRange {
                min: low * LPA_MULTIPLIER,
                max: high * LPA_MULTIPLIER,
            });
        }
    }

    BARE_SALARY_RE
        .find(text)
        .and_then(|figure| figure.as_str().parse::<f64>().ok())
        .map(|figure| SalaryRange {
            min: figure,
            max: figure * BARE_SALARY_CEILING_FACTOR,
        })
}
