use serde::{Deserialize, Serialize};

/// Stable identifier supplied by the candidate source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub String);

/// Candidate record as supplied by the caller. The pipeline never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub salary_expectation: f64,
    #[serde(default)]
    pub resume_text: String,
}

/// Salary band extracted from a job description. Only `max` is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: f64,
    pub max: f64,
}

/// Structured requirements derived from a job description.
///
/// Required and preferred skills are disjoint under case-insensitive identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequirementSet {
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
    pub min_experience: u32,
    pub locations: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
}

impl RequirementSet {
    /// Hard constraints enforced before scoring.
    pub fn hard_constraints(&self) -> HardConstraints {
        HardConstraints {
            min_experience: self.min_experience,
            locations: self.locations.clone(),
            max_salary: self.salary_range.map(|range| range.max),
        }
    }
}

/// Recruiter overrides. Each field replaces the extracted value only when supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterCriteria {
    pub skills: Option<Vec<String>>,
    pub min_experience: Option<u32>,
    pub locations: Option<Vec<String>>,
    pub max_salary: Option<f64>,
}

/// Pass/fail constraints consumed by the hard filter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HardConstraints {
    /// Zero disables the experience check.
    pub min_experience: u32,
    /// Empty accepts every location.
    pub locations: Vec<String>,
    pub max_salary: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceFit {
    #[serde(rename = "Meets Requirement")]
    Meets,
    #[serde(rename = "Below Requirement")]
    Below,
}

impl ExperienceFit {
    pub fn label(&self) -> &'static str {
        match self {
            ExperienceFit::Meets => "Meets Requirement",
            ExperienceFit::Below => "Below Requirement",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SalaryFit {
    #[serde(rename = "Within Budget")]
    Within,
    #[serde(rename = "Above Budget")]
    Above,
}

impl SalaryFit {
    pub fn label(&self) -> &'static str {
        match self {
            SalaryFit::Within => "Within Budget",
            SalaryFit::Above => "Above Budget",
        }
    }
}

/// Candidate plus its score, fit flags, and explanation trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    /// Raw weighted score until normalization, then the normalized value.
    pub score: f64,
    /// 1-based position; zero until ranked.
    pub rank: usize,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub experience_fit: ExperienceFit,
    pub salary_fit: SalaryFit,
    pub explanations: Vec<String>,
}
