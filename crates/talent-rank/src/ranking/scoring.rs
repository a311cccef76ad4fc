use std::collections::HashSet;

use super::domain::{Candidate, ExperienceFit, RequirementSet, SalaryFit, ScoredCandidate};
use super::similarity::cosine_similarity;

/// Signal weights. The standard table sums to 1.0 so raw scores stay in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub required_skills: f64,
    pub preferred_skills: f64,
    pub experience: f64,
    pub similarity: f64,
}

pub const STANDARD_WEIGHTS: ScoringWeights = ScoringWeights {
    required_skills: 0.5,
    preferred_skills: 0.2,
    experience: 0.2,
    similarity: 0.1,
};

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.required_skills + self.preferred_skills + self.experience + self.similarity
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        STANDARD_WEIGHTS
    }
}

/// Weighted four-signal scorer producing one explanation line per signal.
#[derive(Debug, Clone, Default)]
pub struct ScoringModel {
    weights: ScoringWeights,
}

struct SkillCoverage {
    matched: Vec<String>,
    missing: Vec<String>,
    total: usize,
}

impl SkillCoverage {
    fn measure(wanted: &[String], held: &HashSet<String>) -> Self {
        let (matched, missing): (Vec<String>, Vec<String>) = wanted
            .iter()
            .cloned()
            .partition(|skill| held.contains(&normalize_skill(skill)));

        Self {
            matched,
            missing,
            total: wanted.len(),
        }
    }

    fn ratio(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(self.matched.len() as f64 / self.total as f64)
        }
    }
}

fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Rounds half away from zero, so `0.125` displays as `0.13` rather than `0.12`.
fn round_half_up(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

impl ScoringModel {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Scores one candidate. `job_text` is the unparsed description used for
    /// the similarity signal. The result carries the raw score and rank 0.
    pub fn score(
        &self,
        candidate: &Candidate,
        requirements: &RequirementSet,
        job_text: &str,
    ) -> ScoredCandidate {
        let held: HashSet<String> = candidate.skills.iter().map(|s| normalize_skill(s)).collect();
        let mut explanations = Vec::with_capacity(4);
        let mut raw_score = 0.0;

        let required = SkillCoverage::measure(&requirements.required_skills, &held);
        // No required skills means nothing is missing: full credit.
        let required_ratio = required.ratio().unwrap_or(1.0);
        let contribution = required_ratio * self.weights.required_skills;
        raw_score += contribution;
        explanations.push(format!(
            "Required Skills: {}/{} matched (+{:.2})",
            required.matched.len(),
            required.total,
            round_half_up(contribution, 2)
        ));

        let preferred = SkillCoverage::measure(&requirements.preferred_skills, &held);
        // No preferred skills means no bonus and no explanation line.
        if let Some(ratio) = preferred.ratio() {
            let contribution = ratio * self.weights.preferred_skills;
            raw_score += contribution;
            explanations.push(format!(
                "Preferred Skills: {}/{} matched (+{:.2})",
                preferred.matched.len(),
                preferred.total,
                round_half_up(contribution, 2)
            ));
        }

        let experience_fit = if candidate.experience >= requirements.min_experience {
            ExperienceFit::Meets
        } else {
            ExperienceFit::Below
        };
        let experience_ratio = match experience_fit {
            ExperienceFit::Meets => 1.0,
            ExperienceFit::Below => {
                candidate.experience as f64 / requirements.min_experience as f64
            }
        };
        let contribution = experience_ratio * self.weights.experience;
        raw_score += contribution;
        explanations.push(match experience_fit {
            ExperienceFit::Meets => format!(
                "Experience: Meets/Exceeds requirement (+{:.2})",
                round_half_up(contribution, 2)
            ),
            ExperienceFit::Below => format!(
                "Experience: {}y vs {}y required (+{:.2})",
                candidate.experience,
                requirements.min_experience,
                round_half_up(contribution, 2)
            ),
        });

        let similarity = cosine_similarity(job_text, &candidate.resume_text);
        let contribution = similarity * self.weights.similarity;
        raw_score += contribution;
        explanations.push(format!(
            "Semantic Similarity: {:.0}% (+{:.2})",
            round_half_up(similarity * 100.0, 0),
            round_half_up(contribution, 2)
        ));

        let salary_fit = match requirements.salary_range {
            Some(range) if candidate.salary_expectation > range.max => SalaryFit::Above,
            _ => SalaryFit::Within,
        };

        ScoredCandidate {
            candidate: candidate.clone(),
            score: raw_score,
            rank: 0,
            matched_skills: dedup_case_insensitive(required.matched.into_iter().chain(preferred.matched)),
            missing_skills: required.missing,
            experience_fit,
            salary_fit,
            explanations,
        }
    }
}

fn dedup_case_insensitive(skills: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .filter(|skill| seen.insert(normalize_skill(skill)))
        .collect()
}
