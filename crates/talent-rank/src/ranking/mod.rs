//! Candidate ranking pipeline: requirement extraction, hard filtering,
//! weighted scoring, and min-max normalization.
//!
//! Every stage is a pure function of its inputs. Candidates are borrowed and
//! never mutated; each stage produces new records.

pub mod domain;
pub mod extraction;
pub mod filter;
pub mod import;
pub mod normalize;
pub mod scoring;
pub mod similarity;
pub mod vocabulary;

#[cfg(test)]
mod tests;

pub use domain::{
    Candidate, CandidateId, ExperienceFit, FilterCriteria, HardConstraints, RequirementSet,
    SalaryFit, SalaryRange, ScoredCandidate,
};
pub use extraction::RequirementExtractor;
pub use filter::{apply_hard_filters, merge_overrides};
pub use import::{CandidateImportError, CandidateImporter};
pub use normalize::{assign_ranks, normalize_scores};
pub use scoring::{ScoringModel, ScoringWeights, STANDARD_WEIGHTS};
pub use vocabulary::Vocabulary;

use tracing::info;

/// Stateless ranker combining the extractor, hard filter, and scoring model.
#[derive(Debug, Clone, Default)]
pub struct RankingEngine {
    extractor: RequirementExtractor,
    model: ScoringModel,
}

impl RankingEngine {
    pub fn new(vocabulary: Vocabulary) -> Self {
        Self::with_weights(vocabulary, STANDARD_WEIGHTS)
    }

    pub fn with_weights(vocabulary: Vocabulary, weights: ScoringWeights) -> Self {
        Self {
            extractor: RequirementExtractor::new(vocabulary),
            model: ScoringModel::new(weights),
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        self.extractor.vocabulary()
    }

    /// Requirements after recruiter overrides are applied. Blank text extracts nothing.
    pub fn requirements(&self, job_text: Option<&str>, overrides: &FilterCriteria) -> RequirementSet {
        let extracted = match job_text {
            Some(text) if !text.trim().is_empty() => self.extractor.extract(text),
            _ => RequirementSet::default(),
        };
        merge_overrides(&extracted, overrides)
    }

    /// Filters, scores, normalizes, and ranks `candidates` against the job text.
    ///
    /// An empty pool, or one where nobody survives filtering, yields an empty list.
    pub fn rank(
        &self,
        job_text: Option<&str>,
        overrides: &FilterCriteria,
        candidates: &[Candidate],
    ) -> Vec<ScoredCandidate> {
        let requirements = self.requirements(job_text, overrides);
        let survivors = apply_hard_filters(
            candidates,
            &requirements.hard_constraints(),
            self.vocabulary().fuzzy_threshold,
        );

        let job_text = job_text.unwrap_or_default();
        let scored: Vec<ScoredCandidate> = survivors
            .into_iter()
            .map(|candidate| self.model.score(candidate, &requirements, job_text))
            .collect();

        let ranked = assign_ranks(normalize_scores(scored));

        info!(
            pool = candidates.len(),
            ranked = ranked.len(),
            required_skills = requirements.required_skills.len(),
            "ranked candidate pool"
        );

        ranked
    }
}

/// Ranks with the standard vocabulary and weights.
pub fn rank(
    job_text: Option<&str>,
    overrides: &FilterCriteria,
    candidates: &[Candidate],
) -> Vec<ScoredCandidate> {
    RankingEngine::default().rank(job_text, overrides, candidates)
}
