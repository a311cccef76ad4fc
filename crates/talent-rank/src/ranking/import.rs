use serde::{Deserialize, Deserializer};
use std::io::Read;
use std::path::Path;
use tracing::debug;

use super::domain::{Candidate, CandidateId};

/// Failure to load a candidate pool. This is the only error the pipeline raises.
#[derive(Debug, thiserror::Error)]
pub enum CandidateImportError {
    #[error("failed to read candidate pool: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid candidate JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid candidate CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("unsupported candidate file format '{extension}' (expected .json or .csv)")]
    UnsupportedFormat { extension: String },
}

/// Loads candidate pools from JSON arrays or CSV exports.
pub struct CandidateImporter;

impl CandidateImporter {
    /// Picks the format from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<Candidate>, CandidateImportError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let candidates = match extension.as_str() {
            "json" => Self::from_json_reader(std::fs::File::open(path)?)?,
            "csv" => Self::from_csv_reader(std::fs::File::open(path)?)?,
            _ => return Err(CandidateImportError::UnsupportedFormat { extension }),
        };

        debug!(path = %path.display(), count = candidates.len(), "loaded candidate pool");
        Ok(candidates)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Expects `id,name,skills,experience,location,salaryExpectation,resumeText`
    /// headers; skills are separated by `;` or `|`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Vec<Candidate>, CandidateImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut candidates = Vec::new();

        for record in csv_reader.deserialize::<CandidateRow>() {
            candidates.push(record?.into_candidate());
        }

        Ok(candidates)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CandidateRow {
    id: String,
    name: String,
    #[serde(default, deserialize_with = "split_skills")]
    skills: Vec<String>,
    #[serde(default)]
    experience: u32,
    #[serde(default)]
    location: String,
    #[serde(default)]
    salary_expectation: f64,
    #[serde(default)]
    resume_text: String,
}

impl CandidateRow {
    fn into_candidate(self) -> Candidate {
        Candidate {
            id: CandidateId(self.id),
            name: self.name,
            skills: self.skills,
            experience: self.experience,
            location: self.location,
            salary_expectation: self.salary_expectation,
            resume_text: self.resume_text,
        }
    }
}

fn split_skills<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .split(['|', ';'])
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect())
}
