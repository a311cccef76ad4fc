use crate::infra::{load_job_description, non_empty};
use clap::Args;
use std::path::PathBuf;
use talent_rank::config::AppConfig;
use talent_rank::error::AppError;
use talent_rank::ranking::{
    Candidate, CandidateId, CandidateImporter, FilterCriteria, RankingEngine, RequirementSet,
    ScoredCandidate,
};

const SAMPLE_JOB: &str = "Frontend Engineer (React). We need 3+ years of experience with React, \
TypeScript and CSS. Nice to have: Next.js, GraphQL. \
Location: Bangalore, Pune or Remote. Budget 12-22 LPA.";

#[derive(Args, Debug)]
pub(crate) struct RankArgs {
    /// Candidate pool file (.json array or .csv export)
    #[arg(long)]
    pub(crate) candidates: PathBuf,
    /// Job description text
    #[arg(long, conflicts_with = "job_file")]
    pub(crate) job: Option<String>,
    /// Read the job description from a file
    #[arg(long)]
    pub(crate) job_file: Option<PathBuf>,
    /// Replace the extracted required skills (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub(crate) skills: Vec<String>,
    /// Replace the extracted minimum years of experience
    #[arg(long)]
    pub(crate) min_experience: Option<u32>,
    /// Replace the extracted locations (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub(crate) locations: Vec<String>,
    /// Replace the extracted salary ceiling
    #[arg(long)]
    pub(crate) max_salary: Option<f64>,
    /// Only print the first N ranked candidates
    #[arg(long)]
    pub(crate) top: Option<usize>,
    /// Print the ranking as JSON instead of a table
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Only print the first N ranked candidates
    #[arg(long)]
    pub(crate) top: Option<usize>,
}

pub(crate) fn run_rank(args: RankArgs) -> Result<(), AppError> {
    let RankArgs {
        candidates,
        job,
        job_file,
        skills,
        min_experience,
        locations,
        max_salary,
        top,
        json,
    } = args;

    let config = AppConfig::load()?;
    let engine = RankingEngine::new(config.ranking.vocabulary());

    let pool = CandidateImporter::from_path(&candidates)?;
    let job = load_job_description(job, job_file.as_deref())?;
    let overrides = FilterCriteria {
        skills: non_empty(skills),
        min_experience,
        locations: non_empty(locations),
        max_salary,
    };

    let ranked = engine.rank(job.as_deref(), &overrides, &pool);
    let shown = limit(&ranked, top);

    if json {
        let payload = serde_json::to_string_pretty(shown).map_err(std::io::Error::from)?;
        println!("{payload}");
        return Ok(());
    }

    let requirements = engine.requirements(job.as_deref(), &overrides);
    println!("Ranking {} ({} candidates)", candidates.display(), pool.len());
    render_ranking(&requirements, shown, ranked.len());
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = RankingEngine::new(config.ranking.vocabulary());
    let pool = sample_candidates();
    let overrides = FilterCriteria::default();

    println!("Candidate ranking demo");
    println!("Job description:\n  {SAMPLE_JOB}");

    let requirements = engine.requirements(Some(SAMPLE_JOB), &overrides);
    let ranked = engine.rank(Some(SAMPLE_JOB), &overrides, &pool);
    println!("Sample pool: {} candidates", pool.len());
    render_ranking(&requirements, limit(&ranked, args.top), ranked.len());
    Ok(())
}

fn limit(ranked: &[ScoredCandidate], top: Option<usize>) -> &[ScoredCandidate] {
    match top {
        Some(count) if count < ranked.len() => &ranked[..count],
        _ => ranked,
    }
}

pub(crate) fn render_ranking(
    requirements: &RequirementSet,
    ranked: &[ScoredCandidate],
    survivors: usize,
) {
    println!("\nRequirements");
    println!("- Required skills: {}", list_or_none(&requirements.required_skills));
    println!(
        "- Preferred skills: {}",
        list_or_none(&requirements.preferred_skills)
    );
    println!("- Minimum experience: {}y", requirements.min_experience);
    println!("- Locations: {}", list_or_none(&requirements.locations));
    match requirements.salary_range {
        Some(range) => println!("- Salary: {:.0} to {:.0}", range.min, range.max),
        None => println!("- Salary: no ceiling"),
    }

    if ranked.is_empty() {
        println!("\nNo candidates passed the hard filters");
        return;
    }

    println!(
        "\nRanked candidates (showing {} of {})",
        ranked.len(),
        survivors
    );
    for scored in ranked {
        let candidate = &scored.candidate;
        println!(
            "{:>3}. {} {} | score {:.2} | {}y {} | {} | {:.0} {}",
            scored.rank,
            candidate.id.0,
            candidate.name,
            scored.score,
            candidate.experience,
            scored.experience_fit.label(),
            candidate.location,
            candidate.salary_expectation,
            scored.salary_fit.label(),
        );
        println!(
            "     matched: {} | missing: {}",
            list_or_none(&scored.matched_skills),
            list_or_none(&scored.missing_skills)
        );
        for line in &scored.explanations {
            println!("     - {line}");
        }
    }
}

fn list_or_none(values: &[String]) -> String {
    if values.is_empty() {
        "none".to_string()
    } else {
        values.join(", ")
    }
}

fn sample_candidates() -> Vec<Candidate> {
    [
        ("C1001", "Aditi K.", &["React", "TypeScript", "CSS", "Next.js"][..], 5, "Bangalore", 1_800_000.0, "Frontend Developer"),
        ("C1002", "Rohan M.", &["React", "JavaScript", "Redux"][..], 3, "Pune", 1_100_000.0, "Frontend Developer"),
        ("C1003", "Priya S.", &["Java", "Spring Boot", "AWS"][..], 8, "Bangalore", 2_100_000.0, "Backend Developer"),
        ("C1004", "Vikram T.", &["React", "TypeScript", "GraphQL", "CSS"][..], 6, "Remote", 2_600_000.0, "Full Stack Developer"),
        ("C1005", "Neha J.", &["React", "CSS", "HTML"][..], 1, "Pune", 600_000.0, "Frontend Developer"),
        ("C1006", "Arjun P.", &["React", "TypeScript", "GraphQL"][..], 4, "Mumbai", 1_400_000.0, "Frontend Developer"),
        ("C1007", "Sneha R.", &["TypeScript", "Node.js", "CSS", "Docker"][..], 4, "Banglore", 1_500_000.0, "Full Stack Developer"),
        ("C1008", "Kabir D.", &["Python", "Docker", "Kubernetes"][..], 7, "Remote", 1_900_000.0, "DevOps Engineer"),
    ]
    .into_iter()
    .map(|(id, name, skills, experience, location, salary, title)| {
        let skills: Vec<String> = skills.iter().map(|skill| skill.to_string()).collect();
        let resume_text = format!(
            "{title} with {experience} years of experience in {}. Passionate about building scalable applications. Located in {location}.",
            skills.join(", ")
        );
        Candidate {
            id: CandidateId(id.to_string()),
            name: name.to_string(),
            skills,
            experience,
            location: location.to_string(),
            salary_expectation: salary,
            resume_text,
        }
    })
    .collect()
}
