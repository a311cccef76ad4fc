use crate::ranking::domain::{Candidate, CandidateId};

pub(super) const JOB_DESCRIPTION: &str = "Senior Frontend Engineer. 3+ years with React and \
TypeScript required. Nice to have: Docker, GraphQL. Location: Bangalore or Pune. Budget 10-20 LPA.";

pub(super) fn candidate(
    id: &str,
    skills: &[&str],
    experience: u32,
    location: &str,
    salary: f64,
    resume: &str,
) -> Candidate {
    Candidate {
        id: CandidateId(id.to_string()),
        name: format!("Candidate {id}"),
        skills: skills.iter().map(|skill| skill.to_string()).collect(),
        experience,
        location: location.to_string(),
        salary_expectation: salary,
        resume_text: resume.to_string(),
    }
}

pub(super) fn pool() -> Vec<Candidate> {
    vec![
        candidate(
            "C1001",
            &["React", "TypeScript", "Docker", "GraphQL"],
            6,
            "Bangalore",
            1_800_000.0,
            "Frontend Engineer with 6 years of React and TypeScript experience in Bangalore.",
        ),
        candidate(
            "C1002",
            &["React", "Redux"],
            3,
            "Pune",
            1_200_000.0,
            "Frontend Developer with 3 years of experience in React, Redux.",
        ),
        candidate(
            "C1003",
            &["Python", "Django"],
            8,
            "Bangalore",
            1_500_000.0,
            "Backend Developer with 8 years of experience in Python.",
        ),
        candidate(
            "C1004",
            &["React", "TypeScript"],
            1,
            "Bangalore",
            700_000.0,
            "Junior React developer.",
        ),
        candidate(
            "C1005",
            &["React", "TypeScript", "Docker"],
            5,
            "Mumbai",
            1_400_000.0,
            "Full Stack Developer in Mumbai.",
        ),
        candidate(
            "C1006",
            &["React", "TypeScript", "GraphQL"],
            4,
            "Bangalore",
            2_500_000.0,
            "Senior Frontend Engineer, React and TypeScript.",
        ),
        candidate(
            "C1007",
            &["react", "typescript"],
            3,
            "Pune ",
            1_000_000.0,
            "Frontend Developer with React and TypeScript.",
        ),
    ]
}

pub(super) fn ids(ranked: &[crate::ranking::ScoredCandidate]) -> Vec<&str> {
    ranked
        .iter()
        .map(|scored| scored.candidate.id.0.as_str())
        .collect()
}
