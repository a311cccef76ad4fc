/// Edit-distance tolerance used when comparing location names.
pub const DEFAULT_FUZZY_THRESHOLD: usize = 3;

const STANDARD_SKILLS: &[&str] = &[
    "React",
    "Next.js",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "CSS",
    "Tailwind",
    "HTML",
    "Python",
    "Java",
    "AWS",
    "Docker",
    "Kubernetes",
    "GraphQL",
    "Redux",
    "Zustand",
];

const STANDARD_LOCATIONS: &[&str] = &[
    "Bangalore",
    "Mumbai",
    "Delhi",
    "Hyderabad",
    "Pune",
    "Chennai",
    "Remote",
    "Gurgaon",
    "Noida",
    "San Francisco",
    "London",
];

/// Known skills and locations recognised in job descriptions.
///
/// Order matters: extracted lists follow vocabulary order, not text order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub fuzzy_threshold: usize,
}

impl Vocabulary {
    pub fn new(skills: Vec<String>, locations: Vec<String>) -> Self {
        Self {
            skills,
            locations,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }

    pub fn standard() -> Self {
        Self::new(
            STANDARD_SKILLS.iter().map(|skill| skill.to_string()).collect(),
            STANDARD_LOCATIONS.iter().map(|loc| loc.to_string()).collect(),
        )
    }

    pub fn with_fuzzy_threshold(mut self, threshold: usize) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::standard()
    }
}
