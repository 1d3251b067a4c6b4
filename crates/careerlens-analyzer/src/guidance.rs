//! Next-step checklists and static learning resources keyed by career

/// A checklist selected by substring match against the top career
struct NextStepRule {
    patterns: &'static [&'static str],
    steps: &'static [&'static str],
}

/// Ordered rule table, first match wins
///
/// Career labels can contain several matchable names ("Data Science / UI/UX"),
/// so the order here decides which checklist applies.
const NEXT_STEP_RULES: &[NextStepRule] = &[
    NextStepRule {
        patterns: &["Software Development"],
        steps: &[
            "Complete a full-stack development course that includes both front-end and data visualization",
            "Build a personal project that showcases coding skills with an interactive UI",
            "Join tech communities focused on software development",
            "Create a portfolio website showcasing your projects",
        ],
    },
    NextStepRule {
        patterns: &["Data Science", "Analysis"],
        steps: &[
            "Take courses in data science fundamentals, statistics, and Python/R",
            "Work on data analysis projects using real-world datasets",
            "Learn visualization tools like Tableau or Power BI",
            "Join data science competitions on platforms like Kaggle",
        ],
    },
    NextStepRule {
        patterns: &["UI/UX Design"],
        steps: &[
            "Create a comprehensive UI/UX portfolio showcasing versatile design skills",
            "Join design communities for mentorship and feedback on work",
            "Practice technical aspects of design through guided courses",
            "Learn user research methodologies to strengthen UX skills",
        ],
    },
    NextStepRule {
        patterns: &["Cybersecurity"],
        steps: &[
            "Pursue security certifications like CompTIA Security+",
            "Create cybersecurity demonstration projects",
            "Participate in security CTF (Capture The Flag) competitions",
            "Build knowledge of security tools and vulnerability assessment",
        ],
    },
];

/// Recommended actions for a top career
pub fn next_steps(top_career: &str) -> Vec<String> {
    NEXT_STEP_RULES
        .iter()
        .find(|rule| rule.patterns.iter().any(|p| top_career.contains(p)))
        .map(|rule| rule.steps.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(|| {
            vec![
                format!("Develop skills specific to {}", top_career),
                "Create a portfolio of relevant projects".to_string(),
                "Connect with professionals in this field through LinkedIn and professional groups"
                    .to_string(),
                "Stay updated with industry trends and best practices".to_string(),
            ]
        })
}

/// A titled group of learning resources
#[derive(Debug, Clone, Copy)]
pub struct ResourceGroup {
    /// Group heading
    pub title: &'static str,
    /// `(name, description)` pairs
    pub items: &'static [(&'static str, &'static str)],
}

/// Learning platforms, communities and practice tools shown with every dashboard
pub const RESOURCE_GROUPS: &[ResourceGroup] = &[
    ResourceGroup {
        title: "Learning Platforms",
        items: &[
            ("Coursera", "Offers courses from top universities and companies"),
            ("Udemy", "Affordable courses on technical skills"),
            ("LinkedIn Learning", "Business and technical courses with LinkedIn integration"),
            ("freeCodeCamp", "Free coding challenges and certifications"),
        ],
    },
    ResourceGroup {
        title: "Communities",
        items: &[
            ("Stack Overflow", "For technical questions and answers"),
            ("GitHub", "For collaborating on code and showcasing projects"),
            ("Reddit", "Subreddits specific to your area of interest"),
            ("Discord Communities", "For real-time discussions with peers"),
        ],
    },
    ResourceGroup {
        title: "Tools and Practice",
        items: &[
            ("GitHub", "Version control and project portfolio"),
            ("Leetcode/HackerRank", "For coding practice"),
            ("Kaggle", "For data science projects"),
            ("Figma/Adobe XD", "For UI/UX design"),
        ],
    },
];
