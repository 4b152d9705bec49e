//! Keyword-based topic tagging over a session's questions.

use entity_api::conversations;
use std::collections::BTreeSet;
use std::fmt;

/// A fixed subject area a question can touch. Ordering follows declaration order, which is
/// also the order labels are stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Topic {
    ProgrammingAndDevelopment,
    MeetingManagement,
    ProjectManagement,
    DatabaseAndData,
    ExplanationsAndLearning,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::ProgrammingAndDevelopment,
        Topic::MeetingManagement,
        Topic::ProjectManagement,
        Topic::DatabaseAndData,
        Topic::ExplanationsAndLearning,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Topic::ProgrammingAndDevelopment => "Programming & Development",
            Topic::MeetingManagement => "Meeting Management",
            Topic::ProjectManagement => "Project Management",
            Topic::DatabaseAndData => "Database & Data",
            Topic::ExplanationsAndLearning => "Explanations & Learning",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            Topic::ProgrammingAndDevelopment => &["code", "programming", "function", "api"],
            Topic::MeetingManagement => &["meeting", "presentation", "demo"],
            Topic::ProjectManagement => &["project", "team", "workflow"],
            Topic::DatabaseAndData => &["database", "sql", "data"],
            Topic::ExplanationsAndLearning => &["explain", "how", "what", "why"],
        }
    }

    // Plain substring test: "api" matches "rapid" and "how" matches "show".
    fn mentioned_in(self, lowercase_text: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| lowercase_text.contains(keyword))
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Collects every topic mentioned by at least one question in `turns`. Answers are ignored.
pub fn extract_topics(turns: &[conversations::Model]) -> BTreeSet<Topic> {
    turns
        .iter()
        .flat_map(|turn| {
            let question = turn.question.to_lowercase();
            Topic::ALL
                .into_iter()
                .filter(move |topic| topic.mentioned_in(&question))
        })
        .collect()
}

/// Labels for `topics` in stored order.
pub fn labels(topics: &BTreeSet<Topic>) -> Vec<String> {
    topics.iter().map(|topic| topic.label().to_string()).collect()
}
