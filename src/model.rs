use serde::{Deserialize, Serialize};

/// Number of planning weeks in the study schedule.
pub const TOTAL_WEEKS: usize = 10;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TopicStatus {
    NotStarted,
    InProgress,
    Completed,
}

impl Default for TopicStatus {
    fn default() -> Self {
        TopicStatus::NotStarted
    }
}

impl TopicStatus {
    pub const ALL: [TopicStatus; 3] = [
        TopicStatus::NotStarted,
        TopicStatus::InProgress,
        TopicStatus::Completed,
    ];

    /// Canonical token used at the input boundary (`"not-started"`, …).
    pub fn token(self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "not-started",
            TopicStatus::InProgress => "in-progress",
            TopicStatus::Completed => "completed",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "not-started" => Some(TopicStatus::NotStarted),
            "in-progress" => Some(TopicStatus::InProgress),
            "completed" => Some(TopicStatus::Completed),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TopicStatus::NotStarted => "Not Started",
            TopicStatus::InProgress => "In Progress",
            TopicStatus::Completed => "Completed",
        }
    }
}

/// Editable fields of a topic record, as forwarded by the input boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TopicField {
    HalfYearlyScore,
    CurrentScore,
    Status,
    Notes,
}

/// Everything tracked for one (subject, topic) pair.
///
/// Scores are kept clamped to 0..=100. `tasks_completed[i]` is only
/// meaningful while `weekly_tasks[i]` is non-blank.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TopicRecord {
    pub half_yearly_score: u32,
    pub current_score: u32,
    pub status: TopicStatus,
    pub weekly_tasks: [String; TOTAL_WEEKS],
    pub tasks_completed: [bool; TOTAL_WEEKS],
    pub notes: String,
}

/// One row of the derived week → tasks index. A projection of the owning
/// record's task arrays, never the source of truth.
#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyTaskEntry {
    pub subject: String,
    pub topic: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AchievementKind {
    FirstCompletion,
    HighScore,
    SubjectMastery,
    TaskWarrior,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Achievement {
    pub kind: AchievementKind,
    pub emoji: String,
    pub title: String,
    pub description: String,
    pub subject: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    Subjects,
    Planner,
    Analytics,
}

impl Default for AppView {
    fn default() -> Self {
        AppView::Dashboard
    }
}
