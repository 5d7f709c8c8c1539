use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::data::{self, Curriculum};
use crate::model::{Achievement, AppView, TOTAL_WEEKS, TopicRecord};

// Submodules
pub mod achievements;
pub mod actions;
pub mod progress;
pub mod stats;
pub mod view_models;

pub use progress::StudyProgress;
pub use stats::ProgressStats;

/// Raw text buffers backing the subject view's inputs. Text lives here
/// while the user types and is committed through the input boundary on
/// focus loss; the store never sees half-typed values.
#[derive(Clone, Default)]
pub struct TopicEdit {
    pub half_yearly: String,
    pub current: String,
    pub notes: String,
    pub tasks: [String; TOTAL_WEEKS],
}

impl TopicEdit {
    pub fn from_record(record: &TopicRecord) -> Self {
        Self {
            half_yearly: record.half_yearly_score.to_string(),
            current: record.current_score.to_string(),
            notes: record.notes.clone(),
            tasks: record.weekly_tasks.clone(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct TrackerApp {
    pub curriculum: Curriculum,
    pub progress: StudyProgress,
    #[serde(skip)]
    pub view: AppView,
    #[serde(skip)]
    pub selected_subject: usize,
    /// Modal queue; the front entry is on screen.
    #[serde(skip)]
    pub pending_achievements: Vec<Achievement>,
    /// Keyed by (subject index, topic index) into the curriculum.
    #[serde(skip)]
    pub topic_edits: HashMap<(usize, usize), TopicEdit>,
    /// Chart series for the current analytics visit (jitter must not
    /// re-roll every frame).
    #[serde(skip)]
    pub analytics_series: Option<Vec<u32>>,
    #[serde(skip)]
    pub confirm_reset: bool,
}

impl TrackerApp {
    pub fn new() -> Self {
        let curriculum = data::read_curriculum_embedded();
        let progress = StudyProgress::new(&curriculum);
        Self {
            curriculum,
            progress,
            view: AppView::default(),
            selected_subject: 0,
            pending_achievements: Vec::new(),
            topic_edits: HashMap::new(),
            analytics_series: None,
            confirm_reset: false,
        }
    }

    /// Restores the serialized app from eframe storage, or starts fresh.
    pub fn restore_or_new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: TrackerApp = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_else(TrackerApp::new);
        app.progress.rebuild_weekly_index();
        app
    }
}

impl Default for TrackerApp {
    fn default() -> Self {
        Self::new()
    }
}
