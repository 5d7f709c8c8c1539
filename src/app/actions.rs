use super::{StudyProgress, TrackerApp};
use crate::model::{AppView, TopicField, TopicStatus};

impl TrackerApp {
    pub fn select_view(&mut self, view: AppView) {
        if view == AppView::Analytics {
            // regenerate the chart series per visit, like the other stats
            self.analytics_series = None;
        }
        self.view = view;
    }

    pub fn select_subject(&mut self, subject_idx: usize) {
        self.selected_subject = subject_idx;
    }

    pub fn open_subject(&mut self, subject_idx: usize) {
        self.select_subject(subject_idx);
        self.select_view(AppView::Subjects);
    }

    /// Input boundary for topic fields: commits the raw value into the
    /// store, then runs the achievement checks the mutation calls for.
    pub fn commit_field(&mut self, subject: &str, topic: &str, field: TopicField, raw_value: &str) {
        self.progress.update_field(subject, topic, field, raw_value);

        let fired = match field {
            TopicField::CurrentScore => {
                let score = self
                    .progress
                    .record(subject, topic)
                    .map(|r| r.current_score);
                match score.filter(|s| *s >= 90) {
                    Some(score) => self.progress.check_achievements(subject, topic, Some(score)),
                    None => Vec::new(),
                }
            }
            TopicField::Status => {
                if TopicStatus::parse(raw_value.trim()) == Some(TopicStatus::Completed) {
                    self.progress.check_achievements(subject, topic, None)
                } else {
                    Vec::new()
                }
            }
            _ => Vec::new(),
        };
        self.pending_achievements.extend(fired);
    }

    pub fn commit_weekly_task(&mut self, subject: &str, topic: &str, week_idx: usize, text: &str) {
        self.progress.set_weekly_task(subject, topic, week_idx, text);
    }

    /// Planner checkbox handler; the (subject, topic, week) triple is the
    /// slot's stable identifier.
    pub fn toggle_task(&mut self, subject: &str, topic: &str, week_idx: usize) {
        if self.progress.toggle_task(subject, topic, week_idx) == Some(true) {
            if let Some(achievement) = self.progress.check_task_achievements() {
                self.pending_achievements.push(achievement);
            }
        }
    }

    /// Wipes every record back to its defaults. The only re-initialization
    /// after startup, and only ever user-confirmed.
    pub fn reset_progress(&mut self) {
        self.progress = StudyProgress::new(&self.curriculum);
        self.topic_edits.clear();
        self.pending_achievements.clear();
        self.analytics_series = None;
        self.confirm_reset = false;
        log::info!("progress reset to curriculum defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::super::progress::test_curriculum;
    use super::*;
    use crate::model::AchievementKind;

    fn test_app() -> TrackerApp {
        let curriculum = test_curriculum();
        let progress = StudyProgress::new(&curriculum);
        TrackerApp {
            curriculum,
            progress,
            ..TrackerApp::default()
        }
    }

    #[test]
    fn committing_a_high_score_queues_a_notification() {
        let mut app = test_app();
        app.commit_field("Mathematics", "Circles", TopicField::CurrentScore, "95");
        assert_eq!(app.pending_achievements.len(), 1);
        assert_eq!(app.pending_achievements[0].kind, AchievementKind::HighScore);

        app.commit_field("Science", "Motion", TopicField::CurrentScore, "40");
        assert_eq!(app.pending_achievements.len(), 1);
    }

    #[test]
    fn completing_a_topic_through_the_boundary_fires_first_completion() {
        let mut app = test_app();
        app.commit_field("Science", "Sound", TopicField::Status, "completed");
        assert!(
            app.pending_achievements
                .iter()
                .any(|a| a.kind == AchievementKind::FirstCompletion)
        );
    }

    #[test]
    fn reset_wipes_records_edits_and_queue() {
        let mut app = test_app();
        app.commit_field("Mathematics", "Circles", TopicField::CurrentScore, "95");
        app.commit_weekly_task("Mathematics", "Circles", 0, "proofs");
        app.reset_progress();

        assert_eq!(app.progress.overall_stats().average_score, 0);
        assert!(app.progress.week_tasks(1).is_empty());
        assert!(app.pending_achievements.is_empty());
        assert!(app.topic_edits.is_empty());
        // the achievement log is part of the wiped store
        assert!(app.progress.achievements.is_empty());
    }
}
