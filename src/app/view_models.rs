use super::TrackerApp;
use crate::data;
use crate::model::{Achievement, TOTAL_WEEKS};
use crate::view_models::{ImprovementRow, PerformanceSummary, SubjectCard, TaskRow, WeekCard};

impl TrackerApp {
    pub fn subject_cards(&self) -> Vec<SubjectCard> {
        self.curriculum
            .subjects
            .iter()
            .enumerate()
            .map(|(idx, subject)| {
                let stats = self.progress.subject_stats(&subject.name);
                SubjectCard {
                    idx,
                    name: subject.name.clone(),
                    average_score: stats.average_score,
                    progress: stats.overall_progress,
                    completed_topics: stats.completed_topics,
                    total_topics: stats.total_topics,
                }
            })
            .collect()
    }

    /// One card per planning week. Rebuilds the weekly index first, so the
    /// planner always reads a fresh grouping.
    pub fn week_cards(&mut self) -> Vec<WeekCard> {
        self.progress.rebuild_weekly_index();
        (1..=TOTAL_WEEKS)
            .map(|week| WeekCard {
                number: week,
                rows: self
                    .progress
                    .week_tasks(week)
                    .iter()
                    .map(|entry| TaskRow {
                        subject: entry.subject.clone(),
                        topic: entry.topic.clone(),
                        text: entry.text.clone(),
                        completed: entry.completed,
                    })
                    .collect(),
            })
            .collect()
    }

    /// Top three subjects still under the target, worst first.
    pub fn improvement_rows(&self) -> Vec<ImprovementRow> {
        self.progress
            .improvement_ranking(self.curriculum.target_score)
            .into_iter()
            .take(3)
            .map(|(subject, average_score)| ImprovementRow {
                subject,
                average_score,
            })
            .collect()
    }

    pub fn performance_summary(&self) -> PerformanceSummary {
        let stats = self.progress.overall_stats();
        PerformanceSummary {
            total_topics: stats.total_topics,
            completed_topics: stats.completed_topics,
            average_score: stats.average_score,
            target_score: self.curriculum.target_score,
        }
    }

    /// Last three log entries, oldest of the three first.
    pub fn recent_achievements(&self) -> &[Achievement] {
        let log = &self.progress.achievements;
        &log[log.len().saturating_sub(3)..]
    }

    pub fn daily_quote(&self) -> &str {
        data::quote_of_the_day(&self.curriculum)
    }
}

#[cfg(test)]
mod tests {
    use super::super::StudyProgress;
    use super::super::progress::test_curriculum;
    use super::*;
    use crate::model::TopicField;

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
    fn subject_cards_follow_curriculum_order() {
        let mut app = test_app();
        app.commit_field("Science", "Motion", TopicField::CurrentScore, "80");
        let cards = app.subject_cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Mathematics");
        assert_eq!(cards[1].average_score, 80);
        assert_eq!(cards[1].topics_label(), "0/2 topics completed");
    }

    #[test]
    fn week_cards_cover_all_ten_weeks() {
        let mut app = test_app();
        app.commit_weekly_task("Mathematics", "Circles", 3, "Tangents");
        let cards = app.week_cards();
        assert_eq!(cards.len(), 10);
        assert_eq!(cards[3].rows.len(), 1);
        assert_eq!(cards[3].rows[0].topic, "Circles");
        assert!(cards[0].rows.is_empty());
    }

    #[test]
    fn improvement_rows_cap_at_three() {
        let app = test_app();
        // both subjects unscored, both below target
        let rows = app.improvement_rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].subject, "Mathematics");
    }

    #[test]
    fn recent_achievements_window_is_the_last_three() {
        let mut app = test_app();
        for (topic, score) in [("Polynomials", "91"), ("Circles", "92")] {
            app.commit_field("Mathematics", topic, TopicField::CurrentScore, score);
        }
        for (topic, score) in [("Motion", "93"), ("Sound", "94")] {
            app.commit_field("Science", topic, TopicField::CurrentScore, score);
        }
        let recent = app.recent_achievements();
        assert_eq!(recent.len(), 3);
        assert!(recent[0].description.contains("92%"));
        assert!(recent[2].description.contains("94%"));
    }
}
