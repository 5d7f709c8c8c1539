use log::info;

use super::progress::StudyProgress;
use crate::model::{Achievement, AchievementKind, TopicStatus};

/// How many completed weekly task slots earn the task-warrior badge.
const TASK_WARRIOR_COUNT: usize = 10;

impl StudyProgress {
    /// Evaluates the score/status achievement predicates after a mutation
    /// of `(subject, topic)`. `score` is set when the mutation was a score
    /// commit. New firings are appended to the log and returned so the
    /// caller can raise the one-shot notifications.
    pub fn check_achievements(
        &mut self,
        subject: &str,
        topic: &str,
        score: Option<u32>,
    ) -> Vec<Achievement> {
        let mut fired = Vec::new();
        let status = match self.record(subject, topic) {
            Some(record) => record.status,
            None => return fired,
        };

        // First topic ever completed, once.
        if status == TopicStatus::Completed && !self.has_achievement(AchievementKind::FirstCompletion)
        {
            fired.push(Achievement {
                kind: AchievementKind::FirstCompletion,
                emoji: "🎉".to_owned(),
                title: "First Steps!".to_owned(),
                description: format!("Completed your first topic: {topic}"),
                subject: None,
            });
        }

        // Repeatable on every score commit reaching the 90 bar.
        if let Some(score) = score.filter(|s| *s >= 90) {
            fired.push(Achievement {
                kind: AchievementKind::HighScore,
                emoji: "⭐".to_owned(),
                title: "Excellence!".to_owned(),
                description: format!("Scored {score}% in {topic}!"),
                subject: None,
            });
        }

        // Whole subject completed, once per subject.
        if self.is_subject_completed(subject) && !self.has_subject_mastery(subject) {
            fired.push(Achievement {
                kind: AchievementKind::SubjectMastery,
                emoji: "🏆".to_owned(),
                title: "Subject Master!".to_owned(),
                description: format!("Completed all topics in {subject}!"),
                subject: Some(subject.to_owned()),
            });
        }

        for achievement in &fired {
            info!("achievement unlocked: {}", achievement.title);
        }
        self.achievements.extend(fired.iter().cloned());
        fired
    }

    /// Evaluated after a task slot flips to completed: ten cumulative
    /// completed slots earn the badge, once.
    pub fn check_task_achievements(&mut self) -> Option<Achievement> {
        if self.completed_task_count() < TASK_WARRIOR_COUNT
            || self.has_achievement(AchievementKind::TaskWarrior)
        {
            return None;
        }
        let achievement = Achievement {
            kind: AchievementKind::TaskWarrior,
            emoji: "💪".to_owned(),
            title: "Task Warrior!".to_owned(),
            description: "Completed 10 weekly tasks!".to_owned(),
            subject: None,
        };
        info!("achievement unlocked: {}", achievement.title);
        self.achievements.push(achievement.clone());
        Some(achievement)
    }

    fn has_achievement(&self, kind: AchievementKind) -> bool {
        self.achievements.iter().any(|a| a.kind == kind)
    }

    fn has_subject_mastery(&self, subject: &str) -> bool {
        self.achievements.iter().any(|a| {
            a.kind == AchievementKind::SubjectMastery && a.subject.as_deref() == Some(subject)
        })
    }

    fn is_subject_completed(&self, subject: &str) -> bool {
        self.subjects()
            .iter()
            .find(|s| s.name == subject)
            .is_some_and(|s| {
                s.topics
                    .iter()
                    .all(|t| t.record.status == TopicStatus::Completed)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::super::progress::test_curriculum;
    use super::*;
    use crate::model::TopicField;

    fn complete(progress: &mut StudyProgress, subject: &str, topic: &str) -> Vec<Achievement> {
        progress.update_field(subject, topic, TopicField::Status, "completed");
        progress.check_achievements(subject, topic, None)
    }

    #[test]
    fn first_completion_fires_exactly_once() {
        let mut progress = StudyProgress::new(&test_curriculum());
        let fired = complete(&mut progress, "Mathematics", "Polynomials");
        assert!(
            fired
                .iter()
                .any(|a| a.kind == AchievementKind::FirstCompletion)
        );

        let fired = complete(&mut progress, "Science", "Motion");
        assert!(
            !fired
                .iter()
                .any(|a| a.kind == AchievementKind::FirstCompletion)
        );
    }

    #[test]
    fn high_score_repeats_across_topics() {
        let mut progress = StudyProgress::new(&test_curriculum());
        progress.update_field("Mathematics", "Circles", TopicField::CurrentScore, "92");
        let first = progress.check_achievements("Mathematics", "Circles", Some(92));
        progress.update_field("Science", "Sound", TopicField::CurrentScore, "95");
        let second = progress.check_achievements("Science", "Sound", Some(95));

        assert_eq!(first.len(), 1);
        assert_eq!(second.len(), 1);
        assert!(second[0].description.contains("95%"));

        // below the bar: nothing fires
        progress.update_field("Science", "Motion", TopicField::CurrentScore, "89");
        assert!(
            progress
                .check_achievements("Science", "Motion", Some(89))
                .is_empty()
        );
    }

    #[test]
    fn subject_mastery_fires_once_per_subject() {
        let mut progress = StudyProgress::new(&test_curriculum());
        complete(&mut progress, "Mathematics", "Polynomials");
        let fired = complete(&mut progress, "Mathematics", "Circles");
        let mastery: Vec<_> = fired
            .iter()
            .filter(|a| a.kind == AchievementKind::SubjectMastery)
            .collect();
        assert_eq!(mastery.len(), 1);
        assert_eq!(mastery[0].subject.as_deref(), Some("Mathematics"));

        // further edits to the mastered subject never fire a second one
        let fired = complete(&mut progress, "Mathematics", "Circles");
        assert!(
            !fired
                .iter()
                .any(|a| a.kind == AchievementKind::SubjectMastery)
        );

        // a different subject still earns its own
        complete(&mut progress, "Science", "Motion");
        let fired = complete(&mut progress, "Science", "Sound");
        assert!(
            fired
                .iter()
                .any(|a| a.kind == AchievementKind::SubjectMastery
                    && a.subject.as_deref() == Some("Science"))
        );
    }

    #[test]
    fn task_warrior_fires_once_at_ten_completed_slots() {
        let mut progress = StudyProgress::new(&test_curriculum());
        // spread eleven tasks over topics and weeks
        let slots: [(&str, &str, usize); 11] = [
            ("Mathematics", "Polynomials", 0),
            ("Mathematics", "Polynomials", 1),
            ("Mathematics", "Polynomials", 2),
            ("Mathematics", "Circles", 0),
            ("Mathematics", "Circles", 1),
            ("Science", "Motion", 0),
            ("Science", "Motion", 1),
            ("Science", "Motion", 2),
            ("Science", "Sound", 0),
            ("Science", "Sound", 1),
            ("Science", "Sound", 2),
        ];
        for (subject, topic, week) in slots {
            progress.set_weekly_task(subject, topic, week, "task");
        }

        let mut firings = 0;
        for (i, (subject, topic, week)) in slots.iter().enumerate() {
            assert_eq!(progress.toggle_task(subject, topic, *week), Some(true));
            let fired = progress.check_task_achievements();
            if i + 1 == 10 {
                assert!(fired.is_some(), "tenth completion must fire");
            } else {
                assert!(fired.is_none(), "completion {} must not fire", i + 1);
            }
            firings += usize::from(fired.is_some());
        }
        assert_eq!(firings, 1);
    }
}
