use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::data::Curriculum;
use crate::model::{Achievement, TOTAL_WEEKS, TopicField, TopicRecord, TopicStatus, WeeklyTaskEntry};

#[derive(Serialize, Deserialize, Clone)]
pub struct TopicProgress {
    pub name: String,
    pub record: TopicRecord,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct SubjectProgress {
    pub name: String,
    pub topics: Vec<TopicProgress>,
}

/// The progress store: one record per curriculum topic, the achievement
/// log, and the derived week → tasks index.
///
/// Subjects and topics keep curriculum order. The index is a cache over
/// the records' task arrays; every mutation that touches weekly data
/// rebuilds it, so reads never see a stale grouping.
#[derive(Serialize, Deserialize, Clone)]
pub struct StudyProgress {
    subjects: Vec<SubjectProgress>,
    pub achievements: Vec<Achievement>,
    #[serde(skip)]
    weekly_index: BTreeMap<usize, Vec<WeeklyTaskEntry>>,
}

impl StudyProgress {
    /// One default record per topic. Call once at startup, or on an
    /// explicit user reset; re-calling wipes every edit.
    pub fn new(curriculum: &Curriculum) -> Self {
        let subjects = curriculum
            .subjects
            .iter()
            .map(|subject| SubjectProgress {
                name: subject.name.clone(),
                topics: subject
                    .topics
                    .iter()
                    .map(|topic| TopicProgress {
                        name: topic.clone(),
                        record: TopicRecord::default(),
                    })
                    .collect(),
            })
            .collect();

        let mut progress = Self {
            subjects,
            achievements: Vec::new(),
            weekly_index: BTreeMap::new(),
        };
        progress.rebuild_weekly_index();
        progress
    }

    pub fn subjects(&self) -> &[SubjectProgress] {
        &self.subjects
    }

    fn subject(&self, subject: &str) -> Option<&SubjectProgress> {
        self.subjects.iter().find(|s| s.name == subject)
    }

    pub fn record(&self, subject: &str, topic: &str) -> Option<&TopicRecord> {
        self.subject(subject)?
            .topics
            .iter()
            .find(|t| t.name == topic)
            .map(|t| &t.record)
    }

    fn record_mut(&mut self, subject: &str, topic: &str) -> Option<&mut TopicRecord> {
        self.subjects
            .iter_mut()
            .find(|s| s.name == subject)?
            .topics
            .iter_mut()
            .find(|t| t.name == topic)
            .map(|t| &mut t.record)
    }

    /// Flattened (subject, topic, record) view in curriculum order.
    pub fn records(&self) -> impl Iterator<Item = (&str, &str, &TopicRecord)> {
        self.subjects.iter().flat_map(|s| {
            s.topics
                .iter()
                .map(move |t| (s.name.as_str(), t.name.as_str(), &t.record))
        })
    }

    /// Writes one field from its raw input-boundary string. Scores parse
    /// with unparsable → 0 and clamp to 0..=100; notes are stored
    /// verbatim; an unrecognized status token leaves the record alone.
    /// Unknown subject/topic keys are silently ignored.
    pub fn update_field(&mut self, subject: &str, topic: &str, field: TopicField, raw_value: &str) {
        let Some(record) = self.record_mut(subject, topic) else {
            return;
        };
        match field {
            TopicField::HalfYearlyScore => record.half_yearly_score = parse_score(raw_value),
            TopicField::CurrentScore => record.current_score = parse_score(raw_value),
            TopicField::Status => {
                if let Some(status) = TopicStatus::parse(raw_value.trim()) {
                    record.status = status;
                }
            }
            TopicField::Notes => record.notes = raw_value.to_owned(),
        }
    }

    /// Overwrites a weekly task slot. Rewriting text keeps the slot's
    /// completion flag; blanking the slot clears it, since the flag is
    /// only meaningful while the slot holds a task.
    pub fn set_weekly_task(&mut self, subject: &str, topic: &str, week_idx: usize, text: &str) {
        if week_idx >= TOTAL_WEEKS {
            return;
        }
        let Some(record) = self.record_mut(subject, topic) else {
            return;
        };
        if text.trim().is_empty() {
            record.tasks_completed[week_idx] = false;
        }
        record.weekly_tasks[week_idx] = text.to_owned();
        self.rebuild_weekly_index();
    }

    /// Flips a slot's completion flag, addressed by its stable identifier
    /// (subject, topic, week index). Returns the new flag, or `None` when
    /// the slot is blank or the keys are unknown.
    pub fn toggle_task(&mut self, subject: &str, topic: &str, week_idx: usize) -> Option<bool> {
        if week_idx >= TOTAL_WEEKS {
            return None;
        }
        let record = self.record_mut(subject, topic)?;
        if record.weekly_tasks[week_idx].trim().is_empty() {
            return None;
        }
        record.tasks_completed[week_idx] = !record.tasks_completed[week_idx];
        let completed = record.tasks_completed[week_idx];
        self.rebuild_weekly_index();
        Some(completed)
    }

    /// Rescans every record and regroups non-blank task slots under week
    /// numbers 1..=10.
    pub fn rebuild_weekly_index(&mut self) {
        let mut index: BTreeMap<usize, Vec<WeeklyTaskEntry>> = BTreeMap::new();
        for subject in &self.subjects {
            for topic in &subject.topics {
                for (i, task) in topic.record.weekly_tasks.iter().enumerate() {
                    if task.trim().is_empty() {
                        continue;
                    }
                    index.entry(i + 1).or_default().push(WeeklyTaskEntry {
                        subject: subject.name.clone(),
                        topic: topic.name.clone(),
                        text: task.clone(),
                        completed: topic.record.tasks_completed[i],
                    });
                }
            }
        }
        self.weekly_index = index;
    }

    /// Tasks planned for a week number (1..=10), in curriculum order.
    pub fn week_tasks(&self, week: usize) -> &[WeeklyTaskEntry] {
        self.weekly_index
            .get(&week)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cumulative count of completed task slots across all topics.
    pub fn completed_task_count(&self) -> usize {
        self.records()
            .map(|(_, _, r)| r.tasks_completed.iter().filter(|done| **done).count())
            .sum()
    }
}

fn parse_score(raw: &str) -> u32 {
    raw.trim().parse::<i64>().unwrap_or(0).clamp(0, 100) as u32
}

#[cfg(test)]
pub(crate) fn test_curriculum() -> Curriculum {
    use crate::data::Subject;
    Curriculum {
        subjects: vec![
            Subject {
                name: "Mathematics".to_owned(),
                topics: vec!["Polynomials".to_owned(), "Circles".to_owned()],
            },
            Subject {
                name: "Science".to_owned(),
                topics: vec!["Motion".to_owned(), "Sound".to_owned()],
            },
        ],
        target_score: 90,
        motivational_quotes: vec!["Keep going.".to_owned()],
    }
}
