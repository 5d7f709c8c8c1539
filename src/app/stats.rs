use rand::Rng;

use super::progress::StudyProgress;
use crate::model::{TOTAL_WEEKS, TopicRecord, TopicStatus};

/// Aggregate counters over a set of topic records. `average_score` only
/// counts topics that have been scored at all (current score > 0).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressStats {
    pub total_topics: usize,
    pub completed_topics: usize,
    pub pending_topics: usize,
    pub overall_progress: u32,
    pub average_score: u32,
}

impl StudyProgress {
    pub fn overall_stats(&self) -> ProgressStats {
        stats_over(self.records().map(|(_, _, record)| record))
    }

    /// Same shape as `overall_stats`, scoped to one subject. Zeros for an
    /// unknown subject.
    pub fn subject_stats(&self, subject: &str) -> ProgressStats {
        let Some(subject) = self.subjects().iter().find(|s| s.name == subject) else {
            return ProgressStats::default();
        };
        stats_over(subject.topics.iter().map(|t| &t.record))
    }

    /// Subjects averaging below `target`, worst first. The sort is stable,
    /// so equal averages keep curriculum order.
    pub fn improvement_ranking(&self, target: u32) -> Vec<(String, u32)> {
        let mut ranking: Vec<(String, u32)> = self
            .subjects()
            .iter()
            .map(|s| (s.name.clone(), self.subject_stats(&s.name).average_score))
            .filter(|(_, average)| *average < target)
            .collect();
        ranking.sort_by_key(|(_, average)| *average);
        ranking
    }

    /// Ten-point growth curve ending at the current overall progress, with
    /// bounded random jitter on the interior points. This is a display
    /// fabrication for the analytics chart: the store keeps no history,
    /// so there is nothing real to plot.
    pub fn synthetic_progress_series(&self) -> Vec<u32> {
        let current = self.overall_stats().overall_progress;
        let mut rng = rand::rng();
        let mut series = Vec::with_capacity(TOTAL_WEEKS);
        for i in 0..TOTAL_WEEKS {
            let mut point = (current as f32 * (i + 1) as f32 / TOTAL_WEEKS as f32).min(100.0);
            if i > 0 {
                point += (rng.random::<f32>() - 0.5) * 5.0;
                point = point.clamp(0.0, 100.0);
            }
            series.push(point.round() as u32);
        }
        series[TOTAL_WEEKS - 1] = current;
        series
    }
}

fn stats_over<'a>(records: impl Iterator<Item = &'a TopicRecord>) -> ProgressStats {
    let mut total_topics = 0;
    let mut completed_topics = 0;
    let mut total_score = 0u32;
    let mut scored_topics = 0u32;

    for record in records {
        total_topics += 1;
        if record.status == TopicStatus::Completed {
            completed_topics += 1;
        }
        if record.current_score > 0 {
            total_score += record.current_score;
            scored_topics += 1;
        }
    }

    let overall_progress = if total_topics > 0 {
        (completed_topics as f32 / total_topics as f32 * 100.0).round() as u32
    } else {
        0
    };
    let average_score = if scored_topics > 0 {
        (total_score as f32 / scored_topics as f32).round() as u32
    } else {
        0
    };

    ProgressStats {
        total_topics,
        completed_topics,
        pending_topics: total_topics - completed_topics,
        overall_progress,
        average_score,
    }
}
