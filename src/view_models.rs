// src/view_models.rs

/// Traffic-light band for a score against the 90 target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn for_score(score: u32) -> Self {
        if score >= 90 {
            ScoreBand::High
        } else if score >= 75 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubjectCard {
    pub idx: usize, // index into curriculum.subjects
    pub name: String,
    pub average_score: u32,
    pub progress: u32,
    pub completed_topics: usize,
    pub total_topics: usize,
}

impl SubjectCard {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::for_score(self.average_score)
    }

    pub fn topics_label(&self) -> String {
        format!(
            "{}/{} topics completed",
            self.completed_topics, self.total_topics
        )
    }
}

#[derive(Clone, Debug)]
pub struct TaskRow {
    pub subject: String,
    pub topic: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Clone, Debug)]
pub struct WeekCard {
    pub number: usize, // 1..=10
    pub rows: Vec<TaskRow>,
}

impl WeekCard {
    pub fn completed(&self) -> usize {
        self.rows.iter().filter(|r| r.completed).count()
    }

    pub fn percent(&self) -> u32 {
        if self.rows.is_empty() {
            return 0;
        }
        (self.completed() as f32 / self.rows.len() as f32 * 100.0).round() as u32
    }

    pub fn header_label(&self) -> String {
        format!(
            "Week {} ({}/{} completed - {}%)",
            self.number,
            self.completed(),
            self.rows.len(),
            self.percent()
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ImprovementRow {
    pub subject: String,
    pub average_score: u32,
}

#[derive(Clone, Copy, Debug)]
pub struct PerformanceSummary {
    pub total_topics: usize,
    pub completed_topics: usize,
    pub average_score: u32,
    pub target_score: u32,
}

impl PerformanceSummary {
    pub fn target_met(&self) -> bool {
        self.average_score >= self.target_score
    }

    pub fn target_status_label(&self) -> String {
        if self.target_met() {
            "Target Achieved! 🎯".to_owned()
        } else {
            format!("Need {}% more", self.target_score - self.average_score)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn score_bands_split_at_75_and_90() {
        assert_eq!(ScoreBand::for_score(90), ScoreBand::High);
        assert_eq!(ScoreBand::for_score(89), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(75), ScoreBand::Medium);
        assert_eq!(ScoreBand::for_score(74), ScoreBand::Low);
    }

    #[test]
    fn week_card_header_counts_completed_rows() {
        let card = WeekCard {
            number: 3,
            rows: vec![
                TaskRow {
                    subject: "Science".to_owned(),
                    topic: "Motion".to_owned(),
                    text: "Graphs".to_owned(),
                    completed: true,
                },
                TaskRow {
                    subject: "Science".to_owned(),
                    topic: "Sound".to_owned(),
                    text: "Echo".to_owned(),
                    completed: false,
                },
                TaskRow {
                    subject: "Hindi".to_owned(),
                    topic: "Vasant".to_owned(),
                    text: "Reading".to_owned(),
                    completed: false,
                },
            ],
        };
        assert_eq!(card.percent(), 33);
        assert_eq!(card.header_label(), "Week 3 (1/3 completed - 33%)");

        let empty = WeekCard {
            number: 7,
            rows: Vec::new(),
        };
        assert_eq!(empty.percent(), 0);
    }

    #[test]
    fn target_status_label_reports_the_gap() {
        let summary = PerformanceSummary {
            total_topics: 4,
            completed_topics: 1,
            average_score: 82,
            target_score: 90,
        };
        assert_eq!(summary.target_status_label(), "Need 8% more");

        let met = PerformanceSummary {
            average_score: 93,
            ..summary
        };
        assert!(met.target_met());
    }
}
