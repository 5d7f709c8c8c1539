// src/data.rs

use chrono::Datelike;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subject {
    pub name: String,
    pub topics: Vec<String>,
}

/// The fixed curriculum: ordered subjects with ordered topic lists, the
/// target score and the motivational quote pool. Immutable for the
/// process lifetime.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Curriculum {
    pub subjects: Vec<Subject>,
    pub target_score: u32,
    pub motivational_quotes: Vec<String>,
}

impl Curriculum {
    pub fn total_topics(&self) -> usize {
        self.subjects.iter().map(|s| s.topics.len()).sum()
    }
}

/// Loads the curriculum from the embedded YAML
pub fn read_curriculum_embedded() -> Curriculum {
    let file_content = include_str!("data/curriculum.yaml");
    serde_yaml::from_str(file_content).expect("could not parse embedded curriculum YAML")
}

/// Quote for a given day-of-month, wrapping over the pool.
pub fn quote_for_day(curriculum: &Curriculum, day: usize) -> &str {
    let quotes = &curriculum.motivational_quotes;
    if quotes.is_empty() {
        return "";
    }
    &quotes[day % quotes.len()]
}

pub fn quote_of_the_day(curriculum: &Curriculum) -> &str {
    let day = chrono::Local::now().day() as usize;
    quote_for_day(curriculum, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_curriculum_parses_with_expected_shape() {
        let curriculum = read_curriculum_embedded();
        assert_eq!(curriculum.subjects.len(), 5);
        assert_eq!(curriculum.target_score, 90);
        assert_eq!(curriculum.total_topics(), 31);
        assert!(curriculum.subjects.iter().all(|s| !s.topics.is_empty()));
        assert_eq!(curriculum.subjects[0].name, "Mathematics");
    }

    #[test]
    fn quote_for_day_wraps_over_the_pool() {
        let curriculum = read_curriculum_embedded();
        let n = curriculum.motivational_quotes.len();
        assert_eq!(n, 10);
        assert_eq!(quote_for_day(&curriculum, 3), quote_for_day(&curriculum, 3 + n));
        assert!(!quote_for_day(&curriculum, 31).is_empty());
    }
}
