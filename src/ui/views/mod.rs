pub mod analytics;
pub mod dashboard;
pub mod planner;
pub mod subjects;
