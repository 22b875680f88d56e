use crate::domain::CourseState;

/// Custom actions for Course entities.
#[derive(Debug, Clone)]
pub enum CourseAction {
    /// Withdraws the course from the catalog without removing the record.
    Deactivate,
}

/// Results from CourseActions - variants match 1:1 with CourseAction
#[derive(Debug, Clone, PartialEq)]
pub enum CourseActionResult {
    /// Result from Deactivate - carries the state the course had before
    Deactivated(CourseState),
}
