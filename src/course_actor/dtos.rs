// DTOs for Course
use crate::domain::CourseState;

#[derive(Debug, Clone, PartialEq)]
pub struct CourseCreate {
    pub title: String,
    pub description: String,
    pub price: u32,
    pub original_price: u32,
    pub duration: String,
    pub level: String,
    pub features: Vec<String>,
    pub state: CourseState,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<u32>,
    pub original_price: Option<u32>,
    pub duration: Option<String>,
    pub level: Option<String>,
    pub features: Option<Vec<String>>,
    pub state: Option<CourseState>,
}
