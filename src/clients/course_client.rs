use tracing::{debug, info, instrument};

use crate::actor_framework::ResourceClient;
use crate::course_actor::{CourseAction, CourseActionResult, CourseCreate, CourseError, CoursePatch};
use crate::domain::{Course, CourseId};

/// Client for interacting with the Course actor.
#[derive(Clone)]
pub struct CourseClient {
    inner: ResourceClient<Course>,
}

impl_basic_client!(CourseClient, Course, CourseError, course);

impl CourseClient {
    /// Courses currently on sale, in creation order.
    #[instrument(skip(self))]
    pub async fn list_courses(&self) -> Result<Vec<Course>, CourseError> {
        debug!("Sending request");
        let active = self.inner.list(Some(Box::new(|course: &Course| course.state.is_active()))).await?;
        Ok(active)
    }

    #[instrument(skip(self, payload), fields(title = %payload.title))]
    pub async fn create_course(&self, payload: CourseCreate) -> Result<Course, CourseError> {
        debug!("Sending request");
        let course = self.inner.create(payload).await?;
        info!(course_id = course.id, "Course created");
        Ok(course)
    }

    #[instrument(skip(self))]
    pub async fn update_course(&self, id: CourseId, patch: CoursePatch) -> Result<Course, CourseError> {
        debug!("Sending request");
        Ok(self.inner.update(id, patch).await?)
    }

    /// Soft delete: the course disappears from the catalog but stays resolvable by id.
    #[instrument(skip(self))]
    pub async fn deactivate_course(&self, id: CourseId) -> Result<Course, CourseError> {
        debug!("Sending request");
        let (course, CourseActionResult::Deactivated(previous)) =
            self.inner.perform_action(id, CourseAction::Deactivate).await?;
        info!(?previous, "Course withdrawn from catalog");
        Ok(course)
    }

    /// Looks up a course that can still be bought; withdrawn courses count as missing.
    #[instrument(skip(self))]
    pub async fn get_active_course(&self, id: CourseId) -> Result<Course, CourseError> {
        let course = self.get_course(id).await?;
        if course.state.is_active() {
            Ok(course)
        } else {
            Err(CourseError::NotFound(id.to_string()))
        }
    }
}
