use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Course, CourseId, CourseState};
use super::actions::{CourseAction, CourseActionResult};
use super::dtos::{CourseCreate, CoursePatch};

impl Entity for Course {
    type Id = CourseId;
    type CreatePayload = CourseCreate;
    type Patch = CoursePatch;
    type Action = CourseAction;
    type ActionResult = CourseActionResult;

    const KIND: &'static str = "Course";

    fn id(&self) -> &CourseId {
        &self.id
    }

    /// Creates a new Course, stamping the creation time.
    fn from_create(id: CourseId, payload: CourseCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            title: payload.title,
            description: payload.description,
            price: payload.price,
            original_price: payload.original_price,
            duration: payload.duration,
            level: payload.level,
            features: payload.features,
            state: payload.state,
            created_at: Utc::now(),
        })
    }

    /// Merges every field present in the patch; `id` and `created_at` never change.
    fn on_update(&mut self, patch: CoursePatch) -> Result<(), String> {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(original_price) = patch.original_price {
            self.original_price = original_price;
        }
        if let Some(duration) = patch.duration {
            self.duration = duration;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(features) = patch.features {
            self.features = features;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        Ok(())
    }

    fn handle_action(&mut self, action: CourseAction) -> Result<CourseActionResult, String> {
        match action {
            CourseAction::Deactivate => {
                let previous = self.state;
                self.state = CourseState::Inactive;
                Ok(CourseActionResult::Deactivated(previous))
            }
        }
    }
}
