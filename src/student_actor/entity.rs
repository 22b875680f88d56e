use chrono::Utc;

use crate::actor_framework::Entity;
use crate::domain::{Student, StudentCreate, StudentId};

impl Entity for Student {
    type Id = StudentId;
    type CreatePayload = StudentCreate;
    type Patch = ();
    type Action = ();
    type ActionResult = ();

    const KIND: &'static str = "Student";

    fn id(&self) -> &StudentId {
        &self.id
    }

    fn from_create(id: StudentId, payload: StudentCreate) -> Result<Self, String> {
        Ok(Self {
            id,
            name: payload.name,
            email: payload.email,
            mobile: payload.mobile,
            created_at: Utc::now(),
        })
    }

    /// Emails identify students; the store refuses a second record with the same one.
    fn unique_key(&self) -> Option<&str> {
        Some(self.email.as_str())
    }

    /// Students are never edited after registration.
    fn on_update(&mut self, _patch: ()) -> Result<(), String> {
        Ok(())
    }

    fn handle_action(&mut self, _action: ()) -> Result<(), String> {
        Ok(())
    }
}
