use tracing::{debug, info, instrument, warn};

use crate::actor_framework::ResourceClient;
use crate::domain::{Student, StudentCreate};
use crate::student_actor::StudentError;

/// Client for interacting with the Student actor.
#[derive(Clone)]
pub struct StudentClient {
    inner: ResourceClient<Student>,
}

impl_basic_client!(StudentClient, Student, StudentError, student);

impl StudentClient {
    #[instrument(skip(self))]
    pub async fn list_students(&self) -> Result<Vec<Student>, StudentError> {
        debug!("Sending request");
        Ok(self.inner.list(None).await?)
    }

    /// Linear scan for the first student registered under `email`.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Student>, StudentError> {
        debug!("Sending request");
        let email = email.to_string();
        Ok(self.inner.find(Box::new(move |student: &Student| student.email == email)).await?)
    }

    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn create_student(&self, payload: StudentCreate) -> Result<Student, StudentError> {
        debug!("Sending request");
        let student = self.inner.create(payload).await?;
        info!(student_id = student.id, "Student registered");
        Ok(student)
    }

    /// Returns the student registered under the payload's email, registering one if needed.
    ///
    /// Lookup and create are separate store calls. When a concurrent caller wins
    /// the create, the store reports a conflict and the winner is looked up again.
    #[instrument(skip(self, payload), fields(email = %payload.email))]
    pub async fn find_or_create(&self, payload: StudentCreate) -> Result<Student, StudentError> {
        if let Some(existing) = self.find_by_email(&payload.email).await? {
            debug!(student_id = existing.id, "Student already registered");
            return Ok(existing);
        }

        let email = payload.email.clone();
        match self.create_student(payload).await {
            Err(StudentError::AlreadyExists(_)) => {
                warn!("Lost registration race, re-reading student");
                self.find_by_email(&email).await?.ok_or(StudentError::NotFound(email))
            }
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_framework::{create_mock_client, expect_create, expect_find};

    #[tokio::test]
    async fn test_find_or_create_rereads_after_conflict() {
        let (inner, mut rx) = create_mock_client::<Student>(10);
        let client = StudentClient::new(inner);

        let task = tokio::spawn(async move {
            client.find_or_create(StudentCreate::new("A", "a@x.com", "9999999999")).await
        });

        let (_, responder) = expect_find(&mut rx).await.expect("Expected Student Find");
        responder.send(Ok(None)).unwrap();

        let (payload, responder) = expect_create(&mut rx).await.expect("Expected Student Create");
        assert_eq!(payload.email, "a@x.com");
        responder
            .send(Err(crate::actor_framework::FrameworkError::Conflict {
                kind: "Student",
                key: "a@x.com".to_string(),
            }))
            .unwrap();

        let (predicate, responder) = expect_find(&mut rx).await.expect("Expected second Find");
        let winner = Student {
            id: 4,
            name: "Other tab".to_string(),
            email: "a@x.com".to_string(),
            mobile: "9999999999".to_string(),
            created_at: chrono::Utc::now(),
        };
        assert!(predicate(&winner));
        responder.send(Ok(Some(winner))).unwrap();

        let student = task.await.unwrap().unwrap();
        assert_eq!(student.id, 4);
    }
}
