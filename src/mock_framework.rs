//! # Mock Framework
//!
//! Utilities for testing clients in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_find`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, Predicate, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

type Responder<R> = oneshot::Sender<Result<R, FrameworkError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// Orchestrating clients such as `OrderClient` are tested against these
/// instead of a running `ResourceActor`: the test reads each request off the
/// receiver, checks it, and answers through the responder, which makes success
/// and failure paths deterministic.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, Responder<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Get request
pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Responder<(T, T::ActionResult)>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Find request.
///
/// The predicate is handed back so the test can check what it matches.
pub async fn expect_find<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(Predicate<T>, Responder<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Find { predicate, respond_to }) => Some((predicate, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Student, StudentCreate};

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client::<Student>(10);

        let create_task = tokio::spawn(async move {
            client.create(StudentCreate::new("Test", "test@example.com", "9876543210")).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        let student = Student {
            id: 1,
            name: payload.name,
            email: payload.email,
            mobile: payload.mobile,
            created_at: chrono::Utc::now(),
        };
        responder.send(Ok(student.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(student));
    }

    #[tokio::test]
    async fn test_mismatched_request_yields_none() {
        let (client, mut receiver) = create_mock_client::<Student>(10);

        tokio::spawn(async move { client.get(3).await });

        assert!(expect_create(&mut receiver).await.is_none());
    }
}
