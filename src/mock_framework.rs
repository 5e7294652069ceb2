//! # Mock Framework
//!
//! Utilities for testing clients and handlers in isolation.
//!
//! Use [`create_mock_client`] to get a client and a receiver.
//! Then use helpers like [`expect_create`] or [`expect_list`] to assert behavior.

use crate::actor_framework::{Entity, FrameworkError, ResourceClient, ResourceRequest};
use tokio::sync::{mpsc, oneshot};

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads requests off `receiver` and answers
/// (or drops) the responder, so success and failure paths are deterministic.
pub fn create_mock_client<T: Entity>(buffer_size: usize) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreatePayload, oneshot::Sender<Result<T, FrameworkError>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { payload, respond_to }) => Some((payload, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a List request
pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<oneshot::Sender<Result<Vec<T>, FrameworkError>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::UserClient;
    use crate::domain::{User, UserCreate};
    use crate::user_actor::UserError;

    #[tokio::test]
    async fn test_mock_client() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let create_task = tokio::spawn(async move {
            client.create_user(UserCreate::new("Test", "test@example.com")).await
        });

        let (payload, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(payload.name, "Test");
        let user = User { id: 9, name: payload.name, email: payload.email };
        responder.send(Ok(user.clone())).unwrap();

        let result = create_task.await.unwrap();
        assert_eq!(result, Ok(user));
    }

    #[tokio::test]
    async fn test_dropped_responder_surfaces_as_communication_error() {
        let (inner, mut receiver) = create_mock_client::<User>(10);
        let client = UserClient::new(inner);

        let list_task = tokio::spawn(async move { client.list_users().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        drop(responder);

        let result = list_task.await.unwrap();
        assert_eq!(result, Err(UserError::ActorCommunicationError("Actor dropped".to_string())));
    }
}
