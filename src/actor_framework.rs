use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and Payloads)
// =============================================================================

/// Ids handed out by a [`ResourceActor`], one after another.
pub trait SequentialId: Copy + Ord + Display + Debug + Send + Sync + 'static {
    /// Id used when the store is empty.
    fn first() -> Self;
    fn successor(self) -> Self;
}

impl SequentialId for u64 {
    fn first() -> Self {
        1
    }

    fn successor(self) -> Self {
        self + 1
    }
}

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: SequentialId;
    type CreatePayload: Send + Sync + Debug;

    /// Name used in log fields.
    const KIND: &'static str;

    fn id(&self) -> Self::Id;

    /// Construct the full Entity from the ID and Payload
    fn from_create(id: Self::Id, payload: Self::CreatePayload) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> {
        Ok(())
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped")]
    ActorDropped,
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        payload: T::CreatePayload,
        respond_to: Response<T>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    #[cfg(test)]
    Count {
        respond_to: Response<usize>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// Owns the ordered store. Every mutation runs inside `run`, one message at a
/// time, so id assignment and append never interleave.
pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: Vec<T>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: Vec::new(),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Runs each seed payload through the regular create path.
    pub fn with_seed(
        buffer_size: usize,
        seed: impl IntoIterator<Item = T::CreatePayload>,
    ) -> Result<(Self, ResourceClient<T>), FrameworkError> {
        let (mut actor, client) = Self::new(buffer_size);
        for payload in seed {
            actor.insert(payload)?;
        }
        Ok((actor, client))
    }

    #[instrument(name = "resource_actor", fields(kind = T::KIND), skip(self))]
    pub async fn run(mut self) {
        info!(seeded = self.store.len(), "Actor starting");
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { payload, respond_to } => {
                    let _ = respond_to.send(self.insert(payload));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(count = self.store.len(), "Listing entities");
                    let _ = respond_to.send(Ok(self.store.clone()));
                }
                #[cfg(test)]
                ResourceRequest::Count { respond_to } => {
                    let _ = respond_to.send(Ok(self.store.len()));
                }
            }
        }
        info!("Actor stopped");
    }

    fn next_id(&self) -> T::Id {
        self.store
            .iter()
            .map(T::id)
            .max()
            .map_or_else(T::Id::first, SequentialId::successor)
    }

    fn insert(&mut self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let id = self.next_id();
        let mut item = T::from_create(id, payload).map_err(FrameworkError::Rejected)?;
        if let Err(e) = item.on_create() {
            warn!(%id, error = %e, "Create rejected by entity hook");
            return Err(FrameworkError::Rejected(e));
        }
        self.store.push(item.clone());
        debug!(%id, "Entity created");
        Ok(item)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, payload: T::CreatePayload) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { payload, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    #[cfg(test)]
    pub async fn count(&self) -> Result<usize, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Count { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u64,
        label: String,
    }

    impl Entity for Tag {
        type Id = u64;
        type CreatePayload = String;

        const KIND: &'static str = "tag";

        fn id(&self) -> u64 {
            self.id
        }

        fn from_create(id: u64, label: String) -> Result<Self, String> {
            if label.is_empty() {
                return Err("label is required".to_string());
            }
            Ok(Self { id, label })
        }

        fn on_create(&mut self) -> Result<(), String> {
            if self.label == "reserved" {
                Err("label is reserved".to_string())
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_empty_store_starts_at_first_id() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        let tag = client.create("a".to_string()).await.unwrap();
        assert_eq!(tag.id, 1);
        let tag = client.create("b".to_string()).await.unwrap();
        assert_eq!(tag.id, 2);
    }

    #[tokio::test]
    async fn test_seed_continues_after_max_id() {
        let seed = vec!["x".to_string(), "y".to_string()];
        let (actor, client) = ResourceActor::<Tag>::with_seed(10, seed).unwrap();
        tokio::spawn(actor.run());

        let tag = client.create("z".to_string()).await.unwrap();
        assert_eq!(tag.id, 3);

        let labels: Vec<String> = client.list().await.unwrap().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_rejected_seed_fails() {
        let seed = vec!["ok".to_string(), String::new()];
        let result = ResourceActor::<Tag>::with_seed(10, seed);
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));
    }

    #[tokio::test]
    async fn test_rejections_leave_store_untouched() {
        let (actor, client) = ResourceActor::<Tag>::new(10);
        tokio::spawn(actor.run());

        let err = client.create(String::new()).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("label is required".to_string()));

        let err = client.create("reserved".to_string()).await.unwrap_err();
        assert_eq!(err, FrameworkError::Rejected("label is reserved".to_string()));

        assert_eq!(client.count().await.unwrap(), 0);
        // A rejected create does not burn an id.
        assert_eq!(client.create("a".to_string()).await.unwrap().id, 1);
    }

    #[tokio::test]
    async fn test_concurrent_creates_never_share_an_id() {
        let (actor, client) = ResourceActor::<Tag>::new(4);
        tokio::spawn(actor.run());

        let tasks: Vec<_> = (0..50)
            .map(|i| {
                let client = client.clone();
                tokio::spawn(async move { client.create(format!("tag_{i}")).await })
            })
            .collect();

        let mut ids = Vec::new();
        for task in tasks {
            ids.push(task.await.unwrap().unwrap().id);
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=50).collect::<Vec<u64>>());

        let listed: Vec<u64> = client.list().await.unwrap().iter().map(Tag::id).collect();
        assert_eq!(listed.len(), 50);
        assert!(listed.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn test_closed_actor_reports_error() {
        let (actor, client) = ResourceActor::<Tag>::new(1);
        drop(actor);

        assert_eq!(client.list().await.unwrap_err(), FrameworkError::ActorClosed);
    }
}
