//! Generic resource actor used by the mock backends.
//!
//! A [`ResourceActor`] owns a keyed collection of one [`Entity`] type and
//! serves requests from its mailbox one at a time. Callers talk to it through
//! a cloneable [`ResourceClient`].

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Debug + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;

    type Action: Send + Sync + Debug;
    type ActionResult: Send + Sync + Debug;

    /// Name used in log fields and error messages.
    const KIND: &'static str;

    fn id(&self) -> &Self::Id;

    /// Construct the full entity from a freshly generated id and the create params.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Apply a domain-specific action. An `Err` leaves the stored entity as it was.
    fn handle_action(&mut self, action: Self::Action) -> Result<Self::ActionResult, String>;
}

/// Failures of the actor plumbing itself, independent of the domain.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Request rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
    Shutdown,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // Creation order, so listings are stable between writes.
    order: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Preloads entities before the actor starts serving. Later duplicates of an id replace
    /// the earlier entry in place.
    pub fn with_entities(mut self, entities: impl IntoIterator<Item = T>) -> Self {
        for entity in entities {
            self.insert(entity);
        }
        self
    }

    fn insert(&mut self, entity: T) {
        let id = entity.id().clone();
        if self.store.insert(id.clone(), entity).is_none() {
            self.order.push(id);
        }
    }

    pub async fn run(mut self) {
        info!(kind = T::KIND, entities = self.store.len(), "ResourceActor starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let id = (self.next_id_fn)();
                    let result = T::from_create_params(id, params)
                        .map(|item| {
                            self.insert(item.clone());
                            debug!(kind = T::KIND, id = %item.id(), "Entity created");
                            item
                        })
                        .map_err(FrameworkError::Rejected);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let _ = respond_to.send(Ok(self.store.get(&id).cloned()));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = match self.store.get_mut(&id) {
                        Some(item) => {
                            // Work on a copy so a failed action never half-applies.
                            let mut draft = item.clone();
                            match draft.handle_action(action) {
                                Ok(outcome) => {
                                    *item = draft;
                                    Ok(outcome)
                                }
                                Err(e) => Err(FrameworkError::Rejected(e)),
                            }
                        }
                        None => {
                            warn!(kind = T::KIND, id = %id, "Action on unknown entity");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Shutdown => {
                    info!(kind = T::KIND, "ResourceActor shutting down");
                    break;
                }
            }
        }

        info!(kind = T::KIND, "ResourceActor stopped");
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

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }

    pub async fn shutdown(&self) -> Result<(), FrameworkError> {
        self.sender
            .send(ResourceRequest::Shutdown)
            .await
            .map_err(|_| FrameworkError::ActorClosed)
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        value: u32,
    }

    #[derive(Debug)]
    enum CounterAction {
        Increment,
        FailAfterBump,
    }

    impl Entity for Counter {
        type Id = String;
        type CreateParams = u32;
        type Action = CounterAction;
        type ActionResult = u32;

        const KIND: &'static str = "counter";

        fn id(&self) -> &String {
            &self.id
        }

        fn from_create_params(id: String, start: u32) -> Result<Self, String> {
            if start > 100 {
                return Err(format!("start too large: {}", start));
            }
            Ok(Self { id, value: start })
        }

        fn handle_action(&mut self, action: CounterAction) -> Result<u32, String> {
            match action {
                CounterAction::Increment => {
                    self.value += 1;
                    Ok(self.value)
                }
                CounterAction::FailAfterBump => {
                    self.value += 1000;
                    Err("refused".to_string())
                }
            }
        }
    }

    fn spawn_counters() -> ResourceClient<Counter> {
        let seq = Arc::new(AtomicU64::new(1));
        let next_id = move || format!("counter_{}", seq.fetch_add(1, Ordering::SeqCst));
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    #[tokio::test]
    async fn test_create_list_and_act() {
        let client = spawn_counters();

        let first = client.create(1).await.unwrap();
        let second = client.create(5).await.unwrap();
        assert_eq!(first.id, "counter_1");

        let value = client
            .perform_action(second.id.clone(), CounterAction::Increment)
            .await
            .unwrap();
        assert_eq!(value, 6);

        let all = client.list().await.unwrap();
        let ids: Vec<_> = all.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["counter_1", "counter_2"]);
    }

    #[tokio::test]
    async fn test_failed_action_does_not_mutate() {
        let client = spawn_counters();
        let counter = client.create(3).await.unwrap();

        let result = client
            .perform_action(counter.id.clone(), CounterAction::FailAfterBump)
            .await;
        assert_eq!(result, Err(FrameworkError::Rejected("refused".to_string())));

        let stored = client.get(counter.id).await.unwrap().unwrap();
        assert_eq!(stored.value, 3);
    }

    #[tokio::test]
    async fn test_unknown_id_and_rejected_create() {
        let client = spawn_counters();

        let result = client
            .perform_action("missing".to_string(), CounterAction::Increment)
            .await;
        assert_eq!(result, Err(FrameworkError::NotFound("missing".to_string())));

        assert!(matches!(client.create(500).await, Err(FrameworkError::Rejected(_))));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_closes_the_mailbox() {
        let client = spawn_counters();
        client.shutdown().await.unwrap();
        tokio::task::yield_now().await;

        let result = client.list().await;
        assert!(matches!(
            result,
            Err(FrameworkError::ActorClosed) | Err(FrameworkError::ActorDropped)
        ));
    }
}
