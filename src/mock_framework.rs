//! # Mock Framework
//!
//! Stand-ins for a running [`ResourceActor`](crate::actor_framework::ResourceActor)
//! when testing client wrappers.
//!
//! [`create_mock_client`] hands back a client plus the receiving end of its
//! mailbox. The test then plays the actor: pull the next request with one of
//! the `expect_*` helpers, assert on it, and answer through the responder.

use tokio::sync::mpsc;

use crate::actor_framework::{Entity, ResourceClient, ResourceRequest, Response};

pub fn create_mock_client<T: Entity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Next request must be a Create; returns its params and responder.
pub async fn expect_create<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::CreateParams, Response<T>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

pub async fn expect_get<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, Response<Option<T>>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Get { id, respond_to }) => Some((id, respond_to)),
        _ => None,
    }
}

pub async fn expect_list<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<Response<Vec<T>>> {
    match receiver.recv().await {
        Some(ResourceRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Next request must be an Action; returns the target id, the action, and the responder.
pub async fn expect_action<T: Entity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(T::Id, T::Action, Response<T::ActionResult>)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action { id, action, respond_to }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actor_framework::FrameworkError;
    use crate::domain::{FoodItem, FoodItemCreate};
    use rust_decimal::Decimal;

    #[tokio::test]
    async fn test_mock_client_round_trip() {
        let (client, mut receiver) = create_mock_client::<FoodItem>(10);

        let create_task = tokio::spawn(async move {
            let dish = FoodItemCreate {
                name: "Pad Thai".to_string(),
                description: String::new(),
                price: Decimal::new(1150, 2),
                image: String::new(),
                category: "Asian".to_string(),
                rating: 4.2,
                is_veg: false,
            };
            client.create(dish).await
        });

        let (params, responder) = expect_create(&mut receiver).await.expect("Expected Create request");
        assert_eq!(params.name, "Pad Thai");
        let created = FoodItem::new("9", params.name, params.category, params.price);
        responder.send(Ok(created.clone())).unwrap();

        assert_eq!(create_task.await.unwrap(), Ok(created));
    }

    #[tokio::test]
    async fn test_mock_client_forwards_errors() {
        let (client, mut receiver) = create_mock_client::<FoodItem>(10);

        let get_task = tokio::spawn(async move { client.get("42".to_string()).await });

        let (id, responder) = expect_get(&mut receiver).await.expect("Expected Get request");
        assert_eq!(id, "42");
        responder.send(Err(FrameworkError::NotFound(id))).unwrap();

        assert_eq!(
            get_task.await.unwrap(),
            Err(FrameworkError::NotFound("42".to_string()))
        );
    }
}
