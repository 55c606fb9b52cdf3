use actor_framework::QueuePolicy;
use order_service::lifecycle::{OrderSystem, SystemSettings};
use order_service::model::{MenuItemId, OrderId, OrderStatus};
use order_service::order_actor::{OrderActionResult, OrderError};
use std::time::Duration;

fn settings(queue_policy: QueuePolicy) -> SystemSettings {
    SystemSettings {
        // Long enough that the advancer never fires during these tests.
        advance_interval: Duration::from_secs(3600),
        queue_policy,
    }
}

/// Pizza + Burger, fetched back, then advanced once.
#[tokio::test]
async fn test_full_order_system_integration() {
    let system = OrderSystem::new(settings(QueuePolicy::OneShot));

    let order = system
        .order_client
        .place_order(vec![MenuItemId(1), MenuItemId(2)])
        .await
        .expect("Failed to place order");
    assert_eq!(order.id, OrderId(1));
    assert_eq!(order.total, 15.0);
    assert_eq!(order.status, OrderStatus::Pending);
    let names: Vec<_> = order.items.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Pizza", "Burger"]);

    let fetched = system
        .order_client
        .order(OrderId(1))
        .await
        .expect("Failed to get order");
    assert_eq!(fetched, order);

    let advanced = system
        .order_client
        .advance_next()
        .await
        .expect("Failed to advance");
    assert_eq!(
        advanced,
        Some((
            OrderId(1),
            OrderActionResult::Advanced {
                from: OrderStatus::Pending,
                to: OrderStatus::InProgress
            }
        ))
    );

    let fetched = system.order_client.order(OrderId(1)).await.unwrap();
    assert_eq!(fetched.status, OrderStatus::InProgress);
    assert_eq!(fetched.items, order.items);
    assert_eq!(fetched.total, order.total);

    let missing = system.order_client.order(OrderId(2)).await.unwrap_err();
    assert_eq!(missing, OrderError::NotFound(OrderId(2)));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_rejected_orders_leave_no_trace() {
    let system = OrderSystem::new(settings(QueuePolicy::OneShot));
    let client = &system.order_client;

    assert_eq!(client.place_order(vec![]).await, Err(OrderError::NoItems));
    assert_eq!(
        client.place_order(vec![MenuItemId(99)]).await,
        Err(OrderError::InvalidItems {
            unknown: vec![MenuItemId(99)]
        })
    );
    assert_eq!(
        client.place_order(vec![MenuItemId(1), MenuItemId(42)]).await,
        Err(OrderError::InvalidItems {
            unknown: vec![MenuItemId(42)]
        })
    );

    // Nothing queued, nothing stored, and the first real order still gets ID 1.
    assert_eq!(client.advance_next().await, Ok(None));
    assert_eq!(
        client.order(OrderId(1)).await,
        Err(OrderError::NotFound(OrderId(1)))
    );
    let order = client.place_order(vec![MenuItemId(5)]).await.unwrap();
    assert_eq!(order.id, OrderId(1));

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_duplicates_count_as_quantity() {
    let system = OrderSystem::new(settings(QueuePolicy::OneShot));

    let order = system
        .order_client
        .place_order(vec![MenuItemId(3), MenuItemId(5), MenuItemId(3)])
        .await
        .unwrap();
    let ids: Vec<_> = order.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, [MenuItemId(3), MenuItemId(5), MenuItemId(3)]);
    assert_eq!(order.total, 16.0);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_concurrent_placement_keeps_ids_dense() {
    let system = OrderSystem::new(settings(QueuePolicy::OneShot));

    let tasks: Vec<_> = (0..25)
        .map(|i| {
            let client = system.order_client.clone();
            tokio::spawn(async move {
                // Every fifth request is invalid and must not consume an ID.
                let items = if i % 5 == 0 {
                    vec![MenuItemId(0)]
                } else {
                    vec![MenuItemId(1 + i % 5)]
                };
                client.place_order(items).await
            })
        })
        .collect();

    let mut ids = Vec::new();
    for task in tasks {
        if let Ok(order) = task.await.unwrap() {
            ids.push(order.id.0);
        }
    }
    ids.sort_unstable();
    assert_eq!(ids, (1..=20).collect::<Vec<_>>());

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_queue_is_fifo() {
    let system = OrderSystem::new(settings(QueuePolicy::OneShot));
    let client = &system.order_client;

    for item in [1, 2, 3] {
        client.place_order(vec![MenuItemId(item)]).await.unwrap();
    }

    let mut advanced = Vec::new();
    while let Some((id, result)) = client.advance_next().await.unwrap() {
        assert_eq!(result.status(), OrderStatus::InProgress);
        advanced.push(id);
    }
    assert_eq!(advanced, [OrderId(1), OrderId(2), OrderId(3)]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_requeue_walks_every_order_to_completed() {
    let system = OrderSystem::new(settings(QueuePolicy::UntilSettled));
    let client = &system.order_client;

    client.place_order(vec![MenuItemId(1)]).await.unwrap();
    client.place_order(vec![MenuItemId(2)]).await.unwrap();

    let mut steps = Vec::new();
    while let Some((id, result)) = client.advance_next().await.unwrap() {
        steps.push((id.0, result.status()));
    }
    assert_eq!(
        steps,
        [
            (1, OrderStatus::InProgress),
            (2, OrderStatus::InProgress),
            (1, OrderStatus::Completed),
            (2, OrderStatus::Completed),
        ]
    );

    for id in [OrderId(1), OrderId(2)] {
        assert_eq!(
            client.order(id).await.unwrap().status,
            OrderStatus::Completed
        );
    }

    system.shutdown().await.expect("Shutdown failed");
}
