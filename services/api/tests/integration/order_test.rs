use uuid::Uuid;

use vendo_api::error::ApiServiceError;
use vendo_api::usecase::order::{
    CreateOrderInput, CreateOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
};
use vendo_domain::order::OrderStatus;
use vendo_domain::pagination::PageRequest;

use crate::helpers::MockOrderRepo;

#[tokio::test]
async fn should_save_and_list_direct_orders_newest_first() {
    let user_id = Uuid::now_v7();
    let repo = MockOrderRepo::empty();
    let orders_handle = repo.orders_handle();
    let create = CreateOrderUseCase { repo };

    let first = create
        .execute(
            user_id,
            CreateOrderInput {
                amount: 100,
                items: serde_json::json!([{"name": "First"}]),
            },
        )
        .await
        .unwrap();
    let second = create
        .execute(
            user_id,
            CreateOrderInput {
                amount: 200,
                items: serde_json::json!([{"name": "Second"}]),
            },
        )
        .await
        .unwrap();

    let list = ListOrdersUseCase {
        repo: MockOrderRepo::with_orders(orders_handle),
    };
    let listed = list.execute(user_id, PageRequest::default()).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, second.id);
    assert_eq!(listed[1].id, first.id);
    assert!(listed.iter().all(|o| o.status == OrderStatus::Pending));
}

#[tokio::test]
async fn should_not_leak_orders_across_users() {
    let owner = Uuid::now_v7();
    let stranger = Uuid::now_v7();
    let repo = MockOrderRepo::empty();
    let orders_handle = repo.orders_handle();

    let order = CreateOrderUseCase { repo }
        .execute(
            owner,
            CreateOrderInput {
                amount: 500,
                items: serde_json::json!([]),
            },
        )
        .await
        .unwrap();

    let get = GetOrderUseCase {
        repo: MockOrderRepo::with_orders(orders_handle.clone()),
    };
    let result = get.execute(order.id, stranger).await;
    assert!(matches!(result, Err(ApiServiceError::OrderNotFound)));
    assert_eq!(get.execute(order.id, owner).await.unwrap().id, order.id);

    let list = ListOrdersUseCase {
        repo: MockOrderRepo::with_orders(orders_handle),
    };
    assert!(
        list.execute(stranger, PageRequest::default())
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn should_page_through_orders() {
    let user_id = Uuid::now_v7();
    let repo = MockOrderRepo::empty();
    let orders_handle = repo.orders_handle();
    let create = CreateOrderUseCase { repo };
    for i in 1..=5 {
        create
            .execute(
                user_id,
                CreateOrderInput {
                    amount: i * 100,
                    items: serde_json::json!([]),
                },
            )
            .await
            .unwrap();
    }

    let list = ListOrdersUseCase {
        repo: MockOrderRepo::with_orders(orders_handle),
    };
    let page = PageRequest {
        per_page: 2,
        page: 2,
    };
    let listed = list.execute(user_id, page).await.unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].amount, 300);
    assert_eq!(listed[1].amount, 200);
}
