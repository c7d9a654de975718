use vendo_api::usecase::auth::{SignupInput, SignupUseCase};
use vendo_api::usecase::checkout::{
    CompletedSession, ConfirmOutcome, ConfirmPaymentUseCase, CreateCheckoutSessionInput,
    CreateCheckoutSessionUseCase,
};
use vendo_api::usecase::order::ListOrdersUseCase;
use vendo_domain::order::OrderStatus;
use vendo_domain::pagination::PageRequest;

use crate::helpers::{MockOrderRepo, MockUserRepo, StubCheckoutGateway, TEST_JWT_SECRET};

// ── Full purchase flow ───────────────────────────────────────────────────────

/// Signup, open a checkout session, deliver the completion event, and see
/// exactly one paid order with the provider-reported amount.
#[tokio::test]
async fn should_record_paid_order_after_checkout_completes() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let signup = SignupUseCase {
        repo: users,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    };
    let account = signup
        .execute(SignupInput {
            name: "Alice".into(),
            email: "alice@example.com".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    let checkout = CreateCheckoutSessionUseCase {
        gateway: StubCheckoutGateway::new(),
    };
    let session = checkout
        .execute(
            account.user.id,
            CreateCheckoutSessionInput {
                amount: 500,
                currency: "usd".into(),
            },
        )
        .await
        .unwrap();
    assert_eq!(
        checkout.gateway.requests.lock().unwrap().as_slice(),
        &[(account.user.id, 500, "usd".to_owned())]
    );

    let orders = MockOrderRepo::empty();
    let orders_handle = orders.orders_handle();
    let confirm = ConfirmPaymentUseCase {
        users: MockUserRepo::new(users_handle.lock().unwrap().clone()),
        orders,
    };
    let outcome = confirm
        .execute(CompletedSession {
            session_id: session.id.clone(),
            user_id: Some(account.user.id.to_string()),
            amount_total: Some(500),
        })
        .await
        .unwrap();
    assert_eq!(outcome, ConfirmOutcome::OrderCreated);

    let list = ListOrdersUseCase {
        repo: MockOrderRepo::with_orders(orders_handle),
    };
    let listed = list
        .execute(account.user.id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].amount, 500);
    assert_eq!(listed[0].status, OrderStatus::Paid);
    assert_eq!(listed[0].checkout_session_id.as_deref(), Some(session.id.as_str()));
}

// ── Redelivery ───────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_keep_single_order_when_event_is_redelivered() {
    let users = MockUserRepo::empty();
    let users_handle = users.users_handle();
    let account = SignupUseCase {
        repo: users,
        jwt_secret: TEST_JWT_SECRET.to_owned(),
    }
    .execute(SignupInput {
        name: "Bob".into(),
        email: "bob@example.com".into(),
        password: "hunter22".into(),
    })
    .await
    .unwrap();

    let confirm = ConfirmPaymentUseCase {
        users: MockUserRepo::new(users_handle.lock().unwrap().clone()),
        orders: MockOrderRepo::empty(),
    };
    let event = || CompletedSession {
        session_id: "cs_test_once".into(),
        user_id: Some(account.user.id.to_string()),
        amount_total: Some(2499),
    };

    assert_eq!(
        confirm.execute(event()).await.unwrap(),
        ConfirmOutcome::OrderCreated
    );
    for _ in 0..3 {
        assert_eq!(
            confirm.execute(event()).await.unwrap(),
            ConfirmOutcome::Duplicate
        );
    }
    assert_eq!(confirm.orders.orders.lock().unwrap().len(), 1);
}

// ── Unattributable events ────────────────────────────────────────────────────

#[tokio::test]
async fn should_acknowledge_event_for_unknown_user_without_recording() {
    let confirm = ConfirmPaymentUseCase {
        users: MockUserRepo::empty(),
        orders: MockOrderRepo::empty(),
    };
    let outcome = confirm
        .execute(CompletedSession {
            session_id: "cs_test_ghost".into(),
            user_id: Some(uuid::Uuid::now_v7().to_string()),
            amount_total: Some(500),
        })
        .await
        .unwrap();
    assert_eq!(outcome, ConfirmOutcome::Skipped);
    assert!(confirm.orders.orders.lock().unwrap().is_empty());
}
