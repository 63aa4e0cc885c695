//! End-to-end order form flow over in-memory sources, no HTTP involved.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;

use food_admin_sdk::prelude::*;

struct StaticCatalog {
    products: Vec<Product>,
    users: Vec<User>,
}

#[async_trait]
impl SnapshotSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, SdkError> {
        Ok(self.products.clone())
    }

    async fn fetch_users(&self) -> Result<Vec<User>, SdkError> {
        Ok(self.users.clone())
    }
}

/// Accepts every order and keeps what it was sent.
#[derive(Default)]
struct RecordingGateway {
    sent: Mutex<Vec<CreateOrderRequest>>,
}

#[async_trait]
impl OrderGateway for RecordingGateway {
    async fn create_order(&self, request: &CreateOrderRequest) -> Result<PersistedOrder, SdkError> {
        let mut sent = self.sent.lock().unwrap();
        sent.push(request.clone());
        Ok(PersistedOrder {
            id: OrderId::from(format!("o{}", sent.len())),
            user: Reference::Id(request.user_id.to_string()),
            items: Vec::new(),
            total: Decimal::ZERO,
            created_at: Some(Utc::now()),
        })
    }
}

/// Rejects every order the way the backend does on a bad request.
struct RejectingGateway;

#[async_trait]
impl OrderGateway for RejectingGateway {
    async fn create_order(&self, _: &CreateOrderRequest) -> Result<PersistedOrder, SdkError> {
        Err(HttpError::BadRequest {
            status: 400,
            message: "Product p2 is out of stock".to_string(),
        }
        .into())
    }
}

/// Fails without a server message.
struct OfflineGateway;

#[async_trait]
impl OrderGateway for OfflineGateway {
    async fn create_order(&self, _: &CreateOrderRequest) -> Result<PersistedOrder, SdkError> {
        Err(HttpError::Timeout.into())
    }
}

fn product(id: &str, name: &str, cents: i64, status: ProductStatus) -> Product {
    Product {
        id: id.into(),
        name: name.to_string(),
        category: Reference::from("c1"),
        price: Decimal::new(cents, 2),
        status,
    }
}

fn source() -> StaticCatalog {
    StaticCatalog {
        products: vec![
            product("p1", "Burger", 899, ProductStatus::Active),
            product("p2", "Fries", 349, ProductStatus::Active),
            product("p3", "Old Menu Item", 100, ProductStatus::Inactive),
        ],
        users: vec![User {
            id: "u1".into(),
            name: "Jane".to_string(),
            email: "jane@example.com".to_string(),
            mobile: String::new(),
        }],
    }
}

async fn composer() -> OrderComposer {
    OrderComposer::new(load_snapshot(&source()).await.unwrap())
}

#[tokio::test]
async fn inactive_products_are_not_offered() {
    let mut composer = composer().await;
    let offered: Vec<&str> = composer
        .available_products()
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(offered, ["Burger", "Fries"]);
    assert_eq!(
        composer.add_line_item("p3"),
        Err(ComposerError::UnknownProduct("p3".to_string()))
    );
}

#[tokio::test]
async fn full_flow_submits_once_and_resets() {
    let gateway = RecordingGateway::default();
    let mut composer = composer().await;

    composer.select_user("u1").unwrap();
    composer.add_line_item("p1").unwrap();
    composer.add_line_item("p2").unwrap();
    composer.update_line_item_raw(0, "quantity", "2").unwrap();
    composer.update_line_item_raw(1, "quantity", "3").unwrap();
    assert_eq!(composer.compute_total(), Decimal::new(2845, 2));
    assert_eq!(
        food_admin_sdk::shared::fmt::usd(&composer.compute_total()),
        "$28.45"
    );

    let order = composer.submit(&gateway).await.unwrap();
    assert_eq!(order.id.as_str(), "o1");

    let sent = gateway.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].user_id.as_str(), "u1");
    let quantities: Vec<(&str, u32)> = sent[0]
        .items
        .iter()
        .map(|i| (i.product_id.as_str(), i.quantity))
        .collect();
    assert_eq!(quantities, [("p1", 2), ("p2", 3)]);

    assert_eq!(composer.phase(), &Phase::Empty);
    assert_eq!(composer.draft(), &DraftOrder::default());
    assert_eq!(
        composer.notice().map(Notice::message),
        Some("Order created successfully!")
    );
}

#[tokio::test]
async fn server_rejection_keeps_everything_for_retry() {
    let mut composer = composer().await;
    composer.select_user("u1").unwrap();
    composer.add_line_item("p2").unwrap();
    composer.update_line_item(0, LineItemUpdate::Quantity(5)).unwrap();
    let draft_before = composer.draft().clone();

    let err = composer.submit(&RejectingGateway).await.unwrap_err();
    assert_eq!(err.user_message(), "Product p2 is out of stock");
    assert_eq!(composer.draft(), &draft_before);
    assert_eq!(
        composer.phase(),
        &Phase::Failed("Product p2 is out of stock".to_string())
    );
    assert!(composer.notice().is_none());

    let gateway = RecordingGateway::default();
    composer.submit(&gateway).await.unwrap();
    assert_eq!(gateway.sent.lock().unwrap()[0].items[0].quantity, 5);
}

#[tokio::test]
async fn failure_without_server_message_uses_generic_text() {
    let mut composer = composer().await;
    composer.select_user("u1").unwrap();
    composer.add_line_item("p1").unwrap();

    composer.submit(&OfflineGateway).await.unwrap_err();
    assert_eq!(composer.last_error(), Some("Failed to create order"));
}

#[tokio::test]
async fn validation_failures_never_reach_the_gateway() {
    let gateway = RecordingGateway::default();
    let mut composer = composer().await;

    let err = composer.submit(&gateway).await.unwrap_err();
    assert_eq!(err.user_message(), "Please select a user");

    composer.select_user("u1").unwrap();
    let err = composer.submit(&gateway).await.unwrap_err();
    assert!(matches!(err, SdkError::Composer(ComposerError::EmptyOrder)));

    assert!(gateway.sent.lock().unwrap().is_empty());
}

#[tokio::test]
async fn gateway_can_be_used_as_trait_object() {
    let gateway: Box<dyn OrderGateway> = Box::new(RecordingGateway::default());
    let mut composer = composer().await;
    composer.select_user("u1").unwrap();
    composer.add_line_item("p1").unwrap();
    composer.submit(gateway.as_ref()).await.unwrap();
}

#[tokio::test]
async fn snapshot_source_can_be_used_as_trait_object() {
    let source: &dyn SnapshotSource = &source();
    let snapshot = load_snapshot(source).await.unwrap();
    assert_eq!(snapshot.products().len(), 2);
    assert_eq!(
        snapshot.user(&"u1".into()).map(User::label),
        Some("Jane (jane@example.com)".to_string())
    );
}
