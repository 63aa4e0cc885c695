//! Order composer: app-owned draft state, SDK-provided update logic.
//!
//! The composer holds one [`DraftOrder`] against one [`CatalogSnapshot`].
//! Every mutation is local; only [`OrderComposer::submit`] reaches the
//! gateway, and only after the draft validates.
//!
//! ```text
//! Empty ──edit──▶ Editing ──submit──▶ Submitting ──ok──▶ Empty
//!                    ▲                    │
//!                    └──edit── Failed ◀───┘ err
//! ```

use std::time::{Duration, Instant};

use rust_decimal::Decimal;

use super::{CreateOrderRequest, DraftOrder, LineItem, OrderGateway, PersistedOrder};
use crate::domain::catalog::CatalogSnapshot;
use crate::domain::product::Product;
use crate::error::{ComposerError, SdkError};
use crate::shared::{ProductId, UserId};

/// How long the post-submit success notice stays visible.
pub const SUCCESS_NOTICE_TTL: Duration = Duration::from_secs(3);

/// Message shown after a successful submit.
pub const SUCCESS_MESSAGE: &str = "Order created successfully!";

/// Where the composer is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Fresh draft: no user, no items.
    Empty,
    /// A user or at least one line item is set.
    Editing,
    /// A submit is in flight; the draft is frozen.
    Submitting,
    /// The last submit failed. Behaves like `Editing`; carries the message.
    Failed(String),
}

/// A change to one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineItemUpdate {
    Quantity(i64),
    Product(ProductId),
}

impl LineItemUpdate {
    /// Parse a form field edit: `field` is `"quantity"` or `"productId"`.
    pub fn parse(field: &str, value: &str) -> Result<Self, ComposerError> {
        match field {
            "quantity" => value
                .trim()
                .parse::<i64>()
                .map(LineItemUpdate::Quantity)
                .map_err(|_| ComposerError::InvalidQuantity(value.to_string())),
            "productId" => Ok(LineItemUpdate::Product(ProductId::from(value))),
            other => Err(ComposerError::UnknownField(other.to_string())),
        }
    }
}

/// Transient, self-expiring message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    message: String,
    shown_at: Instant,
    ttl: Duration,
}

impl Notice {
    pub fn new(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
            ttl,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.ttl
    }
}

/// Stateful order form.
#[derive(Debug, Clone)]
pub struct OrderComposer {
    catalog: CatalogSnapshot,
    draft: DraftOrder,
    phase: Phase,
    notice: Option<Notice>,
}

impl OrderComposer {
    pub fn new(catalog: CatalogSnapshot) -> Self {
        Self {
            catalog,
            draft: DraftOrder::default(),
            phase: Phase::Empty,
            notice: None,
        }
    }

    // ── Queries ──────────────────────────────────────────────────────────

    pub fn catalog(&self) -> &CatalogSnapshot {
        &self.catalog
    }

    pub fn draft(&self) -> &DraftOrder {
        &self.draft
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.draft.items
    }

    pub fn selected_user(&self) -> Option<&UserId> {
        self.draft.user_id.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Message of the last failed submit, until the next edit.
    pub fn last_error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The success notice, if one is showing and has not expired.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired_at(Instant::now()))
    }

    /// Σ quantity × current snapshot price.
    ///
    /// Line items whose product no longer resolves in the snapshot count as 0.
    pub fn compute_total(&self) -> Decimal {
        self.draft
            .items
            .iter()
            .map(|item| self.price_of(item))
            .sum()
    }

    /// Total of one row; `None` for a bad index.
    pub fn line_total(&self, index: usize) -> Option<Decimal> {
        self.draft.items.get(index).map(|item| self.price_of(item))
    }

    /// Active products not yet in the draft.
    pub fn available_products(&self) -> Vec<&Product> {
        self.catalog
            .products()
            .iter()
            .filter(|p| !self.draft.contains(&p.id))
            .collect()
    }

    pub fn validate(&self) -> Result<(), ComposerError> {
        if self.draft.user_id.is_none() {
            return Err(ComposerError::MissingUser);
        }
        if self.draft.items.is_empty() {
            return Err(ComposerError::EmptyOrder);
        }
        Ok(())
    }

    // ── Mutations ────────────────────────────────────────────────────────

    /// Set (or, with a blank id, clear) the user the order is placed for.
    ///
    /// The id is not checked against the directory.
    pub fn select_user(&mut self, user_id: impl Into<UserId>) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        let user_id = user_id.into();
        self.draft.user_id = if user_id.is_blank() { None } else { Some(user_id) };
        self.touch();
        Ok(())
    }

    /// Append `product_id` with quantity 1.
    pub fn add_line_item(&mut self, product_id: impl Into<ProductId>) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        let product_id = product_id.into();
        self.check_product(&product_id, None)?;
        self.draft.items.push(LineItem {
            product_id,
            quantity: 1,
        });
        self.touch();
        Ok(())
    }

    pub fn update_line_item(
        &mut self,
        index: usize,
        update: LineItemUpdate,
    ) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        self.check_index(index)?;

        match update {
            LineItemUpdate::Quantity(quantity) => {
                let quantity = u32::try_from(quantity)
                    .ok()
                    .filter(|q| *q >= 1)
                    .ok_or_else(|| ComposerError::InvalidQuantity(quantity.to_string()))?;
                self.draft.items[index].quantity = quantity;
            }
            LineItemUpdate::Product(product_id) => {
                self.check_product(&product_id, Some(index))?;
                self.draft.items[index].product_id = product_id;
            }
        }
        self.touch();
        Ok(())
    }

    /// [`update_line_item`](Self::update_line_item) from raw form text.
    pub fn update_line_item_raw(
        &mut self,
        index: usize,
        field: &str,
        value: &str,
    ) -> Result<(), ComposerError> {
        let update = LineItemUpdate::parse(field, value)?;
        self.update_line_item(index, update)
    }

    pub fn remove_line_item(&mut self, index: usize) -> Result<LineItem, ComposerError> {
        self.ensure_editable()?;
        self.check_index(index)?;
        let removed = self.draft.items.remove(index);
        self.touch();
        Ok(removed)
    }

    /// Abandon the draft.
    pub fn cancel(&mut self) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        self.reset();
        Ok(())
    }

    /// Swap in a freshly loaded snapshot. Line items are kept; ones whose
    /// product disappeared stop contributing to the total.
    pub fn replace_catalog(&mut self, catalog: CatalogSnapshot) -> Result<(), ComposerError> {
        self.ensure_editable()?;
        self.catalog = catalog;
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    // ── Submission ───────────────────────────────────────────────────────

    /// Validate and send the draft through `gateway`.
    ///
    /// On success the draft resets and a success notice is shown. On gateway
    /// failure the draft is kept and the composer enters [`Phase::Failed`].
    pub async fn submit<G>(&mut self, gateway: &G) -> Result<PersistedOrder, SdkError>
    where
        G: OrderGateway + ?Sized,
    {
        let request = self.begin_submit()?;
        let outcome = gateway.create_order(&request).await;
        self.finish_submit(outcome)
    }

    /// First half of [`submit`](Self::submit): validate, freeze the draft,
    /// and return the body to send.
    pub fn begin_submit(&mut self) -> Result<CreateOrderRequest, ComposerError> {
        if self.phase == Phase::Submitting {
            return Err(ComposerError::SubmissionInProgress);
        }
        self.validate()?;
        let request = self.draft.to_request().ok_or(ComposerError::MissingUser)?;
        self.phase = Phase::Submitting;
        self.notice = None;
        tracing::debug!(
            user_id = %request.user_id,
            items = request.items.len(),
            "submitting order"
        );
        Ok(request)
    }

    /// Second half of [`submit`](Self::submit): apply the gateway outcome.
    ///
    /// An error that [reached the server](SdkError::reached_server) clears the
    /// draft like a success, without the success notice.
    pub fn finish_submit(
        &mut self,
        outcome: Result<PersistedOrder, SdkError>,
    ) -> Result<PersistedOrder, SdkError> {
        if self.phase != Phase::Submitting {
            return Err(ComposerError::NotSubmitting.into());
        }

        match outcome {
            Ok(order) => {
                tracing::info!(order_id = %order.id, total = %order.total, "order submitted");
                self.reset();
                self.notice = Some(Notice::new(SUCCESS_MESSAGE, SUCCESS_NOTICE_TTL));
                Ok(order)
            }
            Err(e) if e.reached_server() => {
                tracing::warn!(error = %e, "order accepted without confirmation; draft cleared");
                self.reset();
                Err(e)
            }
            Err(e) => {
                let message = e.user_message();
                tracing::warn!(error = %e, "order submission failed; draft kept");
                self.phase = Phase::Failed(message);
                Err(e)
            }
        }
    }

    /// Unfreeze a draft whose submit was abandoned without an outcome
    /// (e.g. the future was dropped).
    pub fn abort_submit(&mut self) {
        if self.phase == Phase::Submitting {
            self.phase = Phase::Editing;
        }
    }

    // ── Internal ─────────────────────────────────────────────────────────

    fn price_of(&self, item: &LineItem) -> Decimal {
        self.catalog
            .price(&item.product_id)
            .map(|price| price * Decimal::from(item.quantity))
            .unwrap_or(Decimal::ZERO)
    }

    fn ensure_editable(&self) -> Result<(), ComposerError> {
        if self.phase == Phase::Submitting {
            Err(ComposerError::SubmissionInProgress)
        } else {
            Ok(())
        }
    }

    fn check_index(&self, index: usize) -> Result<(), ComposerError> {
        let len = self.draft.items.len();
        if index < len {
            Ok(())
        } else {
            Err(ComposerError::IndexOutOfRange { index, len })
        }
    }

    /// Blank, duplicate (ignoring the row at `replacing`), and catalog checks.
    fn check_product(
        &self,
        product_id: &ProductId,
        replacing: Option<usize>,
    ) -> Result<(), ComposerError> {
        if product_id.is_blank() {
            return Err(ComposerError::NoProductSelected);
        }
        let duplicate = self
            .draft
            .items
            .iter()
            .enumerate()
            .any(|(i, item)| Some(i) != replacing && &item.product_id == product_id);
        if duplicate {
            return Err(ComposerError::DuplicateProduct(product_id.to_string()));
        }
        if self.catalog.product(product_id).is_none() {
            return Err(ComposerError::UnknownProduct(product_id.to_string()));
        }
        Ok(())
    }

    /// Any successful edit: clear a failure/notice and recompute Empty vs Editing.
    fn touch(&mut self) {
        self.notice = None;
        self.phase = if self.draft.is_empty() {
            Phase::Empty
        } else {
            Phase::Editing
        };
    }

    fn reset(&mut self) {
        self.draft = DraftOrder::default();
        self.phase = Phase::Empty;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::ProductStatus;
    use crate::domain::user::User;
    use crate::error::HttpError;
    use crate::shared::Reference;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    fn product(id: &str, price: Decimal) -> Product {
        Product {
            id: id.into(),
            name: format!("Product {id}"),
            category: Reference::from("c1"),
            price,
            status: ProductStatus::Active,
        }
    }

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![
                product("p1", Decimal::new(1000, 2)),
                product("p2", Decimal::new(250, 2)),
                product("p3", Decimal::new(199, 2)),
            ],
            vec![User {
                id: "u1".into(),
                name: "Jane".to_string(),
                email: "jane@example.com".to_string(),
                mobile: String::new(),
            }],
        )
    }

    /// Records requests; fails while `fail` is set.
    struct FakeGateway {
        calls: AtomicUsize,
        fail: Mutex<bool>,
        last: Mutex<Option<CreateOrderRequest>>,
    }

    impl FakeGateway {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail: Mutex::new(fail),
                last: Mutex::new(None),
            }
        }
    }

    #[async_trait]
    impl OrderGateway for FakeGateway {
        async fn create_order(
            &self,
            request: &CreateOrderRequest,
        ) -> Result<PersistedOrder, SdkError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last.lock().unwrap() = Some(request.clone());
            if *self.fail.lock().unwrap() {
                return Err(HttpError::ServerError {
                    status: 500,
                    message: "Database unavailable".to_string(),
                }
                .into());
            }
            Ok(PersistedOrder {
                id: "o1".into(),
                user: Reference::Id(request.user_id.to_string()),
                items: vec![],
                total: Decimal::ZERO,
                created_at: Some(Utc::now()),
            })
        }
    }

    #[test]
    fn test_new_composer_is_empty() {
        let composer = OrderComposer::new(catalog());
        assert_eq!(composer.phase(), &Phase::Empty);
        assert_eq!(composer.compute_total(), Decimal::ZERO);
        assert!(composer.line_items().is_empty());
    }

    #[test]
    fn test_total_sums_distinct_products() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        composer.add_line_item("p2").unwrap();
        composer.add_line_item("p3").unwrap();
        composer.update_line_item(1, LineItemUpdate::Quantity(4)).unwrap();
        composer.update_line_item(2, LineItemUpdate::Quantity(3)).unwrap();
        // 10.00 + 4 × 2.50 + 3 × 1.99
        assert_eq!(composer.compute_total(), Decimal::new(2597, 2));
        assert_eq!(composer.line_total(1), Some(Decimal::new(1000, 2)));
        assert_eq!(composer.line_total(9), None);
        assert_eq!(composer.phase(), &Phase::Editing);
    }

    #[test]
    fn test_duplicate_add_is_rejected_and_draft_unchanged() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        let before = composer.draft().clone();
        assert_eq!(
            composer.add_line_item("p1"),
            Err(ComposerError::DuplicateProduct("p1".to_string()))
        );
        assert_eq!(composer.draft(), &before);
    }

    #[test]
    fn test_blank_product_is_rejected() {
        let mut composer = OrderComposer::new(catalog());
        assert_eq!(composer.add_line_item(""), Err(ComposerError::NoProductSelected));
        assert!(composer.line_items().is_empty());
    }

    #[test]
    fn test_unknown_product_is_rejected() {
        let mut composer = OrderComposer::new(catalog());
        assert_eq!(
            composer.add_line_item("nope"),
            Err(ComposerError::UnknownProduct("nope".to_string()))
        );
    }

    #[test]
    fn test_invalid_quantities() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        for bad in [0, -3, i64::from(u32::MAX) + 1] {
            assert_eq!(
                composer.update_line_item(0, LineItemUpdate::Quantity(bad)),
                Err(ComposerError::InvalidQuantity(bad.to_string()))
            );
        }
        assert_eq!(
            composer.update_line_item_raw(0, "quantity", "2.5"),
            Err(ComposerError::InvalidQuantity("2.5".to_string()))
        );
        assert_eq!(
            composer.update_line_item_raw(0, "quantity", "abc"),
            Err(ComposerError::InvalidQuantity("abc".to_string()))
        );
        assert_eq!(composer.line_items()[0].quantity, 1);

        composer.update_line_item_raw(0, "quantity", " 7 ").unwrap();
        assert_eq!(composer.line_items()[0].quantity, 7);
    }

    #[test]
    fn test_unknown_field() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        assert_eq!(
            composer.update_line_item_raw(0, "price", "1"),
            Err(ComposerError::UnknownField("price".to_string()))
        );
    }

    #[test]
    fn test_snake_case_field_is_unknown() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        assert_eq!(
            composer.update_line_item_raw(0, "product_id", "p2"),
            Err(ComposerError::UnknownField("product_id".to_string()))
        );
    }

    #[test]
    fn test_unconfirmed_order_clears_draft_without_notice() {
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        composer.add_line_item("p1").unwrap();
        composer.begin_submit().unwrap();

        let err = composer
            .finish_submit(Err(SdkError::OrderUnconfirmed(
                "missing field `_id`".to_string(),
            )))
            .unwrap_err();
        assert!(err.reached_server());
        assert_eq!(composer.phase(), &Phase::Empty);
        assert!(composer.line_items().is_empty());
        assert!(composer.last_error().is_none());
        assert!(composer.notice().is_none());
        assert_eq!(composer.validate(), Err(ComposerError::MissingUser));
    }

    #[test]
    fn test_replacing_product_keeps_uniqueness() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        composer.add_line_item("p2").unwrap();
        assert_eq!(
            composer.update_line_item_raw(1, "productId", "p1"),
            Err(ComposerError::DuplicateProduct("p1".to_string()))
        );
        // Re-selecting the same product on its own row is fine.
        composer.update_line_item_raw(1, "productId", "p2").unwrap();
        composer.update_line_item_raw(1, "productId", "p3").unwrap();
        assert_eq!(composer.line_items()[1].product_id.as_str(), "p3");
    }

    #[test]
    fn test_index_out_of_range() {
        let mut composer = OrderComposer::new(catalog());
        assert_eq!(
            composer.remove_line_item(0),
            Err(ComposerError::IndexOutOfRange { index: 0, len: 0 })
        );
        composer.add_line_item("p1").unwrap();
        assert_eq!(
            composer.update_line_item(3, LineItemUpdate::Quantity(2)),
            Err(ComposerError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_remove_excludes_item_from_total() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        composer.add_line_item("p2").unwrap();
        let removed = composer.remove_line_item(0).unwrap();
        assert_eq!(removed.product_id.as_str(), "p1");
        assert_eq!(composer.compute_total(), Decimal::new(250, 2));
        composer.remove_line_item(0).unwrap();
        assert_eq!(composer.compute_total(), Decimal::ZERO);
        assert_eq!(composer.phase(), &Phase::Empty);
    }

    #[test]
    fn test_vanished_product_counts_as_zero() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        composer.add_line_item("p2").unwrap();
        composer
            .replace_catalog(CatalogSnapshot::new(
                vec![product("p2", Decimal::new(300, 2))],
                vec![],
            ))
            .unwrap();
        assert_eq!(composer.compute_total(), Decimal::new(300, 2));
        assert_eq!(composer.line_total(0), Some(Decimal::ZERO));
    }

    #[test]
    fn test_available_products_hides_selected() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p2").unwrap();
        let ids: Vec<&str> = composer
            .available_products()
            .iter()
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, ["p1", "p3"]);
    }

    #[test]
    fn test_blank_user_clears_selection() {
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        assert_eq!(composer.phase(), &Phase::Editing);
        composer.select_user("").unwrap();
        assert!(composer.selected_user().is_none());
        assert_eq!(composer.phase(), &Phase::Empty);
    }

    #[test]
    fn test_validate() {
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        assert_eq!(composer.validate(), Err(ComposerError::MissingUser));
        composer.remove_line_item(0).unwrap();
        composer.select_user("u1").unwrap();
        assert_eq!(composer.validate(), Err(ComposerError::EmptyOrder));
        composer.add_line_item("p1").unwrap();
        assert_eq!(composer.validate(), Ok(()));
    }

    #[test]
    fn test_submit_without_user_makes_no_call() {
        let gateway = FakeGateway::new(false);
        let mut composer = OrderComposer::new(catalog());
        composer.add_line_item("p1").unwrap();
        let err = tokio_test::block_on(composer.submit(&gateway)).unwrap_err();
        assert!(matches!(err, SdkError::Composer(ComposerError::MissingUser)));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
        assert_eq!(composer.phase(), &Phase::Editing);
    }

    #[test]
    fn test_submit_without_items_makes_no_call() {
        let gateway = FakeGateway::new(false);
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        let err = tokio_test::block_on(composer.submit(&gateway)).unwrap_err();
        assert!(matches!(err, SdkError::Composer(ComposerError::EmptyOrder)));
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_successful_submit_resets_draft_and_shows_notice() {
        let gateway = FakeGateway::new(false);
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        composer.add_line_item("p1").unwrap();
        composer.update_line_item(0, LineItemUpdate::Quantity(3)).unwrap();
        assert_eq!(composer.compute_total(), Decimal::new(3000, 2));

        let order = tokio_test::block_on(composer.submit(&gateway)).unwrap();
        assert_eq!(order.id.as_str(), "o1");
        assert_eq!(
            gateway.last.lock().unwrap().clone().unwrap(),
            CreateOrderRequest {
                user_id: "u1".into(),
                items: vec![super::super::OrderItemRequest {
                    product_id: "p1".into(),
                    quantity: 3,
                }],
            }
        );
        assert_eq!(composer.phase(), &Phase::Empty);
        assert!(composer.line_items().is_empty());
        assert!(composer.selected_user().is_none());
        assert_eq!(composer.compute_total(), Decimal::ZERO);
        assert_eq!(composer.notice().unwrap().message(), SUCCESS_MESSAGE);

        composer.select_user("u1").unwrap();
        assert!(composer.notice().is_none());
    }

    #[test]
    fn test_failed_submit_keeps_draft_and_allows_retry() {
        let gateway = FakeGateway::new(true);
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        composer.add_line_item("p2").unwrap();

        let err = tokio_test::block_on(composer.submit(&gateway)).unwrap_err();
        assert_eq!(err.user_message(), "Database unavailable");
        assert_eq!(
            composer.phase(),
            &Phase::Failed("Database unavailable".to_string())
        );
        assert_eq!(composer.last_error(), Some("Database unavailable"));
        assert_eq!(composer.line_items().len(), 1);
        assert_eq!(composer.selected_user().map(UserId::as_str), Some("u1"));

        *gateway.fail.lock().unwrap() = false;
        tokio_test::block_on(composer.submit(&gateway)).unwrap();
        assert_eq!(gateway.calls.load(Ordering::SeqCst), 2);
        assert_eq!(composer.phase(), &Phase::Empty);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        composer.add_line_item("p1").unwrap();

        let request = composer.begin_submit().unwrap();
        assert_eq!(request.items.len(), 1);
        assert!(composer.is_submitting());
        assert_eq!(
            composer.begin_submit(),
            Err(ComposerError::SubmissionInProgress)
        );
        assert_eq!(
            composer.add_line_item("p2"),
            Err(ComposerError::SubmissionInProgress)
        );
        assert_eq!(composer.cancel(), Err(ComposerError::SubmissionInProgress));

        composer.abort_submit();
        assert_eq!(composer.phase(), &Phase::Editing);
        composer.add_line_item("p2").unwrap();
    }

    #[test]
    fn test_finish_without_begin_is_rejected() {
        let mut composer = OrderComposer::new(catalog());
        let err = composer
            .finish_submit(Err(SdkError::Other("late".to_string())))
            .unwrap_err();
        assert!(matches!(err, SdkError::Composer(ComposerError::NotSubmitting)));
    }

    #[test]
    fn test_edit_after_failure_returns_to_editing() {
        let gateway = FakeGateway::new(true);
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        composer.add_line_item("p1").unwrap();
        let _ = tokio_test::block_on(composer.submit(&gateway));
        assert!(composer.last_error().is_some());
        composer.update_line_item(0, LineItemUpdate::Quantity(2)).unwrap();
        assert_eq!(composer.phase(), &Phase::Editing);
        assert!(composer.last_error().is_none());
    }

    #[test]
    fn test_cancel_discards_draft() {
        let mut composer = OrderComposer::new(catalog());
        composer.select_user("u1").unwrap();
        composer.add_line_item("p1").unwrap();
        composer.cancel().unwrap();
        assert_eq!(composer.draft(), &DraftOrder::default());
        assert_eq!(composer.phase(), &Phase::Empty);
    }

    #[test]
    fn test_notice_expiry() {
        let notice = Notice::new("hi", Duration::from_millis(10));
        assert!(!notice.is_expired_at(notice.shown_at));
        assert!(notice.is_expired_at(notice.shown_at + Duration::from_millis(10)));
    }
}
