//! Conversions: order wire types → domain types.

use super::wire;
use super::{OrderedItem, PersistedOrder};

impl From<wire::OrderItemResponse> for OrderedItem {
    fn from(item: wire::OrderItemResponse) -> Self {
        OrderedItem {
            product: item.product,
            quantity: item.quantity,
            unit_price: item.price,
        }
    }
}

impl From<wire::OrderResponse> for PersistedOrder {
    fn from(resp: wire::OrderResponse) -> Self {
        PersistedOrder {
            id: resp.id,
            user: resp.user,
            items: resp.items.into_iter().map(Into::into).collect(),
            total: resp.total_amount,
            created_at: resp.order_date,
        }
    }
}
