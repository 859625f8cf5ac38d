use serde::{Deserialize, Serialize};

use bookdepot_core::{BookId, OrderId};

/// How an order line consumes stock.
///
/// The enum is closed on purpose: an unrecognized type string must fail
/// structural decoding at the transport rather than reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    /// Must not drive inventory below zero.
    Immediate,
    /// Back-order: inventory may go negative.
    Reserve,
}

/// One stock-consuming line within an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub book_id: BookId,
    #[serde(rename = "type")]
    pub kind: OrderKind,
    pub quantity: u32,
}

/// A multi-line order, fulfilled atomically: all lines or none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Accepted,
    Error,
}

/// Per-order outcome, echoing the caller's `orderId`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: OrderId,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl OrderResult {
    pub fn accepted(order_id: OrderId) -> Self {
        Self {
            order_id,
            status: OrderStatus::Accepted,
            message: None,
        }
    }

    pub fn rejected(order_id: OrderId, message: impl Into<String>) -> Self {
        Self {
            order_id,
            status: OrderStatus::Error,
            message: Some(message.into()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.status == OrderStatus::Accepted
    }
}

/// A batch of orders, processed strictly in submission order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentParams {
    pub orders: Vec<Order>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentResult {
    pub orders: Vec<OrderResult>,
}
