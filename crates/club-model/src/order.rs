//! Ticket Cart Line Items and Orders
//!
//! Mock ticket purchases only. A `CartItem` is one club's line in the cart;
//! checkout turns the cart into an `Order` stamped with a fresh id.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flat ticket price applied to every cart line.
pub const TICKET_PRICE: u32 = 50;

/// One club's line in the ticket cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub club_id: String,
    pub club_name: String,
    pub quantity: u32,
    pub price: u32,
}

impl CartItem {
    /// Creates a line at the flat ticket price.
    pub fn new(club_id: impl Into<String>, club_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            club_id: club_id.into(),
            club_name: club_name.into(),
            quantity,
            price: TICKET_PRICE,
        }
    }

    /// Line subtotal.
    pub fn subtotal(&self) -> u32 {
        self.price * self.quantity
    }
}

/// A completed mock purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    pub items: Vec<CartItem>,
    pub total: u32,
}

impl Order {
    /// Builds an order over the given items with a fresh v4 id.
    pub fn new(items: Vec<CartItem>) -> Self {
        let total = items.iter().map(CartItem::subtotal).sum();
        Self {
            order_id: Uuid::new_v4(),
            items,
            total,
        }
    }
}
