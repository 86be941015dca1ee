//! Ticket Cart
//!
//! In-memory mock ticket cart. Adding the same club twice merges into one
//! line; checkout drains the cart into an `Order`. Nothing here touches
//! durable storage, matching how the app has always treated the cart.

use club_model::{CartItem, Club, Order};

/// Mock ticket cart, one line per club.
#[derive(Debug, Default)]
pub struct TicketCart {
    items: Vec<CartItem>,
}

impl TicketCart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current cart lines.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds tickets for a club, merging into the existing line if present.
    pub fn add(&mut self, club: &Club, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.club_id == club.id) {
            item.quantity += quantity;
            return;
        }
        self.items
            .push(CartItem::new(club.id.clone(), club.name.clone(), quantity));
    }

    /// Drops the line for a club, if any.
    pub fn remove(&mut self, club_id: &str) {
        self.items.retain(|i| i.club_id != club_id);
    }

    /// Sets a line's quantity directly; unknown club ids are a no-op.
    pub fn update_quantity(&mut self, club_id: &str, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.club_id == club_id) {
            item.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of price times quantity across all lines.
    pub fn total(&self) -> u32 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Turns a non-empty cart into an order and empties the cart.
    pub fn checkout(&mut self) -> Option<Order> {
        if self.items.is_empty() {
            return None;
        }
        Some(Order::new(std::mem::take(&mut self.items)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::seed_clubs;
    use club_model::TICKET_PRICE;

    #[test]
    fn test_add_creates_line_at_ticket_price() {
        let clubs = seed_clubs();
        let mut cart = TicketCart::new();
        cart.add(&clubs[0], 2);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].club_name, clubs[0].name);
        assert_eq!(cart.items()[0].price, TICKET_PRICE);
        assert_eq!(cart.total(), 100);
    }

    #[test]
    fn test_add_same_club_merges_quantity() {
        let clubs = seed_clubs();
        let mut cart = TicketCart::new();
        cart.add(&clubs[0], 2);
        cart.add(&clubs[0], 3);

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_remove_and_update_quantity() {
        let clubs = seed_clubs();
        let mut cart = TicketCart::new();
        cart.add(&clubs[0], 1);
        cart.add(&clubs[1], 1);

        cart.update_quantity(&clubs[0].id, 4);
        assert_eq!(cart.items()[0].quantity, 4);

        cart.remove(&clubs[1].id);
        assert_eq!(cart.items().len(), 1);

        // Unknown ids change nothing
        cart.update_quantity("99", 7);
        cart.remove("99");
        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.items()[0].quantity, 4);
    }

    #[test]
    fn test_total_across_lines() {
        let clubs = seed_clubs();
        let mut cart = TicketCart::new();
        cart.add(&clubs[0], 2);
        cart.add(&clubs[1], 1);
        assert_eq!(cart.total(), 3 * TICKET_PRICE);
    }

    #[test]
    fn test_checkout_drains_cart() {
        let clubs = seed_clubs();
        let mut cart = TicketCart::new();
        cart.add(&clubs[0], 2);
        let expected_total = cart.total();

        let order = cart.checkout().unwrap();
        assert_eq!(order.total, expected_total);
        assert_eq!(order.items.len(), 1);
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0);
    }

    #[test]
    fn test_checkout_empty_cart_is_none() {
        let mut cart = TicketCart::new();
        assert!(cart.checkout().is_none());
    }

    #[test]
    fn test_clear() {
        let clubs = seed_clubs();
        let mut cart = TicketCart::new();
        cart.add(&clubs[0], 1);
        cart.clear();
        assert!(cart.is_empty());
    }
}
