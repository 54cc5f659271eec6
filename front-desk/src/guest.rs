//! Guest session
//!
//! One guest per process run. The guest owns their order history; nothing
//! else mutates an order's items once it is appended, only the lifecycle
//! setters exposed on [`Order`] itself.

use shared::models::MenuItem;
use shared::order::Order;

#[derive(Debug)]
pub struct Guest {
    name: String,
    orders: Vec<Order>,
}

impl Guest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            orders: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Create an order from the chosen dishes. Payment happens at the desk,
    /// so a freshly created order is already paid and with the kitchen.
    pub fn create_order(&mut self, items: Vec<MenuItem>) -> &Order {
        let mut order = Order::new();
        for item in items {
            order.add_item(item);
        }
        order.mark_paid();
        self.orders.push(order);
        self.orders.last().expect("order was just pushed")
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Mutable access for externally triggered transitions (kitchen marking
    /// ready, runner marking delivered).
    pub fn orders_mut(&mut self) -> &mut [Order] {
        &mut self.orders
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use shared::order::StatusFlag;

    fn dish(name: &str, price: &str) -> MenuItem {
        MenuItem::new(name, "stuff", price.parse::<Decimal>().unwrap(), 5)
    }

    #[test]
    fn created_order_is_paid_and_with_the_kitchen() {
        let mut guest = Guest::new("Ivan");
        let order = guest.create_order(vec![dish("Soup", "5.0"), dish("Tea", "1.5")]);

        assert_eq!(order.items().len(), 2);
        assert_eq!(
            order.status_flags(),
            vec![StatusFlag::Paid, StatusFlag::InProgress]
        );
    }

    #[test]
    fn orders_accumulate_in_creation_order() {
        let mut guest = Guest::new("Ivan");
        guest.create_order(vec![dish("Soup", "5.0")]);
        guest.create_order(vec![]);

        assert_eq!(guest.orders().len(), 2);
        assert_eq!(guest.orders()[0].items().len(), 1);
        assert!(guest.orders()[1].items().is_empty());
    }
}
