//! Customer-facing texts of the review conversation.

use crate::domain::order::{Order, OrderProduct};

/// Opening message, addressed by first name and mentioning when the order
/// was placed.
pub fn welcome_message(order: &Order) -> String {
    format!(
        "Hey {}! Hope you have received your order you placed at {} as expected! \
         We would love some feedback for the products you have received!",
        order.customer.first_name,
        order.placed_date.to_display_string()
    )
}

/// Prompt asking for the review of one purchased product.
pub fn ask_for_review_message(line: &OrderProduct) -> String {
    format!(
        "Could you please share your experience with your purchase of {}?",
        line.product_name()
    )
}

/// Closing message, addressed by last name.
pub fn closing_message(order: &Order) -> String {
    format!(
        "Thank you for your time reviewing your products! Hope to see you again {}!",
        order.customer.last_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{CustomerId, OrderId, OrderStatus, Timestamp};
    use crate::domain::order::{Customer, Product};
    use chrono::{TimeZone, Utc};

    fn order() -> Order {
        Order {
            id: OrderId::new(),
            customer: Customer {
                id: CustomerId::new(),
                first_name: "Grace".to_string(),
                last_name: "Hopper".to_string(),
                email: "grace@example.com".to_string(),
                phone_number: "+100".to_string(),
                registration_date: Timestamp::now(),
            },
            status: OrderStatus::Completed,
            placed_date: Timestamp::from_datetime(
                Utc.with_ymd_and_hms(2023, 11, 2, 9, 30, 0).unwrap(),
            ),
        }
    }

    #[test]
    fn welcome_uses_first_name_and_placed_date() {
        let text = welcome_message(&order());
        assert!(text.starts_with("Hey Grace! "));
        assert!(text.contains("2023-11-02 09:30:00 UTC"));
        assert!(text.ends_with("for the products you have received!"));
        assert!(!text.contains("Hopper"));
    }

    #[test]
    fn ask_names_the_product() {
        let line = OrderProduct::new(OrderId::new(), 1, Product::named("Spark plug"));
        assert_eq!(
            ask_for_review_message(&line),
            "Could you please share your experience with your purchase of Spark plug?"
        );
    }

    #[test]
    fn closing_uses_last_name() {
        assert_eq!(
            closing_message(&order()),
            "Thank you for your time reviewing your products! Hope to see you again Hopper!"
        );
    }
}
