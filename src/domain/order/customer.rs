use serde::{Deserialize, Serialize};

use crate::domain::foundation::{CustomerId, Timestamp};

/// A customer who places orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub registration_date: Timestamp,
}

impl Customer {
    /// Creates a customer registered now, without a phone number.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: CustomerId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: String::new(),
            registration_date: Timestamp::now(),
        }
    }

    /// Full display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
