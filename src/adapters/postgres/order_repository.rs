//! PostgreSQL implementation of OrderRepository.
//!
//! Orders are read with their customer joined in, order lines with their
//! product joined in. Review scores live on the order line row.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use crate::domain::foundation::{
    CustomerId, DomainError, ErrorCode, OrderId, OrderProductId, OrderStatus, ProductId,
    Timestamp,
};
use crate::domain::order::{Customer, Order, OrderProduct, Product};
use crate::ports::OrderRepository;

/// PostgreSQL implementation of OrderRepository.
#[derive(Clone)]
pub struct PostgresOrderRepository {
    pool: PgPool,
}

impl PostgresOrderRepository {
    /// Creates a new PostgresOrderRepository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderRepository for PostgresOrderRepository {
    async fn find_order(&self, order_id: &OrderId) -> Result<Option<Order>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT o.id, o.status, o.placed_date,
                   c.id AS customer_id, c.first_name, c.last_name, c.email,
                   c.phone_number, c.registration_date
            FROM orders o
            JOIN customers c ON c.id = o.customer_id
            WHERE o.id = $1
            "#,
        )
        .bind(order_id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch order: {}", e)))?;

        row.map(row_to_order).transpose()
    }

    async fn find_order_products(
        &self,
        order_id: &OrderId,
    ) -> Result<Vec<OrderProduct>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT op.id, op.order_id, op.quantity,
                   p.id AS product_id, p.name, p.description, p.image,
                   p.availability_status, p.available_items, p.manufacturer,
                   p.vehicle, p.external_id, p.created_at AS product_created_at
            FROM order_products op
            JOIN products p ON p.id = op.product_id
            WHERE op.order_id = $1
            ORDER BY op.created_at, op.id
            "#,
        )
        .bind(order_id.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to fetch order products: {}", e)))?;

        rows.into_iter().map(row_to_order_product).collect()
    }

    async fn update_order_status(
        &self,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), DomainError> {
        let result = sqlx::query("UPDATE orders SET status = $2 WHERE id = $1")
            .bind(order_id.as_uuid())
            .bind(status.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to update order status: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::OrderNotFound,
                format!("Order not found: {}", order_id),
            )
            .with_detail("order_id", order_id.to_string()));
        }

        Ok(())
    }

    async fn record_review(
        &self,
        order_product_id: &OrderProductId,
        score: i64,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE order_products SET
                review_score = $2,
                reviewed_at = $3
            WHERE id = $1
            "#,
        )
        .bind(order_product_id.as_uuid())
        .bind(score)
        .bind(Timestamp::now().as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database(format!("Failed to record review: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(
                ErrorCode::OrderProductNotFound,
                format!("Order product not found: {}", order_product_id),
            )
            .with_detail("order_product_id", order_product_id.to_string()));
        }

        Ok(())
    }

    async fn upsert_product(&self, product: &Product) -> Result<(), DomainError> {
        // Without an external id there is nothing to match on but the
        // primary key.
        let conflict_target = if product.external_id.is_some() {
            "(external_id)"
        } else {
            "(id)"
        };

        let statement = format!(
            r#"
            INSERT INTO products (
                id, name, description, image, availability_status,
                available_items, manufacturer, vehicle, external_id, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT {} DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                image = EXCLUDED.image,
                availability_status = EXCLUDED.availability_status,
                available_items = EXCLUDED.available_items,
                manufacturer = EXCLUDED.manufacturer,
                vehicle = EXCLUDED.vehicle,
                created_at = EXCLUDED.created_at
            "#,
            conflict_target
        );

        sqlx::query(&statement)
            .bind(product.id.as_uuid())
            .bind(&product.name)
            .bind(&product.description)
            .bind(&product.image)
            .bind(&product.availability_status)
            .bind(product.available_items)
            .bind(&product.manufacturer)
            .bind(&product.vehicle)
            .bind(product.external_id.as_deref())
            .bind(product.created_at.as_datetime())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database(format!("Failed to upsert product: {}", e)))?;

        Ok(())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════════

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::database(format!("Failed to get {}: {}", name, e)))
}

fn timestamp(row: &PgRow, name: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = column(row, name)?;
    Ok(Timestamp::from_datetime(value))
}

fn row_to_order(row: PgRow) -> Result<Order, DomainError> {
    let status: String = column(&row, "status")?;
    let status = status.parse::<OrderStatus>().map_err(|e| {
        DomainError::new(
            ErrorCode::DatabaseError,
            format!("Invalid stored order status: {}", e),
        )
    })?;

    Ok(Order {
        id: OrderId::from_uuid(column(&row, "id")?),
        customer: Customer {
            id: CustomerId::from_uuid(column(&row, "customer_id")?),
            first_name: column(&row, "first_name")?,
            last_name: column(&row, "last_name")?,
            email: column(&row, "email")?,
            phone_number: column(&row, "phone_number")?,
            registration_date: timestamp(&row, "registration_date")?,
        },
        status,
        placed_date: timestamp(&row, "placed_date")?,
    })
}

fn row_to_order_product(row: PgRow) -> Result<OrderProduct, DomainError> {
    Ok(OrderProduct {
        id: OrderProductId::from_uuid(column(&row, "id")?),
        order_id: OrderId::from_uuid(column(&row, "order_id")?),
        quantity: column(&row, "quantity")?,
        product: Product {
            id: ProductId::from_uuid(column(&row, "product_id")?),
            name: column(&row, "name")?,
            description: column(&row, "description")?,
            image: column(&row, "image")?,
            availability_status: column(&row, "availability_status")?,
            available_items: column(&row, "available_items")?,
            manufacturer: column(&row, "manufacturer")?,
            vehicle: column(&row, "vehicle")?,
            external_id: column(&row, "external_id")?,
            created_at: timestamp(&row, "product_created_at")?,
        },
    })
}
