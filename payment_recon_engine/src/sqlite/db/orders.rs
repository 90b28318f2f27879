use log::debug;
use sqlx::SqliteConnection;

use crate::{
    db_types::{NewOrder, Order, OrderId, OrderStatus, PaymentStatus},
    traits::OrderStoreError,
};

/// Inserts the order into the database, returning `false` in the second parameter if the order
/// already exists. The payment fields start out with their pending defaults from the schema.
pub async fn idempotent_insert(order: NewOrder, conn: &mut SqliteConnection) -> Result<(Order, bool), OrderStoreError> {
    let inserted = match fetch_order_by_order_id(&order.order_id, conn).await? {
        Some(order) => (order, false),
        None => {
            let order = insert_order(order, conn).await?;
            debug!("📝️ Order [{}] inserted with id {}", order.order_id, order.id);
            (order, true)
        },
    };
    Ok(inserted)
}

/// Inserts a new order into the database using the given connection. This is not atomic. You can
/// embed this call inside a transaction if you need to ensure atomicity, and pass `&mut *tx` as
/// the connection argument.
async fn insert_order(order: NewOrder, conn: &mut SqliteConnection) -> Result<Order, OrderStoreError> {
    let order = sqlx::query_as(
        r#"
            INSERT INTO orders (
                order_id,
                total_amount,
                notes,
                created_at
            ) VALUES ($1, $2, $3, $4)
            RETURNING *;
        "#,
    )
    .bind(order.order_id)
    .bind(order.total_amount)
    .bind(order.notes)
    .bind(order.created_at)
    .fetch_one(conn)
    .await?;
    Ok(order)
}

/// Returns the entry in the orders table for the corresponding `order_id`
pub async fn fetch_order_by_order_id(
    order_id: &OrderId,
    conn: &mut SqliteConnection,
) -> Result<Option<Order>, sqlx::Error> {
    let order =
        sqlx::query_as("SELECT * FROM orders WHERE order_id = $1").bind(order_id.as_str()).fetch_optional(conn).await?;
    Ok(order)
}

/// Fetches every order that is a candidate for reconciliation: payment still pending, and a
/// non-null notes field to mine for a gateway order reference.
///
/// Resulting orders are ordered by `created_at` in ascending order
pub async fn fetch_pending_orders_with_notes(conn: &mut SqliteConnection) -> Result<Vec<Order>, sqlx::Error> {
    let orders = sqlx::query_as(
        "SELECT * FROM orders WHERE payment_status = 'pending' AND notes IS NOT NULL ORDER BY created_at ASC",
    )
    .fetch_all(conn)
    .await?;
    Ok(orders)
}

/// Writes the payment-state pair onto the order and refreshes `updated_at`.
pub async fn update_payment_state(
    order_id: &OrderId,
    payment_status: PaymentStatus,
    status: OrderStatus,
    conn: &mut SqliteConnection,
) -> Result<Order, OrderStoreError> {
    let result: Option<Order> = sqlx::query_as(
        "UPDATE orders SET payment_status = $1, status = $2, updated_at = CURRENT_TIMESTAMP WHERE order_id = $3 \
         RETURNING *",
    )
    .bind(payment_status)
    .bind(status)
    .bind(order_id.as_str())
    .fetch_optional(conn)
    .await?;
    result.ok_or_else(|| OrderStoreError::OrderNotFound(order_id.clone()))
}
