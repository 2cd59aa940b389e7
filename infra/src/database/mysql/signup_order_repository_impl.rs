//! MySQL implementation of the SignupOrderRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};

use rn_core::domain::entities::{Role, SignupOrder};
use rn_core::errors::DomainError;
use rn_core::repositories::SignupOrderRepository;

use super::errors::map_sqlx_error;

pub struct MySqlSignupOrderRepository {
    pool: MySqlPool,
}

impl MySqlSignupOrderRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_order(row: &MySqlRow) -> Result<SignupOrder, DomainError> {
        let column = |name: &str, e: sqlx::Error| DomainError::internal(format!("Failed to get {}: {}", name, e));
        let role: String = row.try_get("role").map_err(|e| column("role", e))?;

        Ok(SignupOrder {
            order_id: row.try_get("order_id").map_err(|e| column("order_id", e))?,
            role: role.parse::<Role>().map_err(DomainError::internal)?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            username: row.try_get("username").map_err(|e| column("username", e))?,
            amount_minor: row.try_get("amount_minor").map_err(|e| column("amount_minor", e))?,
            currency: row.try_get("currency").map_err(|e| column("currency", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
        })
    }
}

#[async_trait]
impl SignupOrderRepository for MySqlSignupOrderRepository {
    async fn save(&self, order: SignupOrder) -> Result<(), DomainError> {
        let query = r#"
            INSERT INTO signup_orders (order_id, role, email, username, amount_minor, currency, created_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                role = VALUES(role),
                email = VALUES(email),
                username = VALUES(username),
                amount_minor = VALUES(amount_minor),
                currency = VALUES(currency),
                created_at = VALUES(created_at)
        "#;

        sqlx::query(query)
            .bind(&order.order_id)
            .bind(order.role.as_str())
            .bind(&order.email)
            .bind(&order.username)
            .bind(order.amount_minor)
            .bind(&order.currency)
            .bind(order.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to save signup order"))?;
        Ok(())
    }

    async fn find_by_order_id(&self, order_id: &str) -> Result<Option<SignupOrder>, DomainError> {
        let query = r#"
            SELECT order_id, role, email, username, amount_minor, currency, created_at
            FROM signup_orders
            WHERE order_id = ?
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(order_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find signup order"))?;

        row.as_ref().map(Self::row_to_order).transpose()
    }

    async fn delete(&self, order_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM signup_orders WHERE order_id = ?")
            .bind(order_id)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to delete signup order"))?;

        Ok(result.rows_affected() > 0)
    }
}
