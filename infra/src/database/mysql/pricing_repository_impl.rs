//! MySQL implementation of the PricingRepository trait.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::MySqlPool;

use rn_core::domain::entities::{Role, SignupPrice};
use rn_core::errors::DomainError;
use rn_core::repositories::PricingRepository;

use super::errors::map_sqlx_error;

const UPSERT_PRICE: &str = r#"
    INSERT INTO pricing_config (role, amount_minor, updated_at)
    VALUES (?, ?, ?)
    ON DUPLICATE KEY UPDATE amount_minor = VALUES(amount_minor), updated_at = VALUES(updated_at)
"#;

/// Role-keyed price rows; an absent row reads as free
pub struct MySqlPricingRepository {
    pool: MySqlPool,
}

impl MySqlPricingRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PricingRepository for MySqlPricingRepository {
    async fn get(&self, role: Role) -> Result<SignupPrice, DomainError> {
        let amount: Option<i64> =
            sqlx::query_scalar("SELECT amount_minor FROM pricing_config WHERE role = ?")
                .bind(role.as_str())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| map_sqlx_error(e, "Failed to read pricing"))?;

        match amount {
            Some(amount) => SignupPrice::from_minor(amount).map_err(DomainError::internal),
            None => Ok(SignupPrice::Free),
        }
    }

    async fn set(&self, role: Role, price: SignupPrice) -> Result<(), DomainError> {
        sqlx::query(UPSERT_PRICE)
            .bind(role.as_str())
            .bind(price.amount_minor())
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to write pricing"))?;
        Ok(())
    }

    async fn set_many(&self, prices: &[(Role, SignupPrice)]) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to begin pricing transaction"))?;

        let now = Utc::now();
        for (role, price) in prices {
            sqlx::query(UPSERT_PRICE)
                .bind(role.as_str())
                .bind(price.amount_minor())
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error(e, "Failed to write pricing"))?;
        }

        tx.commit()
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to commit pricing"))?;
        Ok(())
    }
}
