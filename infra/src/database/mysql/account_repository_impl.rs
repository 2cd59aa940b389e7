//! MySQL implementation of the AccountRepository trait.
//!
//! Uniqueness of email, username and transaction id is enforced by unique keys; a concurrent
//! duplicate insert surfaces as MySQL error 1062 and is reported as
//! `DomainError::AlreadyExists`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{mysql::MySqlRow, MySqlPool, Row};
use uuid::Uuid;

use rn_core::domain::entities::{Account, PaymentPlan, PaymentStatus, Role};
use rn_core::errors::DomainError;
use rn_core::repositories::AccountRepository;

use super::errors::map_sqlx_error;

const ACCOUNT_COLUMNS: &str = r#"
    id, email, username, password_hash, role, payment_plan, paid, payment_status,
    transaction_id, payment_amount_minor, is_active, created_at, updated_at
"#;

/// MySQL implementation of AccountRepository
pub struct MySqlAccountRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlAccountRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &MySqlRow) -> Result<Account, DomainError> {
        let column = |name: &str, e: sqlx::Error| DomainError::internal(format!("Failed to get {}: {}", name, e));

        let id: String = row.try_get("id").map_err(|e| column("id", e))?;
        let role: String = row.try_get("role").map_err(|e| column("role", e))?;
        let plan: String = row.try_get("payment_plan").map_err(|e| column("payment_plan", e))?;
        let status: String = row.try_get("payment_status").map_err(|e| column("payment_status", e))?;

        Ok(Account {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid account UUID: {}", e)))?,
            email: row.try_get("email").map_err(|e| column("email", e))?,
            username: row.try_get("username").map_err(|e| column("username", e))?,
            password_hash: row.try_get("password_hash").map_err(|e| column("password_hash", e))?,
            role: role.parse::<Role>().map_err(DomainError::internal)?,
            payment_plan: plan.parse::<PaymentPlan>().map_err(DomainError::internal)?,
            paid: row.try_get("paid").map_err(|e| column("paid", e))?,
            payment_status: status.parse::<PaymentStatus>().map_err(DomainError::internal)?,
            transaction_id: row.try_get("transaction_id").map_err(|e| column("transaction_id", e))?,
            payment_amount_minor: row
                .try_get("payment_amount_minor")
                .map_err(|e| column("payment_amount_minor", e))?,
            is_active: row.try_get("is_active").map_err(|e| column("is_active", e))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| column("created_at", e))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| column("updated_at", e))?,
        })
    }

    async fn find_one(&self, filter: &str, value: String) -> Result<Option<Account>, DomainError> {
        let query = format!("SELECT {} FROM accounts WHERE {} = ? LIMIT 1", ACCOUNT_COLUMNS, filter);

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to find account"))?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for MySqlAccountRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn find_by_transaction_id(&self, transaction_id: &str) -> Result<Option<Account>, DomainError> {
        self.find_one("transaction_id", transaction_id.to_string()).await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn find_conflict(
        &self,
        email: &str,
        username: &str,
    ) -> Result<Option<&'static str>, DomainError> {
        let query = r#"
            SELECT
                EXISTS(SELECT 1 FROM accounts WHERE email = ?) AS email_taken,
                EXISTS(SELECT 1 FROM accounts WHERE username = ?) AS username_taken
        "#;

        let row = sqlx::query(query)
            .bind(email)
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to check account existence"))?;

        let email_taken: i64 = row
            .try_get("email_taken")
            .map_err(|e| DomainError::internal(format!("Failed to get email_taken: {}", e)))?;
        let username_taken: i64 = row
            .try_get("username_taken")
            .map_err(|e| DomainError::internal(format!("Failed to get username_taken: {}", e)))?;

        Ok(if email_taken == 1 {
            Some("email")
        } else if username_taken == 1 {
            Some("username")
        } else {
            None
        })
    }

    async fn create(&self, account: Account) -> Result<Account, DomainError> {
        let query = r#"
            INSERT INTO accounts (
                id, email, username, password_hash, role, payment_plan, paid,
                payment_status, transaction_id, payment_amount_minor, is_active,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(account.id.to_string())
            .bind(&account.email)
            .bind(&account.username)
            .bind(&account.password_hash)
            .bind(account.role.as_str())
            .bind(account.payment_plan.as_str())
            .bind(account.paid)
            .bind(account.payment_status.as_str())
            .bind(&account.transaction_id)
            .bind(account.payment_amount_minor)
            .bind(account.is_active)
            .bind(account.created_at)
            .bind(account.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error(e, "Failed to create account"))?;

        tracing::debug!(account_id = %account.id, role = %account.role, "Account inserted");
        Ok(account)
    }
}
