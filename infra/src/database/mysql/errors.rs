//! Mapping of SQLx failures onto domain errors

use sqlx::mysql::MySqlDatabaseError;

use rn_core::errors::DomainError;

/// MySQL `ER_DUP_ENTRY`
pub(crate) const ER_DUP_ENTRY: u16 = 1062;

/// Which unique key a duplicate-entry message refers to
pub(crate) fn duplicate_field(message: &str) -> &'static str {
    if message.contains("uq_accounts_username") {
        "username"
    } else if message.contains("uq_accounts_transaction") {
        "transaction_id"
    } else {
        "email"
    }
}

/// Convert a SQLx error, mapping duplicate-key failures to `AlreadyExists`
pub(crate) fn map_sqlx_error(error: sqlx::Error, context: &str) -> DomainError {
    if let Some(db_error) = error.as_database_error() {
        if let Some(mysql_error) = db_error.try_downcast_ref::<MySqlDatabaseError>() {
            if mysql_error.number() == ER_DUP_ENTRY {
                return DomainError::already_exists(duplicate_field(db_error.message()));
            }
        }
    }
    DomainError::internal(format!("{}: {}", context, error))
}
