//! Configuration for the session service

use rn_shared::config::JwtConfig;

use crate::domain::entities::{JWT_AUDIENCE, JWT_ISSUER, SESSION_EXPIRY_DAYS};

/// Configuration for the session service
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// HS256 signing secret
    pub jwt_secret: String,
    /// Token lifetime in days
    pub expiry_days: i64,
    pub issuer: String,
    pub audience: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            expiry_days: SESSION_EXPIRY_DAYS,
            issuer: JWT_ISSUER.to_string(),
            audience: JWT_AUDIENCE.to_string(),
        }
    }
}

impl From<&JwtConfig> for SessionConfig {
    fn from(jwt: &JwtConfig) -> Self {
        Self {
            jwt_secret: jwt.secret.clone(),
            expiry_days: jwt.expiry_days,
            issuer: jwt.issuer.clone(),
            audience: jwt.audience.clone(),
        }
    }
}
