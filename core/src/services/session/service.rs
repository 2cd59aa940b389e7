//! Session service implementation

use jsonwebtoken::{decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::{Account, Claims};
use crate::errors::{DomainError, DomainResult, SessionError};

use super::config::SessionConfig;

/// Issues and verifies HS256 session tokens
pub struct SessionService {
    config: SessionConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionService {
    pub fn new(config: SessionConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[config.issuer.as_str()]);
        validation.set_audience(&[config.audience.as_str()]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// Token lifetime in days
    pub fn expiry_days(&self) -> i64 {
        self.config.expiry_days
    }

    /// Issue a session token for an account
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Signed JWT embedding account id and role
    /// * `Err(DomainError::Unauthorized)` - Encoding failed
    pub fn issue(&self, account: &Account) -> DomainResult<String> {
        let claims = Claims::new_session(
            account.id,
            account.role,
            self.config.expiry_days,
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_claims(&claims)
    }

    pub(crate) fn encode_claims(&self, claims: &Claims) -> DomainResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|_| DomainError::Unauthorized(SessionError::TokenGenerationFailed))
    }

    /// Verify a session token and return its claims
    ///
    /// # Returns
    ///
    /// * `Ok(Claims)` - Token is authentic and within its validity window
    /// * `Err(DomainError::Unauthorized)` - Token is expired, malformed or forged
    pub fn verify(&self, token: &str) -> DomainResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => DomainError::Unauthorized(SessionError::TokenExpired),
                _ => DomainError::Unauthorized(SessionError::InvalidToken),
            })
    }
}
