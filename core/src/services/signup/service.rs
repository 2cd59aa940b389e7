//! Main signup service implementation

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use rn_shared::utils::validation::{is_valid_email, is_valid_username, mask_email, normalize_email};

use crate::domain::entities::{Account, AccountView, PaymentOrder, PendingSignup, Role, SignupOrder, SignupPrice};
use crate::domain::value_objects::{AuthSession, SignupOutcome};
use crate::errors::{DomainError, DomainResult, SessionError, ValidationError};
use crate::repositories::{AccountRepository, PricingRepository, SignupOrderRepository};
use crate::services::password::{hash_password, validate_password, verify_password, MAX_PASSWORD_BYTES};
use crate::services::payment::{CreateOrderRequest, PaymentGateway};
use crate::services::session::SessionService;

use super::config::SignupServiceConfig;
use super::types::{PaymentVerification, SignupRequest};

/// Signup fields after validation and normalization
struct ValidatedSignup {
    email: String,
    username: String,
    password: String,
    role: Role,
}

/// Orchestrates free and paid signup, login and account lookup
pub struct SignupService<A, P, O>
where
    A: AccountRepository,
    P: PricingRepository,
    O: SignupOrderRepository,
{
    /// Account persistence
    accounts: Arc<A>,
    /// Per-role signup prices, read on every attempt
    pricing: Arc<P>,
    /// Orders issued for paid signups
    orders: Arc<O>,
    /// Payment gateway; `None` when credentials are not configured
    gateway: Option<Arc<dyn PaymentGateway>>,
    /// Session token issuance
    sessions: Arc<SessionService>,
    config: SignupServiceConfig,
}

impl<A, P, O> SignupService<A, P, O>
where
    A: AccountRepository,
    P: PricingRepository,
    O: SignupOrderRepository,
{
    /// Create a new signup service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Account repository
    /// * `pricing` - Pricing repository
    /// * `orders` - Signup order repository
    /// * `gateway` - Payment gateway, or `None` to refuse paid signups
    /// * `sessions` - Session token service
    /// * `config` - Service configuration
    pub fn new(
        accounts: Arc<A>,
        pricing: Arc<P>,
        orders: Arc<O>,
        gateway: Option<Arc<dyn PaymentGateway>>,
        sessions: Arc<SessionService>,
        config: SignupServiceConfig,
    ) -> Self {
        Self {
            accounts,
            pricing,
            orders,
            gateway,
            sessions,
            config,
        }
    }

    /// Start a signup for a role
    ///
    /// This method:
    /// 1. Validates the fields and rejects taken emails or usernames
    /// 2. Reads the role's current price
    /// 3. Free: creates the account and issues a session
    /// 4. Paid: creates a gateway order and records it; no account is created
    ///
    /// # Returns
    ///
    /// * `Ok(SignupOutcome::Provisioned)` - Free signup completed
    /// * `Ok(SignupOutcome::PaymentRequired)` - Client must pay for the order
    /// * `Err(DomainError::Validation)` - Missing or malformed fields
    /// * `Err(DomainError::AlreadyExists)` - Email or username taken
    /// * `Err(DomainError::GatewayUnavailable)` - Paid role but no gateway
    /// * `Err(DomainError::Gateway)` - Order creation failed upstream
    pub async fn initiate_signup(&self, request: SignupRequest) -> DomainResult<SignupOutcome> {
        let signup = self.validate(request)?;
        self.ensure_available(&signup.email, &signup.username).await?;

        let price = self.pricing.get(signup.role).await?;
        debug!(
            email = %mask_email(&signup.email),
            role = %signup.role,
            free = price.is_free(),
            "Signup price resolved"
        );

        match price {
            SignupPrice::Free => {
                let account = Account::new_free(
                    signup.email,
                    signup.username,
                    hash_password(&signup.password, self.config.bcrypt_cost).await?,
                    signup.role,
                );
                let session = self.provision(account).await?;
                info!(
                    account_id = %session.user.id,
                    role = %session.user.role,
                    "Free signup completed"
                );
                Ok(SignupOutcome::Provisioned(session))
            }
            SignupPrice::Paid(amount) => self.create_signup_order(signup, amount).await,
        }
    }

    async fn create_signup_order(
        &self,
        signup: ValidatedSignup,
        amount: i64,
    ) -> DomainResult<SignupOutcome> {
        let gateway = self.gateway()?;

        let receipt = format!("signup_{}_{}", signup.role, Utc::now().timestamp());
        let gateway_order = gateway
            .create_order(CreateOrderRequest {
                amount,
                currency: self.config.currency.clone(),
                receipt,
            })
            .await?;

        let order = PaymentOrder {
            order_id: gateway_order.id,
            amount,
            currency: self.config.currency.clone(),
            key_id: gateway.key_id().to_string(),
        };
        let pending = PendingSignup {
            email: signup.email,
            username: signup.username,
            password: signup.password,
            role: signup.role,
        };

        self.orders.save(SignupOrder::new(&order, &pending)).await?;

        info!(
            order_id = %order.order_id,
            email = %mask_email(&pending.email),
            role = %pending.role,
            amount_minor = amount,
            "Signup payment order created"
        );
        Ok(SignupOutcome::PaymentRequired { order, pending })
    }

    /// Verify a checkout and create the paid account
    ///
    /// The signature check runs before anything is read from or written to
    /// storage for the order. A payment id already held by an account is
    /// refused. When an order record exists its email, username and role must
    /// match the submitted ones and its amount is what gets recorded.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthSession)` - Account created and session issued
    /// * `Err(DomainError::SignatureInvalid)` - Signature mismatch; nothing persisted
    /// * `Err(DomainError::AlreadyExists)` - Account already created, e.g. a replay
    /// * `Err(DomainError::GatewayUnavailable)` - No gateway secret to verify with
    pub async fn verify_payment(&self, verification: PaymentVerification) -> DomainResult<AuthSession> {
        let payment_id = required(&verification.payment_id, "payment_id")?;
        let order_id = required(&verification.order_id, "order_id")?;
        let signature = required(&verification.signature, "signature")?;
        let signup = self.validate(verification.as_signup())?;

        let gateway = self.gateway()?;
        if !gateway.verify_payment_signature(&order_id, &payment_id, &signature) {
            warn!(
                order_id = %order_id,
                email = %mask_email(&signup.email),
                "Payment signature mismatch"
            );
            return Err(DomainError::SignatureInvalid);
        }

        // One payment provisions at most one account, whatever identity is echoed
        if self.accounts.find_by_transaction_id(&payment_id).await?.is_some() {
            warn!(order_id = %order_id, "Payment already used to provision an account");
            return Err(DomainError::already_exists("transaction_id"));
        }

        let amount = match self.orders.find_by_order_id(&order_id).await? {
            Some(record) => {
                if !record.matches(&signup.email, &signup.username, signup.role) {
                    warn!(order_id = %order_id, "Verification does not match the recorded order");
                    return Err(ValidationError::BusinessRuleViolation {
                        rule: "payment order was issued for a different signup".to_string(),
                    }
                    .into());
                }
                record.amount_minor
            }
            None => {
                let price = self.pricing.get(signup.role).await?;
                warn!(
                    order_id = %order_id,
                    role = %signup.role,
                    "No recorded order; using current role price"
                );
                price.amount_minor()
            }
        };

        self.ensure_available(&signup.email, &signup.username).await?;

        let account = Account::new_paid(
            signup.email,
            signup.username,
            hash_password(&signup.password, self.config.bcrypt_cost).await?,
            signup.role,
            payment_id,
            amount,
        );
        let session = self.provision(account).await?;

        if let Err(e) = self.orders.delete(&order_id).await {
            warn!(order_id = %order_id, error = %e, "Failed to remove consumed signup order");
        }

        info!(
            account_id = %session.user.id,
            role = %session.user.role,
            order_id = %order_id,
            amount_minor = amount,
            "Paid signup completed"
        );
        Ok(session)
    }

    /// Authenticate with email and password
    ///
    /// Unknown email and wrong password produce the same error.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthSession> {
        let email = required(email, "email").map(|e| normalize_email(&e))?;
        if password.is_empty() {
            return Err(ValidationError::required("password").into());
        }
        // bcrypt ignores bytes past the limit, so longer input could match a prefix
        if password.len() > MAX_PASSWORD_BYTES {
            return Err(SessionError::InvalidCredentials.into());
        }

        let account = match self.accounts.find_by_email(&email).await? {
            Some(account) => account,
            None => {
                debug!(email = %mask_email(&email), "Login for unknown email");
                return Err(SessionError::InvalidCredentials.into());
            }
        };

        if !verify_password(password, &account.password_hash).await? {
            debug!(account_id = %account.id, "Login with wrong password");
            return Err(SessionError::InvalidCredentials.into());
        }
        if !account.is_active {
            return Err(DomainError::forbidden("Account is deactivated"));
        }

        let token = self.sessions.issue(&account)?;
        info!(account_id = %account.id, "Login succeeded");
        Ok(AuthSession::new(&account, token))
    }

    /// Look up the account behind a session
    pub async fn current_account(&self, account_id: Uuid) -> DomainResult<AccountView> {
        let account = self
            .accounts
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                resource: "Account".to_string(),
            })?;

        if !account.is_active {
            return Err(DomainError::forbidden("Account is deactivated"));
        }
        Ok(account.view())
    }

    fn gateway(&self) -> DomainResult<&Arc<dyn PaymentGateway>> {
        self.gateway.as_ref().ok_or(DomainError::GatewayUnavailable)
    }

    async fn ensure_available(&self, email: &str, username: &str) -> DomainResult<()> {
        match self.accounts.find_conflict(email, username).await? {
            Some(field) => Err(DomainError::already_exists(field)),
            None => Ok(()),
        }
    }

    /// Insert the account and issue its session
    async fn provision(&self, account: Account) -> DomainResult<AuthSession> {
        let account = self.accounts.create(account).await?;
        let token = self.sessions.issue(&account)?;
        Ok(AuthSession::new(&account, token))
    }

    fn validate(&self, request: SignupRequest) -> Result<ValidatedSignup, ValidationError> {
        let email = normalize_email(&required(&request.email, "email")?);
        if !is_valid_email(&email) {
            return Err(ValidationError::InvalidEmail);
        }

        let username = required(&request.username, "username")?;
        if !is_valid_username(&username) {
            return Err(ValidationError::InvalidFormat {
                field: "username".to_string(),
            });
        }

        validate_password(&request.password, self.config.min_password_length)?;

        if !request.role.is_signup_role() {
            return Err(ValidationError::RoleNotAllowed {
                role: request.role.to_string(),
            });
        }

        Ok(ValidatedSignup {
            email,
            username,
            password: request.password,
            role: request.role,
        })
    }
}

/// Trimmed value, or `RequiredField` when blank
fn required(value: &str, field: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::required(field))
    } else {
        Ok(trimmed.to_string())
    }
}
