//! Pricing service: reads and replaces per-role signup prices

use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use crate::domain::entities::{Role, SignupPrice};
use crate::domain::value_objects::PricingView;
use crate::errors::{DomainResult, ValidationError};
use crate::repositories::PricingRepository;

/// Requested pricing change, amounts in major units
///
/// An amount may be omitted for a role marked free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingUpdate {
    #[serde(default)]
    pub admin_amount: Option<f64>,
    #[serde(default)]
    pub user_amount: Option<f64>,
    #[serde(default)]
    pub admin_free: bool,
    #[serde(default)]
    pub user_free: bool,
}

/// Service for reading and changing signup prices
///
/// Every read goes to the repository; nothing is cached.
pub struct PricingService<P: PricingRepository> {
    repository: Arc<P>,
}

impl<P: PricingRepository> PricingService<P> {
    pub fn new(repository: Arc<P>) -> Self {
        Self { repository }
    }

    /// Current price for a single role
    pub async fn price_for(&self, role: Role) -> DomainResult<SignupPrice> {
        self.repository.get(role).await
    }

    /// Current pricing for both signup roles
    pub async fn get_pricing(&self) -> DomainResult<PricingView> {
        let admin = self.repository.get(Role::Admin).await?;
        let user = self.repository.get(Role::User).await?;
        Ok(PricingView::from_prices(admin, user))
    }

    /// Set the price for one role
    ///
    /// # Arguments
    ///
    /// * `role` - Role being priced; must be open for signup
    /// * `amount` - Major-unit amount, ignored when `is_free`
    /// * `is_free` - Whether signup for the role is free
    pub async fn set_pricing(
        &self,
        role: Role,
        amount: Option<f64>,
        is_free: bool,
    ) -> DomainResult<SignupPrice> {
        if !role.is_signup_role() {
            return Err(ValidationError::RoleNotAllowed {
                role: role.to_string(),
            }
            .into());
        }
        let price = parse_price(role, amount, is_free)?;
        self.repository.set(role, price).await?;

        info!(role = %role, amount_minor = price.amount_minor(), "Signup price updated");
        Ok(price)
    }

    /// Replace pricing for both signup roles
    ///
    /// Both entries are validated before either is written, so an invalid
    /// update leaves the stored pricing untouched.
    pub async fn update_pricing(&self, update: PricingUpdate) -> DomainResult<PricingView> {
        let admin = parse_price(Role::Admin, update.admin_amount, update.admin_free)?;
        let user = parse_price(Role::User, update.user_amount, update.user_free)?;

        self.repository
            .set_many(&[(Role::Admin, admin), (Role::User, user)])
            .await?;

        info!(
            admin_minor = admin.amount_minor(),
            user_minor = user.amount_minor(),
            "Signup pricing updated"
        );
        self.get_pricing().await
    }
}

fn parse_price(role: Role, amount: Option<f64>, is_free: bool) -> Result<SignupPrice, ValidationError> {
    let field = format!("{}Amount", role.as_str());
    if is_free {
        return Ok(SignupPrice::Free);
    }
    let amount = amount.ok_or_else(|| ValidationError::required(field.clone()))?;
    SignupPrice::from_major(amount, false)
        .map_err(|reason| ValidationError::InvalidAmount { field, reason })
}
