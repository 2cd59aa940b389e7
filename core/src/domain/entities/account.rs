//! Account entity representing a registered marketplace identity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::pricing::MINOR_UNITS_PER_MAJOR;

/// Role assigned to an account at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Renter or lister with the base feature set
    User,
    /// Elevated role that manages listings for others
    Admin,
    /// Operator role; never created through public signup
    SuperAdmin,
}

impl Role {
    /// Roles that can be requested through the public signup flow
    pub const SIGNUP_ROLES: [Role; 2] = [Role::User, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "superadmin",
        }
    }

    /// Whether this role may be requested at signup
    pub fn is_signup_role(&self) -> bool {
        Self::SIGNUP_ROLES.contains(self)
    }

    /// Whether this role may change platform settings such as pricing
    ///
    /// Only the operator role; admin is open to public signup.
    pub fn is_privileged(&self) -> bool {
        matches!(self, Role::SuperAdmin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "superadmin" => Ok(Role::SuperAdmin),
            other => Err(format!("Unknown role: {}", other)),
        }
    }
}

/// Billing plan the account was created under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPlan {
    Free,
    Paid,
}

impl PaymentPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentPlan::Free => "free",
            PaymentPlan::Paid => "paid",
        }
    }
}

impl std::str::FromStr for PaymentPlan {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "free" => Ok(PaymentPlan::Free),
            "paid" => Ok(PaymentPlan::Paid),
            other => Err(format!("Unknown payment plan: {}", other)),
        }
    }
}

/// Payment state of the account's signup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    Pending,
    Completed,
    Failed,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "pending",
            PaymentStatus::Completed => "completed",
            PaymentStatus::Failed => "failed",
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(PaymentStatus::Pending),
            "completed" => Ok(PaymentStatus::Completed),
            "failed" => Ok(PaymentStatus::Failed),
            other => Err(format!("Unknown payment status: {}", other)),
        }
    }
}

/// Account entity
///
/// Accounts are only ever built through [`Account::new_free`] or
/// [`Account::new_paid`], which keep `paid`, `payment_status` and
/// `transaction_id` consistent with each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: Uuid,

    /// Login email, stored lower-cased; unique
    pub email: String,

    /// Public handle; unique
    pub username: String,

    /// bcrypt hash of the password
    pub password_hash: String,

    /// Role granted at signup
    pub role: Role,

    /// Plan the account was created under
    pub payment_plan: PaymentPlan,

    /// Whether a verified payment backs this account
    pub paid: bool,

    /// Signup payment status
    pub payment_status: PaymentStatus,

    /// Gateway payment id of the verified signup payment
    pub transaction_id: Option<String>,

    /// Amount paid at signup, in minor currency units
    pub payment_amount_minor: i64,

    /// Whether the account may log in
    pub is_active: bool,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the account was last updated
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Account created on the free path
    pub fn new_free(email: String, username: String, password_hash: String, role: Role) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            role,
            payment_plan: PaymentPlan::Free,
            paid: false,
            payment_status: PaymentStatus::Completed,
            transaction_id: None,
            payment_amount_minor: 0,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Account created after a verified gateway payment
    pub fn new_paid(
        email: String,
        username: String,
        password_hash: String,
        role: Role,
        transaction_id: String,
        payment_amount_minor: i64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            username,
            password_hash,
            role,
            payment_plan: PaymentPlan::Paid,
            paid: true,
            payment_status: PaymentStatus::Completed,
            transaction_id: Some(transaction_id),
            payment_amount_minor,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Amount paid in major units (e.g. rupees)
    pub fn payment_amount(&self) -> f64 {
        self.payment_amount_minor as f64 / MINOR_UNITS_PER_MAJOR as f64
    }

    /// Check the paid flag against status and transaction reference
    pub fn payment_state_is_consistent(&self) -> bool {
        if self.paid {
            self.payment_status == PaymentStatus::Completed && self.transaction_id.is_some()
        } else {
            self.transaction_id.is_none()
        }
    }

    /// Disables login for the account
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }

    /// Public projection without credential material
    pub fn view(&self) -> AccountView {
        AccountView::from(self)
    }
}

/// Account fields safe to return to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountView {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub role: Role,
    pub payment_plan: PaymentPlan,
    pub paid: bool,
    pub payment_status: PaymentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub payment_amount: f64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            email: account.email.clone(),
            username: account.username.clone(),
            role: account.role,
            payment_plan: account.payment_plan,
            paid: account.paid,
            payment_status: account.payment_status,
            transaction_id: account.transaction_id.clone(),
            payment_amount: account.payment_amount(),
            is_active: account.is_active,
            created_at: account.created_at,
        }
    }
}
