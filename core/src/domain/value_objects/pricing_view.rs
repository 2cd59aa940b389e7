//! Client-facing pricing summary.

use serde::{Deserialize, Serialize};

use crate::domain::entities::pricing::SignupPrice;

/// Pricing as reported to and accepted from clients, in major units
///
/// A role whose stored amount is zero is reported as free with amount 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingView {
    pub admin_amount: f64,
    pub user_amount: f64,
    pub admin_free: bool,
    pub user_free: bool,
}

impl PricingView {
    pub fn from_prices(admin: SignupPrice, user: SignupPrice) -> Self {
        Self {
            admin_amount: admin.amount_major(),
            user_amount: user.amount_major(),
            admin_free: admin.is_free(),
            user_free: user.is_free(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_prices() {
        let view = PricingView::from_prices(SignupPrice::Paid(10000), SignupPrice::Free);
        assert_eq!(view.admin_amount, 100.0);
        assert!(!view.admin_free);
        assert_eq!(view.user_amount, 0.0);
        assert!(view.user_free);
    }

    #[test]
    fn test_camel_case_wire_format() {
        let view = PricingView::from_prices(SignupPrice::Free, SignupPrice::Paid(4950));
        let json = serde_json::to_value(view).unwrap();
        assert_eq!(json["adminFree"], true);
        assert_eq!(json["userAmount"], 49.5);
    }
}
