use serde::Deserialize;
use validator::Validate;

use rn_core::PricingUpdate;

/// Body of `PUT /api/v1/settings/pricing`, amounts in major units
///
/// Positivity of paid amounts is checked by the pricing service; this only
/// bounds the values.
#[derive(Debug, Clone, Copy, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingRequest {
    #[serde(default)]
    #[validate(range(max = 10000000.0))]
    pub admin_amount: Option<f64>,

    #[serde(default)]
    #[validate(range(max = 10000000.0))]
    pub user_amount: Option<f64>,

    #[serde(default)]
    pub admin_free: bool,

    #[serde(default)]
    pub user_free: bool,
}

impl From<UpdatePricingRequest> for PricingUpdate {
    fn from(request: UpdatePricingRequest) -> Self {
        PricingUpdate {
            admin_amount: request.admin_amount,
            user_amount: request.user_amount,
            admin_free: request.admin_free,
            user_free: request.user_free,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_body() {
        let request: UpdatePricingRequest =
            serde_json::from_str(r#"{"adminAmount": 100, "userFree": true}"#).unwrap();
        assert_eq!(request.admin_amount, Some(100.0));
        assert!(request.user_free);
        assert!(!request.admin_free);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_huge_amount_fails_validation() {
        let request = UpdatePricingRequest {
            admin_amount: Some(1e12),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }
}
