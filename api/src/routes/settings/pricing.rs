use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use rn_core::{AccountRepository, PricingRepository, SignupOrderRepository};
use rn_shared::ApiResponse;

use crate::dto::UpdatePricingRequest;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/settings/pricing
///
/// # Response
///
/// ```json
/// { "success": true, "adminAmount": 100.0, "userAmount": 0.0, "adminFree": false, "userFree": true }
/// ```
pub async fn get_pricing<A, P, O>(state: web::Data<AppState<A, P, O>>) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: PricingRepository + 'static,
    O: SignupOrderRepository + 'static,
{
    let pricing = state.pricing_service.get_pricing().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(pricing)))
}

/// Handler for PUT /api/v1/settings/pricing (superadmin only)
///
/// Replaces both roles' prices; the body has the same shape as the GET
/// response. A role that is not free needs a positive amount.
pub async fn update_pricing<A, P, O>(
    state: web::Data<AppState<A, P, O>>,
    auth: AuthContext,
    request: web::Json<UpdatePricingRequest>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: PricingRepository + 'static,
    O: SignupOrderRepository + 'static,
{
    auth.require_privileged()?;

    let request = request.into_inner();
    request.validate()?;

    let pricing = state.pricing_service.update_pricing(request.into()).await?;
    info!(account_id = %auth.account_id, "Signup pricing replaced");

    Ok(HttpResponse::Ok().json(ApiResponse::success(pricing)))
}
