use actix_web::{web, HttpResponse};

use rn_core::{AccountRepository, PricingRepository, SignupOrderRepository};
use rn_shared::ApiResponse;

use crate::dto::CurrentAccountResponse;
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::routes::AppState;

/// Handler for GET /api/v1/auth/me (requires authentication)
pub async fn me<A, P, O>(
    state: web::Data<AppState<A, P, O>>,
    auth: AuthContext,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: PricingRepository + 'static,
    O: SignupOrderRepository + 'static,
{
    let user = state.signup_service.current_account(auth.account_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(CurrentAccountResponse { user })))
}
