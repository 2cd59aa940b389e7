use actix_web::{web, HttpResponse};
use validator::Validate;

use rn_core::{AccountRepository, PricingRepository, SignupOrderRepository};
use rn_shared::ApiResponse;

use crate::dto::{LoginRequestDto, SessionResponse};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/login
///
/// Unknown email and wrong password both answer 401 `INVALID_CREDENTIALS`;
/// a deactivated account answers 403.
pub async fn login<A, P, O>(
    state: web::Data<AppState<A, P, O>>,
    request: web::Json<LoginRequestDto>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: PricingRepository + 'static,
    O: SignupOrderRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let session = state
        .signup_service
        .login(&request.email, &request.password)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::success(SessionResponse {
        status: None,
        user: session.user,
        token: session.token,
    })))
}
