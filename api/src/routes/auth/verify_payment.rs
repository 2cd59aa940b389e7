use actix_web::{web, HttpResponse};
use validator::Validate;

use rn_core::{AccountRepository, PricingRepository, SignupOrderRepository};
use rn_shared::ApiResponse;

use crate::dto::{SessionResponse, VerifyPaymentRequestDto};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/verify-payment
///
/// Completes a paid signup once the checkout widget reports success.
///
/// # Request Body
///
/// ```json
/// {
///     "email": "owner@example.com", "username": "owner", "password": "...", "role": "admin",
///     "payment_id": "pay_...", "order_id": "order_...", "signature": "hex hmac"
/// }
/// ```
///
/// # Response
///
/// ## Success (201 Created)
/// ```json
/// { "success": true, "user": { "paid": true, ... }, "token": "..." }
/// ```
///
/// ## Errors
/// - 400: Signature mismatch, missing fields, or an order issued for another signup
/// - 409: Account already created for this email or username
/// - 503: No gateway configured to verify against
pub async fn verify_payment<A, P, O>(
    state: web::Data<AppState<A, P, O>>,
    request: web::Json<VerifyPaymentRequestDto>,
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
        .verify_payment(request.into_verification()?)
        .await?;

    Ok(HttpResponse::Created().json(ApiResponse::success(SessionResponse {
        status: None,
        user: session.user,
        token: session.token,
    })))
}
