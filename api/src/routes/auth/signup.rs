use actix_web::{web, HttpResponse};
use tracing::info;
use validator::Validate;

use rn_core::{AccountRepository, PricingRepository, SignupOrderRepository, SignupOutcome};
use rn_shared::ApiResponse;

use crate::dto::{PaymentRequiredResponse, SessionResponse, SignupRequestDto};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for POST /api/v1/auth/signup
///
/// # Request Body
///
/// ```json
/// { "email": "owner@example.com", "username": "owner", "password": "...", "role": "admin" }
/// ```
///
/// # Response
///
/// ## Free role (201 Created)
/// ```json
/// { "success": true, "status": "free", "user": { ... }, "token": "..." }
/// ```
///
/// ## Paid role (200 OK)
/// ```json
/// {
///     "success": true,
///     "order": { "order_id": "order_...", "amount": 10000, "currency": "INR", "key_id": "rzp_..." },
///     "userData": { "email": "...", "username": "...", "password": "...", "role": "admin" }
/// }
/// ```
///
/// ## Errors
/// - 400: Missing or malformed fields, unknown or closed role
/// - 409: Email or username already registered
/// - 502: Gateway rejected the order
/// - 503: Paid role but no gateway configured
pub async fn signup<A, P, O>(
    state: web::Data<AppState<A, P, O>>,
    request: web::Json<SignupRequestDto>,
) -> Result<HttpResponse, ApiError>
where
    A: AccountRepository + 'static,
    P: PricingRepository + 'static,
    O: SignupOrderRepository + 'static,
{
    let request = request.into_inner();
    request.validate()?;

    let outcome = state
        .signup_service
        .initiate_signup(request.into_request()?)
        .await?;

    let response = match outcome {
        SignupOutcome::Provisioned(session) => HttpResponse::Created().json(ApiResponse::success(SessionResponse {
            status: Some("free"),
            user: session.user,
            token: session.token,
        })),
        SignupOutcome::PaymentRequired { order, pending } => {
            info!(order_id = %order.order_id, "Returning checkout order to client");
            HttpResponse::Ok().json(ApiResponse::success(PaymentRequiredResponse {
                order,
                user_data: pending,
            }))
        }
    };

    Ok(response)
}
