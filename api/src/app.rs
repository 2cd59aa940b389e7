//! Application factory
//!
//! Builds the Actix-web application from prepared state. The binary and the
//! integration tests both go through [`create_app`], so they see the same
//! routes and middleware.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error,
};
use tracing_actix_web::TracingLogger;

use rn_core::{AccountRepository, PricingRepository, SessionService, SignupOrderRepository};

use crate::handlers::{json_error_handler, not_found};
use crate::middleware::{cors::create_cors, auth::JwtAuth};
use crate::routes::auth::{login::login, me::me, signup::signup, verify_payment::verify_payment};
use crate::routes::health::health_check;
use crate::routes::settings::pricing::{get_pricing, update_pricing};
use crate::routes::AppState;

/// Maximum accepted JSON body, in bytes
pub const JSON_LIMIT: usize = 64 * 1024;

/// Create and configure the application with all dependencies
///
/// `sessions` is registered separately so [`JwtAuth`] can verify tokens
/// without knowing the repository types.
pub fn create_app<A, P, O>(
    app_state: web::Data<AppState<A, P, O>>,
    sessions: web::Data<SessionService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    A: AccountRepository + 'static,
    P: PricingRepository + 'static,
    O: SignupOrderRepository + 'static,
{
    let json_config = web::JsonConfig::default()
        .limit(JSON_LIMIT)
        .error_handler(json_error_handler);

    App::new()
        .app_data(app_state)
        .app_data(sessions)
        .app_data(json_config)
        .wrap(create_cors())
        .wrap(TracingLogger::default())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .route("/health", web::get().to(health_check))
                .service(
                    web::scope("/auth")
                        .route("/signup", web::post().to(signup::<A, P, O>))
                        .route("/verify-payment", web::post().to(verify_payment::<A, P, O>))
                        .route("/login", web::post().to(login::<A, P, O>))
                        .route("/me", web::get().to(me::<A, P, O>).wrap(JwtAuth::new())),
                )
                .service(
                    web::scope("/settings")
                        .route("/pricing", web::get().to(get_pricing::<A, P, O>))
                        .route(
                            "/pricing",
                            web::put().to(update_pricing::<A, P, O>).wrap(JwtAuth::new()),
                        ),
                ),
        )
        .default_service(web::route().to(not_found))
}
