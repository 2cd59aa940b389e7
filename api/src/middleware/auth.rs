//! Session middleware for protected endpoints.
//!
//! `JwtAuth` reads the Bearer token from the Authorization header and
//! verifies it with the `SessionService` registered as app data. On success
//! an [`AuthContext`] is stored in the request extensions for handlers to
//! extract; on failure the request is answered with the JSON error body.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::header::AUTHORIZATION,
    web, Error, FromRequest, HttpMessage, HttpRequest, ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    task::{Context, Poll},
};
use tracing::debug;
use uuid::Uuid;

use rn_core::{Claims, DomainError, Role, SessionError, SessionService};

use crate::handlers::ApiError;

/// Authenticated caller, injected into requests by [`JwtAuth`]
#[derive(Debug, Clone)]
pub struct AuthContext {
    /// Account ID from the token subject
    pub account_id: Uuid,
    /// Role at token issue time
    pub role: Role,
    /// JWT ID for tracing
    pub jti: String,
}

impl AuthContext {
    /// Creates an authentication context from verified claims
    pub fn from_claims(claims: Claims) -> Result<Self, DomainError> {
        let account_id = claims
            .account_id()
            .map_err(|_| DomainError::from(SessionError::InvalidToken))?;
        Ok(Self {
            account_id,
            role: claims.role,
            jti: claims.jti,
        })
    }

    /// Fails with `Forbidden` unless the caller holds one of `allowed`
    pub fn require_role(&self, allowed: &[Role]) -> Result<(), DomainError> {
        if allowed.contains(&self.role) {
            Ok(())
        } else {
            Err(DomainError::forbidden(format!(
                "Role '{}' may not perform this action",
                self.role
            )))
        }
    }

    /// Fails with `Forbidden` unless the caller may change platform settings
    pub fn require_privileged(&self) -> Result<(), DomainError> {
        if self.role.is_privileged() {
            Ok(())
        } else {
            Err(DomainError::forbidden(format!(
                "Role '{}' may not change platform settings",
                self.role
            )))
        }
    }
}

/// JWT authentication middleware factory
#[derive(Debug, Clone, Copy, Default)]
pub struct JwtAuth;

impl JwtAuth {
    pub fn new() -> Self {
        Self
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let context = match authenticate(&req) {
                Ok(context) => context,
                Err(e) => {
                    debug!(path = %req.path(), error = %e, "Request rejected by session check");
                    let response = e.error_response();
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };
            debug!(account_id = %context.account_id, jti = %context.jti, "Request authenticated");

            req.extensions_mut().insert(context);
            service.call(req).await.map(ServiceResponse::map_into_left_body)
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthContext, ApiError> {
    let sessions = req
        .app_data::<web::Data<SessionService>>()
        .ok_or_else(|| DomainError::internal("SessionService is not registered as app data"))?;

    let token = extract_bearer_token(req).ok_or(SessionError::MissingToken)?;
    let claims = sessions.verify(&token)?;
    Ok(AuthContext::from_claims(claims)?)
}

/// Extracts Bearer token from Authorization header
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result: Result<Self, Self::Error> = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| ApiError::from(SessionError::MissingToken).into());

        ready(result)
    }
}
