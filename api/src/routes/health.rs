use actix_web::HttpResponse;

use rn_shared::HealthResponse;

/// Service name reported by the health endpoint
pub const SERVICE_NAME: &str = "rentnest-api";

/// Handler for GET /health and GET /api/v1/health
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy(SERVICE_NAME, env!("CARGO_PKG_VERSION")))
}
