use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use rn_api::{create_app, AppState};
use rn_core::{PaymentGateway, PricingService, SessionConfig, SessionService, SignupService, SignupServiceConfig};
use rn_infra::{DatabasePool, MySqlAccountRepository, MySqlPricingRepository, MySqlSignupOrderRepository, RazorpayGateway};
use rn_shared::{AppConfig, Environment, LoggingConfig};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Per-environment file first; dotenvy never overrides a variable already set
    dotenvy::from_filename(Environment::from_env().env_file()).ok();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config.logging);

    info!(environment = %config.environment, "Starting RentNest API server");
    for warning in config.production_warnings() {
        warn!("{}", warning);
    }
    if config.environment.is_production() && config.auth.jwt.is_using_default_secret() {
        anyhow::bail!("JWT_SECRET must be set in production");
    }

    // Database
    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;
    pool.run_migrations().await.context("failed to apply migrations")?;
    info!("{}", pool.statistics());

    let accounts = Arc::new(MySqlAccountRepository::new(pool.get_pool().clone()));
    let pricing = Arc::new(MySqlPricingRepository::new(pool.get_pool().clone()));
    let orders = Arc::new(MySqlSignupOrderRepository::new(pool.get_pool().clone()));

    // Payment gateway; absent credentials leave paid signups unavailable
    let gateway: Option<Arc<dyn PaymentGateway>> = match RazorpayGateway::from_payment_config(&config.payment)
        .context("invalid payment gateway configuration")?
    {
        Some(gateway) => Some(Arc::new(gateway)),
        None => {
            warn!("Razorpay credentials not configured; paid signups will answer 503");
            None
        }
    };

    // Services
    let sessions = Arc::new(SessionService::new(SessionConfig::from(&config.auth.jwt)));
    let signup_service = Arc::new(SignupService::new(
        accounts,
        pricing.clone(),
        orders,
        gateway,
        sessions.clone(),
        SignupServiceConfig::from_configs(&config.auth.password, &config.payment),
    ));
    let pricing_service = Arc::new(PricingService::new(pricing));

    let app_state = web::Data::new(AppState {
        signup_service,
        pricing_service,
    });
    let session_data = web::Data::from(sessions);

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Server will bind");

    let mut server = HttpServer::new(move || create_app(app_state.clone(), session_data.clone()));
    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }
    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    pool.close().await;
    info!("Server stopped");
    Ok(())
}

/// Installs the global tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    if logging.json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
