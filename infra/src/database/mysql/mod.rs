//! MySQL repository implementations

mod account_repository_impl;
mod errors;
mod pricing_repository_impl;
mod signup_order_repository_impl;

pub use account_repository_impl::MySqlAccountRepository;
pub use pricing_repository_impl::MySqlPricingRepository;
pub use signup_order_repository_impl::MySqlSignupOrderRepository;
