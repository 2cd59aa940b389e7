//! Platform settings route handlers

pub mod pricing;
