//! Payment gateway clients

mod razorpay;


pub use razorpay::{RazorpayConfig, RazorpayGateway};
