pub mod auth;
pub mod booking;
pub mod line;
pub mod pricing;
