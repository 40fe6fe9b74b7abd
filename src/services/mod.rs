pub mod auth;
pub mod client_service;
pub mod order_service;
pub mod stock_service;
