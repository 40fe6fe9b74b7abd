pub mod auth;
pub mod client;
pub mod item;
pub mod order;
