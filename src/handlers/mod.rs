pub mod auth;
pub mod clients;
pub mod items;
pub mod orders;
