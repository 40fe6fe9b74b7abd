// src/lib.rs
//
// Exposto como biblioteca para que os testes de integração consigam
// montar o Router com um Store de memória.

pub mod common;
pub mod config;
pub mod db;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
