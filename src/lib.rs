// src/lib.rs
//
// Backend administrativo da operação de passeios: catálogo de passeios,
// livro-razão de reservas e registro de pontos de embarque, tudo sobre um
// store de sessão em memória.

pub mod common;
pub mod config;
pub mod docs;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
