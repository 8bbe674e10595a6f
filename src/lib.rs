//! Capa de acceso a datos del taller Frenos Aguilera
//!
//! Cliente tipado del API REST del taller: cache de consultas con
//! invalidación entre recursos, sesión local decodificada del token y
//! un servicio por entidad de dominio. La persistencia y las reglas de
//! negocio viven en el backend; el cliente solo mantiene copias
//! cacheadas.

pub mod auth;
pub mod cache;
pub mod client;
pub mod config;
pub mod models;
pub mod proxy;
pub mod services;
pub mod utils;

pub use client::ApiClient;
