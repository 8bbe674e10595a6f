//! Autenticación
//!
//! Este módulo contiene el almacén del token, la resolución local de
//! la sesión y el servicio de login/logout.

pub mod auth_service;
pub mod session;
pub mod token_store;

pub use auth_service::{AuthService, LoginRequest};
pub use session::{decode_session, Session, UserRole};
pub use token_store::TokenStore;
