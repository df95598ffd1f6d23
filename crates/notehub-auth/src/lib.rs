//! # notehub-auth
//!
//! Authentication primitives for NoteHub.
//!
//! ## Modules
//!
//! - `password` — Argon2id password hashing and policy enforcement
//! - `jwt` — JWT access token creation and validation

pub mod jwt;
pub mod password;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
