//! User entity and payloads.

pub mod model;

pub use model::{CreateUser, User};
