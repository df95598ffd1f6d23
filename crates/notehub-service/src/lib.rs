//! # notehub-service
//!
//! Business logic services for NoteHub. The authorization policy (who may
//! read, update, or delete which note) lives here; repositories below this
//! layer perform no authorization, and handlers above it only translate
//! HTTP to service calls.

pub mod context;
pub mod note;
pub mod user;

pub use context::RequestContext;
pub use note::NoteService;
pub use user::UserService;
