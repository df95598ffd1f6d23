//! Note services.

pub mod service;

pub use service::NoteService;
