//! Note entity and payloads.

pub mod model;

pub use model::{CreateNote, Note, UpdateNote};
