//! Core modules: the document model, its store, and shared primitives.
//!
//! Everything durable routes through `store`; everything mutable routes
//! through `document::ContentStore`.

pub mod document;
pub mod error;
pub mod output;
pub mod schema;
pub mod store;
pub mod time;
pub mod validate;
