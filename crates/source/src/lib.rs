//! Record source boundary for the Cadran engine.
//!
//! The engine treats the document store, its query layer, and session
//! handling as external collaborators reached only through the
//! `RecordSource` trait. This crate defines that trait, the explicit
//! `AuthContext` credential, the `SourceError` taxonomy, and an in-memory
//! implementation for tests and local use.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::SourceError;
pub use memory::StaticRecordSource;
pub use traits::{AuthContext, RecordSource};
