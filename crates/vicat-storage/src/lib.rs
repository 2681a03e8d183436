//! Storage backends for catalog media binaries.
//!
//! The catalog references stored objects by location string only; this
//! crate owns the mapping from those strings to actual bytes. Two backends
//! are provided: a local filesystem backend and an in-memory backend for
//! tests and ephemeral deployments.

pub mod keys;
pub mod local;
pub mod memory;
pub mod traits;

pub use local::LocalStorage;
pub use memory::InMemoryStorage;
pub use traits::{Storage, StorageError, StorageResult};
