//! Vicat application layer
//!
//! Gateway contracts the catalog core depends on, and one concrete use-case
//! type per operation. Persistence, transport and HTTP surfaces implement
//! these contracts from the outside; the use cases themselves perform no
//! I/O beyond their injected gateways.

pub mod cast_member;
pub mod category;
pub mod gateways;
pub mod genre;
pub mod media;
pub mod resources;
pub mod test_helpers;
pub mod video;

pub use gateways::{AggregateGateway, MediaResourceGateway};
pub use media::{MediaStatusOutcome, UpdateMediaStatus};
