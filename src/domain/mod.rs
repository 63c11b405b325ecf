//! Domain layer: chain nodes, their arena, and hop lookups
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod arena;
pub mod entities;
pub mod error;

pub use arena::{ChainArena, Successors};
pub use entities::{Node, NodeId};
pub use error::{DomainError, DomainResult};
