//! # vidtube-core
//!
//! Domain layer containing the entities stored by the service.
//! This crate has zero dependencies on infrastructure (store, web framework, etc.).

pub mod entities;

// Re-export commonly used types at crate root
pub use entities::{Channel, ChannelMembership, FavoriteVideo, Friendship, King, User, Video};
