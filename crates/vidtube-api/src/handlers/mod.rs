//! HTTP handlers
//!
//! Thin adapters: extract inputs, call one service operation, map the
//! outcome to a status code.

pub mod health;
pub mod kings;
pub mod users;
pub mod videos;
