//! # vidtube-db
//!
//! Storage layer: an in-memory relational store accessed through generic
//! repositories and a unit of work.
//!
//! ## Overview
//!
//! - [`Database`] holds the committed tables behind a single lock.
//! - [`UnitOfWork`] is created per request, hands out typed
//!   [`Repository`] handles, and applies all staged mutations atomically
//!   in one [`UnitOfWork::save`] call.
//! - [`Record`] ties an entity type to its table.
//!
//! Reads are snapshots of committed state in insertion order; filtering and
//! joining happen in plain iterator code in the service layer.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use vidtube_core::User;
//! use vidtube_db::{Database, UnitOfWork};
//!
//! let db = Arc::new(Database::new());
//! let uow = UnitOfWork::new(db);
//! let users = uow.repository::<User>();
//! let id = users.next_id();
//! users.add(User::new(id, "John", "secret", "tok", "john@example.com"));
//! uow.save().expect("commit failed");
//! ```

pub mod database;
pub mod error;
pub mod seed;
pub mod tables;
pub mod unit_of_work;

// Re-export commonly used types
pub use database::Database;
pub use error::CommitError;
pub use seed::seed_demo;
pub use tables::{Record, Table, Tables};
pub use unit_of_work::{Repository, UnitOfWork};
