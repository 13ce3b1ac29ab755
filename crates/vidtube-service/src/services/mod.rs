//! Business logic services
//!
//! One service per controller surface. Services are cheap, request-scoped
//! objects borrowing the request's unit of work.

pub mod error;
pub mod kings;
pub mod user;
pub mod video;

pub use error::{ServiceError, ServiceResult};
pub use kings::KingsService;
pub use user::UserService;
pub use video::VideoService;
