//! Request extractors

mod auth;
mod validated;

pub use auth::AuthToken;
pub use validated::ValidatedJson;
