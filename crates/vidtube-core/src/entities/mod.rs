//! Entity definitions
//!
//! One struct per stored table. Join rows (`FavoriteVideo`, `Friendship`,
//! `ChannelMembership`) carry a surrogate id of their own next to the pair
//! of foreign keys they relate.

mod channel;
mod king;
mod relations;
mod user;
mod video;

pub use channel::Channel;
pub use king::King;
pub use relations::{ChannelMembership, FavoriteVideo, Friendship};
pub use user::User;
pub use video::Video;
