//! Join rows relating entities to each other
//!
//! These rows are only ever inserted and deleted, never updated.

/// Marks a video as a favorite of a user. At most one row per
/// (user, video) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteVideo {
    pub id: i32,
    pub user_id: i32,
    pub video_id: i32,
}

/// Directional friendship: `user_id` lists `friend_id` as a close friend.
/// At most one row per ordered pair; no implied reciprocity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friendship {
    pub id: i32,
    pub user_id: i32,
    pub friend_id: i32,
}

/// Places a video in a channel. A video belongs to exactly one channel;
/// the row is created when the video is and removed together with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelMembership {
    pub id: i32,
    pub video_id: i32,
    pub channel_id: i32,
}
