//! Channel entity

/// A channel grouping videos. Channels are seeded out of band; there is no
/// public endpoint that creates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Channel {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl Channel {
    pub fn new(id: i32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}
