//! Video entity

/// Uploaded video. The title is unique across the whole store, not per
/// channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Video {
    pub id: i32,
    pub title: String,
    pub description: String,
}

impl Video {
    pub fn new(id: i32, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}
