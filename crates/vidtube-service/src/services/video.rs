//! Video service
//!
//! Video listing plus the channel-scoped write operations. A video and its
//! channel membership row always move together: both are staged on the
//! same unit of work and committed in one save.

use tracing::{info, instrument};
use vidtube_core::{Channel, ChannelMembership, Video};
use vidtube_db::{Repository, UnitOfWork};

use crate::dto::{CreateVideoRequest, VideoResponse};

use super::error::{ServiceError, ServiceResult};

/// Video service
pub struct VideoService<'a> {
    uow: &'a UnitOfWork,
    videos: Repository<'a, Video>,
    channels: Repository<'a, Channel>,
    memberships: Repository<'a, ChannelMembership>,
}

impl<'a> VideoService<'a> {
    pub fn new(uow: &'a UnitOfWork) -> Self {
        Self {
            uow,
            videos: uow.repository(),
            channels: uow.repository(),
            memberships: uow.repository(),
        }
    }

    /// All videos, unfiltered, in storage order.
    pub fn get_all_videos(&self) -> Vec<VideoResponse> {
        self.videos.all().iter().map(VideoResponse::from).collect()
    }

    /// Videos placed in one channel, in storage order of the membership
    /// rows.
    pub fn get_videos_in_channel(&self, channel_id: i32) -> ServiceResult<Vec<VideoResponse>> {
        if !self.channel_exists(channel_id) {
            return Err(ServiceError::not_found("channel", channel_id));
        }

        let videos = self.videos.all();
        Ok(self
            .memberships
            .all()
            .iter()
            .filter(|m| m.channel_id == channel_id)
            .filter_map(|m| videos.iter().find(|v| v.id == m.video_id))
            .map(VideoResponse::from)
            .collect())
    }

    /// Create a video inside a channel.
    ///
    /// Titles are unique across the whole store, not per channel. The
    /// video row and its membership row are committed together.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub fn add_video_to_channel(
        &self,
        channel_id: i32,
        request: CreateVideoRequest,
    ) -> ServiceResult<VideoResponse> {
        if !self.channel_exists(channel_id) {
            return Err(ServiceError::not_found("channel", channel_id));
        }
        if self.videos.all().iter().any(|v| v.title == request.title) {
            return Err(ServiceError::already_exists("video", request.title));
        }

        let video = Video::new(self.videos.next_id(), request.title, request.description);
        self.videos.add(video.clone());
        self.memberships.add(ChannelMembership {
            id: self.memberships.next_id(),
            video_id: video.id,
            channel_id,
        });
        self.uow.save()?;

        info!(video_id = video.id, channel_id, "video added to channel");
        Ok(VideoResponse::from(&video))
    }

    /// Delete a video and its membership row in one commit.
    #[instrument(skip(self))]
    pub fn delete_video_from_channel(&self, channel_id: i32, video_id: i32) -> ServiceResult<()> {
        if !self.channel_exists(channel_id) {
            return Err(ServiceError::not_found("channel", channel_id));
        }

        let video = self
            .videos
            .all()
            .into_iter()
            .find(|v| v.id == video_id)
            .ok_or_else(|| ServiceError::not_found("video", video_id))?;

        let membership = self
            .memberships
            .all()
            .into_iter()
            .find(|m| m.channel_id == channel_id && m.video_id == video_id)
            .ok_or_else(|| {
                ServiceError::not_present(format!(
                    "video {video_id} is not in channel {channel_id}"
                ))
            })?;

        self.videos.delete(&video);
        self.memberships.delete(&membership);
        self.uow.save()?;

        info!(video_id, channel_id, "video deleted from channel");
        Ok(())
    }

    fn channel_exists(&self, id: i32) -> bool {
        self.channels.all().iter().any(|c| c.id == id)
    }
}
