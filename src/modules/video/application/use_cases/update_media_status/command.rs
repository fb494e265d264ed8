use crate::modules::video::domain::value_objects::{MediaStatus, MediaType, VideoId};

/// Encoding-pipeline signal for one audio-video slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMediaStatusCommand {
    pub video_id: VideoId,
    pub media_type: MediaType,
    pub status: MediaStatus,
    pub encoded_location: Option<String>,
}

impl UpdateMediaStatusCommand {
    pub fn new(
        video_id: VideoId,
        media_type: MediaType,
        status: MediaStatus,
        encoded_location: Option<String>,
    ) -> Self {
        Self {
            video_id,
            media_type,
            status,
            encoded_location,
        }
    }
}
