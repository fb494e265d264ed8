use crate::modules::video::domain::value_objects::{MediaType, VideoId};

/// Query for fetching the stored bytes of one media slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMediaQuery {
    pub video_id: VideoId,
    pub media_type: MediaType,
}

impl GetMediaQuery {
    pub fn new(video_id: VideoId, media_type: MediaType) -> Self {
        Self {
            video_id,
            media_type,
        }
    }
}
