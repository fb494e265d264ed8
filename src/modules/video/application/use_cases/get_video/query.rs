use crate::modules::video::domain::value_objects::VideoId;

/// Query for fetching one video by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetVideoQuery {
    pub id: VideoId,
}

impl GetVideoQuery {
    pub fn new(id: VideoId) -> Self {
        Self { id }
    }
}
