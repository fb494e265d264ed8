use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::{VideoPreview, VideoRepository, VideoSearchQuery};
use crate::shared::{
    application::{pagination::PaginatedResult, use_case::Query},
    errors::AppResult,
};

/// Query handler listing video previews.
pub struct ListVideosHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl ListVideosHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

#[async_trait]
impl Query<VideoSearchQuery, PaginatedResult<VideoPreview>> for ListVideosHandler {
    async fn execute(&self, query: VideoSearchQuery) -> AppResult<PaginatedResult<VideoPreview>> {
        self.video_repository.find_all(&query).await
    }
}
