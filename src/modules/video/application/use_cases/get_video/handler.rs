use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::{query::GetVideoQuery, result::GetVideoResult};

/// Query handler fetching one video with all its media slots.
pub struct GetVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl GetVideoHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

#[async_trait]
impl Query<GetVideoQuery, GetVideoResult> for GetVideoHandler {
    async fn execute(&self, query: GetVideoQuery) -> AppResult<GetVideoResult> {
        let Some(video) = self.video_repository.find_by_id(query.id).await? else {
            return Err(AppError::NotFound(format!(
                "Video with id {} was not found",
                query.id
            )));
        };
        Ok(GetVideoResult::from(&video))
    }
}
