use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::MediaResourceGateway;
use crate::shared::{
    application::use_case::Query,
    errors::{AppError, AppResult},
};

use super::{query::GetMediaQuery, result::GetMediaResult};

/// Query handler fetching stored media bytes for one slot.
pub struct GetMediaHandler {
    media_gateway: Arc<dyn MediaResourceGateway>,
}

impl GetMediaHandler {
    pub fn new(media_gateway: Arc<dyn MediaResourceGateway>) -> Self {
        Self { media_gateway }
    }
}

#[async_trait]
impl Query<GetMediaQuery, GetMediaResult> for GetMediaHandler {
    async fn execute(&self, query: GetMediaQuery) -> AppResult<GetMediaResult> {
        let Some(resource) = self
            .media_gateway
            .get_resource(query.video_id, query.media_type)
            .await?
        else {
            return Err(AppError::NotFound(format!(
                "Resource {} not found for video {}",
                query.media_type, query.video_id
            )));
        };
        Ok(GetMediaResult::from(resource))
    }
}
