use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::{MediaResourceGateway, VideoRepository};
use crate::shared::{application::use_case::UseCase, errors::AppResult};

use super::command::DeleteVideoCommand;

/// Use case handler deleting a video record and everything stored for it.
///
/// Both steps are idempotent; deleting an unknown id succeeds.
pub struct DeleteVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
    media_gateway: Arc<dyn MediaResourceGateway>,
}

impl DeleteVideoHandler {
    pub fn new(
        video_repository: Arc<dyn VideoRepository>,
        media_gateway: Arc<dyn MediaResourceGateway>,
    ) -> Self {
        Self {
            video_repository,
            media_gateway,
        }
    }
}

#[async_trait]
impl UseCase<DeleteVideoCommand, ()> for DeleteVideoHandler {
    async fn execute(&self, command: DeleteVideoCommand) -> AppResult<()> {
        self.video_repository.delete_by_id(command.id).await?;
        self.media_gateway.clear_resources(command.id).await?;
        log::info!("video {} deleted", command.id);
        Ok(())
    }
}
