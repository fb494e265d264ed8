use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::video::application::ports::VideoRepository;
use crate::modules::video::domain::value_objects::MediaStatus;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
};

use super::command::UpdateMediaStatusCommand;

/// Use case handler applying the external encoding signal to a video.
///
/// Only `Processing` and `Completed` signals change state; anything else is
/// ignored. Terminal slot statuses stay as they are.
pub struct UpdateMediaStatusHandler {
    video_repository: Arc<dyn VideoRepository>,
}

impl UpdateMediaStatusHandler {
    pub fn new(video_repository: Arc<dyn VideoRepository>) -> Self {
        Self { video_repository }
    }
}

#[async_trait]
impl UseCase<UpdateMediaStatusCommand, ()> for UpdateMediaStatusHandler {
    async fn execute(&self, command: UpdateMediaStatusCommand) -> AppResult<()> {
        let Some(mut video) = self.video_repository.find_by_id(command.video_id).await? else {
            return Err(AppError::NotFound(format!(
                "Video with id {} was not found",
                command.video_id
            )));
        };

        match command.status {
            MediaStatus::Processing => video.set_media_processing(command.media_type),
            MediaStatus::Completed => video.complete_media(
                command.media_type,
                command.encoded_location.as_deref().unwrap_or_default(),
            ),
            MediaStatus::Pending | MediaStatus::Error => {
                log::debug!(
                    "ignoring media status signal {} for video {}",
                    command.status,
                    command.video_id
                );
                return Ok(());
            }
        }

        self.video_repository.update(&video).await
    }
}
