use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::application::ports::{
    MediaResourceGateway, ReferenceGateway, VideoRepository,
};
use crate::modules::video::application::reference_validator::validate_reference_ids;
use crate::modules::video::domain::value_objects::{MediaType, Rating, VideoId};
use crate::modules::video::domain::Video;
use crate::shared::{
    application::use_case::UseCase,
    errors::{AppError, AppResult},
    validation::Notification,
};

use super::{command::CreateVideoCommand, result::CreateVideoResult};

/// Use case handler for creating a new video.
///
/// Runs the full validation pass before any write: field checks and the
/// three cross-reference checks accumulate into one notification, and only a
/// clean aggregate reaches the media store and the repository. A failure
/// after the first write triggers a best-effort purge of everything stored
/// under the video id.
pub struct CreateVideoHandler {
    video_repository: Arc<dyn VideoRepository>,
    media_gateway: Arc<dyn MediaResourceGateway>,
    category_gateway: Arc<dyn ReferenceGateway<CategoryId>>,
    genre_gateway: Arc<dyn ReferenceGateway<GenreId>>,
    cast_member_gateway: Arc<dyn ReferenceGateway<CastMemberId>>,
}

impl CreateVideoHandler {
    pub fn new(
        video_repository: Arc<dyn VideoRepository>,
        media_gateway: Arc<dyn MediaResourceGateway>,
        category_gateway: Arc<dyn ReferenceGateway<CategoryId>>,
        genre_gateway: Arc<dyn ReferenceGateway<GenreId>>,
        cast_member_gateway: Arc<dyn ReferenceGateway<CastMemberId>>,
    ) -> Self {
        Self {
            video_repository,
            media_gateway,
            category_gateway,
            genre_gateway,
            cast_member_gateway,
        }
    }

    async fn validate(&self, video: &Video) -> AppResult<Notification> {
        let mut notification = Notification::new();
        video.validate(&mut notification);
        validate_reference_ids(
            "categories",
            video.categories(),
            self.category_gateway.as_ref(),
            &mut notification,
        )
        .await?;
        validate_reference_ids(
            "genres",
            video.genres(),
            self.genre_gateway.as_ref(),
            &mut notification,
        )
        .await?;
        validate_reference_ids(
            "cast members",
            video.cast_members(),
            self.cast_member_gateway.as_ref(),
            &mut notification,
        )
        .await?;
        Ok(notification)
    }

    async fn store_media(&self, video: &mut Video, command: &CreateVideoCommand) -> AppResult<()> {
        for media_type in MediaType::ALL {
            let Some(resource) = command.resource(media_type) else {
                continue;
            };
            match media_type {
                MediaType::Video => {
                    let media = self
                        .media_gateway
                        .store_audio_video(video.id(), resource)
                        .await?;
                    video.set_video(media);
                }
                MediaType::Trailer => {
                    let media = self
                        .media_gateway
                        .store_audio_video(video.id(), resource)
                        .await?;
                    video.set_trailer(media);
                }
                MediaType::Banner => {
                    let media = self.media_gateway.store_image(video.id(), resource).await?;
                    video.set_banner(media);
                }
                MediaType::Thumbnail => {
                    let media = self.media_gateway.store_image(video.id(), resource).await?;
                    video.set_thumbnail(media);
                }
                MediaType::ThumbnailHalf => {
                    let media = self.media_gateway.store_image(video.id(), resource).await?;
                    video.set_thumbnail_half(media);
                }
            }
        }
        Ok(())
    }

    async fn persist(&self, video: &mut Video, command: &CreateVideoCommand) -> AppResult<()> {
        self.store_media(video, command).await?;
        self.video_repository.create(video).await
    }

    async fn compensate(&self, video_id: VideoId, source: &AppError) {
        log::error!("persisting video {} failed: {}", video_id, source);
        if let Err(cleanup) = self.media_gateway.clear_resources(video_id).await {
            log::warn!(
                "failed to clear media resources for video {}: {}",
                video_id,
                cleanup
            );
        }
    }
}

#[async_trait]
impl UseCase<CreateVideoCommand, CreateVideoResult> for CreateVideoHandler {
    async fn execute(&self, command: CreateVideoCommand) -> AppResult<CreateVideoResult> {
        let rating = command.rating.as_deref().and_then(Rating::from_label);
        let mut video = Video::new(
            command.title.clone(),
            command.description.clone(),
            command.launched_at,
            command.duration,
            rating,
            command.opened,
            command.published,
            command.categories.clone(),
            command.genres.clone(),
            command.cast_members.clone(),
        );

        let notification = self.validate(&video).await?;
        if notification.has_errors() {
            return Err(AppError::validation(
                "Could not create the aggregate Video",
                notification,
            ));
        }

        if let Err(source) = self.persist(&mut video, &command).await {
            self.compensate(video.id(), &source).await;
            return Err(AppError::Internal(format!(
                "An error on create video was observed [video id: {}]",
                video.id()
            )));
        }

        log::info!("video {} created", video.id());
        Ok(CreateVideoResult::new(video.id()))
    }
}
