use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::video::application::ports::MediaResourceGateway;
use crate::modules::video::domain::value_objects::{
    AudioVideoMedia, ImageMedia, MediaType, Resource, VideoId,
};
use crate::shared::errors::{AppError, AppResult};

/// Concurrent in-memory blob store.
///
/// Blobs are keyed `"<video id>/<media type>"`, so everything belonging to
/// one video shares a prefix and `clear_resources` is a prefix sweep.
/// Writers targeting the same key overwrite.
#[derive(Debug, Default)]
pub struct InMemoryMediaResourceGateway {
    resources: DashMap<String, Resource>,
}

impl InMemoryMediaResourceGateway {
    pub fn new() -> Self {
        Self {
            resources: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    fn key(video_id: VideoId, media_type: MediaType) -> String {
        format!("{}/{}", video_id, media_type)
    }
}

#[async_trait]
impl MediaResourceGateway for InMemoryMediaResourceGateway {
    async fn store_audio_video(
        &self,
        video_id: VideoId,
        resource: &Resource,
    ) -> AppResult<AudioVideoMedia> {
        if !resource.media_type().is_audio_video() {
            return Err(AppError::Storage(format!(
                "resource {} is not audio-video content",
                resource.media_type()
            )));
        }
        let location = Self::key(video_id, resource.media_type());
        self.resources.insert(location.clone(), resource.clone());
        log::debug!("stored audio-video resource at {}", location);
        Ok(AudioVideoMedia::with(
            resource.checksum(),
            resource.name(),
            location,
        ))
    }

    async fn store_image(&self, video_id: VideoId, resource: &Resource) -> AppResult<ImageMedia> {
        if resource.media_type().is_audio_video() {
            return Err(AppError::Storage(format!(
                "resource {} is not image content",
                resource.media_type()
            )));
        }
        let location = Self::key(video_id, resource.media_type());
        self.resources.insert(location.clone(), resource.clone());
        log::debug!("stored image resource at {}", location);
        Ok(ImageMedia::with(
            resource.checksum(),
            resource.name(),
            location,
        ))
    }

    async fn get_resource(
        &self,
        video_id: VideoId,
        media_type: MediaType,
    ) -> AppResult<Option<Resource>> {
        let key = Self::key(video_id, media_type);
        Ok(self.resources.get(&key).map(|entry| entry.value().clone()))
    }

    async fn clear_resources(&self, video_id: VideoId) -> AppResult<()> {
        let prefix = format!("{}/", video_id);
        self.resources.retain(|key, _| !key.starts_with(&prefix));
        log::debug!("cleared media resources for video {}", video_id);
        Ok(())
    }
}
