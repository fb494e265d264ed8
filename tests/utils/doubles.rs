/// Hand-rolled test doubles for the ports, plus a mockall repository.
use async_trait::async_trait;
use mockall::mock;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use vodlib::modules::video::application::ports::{
    MediaResourceGateway, ReferenceGateway, VideoPreview, VideoRepository, VideoSearchQuery,
};
use vodlib::modules::video::domain::value_objects::{
    AudioVideoMedia, ImageMedia, MediaType, Resource, VideoId,
};
use vodlib::modules::video::domain::Video;
use vodlib::modules::video::infrastructure::InMemoryMediaResourceGateway;
use vodlib::shared::application::pagination::PaginatedResult;
use vodlib::shared::errors::{AppError, AppResult};

mock! {
    pub VideoRepo {}

    #[async_trait]
    impl VideoRepository for VideoRepo {
        async fn create(&self, video: &Video) -> AppResult<()>;
        async fn update(&self, video: &Video) -> AppResult<()>;
        async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>>;
        async fn delete_by_id(&self, id: VideoId) -> AppResult<()>;
        async fn find_all(&self, query: &VideoSearchQuery) -> AppResult<PaginatedResult<VideoPreview>>;
    }
}

/// Media gateway wrapper counting interactions, optionally failing stores.
#[derive(Default)]
pub struct CountingMediaGateway {
    inner: InMemoryMediaResourceGateway,
    store_calls: AtomicUsize,
    clear_calls: AtomicUsize,
    fail_stores: AtomicBool,
}

impl CountingMediaGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_stores(&self) {
        self.fail_stores.store(true, Ordering::SeqCst);
    }

    pub fn store_calls(&self) -> usize {
        self.store_calls.load(Ordering::SeqCst)
    }

    pub fn clear_calls(&self) -> usize {
        self.clear_calls.load(Ordering::SeqCst)
    }

    pub fn stored_resources(&self) -> usize {
        self.inner.len()
    }
}

#[async_trait]
impl MediaResourceGateway for CountingMediaGateway {
    async fn store_audio_video(
        &self,
        video_id: VideoId,
        resource: &Resource,
    ) -> AppResult<AudioVideoMedia> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_stores.load(Ordering::SeqCst) {
            return Err(AppError::Storage("bucket unavailable".to_string()));
        }
        self.inner.store_audio_video(video_id, resource).await
    }

    async fn store_image(&self, video_id: VideoId, resource: &Resource) -> AppResult<ImageMedia> {
        self.store_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_stores.load(Ordering::SeqCst) {
            return Err(AppError::Storage("bucket unavailable".to_string()));
        }
        self.inner.store_image(video_id, resource).await
    }

    async fn get_resource(
        &self,
        video_id: VideoId,
        media_type: MediaType,
    ) -> AppResult<Option<Resource>> {
        self.inner.get_resource(video_id, media_type).await
    }

    async fn clear_resources(&self, video_id: VideoId) -> AppResult<()> {
        self.clear_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.clear_resources(video_id).await
    }
}

/// Reference gateway wrapper counting existence checks.
pub struct CountingReferenceGateway<Id: Eq + std::hash::Hash + Clone> {
    existing: Vec<Id>,
    calls: AtomicUsize,
}

impl<Id: Eq + std::hash::Hash + Clone> CountingReferenceGateway<Id> {
    pub fn new(existing: Vec<Id>) -> Self {
        Self {
            existing,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<Id> ReferenceGateway<Id> for CountingReferenceGateway<Id>
where
    Id: Eq + std::hash::Hash + Clone + Send + Sync,
{
    async fn exists_by_ids(&self, ids: &[Id]) -> AppResult<Vec<Id>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(ids
            .iter()
            .filter(|id| self.existing.contains(*id))
            .cloned()
            .collect())
    }
}
