use async_trait::async_trait;
use dashmap::DashMap;

use crate::modules::video::application::ports::{
    SortDirection, SortField, VideoPreview, VideoRepository, VideoSearchQuery,
};
use crate::modules::video::domain::value_objects::VideoId;
use crate::modules::video::domain::Video;
use crate::shared::{
    application::pagination::PaginatedResult,
    errors::{AppError, AppResult},
};

/// Concurrent in-memory video store.
///
/// Concurrent writers to the same id are last-writer-wins, matching the
/// model the core assumes of its persistence collaborator.
#[derive(Debug, Default)]
pub struct InMemoryVideoRepository {
    videos: DashMap<VideoId, Video>,
}

impl InMemoryVideoRepository {
    pub fn new() -> Self {
        Self {
            videos: DashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.videos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    fn matches(video: &Video, query: &VideoSearchQuery) -> bool {
        if let Some(term) = query.term.as_deref() {
            let term = term.to_lowercase();
            if !term.is_empty() {
                let in_title = video
                    .title()
                    .is_some_and(|t| t.to_lowercase().contains(&term));
                let in_description = video
                    .description()
                    .is_some_and(|d| d.to_lowercase().contains(&term));
                if !in_title && !in_description {
                    return false;
                }
            }
        }
        if !query.categories.is_empty()
            && !query.categories.iter().any(|c| video.categories().contains(c))
        {
            return false;
        }
        if !query.genres.is_empty() && !query.genres.iter().any(|g| video.genres().contains(g)) {
            return false;
        }
        if !query.cast_members.is_empty()
            && !query
                .cast_members
                .iter()
                .any(|m| video.cast_members().contains(m))
        {
            return false;
        }
        true
    }
}

#[async_trait]
impl VideoRepository for InMemoryVideoRepository {
    async fn create(&self, video: &Video) -> AppResult<()> {
        if self.videos.contains_key(&video.id()) {
            return Err(AppError::Database(format!(
                "video {} already exists",
                video.id()
            )));
        }
        self.videos.insert(video.id(), video.clone());
        log::debug!("video {} persisted", video.id());
        Ok(())
    }

    async fn update(&self, video: &Video) -> AppResult<()> {
        if !self.videos.contains_key(&video.id()) {
            return Err(AppError::Database(format!(
                "video {} is not persisted",
                video.id()
            )));
        }
        self.videos.insert(video.id(), video.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>> {
        Ok(self.videos.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete_by_id(&self, id: VideoId) -> AppResult<()> {
        self.videos.remove(&id);
        Ok(())
    }

    async fn find_all(&self, query: &VideoSearchQuery) -> AppResult<PaginatedResult<VideoPreview>> {
        let mut previews: Vec<VideoPreview> = self
            .videos
            .iter()
            .filter(|entry| Self::matches(entry.value(), query))
            .map(|entry| VideoPreview::from(entry.value()))
            .collect();

        match query.sort_by {
            SortField::Title => {
                previews.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
            }
            SortField::CreatedAt => previews.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortField::UpdatedAt => previews.sort_by(|a, b| a.updated_at.cmp(&b.updated_at)),
        }
        if query.direction == SortDirection::Desc {
            previews.reverse();
        }

        let total_count = previews.len() as u64;
        let start = query.pagination.offset().max(0) as usize;
        let items: Vec<VideoPreview> = previews
            .into_iter()
            .skip(start)
            .take(query.pagination.limit().max(0) as usize)
            .collect();

        Ok(PaginatedResult::new(items, total_count, &query.pagination))
    }
}
