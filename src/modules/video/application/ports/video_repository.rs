use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::value_objects::VideoId;
use crate::modules::video::domain::Video;
use crate::shared::{
    application::pagination::{PaginatedResult, PaginationParams},
    errors::AppResult,
};

/// Port (interface) for video persistence following Hexagonal Architecture.
/// This is an application layer interface - infrastructure provides the
/// implementation.
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Persist a new video aggregate
    async fn create(&self, video: &Video) -> AppResult<()>;

    /// Persist changes to an existing video aggregate
    async fn update(&self, video: &Video) -> AppResult<()>;

    /// Find a video by id
    async fn find_by_id(&self, id: VideoId) -> AppResult<Option<Video>>;

    /// Delete a video by id (no-op when absent)
    async fn delete_by_id(&self, id: VideoId) -> AppResult<()>;

    /// List video previews matching the search query
    async fn find_all(&self, query: &VideoSearchQuery) -> AppResult<PaginatedResult<VideoPreview>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    Title,
    #[default]
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// Search criteria for video listings: free-text term plus optional
/// reference-id filters. Empty sets mean "no filter".
#[derive(Debug, Clone, Default)]
pub struct VideoSearchQuery {
    pub term: Option<String>,
    pub sort_by: SortField,
    pub direction: SortDirection,
    pub pagination: PaginationParams,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
}

/// Flat projection of a video for listings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoPreview {
    pub id: VideoId,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<&Video> for VideoPreview {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id(),
            title: video.title().unwrap_or_default().to_string(),
            description: video.description().unwrap_or_default().to_string(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
        }
    }
}
