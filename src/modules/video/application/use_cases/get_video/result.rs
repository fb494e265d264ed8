use chrono::{DateTime, Utc};
use std::collections::HashSet;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::value_objects::{
    AudioVideoMedia, ImageMedia, Rating, VideoId,
};
use crate::modules::video::domain::Video;

/// Full snapshot of a video, media slots included.
#[derive(Debug, Clone, PartialEq)]
pub struct GetVideoResult {
    pub id: VideoId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<Rating>,
    pub opened: bool,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
    pub video: Option<AudioVideoMedia>,
    pub trailer: Option<AudioVideoMedia>,
    pub banner: Option<ImageMedia>,
    pub thumbnail: Option<ImageMedia>,
    pub thumbnail_half: Option<ImageMedia>,
}

impl From<&Video> for GetVideoResult {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id(),
            title: video.title().map(str::to_string),
            description: video.description().map(str::to_string),
            launched_at: video.launched_at(),
            duration: video.duration(),
            rating: video.rating(),
            opened: video.opened(),
            published: video.published(),
            created_at: video.created_at(),
            updated_at: video.updated_at(),
            categories: video.categories().clone(),
            genres: video.genres().clone(),
            cast_members: video.cast_members().clone(),
            video: video.video().cloned(),
            trailer: video.trailer().cloned(),
            banner: video.banner().cloned(),
            thumbnail: video.thumbnail().cloned(),
            thumbnail_half: video.thumbnail_half().cloned(),
        }
    }
}
