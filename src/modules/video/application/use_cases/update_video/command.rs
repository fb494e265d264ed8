use std::collections::HashSet;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::value_objects::{MediaType, Resource, VideoId};

/// Command for updating an existing video.
///
/// Scalar fields and reference sets replace the stored ones wholesale; media
/// inputs only overwrite the slots they are present for.
#[derive(Debug, Clone)]
pub struct UpdateVideoCommand {
    pub id: VideoId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub launched_at: Option<i32>,
    pub duration: f64,
    pub rating: Option<String>,
    pub opened: bool,
    pub published: bool,
    pub categories: HashSet<CategoryId>,
    pub genres: HashSet<GenreId>,
    pub cast_members: HashSet<CastMemberId>,
    pub video: Option<Resource>,
    pub trailer: Option<Resource>,
    pub banner: Option<Resource>,
    pub thumbnail: Option<Resource>,
    pub thumbnail_half: Option<Resource>,
}

impl UpdateVideoCommand {
    /// Lookup table over the five media slots.
    pub fn resource(&self, media_type: MediaType) -> Option<&Resource> {
        match media_type {
            MediaType::Video => self.video.as_ref(),
            MediaType::Trailer => self.trailer.as_ref(),
            MediaType::Banner => self.banner.as_ref(),
            MediaType::Thumbnail => self.thumbnail.as_ref(),
            MediaType::ThumbnailHalf => self.thumbnail_half.as_ref(),
        }
    }
}
