use std::collections::HashSet;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::value_objects::{MediaType, Resource};

/// Command for creating a new video.
///
/// The rating arrives as a raw label; unrecognized labels are treated as
/// absent so the validator reports them. The five media inputs are optional
/// and independent.
#[derive(Debug, Clone, Default)]
pub struct CreateVideoCommand {
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

impl CreateVideoCommand {
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
