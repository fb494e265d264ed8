use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::modules::catalog::{CastMemberId, CategoryId, GenreId};
use crate::modules::video::domain::value_objects::{
    AudioVideoMedia, ImageMedia, MediaType, Rating, VideoId,
};
use crate::shared::validation::Notification;

use super::validator::VideoValidator;

/// Video Aggregate Root
///
/// Scalar fields that may arrive absent from a command stay `Option`; the
/// validator reports absence so every problem surfaces in one pass. Media
/// slots are empty at creation and only filled through the setters, each of
/// which refreshes `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    id: VideoId,
    title: Option<String>,
    description: Option<String>,
    launched_at: Option<i32>,
    duration: f64,
    rating: Option<Rating>,
    opened: bool,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,

    video: Option<AudioVideoMedia>,
    trailer: Option<AudioVideoMedia>,
    banner: Option<ImageMedia>,
    thumbnail: Option<ImageMedia>,
    thumbnail_half: Option<ImageMedia>,

    categories: HashSet<CategoryId>,
    genres: HashSet<GenreId>,
    cast_members: HashSet<CastMemberId>,
}

impl Video {
    /// Create a new video with a fresh identity and empty media slots.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: Option<String>,
        description: Option<String>,
        launched_at: Option<i32>,
        duration: f64,
        rating: Option<Rating>,
        opened: bool,
        published: bool,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) -> Self {
        Self {
            id: VideoId::new(),
            title,
            description,
            launched_at,
            duration,
            rating,
            opened,
            published,
            created_at: Utc::now(),
            updated_at: None,
            video: None,
            trailer: None,
            banner: None,
            thumbnail: None,
            thumbnail_half: None,
            categories,
            genres,
            cast_members,
        }
    }

    /// Replace all scalar fields and reference sets atomically.
    #[allow(clippy::too_many_arguments)]
    pub fn update(
        &mut self,
        title: Option<String>,
        description: Option<String>,
        launched_at: Option<i32>,
        duration: f64,
        rating: Option<Rating>,
        opened: bool,
        published: bool,
        categories: HashSet<CategoryId>,
        genres: HashSet<GenreId>,
        cast_members: HashSet<CastMemberId>,
    ) {
        self.title = title;
        self.description = description;
        self.launched_at = launched_at;
        self.duration = duration;
        self.rating = rating;
        self.opened = opened;
        self.published = published;
        self.categories = categories;
        self.genres = genres;
        self.cast_members = cast_members;
        self.touch();
    }

    /// Run the field validator, appending failures to the collector.
    pub fn validate(&self, notification: &mut Notification) {
        VideoValidator::new(self).validate(notification);
    }

    // ============================================================================================
    // MEDIA SLOTS
    // ============================================================================================

    pub fn set_video(&mut self, media: AudioVideoMedia) {
        self.video = Some(media);
        self.touch();
    }

    pub fn set_trailer(&mut self, media: AudioVideoMedia) {
        self.trailer = Some(media);
        self.touch();
    }

    pub fn set_banner(&mut self, media: ImageMedia) {
        self.banner = Some(media);
        self.touch();
    }

    pub fn set_thumbnail(&mut self, media: ImageMedia) {
        self.thumbnail = Some(media);
        self.touch();
    }

    pub fn set_thumbnail_half(&mut self, media: ImageMedia) {
        self.thumbnail_half = Some(media);
        self.touch();
    }

    /// Apply the encoder pick-up signal to an audio-video slot.
    ///
    /// Image slots and empty slots are unaffected; terminal statuses are
    /// idempotent, in which case `updated_at` is left alone.
    pub fn set_media_processing(&mut self, media_type: MediaType) {
        let slot = match media_type {
            MediaType::Video => &mut self.video,
            MediaType::Trailer => &mut self.trailer,
            _ => return,
        };
        if let Some(media) = slot.take() {
            let before = media.status();
            let transitioned = media.processing();
            let changed = transitioned.status() != before;
            *slot = Some(transitioned);
            if changed {
                self.touch();
            }
        }
    }

    /// Apply the encoding-completion signal to an audio-video slot.
    pub fn complete_media(&mut self, media_type: MediaType, encoded_location: &str) {
        let slot = match media_type {
            MediaType::Video => &mut self.video,
            MediaType::Trailer => &mut self.trailer,
            _ => return,
        };
        if let Some(media) = slot.take() {
            let before = media.status();
            let transitioned = media.completed(encoded_location);
            let changed = transitioned.status() != before;
            *slot = Some(transitioned);
            if changed {
                self.touch();
            }
        }
    }

    // ============================================================================================
    // QUERIES (Read-only)
    // ============================================================================================

    pub fn id(&self) -> VideoId {
        self.id
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn launched_at(&self) -> Option<i32> {
        self.launched_at
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn opened(&self) -> bool {
        self.opened
    }

    pub fn published(&self) -> bool {
        self.published
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    pub fn video(&self) -> Option<&AudioVideoMedia> {
        self.video.as_ref()
    }

    pub fn trailer(&self) -> Option<&AudioVideoMedia> {
        self.trailer.as_ref()
    }

    pub fn banner(&self) -> Option<&ImageMedia> {
        self.banner.as_ref()
    }

    pub fn thumbnail(&self) -> Option<&ImageMedia> {
        self.thumbnail.as_ref()
    }

    pub fn thumbnail_half(&self) -> Option<&ImageMedia> {
        self.thumbnail_half.as_ref()
    }

    pub fn categories(&self) -> &HashSet<CategoryId> {
        &self.categories
    }

    pub fn genres(&self) -> &HashSet<GenreId> {
        &self.genres
    }

    pub fn cast_members(&self) -> &HashSet<CastMemberId> {
        &self.cast_members
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}
