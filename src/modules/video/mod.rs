pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::ports::{
    MediaResourceGateway, ReferenceGateway, SortDirection, SortField, VideoPreview,
    VideoRepository, VideoSearchQuery,
};
pub use domain::aggregates::video_aggregate::Video;
pub use domain::value_objects::{
    AudioVideoMedia, ImageMedia, MediaStatus, MediaType, Rating, Resource, VideoId,
};
