pub mod media_resource_gateway;
pub mod reference_gateway;
pub mod video_repository;

pub use media_resource_gateway::MediaResourceGateway;
pub use reference_gateway::ReferenceGateway;
pub use video_repository::{
    SortDirection, SortField, VideoPreview, VideoRepository, VideoSearchQuery,
};
