pub mod audio_video_media;
pub mod image_media;
pub mod media_status;
pub mod media_type;
pub mod rating;
pub mod resource;
pub mod video_id;

pub use audio_video_media::AudioVideoMedia;
pub use image_media::ImageMedia;
pub use media_status::MediaStatus;
pub use media_type::MediaType;
pub use rating::Rating;
pub use resource::Resource;
pub use video_id::VideoId;
